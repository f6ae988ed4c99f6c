//! # recurrence-engine
//!
//! Deterministic expansion of recurring calendar events.
//!
//! A single event template with a daily, weekly, monthly or yearly repeat rule
//! is expanded into concrete occurrences. Month-length and leap-year
//! irregularities are handled by advancing naively and then rejecting dates
//! that do not exist, so a series on the 31st skips short months and a series
//! on February 29th only lands in leap years.
//!
//! ## Modules
//!
//! - [`next_date`] — advance a date by one recurrence step
//! - [`validity`] — decide whether a candidate date belongs to a series
//! - [`expander`] — template → list of occurrences
//! - [`bulk`] — build a bulk-save payload from several templates
//! - [`conflict`] — detect overlapping occurrences
//! - [`date`], [`frequency`], [`event`] — data model
//! - [`config`] — occurrence cap and end-date ceiling
//! - [`id`] — pluggable id generation
//! - [`error`] — Error types

pub mod bulk;
pub mod config;
pub mod conflict;
pub mod date;
pub mod error;
pub mod event;
pub mod expander;
pub mod frequency;
pub mod id;
pub mod next_date;
pub mod validity;

pub use bulk::{EventList, PendingEvent};
pub use config::{ExpansionConfig, DEFAULT_END_DATE_CEILING, DEFAULT_MAX_OCCURRENCES};
pub use conflict::{find_conflicts, find_conflicts_within, Conflict};
pub use date::CalendarDate;
pub use error::EngineError;
pub use event::{series_members, Event, EventTemplate, RepeatSpec};
pub use expander::{generate_recurring_events, RecurrenceExpander};
pub use frequency::Frequency;
pub use id::{IdGenerator, SequentialIdGenerator, TempIdGenerator};
pub use next_date::{advance, calculate_next_date};
pub use validity::{is_valid_occurrence, is_valid_occurrence_date};
