//! Event templates and the concrete occurrences expanded from them.
//!
//! Field names follow the JSON shape used by the calendar front end (camelCase,
//! `repeat.type` for the frequency tag), so templates and occurrences can be
//! passed straight through to a store.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::frequency::{effective_interval, Frequency};

/// How an event repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatSpec {
    #[serde(rename = "type")]
    pub frequency: Frequency,
    /// Units between occurrences. Values <= 0 are read as 1.
    #[serde(default = "default_interval")]
    pub interval: i64,
    /// Inclusive last date of the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<CalendarDate>,
    /// Series identifier shared by every occurrence of one expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

fn default_interval() -> i64 {
    1
}

impl RepeatSpec {
    /// A repeat rule with no end date and no series id.
    pub fn new(frequency: Frequency, interval: i64) -> Self {
        Self {
            frequency,
            interval,
            end_date: None,
            id: None,
        }
    }

    /// A rule for a one-off event.
    pub fn none() -> Self {
        Self::new(Frequency::None, 1)
    }

    pub fn until(mut self, end_date: CalendarDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn effective_interval(&self) -> u32 {
        effective_interval(self.interval)
    }
}

impl Default for RepeatSpec {
    fn default() -> Self {
        Self::none()
    }
}

/// The fields of one event before it has been given an id and expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    pub title: String,
    pub date: CalendarDate,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatSpec,
    /// Reminder lead time in minutes.
    #[serde(default)]
    pub notification_time: u32,
}

/// One concrete, schedulable occurrence.
///
/// Serialized as the template fields with an `id` alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub template: EventTemplate,
}

impl Event {
    pub fn date(&self) -> CalendarDate {
        self.template.date
    }

    pub fn repeat(&self) -> &RepeatSpec {
        &self.template.repeat
    }

    /// The series this occurrence belongs to, if any.
    pub fn series_id(&self) -> Option<&str> {
        self.template.repeat.id.as_deref()
    }
}

/// Occurrences of the recurring series `series_id`, in their original order.
///
/// One-off events are never series members even if they carry a series id.
pub fn series_members<'a>(events: &'a [Event], series_id: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| e.repeat().frequency.repeats() && e.series_id() == Some(series_id))
        .collect()
}
