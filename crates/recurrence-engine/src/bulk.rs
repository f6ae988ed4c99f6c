//! Bulk-save preparation.
//!
//! Builds the `{"events": [...]}` payload a store accepts when several events
//! are saved at once. Recurring templates are expanded into their occurrences.
//! One-off templates go through untouched and without an id, because the store
//! assigns ids to new events itself.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{Event, EventTemplate};
use crate::expander::RecurrenceExpander;
use crate::id::IdGenerator;

/// One entry of a bulk-save payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PendingEvent {
    /// An expanded occurrence carrying its own id.
    Occurrence(Event),
    /// A one-off event the store has not seen yet.
    Draft(EventTemplate),
}

impl PendingEvent {
    pub fn template(&self) -> &EventTemplate {
        match self {
            PendingEvent::Occurrence(event) => &event.template,
            PendingEvent::Draft(template) => template,
        }
    }
}

/// Request body for saving a list of events.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<PendingEvent>,
}

impl<G: IdGenerator> RecurrenceExpander<G> {
    /// Prepare `templates` for a single bulk save, preserving their order.
    pub fn prepare_bulk_save(&self, templates: &[EventTemplate]) -> EventList {
        let mut events = Vec::new();

        for template in templates {
            if template.repeat.frequency.repeats() {
                events.extend(self.expand(template).into_iter().map(PendingEvent::Occurrence));
            } else {
                events.push(PendingEvent::Draft(template.clone()));
            }
        }

        debug!(
            templates = templates.len(),
            events = events.len(),
            "prepared bulk save"
        );
        EventList { events }
    }
}
