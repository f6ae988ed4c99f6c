//! Recurrence expansion -- turns one event template into its concrete occurrences.
//!
//! The expander repeatedly advances from the anchor date with
//! [`crate::next_date::advance`] and, for bounded series, filters candidates
//! through [`crate::validity::is_valid_occurrence`]. Every occurrence of one
//! expansion shares a freshly generated series id and gets its own unique id.

use tracing::{debug, instrument, trace, warn};

use crate::config::ExpansionConfig;
use crate::date::CalendarDate;
use crate::event::{Event, EventTemplate};
use crate::frequency::Frequency;
use crate::id::{IdGenerator, TempIdGenerator};
use crate::next_date::advance;
use crate::validity::is_valid_occurrence;

/// Expands event templates under a fixed [`ExpansionConfig`].
#[derive(Debug, Clone, Default)]
pub struct RecurrenceExpander<G = TempIdGenerator> {
    config: ExpansionConfig,
    ids: G,
}

impl RecurrenceExpander {
    /// An expander that issues random `temp-` ids.
    pub fn new(config: ExpansionConfig) -> Self {
        Self {
            config,
            ids: TempIdGenerator,
        }
    }
}

impl<G: IdGenerator> RecurrenceExpander<G> {
    pub fn with_id_generator(config: ExpansionConfig, ids: G) -> Self {
        Self { config, ids }
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand `template` using the configured occurrence cap.
    pub fn expand(&self, template: &EventTemplate) -> Vec<Event> {
        self.expand_capped(template, self.config.max_occurrences)
    }

    /// Expand `template`, examining at most `max_occurrences` candidate dates.
    ///
    /// - `Frequency::None` yields exactly one occurrence on the template date.
    /// - Without an end date, exactly `max_occurrences` occurrences are produced
    ///   and no candidate is validated. A monthly series anchored on the 31st
    ///   therefore contains dates such as `2025-02-31`.
    /// - With an end date, the end date is first clamped to the configured
    ///   ceiling. An end date before the anchor gives an empty list. Otherwise
    ///   candidates up to the end date are validated and invalid ones skipped.
    ///   Skipped candidates still count against `max_occurrences`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            frequency = %template.repeat.frequency,
            anchor = %template.date,
            interval = template.repeat.interval,
        )
    )]
    pub fn expand_capped(&self, template: &EventTemplate, max_occurrences: usize) -> Vec<Event> {
        let repeat = &template.repeat;

        let events = match (repeat.frequency, repeat.end_date) {
            (Frequency::None, _) => {
                let series_id = self.ids.next_id();
                vec![self.occurrence(template, template.date, &series_id, repeat.end_date)]
            }
            (_, None) => self.expand_unbounded(template, max_occurrences),
            (_, Some(end_date)) => self.expand_until(template, end_date, max_occurrences),
        };

        debug!(count = events.len(), "expansion finished");
        events
    }

    fn expand_unbounded(&self, template: &EventTemplate, max_occurrences: usize) -> Vec<Event> {
        let repeat = &template.repeat;
        let interval = repeat.effective_interval();
        let series_id = self.ids.next_id();

        let mut events = Vec::with_capacity(max_occurrences);
        let mut current = template.date;
        for _ in 0..max_occurrences {
            events.push(self.occurrence(template, current, &series_id, None));
            current = advance(current, repeat.frequency, interval);
        }
        events
    }

    fn expand_until(
        &self,
        template: &EventTemplate,
        end_date: CalendarDate,
        max_occurrences: usize,
    ) -> Vec<Event> {
        let repeat = &template.repeat;
        let interval = repeat.effective_interval();
        let ceiling = self.config.end_date_ceiling;

        let end_date = if end_date > ceiling {
            warn!(%end_date, %ceiling, "end date clamped to ceiling");
            ceiling
        } else {
            end_date
        };

        if end_date < template.date {
            debug!(%end_date, "end date precedes anchor, nothing to expand");
            return Vec::new();
        }

        let series_id = self.ids.next_id();
        let mut events = Vec::new();
        let mut current = template.date;
        let mut attempts = 0;

        while attempts < max_occurrences && current <= end_date {
            if is_valid_occurrence(template.date, current, repeat.frequency) {
                events.push(self.occurrence(template, current, &series_id, Some(end_date)));
            } else {
                trace!(candidate = %current, "skipping date missing from its month");
            }
            current = advance(current, repeat.frequency, interval);
            attempts += 1;
        }

        events
    }

    fn occurrence(
        &self,
        template: &EventTemplate,
        date: CalendarDate,
        series_id: &str,
        end_date: Option<CalendarDate>,
    ) -> Event {
        let mut fields = template.clone();
        fields.date = date;
        fields.repeat.end_date = end_date;
        fields.repeat.id = Some(series_id.to_string());

        Event {
            id: self.ids.next_id(),
            template: fields,
        }
    }
}

/// Expand `template` with the default ceiling and random ids.
///
/// `max_occurrences` defaults to [`crate::DEFAULT_MAX_OCCURRENCES`].
pub fn generate_recurring_events(
    template: &EventTemplate,
    max_occurrences: Option<usize>,
) -> Vec<Event> {
    let expander = RecurrenceExpander::new(ExpansionConfig::default());
    match max_occurrences {
        Some(cap) => expander.expand_capped(template, cap),
        None => expander.expand(template),
    }
}
