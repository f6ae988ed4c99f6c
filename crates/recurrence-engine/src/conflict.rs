//! Detect overlapping occurrences.
//!
//! Two occurrences conflict when they fall on the same calendar date and their
//! `[startTime, endTime)` ranges overlap. Adjacent events (one ends exactly when
//! the other starts) are NOT conflicts.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::event::Event;

/// A detected conflict between two occurrences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub event_a: Event,
    pub event_b: Event,
    pub overlap_minutes: i64,
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// The concrete time span of an occurrence.
///
/// `None` when the date does not exist (e.g. an unvalidated `2025-02-31`), a
/// time is not `HH:MM`, or the end is not after the start.
pub fn time_span(event: &Event) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let date = event.date().to_naive()?;
    let start = parse_time(&event.template.start_time)?;
    let end = parse_time(&event.template.end_time)?;
    (start < end).then(|| (date.and_time(start), date.and_time(end)))
}

fn spans(events: &[Event]) -> Vec<(&Event, NaiveDateTime, NaiveDateTime)> {
    events
        .iter()
        .filter_map(|e| match time_span(e) {
            Some((start, end)) => Some((e, start, end)),
            None => {
                debug!(id = %e.id, date = %e.date(), "ignoring event without a usable time span");
                None
            }
        })
        .collect()
}

fn overlap(
    a: (NaiveDateTime, NaiveDateTime),
    b: (NaiveDateTime, NaiveDateTime),
) -> Option<i64> {
    // Two intervals overlap iff a.start < b.end AND b.start < a.end.
    // This excludes the adjacent case where a.end == b.start.
    (a.0 < b.1 && b.0 < a.1).then(|| (a.1.min(b.1) - a.0.max(b.0)).num_minutes())
}

/// Find all pairwise conflicts between two occurrence lists.
///
/// Pairs with the same id are the same event and are skipped.
pub fn find_conflicts(events_a: &[Event], events_b: &[Event]) -> Vec<Conflict> {
    let spans_b = spans(events_b);
    let mut conflicts = Vec::new();

    for (a, a_start, a_end) in spans(events_a) {
        for &(b, b_start, b_end) in &spans_b {
            if a.id == b.id {
                continue;
            }
            if let Some(overlap_minutes) = overlap((a_start, a_end), (b_start, b_end)) {
                conflicts.push(Conflict {
                    event_a: a.clone(),
                    event_b: b.clone(),
                    overlap_minutes,
                });
            }
        }
    }

    conflicts
}

/// Find conflicts among the occurrences of a single list, reporting each
/// unordered pair once in list order.
pub fn find_conflicts_within(events: &[Event]) -> Vec<Conflict> {
    let spans = spans(events);
    let mut conflicts = Vec::new();

    for (i, &(a, a_start, a_end)) in spans.iter().enumerate() {
        for &(b, b_start, b_end) in &spans[i + 1..] {
            if a.id == b.id {
                continue;
            }
            if let Some(overlap_minutes) = overlap((a_start, a_end), (b_start, b_end)) {
                conflicts.push(Conflict {
                    event_a: a.clone(),
                    event_b: b.clone(),
                    overlap_minutes,
                });
            }
        }
    }

    conflicts
}
