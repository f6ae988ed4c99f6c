//! Occurrence validation -- decides whether a candidate date belongs to a series.
//!
//! Daily and weekly candidates are produced by real calendar arithmetic, so they
//! are always admissible. Monthly and yearly candidates keep the anchor's
//! day-of-month verbatim and must be checked: the candidate has to reconstruct
//! as a real date and must land on the anchor's day (and month, for yearly).

use crate::date::CalendarDate;
use crate::frequency::Frequency;

/// Typed form of [`is_valid_occurrence_date`].
pub fn is_valid_occurrence(
    original: CalendarDate,
    candidate: CalendarDate,
    frequency: Frequency,
) -> bool {
    match frequency {
        Frequency::Daily | Frequency::Weekly => true,
        Frequency::Monthly => {
            original.is_real() && candidate.is_real() && candidate.day() == original.day()
        }
        Frequency::Yearly => {
            original.is_real()
                && candidate.is_real()
                && candidate.month() == original.month()
                && candidate.day() == original.day()
        }
        Frequency::None => false,
    }
}

/// Whether `candidate_date` is an admissible occurrence of a series anchored at
/// `original_date`.
///
/// Malformed date strings are never admissible for monthly or yearly series.
///
/// ```
/// use recurrence_engine::{is_valid_occurrence_date, Frequency};
///
/// assert!(!is_valid_occurrence_date("2025-01-31", "2025-04-31", Frequency::Monthly));
/// assert!(is_valid_occurrence_date("2020-02-29", "2024-02-29", Frequency::Yearly));
/// assert!(!is_valid_occurrence_date("2020-02-29", "2021-02-29", Frequency::Yearly));
/// ```
pub fn is_valid_occurrence_date(
    original_date: &str,
    candidate_date: &str,
    frequency: Frequency,
) -> bool {
    if matches!(frequency, Frequency::Daily | Frequency::Weekly) {
        return true;
    }

    match (
        original_date.parse::<CalendarDate>(),
        candidate_date.parse::<CalendarDate>(),
    ) {
        (Ok(original), Ok(candidate)) => is_valid_occurrence(original, candidate, frequency),
        _ => false,
    }
}
