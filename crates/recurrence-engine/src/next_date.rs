//! Next-date calculation -- advances a date by one recurrence step.
//!
//! Daily and weekly steps use full calendar arithmetic. Monthly and yearly
//! steps only touch the month or year component and keep the day verbatim, so
//! `2024-01-31` plus one month is `2024-02-31`. Deciding whether such a date is
//! admissible is the job of [`crate::validity`], not this module.

use chrono::Days;
use tracing::warn;

use crate::date::CalendarDate;
use crate::frequency::{effective_interval, Frequency};

/// Advance `date` by `interval` units of `frequency`.
///
/// An `interval` of 0 is treated as 1. `Frequency::None` returns the date
/// unchanged. If the result would fall outside the representable range the
/// input is returned as-is rather than panicking.
pub fn advance(date: CalendarDate, frequency: Frequency, interval: u32) -> CalendarDate {
    let interval = interval.max(1);

    match frequency {
        Frequency::None => date,
        Frequency::Daily => add_days(date, u64::from(interval)),
        Frequency::Weekly => add_days(date, u64::from(interval) * 7),
        Frequency::Monthly => {
            let months = i64::from(date.month() - 1) + i64::from(interval);
            let year = i64::from(date.year()) + months.div_euclid(12);
            let month = (months.rem_euclid(12) + 1) as u32;
            match i32::try_from(year) {
                Ok(year) => CalendarDate::from_parts(year, month, date.day()),
                Err(_) => date,
            }
        }
        Frequency::Yearly => {
            let step = i32::try_from(interval).unwrap_or(i32::MAX);
            match date.year().checked_add(step) {
                Some(year) => CalendarDate::from_parts(year, date.month(), date.day()),
                None => date,
            }
        }
    }
}

fn add_days(date: CalendarDate, days: u64) -> CalendarDate {
    date.normalized()
        .and_then(|d| d.checked_add_days(Days::new(days)))
        .map(CalendarDate::from)
        .unwrap_or(date)
}

/// Compute the next candidate date for a `YYYY-MM-DD` string.
///
/// String-level counterpart of [`advance`]. Non-positive intervals are coerced
/// to 1. The result may name a day that does not exist (e.g. `2025-02-31`).
/// An unparseable input is logged and returned unchanged.
///
/// ```
/// use recurrence_engine::{calculate_next_date, Frequency};
///
/// assert_eq!(calculate_next_date("2025-01-30", Frequency::Daily, 5), "2025-02-04");
/// assert_eq!(calculate_next_date("2025-11-15", Frequency::Monthly, 2), "2026-01-15");
/// assert_eq!(calculate_next_date("2024-01-31", Frequency::Monthly, 1), "2024-02-31");
/// ```
pub fn calculate_next_date(current_date: &str, frequency: Frequency, interval: i64) -> String {
    match current_date.parse::<CalendarDate>() {
        Ok(date) => advance(date, frequency, effective_interval(interval)).to_string(),
        Err(err) => {
            warn!(%err, "cannot advance unparseable date");
            current_date.to_string()
        }
    }
}
