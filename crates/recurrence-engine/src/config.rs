//! Expansion limits.

use serde::Deserialize;

use crate::date::CalendarDate;
use crate::error::{EngineError, Result};

/// Default cap on generation attempts per expansion.
pub const DEFAULT_MAX_OCCURRENCES: usize = 1000;

/// Default latest date a bounded series may reach. Later end dates are clamped
/// to it, since the calendar views only render up to this day.
pub const DEFAULT_END_DATE_CEILING: CalendarDate = CalendarDate::from_parts(2025, 12, 31);

/// Limits applied by [`crate::RecurrenceExpander`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpansionConfig {
    /// Maximum number of candidate dates examined in one expansion.
    pub max_occurrences: usize,
    /// End dates after this day are clamped to it.
    pub end_date_ceiling: CalendarDate,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
            end_date_ceiling: DEFAULT_END_DATE_CEILING,
        }
    }
}

impl ExpansionConfig {
    /// Check that the limits can produce a series at all.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidConfig`] if `max_occurrences` is zero or the
    /// ceiling is not a real calendar date.
    pub fn validate(&self) -> Result<()> {
        if self.max_occurrences == 0 {
            return Err(EngineError::InvalidConfig(
                "max_occurrences must be at least 1".to_string(),
            ));
        }
        if !self.end_date_ceiling.is_real() {
            return Err(EngineError::InvalidConfig(format!(
                "end_date_ceiling {} is not a calendar date",
                self.end_date_ceiling
            )));
        }
        Ok(())
    }
}
