//! Error types for recurrence-engine operations.
//!
//! Only parsing and configuration boundaries can fail. Date advancement,
//! occurrence validation and expansion are total functions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid frequency: {0} (expected none, daily, weekly, monthly or yearly)")]
    InvalidFrequency(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_names_expected_format() {
        let err = EngineError::InvalidDate("2025/01/01".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date: 2025/01/01 (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<EngineError>();
    }
}
