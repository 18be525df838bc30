//! Error types for availability resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// The query date could not be parsed, or its 7-day window runs past the
    /// representable calendar range.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The event source failed to produce events for the week.
    #[error("Event source error: {0}")]
    Source(String),
}

impl From<serde_json::Error> for AvailabilityError {
    fn from(err: serde_json::Error) -> Self {
        AvailabilityError::Source(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
