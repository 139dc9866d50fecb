//! Error types for tz-temporal operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error(
        "Conflicting timezone specification: the datetime is already timezone-aware \
         and an explicit timezone was also provided"
    )]
    ConflictingTimezoneSpecification,

    #[error("Missing timestamp: either a timestamp in seconds or in milliseconds must be provided")]
    MissingTimestampArgument,

    #[error("Conflicting timestamps: cannot provide both a timestamp in seconds and in milliseconds")]
    ConflictingTimestampArguments,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, TemporalError>;
