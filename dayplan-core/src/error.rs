//! Error types for the dayplan ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

use crate::event::Event;

/// Errors from configuration, I/O and serialization.
#[derive(Error, Debug)]
pub enum DayplanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for dayplan operations.
pub type DayplanResult<T> = Result<T, DayplanError>;

/// An event that cannot be scheduled as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event name is required")]
    EmptyName,

    #[error("Invalid time '{0}'. Expected HH:MM (00:00 to 23:59)")]
    InvalidTime(String),

    #[error("Start time {start} must be earlier than end time {end}")]
    StartNotBeforeEnd { start: String, end: String },
}

/// Errors returned by event store mutations. The store is unchanged whenever
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Event overlaps with {conflicting}")]
    Overlap {
        /// The already scheduled event the new interval collides with
        conflicting: Event,
        /// Position of `conflicting` in its day bucket
        index: usize,
    },

    #[error("No event at index {index} on {date} (day has {len})")]
    Index {
        date: NaiveDate,
        index: usize,
        len: usize,
    },
}

/// A snapshot document that is not a well-formed date -> events mapping.
///
/// `load` recovers from this by starting empty; `import_json` hands it back.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("Invalid event on {date} at index {index}: {source}")]
    InvalidEvent {
        date: NaiveDate,
        index: usize,
        source: ValidationError,
    },

    #[error("Events {first} and {second} on {date} overlap")]
    Overlapping {
        date: NaiveDate,
        first: usize,
        second: usize,
    },
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Malformed(e.to_string())
    }
}
