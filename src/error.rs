//! Error types for the daily planner
//!
//! Item construction reports [`ValidationError`]; everything else in the
//! library (tracker lookups and file persistence) reports [`Error`].

use thiserror::Error;

/// Reasons an item cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace-only.
    #[error("Task title cannot be empty.")]
    EmptyTitle,

    /// A date/time string could not be parsed as ISO-8601.
    #[error("Invalid date format '{input}'. Use YYYY-MM-DD")]
    InvalidDate { input: String },
}

/// Errors that can occur during planner operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An item failed validation (construction or reconstruction from a record).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested item is not held by the tracker.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for planner operations.
pub type Result<T> = std::result::Result<T, Error>;
