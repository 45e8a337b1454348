/// Tuishelf Error Module
///
/// This module defines the error types for the tuishelf application.
/// Storage faults are propagated unmodified, input problems are reported
/// before anything reaches the database.
use thiserror::Error;

/// Error type for the tuishelf application.
///
/// This enum covers the error scenarios that can occur within tuishelf:
/// - Database operations against the catalog file
/// - Validation of form input
/// - Ambiguous title-keyed removals
/// - Configuration loading
/// - UI operations and export formats
/// - File system operations
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Database-related errors from SQLite operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Missing or malformed user input
    #[error("{0}")]
    Validation(String),

    /// A title matched more than one book where a single book was expected
    #[error("{count} books are titled '{title}'")]
    AmbiguousTitle { title: String, count: usize },

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// UI-related errors (export formats, terminal setup)
    #[error("UI error: {0}")]
    Ui(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result to use ShelfError as the error type.
pub type Result<T> = std::result::Result<T, ShelfError>;
