/// Core Module for tuishelf
///
/// This module contains the shared infrastructure the catalog and the UI
/// build on: storage access and error handling.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, ShelfError};
