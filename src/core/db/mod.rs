/// Database Module
///
/// This module provides the storage accessor for the catalog file.
///
/// ## Architecture
///
/// - **Connection Management** (`connection.rs`): opens one connection per
///   operation and releases it on every path
/// - **Schema** (`schema.rs`): creates the `books` table when it is missing
///
/// ## Error Handling
///
/// All database operations use the standardized `ShelfError` type.
pub mod connection;
pub mod schema;

pub use connection::*;
pub use schema::*;
