/// Schema Module
///
/// Holds the catalog's table definition. There are no migrations; the table
/// is created once and never altered.
use rusqlite::Connection;
use tracing::debug;

/// Name of the single table holding the catalog
const BOOKS_TABLE: &str = "books";

/// `publication_year` and `genre` are nullable, `read_status` is stored as
/// SQLite's integer-backed BOOLEAN.
const BOOKS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    publication_year INTEGER,
    genre TEXT,
    read_status BOOLEAN
)"#;

/// Creates the `books` table if it does not exist yet.
///
/// Safe to call any number of times; an existing table and its rows are left
/// untouched.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(BOOKS_TABLE_SQL, [])?;
    debug!("Ensured schema for table {}", BOOKS_TABLE);
    Ok(())
}
