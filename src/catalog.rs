//! Catalog operations over the `books` table.
//!
//! Every operation goes through [`Store::with_connection`], so each call opens
//! its own connection, runs one statement with bound parameters and closes
//! the connection again.

use crate::core::db::Store;
use crate::core::{Result, ShelfError};
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

const SELECT_BOOKS: &str =
    "SELECT id, title, author, publication_year, genre, read_status FROM books";

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
    pub read_status: bool,
}

impl Book {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            publication_year: row.get(3)?,
            genre: row.get(4)?,
            read_status: row.get::<_, Option<bool>>(5)?.unwrap_or(false),
        })
    }

    /// Year for display, `n.d.` when unknown.
    pub fn year_label(&self) -> String {
        self.publication_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "n.d.".to_string())
    }

    /// Genre for display, `-` when unknown.
    pub fn genre_label(&self) -> &str {
        self.genre.as_deref().unwrap_or("-")
    }

    /// One-line summary: `Title by Author (Year) - Genre`.
    pub fn summary(&self) -> String {
        format!(
            "{} by {} ({}) - {}",
            self.title,
            self.author,
            self.year_label(),
            self.genre_label()
        )
    }
}

/// The fields of a book that callers supply; the id is assigned by storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: Option<i32>,
    pub genre: Option<String>,
    pub read_status: bool,
}

/// Column a search is restricted to.
///
/// Only these columns can be searched; the mapping to SQL identifiers is
/// fixed and never built from caller text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Genre,
        SearchField::Year,
    ];

    /// SQL column identifier.
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
            SearchField::Year => "publication_year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Genre => "Genre",
            SearchField::Year => "Year",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchField {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            "year" | "publication_year" => Ok(SearchField::Year),
            other => Err(ShelfError::Validation(format!(
                "Unknown search field: '{}'. Expected one of: title, author, genre, year",
                other
            ))),
        }
    }
}

/// Summary counts over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStats {
    pub total: u64,
    pub read: u64,
    pub unread: u64,
    pub percent_read: f64,
}

impl CatalogStats {
    /// Derives unread count and read percentage from the two raw counts.
    pub fn from_counts(total: u64, read: u64) -> Self {
        let percent_read = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        CatalogStats {
            total,
            read,
            unread: total.saturating_sub(read),
            percent_read,
        }
    }
}

/// Escapes LIKE wildcards so `term` only ever matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// The personal library catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Store,
}

impl Catalog {
    /// Opens the catalog stored at `path`, creating the file and table when
    /// needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Store::open(path)?;
        info!("Opened catalog at {:?}", store.path());
        Ok(Catalog { store })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Inserts a new book and returns the id storage assigned to it.
    ///
    /// Required fields are checked by the caller; storage only enforces that
    /// title and author are present.
    pub fn add_book(&self, book: &NewBook) -> Result<i64> {
        let id = self.store.with_connection(|conn| {
            conn.execute(
                "INSERT INTO books (title, author, publication_year, genre, read_status)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    book.title,
                    book.author,
                    book.publication_year,
                    book.genre,
                    book.read_status
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        info!("Added book {} '{}'", id, book.title);
        Ok(id)
    }

    /// Deletes every book whose title equals `title` exactly.
    ///
    /// Returns how many rows were removed; zero matches is not an error.
    pub fn remove_book(&self, title: &str) -> Result<usize> {
        let removed = self.store.with_connection(|conn| {
            conn.execute("DELETE FROM books WHERE title = ?1", params![title])
        })?;
        if removed > 1 {
            warn!("Removed {} books sharing the title '{}'", removed, title);
        } else {
            info!("Removed {} book(s) titled '{}'", removed, title);
        }
        Ok(removed)
    }

    /// Deletes the book with `id`. Returns false when no such book exists.
    pub fn remove_book_by_id(&self, id: i64) -> Result<bool> {
        let removed = self
            .store
            .with_connection(|conn| conn.execute("DELETE FROM books WHERE id = ?1", params![id]))?;
        info!("Removed book {} ({} row)", id, removed);
        Ok(removed > 0)
    }

    /// Ids of every book whose title equals `title` exactly.
    pub fn titled_ids(&self, title: &str) -> Result<Vec<i64>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id FROM books WHERE title = ?1 ORDER BY id")?;
            let ids = stmt.query_map(params![title], |row| row.get(0))?;
            ids.collect()
        })
    }

    /// Resolves `title` to the id of the single book carrying it.
    ///
    /// `Ok(None)` when nothing matches, `ShelfError::AmbiguousTitle` when
    /// several books share the title.
    pub fn resolve_title(&self, title: &str) -> Result<Option<i64>> {
        let ids = self.titled_ids(title)?;
        match ids.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(ShelfError::AmbiguousTitle {
                title: title.to_string(),
                count: ids.len(),
            }),
        }
    }

    /// Replaces every mutable field of the book with `id`.
    ///
    /// Returns false, without error, when no book has that id.
    pub fn update_book(&self, id: i64, book: &NewBook) -> Result<bool> {
        let changed = self.store.with_connection(|conn| {
            conn.execute(
                "UPDATE books
                 SET title = ?1, author = ?2, publication_year = ?3, genre = ?4, read_status = ?5
                 WHERE id = ?6",
                params![
                    book.title,
                    book.author,
                    book.publication_year,
                    book.genre,
                    book.read_status,
                    id
                ],
            )
        })?;
        if changed == 0 {
            debug!("Update of book {} matched no rows", id);
        } else {
            info!("Updated book {}", id);
        }
        Ok(changed > 0)
    }

    /// Case-insensitive substring search restricted to `field`.
    ///
    /// Wildcard characters in `term` are matched literally. An empty term
    /// matches every book whose `field` is set.
    pub fn search_books(&self, term: &str, field: SearchField) -> Result<Vec<Book>> {
        let sql = format!(
            "{} WHERE {} LIKE ?1 ESCAPE '\\' ORDER BY id",
            SELECT_BOOKS,
            field.column()
        );
        let pattern = like_pattern(term);
        let books = self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![pattern], Book::from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })?;
        debug!(
            "Search for '{}' in {} matched {} book(s)",
            term,
            field.column(),
            books.len()
        );
        Ok(books)
    }

    /// Every book in the catalog, in insertion order.
    pub fn list_books(&self) -> Result<Vec<Book>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_BOOKS))?;
            let rows = stmt.query_map([], Book::from_row)?;
            rows.collect()
        })
    }

    /// The book with `id`, if any.
    pub fn get_book(&self, id: i64) -> Result<Option<Book>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_BOOKS))?;
            let mut rows = stmt.query_map(params![id], Book::from_row)?;
            rows.next().transpose()
        })
    }

    /// Total, read and unread counts plus the read percentage.
    pub fn compute_statistics(&self) -> Result<CatalogStats> {
        let (total, read): (i64, i64) = self.store.with_connection(|conn| {
            conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(CASE WHEN read_status = 1 THEN 1 ELSE 0 END), 0)
                 FROM books",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
        })?;
        Ok(CatalogStats::from_counts(total as u64, read as u64))
    }
}
