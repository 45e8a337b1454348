/// # Test Utilities Module
///
/// Fixtures for unit tests: throwaway catalog files and a standard set of
/// sample books.

use crate::catalog::{Catalog, NewBook};
use crate::core::db::Store;
use std::env::temp_dir;
use std::path::PathBuf;
use uuid::Uuid;

/// Path to a database file that does not exist yet
pub fn temp_db_path() -> PathBuf {
    let mut path = temp_dir();
    path.push(format!("tuishelf_test_{}.db", Uuid::new_v4()));
    path
}

/// Shorthand for building a `NewBook`
pub fn sample_book(
    title: &str,
    author: &str,
    year: Option<i32>,
    genre: &str,
    read: bool,
) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: author.to_string(),
        publication_year: year,
        genre: Some(genre.to_string()),
        read_status: read,
    }
}

/// Isolated catalog backed by its own temporary file
pub struct CatalogFixture {
    pub path: PathBuf,
    pub catalog: Catalog,
}

impl CatalogFixture {
    /// Create an empty catalog
    pub fn new() -> Self {
        let path = temp_db_path();
        let catalog = Catalog::open(&path).expect("open test catalog");
        CatalogFixture { path, catalog }
    }

    /// Create a catalog holding the standard sample books
    pub fn with_sample_data() -> Self {
        let fixture = Self::new();
        for book in sample_books() {
            fixture.catalog.add_book(&book).expect("insert sample book");
        }
        fixture
    }

    /// Raw store over the same file, for poking at rows directly
    pub fn store(&self) -> Store {
        Store::open(&self.path).expect("reopen test store")
    }
}

impl Drop for CatalogFixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Four books, three of them read
pub fn sample_books() -> Vec<NewBook> {
    vec![
        sample_book("Dune", "Frank Herbert", Some(1965), "Sci-Fi", true),
        sample_book("Emma", "Jane Austen", Some(1815), "Romance", true),
        sample_book("Neuromancer", "William Gibson", Some(1984), "sci-fi", false),
        sample_book("Beowulf", "Unknown", None, "Epic", true),
    ]
}
