//! Property-based tests for catalog operations
//!
//! These tests verify, over generated catalogs, that:
//! - Statistics always agree with the rows that were inserted
//! - Title search behaves as an ASCII case-insensitive literal substring match
//! - Removing by title drops exactly the matching rows

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tempfile::TempDir;
    use tuishelf::catalog::{Catalog, NewBook, SearchField};

    // Test infrastructure

    fn open_catalog() -> (TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::open(dir.path().join("library.db")).unwrap();
        (dir, catalog)
    }

    fn new_book(title: &str, read: bool) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Author".to_string(),
            publication_year: None,
            genre: Some("Genre".to_string()),
            read_status: read,
        }
    }

    /// Titles drawn from a small alphabet so collisions and LIKE wildcards
    /// show up often.
    fn arb_title() -> impl Strategy<Value = String> {
        "[abAB%_ ]{1,8}".prop_map(|s: String| s)
    }

    fn arb_term() -> impl Strategy<Value = String> {
        "[abAB%_]{0,3}".prop_map(|s: String| s)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn stats_match_inserted_rows(flags in prop::collection::vec(any::<bool>(), 0..12)) {
            let (_dir, catalog) = open_catalog();
            for (i, read) in flags.iter().enumerate() {
                catalog.add_book(&new_book(&format!("Book {}", i), *read)).unwrap();
            }

            let stats = catalog.compute_statistics().unwrap();
            let read = flags.iter().filter(|r| **r).count() as u64;
            prop_assert_eq!(stats.total, flags.len() as u64);
            prop_assert_eq!(stats.read, read);
            prop_assert_eq!(stats.unread, stats.total - stats.read);
            if stats.total == 0 {
                prop_assert_eq!(stats.percent_read, 0.0);
            } else {
                let expected = read as f64 / flags.len() as f64 * 100.0;
                prop_assert!((stats.percent_read - expected).abs() < 1e-9);
                prop_assert!((0.0..=100.0).contains(&stats.percent_read));
            }
        }

        #[test]
        fn title_search_is_literal_case_insensitive_substring(
            titles in prop::collection::vec(arb_title(), 1..8),
            term in arb_term(),
        ) {
            let (_dir, catalog) = open_catalog();
            for title in &titles {
                catalog.add_book(&new_book(title, false)).unwrap();
            }

            let needle = term.to_ascii_lowercase();
            let expected: Vec<String> = titles
                .iter()
                .filter(|t| t.to_ascii_lowercase().contains(&needle))
                .cloned()
                .collect();
            let found: Vec<String> = catalog
                .search_books(&term, SearchField::Title)
                .unwrap()
                .into_iter()
                .map(|b| b.title)
                .collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn remove_by_title_drops_exactly_the_matches(
            titles in prop::collection::vec(prop_oneof![Just("Dune"), Just("Emma"), Just("Ulysses")], 0..10),
            target in prop_oneof![Just("Dune"), Just("Emma"), Just("Missing")],
        ) {
            let (_dir, catalog) = open_catalog();
            for title in &titles {
                catalog.add_book(&new_book(title, true)).unwrap();
            }

            let matching = titles.iter().filter(|t| **t == target).count();
            let before = catalog.compute_statistics().unwrap().total;
            let removed = catalog.remove_book(target).unwrap();
            let after = catalog.compute_statistics().unwrap().total;

            prop_assert_eq!(removed, matching);
            prop_assert_eq!(before - after, matching as u64);
            prop_assert!(catalog.titled_ids(target).unwrap().is_empty());
        }
    }
}
