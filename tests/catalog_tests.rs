#[cfg(test)]
mod catalog_tests {
    use tempfile::TempDir;
    use tuishelf::catalog::{Catalog, NewBook, SearchField};

    fn open_catalog() -> (TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::open(dir.path().join("library.db")).unwrap();
        (dir, catalog)
    }

    fn book(title: &str, author: &str, year: Option<i32>, genre: &str, read: bool) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
            publication_year: year,
            genre: Some(genre.to_string()),
            read_status: read,
        }
    }

    #[test]
    fn test_add_then_list_has_one_new_entry() {
        let (_dir, catalog) = open_catalog();
        let first = catalog
            .add_book(&book("Emma", "Austen", Some(1815), "Romance", false))
            .unwrap();
        let before = catalog.list_books().unwrap();

        let id = catalog
            .add_book(&book("Dune", "Herbert", Some(1965), "Sci-Fi", true))
            .unwrap();
        let after = catalog.list_books().unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert_ne!(id, first);
        let added: Vec<_> = after.iter().filter(|b| b.id == id).collect();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].title, "Dune");
        assert_eq!(added[0].author, "Herbert");
    }

    #[test]
    fn test_remove_by_title_removes_every_match() {
        let (_dir, catalog) = open_catalog();
        for author in ["A", "B", "C"] {
            catalog
                .add_book(&book("Twins", author, None, "Misc", false))
                .unwrap();
        }
        catalog
            .add_book(&book("Other", "D", None, "Misc", false))
            .unwrap();

        assert_eq!(catalog.remove_book("Twins").unwrap(), 3);
        assert_eq!(catalog.compute_statistics().unwrap().total, 1);

        // Nothing left with that title: a no-op
        assert_eq!(catalog.remove_book("Twins").unwrap(), 0);
        assert_eq!(catalog.compute_statistics().unwrap().total, 1);
    }

    #[test]
    fn test_remove_title_is_exact_and_case_sensitive() {
        let (_dir, catalog) = open_catalog();
        catalog
            .add_book(&book("Dune", "Herbert", None, "Sci-Fi", false))
            .unwrap();
        assert_eq!(catalog.remove_book("dune").unwrap(), 0);
        assert_eq!(catalog.remove_book("Dun").unwrap(), 0);
        assert_eq!(catalog.remove_book("Dune").unwrap(), 1);
    }

    #[test]
    fn test_update_changes_only_target_row() {
        let (_dir, catalog) = open_catalog();
        let dune = catalog
            .add_book(&book("Dune", "Herbert", Some(1965), "Sci-Fi", false))
            .unwrap();
        let emma = catalog
            .add_book(&book("Emma", "Austen", Some(1815), "Romance", true))
            .unwrap();
        let emma_before = catalog.get_book(emma).unwrap().unwrap();

        let replacement = NewBook {
            title: "Dune Messiah".to_string(),
            author: "Frank Herbert".to_string(),
            publication_year: Some(1969),
            genre: None,
            read_status: true,
        };
        assert!(catalog.update_book(dune, &replacement).unwrap());

        let updated = catalog.get_book(dune).unwrap().unwrap();
        assert_eq!(updated.id, dune);
        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.author, "Frank Herbert");
        assert_eq!(updated.publication_year, Some(1969));
        assert_eq!(updated.genre, None);
        assert!(updated.read_status);

        assert_eq!(catalog.get_book(emma).unwrap().unwrap(), emma_before);
    }

    #[test]
    fn test_update_missing_id_changes_nothing() {
        let (_dir, catalog) = open_catalog();
        catalog
            .add_book(&book("Dune", "Herbert", Some(1965), "Sci-Fi", false))
            .unwrap();
        let before = catalog.list_books().unwrap();

        let changed = catalog
            .update_book(9999, &book("Ghost", "Nobody", None, "None", true))
            .unwrap();
        assert!(!changed);
        assert_eq!(catalog.list_books().unwrap(), before);
    }

    #[test]
    fn test_search_genre_is_case_insensitive_substring() {
        let (_dir, catalog) = open_catalog();
        catalog
            .add_book(&book("Dune", "Herbert", Some(1965), "Sci-Fi", true))
            .unwrap();
        catalog
            .add_book(&book("Neuromancer", "Gibson", Some(1984), "cyberpunk sci-fi", false))
            .unwrap();
        catalog
            .add_book(&book("Emma", "Austen", Some(1815), "Romance", true))
            .unwrap();
        catalog
            .add_book(&book("Physics", "Feynman", Some(1963), "SCIENCE", true))
            .unwrap();

        let titles: Vec<String> = catalog
            .search_books("Sci", SearchField::Genre)
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["Dune", "Neuromancer", "Physics"]);
    }

    #[test]
    fn test_search_is_restricted_to_one_field() {
        let (_dir, catalog) = open_catalog();
        catalog
            .add_book(&book("Herbert's Garden", "Smith", Some(2001), "Gardening", false))
            .unwrap();
        catalog
            .add_book(&book("Dune", "Herbert", Some(1965), "Sci-Fi", true))
            .unwrap();

        let by_author = catalog.search_books("herbert", SearchField::Author).unwrap();
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "Dune");

        let by_year = catalog.search_books("196", SearchField::Year).unwrap();
        assert_eq!(by_year.len(), 1);
        assert_eq!(by_year[0].title, "Dune");

        assert!(catalog
            .search_books("Nothing like it", SearchField::Title)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_search_wildcards_match_literally() {
        let (_dir, catalog) = open_catalog();
        catalog
            .add_book(&book("100% Organic", "Farmer", None, "Food", false))
            .unwrap();
        catalog
            .add_book(&book("1000 Recipes", "Cook", None, "Food", false))
            .unwrap();
        catalog
            .add_book(&book("snake_case", "Coder", None, "Tech", false))
            .unwrap();

        let percent = catalog.search_books("100%", SearchField::Title).unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].title, "100% Organic");

        let underscore = catalog.search_books("e_c", SearchField::Title).unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].title, "snake_case");
    }

    #[test]
    fn test_statistics_empty_and_populated() {
        let (_dir, catalog) = open_catalog();
        let empty = catalog.compute_statistics().unwrap();
        assert_eq!(
            (empty.total, empty.read, empty.unread, empty.percent_read),
            (0, 0, 0, 0.0)
        );

        for (title, read) in [("A", true), ("B", true), ("C", false), ("D", true)] {
            catalog.add_book(&book(title, "X", None, "Y", read)).unwrap();
        }
        let stats = catalog.compute_statistics().unwrap();
        assert_eq!(
            (stats.total, stats.read, stats.unread, stats.percent_read),
            (4, 3, 1, 75.0)
        );
    }

    #[test]
    fn test_round_trip_through_title_search() {
        let (_dir, catalog) = open_catalog();
        let input = book("Dune", "Herbert", Some(1965), "Sci-Fi", true);
        catalog.add_book(&input).unwrap();

        let found = catalog.search_books("Dune", SearchField::Title).unwrap();
        assert_eq!(found.len(), 1);
        let dune = &found[0];
        assert_eq!(dune.title, input.title);
        assert_eq!(dune.author, input.author);
        assert_eq!(dune.publication_year, input.publication_year);
        assert_eq!(dune.genre, input.genre);
        assert!(dune.read_status);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.db");
        {
            let catalog = Catalog::open(&path).unwrap();
            catalog
                .add_book(&book("Dune", "Herbert", Some(1965), "Sci-Fi", true))
                .unwrap();
        }
        let reopened = Catalog::open(&path).unwrap();
        assert_eq!(reopened.list_books().unwrap().len(), 1);
    }
}
