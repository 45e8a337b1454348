// Book Form Module for tuishelf
//
// Holds the raw text a user typed into the add/edit forms and turns it into a
// validated `NewBook`. Nothing here touches storage: a form that fails
// validation never reaches the catalog.

use crate::catalog::{Book, NewBook};
use crate::core::{Result, ShelfError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Inclusive bounds accepted for a publication year
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 2100;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,4}$").expect("valid year regex"));

/// Which fields a form must have filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// New books need title, author and genre
    Create,
    /// Edits need title and author; genre may be cleared
    Update,
}

/// Focusable parts of a book form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Year,
    Genre,
    Read,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Title,
        FormField::Author,
        FormField::Year,
        FormField::Genre,
        FormField::Read,
        FormField::Submit,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Year => "Publication Year",
            FormField::Genre => "Genre",
            FormField::Read => "Read",
            FormField::Submit => "Submit",
        }
    }

    /// True for the fields that take typed text.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Title | FormField::Author | FormField::Year | FormField::Genre
        )
    }
}

/// Raw, unvalidated form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the form with an existing book's values.
    pub fn from_book(book: &Book) -> Self {
        BookForm {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book
                .publication_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            genre: book.genre.clone().unwrap_or_default(),
            read: book.read_status,
        }
    }

    pub fn clear(&mut self) {
        *self = BookForm::default();
    }

    /// Text buffer behind `field`, if it is a text field.
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::Author => Some(&self.author),
            FormField::Year => Some(&self.year),
            FormField::Genre => Some(&self.genre),
            FormField::Read | FormField::Submit => None,
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Year => Some(&mut self.year),
            FormField::Genre => Some(&mut self.genre),
            FormField::Read | FormField::Submit => None,
        }
    }

    /// Validates the form and builds the book it describes.
    ///
    /// Text fields are trimmed. An empty year means "unknown".
    pub fn validate(&self, requirement: Requirement) -> Result<NewBook> {
        let title = self.title.trim();
        let author = self.author.trim();
        let genre = self.genre.trim();

        let mut missing = Vec::new();
        if title.is_empty() {
            missing.push("title");
        }
        if author.is_empty() {
            missing.push("author");
        }
        if requirement == Requirement::Create && genre.is_empty() {
            missing.push("genre");
        }
        if !missing.is_empty() {
            return Err(ShelfError::Validation(format!(
                "Please fill in all fields: {}",
                missing.join(", ")
            )));
        }

        Ok(NewBook {
            title: title.to_string(),
            author: author.to_string(),
            publication_year: parse_year(&self.year)?,
            genre: if genre.is_empty() {
                None
            } else {
                Some(genre.to_string())
            },
            read_status: self.read,
        })
    }
}

/// Parses a typed year, `None` when left blank.
pub fn parse_year(input: &str) -> Result<Option<i32>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let out_of_range = || {
        ShelfError::Validation(format!(
            "Publication year must be a whole number between {} and {}",
            MIN_YEAR, MAX_YEAR
        ))
    };
    if !YEAR_RE.is_match(input) {
        return Err(out_of_range());
    }
    let year: i32 = input.parse().map_err(|_| out_of_range())?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(out_of_range());
    }
    Ok(Some(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookForm {
        BookForm {
            title: "  Dune ".to_string(),
            author: "Herbert".to_string(),
            year: "1965".to_string(),
            genre: "Sci-Fi".to_string(),
            read: true,
        }
    }

    #[test]
    fn test_validate_complete_form() {
        let book = filled().validate(Requirement::Create).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.publication_year, Some(1965));
        assert_eq!(book.genre.as_deref(), Some("Sci-Fi"));
        assert!(book.read_status);
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let form = BookForm {
            title: "   ".to_string(),
            genre: String::new(),
            ..filled()
        };
        let err = form.validate(Requirement::Create).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields: title, genre");
    }

    #[test]
    fn test_update_allows_blank_genre() {
        let form = BookForm {
            genre: String::new(),
            ..filled()
        };
        assert!(form.validate(Requirement::Create).is_err());
        let book = form.validate(Requirement::Update).unwrap();
        assert_eq!(book.genre, None);
    }

    #[test]
    fn test_parse_year_bounds() {
        assert_eq!(parse_year("").unwrap(), None);
        assert_eq!(parse_year("0").unwrap(), Some(0));
        assert_eq!(parse_year(" 2100 ").unwrap(), Some(2100));
        assert!(parse_year("2101").is_err());
        assert!(parse_year("-1").is_err());
        assert!(parse_year("abc").is_err());
        assert!(parse_year("19 65").is_err());
        assert!(parse_year("12345").is_err());
    }

    #[test]
    fn test_from_book_round_trips_through_validate() {
        let book = Book {
            id: 7,
            title: "Emma".to_string(),
            author: "Austen".to_string(),
            publication_year: None,
            genre: Some("Romance".to_string()),
            read_status: false,
        };
        let form = BookForm::from_book(&book);
        assert_eq!(form.year, "");
        let validated = form.validate(Requirement::Update).unwrap();
        assert_eq!(validated.title, book.title);
        assert_eq!(validated.publication_year, None);
        assert_eq!(validated.genre, book.genre);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Title.next(), FormField::Author);
        assert_eq!(FormField::Submit.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Submit);
        assert!(FormField::Year.is_text());
        assert!(!FormField::Read.is_text());
    }

    #[test]
    fn test_text_mut_edits_the_right_buffer() {
        let mut form = BookForm::new();
        form.text_mut(FormField::Genre).unwrap().push_str("Epic");
        assert_eq!(form.genre, "Epic");
        assert!(form.text_mut(FormField::Read).is_none());
        form.clear();
        assert_eq!(form, BookForm::default());
    }
}
