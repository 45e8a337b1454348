//! Library export for tuishelf
//!
//! Renders the catalog as CSV, JSON or Markdown and writes timestamped
//! export files.

use crate::catalog::Book;
use crate::core::{Result, ShelfError};
use chrono::Local;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

const HEADERS: [&str; 6] = ["id", "title", "author", "publication_year", "genre", "read"];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(ShelfError::Ui(format!(
                "Unsupported export format: '{}'. Supported formats: csv, json, markdown",
                other
            ))),
        }
    }
}

fn cells(book: &Book) -> [String; 6] {
    [
        book.id.to_string(),
        book.title.clone(),
        book.author.clone(),
        book.publication_year
            .map(|y| y.to_string())
            .unwrap_or_default(),
        book.genre.clone().unwrap_or_default(),
        book.read_status.to_string(),
    ]
}

/// Quotes a CSV field when it contains a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn markdown_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Renders `books` in the given format.
pub fn render(books: &[Book], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(render_csv(books)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(books)?),
        ExportFormat::Markdown => Ok(render_markdown(books)),
    }
}

fn render_csv(books: &[Book]) -> String {
    let mut output = HEADERS.join(",");
    output.push('\n');
    for book in books {
        let row: Vec<String> = cells(book).iter().map(|c| csv_field(c)).collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }
    output
}

fn render_markdown(books: &[Book]) -> String {
    let mut output = format!("| {} |\n", HEADERS.join(" | "));
    let underline: Vec<String> = HEADERS.iter().map(|h| "-".repeat(h.len())).collect();
    output.push_str(&format!("| {} |\n", underline.join(" | ")));
    for book in books {
        let row: Vec<String> = cells(book).iter().map(|c| markdown_cell(c)).collect();
        output.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    output
}

/// Writes `books` to a new `library-<timestamp>.<ext>` file inside `dir`.
///
/// Returns the path of the written file.
pub fn export_library(books: &[Book], format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let content = render(books, format)?;
    fs::create_dir_all(dir)?;
    let file_name = format!(
        "library-{}.{}",
        Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    );
    let path = dir.join(file_name);
    fs::write(&path, content)?;
    info!("Exported {} book(s) as {} to {:?}", books.len(), format, path);
    Ok(path)
}
