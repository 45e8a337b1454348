//! Search view: field radio plus term, bound to `Catalog::search_books`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::form::render_input;
use super::{Outcome, Snapshot, View, ViewContext};
use crate::catalog::{Book, Catalog, SearchField};
use crate::core::Result;
use crate::tui::banner::Banner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    Field,
    #[default]
    Term,
}

#[derive(Debug, Default)]
pub struct SearchView {
    pub field: SearchField,
    pub term: String,
    pub focus: SearchFocus,
    /// `None` until the first search runs
    pub results: Option<Vec<Book>>,
    /// Term and field behind `results`
    last_query: Option<(String, SearchField)>,
}

/// Summary line with the title in bold and the genre in italics.
pub fn summary_line(book: &Book) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            book.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" by {} ({}) - ", book.author, book.year_label())),
        Span::styled(
            book.genre_label().to_string(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ])
}

impl SearchView {
    pub fn new(field: SearchField) -> Self {
        SearchView {
            field,
            ..Self::default()
        }
    }

    /// Runs the last search again so the results follow catalog changes.
    pub fn rerun(&mut self, catalog: &Catalog) -> Result<()> {
        if let Some((term, field)) = &self.last_query {
            self.results = Some(catalog.search_books(term, *field)?);
        }
        Ok(())
    }

    fn submit(&mut self, ctx: &ViewContext<'_>) -> Outcome {
        let term = self.term.trim().to_string();
        match ctx.catalog.search_books(&term, self.field) {
            Ok(books) => {
                self.last_query = Some((term, self.field));
                let outcome = if books.is_empty() {
                    Outcome::banner(Banner::warning("No matching books found!"))
                } else {
                    Outcome::banner(Banner::info(format!("{} book(s) found", books.len())))
                };
                self.results = Some(books);
                outcome
            }
            Err(e) => Outcome::banner(Banner::from_error(&e)),
        }
    }

    fn radio_line(&self, active: bool) -> Line<'static> {
        let mut spans = vec![Span::raw("Search by: ")];
        for field in SearchField::ALL {
            let selected = field == self.field;
            let mark = if selected { "(*)" } else { "( )" };
            let style = if selected && active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("{} {}", mark, field.label()), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl View for SearchView {
    fn render(&self, frame: &mut Frame, area: Rect, _snapshot: &Snapshot, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Field radio
                Constraint::Length(3), // Term
                Constraint::Min(0),    // Results
            ])
            .split(area);

        let radio_active = focused && self.focus == SearchFocus::Field;
        let radio = Paragraph::new(self.radio_line(radio_active)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if radio_active {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                }),
        );
        frame.render_widget(radio, chunks[0]);

        render_input(
            frame,
            chunks[1],
            &format!("Enter the {}", self.field.label()),
            &self.term,
            focused && self.focus == SearchFocus::Term,
        );

        let block = Block::default().borders(Borders::ALL).title("Results");
        match &self.results {
            Some(books) if !books.is_empty() => {
                let items: Vec<ListItem> = books
                    .iter()
                    .map(|book| ListItem::new(summary_line(book)))
                    .collect();
                frame.render_widget(List::new(items).block(block), chunks[2]);
            }
            Some(_) => {
                frame.render_widget(
                    Paragraph::new("No matching books found!").block(block),
                    chunks[2],
                );
            }
            None => frame.render_widget(block, chunks[2]),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Outcome {
        match (self.focus, key.code) {
            (_, KeyCode::Enter) => return self.submit(ctx),
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) | (_, KeyCode::Up) | (_, KeyCode::Down) => {
                self.focus = match self.focus {
                    SearchFocus::Field => SearchFocus::Term,
                    SearchFocus::Term => SearchFocus::Field,
                };
            }
            (SearchFocus::Field, KeyCode::Right) | (SearchFocus::Field, KeyCode::Char('l')) => {
                self.field = self.field.next();
            }
            (SearchFocus::Field, KeyCode::Left) | (SearchFocus::Field, KeyCode::Char('h')) => {
                self.field = self.field.prev();
            }
            (SearchFocus::Term, KeyCode::Char(c))
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.term.push(c);
            }
            (SearchFocus::Term, KeyCode::Backspace) => {
                self.term.pop();
            }
            _ => {}
        }
        Outcome::none()
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            SearchFocus::Field => "Left/Right choose field | Tab term | Enter search",
            SearchFocus::Term => "Type a term | Tab field | Enter search",
        }
    }
}
