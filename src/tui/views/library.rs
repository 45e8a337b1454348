//! Library view: every book as an expandable summary.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{Outcome, Snapshot, View, ViewContext};
use crate::catalog::Book;
use crate::export;
use crate::tui::banner::Banner;

#[derive(Debug, Default)]
pub struct LibraryView {
    pub selected: usize,
    /// Ids of the books whose details are shown
    pub expanded: HashSet<i64>,
}

impl LibraryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn item(&self, book: &Book) -> ListItem<'static> {
        let open = self.expanded.contains(&book.id);
        let mut lines = vec![Line::from(vec![
            Span::raw(if open { "v " } else { "> " }),
            Span::styled(
                book.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" by {}", book.author)),
        ])];
        if open {
            lines.push(Line::from(Span::styled(
                format!(
                    "    Year: {}  |  Genre: {}  |  Read: {}",
                    book.year_label(),
                    book.genre_label(),
                    if book.read_status { "yes" } else { "no" }
                ),
                Style::default().fg(Color::Gray),
            )));
        }
        ListItem::new(Text::from(lines))
    }

    fn export(&self, ctx: &ViewContext<'_>) -> Outcome {
        let format = ctx.settings.export_format;
        match export::export_library(&ctx.snapshot.books, format, &ctx.settings.export_dir) {
            Ok(path) => Outcome::banner(Banner::success(format!(
                "Exported {} book(s) to {}",
                ctx.snapshot.books.len(),
                path.display()
            ))),
            Err(e) => Outcome::banner(Banner::from_error(&e)),
        }
    }
}

impl View for LibraryView {
    fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, _focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Your Library ({} books)", snapshot.books.len()));

        if snapshot.books.is_empty() {
            frame.render_widget(Paragraph::new("Your library is empty!").block(block), area);
            return;
        }

        let items: Vec<ListItem> = snapshot.books.iter().map(|b| self.item(b)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Outcome {
        let count = ctx.snapshot.books.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(book) = ctx.snapshot.books.get(self.selected) {
                    if !self.expanded.remove(&book.id) {
                        self.expanded.insert(book.id);
                    }
                }
            }
            KeyCode::Char('x') => return self.export(ctx),
            _ => {}
        }
        Outcome::none()
    }

    fn sync(&mut self, snapshot: &Snapshot) {
        if self.selected >= snapshot.books.len() {
            self.selected = snapshot.books.len().saturating_sub(1);
        }
        let ids: HashSet<i64> = snapshot.books.iter().map(|b| b.id).collect();
        self.expanded.retain(|id| ids.contains(id));
    }

    fn hints(&self) -> &'static str {
        "Up/Down move | Enter expand | x export"
    }
}
