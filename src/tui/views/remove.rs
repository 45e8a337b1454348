//! Remove view: a single title input.
//!
//! The title is resolved to a book id first. When several books share the
//! title the view asks for confirmation, and pressing Enter again on the same
//! title removes all of them, provided the matching books are still the ones
//! the warning counted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use tracing::{debug, warn};

use super::form::render_input;
use super::{Outcome, Snapshot, View, ViewContext};
use crate::core::ShelfError;
use crate::tui::banner::Banner;

/// A title-keyed removal waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub title: String,
    /// Ids the warning was shown for
    pub ids: Vec<i64>,
}

#[derive(Debug, Default)]
pub struct RemoveView {
    pub title: String,
    pub pending: Option<PendingRemoval>,
}

impl RemoveView {
    pub fn new() -> Self {
        Self::default()
    }

    fn submit(&mut self, ctx: &ViewContext<'_>) -> Outcome {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Outcome::banner(Banner::error("Please enter a title!"));
        }

        if let Some(pending) = self.pending.take() {
            if pending.title == title {
                return self.confirm(pending, ctx);
            }
        }

        match ctx.catalog.resolve_title(&title) {
            Ok(None) => Outcome::banner(Banner::info(format!("No book titled '{}' found", title))),
            Ok(Some(id)) => match ctx.catalog.remove_book_by_id(id) {
                Ok(_) => {
                    self.title.clear();
                    Outcome::changed(Banner::success("Book removed successfully!"))
                }
                Err(e) => Outcome::banner(Banner::from_error(&e)),
            },
            Err(ShelfError::AmbiguousTitle { .. }) => self.ask_confirmation(title, ctx),
            Err(e) => Outcome::banner(Banner::from_error(&e)),
        }
    }

    /// Removes every match, unless the matches changed since the warning.
    fn confirm(&mut self, pending: PendingRemoval, ctx: &ViewContext<'_>) -> Outcome {
        let ids = match ctx.catalog.titled_ids(&pending.title) {
            Ok(ids) => ids,
            Err(e) => return Outcome::banner(Banner::from_error(&e)),
        };
        if ids != pending.ids {
            debug!(
                "Matches for '{}' changed from {:?} to {:?}, asking again",
                pending.title, pending.ids, ids
            );
            return self.ask_confirmation(pending.title, ctx);
        }

        match ctx.catalog.remove_book(&pending.title) {
            Ok(removed) => {
                self.title.clear();
                Outcome::changed(Banner::success(format!(
                    "Removed {} books titled '{}'",
                    removed, pending.title
                )))
            }
            Err(e) => Outcome::banner(Banner::from_error(&e)),
        }
    }

    fn ask_confirmation(&mut self, title: String, ctx: &ViewContext<'_>) -> Outcome {
        let ids = match ctx.catalog.titled_ids(&title) {
            Ok(ids) => ids,
            Err(e) => return Outcome::banner(Banner::from_error(&e)),
        };
        match ids.len() {
            0 => Outcome::changed(Banner::info(format!("No book titled '{}' found", title))),
            1 => {
                // Down to a single match: treat it like an unambiguous title
                match ctx.catalog.remove_book_by_id(ids[0]) {
                    Ok(_) => {
                        self.title.clear();
                        Outcome::changed(Banner::success("Book removed successfully!"))
                    }
                    Err(e) => Outcome::banner(Banner::from_error(&e)),
                }
            }
            count => {
                warn!("Removal of '{}' is ambiguous ({} matches)", title, count);
                let banner = Banner::warning(format!(
                    "{} books are titled '{}'. Press Enter again to remove all of them.",
                    count, title
                ));
                self.pending = Some(PendingRemoval { title, ids });
                Outcome::banner(banner)
            }
        }
    }
}

impl View for RemoveView {
    fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        render_input(
            frame,
            chunks[0],
            "Enter the title of the book to remove",
            &self.title,
            focused,
        );

        let wanted = self.title.trim();
        let items: Vec<ListItem> = snapshot
            .books
            .iter()
            .filter(|book| !wanted.is_empty() && book.title == wanted)
            .map(|book| ListItem::new(book.summary()))
            .collect();
        let title_style = if self.pending.is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Matching books")
                .border_style(title_style),
        );
        frame.render_widget(list, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Outcome {
        match key.code {
            KeyCode::Enter => self.submit(ctx),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.title.push(c);
                Outcome::none()
            }
            KeyCode::Backspace => {
                self.title.pop();
                Outcome::none()
            }
            _ => Outcome::none(),
        }
    }

    /// Any reload invalidates a pending confirmation.
    fn sync(&mut self, _snapshot: &Snapshot) {
        self.pending = None;
    }

    fn hints(&self) -> &'static str {
        if self.pending.is_some() {
            "Enter confirm removal of every match"
        } else {
            "Type a title | Enter remove"
        }
    }
}
