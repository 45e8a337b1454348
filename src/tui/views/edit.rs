//! Edit view: pick a book from the list, change its fields, submit a full
//! replacement through `Catalog::update_book`.
//!
//! Books are picked by row, so books sharing a title stay individually
//! editable.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::form::{handle_form_key, render_book_form, FormInput};
use super::{Outcome, Snapshot, View, ViewContext};
use crate::book_form::{BookForm, FormField, Requirement};
use crate::tui::banner::Banner;

/// Which half of the edit view has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditFocus {
    #[default]
    List,
    Form(FormField),
}

#[derive(Debug, Default)]
pub struct EditView {
    pub selected: usize,
    pub focus: EditFocus,
    pub form: BookForm,
    /// Id of the book the form was loaded from
    pub editing_id: Option<i64>,
}

impl EditView {
    pub fn new() -> Self {
        Self::default()
    }

    fn load_selected(&mut self, snapshot: &Snapshot) {
        match snapshot.books.get(self.selected) {
            Some(book) => {
                self.form = BookForm::from_book(book);
                self.editing_id = Some(book.id);
            }
            None => {
                self.form.clear();
                self.editing_id = None;
            }
        }
    }

    fn submit(&mut self, ctx: &ViewContext<'_>) -> Outcome {
        let Some(id) = self.editing_id else {
            return Outcome::banner(Banner::info("Your library is empty!"));
        };
        let book = match self.form.validate(Requirement::Update) {
            Ok(book) => book,
            Err(e) => return Outcome::banner(Banner::from_error(&e)),
        };

        match ctx.catalog.update_book(id, &book) {
            Ok(true) => {
                self.focus = EditFocus::List;
                Outcome::changed(Banner::success("Book updated successfully!"))
            }
            // Removed since the snapshot was taken; reload so it disappears
            Ok(false) => Outcome::changed(Banner::info("That book is no longer in the library")),
            Err(e) => Outcome::banner(Banner::from_error(&e)),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, snapshot: &Snapshot) -> Outcome {
        let count = snapshot.books.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.selected = (self.selected + count - 1) % count;
                self.load_selected(snapshot);
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.selected = (self.selected + 1) % count;
                self.load_selected(snapshot);
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right if count > 0 => {
                self.focus = EditFocus::Form(FormField::Title);
            }
            _ => {}
        }
        Outcome::none()
    }
}

impl View for EditView {
    fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, focused: bool) {
        if snapshot.books.is_empty() {
            let block = Block::default().borders(Borders::ALL).title("Edit a Book");
            frame.render_widget(
                Paragraph::new("Your library is empty!").block(block),
                area,
            );
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let list_active = focused && self.focus == EditFocus::List;
        let items: Vec<ListItem> = snapshot
            .books
            .iter()
            .map(|book| ListItem::new(book.title.clone()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Select a book to edit")
                    .border_style(if list_active {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default()
                    }),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        let form_focus = match self.focus {
            EditFocus::Form(field) if focused => Some(field),
            _ => None,
        };
        render_book_form(frame, chunks[1], &self.form, form_focus, "Update Book");
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Outcome {
        match self.focus {
            EditFocus::List => self.handle_list_key(key, ctx.snapshot),
            EditFocus::Form(FormField::Title) if key.code == KeyCode::BackTab => {
                self.focus = EditFocus::List;
                Outcome::none()
            }
            EditFocus::Form(mut field) => {
                let input = handle_form_key(&mut self.form, &mut field, key);
                self.focus = EditFocus::Form(field);
                match input {
                    FormInput::Submit => self.submit(ctx),
                    _ => Outcome::none(),
                }
            }
        }
    }

    fn sync(&mut self, snapshot: &Snapshot) {
        // Follow the edited book if it moved, otherwise clamp the index
        if let Some(id) = self.editing_id {
            if let Some(pos) = snapshot.books.iter().position(|b| b.id == id) {
                self.selected = pos;
            }
        }
        if self.selected >= snapshot.books.len() {
            self.selected = snapshot.books.len().saturating_sub(1);
        }
        if snapshot.books.is_empty() {
            self.focus = EditFocus::List;
        }
        self.load_selected(snapshot);
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            EditFocus::List => "Up/Down choose book | Enter edit",
            EditFocus::Form(_) => "Tab/Shift-Tab move | Space toggle read | Enter update",
        }
    }
}
