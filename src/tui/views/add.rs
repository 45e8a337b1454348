//! Add view: a blank book form bound to `Catalog::add_book`.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tracing::debug;

use super::form::{handle_form_key, render_book_form, FormInput};
use super::{Outcome, Snapshot, View, ViewContext};
use crate::book_form::{BookForm, FormField, Requirement};
use crate::tui::banner::Banner;

#[derive(Debug, Default)]
pub struct AddView {
    pub form: BookForm,
    pub focus: FormField,
}

impl AddView {
    pub fn new() -> Self {
        Self::default()
    }

    fn submit(&mut self, ctx: &ViewContext<'_>) -> Outcome {
        let book = match self.form.validate(Requirement::Create) {
            Ok(book) => book,
            Err(e) => {
                debug!("Add form rejected: {}", e);
                return Outcome::banner(Banner::from_error(&e));
            }
        };

        match ctx.catalog.add_book(&book) {
            Ok(_) => {
                self.form.clear();
                self.focus = FormField::Title;
                Outcome::changed(Banner::success(format!(
                    "Book '{}' added successfully!",
                    book.title
                )))
            }
            Err(e) => Outcome::banner(Banner::from_error(&e)),
        }
    }
}

impl View for AddView {
    fn render(&self, frame: &mut Frame, area: Rect, _snapshot: &Snapshot, focused: bool) {
        let focus = focused.then_some(self.focus);
        render_book_form(frame, area, &self.form, focus, "Add Book");
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Outcome {
        match handle_form_key(&mut self.form, &mut self.focus, key) {
            FormInput::Submit => self.submit(ctx),
            FormInput::Edited | FormInput::Moved | FormInput::Ignored => Outcome::none(),
        }
    }

    fn hints(&self) -> &'static str {
        "Tab/Shift-Tab move | Space toggle read | Enter add"
    }
}
