//! Shared rendering and key handling for the add and edit forms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::book_form::{BookForm, FormField};

/// What a key did to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Edited,
    Moved,
    Submit,
    Ignored,
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Renders a single-line text input; places the cursor at its end when
/// `active`.
pub fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(label.to_string())
        .border_style(border_style(active));
    frame.render_widget(Paragraph::new(value.to_string()).block(block), area);

    if active && area.width > 2 && area.height > 2 {
        let offset = (value.chars().count() as u16).min(area.width - 3);
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

/// Lays out and renders the five inputs and the submit button.
///
/// `focus` is `None` when the form is shown but not being edited.
pub fn render_book_form(
    frame: &mut Frame,
    area: Rect,
    form: &BookForm,
    focus: Option<FormField>,
    submit_label: &str,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Author
            Constraint::Length(3), // Year
            Constraint::Length(3), // Genre
            Constraint::Length(3), // Read
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(area);

    for (i, field) in [
        FormField::Title,
        FormField::Author,
        FormField::Year,
        FormField::Genre,
    ]
    .into_iter()
    .enumerate()
    {
        let value = form.text(field).unwrap_or_default();
        render_input(frame, rows[i], field.label(), value, focus == Some(field));
    }

    let checkbox = Line::from(vec![
        Span::styled(
            if form.read { "[x]" } else { "[ ]" },
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Have you read this book?"),
    ]);
    let read_block = Block::default()
        .borders(Borders::ALL)
        .title(FormField::Read.label())
        .border_style(border_style(focus == Some(FormField::Read)));
    frame.render_widget(Paragraph::new(checkbox).block(read_block), rows[4]);

    let button_style = if focus == Some(FormField::Submit) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", submit_label),
        button_style,
    )));
    frame.render_widget(button, rows[5]);
}

/// Applies one key to the form and its focus.
///
/// Enter submits from any field; Space toggles the read checkbox and
/// presses the submit button.
pub fn handle_form_key(form: &mut BookForm, focus: &mut FormField, key: KeyEvent) -> FormInput {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            *focus = focus.next();
            FormInput::Moved
        }
        KeyCode::BackTab | KeyCode::Up => {
            *focus = focus.prev();
            FormInput::Moved
        }
        KeyCode::Enter => FormInput::Submit,
        KeyCode::Char(' ') if *focus == FormField::Read => {
            form.read = !form.read;
            FormInput::Edited
        }
        KeyCode::Char(' ') if *focus == FormField::Submit => FormInput::Submit,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            match form.text_mut(*focus) {
                Some(text) => {
                    text.push(c);
                    FormInput::Edited
                }
                None => FormInput::Ignored,
            }
        }
        KeyCode::Backspace => match form.text_mut(*focus) {
            Some(text) => {
                text.pop();
                FormInput::Edited
            }
            None => FormInput::Ignored,
        },
        _ => FormInput::Ignored,
    }
}
