//! One-line outcome messages shown under the active view.

use crate::core::ShelfError;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Result of the last user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Banner {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Error, message)
    }

    pub fn from_error(err: &ShelfError) -> Self {
        Self::error(err.to_string())
    }

    fn color(&self) -> Color {
        match self.kind {
            BannerKind::Success => Color::Green,
            BannerKind::Info => Color::Cyan,
            BannerKind::Warning => Color::Yellow,
            BannerKind::Error => Color::Red,
        }
    }

    fn tag(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => " OK ",
            BannerKind::Info => " INFO ",
            BannerKind::Warning => " WARN ",
            BannerKind::Error => " ERROR ",
        }
    }

    /// Styled line for the banner row.
    pub fn as_line(&self) -> Line<'_> {
        let color = self.color();
        Line::from(vec![
            Span::styled(
                self.tag(),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.message.as_str(), Style::default().fg(color)),
        ])
    }
}
