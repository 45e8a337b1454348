//! TUI views
//!
//! Each view binds one form or list to one catalog operation. Views keep only
//! their own input state; the catalog and the current snapshot are passed in
//! on every call.

mod add;
mod edit;
mod form;
mod library;
mod remove;
mod search;
mod stats;

pub use add::AddView;
pub use edit::EditView;
pub use library::LibraryView;
pub use remove::RemoveView;
pub use search::SearchView;
pub use stats::StatsView;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::catalog::{Book, Catalog, CatalogStats};
use crate::core::Result;
use crate::tui::banner::Banner;
use crate::tui::Settings;

/// The UI's last-read copy of the catalog.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub books: Vec<Book>,
    pub stats: CatalogStats,
}

impl Snapshot {
    pub fn load(catalog: &Catalog) -> Result<Self> {
        Ok(Snapshot {
            books: catalog.list_books()?,
            stats: catalog.compute_statistics()?,
        })
    }
}

/// Everything a view may consult while handling a key.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub snapshot: &'a Snapshot,
    pub settings: &'a Settings,
}

/// What handling a key produced.
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub banner: Option<Banner>,
    /// The catalog was modified and the snapshot must be reloaded
    pub changed: bool,
}

impl Outcome {
    pub fn none() -> Self {
        Outcome::default()
    }

    pub fn banner(banner: Banner) -> Self {
        Outcome {
            banner: Some(banner),
            changed: false,
        }
    }

    pub fn changed(banner: Banner) -> Self {
        Outcome {
            banner: Some(banner),
            changed: true,
        }
    }
}

/// Trait for views
pub trait View {
    fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, focused: bool);

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewContext<'_>) -> Outcome;

    /// Called when the view is entered and after every snapshot reload.
    fn sync(&mut self, _snapshot: &Snapshot) {}

    /// Key hints for the status line.
    fn hints(&self) -> &'static str;
}
