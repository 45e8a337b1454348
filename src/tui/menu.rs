// Navigation Menu Module for tuishelf
//
// The sidebar lists the six destinations of the application. Each entry has
// a label, a short description shown in the status line and a function key.

/// One destination in the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Add,
    Edit,
    Remove,
    Search,
    Library,
    Stats,
}

impl ViewKind {
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Add,
        ViewKind::Edit,
        ViewKind::Remove,
        ViewKind::Search,
        ViewKind::Library,
        ViewKind::Stats,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Add => "Add Book",
            ViewKind::Edit => "Edit Book",
            ViewKind::Remove => "Remove Book",
            ViewKind::Search => "Search",
            ViewKind::Library => "View Library",
            ViewKind::Stats => "Stats",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ViewKind::Add => "Add a book to the library",
            ViewKind::Edit => "Edit an existing book",
            ViewKind::Remove => "Remove a book by title",
            ViewKind::Search => "Search by title, author, genre or year",
            ViewKind::Library => "Browse every book",
            ViewKind::Stats => "Reading statistics",
        }
    }

    /// Zero-based position in the menu.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Function key number bound to this view (F1..F6).
    pub fn hotkey(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Sidebar selection state.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Menu { selected: 0 }
    }

    pub fn selected(&self) -> ViewKind {
        ViewKind::ALL[self.selected]
    }

    pub fn select(&mut self, kind: ViewKind) {
        self.selected = kind.index();
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % ViewKind::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + ViewKind::ALL.len() - 1) % ViewKind::ALL.len();
    }
}
