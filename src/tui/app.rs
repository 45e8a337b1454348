//! Application state and main render loop

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{debug, error};

use crate::catalog::Catalog;
use crate::tui::banner::Banner;
use crate::tui::menu::{Menu, ViewKind};
use crate::tui::views::{
    AddView, EditView, LibraryView, Outcome, RemoveView, SearchView, Snapshot, StatsView, View,
    ViewContext,
};
use crate::tui::Settings;

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    View,
}

/// Main application state
pub struct App {
    /// The catalog every view operates on
    pub catalog: Catalog,
    pub settings: Settings,
    /// Books and statistics as of the last reload
    pub snapshot: Snapshot,
    pub menu: Menu,
    pub focus: Focus,
    /// Outcome of the last action
    pub banner: Option<Banner>,
    pub add: AddView,
    pub edit: EditView,
    pub remove: RemoveView,
    pub search: SearchView,
    pub library: LibraryView,
    pub stats: StatsView,
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let search = SearchView::new(settings.default_search_field);
        let mut app = Self {
            catalog,
            settings,
            snapshot: Snapshot::default(),
            menu: Menu::new(),
            focus: Focus::Menu,
            banner: None,
            add: AddView::new(),
            edit: EditView::new(),
            remove: RemoveView::new(),
            search,
            library: LibraryView::new(),
            stats: StatsView::new(),
        };
        app.refresh();
        app
    }

    pub fn active(&self) -> ViewKind {
        self.menu.selected()
    }

    fn view(&self) -> &dyn View {
        match self.active() {
            ViewKind::Add => &self.add,
            ViewKind::Edit => &self.edit,
            ViewKind::Remove => &self.remove,
            ViewKind::Search => &self.search,
            ViewKind::Library => &self.library,
            ViewKind::Stats => &self.stats,
        }
    }

    /// Reloads the snapshot from storage and lets every view catch up.
    ///
    /// A storage failure keeps the previous snapshot and shows an error.
    pub fn refresh(&mut self) {
        match Snapshot::load(&self.catalog) {
            Ok(snapshot) => {
                debug!("Reloaded snapshot: {} book(s)", snapshot.books.len());
                self.snapshot = snapshot;
                let snapshot = &self.snapshot;
                self.add.sync(snapshot);
                self.edit.sync(snapshot);
                self.remove.sync(snapshot);
                self.search.sync(snapshot);
                self.library.sync(snapshot);
                self.stats.sync(snapshot);
                if let Err(e) = self.search.rerun(&self.catalog) {
                    error!("Failed to refresh search results: {}", e);
                    self.banner = Some(Banner::from_error(&e));
                }
            }
            Err(e) => {
                error!("Failed to reload catalog: {}", e);
                self.banner = Some(Banner::from_error(&e));
            }
        }
    }

    /// Switches the active view and gives it the keyboard.
    pub fn switch_to(&mut self, kind: ViewKind) {
        if self.active() != kind {
            self.banner = None;
        }
        self.menu.select(kind);
        self.focus = Focus::View;
        self.refresh();
    }

    /// Handles one key event. Returns true when the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return true;
        }

        match key.code {
            KeyCode::F(n) => {
                if let Some(kind) = (n as usize).checked_sub(1).and_then(ViewKind::from_index) {
                    self.switch_to(kind);
                }
                return false;
            }
            KeyCode::Esc => {
                self.focus = Focus::Menu;
                return false;
            }
            _ => {}
        }

        match self.focus {
            Focus::Menu => self.handle_menu_key(key),
            Focus::View => {
                self.dispatch(key);
                false
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu.prev();
                self.banner = None;
                self.refresh();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu.next();
                self.banner = None;
                self.refresh();
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.focus = Focus::View;
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(kind) = ViewKind::from_index(index) {
                    self.switch_to(kind);
                }
            }
            _ => {}
        }
        false
    }

    fn dispatch(&mut self, key: KeyEvent) {
        let ctx = ViewContext {
            catalog: &self.catalog,
            snapshot: &self.snapshot,
            settings: &self.settings,
        };
        let outcome: Outcome = match self.menu.selected() {
            ViewKind::Add => self.add.handle_key(key, &ctx),
            ViewKind::Edit => self.edit.handle_key(key, &ctx),
            ViewKind::Remove => self.remove.handle_key(key, &ctx),
            ViewKind::Search => self.search.handle_key(key, &ctx),
            ViewKind::Library => self.library.handle_key(key, &ctx),
            ViewKind::Stats => self.stats.handle_key(key, &ctx),
        };

        if let Some(banner) = outcome.banner {
            self.banner = Some(banner);
        }
        if outcome.changed {
            self.refresh();
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Title bar, body, banner, status tips
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_title_bar(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(0)])
            .split(chunks[1]);

        self.render_menu(frame, body[0]);
        self.render_active_view(frame, body[1]);

        if let Some(banner) = &self.banner {
            frame.render_widget(Paragraph::new(banner.as_line()), chunks[2]);
        }

        if self.settings.show_status_tips {
            self.render_status_tips(frame, chunks[3]);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " Personal Library Manager ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "| {} | {} book(s)",
                self.catalog.path().display(),
                self.snapshot.stats.total
            )),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(Color::DarkGray)),
            area,
        );
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = ViewKind::ALL
            .iter()
            .map(|kind| ListItem::new(format!("F{} {}", kind.hotkey(), kind.label())))
            .collect();
        let border_style = if self.focus == Focus::Menu {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Menu")
                    .border_style(border_style),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default().with_selected(Some(self.active().index()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_active_view(&self, frame: &mut Frame, area: Rect) {
        let kind = self.active();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(kind.label())
            .border_style(if self.focus == Focus::View {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.view()
            .render(frame, inner, &self.snapshot, self.focus == Focus::View);
    }

    fn render_status_tips(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.focus {
            Focus::Menu => "Up/Down choose | Enter open | 1-6 jump | q quit",
            Focus::View => self.view().hints(),
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.active().description()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("| {} | Esc menu | F1-F6 views | Ctrl+Q quit", hints)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
