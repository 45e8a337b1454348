//! Terminal UI for tuishelf.
//!
//! Sets up the terminal, runs the draw/read-key loop and restores the
//! terminal afterwards, also when the loop fails.

pub mod app;
pub mod banner;
pub mod menu;
pub mod views;

use std::io::{self, Stdout};
use std::path::PathBuf;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use crate::catalog::{Catalog, SearchField};
use crate::config::Config;
use crate::core::Result;
use crate::export::ExportFormat;

pub use app::App;

/// UI settings resolved from the configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub show_status_tips: bool,
    pub default_search_field: SearchField,
    pub export_format: ExportFormat,
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_status_tips: true,
            default_search_field: SearchField::default(),
            export_format: ExportFormat::default(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Settings {
            show_status_tips: config.ui.show_status_tips,
            default_search_field: config.default_search_field()?,
            export_format: config.export_format()?,
            export_dir: config.export_dir(),
        })
    }
}

type ShelfTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive UI until the user quits.
pub fn run(catalog: Catalog, settings: Settings) -> Result<()> {
    let mut terminal = enter_terminal()?;

    let mut app = App::new(catalog, settings);
    info!("Entering UI loop");
    let res = run_app(&mut terminal, &mut app);

    leave_terminal(&mut terminal)?;

    if let Err(e) = &res {
        error!("UI loop failed: {}", e);
    }
    info!("Leaving UI loop");
    res.map_err(Into::into)
}

/// Switches to raw mode and the alternate screen. A failure part way through
/// undoes whatever was already switched.
fn enter_terminal() -> io::Result<ShelfTerminal> {
    enable_raw_mode()?;
    let terminal = open_alternate_screen();
    if let Err(e) = &terminal {
        error!("Terminal setup failed: {}", e);
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    terminal
}

fn open_alternate_screen() -> io::Result<ShelfTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_terminal(terminal: &mut ShelfTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key) {
                return Ok(());
            }
        }
    }
}
