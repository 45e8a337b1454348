//! Stats view: renders the snapshot's `CatalogStats`.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::{Outcome, Snapshot, View, ViewContext};

#[derive(Debug, Default)]
pub struct StatsView;

impl StatsView {
    pub fn new() -> Self {
        StatsView
    }
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<14}", label)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

impl View for StatsView {
    fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, _focused: bool) {
        let stats = snapshot.stats;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let lines = vec![
            stat_line("Total books:", stats.total.to_string()),
            stat_line("Read:", stats.read.to_string()),
            stat_line("Unread:", stats.unread.to_string()),
            stat_line("Percent read:", format!("{:.1}%", stats.percent_read)),
        ];
        let summary = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Library Statistics"),
        );
        frame.render_widget(summary, chunks[0]);

        let ratio = (stats.percent_read / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio(ratio)
            .label(format!("{:.1}% read", stats.percent_read));
        frame.render_widget(gauge, chunks[1]);
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &ViewContext<'_>) -> Outcome {
        Outcome::none()
    }

    fn hints(&self) -> &'static str {
        "Statistics refresh after every change"
    }
}
