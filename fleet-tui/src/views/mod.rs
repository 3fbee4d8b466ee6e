//! Dashboard layout and rendering.

pub mod controls;
pub mod map;
pub mod roster;

pub use map::map_bounds;

use crate::state::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const FALLBACK_BANNER: &str =
    "Backend API disconnected. Running in client-side demonstration mode.";

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let banner_height = if app.using_fallback() { 3 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Percentage(55),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(f.size());

    if app.using_fallback() {
        render_banner(f, app, layout[0]);
    }

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(layout[1]);

    controls::render(f, app, top[0]);
    map::render(f, app, top[1]);
    roster::render(f, app, layout[2]);
    render_footer(f, app, layout[3]);

    if app.show_help {
        render_help(f, app);
    }
}

fn render_banner(f: &mut Frame<'_>, app: &App, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(app.theme.warning)),
        Span::styled(FALLBACK_BANNER, Style::default().fg(app.theme.warning)),
    ]))
    .block(
        Block::default()
            .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.warning)),
    );
    f.render_widget(banner, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.input_mode {
        InputMode::Normal => {
            "/ search • f/F filter • 0-3 status • s simulate • j/k select • ? help • q quit"
        }
        InputMode::Search => "type to search • Backspace delete • Ctrl+U clear • Enter/Esc done",
    };
    let footer = Paragraph::new(help).style(Style::default().fg(app.theme.text_dim));
    f.render_widget(footer, area);
}

const HELP_LINES: [(&str, &str); 9] = [
    ("/", "Search by ID, provider or driver"),
    ("Ctrl+U", "Clear search (while searching)"),
    ("f / F, → / ←", "Next / previous status filter"),
    ("0-3", "All, Active, Busy, Offline"),
    ("s, Ctrl+R", "Simulate update"),
    ("j / k, ↓ / ↑", "Move roster selection"),
    ("?", "Toggle this help"),
    ("Esc", "Close help"),
    ("q, Ctrl+C", "Quit"),
];

fn render_help(f: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 50, f.size());
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>14}  ", key),
                    Style::default()
                        .fg(app.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(app.theme.text)),
            ])
        })
        .collect();
    let help = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .title("Keybindings")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
