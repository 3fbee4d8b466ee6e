//! Left column: search, status selector, KPI cards and the simulate button.

use crate::state::{App, InputMode};
use crate::widgets::{FilterBar, FilterOption, KpiCard};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SEARCH_PLACEHOLDER: &str = "Search ID, Name, Driver...";
pub const REMOTE_HINT: &str = "Triggers /api/vehicles/simulate endpoint";
pub const LOCAL_HINT: &str = "Client-side simulation (API disconnected)";

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_search(f, app, chunks[0]);

    let options = FilterOption::for_selection(app.query().status);
    FilterBar {
        title: "Status",
        filters: &options,
        active_style: Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        inactive_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, chunks[1]);

    render_kpis(f, app, chunks[2]);
    render_simulate_button(f, app, chunks[3]);

    let hint = if app.using_fallback() { LOCAL_HINT } else { REMOTE_HINT };
    let hint = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.text_muted));
    f.render_widget(hint, chunks[4]);
}

fn render_search(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Search;
    let search = &app.query().search;
    let line = if search.is_empty() && !focused {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(app.theme.text_muted),
        ))
    } else {
        let mut spans = vec![Span::styled(
            search.clone(),
            Style::default().fg(app.theme.text),
        )];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(app.theme.border_focus)));
        }
        Line::from(spans)
    };
    let border = if focused {
        app.theme.border_focus
    } else {
        app.theme.border
    };
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title("Search [/]")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);
}

fn render_kpis(f: &mut Frame<'_>, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let counts = app.counts();
    let border_style = Style::default().fg(app.theme.border);

    KpiCard {
        title: "Active Units",
        value: counts.active,
        value_style: Style::default().fg(app.theme.active),
        border_style,
    }
    .render(f, cards[0]);
    KpiCard {
        title: "On Job",
        value: counts.busy,
        value_style: Style::default().fg(app.theme.busy),
        border_style,
    }
    .render(f, cards[1]);
}

fn render_simulate_button(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (label, color) = if app.is_simulating() {
        ("⟳ Updating...", app.theme.primary_dim)
    } else {
        ("⟳ Simulate Update [s]", app.theme.primary)
    };
    let button = Paragraph::new(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(button, area);
}
