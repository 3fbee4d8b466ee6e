//! Fleet roster table.

use crate::state::App;
use crate::widgets::StatusBadge;
use fleet_core::Vehicle;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub const EMPTY_MESSAGE: &str = "No vehicles match your search.";

pub fn count_label(count: usize) -> String {
    format!("{} vehicles found", count)
}

/// Coordinates to four decimal places, as shown in the roster.
pub fn format_location(vehicle: &Vehicle) -> String {
    format!("{:.4}, {:.4}", vehicle.lat, vehicle.lng)
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let vehicles = app.filtered_vehicles();
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                "Fleet Roster  ",
                Style::default()
                    .fg(app.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                count_label(vehicles.len()),
                Style::default().fg(app.theme.text_dim),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));

    if vehicles.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.text_dim))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        "ID", "Status", "Provider Name", "Driver", "Location (Lat/Lon)", "Rating", "Action",
    ])
    .style(
        Style::default()
            .fg(app.theme.text_dim)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = vehicles
        .iter()
        .map(|vehicle| {
            Row::new(vec![
                Cell::from(vehicle.id.clone()),
                Cell::from(StatusBadge::new(vehicle.status, &app.theme).to_line()),
                Cell::from(vehicle.provider_name.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(vehicle.driver_name.clone()),
                Cell::from(format_location(vehicle)),
                Cell::from(format!("★ {}", vehicle.rating)),
                Cell::from(Span::styled(
                    "Details",
                    Style::default().fg(app.theme.primary),
                )),
            ])
            .style(Style::default().fg(app.theme.text))
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Min(18),
        Constraint::Length(10),
        Constraint::Length(20),
        Constraint::Length(7),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(app.theme.highlight));

    let mut state = TableState::default();
    state.select(app.selected_index());
    f.render_stateful_widget(table, area, &mut state);
}
