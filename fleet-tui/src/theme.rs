//! Dashboard palette and status colors.

use fleet_core::VehicleStatus;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct FleetTheme {
    pub primary: Color,
    pub primary_dim: Color,
    pub active: Color,
    pub busy: Color,
    pub offline: Color,
    pub warning: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
    pub highlight: Color,
}

impl FleetTheme {
    pub fn fleet() -> Self {
        Self {
            primary: Color::Rgb(99, 102, 241),
            primary_dim: Color::Rgb(129, 140, 248),
            active: Color::Rgb(16, 185, 129),
            busy: Color::Rgb(249, 115, 22),
            offline: Color::Rgb(156, 163, 175),
            warning: Color::Rgb(251, 191, 36),
            text: Color::Rgb(229, 231, 235),
            text_dim: Color::Rgb(156, 163, 175),
            text_muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(75, 85, 99),
            border_focus: Color::Rgb(99, 102, 241),
            highlight: Color::Rgb(49, 46, 129),
        }
    }
}

impl Default for FleetTheme {
    fn default() -> Self {
        Self::fleet()
    }
}

pub fn status_color(status: VehicleStatus, theme: &FleetTheme) -> Color {
    match status {
        VehicleStatus::Active => theme.active,
        VehicleStatus::Busy => theme.busy,
        VehicleStatus::Offline => theme.offline,
    }
}

/// Color for a raw status label; unrecognized labels get the neutral style.
pub fn status_label_color(label: &str, theme: &FleetTheme) -> Color {
    match label.parse::<VehicleStatus>() {
        Ok(status) => status_color(status, theme),
        Err(_) => theme.text_dim,
    }
}
