//! Status badge rendered inside table cells.

use crate::theme::{status_color, status_label_color, FleetTheme};
use fleet_core::VehicleStatus;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    pub label: String,
    pub style: Style,
}

impl StatusBadge {
    pub fn new(status: VehicleStatus, theme: &FleetTheme) -> Self {
        Self {
            label: status.as_str().to_uppercase(),
            style: Style::default()
                .fg(status_color(status, theme))
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Badge for a raw label; unrecognized labels render in the neutral style.
    pub fn from_label(label: &str, theme: &FleetTheme) -> Self {
        match label.parse::<VehicleStatus>() {
            Ok(status) => Self::new(status, theme),
            Err(_) => Self {
                label: label.to_uppercase(),
                style: Style::default().fg(status_label_color(label, theme)),
            },
        }
    }

    pub fn to_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(self.style.fg.unwrap_or(Color::Reset))),
            Span::styled(self.label.clone(), self.style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_badge() {
        let theme = FleetTheme::fleet();
        let badge = StatusBadge::new(VehicleStatus::Busy, &theme);
        assert_eq!(badge.label, "BUSY");
        assert_eq!(badge.style.fg, Some(theme.busy));
    }

    #[test]
    fn test_unknown_label_uses_neutral_style() {
        let theme = FleetTheme::fleet();
        let badge = StatusBadge::from_label("Parked", &theme);
        assert_eq!(badge.label, "PARKED");
        assert_eq!(badge.style.fg, Some(theme.text_dim));
        assert_eq!(StatusBadge::from_label("offline", &theme).label, "OFFLINE");
    }
}
