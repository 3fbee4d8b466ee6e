//! Scatter map of the filtered fleet.

use crate::state::App;
use crate::theme::status_color;
use fleet_core::{Vehicle, VehicleStatus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders,
    },
    Frame,
};

const MIN_PADDING: f64 = 0.005;
const WORLD: ([f64; 2], [f64; 2]) = ([-180.0, 180.0], [-90.0, 90.0]);

/// Axis bounds `(lng, lat)` that enclose every vehicle with a small margin.
///
/// An empty list maps the whole world.
pub fn map_bounds(vehicles: &[&Vehicle]) -> ([f64; 2], [f64; 2]) {
    if vehicles.is_empty() {
        return WORLD;
    }
    let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in vehicles {
        min_lng = min_lng.min(v.lng);
        max_lng = max_lng.max(v.lng);
        min_lat = min_lat.min(v.lat);
        max_lat = max_lat.max(v.lat);
    }
    let pad_lng = ((max_lng - min_lng) * 0.1).max(MIN_PADDING);
    let pad_lat = ((max_lat - min_lat) * 0.1).max(MIN_PADDING);
    (
        [min_lng - pad_lng, max_lng + pad_lng],
        [min_lat - pad_lat, max_lat + pad_lat],
    )
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let vehicles = app.filtered_vehicles();
    let (x_bounds, y_bounds) = map_bounds(&vehicles);

    let layers: Vec<(VehicleStatus, Vec<(f64, f64)>)> = VehicleStatus::ALL
        .iter()
        .map(|status| {
            let coords = vehicles
                .iter()
                .filter(|v| v.status == *status)
                .map(|v| (v.lng, v.lat))
                .collect();
            (*status, coords)
        })
        .collect();
    let selected = app
        .selected_id()
        .and_then(|id| vehicles.iter().find(|v| v.id == id))
        .map(|v| (v.lng, v.lat, v.id.clone()));

    let mut title = vec![Span::styled(
        "Fleet Location Map  ",
        Style::default()
            .fg(app.theme.text)
            .add_modifier(Modifier::BOLD),
    )];
    for status in VehicleStatus::ALL {
        title.push(Span::styled(
            "● ",
            Style::default().fg(status_color(status, &app.theme)),
        ));
        title.push(Span::styled(
            format!("{}  ", status),
            Style::default().fg(app.theme.text_dim),
        ));
    }

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (status, coords) in &layers {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: status_color(*status, &app.theme),
                });
            }
            if let Some((lng, lat, id)) = &selected {
                ctx.print(
                    *lng,
                    *lat,
                    Span::styled(
                        id.clone(),
                        Style::default()
                            .fg(app.theme.primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_test_utils::generators::arb_fleet;
    use fleet_test_utils::seed_vehicles;
    use proptest::prelude::*;

    #[test]
    fn test_empty_fleet_maps_world() {
        assert_eq!(map_bounds(&[]), WORLD);
    }

    #[test]
    fn test_single_vehicle_gets_padding() {
        let fleet = seed_vehicles();
        let (x, y) = map_bounds(&[&fleet[0]]);
        assert!(x[0] < fleet[0].lng && fleet[0].lng < x[1]);
        assert!(y[0] < fleet[0].lat && fleet[0].lat < y[1]);
    }

    proptest! {
        /// Property: every plotted vehicle falls strictly inside the bounds
        #[test]
        fn prop_bounds_enclose_fleet(fleet in arb_fleet(20)) {
            let refs: Vec<&Vehicle> = fleet.iter().collect();
            let (x, y) = map_bounds(&refs);
            for v in &fleet {
                prop_assert!(x[0] < v.lng && v.lng < x[1]);
                prop_assert!(y[0] < v.lat && v.lat < y[1]);
            }
        }
    }
}
