use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use fleet_core::{StatusFilter, VehicleStatus};
use fleet_tui::config::{SimulationConfig, TuiConfig};
use fleet_tui::keys::{map_key, map_search_key, Action, SearchAction};
use fleet_tui::theme::{status_color, status_label_color, FleetTheme};
use fleet_tui::widgets::StatusBadge;
use proptest::prelude::*;
use ratatui::style::Color;

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "http://localhost:8000".to_string(),
        request_timeout_ms: 5_000,
        tick_rate_ms: 250,
        log_path: "tmp/fleet-tui.log".into(),
        simulation: SimulationConfig {
            fallback_delay_ms: 600,
            coordinate_jitter: 0.01,
            status_change_threshold: 0.8,
            seed: None,
            auto_interval_ms: None,
        },
    }
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn config_base_is_valid() {
    assert!(base_config().validate().is_ok());
}

#[test]
fn config_requires_http_url() {
    let mut config = base_config();
    config.api_base_url = "localhost:8000".to_string();
    assert!(config.validate().is_err());
    config.api_base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_positive_timeouts() {
    let mut config = base_config();
    config.request_timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_allows_zero_fallback_delay() {
    let mut config = base_config();
    config.simulation.fallback_delay_ms = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_zero_auto_interval() {
    let mut config = base_config();
    config.simulation.auto_interval_ms = Some(0);
    assert!(config.validate().is_err());
    config.simulation.auto_interval_ms = Some(5_000);
    assert!(config.validate().is_ok());
}

#[test]
fn control_keys_quit_and_simulate() {
    assert_eq!(
        map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
    assert_eq!(
        map_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
        Some(Action::Simulate)
    );
    assert_eq!(
        map_search_key(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        Some(SearchAction::Clear)
    );
}

#[test]
fn search_keys_leave_on_enter_and_escape() {
    for code in [KeyCode::Enter, KeyCode::Esc] {
        assert_eq!(
            map_search_key(key(code, KeyModifiers::NONE)),
            Some(SearchAction::Leave)
        );
    }
    assert_eq!(
        map_search_key(key(KeyCode::Backspace, KeyModifiers::NONE)),
        Some(SearchAction::Backspace)
    );
}

#[test]
fn status_colors_match_palette() {
    let theme = FleetTheme::fleet();
    assert_eq!(status_color(VehicleStatus::Active, &theme), Color::Rgb(16, 185, 129));
    assert_eq!(status_color(VehicleStatus::Busy, &theme), Color::Rgb(249, 115, 22));
    assert_eq!(status_color(VehicleStatus::Offline, &theme), Color::Rgb(156, 163, 175));
}

proptest! {
    #[test]
    fn keybinding_digit_selects_filter(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let action = map_key(key(KeyCode::Char(ch), KeyModifiers::NONE));
        if digit <= 3 {
            prop_assert_eq!(action, Some(Action::SetFilter(digit as usize)));
            prop_assert!(StatusFilter::from_index(digit as usize).is_some());
        } else {
            prop_assert_eq!(action, None);
        }
    }

    #[test]
    fn navigation_keys_consistent(use_vim in prop::bool::ANY) {
        let (up, down) = if use_vim {
            (KeyCode::Char('k'), KeyCode::Char('j'))
        } else {
            (KeyCode::Up, KeyCode::Down)
        };
        prop_assert_eq!(map_key(key(up, KeyModifiers::NONE)), Some(Action::MoveUp));
        prop_assert_eq!(map_key(key(down, KeyModifiers::NONE)), Some(Action::MoveDown));
    }

    #[test]
    fn all_action_keys_mapped(key_char in "[qs/fF?]") {
        let ch = key_char.chars().next().unwrap();
        prop_assert!(map_key(key(KeyCode::Char(ch), KeyModifiers::NONE)).is_some());
    }

    #[test]
    fn search_mode_inserts_plain_chars(ch in proptest::char::range('!', '~')) {
        prop_assert_eq!(
            map_search_key(key(KeyCode::Char(ch), KeyModifiers::NONE)),
            Some(SearchAction::Insert(ch))
        );
    }

    #[test]
    fn status_label_colors_case_insensitive(idx in 0usize..3, upper in prop::bool::ANY) {
        let theme = FleetTheme::fleet();
        let status = VehicleStatus::ALL[idx];
        let label = if upper {
            status.as_str().to_uppercase()
        } else {
            status.as_str().to_lowercase()
        };
        prop_assert_eq!(status_label_color(&label, &theme), status_color(status, &theme));
        prop_assert_eq!(StatusBadge::from_label(&label, &theme), StatusBadge::new(status, &theme));
    }

    #[test]
    fn threshold_outside_unit_interval_rejected(threshold in 1.0001f64..10.0) {
        let mut config = base_config();
        config.simulation.status_change_threshold = threshold;
        prop_assert!(config.validate().is_err());
        config.simulation.status_change_threshold = -threshold;
        prop_assert!(config.validate().is_err());
    }
}
