//! Event dispatch from the UI loop into the controller.

use crate::events::TuiEvent;
use crate::keys::{map_key, map_search_key, Action, SearchAction};
use crate::state::{App, InputMode};
use crossterm::event::{KeyEvent, KeyEventKind};
use fleet_core::StatusFilter;
use tokio::sync::mpsc;

/// Apply one event. Returns `true` when the dashboard should exit.
pub fn handle_event(app: &mut App, event: TuiEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match event {
        TuiEvent::Input(key) => return handle_key(app, key, sender),
        TuiEvent::InitialLoaded(result) => app.apply_initial_load(result),
        TuiEvent::FallbackEngaged(operation) => {
            tracing::debug!(operation = %operation, "Fallback engaged");
            app.mark_fallback();
        }
        TuiEvent::SimulateFinished(result) => app.finish_simulate(result),
        TuiEvent::Resize { .. } => {}
    }
    false
}

pub fn handle_key(app: &mut App, key: KeyEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match app.input_mode {
        InputMode::Search => match map_search_key(key) {
            Some(SearchAction::Insert(c)) => app.push_search_char(c),
            Some(SearchAction::Backspace) => app.pop_search_char(),
            Some(SearchAction::Clear) => app.clear_search(),
            Some(SearchAction::Leave) => app.input_mode = InputMode::Normal,
            Some(SearchAction::Quit) => return true,
            None => {}
        },
        InputMode::Normal => {
            if let Some(action) = map_key(key) {
                return handle_action(app, action, sender);
            }
        }
    }
    false
}

pub fn handle_action(app: &mut App, action: Action, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match action {
        Action::Quit => return true,
        Action::Simulate => {
            app.request_simulate(sender);
        }
        Action::OpenSearch => {
            app.show_help = false;
            app.input_mode = InputMode::Search;
        }
        Action::NextFilter => app.next_status_filter(),
        Action::PrevFilter => app.previous_status_filter(),
        Action::SetFilter(index) => {
            if let Some(filter) = StatusFilter::from_index(index) {
                app.set_status_filter(filter);
            }
        }
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::OpenHelp => app.show_help = !app.show_help,
        Action::Cancel => app.show_help = false,
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{LocalSource, Operation, Snapshot};
    use crossterm::event::{KeyCode, KeyModifiers};
    use fleet_core::{SimulationParams, VehicleStatus};
    use fleet_test_utils::fixtures::advanced_fleet;
    use fleet_test_utils::ScriptedDraws;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        let source = LocalSource::new(
            SimulationParams::default(),
            Duration::ZERO,
            Box::new(ScriptedDraws::default()),
        );
        App::new(Arc::new(source))
    }

    fn press(code: KeyCode) -> TuiEvent {
        TuiEvent::Input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);
        assert!(!handle_event(&mut app, press(KeyCode::Char('/')), &tx));
        assert_eq!(app.input_mode, InputMode::Search);

        for c in ['q', 's', 'f'] {
            assert!(!handle_event(&mut app, press(KeyCode::Char(c)), &tx));
        }
        assert_eq!(app.query().search, "qsf");
        assert!(!app.is_simulating());

        handle_event(&mut app, press(KeyCode::Enter), &tx);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(handle_event(&mut app, press(KeyCode::Char('q')), &tx));
    }

    #[test]
    fn test_digit_selects_filter() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);
        handle_event(&mut app, press(KeyCode::Char('3')), &tx);
        assert_eq!(app.query().status, StatusFilter::Only(VehicleStatus::Offline));
        handle_event(&mut app, press(KeyCode::Char('0')), &tx);
        assert_eq!(app.query().status, StatusFilter::All);
    }

    #[test]
    fn test_help_toggle_and_escape() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);
        handle_event(&mut app, press(KeyCode::Char('?')), &tx);
        assert!(app.show_help);
        handle_event(&mut app, press(KeyCode::Esc), &tx);
        assert!(!app.show_help);
    }

    #[test]
    fn test_fallback_event_raises_flag() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);
        handle_event(&mut app, TuiEvent::FallbackEngaged(Operation::Simulate), &tx);
        assert!(app.using_fallback());
    }

    #[test]
    fn test_initial_load_event() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);
        handle_event(
            &mut app,
            TuiEvent::InitialLoaded(Ok(Snapshot::remote(advanced_fleet()))),
            &tx,
        );
        assert_eq!(app.vehicles(), advanced_fleet().as_slice());
    }

    #[tokio::test]
    async fn test_simulate_key_starts_one_cycle() {
        let mut app = app();
        let (tx, mut rx) = mpsc::channel(8);
        handle_event(&mut app, press(KeyCode::Char('s')), &tx);
        handle_event(&mut app, press(KeyCode::Char('s')), &tx);
        assert!(app.is_simulating());

        let event = rx.recv().await.unwrap();
        handle_event(&mut app, event, &tx);
        assert!(!app.is_simulating());
        assert_eq!(app.replacement_count(), 1);
        assert!(rx.try_recv().is_err());
    }
}
