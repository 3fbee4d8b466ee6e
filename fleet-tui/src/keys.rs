//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Simulate,
    OpenSearch,
    NextFilter,
    PrevFilter,
    SetFilter(usize),
    MoveUp,
    MoveDown,
    OpenHelp,
    Cancel,
}

/// Keys while the search box has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Insert(char),
    Backspace,
    Clear,
    Leave,
    Quit,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Simulate),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('s') => Some(Action::Simulate),
        KeyCode::Char('f') | KeyCode::Right => Some(Action::NextFilter),
        KeyCode::Char('F') | KeyCode::Left => Some(Action::PrevFilter),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(c @ '0'..='3') => Some(Action::SetFilter((c as u8 - b'0') as usize)),
        _ => None,
    }
}

pub fn map_search_key(event: KeyEvent) -> Option<SearchAction> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(SearchAction::Quit),
            KeyCode::Char('u') => Some(SearchAction::Clear),
            _ => None,
        };
    }

    match code {
        KeyCode::Enter | KeyCode::Esc => Some(SearchAction::Leave),
        KeyCode::Backspace => Some(SearchAction::Backspace),
        KeyCode::Char(c) => Some(SearchAction::Insert(c)),
        _ => None,
    }
}
