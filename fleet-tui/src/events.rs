//! Event types for the TUI event loop.

use crate::source::{Operation, SourceError, Snapshot};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Result of the one startup fetch.
    InitialLoaded(Result<Snapshot, SourceError>),
    /// The vehicle service failed and the local fallback is running.
    FallbackEngaged(Operation),
    /// Result of a simulate cycle.
    SimulateFinished(Result<Snapshot, SourceError>),
}
