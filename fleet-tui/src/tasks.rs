//! Background tasks that talk to the fleet source.
//!
//! Each task runs on the tokio runtime and reports back through the event
//! channel; the controller is only ever mutated on the UI loop.

use crate::events::TuiEvent;
use crate::source::{FallbackListener, FleetSource, Operation, SourceError};
use async_trait::async_trait;
use fleet_core::Vehicle;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn spawn_initial_load(source: Arc<dyn FleetSource>, sender: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        let result = source.fetch_initial().await;
        let _ = sender.send(TuiEvent::InitialLoaded(result)).await;
    });
}

pub fn spawn_simulate(
    source: Arc<dyn FleetSource>,
    current: Vec<Vehicle>,
    sender: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        let result = source.simulate(&current).await;
        let _ = sender.send(TuiEvent::SimulateFinished(result)).await;
    });
}

/// Forwards fallback notifications into the event loop.
pub struct ChannelListener {
    sender: mpsc::Sender<TuiEvent>,
}

impl ChannelListener {
    pub fn new(sender: mpsc::Sender<TuiEvent>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl FallbackListener for ChannelListener {
    async fn on_fallback(&self, operation: Operation, _error: &SourceError) {
        let _ = self.sender.send(TuiEvent::FallbackEngaged(operation)).await;
    }
}
