use super::{FleetSource, Operation, Snapshot, SourceError};
use async_trait::async_trait;
use fleet_core::Vehicle;
use std::sync::Arc;

/// Notified when the primary source fails and the fallback is about to run.
#[async_trait]
pub trait FallbackListener: Send + Sync {
    async fn on_fallback(&self, operation: Operation, error: &SourceError);
}

/// Primary-then-fallback decorator.
///
/// The listener is told about the failure before the fallback starts, so a
/// slow fallback does not delay the disconnected indicator.
pub struct ResilientSource {
    primary: Arc<dyn FleetSource>,
    fallback: Arc<dyn FleetSource>,
    listener: Option<Arc<dyn FallbackListener>>,
}

impl ResilientSource {
    pub fn new(primary: Arc<dyn FleetSource>, fallback: Arc<dyn FleetSource>) -> Self {
        Self {
            primary,
            fallback,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn FallbackListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    async fn engage(&self, operation: Operation, error: &SourceError) {
        tracing::warn!(
            operation = %operation,
            error = %error,
            "Primary fleet source failed, using fallback"
        );
        if let Some(listener) = &self.listener {
            listener.on_fallback(operation, error).await;
        }
    }
}

#[async_trait]
impl FleetSource for ResilientSource {
    async fn fetch_initial(&self) -> Result<Snapshot, SourceError> {
        match self.primary.fetch_initial().await {
            Ok(snapshot) => Ok(snapshot),
            Err(error) => {
                self.engage(Operation::FetchInitial, &error).await;
                self.fallback.fetch_initial().await
            }
        }
    }

    async fn simulate(&self, current: &[Vehicle]) -> Result<Snapshot, SourceError> {
        match self.primary.simulate(current).await {
            Ok(snapshot) => Ok(snapshot),
            Err(error) => {
                self.engage(Operation::Simulate, &error).await;
                self.fallback.simulate(current).await
            }
        }
    }
}
