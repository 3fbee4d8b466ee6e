use super::{FleetSource, Operation, Snapshot, SourceError};
use crate::api_client::RestClient;
use async_trait::async_trait;
use fleet_core::Vehicle;

/// The vehicle service. Any transport, status or payload problem is reported
/// as [`SourceError::Unavailable`].
#[derive(Clone)]
pub struct RemoteSource {
    client: RestClient,
}

impl RemoteSource {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FleetSource for RemoteSource {
    async fn fetch_initial(&self) -> Result<Snapshot, SourceError> {
        self.client
            .list_vehicles()
            .await
            .map(Snapshot::remote)
            .map_err(|e| SourceError::unavailable(Operation::FetchInitial, e))
    }

    // The service owns the canonical state; the displayed list is not sent.
    async fn simulate(&self, _current: &[Vehicle]) -> Result<Snapshot, SourceError> {
        self.client
            .simulate_vehicles()
            .await
            .map(Snapshot::remote)
            .map_err(|e| SourceError::unavailable(Operation::Simulate, e))
    }
}
