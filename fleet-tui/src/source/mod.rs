//! Data sources that feed the dashboard.
//!
//! - `RemoteSource` - the vehicle service over REST
//! - `LocalSource` - the built-in seed fleet and client-side simulation
//! - `ResilientSource` - tries a primary source and falls back to another
//!
//! Every source answers the same two operations. Failures collapse into a
//! single [`SourceError`] kind; callers only need to know that the data did
//! not arrive.

mod local;
mod remote;
mod resilient;

pub use local::LocalSource;
pub use remote::RemoteSource;
pub use resilient::{FallbackListener, ResilientSource};

use async_trait::async_trait;
use fleet_core::Vehicle;
use std::fmt;

/// The operation a source was asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchInitial,
    Simulate,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchInitial => "fetch_initial",
            Operation::Simulate => "simulate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a vehicle list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataOrigin {
    Remote,
    Local,
}

/// A complete vehicle list plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub vehicles: Vec<Vehicle>,
    pub origin: DataOrigin,
}

impl Snapshot {
    pub fn remote(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles,
            origin: DataOrigin::Remote,
        }
    }

    pub fn local(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles,
            origin: DataOrigin::Local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("{operation} unavailable: {reason}")]
    Unavailable { operation: Operation, reason: String },
}

impl SourceError {
    pub fn unavailable(operation: Operation, reason: impl fmt::Display) -> Self {
        Self::Unavailable {
            operation,
            reason: reason.to_string(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            SourceError::Unavailable { operation, .. } => *operation,
        }
    }
}

/// A provider of complete vehicle lists.
#[async_trait]
pub trait FleetSource: Send + Sync {
    /// Produce the list shown after startup.
    async fn fetch_initial(&self) -> Result<Snapshot, SourceError>;

    /// Produce the next list, given the one currently displayed.
    async fn simulate(&self, current: &[Vehicle]) -> Result<Snapshot, SourceError>;
}
