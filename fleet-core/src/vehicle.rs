//! Vehicle record and status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of a tracked unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Available for dispatch
    Active,
    /// On a job
    Busy,
    /// Not reporting
    Offline,
}

impl VehicleStatus {
    /// All statuses in selector order.
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Active,
        VehicleStatus::Busy,
        VehicleStatus::Offline,
    ];

    /// Wire and display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Busy => "Busy",
            VehicleStatus::Offline => "Offline",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "active" => Ok(VehicleStatus::Active),
            "busy" => Ok(VehicleStatus::Busy),
            "offline" => Ok(VehicleStatus::Offline),
            _ => Err(format!("Invalid VehicleStatus: {}", s)),
        }
    }
}

pub(crate) fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// One tracked unit as served by the vehicle service.
///
/// `id` is the business key and is stable across refreshes. Coordinates are
/// not range checked; `rating` is display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub status: VehicleStatus,
    pub provider_name: String,
    pub driver_name: String,
    pub lat: f64,
    pub lng: f64,
    pub rating: f64,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        status: VehicleStatus,
        provider_name: impl Into<String>,
        driver_name: impl Into<String>,
        lat: f64,
        lng: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            status,
            provider_name: provider_name.into(),
            driver_name: driver_name.into(),
            lat,
            lng,
            rating,
        }
    }
}
