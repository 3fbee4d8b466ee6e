//! Search and status filtering over the canonical vehicle list.
//!
//! Everything here is a pure function of its inputs. Callers recompute the
//! filtered view whenever the list, the search term or the status selection
//! changes; nothing is cached.

use crate::vehicle::{normalize_token, Vehicle, VehicleStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the "no status constraint" selector entry.
pub const ALL_STATUSES_LABEL: &str = "All Statuses";

/// Status selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(VehicleStatus),
}

impl StatusFilter {
    /// Selector entries in display order.
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(VehicleStatus::Active),
        StatusFilter::Only(VehicleStatus::Busy),
        StatusFilter::Only(VehicleStatus::Offline),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_STATUSES_LABEL,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn admits(&self, status: VehicleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(selected) => *selected == status,
        }
    }

    pub fn index(&self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|option| option == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<StatusFilter> {
        Self::OPTIONS.get(index).copied()
    }

    pub fn next(&self) -> StatusFilter {
        let next = (self.index() + 1) % Self::OPTIONS.len();
        Self::OPTIONS[next]
    }

    pub fn previous(&self) -> StatusFilter {
        let idx = self.index();
        let prev = if idx == 0 { Self::OPTIONS.len() - 1 } else { idx - 1 };
        Self::OPTIONS[prev]
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "allstatuses" | "all" => Ok(StatusFilter::All),
            _ => s
                .parse::<VehicleStatus>()
                .map(StatusFilter::Only)
                .map_err(|_| format!("Invalid StatusFilter: {}", s)),
        }
    }
}

impl From<VehicleStatus> for StatusFilter {
    fn from(status: VehicleStatus) -> Self {
        StatusFilter::Only(status)
    }
}

/// Current search text and status selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl VehicleQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Case-insensitive substring match of the search term against id,
    /// provider and driver, combined with the status selection.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.status.admits(vehicle.status) && matches_search(vehicle, &self.search.to_lowercase())
    }
}

fn matches_search(vehicle: &Vehicle, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&vehicle.id, &vehicle.provider_name, &vehicle.driver_name]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Subset of `vehicles` admitted by `query`, in canonical order.
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], query: &VehicleQuery) -> Vec<&'a Vehicle> {
    let needle = query.search.to_lowercase();
    vehicles
        .iter()
        .filter(|v| query.status.admits(v.status) && matches_search(v, &needle))
        .collect()
}

/// Aggregate status counts over a vehicle list.
///
/// The dashboard tallies the canonical list, never the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetCounts {
    pub active: usize,
    pub busy: usize,
    pub offline: usize,
    pub total: usize,
}

impl FleetCounts {
    pub fn tally(vehicles: &[Vehicle]) -> Self {
        vehicles.iter().fold(Self::default(), |mut counts, v| {
            match v.status {
                VehicleStatus::Active => counts.active += 1,
                VehicleStatus::Busy => counts.busy += 1,
                VehicleStatus::Offline => counts.offline += 1,
            }
            counts.total += 1;
            counts
        })
    }
}
