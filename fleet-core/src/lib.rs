//! Fleet Core - Vehicle Types and Derived Views
//!
//! Pure data structures and pure functions shared by the dashboard client and
//! its tests. No I/O happens in this crate.

pub mod error;
pub mod filter;
pub mod seed;
pub mod simulation;
pub mod validate;
pub mod vehicle;

pub use error::{FleetError, FleetResult};
pub use filter::{filter_vehicles, FleetCounts, StatusFilter, VehicleQuery, ALL_STATUSES_LABEL};
pub use seed::seed_vehicles;
pub use simulation::{
    perturb_fleet, perturb_vehicle, DrawSource, RngDraws, ScriptedDraws, SimulationParams,
};
pub use validate::validate_fleet;
pub use vehicle::{Vehicle, VehicleStatus};
