//! Fleet Test Utilities
//!
//! Centralized test infrastructure for the fleet workspace:
//! - Proptest generators for vehicles, fleets and filters
//! - Test fixtures for the documented scenarios
//! - Custom assertions for fleet-specific validation

// Re-export core types for convenience
pub use fleet_core::{
    filter_vehicles, perturb_fleet, seed_vehicles, validate_fleet, DrawSource, FleetCounts,
    FleetError, RngDraws, ScriptedDraws, SimulationParams, StatusFilter, Vehicle, VehicleQuery,
    VehicleStatus,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for fleet types.

    use super::*;
    use proptest::prelude::*;

    /// Generate a random VehicleStatus.
    pub fn arb_vehicle_status() -> impl Strategy<Value = VehicleStatus> {
        prop_oneof![
            Just(VehicleStatus::Active),
            Just(VehicleStatus::Busy),
            Just(VehicleStatus::Offline),
        ]
    }

    /// Generate a random selector value, including "All Statuses".
    pub fn arb_status_filter() -> impl Strategy<Value = StatusFilter> {
        prop_oneof![
            Just(StatusFilter::All),
            arb_vehicle_status().prop_map(StatusFilter::Only),
        ]
    }

    /// Generate a mixed-case search term, possibly empty.
    pub fn arb_search_term() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 -]{0,4}"
    }

    /// Generate a vehicle with the given id.
    pub fn arb_vehicle_with_id(id: String) -> impl Strategy<Value = Vehicle> {
        (
            arb_vehicle_status(),
            "[A-Za-z' ]{1,24}",
            "[A-Za-z]{1,10}",
            -90.0f64..90.0,
            -180.0f64..180.0,
            0.0f64..5.0,
        )
            .prop_map(move |(status, provider, driver, lat, lng, rating)| {
                Vehicle::new(id.clone(), status, provider, driver, lat, lng, rating)
            })
    }

    /// Generate a vehicle with an arbitrary id.
    pub fn arb_vehicle() -> impl Strategy<Value = Vehicle> {
        "[A-Z]{3}-[0-9]{3}".prop_flat_map(arb_vehicle_with_id)
    }

    /// Generate a fleet of up to `max` vehicles with unique ids.
    pub fn arb_fleet(max: usize) -> impl Strategy<Value = Vec<Vehicle>> {
        prop::collection::vec(arb_vehicle(), 0..=max).prop_map(|vehicles| {
            vehicles
                .into_iter()
                .enumerate()
                .map(|(i, mut vehicle)| {
                    vehicle.id = format!("{}#{}", vehicle.id, i);
                    vehicle
                })
                .collect()
        })
    }

    /// Generate a full query (search + status).
    pub fn arb_query() -> impl Strategy<Value = VehicleQuery> {
        (arb_search_term(), arb_status_filter())
            .prop_map(|(search, status)| VehicleQuery::new(search, status))
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built test fixtures for common scenarios.

    use super::*;

    /// The single-vehicle fleet used by the filter scenarios.
    pub fn acme_fleet() -> Vec<Vehicle> {
        vec![Vehicle::new(
            "V1",
            VehicleStatus::Active,
            "Acme",
            "Jo",
            10.0,
            20.0,
            4.0,
        )]
    }

    /// A small fleet with one vehicle per status.
    pub fn mixed_fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::new("A-1", VehicleStatus::Active, "Acme Towing", "Jo", 40.70, -74.00, 4.5),
            Vehicle::new("B-1", VehicleStatus::Busy, "Bronx Haul", "Sam", 40.80, -73.90, 4.1),
            Vehicle::new("C-1", VehicleStatus::Offline, "City Rescue", "Ann", 40.60, -74.10, 3.9),
        ]
    }

    /// The fleet a remote service would return after one server-side step.
    pub fn advanced_fleet() -> Vec<Vehicle> {
        let mut draws = ScriptedDraws::new(vec![0.6, 0.4, 0.1]);
        perturb_fleet(&seed_vehicles(), &SimulationParams::server(), &mut draws)
    }

    /// Draws that keep every status and shift each coordinate by a fixed
    /// amount: lat by `lat_draw - 0.5` jitters, lng by `lng_draw - 0.5`.
    pub fn status_preserving_draws(lat_draw: f64, lng_draw: f64) -> ScriptedDraws {
        ScriptedDraws::new(vec![lat_draw, lng_draw, 0.5])
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Custom assertion functions for fleet-specific validation.

    use super::*;

    /// Assert that two fleets hold the same ids in the same order.
    #[track_caller]
    pub fn assert_same_ids(left: &[Vehicle], right: &[Vehicle]) {
        let l: Vec<&str> = left.iter().map(|v| v.id.as_str()).collect();
        let r: Vec<&str> = right.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(l, r, "Fleet ids differ");
    }

    /// Assert that every vehicle moved by at most `max_offset` on each axis.
    #[track_caller]
    pub fn assert_within_offset(before: &[Vehicle], after: &[Vehicle], max_offset: f64) {
        assert_same_ids(before, after);
        for (b, a) in before.iter().zip(after.iter()) {
            assert!(
                (a.lat - b.lat).abs() <= max_offset && (a.lng - b.lng).abs() <= max_offset,
                "Vehicle {} moved from ({}, {}) to ({}, {})",
                b.id,
                b.lat,
                b.lng,
                a.lat,
                a.lng
            );
        }
    }

    /// Assert that no vehicle changed status.
    #[track_caller]
    pub fn assert_statuses_unchanged(before: &[Vehicle], after: &[Vehicle]) {
        assert_same_ids(before, after);
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.status, a.status, "Vehicle {} changed status", b.id);
        }
    }
}
