//! Built-in seed fleet.
//!
//! Shown until the vehicle service answers, and kept when it never does.

use crate::vehicle::{Vehicle, VehicleStatus};

use crate::vehicle::VehicleStatus::{Active, Busy, Offline};

type SeedRow = (&'static str, VehicleStatus, &'static str, &'static str, f64, f64, f64);

const SEED_ROWS: [SeedRow; 20] = [
    ("TOW-001", Active, "QuickFix Towing", "Mike", 40.7128, -74.006, 4.9),
    ("TOW-002", Busy, "AAA Official Rescue", "Sarah", 40.73, -74.05, 4.8),
    ("TOW-003", Active, "Zhang's Garage", "Zhang", 40.8, -73.95, 4.5),
    ("TOW-004", Active, "Brooklyn Best Tow", "Tony", 40.6782, -73.9442, 4.7),
    ("TOW-005", Offline, "Queens Rapid Response", "Peter", 40.7282, -73.7949, 4.2),
    ("TOW-006", Active, "Staten Island Rescue", "Vinny", 40.5795, -74.1502, 4.6),
    ("TOW-007", Busy, "Bronx Heavy Duty", "Marcus", 40.8448, -73.8648, 4.4),
    ("TOW-008", Active, "Manhattan Elite", "Jessica", 40.7831, -73.9712, 5.0),
    ("TOW-009", Offline, "Jersey City Haul", "Bill", 40.7178, -74.0431, 4.3),
    ("TOW-010", Active, "Newark Tow Masters", "Jamal", 40.7357, -74.1724, 4.1),
    ("TOW-011", Busy, "Hoboken Hook", "Alex", 40.744, -74.0324, 4.8),
    ("TOW-012", Active, "Long Island Express", "Ken", 40.74, -73.6, 4.6),
    ("TOW-013", Active, "Yonkers Yellow Truck", "Luis", 40.9312, -73.8987, 4.5),
    ("TOW-014", Offline, "Greenwich Village Tow", "Emily", 40.7336, -74.0027, 4.9),
    ("TOW-015", Active, "Harlem Night Shift", "Tyrone", 40.8116, -73.9465, 4.7),
    ("TOW-016", Busy, "Astoria Auto Aid", "Dimitri", 40.7644, -73.9235, 4.4),
    ("TOW-017", Active, "Flushing Flatbed", "Wei", 40.7674, -73.8331, 4.3),
    ("TOW-018", Active, "Red Hook Recovery", "Sam", 40.6734, -74.0083, 4.8),
    ("TOW-019", Offline, "Williamsburg Wheels", "Hip", 40.7126, -73.96, 4.2),
    ("TOW-020", Busy, "Midtown Mechanics", "Rock", 40.7549, -73.984, 4.9),
];

/// The twenty tow units the dashboard starts with.
pub fn seed_vehicles() -> Vec<Vehicle> {
    SEED_ROWS
        .iter()
        .map(|&(id, status, provider, driver, lat, lng, rating)| {
            Vehicle::new(id, status, provider, driver, lat, lng, rating)
        })
        .collect()
}
