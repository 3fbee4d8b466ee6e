//! Local stochastic mutation used when the vehicle service is unreachable.
//!
//! The mutation is a pure function of the input list and a stream of uniform
//! draws. Given the same draws it always produces the same output, which is
//! what seeded runs and tests rely on.

use crate::vehicle::{Vehicle, VehicleStatus};
use rand::{Rng, RngCore};

/// Source of uniform draws in `[0, 1)`.
pub trait DrawSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Adapter from any `rand` generator.
///
/// ```ignore
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut draws = RngDraws::new(StdRng::seed_from_u64(7));
/// ```
#[derive(Debug, Clone)]
pub struct RngDraws<R> {
    rng: R,
}

impl<R: RngCore> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + Send> DrawSource for RngDraws<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Fixed draw sequence, replayed cyclically. An empty script yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DrawSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Tuning for [`perturb_fleet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Full width of the uniform coordinate offset, centred on zero.
    pub coordinate_jitter: f64,
    /// A status is re-drawn only when the gate draw is strictly above this.
    pub status_change_threshold: f64,
}

impl SimulationParams {
    pub const CLIENT_STATUS_THRESHOLD: f64 = 0.8;
    pub const SERVER_STATUS_THRESHOLD: f64 = 0.9;
    pub const DEFAULT_JITTER: f64 = 0.01;

    pub fn new(coordinate_jitter: f64, status_change_threshold: f64) -> Self {
        Self {
            coordinate_jitter,
            status_change_threshold,
        }
    }

    /// Parameters of the vehicle service's own simulator.
    pub fn server() -> Self {
        Self::new(Self::DEFAULT_JITTER, Self::SERVER_STATUS_THRESHOLD)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_JITTER, Self::CLIENT_STATUS_THRESHOLD)
    }
}

/// Advance one vehicle.
///
/// Draw order: lat offset, lng offset, status gate, then the status pick only
/// when the gate passes. The pick may land on the current status.
pub fn perturb_vehicle(
    vehicle: &Vehicle,
    params: &SimulationParams,
    draws: &mut dyn DrawSource,
) -> Vehicle {
    let lat_offset = (draws.next_unit() - 0.5) * params.coordinate_jitter;
    let lng_offset = (draws.next_unit() - 0.5) * params.coordinate_jitter;

    let status = if draws.next_unit() > params.status_change_threshold {
        pick_status(draws.next_unit())
    } else {
        vehicle.status
    };

    Vehicle {
        status,
        lat: vehicle.lat + lat_offset,
        lng: vehicle.lng + lng_offset,
        ..vehicle.clone()
    }
}

/// Advance every vehicle independently, preserving order and ids.
pub fn perturb_fleet(
    vehicles: &[Vehicle],
    params: &SimulationParams,
    draws: &mut dyn DrawSource,
) -> Vec<Vehicle> {
    vehicles
        .iter()
        .map(|vehicle| perturb_vehicle(vehicle, params, draws))
        .collect()
}

fn pick_status(draw: f64) -> VehicleStatus {
    let count = VehicleStatus::ALL.len();
    let index = ((draw * count as f64).floor() as usize).min(count - 1);
    VehicleStatus::ALL[index]
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every coordinate moves by at most half the jitter
        #[test]
        fn prop_offsets_bounded(seed in any::<u64>()) {
            let fleet = crate::seed::seed_vehicles();
            let mut draws = RngDraws::new(StdRng::seed_from_u64(seed));
            let out = perturb_fleet(&fleet, &SimulationParams::default(), &mut draws);
            prop_assert_eq!(out.len(), fleet.len());
            for (before, after) in fleet.iter().zip(out.iter()) {
                prop_assert_eq!(&before.id, &after.id);
                prop_assert!((after.lat - before.lat).abs() <= 0.005);
                prop_assert!((after.lng - before.lng).abs() <= 0.005);
            }
        }

        /// Property: gates at or below the threshold never change a status
        #[test]
        fn prop_low_gates_keep_statuses(
            lat in 0.0f64..1.0,
            lng in 0.0f64..1.0,
            gate in 0.0f64..=0.8
        ) {
            let fleet = crate::seed::seed_vehicles();
            let mut draws = ScriptedDraws::new(vec![lat, lng, gate]);
            let out = perturb_fleet(&fleet, &SimulationParams::default(), &mut draws);
            for (before, after) in fleet.iter().zip(out.iter()) {
                prop_assert_eq!(before.status, after.status);
            }
        }
    }
}
