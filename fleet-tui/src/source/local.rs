use super::{FleetSource, Snapshot, SourceError};
use crate::config::SimulationConfig;
use async_trait::async_trait;
use fleet_core::{perturb_fleet, seed_vehicles, DrawSource, RngDraws, SimulationParams, Vehicle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::Mutex;

/// Client-side stand-in for the vehicle service.
///
/// `fetch_initial` hands back the built-in seed fleet. `simulate` waits the
/// configured delay, then perturbs the list it was given. Neither operation
/// fails.
pub struct LocalSource {
    params: SimulationParams,
    delay: Duration,
    draws: Mutex<Box<dyn DrawSource>>,
}

impl LocalSource {
    pub fn new(params: SimulationParams, delay: Duration, draws: Box<dyn DrawSource>) -> Self {
        Self {
            params,
            delay,
            draws: Mutex::new(draws),
        }
    }

    /// Seeded from `config.seed` when present, otherwise from OS entropy.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(
            config.params(),
            config.fallback_delay(),
            Box::new(RngDraws::new(rng)),
        )
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl FleetSource for LocalSource {
    async fn fetch_initial(&self) -> Result<Snapshot, SourceError> {
        Ok(Snapshot::local(seed_vehicles()))
    }

    async fn simulate(&self, current: &[Vehicle]) -> Result<Snapshot, SourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let mut draws = self.draws.lock().await;
        let vehicles = perturb_fleet(current, &self.params, &mut **draws);
        Ok(Snapshot::local(vehicles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DataOrigin;
    use fleet_test_utils::assertions::{assert_statuses_unchanged, assert_within_offset};
    use fleet_test_utils::fixtures::{mixed_fleet, status_preserving_draws};
    use fleet_test_utils::ScriptedDraws;

    fn config(seed: Option<u64>) -> SimulationConfig {
        SimulationConfig {
            fallback_delay_ms: 0,
            coordinate_jitter: 0.01,
            status_change_threshold: 0.8,
            seed,
            auto_interval_ms: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_initial_is_seed_fleet() {
        let source = LocalSource::from_config(&config(None));
        let snapshot = source.fetch_initial().await.unwrap();
        assert_eq!(snapshot.origin, DataOrigin::Local);
        assert_eq!(snapshot.vehicles, seed_vehicles());
    }

    #[tokio::test]
    async fn test_simulate_perturbs_given_list() {
        let source = LocalSource::new(
            SimulationParams::default(),
            Duration::ZERO,
            Box::new(status_preserving_draws(0.9, 0.1)),
        );
        let before = mixed_fleet();
        let snapshot = source.simulate(&before).await.unwrap();

        assert_eq!(snapshot.origin, DataOrigin::Local);
        assert_within_offset(&before, &snapshot.vehicles, 0.005);
        assert_statuses_unchanged(&before, &snapshot.vehicles);
        assert!((snapshot.vehicles[0].lat - (before[0].lat + 0.004)).abs() < 1e-12);
        assert!((snapshot.vehicles[0].lng - (before[0].lng - 0.004)).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_simulate_empty_list() {
        let source = LocalSource::new(
            SimulationParams::default(),
            Duration::ZERO,
            Box::new(ScriptedDraws::default()),
        );
        assert!(source.simulate(&[]).await.unwrap().vehicles.is_empty());
    }

    #[tokio::test]
    async fn test_same_seed_same_result() {
        let first = LocalSource::from_config(&config(Some(9)));
        let second = LocalSource::from_config(&config(Some(9)));
        let fleet = seed_vehicles();
        assert_eq!(
            first.simulate(&fleet).await.unwrap(),
            second.simulate(&fleet).await.unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_waits_for_delay() {
        let source = LocalSource::new(
            SimulationParams::default(),
            Duration::from_millis(600),
            Box::new(ScriptedDraws::new(vec![0.5])),
        );
        let started = tokio::time::Instant::now();
        source.simulate(&mixed_fleet()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(600));
    }
}
