//! Dashboard controller state.

use crate::events::TuiEvent;
use crate::source::{DataOrigin, FleetSource, Snapshot, SourceError};
use crate::tasks;
use crate::theme::FleetTheme;
use fleet_core::{
    filter_vehicles, seed_vehicles, FleetCounts, StatusFilter, Vehicle, VehicleQuery,
};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Owns the canonical vehicle list and every flag the UI renders from.
///
/// All mutation happens on the UI loop. Network and simulation work runs in
/// spawned tasks whose results come back as [`TuiEvent`]s.
pub struct App {
    pub theme: FleetTheme,
    pub input_mode: InputMode,
    pub show_help: bool,
    source: Arc<dyn FleetSource>,
    vehicles: Vec<Vehicle>,
    query: VehicleQuery,
    simulating: bool,
    using_fallback: bool,
    selected: Option<String>,
    replacements: u64,
}

impl App {
    /// Starts on the built-in seed fleet, connected, idle.
    pub fn new(source: Arc<dyn FleetSource>) -> Self {
        Self {
            theme: FleetTheme::fleet(),
            input_mode: InputMode::Normal,
            show_help: false,
            source,
            vehicles: seed_vehicles(),
            query: VehicleQuery::default(),
            simulating: false,
            using_fallback: false,
            selected: None,
            replacements: 0,
        }
    }

    pub fn source(&self) -> Arc<dyn FleetSource> {
        Arc::clone(&self.source)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn query(&self) -> &VehicleQuery {
        &self.query
    }

    pub fn is_simulating(&self) -> bool {
        self.simulating
    }

    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    /// Number of times the canonical list has been replaced.
    pub fn replacement_count(&self) -> u64 {
        self.replacements
    }

    pub fn filtered_vehicles(&self) -> Vec<&Vehicle> {
        filter_vehicles(&self.vehicles, &self.query)
    }

    /// Counts over the canonical list, independent of the current filter.
    pub fn counts(&self) -> FleetCounts {
        FleetCounts::tally(&self.vehicles)
    }

    pub fn apply_initial_load(&mut self, result: Result<Snapshot, SourceError>) {
        match result {
            Ok(Snapshot {
                vehicles,
                origin: DataOrigin::Remote,
            }) => {
                tracing::info!(count = vehicles.len(), "Loaded fleet from vehicle service");
                self.replace(vehicles);
                self.using_fallback = false;
            }
            Ok(Snapshot {
                origin: DataOrigin::Local,
                ..
            }) => {
                tracing::warn!("Vehicle service unavailable, keeping local fleet");
                self.using_fallback = true;
            }
            Err(error) => {
                tracing::warn!(error = %error, "Initial load failed, keeping local fleet");
                self.using_fallback = true;
            }
        }
    }

    /// Start a simulate cycle unless one is already in flight.
    ///
    /// Returns whether a cycle was started.
    pub fn request_simulate(&mut self, sender: &mpsc::Sender<TuiEvent>) -> bool {
        if self.simulating {
            tracing::debug!("Simulate already in flight, ignoring request");
            return false;
        }
        self.simulating = true;
        tasks::spawn_simulate(self.source(), self.vehicles.clone(), sender.clone());
        true
    }

    /// The remote attempt failed; the local fallback is underway.
    pub fn mark_fallback(&mut self) {
        self.using_fallback = true;
    }

    pub fn finish_simulate(&mut self, result: Result<Snapshot, SourceError>) {
        if !self.simulating {
            tracing::debug!("Simulate result with no cycle in flight, ignoring");
            return;
        }
        self.simulating = false;
        match result {
            Ok(snapshot) => {
                self.using_fallback = snapshot.origin == DataOrigin::Local;
                tracing::info!(
                    count = snapshot.vehicles.len(),
                    origin = ?snapshot.origin,
                    "Applied simulated fleet"
                );
                self.replace(snapshot.vehicles);
            }
            Err(error) => {
                tracing::warn!(error = %error, "Simulate failed, keeping current fleet");
                self.using_fallback = true;
            }
        }
    }

    fn replace(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles = vehicles;
        self.replacements += 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.search.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.query.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.query.search.clear();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    pub fn next_status_filter(&mut self) {
        self.query.status = self.query.status.next();
    }

    pub fn previous_status_filter(&mut self) {
        self.query.status = self.query.status.previous();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Row of the selection in the filtered list, if it is still visible.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_deref()?;
        self.filtered_vehicles().iter().position(|v| v.id == id)
    }

    pub fn select_next(&mut self) {
        let ids = self.filtered_ids();
        select_next_id(&ids, &mut self.selected);
    }

    pub fn select_previous(&mut self) {
        let ids = self.filtered_ids();
        select_prev_id(&ids, &mut self.selected);
    }

    fn filtered_ids(&self) -> Vec<String> {
        self.filtered_vehicles()
            .into_iter()
            .map(|v| v.id.clone())
            .collect()
    }
}

fn select_next_id(ids: &[String], selected: &mut Option<String>) {
    if ids.is_empty() {
        *selected = None;
        return;
    }
    let next = match selected
        .as_deref()
        .and_then(|id| ids.iter().position(|item| item == id))
    {
        Some(index) => (index + 1) % ids.len(),
        None => 0,
    };
    *selected = Some(ids[next].clone());
}

fn select_prev_id(ids: &[String], selected: &mut Option<String>) {
    if ids.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .as_deref()
        .and_then(|id| ids.iter().position(|item| item == id))
        .unwrap_or(0);
    let prev = if index == 0 { ids.len() - 1 } else { index - 1 };
    *selected = Some(ids[prev].clone());
}
