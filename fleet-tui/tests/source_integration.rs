//! End-to-end checks of the resilient source feeding the controller through
//! the event channel, against a fake vehicle service.

use axum::routing::{get, post};
use axum::{Json, Router};
use fleet_core::{seed_vehicles, SimulationParams};
use fleet_test_utils::assertions::{assert_same_ids, assert_within_offset};
use fleet_test_utils::fixtures::advanced_fleet;
use fleet_test_utils::ScriptedDraws;
use fleet_tui::api_client::RestClient;
use fleet_tui::events::TuiEvent;
use fleet_tui::input::handle_event;
use fleet_tui::source::{FleetSource, LocalSource, Operation, RemoteSource, ResilientSource};
use fleet_tui::state::App;
use fleet_tui::tasks::{spawn_initial_load, ChannelListener};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

async fn serve_fleet() -> String {
    let router = Router::new()
        .route("/api/vehicles", get(|| async { Json(seed_vehicles()) }))
        .route("/api/vehicles/simulate", post(|| async { Json(advanced_fleet()) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn build(base_url: &str, sender: mpsc::Sender<TuiEvent>, delay: Duration) -> Arc<dyn FleetSource> {
    let remote = RemoteSource::new(
        RestClient::with_base_url(base_url, Duration::from_secs(2)).unwrap(),
    );
    let local = LocalSource::new(
        SimulationParams::default(),
        delay,
        Box::new(ScriptedDraws::new(vec![0.9, 0.1, 0.2])),
    );
    Arc::new(
        ResilientSource::new(Arc::new(remote), Arc::new(local))
            .with_listener(Arc::new(ChannelListener::new(sender))),
    )
}

async fn pump(app: &mut App, rx: &mut mpsc::Receiver<TuiEvent>, tx: &mpsc::Sender<TuiEvent>) -> TuiEvent {
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("event within timeout")
        .expect("channel open");
    handle_event(app, event.clone(), tx);
    event
}

#[tokio::test]
async fn service_down_engages_fallback_before_update() {
    let (tx, mut rx) = mpsc::channel(32);
    let mut app = App::new(build(&closed_port_url().await, tx.clone(), Duration::from_millis(50)));

    spawn_initial_load(app.source(), tx.clone());
    let first = pump(&mut app, &mut rx, &tx).await;
    assert!(matches!(first, TuiEvent::FallbackEngaged(Operation::FetchInitial)));
    let second = pump(&mut app, &mut rx, &tx).await;
    assert!(matches!(second, TuiEvent::InitialLoaded(_)));
    assert!(app.using_fallback());
    assert_eq!(app.vehicles(), seed_vehicles().as_slice());

    assert!(app.request_simulate(&tx));
    let engaged = pump(&mut app, &mut rx, &tx).await;
    assert!(matches!(engaged, TuiEvent::FallbackEngaged(Operation::Simulate)));
    assert!(app.using_fallback());
    assert!(app.is_simulating());

    let finished = pump(&mut app, &mut rx, &tx).await;
    assert!(matches!(finished, TuiEvent::SimulateFinished(Ok(_))));
    assert!(!app.is_simulating());
    assert_within_offset(&seed_vehicles(), app.vehicles(), 0.005);
    assert_eq!(app.replacement_count(), 1);
}

#[tokio::test]
async fn live_service_replaces_list_and_stays_connected() {
    let (tx, mut rx) = mpsc::channel(32);
    let mut app = App::new(build(&serve_fleet().await, tx.clone(), Duration::ZERO));

    spawn_initial_load(app.source(), tx.clone());
    let loaded = pump(&mut app, &mut rx, &tx).await;
    assert!(matches!(loaded, TuiEvent::InitialLoaded(Ok(_))));
    assert!(!app.using_fallback());

    assert!(app.request_simulate(&tx));
    assert!(!app.request_simulate(&tx));
    pump(&mut app, &mut rx, &tx).await;

    assert_eq!(app.vehicles(), advanced_fleet().as_slice());
    assert_same_ids(&seed_vehicles(), app.vehicles());
    assert!(!app.using_fallback());
    assert_eq!(app.replacement_count(), 2);
}
