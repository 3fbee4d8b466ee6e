//! Fleet dashboard entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fleet_tui::api_client::RestClient;
use fleet_tui::config::TuiConfig;
use fleet_tui::error::TuiError;
use fleet_tui::events::TuiEvent;
use fleet_tui::input::handle_event;
use fleet_tui::logging::init_logging;
use fleet_tui::source::{FleetSource, LocalSource, RemoteSource, ResilientSource};
use fleet_tui::state::App;
use fleet_tui::tasks::{self, ChannelListener};
use fleet_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval};

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config.log_path)?;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    let source = build_source(&config, event_tx.clone())?;
    let mut app = App::new(source);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    spawn_input_reader(event_tx.clone());
    tasks::spawn_initial_load(app.source(), event_tx.clone());

    let mut ticker = tokio::time::interval(config.tick_rate());
    let mut auto_simulate = config
        .simulation
        .auto_interval()
        .map(|period| tokio::time::interval_at(Instant::now() + period, period));

    tracing::info!(
        api_base_url = %config.api_base_url,
        auto_simulate = ?config.simulation.auto_interval_ms,
        "Dashboard started"
    );

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            _ = next_auto_tick(&mut auto_simulate) => {
                app.request_simulate(&event_tx);
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event, &event_tx) {
                    break;
                }
            }
        }
    }

    tracing::info!("Dashboard closed");
    Ok(())
}

fn build_source(
    config: &TuiConfig,
    sender: mpsc::Sender<TuiEvent>,
) -> Result<Arc<dyn FleetSource>, TuiError> {
    let remote = RemoteSource::new(RestClient::new(config)?);
    let local = LocalSource::from_config(&config.simulation);
    let resilient = ResilientSource::new(Arc::new(remote), Arc::new(local))
        .with_listener(Arc::new(ChannelListener::new(sender)));
    Ok(Arc::new(resilient))
}

async fn next_auto_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}
