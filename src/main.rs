#![forbid(unsafe_code)]

mod actions;
mod clipboard;
mod constants;
mod events;
mod gui;
mod invoker;
mod latency;
mod settings;
mod snapping;
mod store;

use std::sync::mpsc;
use std::sync::Arc;

use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use invoker::{ShellRunner, SystemInvoker};
use settings::Settings;
use store::ActionStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path);
    info!(
        snap_threshold = settings.snap_threshold,
        volume_step = settings.volume_step,
        "loaded settings"
    );

    let store = ActionStore::load(ActionStore::default_path());
    info!(
        actions = store.actions().len(),
        enabled = store.enabled_actions().len(),
        "loaded action list"
    );

    // Channel for background thread -> UI events
    let (tx, rx) = mpsc::channel();

    let invoker = SystemInvoker::new(Arc::new(ShellRunner), tx.clone());

    let _clipboard_handle = clipboard::spawn_watcher(tx.clone());
    let _latency_handle = if settings.latency_probe_enabled {
        Some(latency::spawn_monitor(tx))
    } else {
        info!("latency probe disabled");
        None
    };

    gui::run_gui(store, settings, settings_path, invoker, rx)?;
    Ok(())
}
