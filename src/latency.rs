//! Connectivity probe against a captive-portal endpoint.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::constants::probe;
use crate::events::AppEvent;

/// One probe result delivered to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyReading {
    /// Round trip in milliseconds
    Reachable(u64),
    /// Request failed or returned an unexpected status
    Offline,
}

/// Display classification for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyStatus {
    Good,
    Fair,
    Poor,
    Offline,
}

impl LatencyReading {
    pub fn status(&self) -> LatencyStatus {
        match self {
            LatencyReading::Reachable(ms) if *ms < probe::GOOD_BELOW_MS => LatencyStatus::Good,
            LatencyReading::Reachable(ms) if *ms <= probe::FAIR_MAX_MS => LatencyStatus::Fair,
            LatencyReading::Reachable(_) => LatencyStatus::Poor,
            LatencyReading::Offline => LatencyStatus::Offline,
        }
    }

    pub fn label(&self) -> String {
        match self {
            LatencyReading::Reachable(ms) => format!("{ms}ms"),
            LatencyReading::Offline => "Error".to_string(),
        }
    }
}

/// Probe the endpoint immediately and then on an interval, forwarding each
/// reading to the UI.
pub fn spawn_monitor(events: Sender<AppEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let client = match reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(probe::TIMEOUT_SECS))
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                warn!("probe client build failed, latency disabled: {err}");
                return;
            }
        };
        loop {
            let reading = probe_once(&client);
            if events.send(AppEvent::LatencyProbe(reading)).is_err() {
                debug!("latency monitor stopping, channel closed");
                return;
            }
            thread::sleep(Duration::from_secs(probe::INTERVAL_SECS));
        }
    })
}

fn probe_once(client: &reqwest::blocking::Client) -> LatencyReading {
    let start = Instant::now();
    match client.head(probe::URL).send() {
        Ok(response) if (200..400).contains(&response.status().as_u16()) => {
            LatencyReading::Reachable(start.elapsed().as_millis() as u64)
        }
        Ok(response) => {
            debug!(status = %response.status(), "probe rejected");
            LatencyReading::Offline
        }
        Err(err) => {
            debug!("probe failed: {err}");
            LatencyReading::Offline
        }
    }
}
