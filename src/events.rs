//! Events flowing from background threads to the UI thread.

use crate::latency::LatencyReading;

/// Single channel drained by the UI once per frame.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Outcome of a fired OS action, surfaced as a toast
    Invocation {
        title: String,
        success: bool,
        detail: Option<String>,
    },
    /// Changed clipboard text captured by the poll thread
    ClipboardCaptured(String),
    /// Result of one connectivity probe
    LatencyProbe(LatencyReading),
}
