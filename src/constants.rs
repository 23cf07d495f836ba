//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Configuration file locations
pub mod config {
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "quickorb";

    /// Persisted action list (JSON)
    pub const ACTIONS_FILENAME: &str = "actions.json";

    /// Window placement and behavior settings (TOML)
    pub const SETTINGS_FILENAME: &str = "settings.toml";

    /// Scratchpad text buffer
    pub const SCRATCHPAD_FILENAME: &str = "scratchpad.txt";
}

/// Action list schema versions
pub mod schema {
    /// Bare-array layout written by early builds
    pub const LEGACY: u32 = 1;

    /// Current envelope layout with an explicit version field
    pub const CURRENT: u32 = 2;
}

/// Connectivity probe
pub mod probe {
    /// Captive-portal check endpoint, probed with HEAD
    pub const URL: &str = "https://captive.apple.com/hotspot-detect.html";

    /// Seconds between probes
    pub const INTERVAL_SECS: u64 = 5;

    /// Per-request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 3;

    /// Round trips strictly under this are good (ms)
    pub const GOOD_BELOW_MS: u64 = 100;

    /// Round trips up to and including this are fair (ms)
    pub const FAIR_MAX_MS: u64 = 300;
}

/// Output volume bounds and step limits (percent)
pub mod volume {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    /// Step applied by the up/down buttons unless configured otherwise
    pub const DEFAULT_STEP: i64 = 5;

    /// Largest configurable step
    pub const MAX_STEP: i64 = 25;
}

/// Clipboard history
pub mod clipboard {
    /// Poll cadence for clipboard changes
    pub const POLL_INTERVAL_MS: u64 = 1000;

    /// Retained history entries
    pub const MAX_ITEMS: usize = 10;
}

/// Quick timer presets (minutes)
pub mod timer {
    pub const PRESETS_MIN: [u64; 3] = [5, 15, 25];
}

/// Screen ruler bounds (px, panel scale)
pub mod ruler {
    pub const MIN_SIZE: f32 = 40.0;
    pub const MAX_WIDTH: f32 = 280.0;
    pub const MAX_HEIGHT: f32 = 180.0;
    pub const DEFAULT_WIDTH: f32 = 170.0;
    pub const DEFAULT_HEIGHT: f32 = 90.0;
}

/// Text statistics
pub mod stats {
    /// Reading speed used for the estimate
    pub const WORDS_PER_MINUTE: usize = 200;
}

/// Image conversion
pub mod convert {
    /// JPEG quality for converted output
    pub const JPEG_QUALITY: u8 = 80;
}

/// Window snapping
pub mod snap {
    /// Default edge-snap distance in px (0 disables snapping)
    pub const DEFAULT_THRESHOLD: f32 = 15.0;

    /// Largest configurable snap distance
    pub const MAX_THRESHOLD: f32 = 50.0;
}
