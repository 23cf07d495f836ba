//! Window placement and behavior settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{config, snap, volume};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Last window origin, restored on start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_y: Option<f32>,

    /// Edge-snap distance in px; 0 disables snapping
    #[serde(default = "default_snap_threshold")]
    pub snap_threshold: f32,

    /// Percent applied per volume button press
    #[serde(default = "default_volume_step")]
    pub volume_step: i64,

    /// Whether the background connectivity probe runs
    #[serde(default = "default_probe_enabled")]
    pub latency_probe_enabled: bool,
}

fn default_snap_threshold() -> f32 {
    snap::DEFAULT_THRESHOLD
}

fn default_volume_step() -> i64 {
    volume::DEFAULT_STEP
}

fn default_probe_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            snap_threshold: default_snap_threshold(),
            volume_step: default_volume_step(),
            latency_probe_enabled: default_probe_enabled(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::SETTINGS_FILENAME);
        path
    }

    /// Load settings from `path`, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Settings>(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("unreadable settings at {path:?}, using defaults: {err}");
                    Settings::default()
                }
            },
            Err(_) => {
                info!("no settings file at {path:?}, using defaults");
                Settings::default()
            }
        };
        settings.validate_and_clamp();
        settings
    }

    /// Clamp out-of-range values, warning about each correction.
    pub fn validate_and_clamp(&mut self) {
        if self.snap_threshold < 0.0 || self.snap_threshold > snap::MAX_THRESHOLD {
            let clamped = self.snap_threshold.clamp(0.0, snap::MAX_THRESHOLD);
            warn!(
                "snap_threshold {} out of range, clamping to {clamped}",
                self.snap_threshold
            );
            self.snap_threshold = clamped;
        }
        if self.volume_step < 1 || self.volume_step > volume::MAX_STEP {
            let clamped = self.volume_step.clamp(1, volume::MAX_STEP);
            warn!(
                "volume_step {} out of range, clamping to {clamped}",
                self.volume_step
            );
            self.volume_step = clamped;
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {parent:?}"))?;
        }
        let toml_string =
            toml::to_string_pretty(self).context("failed to serialize settings to TOML")?;
        fs::write(path, toml_string)
            .with_context(|| format!("failed to write settings to {path:?}"))?;
        Ok(())
    }
}
