//! Sticky note tool view: a scratchpad persisted on every edit

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use eframe::egui;
use tracing::{info, warn};

use crate::clipboard;
use crate::constants::config;

use super::super::constants::ITEM_SPACING;

pub struct NoteState {
    pub text: String,
    path: PathBuf,
}

impl NoteState {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::SCRATCHPAD_FILENAME);
        path
    }

    /// Load the persisted scratchpad from `path`; a missing file is an
    /// empty note.
    pub fn load(path: PathBuf) -> Self {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => {
                info!("no scratchpad at {:?}, starting empty", path);
                String::new()
            }
        };
        Self { text, path }
    }

    fn persist(&self) {
        if let Err(err) = self.try_persist() {
            warn!("failed to persist scratchpad: {err:#}");
        }
    }

    fn try_persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {parent:?}"))?;
        }
        fs::write(&self.path, &self.text)
            .with_context(|| format!("failed to write scratchpad to {:?}", self.path))?;
        Ok(())
    }
}

pub fn ui(ui: &mut egui::Ui, state: &mut NoteState) {
    ui.label(egui::RichText::new("Scratchpad").heading().strong());
    ui.add_space(ITEM_SPACING);

    let edit = egui::TextEdit::multiline(&mut state.text)
        .font(egui::TextStyle::Monospace)
        .desired_rows(8)
        .desired_width(f32::INFINITY);
    if ui.add(edit).changed() {
        state.persist();
    }

    ui.add_space(ITEM_SPACING);
    ui.horizontal(|ui| {
        if ui.button("📋 Copy All").clicked() {
            clipboard::recopy(&state.text);
        }
        if ui.button("🗑 Clear").clicked() {
            state.text.clear();
            state.persist();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let state = NoteState::load(dir.path().join("scratchpad.txt"));
        assert!(state.text.is_empty());
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scratchpad.txt");

        let mut state = NoteState::load(path.clone());
        state.text = "buy milk\ncall back".to_string();
        state.persist();

        let reloaded = NoteState::load(path);
        assert_eq!(reloaded.text, "buy milk\ncall back");
    }

    #[test]
    fn test_persist_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scratchpad.txt");

        let state = NoteState {
            text: "hello".to_string(),
            path: path.clone(),
        };
        state.persist();

        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }
}
