//! Persisted, ordered action collection.
//!
//! Loading never fails: unreadable or malformed data falls back to the
//! default list with a log line. Every mutation persists before returning.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::actions::{self, Action, ActionKind, StoredAction};
use crate::constants::{config, schema};

#[derive(Debug, Serialize, Deserialize)]
struct StoredList {
    schema: u32,
    actions: Vec<StoredAction>,
}

pub struct ActionStore {
    actions: Vec<Action>,
    path: PathBuf,
}

impl ActionStore {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::ACTIONS_FILENAME);
        path
    }

    /// Load the persisted list from `path`, or fall back to defaults.
    pub fn load(path: PathBuf) -> Self {
        let actions = match fs::read_to_string(&path) {
            Ok(contents) => match decode(&contents) {
                Ok((version, stored)) => actions::migrate(version, stored),
                Err(err) => {
                    warn!("unreadable action list at {:?}, using defaults: {err}", path);
                    actions::defaults()
                }
            },
            Err(_) => {
                info!("no action list at {:?}, using defaults", path);
                actions::defaults()
            }
        };
        Self { actions, path }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Enabled actions in stored order; the legacy kind is never shown.
    pub fn enabled_actions(&self) -> Vec<Action> {
        self.actions
            .iter()
            .filter(|a| a.enabled && a.kind != ActionKind::GoHome)
            .cloned()
            .collect()
    }

    /// Flip one action's enabled flag.
    pub fn toggle(&mut self, id: &str) {
        if let Some(action) = self.actions.iter_mut().find(|a| a.id == id) {
            action.enabled = !action.enabled;
            debug!(action = %id, enabled = action.enabled, "toggled action");
            self.persist();
        }
    }

    /// Move the action at `from` to `to`. Out-of-range indices are clamped
    /// or ignored; membership never changes.
    pub fn move_action(&mut self, from: usize, to: usize) {
        if from >= self.actions.len() {
            return;
        }
        let to = to.min(self.actions.len() - 1);
        if from == to {
            return;
        }
        let action = self.actions.remove(from);
        self.actions.insert(to, action);
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.try_persist() {
            warn!("failed to persist action list: {err:#}");
        }
    }

    fn try_persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {parent:?}"))?;
        }
        let list = StoredList {
            schema: schema::CURRENT,
            actions: self.actions.iter().map(StoredAction::from).collect(),
        };
        let json = serde_json::to_string_pretty(&list).context("failed to encode action list")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write action list to {:?}", self.path))?;
        Ok(())
    }
}

/// Decode either the current envelope or the legacy bare array.
fn decode(contents: &str) -> Result<(u32, Vec<StoredAction>)> {
    if let Ok(list) = serde_json::from_str::<StoredList>(contents) {
        return Ok((list.schema, list.actions));
    }
    let actions = serde_json::from_str::<Vec<StoredAction>>(contents)
        .context("neither a schema envelope nor a bare action array")?;
    Ok((schema::LEGACY, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ActionStore {
        ActionStore::load(dir.path().join("actions.json"))
    }

    #[test]
    fn test_load_missing_file_yields_defaults_in_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.actions(), actions::defaults().as_slice());
    }

    #[test]
    fn test_load_malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actions.json");
        fs::write(&path, "{not json").unwrap();
        let store = ActionStore::load(path);
        assert_eq!(store.actions(), actions::defaults().as_slice());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let before = store.actions().to_vec();

        store.toggle("clipboard");
        assert!(!store.actions()[2].enabled);
        store.toggle("clipboard");
        assert_eq!(store.actions(), before.as_slice());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let before = store.actions().to_vec();
        store.toggle("nope");
        assert_eq!(store.actions(), before.as_slice());
    }

    #[test]
    fn test_move_preserves_membership() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let mut before: Vec<String> = store.actions().iter().map(|a| a.id.clone()).collect();

        store.move_action(0, 5);
        store.move_action(10, 1);
        store.move_action(3, 0);

        let mut after: Vec<String> = store.actions().iter().map(|a| a.id.clone()).collect();
        assert_eq!(after.len(), before.len());
        before.sort();
        after.sort();
        assert_eq!(after, before);
    }

    #[test]
    fn test_move_clamps_and_ignores_out_of_range() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let len = store.actions().len();

        store.move_action(len, 0);
        assert_eq!(store.actions(), actions::defaults().as_slice());

        store.move_action(0, len + 10);
        assert_eq!(store.actions().last().map(|a| a.id.as_str()), Some("desktopIcons"));
    }

    #[test]
    fn test_enabled_excludes_disabled_and_legacy_kinds() {
        let dir = TempDir::new().unwrap();
        let mut actions = actions::defaults();
        actions[1].enabled = false;
        actions.push(Action {
            id: "legacy".into(),
            title: "Home".into(),
            icon: "house".into(),
            enabled: true,
            kind: ActionKind::GoHome,
        });
        let store = ActionStore {
            actions,
            path: dir.path().join("actions.json"),
        };

        let enabled = store.enabled_actions();
        assert!(enabled.iter().all(|a| a.enabled));
        assert!(enabled.iter().all(|a| a.kind != ActionKind::GoHome));
        assert!(enabled.iter().all(|a| a.kind != ActionKind::Appearance));
        assert_eq!(enabled.len(), actions::defaults().len() - 1);
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actions.json");

        let mut store = ActionStore::load(path.clone());
        store.toggle("finder");
        store.move_action(0, 3);

        let reloaded = ActionStore::load(path);
        assert_eq!(reloaded.actions(), store.actions());
        assert!(reloaded.actions().iter().find(|a| a.id == "finder").is_some_and(|a| !a.enabled));
    }

    #[test]
    fn test_load_legacy_bare_array_migrates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actions.json");
        let legacy = r#"[
            {"id": "volumeUp", "title": "Vol +", "systemImage": "speaker.wave.3.fill", "isEnabled": true, "kind": "volumeUp"},
            {"id": "finder", "title": "Finder", "systemImage": "folder", "isEnabled": false, "kind": "finder"}
        ]"#;
        fs::write(&path, legacy).unwrap();

        let store = ActionStore::load(path);
        assert!(store.actions().iter().all(|a| a.id != "volumeUp"));
        assert!(store.actions().iter().find(|a| a.id == "finder").is_some_and(|a| !a.enabled));
        // All mandatory kinds backfilled around the surviving entry.
        assert!(store.actions().iter().any(|a| a.kind == ActionKind::Clipboard));
        assert!(store.actions().iter().any(|a| a.kind == ActionKind::VolumeControl));
    }

    #[test]
    fn test_persisted_file_carries_schema_envelope() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actions.json");
        let mut store = ActionStore::load(path.clone());
        store.toggle("clipboard");

        let written = fs::read_to_string(&path).unwrap();
        let list: StoredList = serde_json::from_str(&written).unwrap();
        assert_eq!(list.schema, schema::CURRENT);
        assert_eq!(list.actions.len(), store.actions().len());
    }
}
