//! Clipboard history and the background poll thread.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use arboard::Clipboard;
use tracing::{debug, warn};

use crate::constants::clipboard::{MAX_ITEMS, POLL_INTERVAL_MS};
use crate::events::AppEvent;

/// Most-recent-first clipboard text history.
#[derive(Debug, Default)]
pub struct ClipboardHistory {
    items: Vec<String>,
}

impl ClipboardHistory {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move trimmed text to the front, dropping any earlier copy.
    /// Empty and whitespace-only text is ignored.
    pub fn push(&mut self, value: &str) {
        let text = value.trim();
        if text.is_empty() {
            return;
        }
        self.items.retain(|item| item != text);
        self.items.insert(0, text.to_string());
        self.items.truncate(MAX_ITEMS);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Write text back to the system clipboard.
pub fn recopy(text: &str) -> bool {
    match Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
        Ok(()) => true,
        Err(err) => {
            warn!("clipboard write failed: {err}");
            false
        }
    }
}

/// Read the current clipboard text, if any.
pub fn read_text() -> Option<String> {
    Clipboard::new().and_then(|mut cb| cb.get_text()).ok()
}

/// Poll the clipboard for changed text and forward captures to the UI.
/// Content already present at startup is not captured.
pub fn spawn_watcher(events: Sender<AppEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut clipboard = match Clipboard::new() {
            Ok(cb) => cb,
            Err(err) => {
                warn!("clipboard unavailable, history disabled: {err}");
                return;
            }
        };
        let mut last = clipboard.get_text().ok();
        loop {
            if let Ok(text) = clipboard.get_text() {
                if last.as_deref() != Some(text.as_str()) {
                    last = Some(text.clone());
                    if events.send(AppEvent::ClipboardCaptured(text)).is_err() {
                        debug!("clipboard watcher stopping, channel closed");
                        return;
                    }
                }
            }
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_fronts_new_text() {
        let mut history = ClipboardHistory::default();
        history.push("one");
        history.push("two");
        assert_eq!(history.items(), ["two", "one"]);
    }

    #[test]
    fn test_push_moves_duplicate_to_front() {
        let mut history = ClipboardHistory::default();
        history.push("one");
        history.push("two");
        history.push("one");
        assert_eq!(history.items(), ["one", "two"]);
    }

    #[test]
    fn test_push_trims_and_ignores_whitespace() {
        let mut history = ClipboardHistory::default();
        history.push("  padded \n");
        history.push("   ");
        history.push("");
        assert_eq!(history.items(), ["padded"]);
    }

    #[test]
    fn test_history_caps_at_limit() {
        let mut history = ClipboardHistory::default();
        for i in 0..(MAX_ITEMS + 5) {
            history.push(&format!("entry {i}"));
        }
        assert_eq!(history.items().len(), MAX_ITEMS);
        assert_eq!(history.items()[0], format!("entry {}", MAX_ITEMS + 4));
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = ClipboardHistory::default();
        history.push("one");
        history.clear();
        assert!(history.is_empty());
    }
}
