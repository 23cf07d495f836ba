//! Action records, the default set, and schema migration for persisted lists.
//!
//! The persisted layout keeps the field names earlier builds wrote
//! (`systemImage`, `isEnabled`) so existing lists migrate cleanly. Kinds are
//! stored as raw strings and resolved during migration so retired or unknown
//! kinds can be dropped instead of failing the whole load.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Effect selector for a quick action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Legacy kind kept decodable; never shown or invoked
    GoHome,
    DesktopIcons,
    Appearance,
    Command,
    Finder,
    VolumeControl,
    Clipboard,
    QrCode,
    Latency,
    ReferenceImage,
    DateUtility,
    QuickTimer,
    StickyNote,
    ScreenRuler,
    DecisionMaker,
    ImageConverter,
    TextStats,
}

impl ActionKind {
    /// Resolve a persisted kind string; `None` for retired or unknown kinds.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "goHome" => Some(Self::GoHome),
            "desktopIcons" => Some(Self::DesktopIcons),
            "appearance" => Some(Self::Appearance),
            "command" => Some(Self::Command),
            "finder" => Some(Self::Finder),
            "volumeControl" => Some(Self::VolumeControl),
            "clipboard" => Some(Self::Clipboard),
            "qrCode" => Some(Self::QrCode),
            "latency" => Some(Self::Latency),
            "referenceImage" => Some(Self::ReferenceImage),
            "dateUtility" => Some(Self::DateUtility),
            "quickTimer" => Some(Self::QuickTimer),
            "stickyNote" => Some(Self::StickyNote),
            "screenRuler" => Some(Self::ScreenRuler),
            "decisionMaker" => Some(Self::DecisionMaker),
            "imageConverter" => Some(Self::ImageConverter),
            "textStats" => Some(Self::TextStats),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> &'static str {
        match self {
            Self::GoHome => "goHome",
            Self::DesktopIcons => "desktopIcons",
            Self::Appearance => "appearance",
            Self::Command => "command",
            Self::Finder => "finder",
            Self::VolumeControl => "volumeControl",
            Self::Clipboard => "clipboard",
            Self::QrCode => "qrCode",
            Self::Latency => "latency",
            Self::ReferenceImage => "referenceImage",
            Self::DateUtility => "dateUtility",
            Self::QuickTimer => "quickTimer",
            Self::StickyNote => "stickyNote",
            Self::ScreenRuler => "screenRuler",
            Self::DecisionMaker => "decisionMaker",
            Self::ImageConverter => "imageConverter",
            Self::TextStats => "textStats",
        }
    }

    /// True for kinds no build should keep in the list.
    pub fn is_retired(raw: &str) -> bool {
        RETIRED_KINDS.contains(&raw)
    }
}

/// Kind strings stripped from persisted lists during migration.
pub const RETIRED_KINDS: [&str; 5] = ["goHome", "volumeUp", "volumeDown", "mirror", "voiceMemo"];

/// A user-configurable quick-action entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: String,
    pub title: String,
    /// Icon name; mapped to a glyph at render time
    pub icon: String,
    pub enabled: bool,
    pub kind: ActionKind,
}

/// Persisted shape, tolerant of kinds this build no longer knows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAction {
    pub id: String,
    pub title: String,
    #[serde(rename = "systemImage")]
    pub icon: String,
    #[serde(rename = "isEnabled")]
    pub enabled: bool,
    pub kind: String,
}

impl From<&Action> for StoredAction {
    fn from(action: &Action) -> Self {
        Self {
            id: action.id.clone(),
            title: action.title.clone(),
            icon: action.icon.clone(),
            enabled: action.enabled,
            kind: action.kind.as_raw().to_string(),
        }
    }
}

fn action(id: &str, title: &str, icon: &str, kind: ActionKind) -> Action {
    Action {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        enabled: true,
        kind,
    }
}

/// The built-in action list in its defined order.
pub fn defaults() -> Vec<Action> {
    vec![
        action("desktopIcons", "Desktop", "eye", ActionKind::DesktopIcons),
        action("appearance", "Theme", "sun.max.fill", ActionKind::Appearance),
        action("clipboard", "Clipboard", "doc.on.clipboard", ActionKind::Clipboard),
        action("qrcode", "QR Code", "qrcode", ActionKind::QrCode),
        action("latency", "Latency", "dot.radiowaves.left.and.right", ActionKind::Latency),
        action("referenceImage", "Reference", "photo.on.rectangle.angled", ActionKind::ReferenceImage),
        action("dateUtility", "Date Tool", "calendar.badge.clock", ActionKind::DateUtility),
        action("quickTimer", "Timer", "timer", ActionKind::QuickTimer),
        action("stickyNote", "Scratchpad", "note.text", ActionKind::StickyNote),
        action("screenRuler", "Ruler", "ruler", ActionKind::ScreenRuler),
        action("decisionMaker", "Decide", "dice", ActionKind::DecisionMaker),
        action("imageConverter", "Convert", "photo.badge.checkmark", ActionKind::ImageConverter),
        action("textStats", "Text Stats", "textformat.abc", ActionKind::TextStats),
        action("command", "Command", "terminal", ActionKind::Command),
        action("finder", "Finder", "folder", ActionKind::Finder),
        action("volume", "Volume", "speaker.wave.2.fill", ActionKind::VolumeControl),
    ]
}

/// Kinds a migrated list must contain. `Command` and `Finder` are optional
/// and never re-inserted once a user removes them.
fn is_mandatory(kind: ActionKind) -> bool {
    !matches!(kind, ActionKind::Command | ActionKind::Finder | ActionKind::GoHome)
}

/// Bring a persisted list up to the current schema.
///
/// Steps, in order: drop retired and unknown kinds, drop duplicate ids,
/// insert each missing mandatory kind at its position in the defaults table
/// (`VolumeControl` appends at the end), and fall back to the full default
/// list if nothing remains.
pub fn migrate(schema: u32, stored: Vec<StoredAction>) -> Vec<Action> {
    debug!(schema, entries = stored.len(), "migrating action list");

    let mut actions: Vec<Action> = Vec::with_capacity(stored.len());
    for entry in stored {
        if ActionKind::is_retired(&entry.kind) {
            debug!(kind = %entry.kind, "dropping retired action kind");
            continue;
        }
        let Some(kind) = ActionKind::from_raw(&entry.kind) else {
            debug!(kind = %entry.kind, "dropping unknown action kind");
            continue;
        };
        if actions.iter().any(|a| a.id == entry.id) {
            continue;
        }
        actions.push(Action {
            id: entry.id,
            title: entry.title,
            icon: entry.icon,
            enabled: entry.enabled,
            kind,
        });
    }

    for (position, default) in defaults().into_iter().enumerate() {
        if !is_mandatory(default.kind) {
            continue;
        }
        if actions.iter().any(|a| a.kind == default.kind) {
            continue;
        }
        if default.kind == ActionKind::VolumeControl {
            actions.push(default);
        } else {
            let at = position.min(actions.len());
            actions.insert(at, default);
        }
    }

    if actions.is_empty() { defaults() } else { actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(list: &[Action]) -> Vec<StoredAction> {
        list.iter().map(StoredAction::from).collect()
    }

    #[test]
    fn test_defaults_order() {
        let defaults = defaults();
        assert_eq!(defaults.len(), 16);
        assert_eq!(defaults[0].kind, ActionKind::DesktopIcons);
        assert_eq!(defaults[1].kind, ActionKind::Appearance);
        assert_eq!(defaults[2].kind, ActionKind::Clipboard);
        assert_eq!(defaults[12].kind, ActionKind::TextStats);
        assert_eq!(defaults[15].kind, ActionKind::VolumeControl);
        assert!(defaults.iter().all(|a| a.enabled));

        let mut ids: Vec<&str> = defaults.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), defaults.len());
    }

    #[test]
    fn test_migrate_empty_falls_back_to_defaults() {
        assert_eq!(migrate(1, Vec::new()), defaults());
    }

    #[test]
    fn test_migrate_only_retired_falls_back_to_defaults() {
        let stored = vec![StoredAction {
            id: "goHome".into(),
            title: "Home".into(),
            icon: "house".into(),
            enabled: true,
            kind: "goHome".into(),
        }];
        assert_eq!(migrate(1, stored), defaults());
    }

    #[test]
    fn test_migrate_inserts_missing_mandatory_at_position() {
        let mut list = defaults();
        list.retain(|a| a.kind != ActionKind::Clipboard);
        let migrated = migrate(2, stored(&list));

        assert_eq!(migrated[2].kind, ActionKind::Clipboard);
        let count = migrated
            .iter()
            .filter(|a| a.kind == ActionKind::Clipboard)
            .count();
        assert_eq!(count, 1);
        assert_eq!(migrated.len(), defaults().len());
    }

    #[test]
    fn test_migrate_appends_missing_volume() {
        let mut list = defaults();
        list.retain(|a| a.kind != ActionKind::VolumeControl);
        let migrated = migrate(2, stored(&list));

        let last = migrated.last().map(|a| a.kind);
        assert_eq!(last, Some(ActionKind::VolumeControl));
    }

    #[test]
    fn test_migrate_strips_retired_and_unknown() {
        let mut raw = stored(&defaults());
        raw.push(StoredAction {
            id: "volumeUp".into(),
            title: "Vol +".into(),
            icon: "speaker".into(),
            enabled: true,
            kind: "volumeUp".into(),
        });
        raw.push(StoredAction {
            id: "future".into(),
            title: "Future".into(),
            icon: "sparkles".into(),
            enabled: true,
            kind: "somethingNew".into(),
        });

        let migrated = migrate(2, raw);
        assert!(migrated.iter().all(|a| a.id != "volumeUp"));
        assert!(migrated.iter().all(|a| a.id != "future"));
        assert_eq!(migrated, defaults());
    }

    #[test]
    fn test_migrate_never_reinserts_optional_kinds() {
        let mut list = defaults();
        list.retain(|a| !matches!(a.kind, ActionKind::Command | ActionKind::Finder));
        let migrated = migrate(2, stored(&list));

        assert!(migrated.iter().all(|a| a.kind != ActionKind::Command));
        assert!(migrated.iter().all(|a| a.kind != ActionKind::Finder));
    }

    #[test]
    fn test_migrate_drops_duplicate_ids() {
        let mut raw = stored(&defaults());
        let mut dup = raw[3].clone();
        dup.enabled = false;
        raw.push(dup);

        let migrated = migrate(2, raw);
        let count = migrated.iter().filter(|a| a.id == "qrcode").count();
        assert_eq!(count, 1);
        assert!(migrated.iter().find(|a| a.id == "qrcode").is_some_and(|a| a.enabled));
    }

    #[test]
    fn test_migrate_preserves_order_and_flags() {
        let mut list = defaults();
        list.swap(0, 5);
        list[3].enabled = false;
        let migrated = migrate(2, stored(&list));
        assert_eq!(migrated, list);
    }

    #[test]
    fn test_kind_raw_round_trip() {
        let defaults = defaults();
        for action in &defaults {
            assert_eq!(ActionKind::from_raw(action.kind.as_raw()), Some(action.kind));
        }
        assert_eq!(ActionKind::from_raw("volumeUp"), None);
        assert_eq!(ActionKind::from_raw(""), None);
    }
}
