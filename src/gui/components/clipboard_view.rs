//! Clipboard history tool view

use eframe::egui;

use crate::clipboard::{self, ClipboardHistory};

use super::super::constants::{CLIPBOARD_LIST_HEIGHT, ITEM_SPACING};

const PREVIEW_CHARS: usize = 40;

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push('…');
    }
    out
}

pub fn ui(ui: &mut egui::Ui, history: &mut ClipboardHistory) {
    ui.label(egui::RichText::new("Clipboard").heading().strong());
    ui.add_space(ITEM_SPACING);

    if history.is_empty() {
        ui.label(egui::RichText::new("No copied text yet").weak());
        return;
    }

    let mut recopied: Option<String> = None;
    egui::ScrollArea::vertical()
        .max_height(CLIPBOARD_LIST_HEIGHT)
        .show(ui, |ui| {
            for item in history.items() {
                if ui
                    .selectable_label(false, preview(item))
                    .on_hover_text("Copy again")
                    .clicked()
                {
                    recopied = Some(item.clone());
                }
            }
        });

    // Re-copying moves the item back to the front
    if let Some(text) = recopied {
        if clipboard::recopy(&text) {
            history.push(&text);
        }
    }

    ui.add_space(ITEM_SPACING);
    if ui.button("🗑 Clear").clicked() {
        history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello"), "hello");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "x".repeat(60);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let long = "é".repeat(45);
        let shown = preview(&long);
        assert!(shown.ends_with('…'));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
    }
}
