//! Text statistics tool view, fed from the system clipboard

use eframe::egui;

use crate::clipboard;
use crate::constants::stats::WORDS_PER_MINUTE;

use super::super::constants::ITEM_SPACING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub read_minutes: usize,
}

/// Counts characters, whitespace-separated words and `.!?`-terminated
/// sentences. The read estimate never drops below one minute.
pub fn analyze(text: &str) -> TextStats {
    let characters = text.chars().count();
    let words = text.split_whitespace().count();
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|part| !part.trim().is_empty())
        .count();
    let read_minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    TextStats {
        characters,
        words,
        sentences,
        read_minutes,
    }
}

#[derive(Default)]
pub struct StatsState {
    pub text: String,
}

impl StatsState {
    /// Pull the current clipboard text; empty when nothing is there.
    pub fn refresh(&mut self) {
        self.text = clipboard::read_text().unwrap_or_default();
    }
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).monospace().strong());
        });
    });
}

pub fn ui(ui: &mut egui::Ui, state: &mut StatsState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Text Stats").heading().strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                state.refresh();
            }
        });
    });
    ui.add_space(ITEM_SPACING);

    let stats = analyze(&state.text);
    stat_row(ui, "Character Count", stats.characters.to_string());
    stat_row(ui, "Word Count", stats.words.to_string());
    stat_row(ui, "Sentence Count", stats.sentences.to_string());
    stat_row(
        ui,
        "Estimated Read Time",
        format!("{} min", stats.read_minutes),
    );
}
