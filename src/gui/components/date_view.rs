//! Date tool view: days-until countdown and date arithmetic

use chrono::{Duration, NaiveDate};
use eframe::egui;

use super::super::constants::ITEM_SPACING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    Difference,
    Add,
}

pub struct DateState {
    pub mode: DateMode,
    pub target_text: String,
    pub days_to_add: i64,
}

impl DateState {
    /// Starts in difference mode with a target one week out.
    pub fn new(today: NaiveDate) -> Self {
        let initial = add_days(today, 7).unwrap_or(today);
        Self {
            mode: DateMode::Difference,
            target_text: initial.format("%Y-%m-%d").to_string(),
            days_to_add: 45,
        }
    }
}

/// Whole days from `today` to `target`; negative for past dates.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

pub fn difference_label(days: i64) -> String {
    let plural = if days == 1 { "" } else { "s" };
    format!("{days} day{plural} left")
}

pub fn ui(ui: &mut egui::Ui, state: &mut DateState, today: NaiveDate) {
    ui.label(egui::RichText::new("Date Tool").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.mode, DateMode::Difference, "Difference");
        ui.selectable_value(&mut state.mode, DateMode::Add, "Add");
    });
    ui.add_space(ITEM_SPACING);

    match state.mode {
        DateMode::Difference => {
            ui.horizontal(|ui| {
                ui.label("Future date:");
                ui.text_edit_singleline(&mut state.target_text);
            });
            ui.add_space(ITEM_SPACING);

            match NaiveDate::parse_from_str(state.target_text.trim(), "%Y-%m-%d") {
                Ok(target) => {
                    let label = difference_label(days_until(today, target));
                    ui.label(egui::RichText::new(label).strong());
                }
                Err(_) => {
                    ui.label(
                        egui::RichText::new("Enter a date as YYYY-MM-DD")
                            .small()
                            .weak(),
                    );
                }
            }
        }
        DateMode::Add => {
            ui.horizontal(|ui| {
                ui.label("Days to add:");
                ui.add(
                    egui::DragValue::new(&mut state.days_to_add)
                        .range(0..=10_000)
                        .speed(1.0),
                );
            });
            ui.add_space(ITEM_SPACING);

            match add_days(today, state.days_to_add) {
                Some(target) => {
                    let label = target.format("%B %-d, %Y").to_string();
                    ui.label(egui::RichText::new(label).strong());
                }
                None => {
                    ui.label("Date unavailable");
                }
            }
        }
    }
}
