//! Latency tool view: colored status dot plus the latest probe reading

use eframe::egui;

use crate::latency::{LatencyReading, LatencyStatus};

use super::super::constants::{ITEM_SPACING, STATUS_ERROR, STATUS_OK, STATUS_WARN};

fn status_color(reading: Option<&LatencyReading>) -> egui::Color32 {
    match reading.map(|r| r.status()) {
        Some(LatencyStatus::Good) => STATUS_OK,
        Some(LatencyStatus::Fair) => STATUS_WARN,
        // Poor, offline and no-reading-yet all show red
        _ => STATUS_ERROR,
    }
}

pub fn ui(ui: &mut egui::Ui, reading: Option<&LatencyReading>, probe_enabled: bool) {
    ui.label(egui::RichText::new("Latency").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), 4.0, status_color(reading));

        let label = reading
            .map(|r| r.label())
            .unwrap_or_else(|| "Error".to_string());
        ui.label(egui::RichText::new(label).strong());
    });

    if !probe_enabled {
        ui.add_space(ITEM_SPACING);
        ui.label(
            egui::RichText::new("(Probing disabled in settings)")
                .small()
                .weak(),
        );
    }
}
