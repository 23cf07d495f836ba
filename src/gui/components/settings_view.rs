//! Settings editor shown on the panel's edit screen

use eframe::egui;

use crate::constants::{snap, volume};
use crate::settings::Settings;

use super::super::constants::ITEM_SPACING;

/// Renders the settings controls and returns true if any value changed
pub fn ui(ui: &mut egui::Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Behavior").heading().strong());
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.label("Snap Threshold:");
            ui.add_space(5.0);
            if ui
                .add(
                    egui::Slider::new(&mut settings.snap_threshold, 0.0..=snap::MAX_THRESHOLD)
                        .suffix(" px")
                        .text(""),
                )
                .changed()
            {
                changed = true;
            }
        });
        ui.label(
            egui::RichText::new("(0 disables edge snapping)")
                .small()
                .italics(),
        );

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.label("Volume Step:");
            ui.add_space(5.0);
            if ui
                .add(egui::Slider::new(&mut settings.volume_step, 1..=volume::MAX_STEP).text(""))
                .changed()
            {
                changed = true;
            }
        });

        ui.add_space(ITEM_SPACING);

        if ui
            .checkbox(&mut settings.latency_probe_enabled, "Probe network latency")
            .changed()
        {
            changed = true;
        }
        ui.label(
            egui::RichText::new("(Takes effect on next launch)")
                .small()
                .weak(),
        );
    });

    changed
}
