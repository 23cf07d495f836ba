//! Volume tool view: step buttons and mute, forwarded to the invoker

use eframe::egui;

use super::super::constants::ITEM_SPACING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeOp {
    None,
    Down,
    Up,
    Mute,
}

pub fn ui(ui: &mut egui::Ui, step: i64) -> VolumeOp {
    let mut op = VolumeOp::None;

    ui.label(egui::RichText::new("Volume").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        if ui.button(format!("🔉 −{step}")).clicked() {
            op = VolumeOp::Down;
        }
        if ui.button(format!("🔊 +{step}")).clicked() {
            op = VolumeOp::Up;
        }
        if ui.button("🔇 Mute").clicked() {
            op = VolumeOp::Mute;
        }
    });

    op
}
