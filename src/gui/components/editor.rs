//! Action list editor: enable/disable entries and reorder them

use eframe::egui;

use crate::actions::Action;

use super::super::constants::ITEM_SPACING;
use super::grid::icon_glyph;

/// One edit requested this frame, applied by the caller against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOp {
    None,
    Toggle(String),
    MoveUp(usize),
    MoveDown(usize),
}

pub fn ui(ui: &mut egui::Ui, actions: &[Action]) -> EditorOp {
    let mut op = EditorOp::None;

    ui.label(egui::RichText::new("Actions").heading().strong());
    ui.add_space(ITEM_SPACING);

    egui::ScrollArea::vertical()
        .max_height(260.0)
        .show(ui, |ui| {
            let last = actions.len().saturating_sub(1);
            for (idx, action) in actions.iter().enumerate() {
                ui.horizontal(|ui| {
                    // Checkbox edits a copy; the caller owns the list
                    let mut enabled = action.enabled;
                    let label = format!("{} {}", icon_glyph(&action.icon), action.title);
                    if ui.checkbox(&mut enabled, label).changed() {
                        op = EditorOp::Toggle(action.id.clone());
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add_enabled(idx < last, egui::Button::new("⬇")).clicked() {
                            op = EditorOp::MoveDown(idx);
                        }
                        if ui.add_enabled(idx > 0, egui::Button::new("⬆")).clicked() {
                            op = EditorOp::MoveUp(idx);
                        }
                    });
                });
            }
        });

    op
}
