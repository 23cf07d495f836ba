//! Action grid shown when the orb is expanded

use eframe::egui;

use crate::actions::Action;

use super::super::constants::{GRID_BUTTON_HEIGHT, GRID_BUTTON_WIDTH, GRID_COLUMNS, GRID_SPACING};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridClick {
    None,
    /// Index into the enabled-action slice
    Action(usize),
    Close,
}

/// Maps a stored icon name to a glyph the default fonts can draw.
/// Unknown names fall back to a plain dot.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "eye" => "👁",
        "sun.max.fill" => "☀",
        "doc.on.clipboard" => "📋",
        "qrcode" => "🔳",
        "dot.radiowaves.left.and.right" => "📶",
        "photo.on.rectangle.angled" => "🖼",
        "calendar.badge.clock" => "📅",
        "timer" => "⏳",
        "note.text" => "📝",
        "ruler" => "📏",
        "dice" => "🎲",
        "photo.badge.checkmark" => "✅",
        "textformat.abc" => "🔡",
        "terminal" => "💻",
        "folder" => "📁",
        "speaker.wave.2.fill" => "🔊",
        _ => "●",
    }
}

fn grid_button(label: String) -> egui::Button<'static> {
    egui::Button::new(label).min_size(egui::vec2(GRID_BUTTON_WIDTH, GRID_BUTTON_HEIGHT))
}

/// Renders the action grid and returns what was clicked this frame.
/// The close cell always trails the last action.
pub fn ui(ui: &mut egui::Ui, actions: &[Action]) -> GridClick {
    let mut clicked = GridClick::None;

    egui::Grid::new("action_grid")
        .num_columns(GRID_COLUMNS)
        .spacing([GRID_SPACING, GRID_SPACING])
        .show(ui, |ui| {
            for (idx, action) in actions.iter().enumerate() {
                let label = format!("{}\n{}", icon_glyph(&action.icon), action.title);
                if ui.add(grid_button(label)).clicked() {
                    clicked = GridClick::Action(idx);
                }
                if (idx + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }

            if ui.add(grid_button("✖\nClose".to_string())).clicked() {
                clicked = GridClick::Close;
            }
        });

    clicked
}
