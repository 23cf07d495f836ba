//! Decision maker tool view: coin flip and die roll

use eframe::egui;
use rand::Rng;

use super::super::constants::ITEM_SPACING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionMode {
    Coin,
    Dice,
}

pub struct DecisionState {
    pub mode: DecisionMode,
    pub coin_result: &'static str,
    pub dice_result: u8,
}

impl Default for DecisionState {
    fn default() -> Self {
        Self {
            mode: DecisionMode::Coin,
            coin_result: "Heads",
            dice_result: 1,
        }
    }
}

impl DecisionState {
    pub fn flip_coin(&mut self) {
        self.coin_result = if rand::rng().random_bool(0.5) {
            "Heads"
        } else {
            "Tails"
        };
    }

    pub fn roll_dice(&mut self) {
        self.dice_result = rand::rng().random_range(1..=6);
    }
}

pub fn ui(ui: &mut egui::Ui, state: &mut DecisionState) {
    ui.label(egui::RichText::new("Decide").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.mode, DecisionMode::Coin, "Coin");
        ui.selectable_value(&mut state.mode, DecisionMode::Dice, "Dice");
    });
    ui.add_space(ITEM_SPACING);

    match state.mode {
        DecisionMode::Coin => {
            ui.label(egui::RichText::new(state.coin_result).size(28.0).strong());
            ui.add_space(ITEM_SPACING);
            if ui.button("🪙 Flip").clicked() {
                state.flip_coin();
            }
        }
        DecisionMode::Dice => {
            ui.label(
                egui::RichText::new(state.dice_result.to_string())
                    .size(28.0)
                    .strong(),
            );
            ui.add_space(ITEM_SPACING);
            if ui.button("🎲 Roll").clicked() {
                state.roll_dice();
            }
        }
    }
}
