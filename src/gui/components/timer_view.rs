//! Quick timer tool view: preset countdowns with a cancel button

use std::time::{Duration, Instant};

use eframe::egui;

use crate::constants::timer;

use super::super::constants::ITEM_SPACING;

#[derive(Default)]
pub struct TimerState {
    deadline: Option<Instant>,
}

impl TimerState {
    pub fn start(&mut self, minutes: u64) {
        self.deadline = Some(Instant::now() + Duration::from_secs(minutes * 60));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left, zero once elapsed or when no timer runs
    pub fn remaining(&self) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::ZERO)
    }

    /// True exactly once when a running timer reaches zero
    pub fn poll_finished(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// mm:ss readout, rounded up so a fresh 5-minute timer reads 05:00
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs_f64().ceil() as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn ui(ui: &mut egui::Ui, state: &mut TimerState) {
    ui.label(egui::RichText::new("Timer").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.label(
        egui::RichText::new(format_remaining(state.remaining()))
            .monospace()
            .size(32.0),
    );
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        for &minutes in &timer::PRESETS_MIN {
            if ui.button(format!("{minutes} Min")).clicked() {
                state.start(minutes);
            }
        }
    });

    ui.add_space(ITEM_SPACING);
    if ui
        .add_enabled(state.is_running(), egui::Button::new("Cancel"))
        .clicked()
    {
        state.cancel();
    }
}
