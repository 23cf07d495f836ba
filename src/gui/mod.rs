//! Egui widget: floating orb window, expanded action panel, tool views

pub mod app;
pub mod components;
pub mod constants;

pub use app::run_gui;
