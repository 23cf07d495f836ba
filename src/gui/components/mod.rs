//! Panel content: action grid, list editor, settings and tool views

pub mod clipboard_view;
pub mod converter_view;
pub mod date_view;
pub mod decision_view;
pub mod editor;
pub mod grid;
pub mod latency_view;
pub mod note_view;
pub mod qr_view;
pub mod reference_view;
pub mod ruler_view;
pub mod settings_view;
pub mod stats_view;
pub mod timer_view;
pub mod volume_view;
