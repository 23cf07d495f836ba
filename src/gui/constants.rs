//! Widget layout constants, timings and status colors

use egui::Color32;

/// Collapsed orb window size (square)
pub const ORB_SIZE: f32 = 88.0;

/// Painted orb circle radius inside the collapsed window
pub const ORB_RADIUS: f32 = 36.0;

/// Expanded panel window size
pub const PANEL_WIDTH: f32 = 320.0;
pub const PANEL_HEIGHT: f32 = 400.0;

/// Action grid layout
pub const GRID_COLUMNS: usize = 3;
pub const GRID_SPACING: f32 = 12.0;
pub const GRID_BUTTON_WIDTH: f32 = 84.0;
pub const GRID_BUTTON_HEIGHT: f32 = 56.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Panel chrome
pub const PANEL_CORNER_RADIUS: u8 = 16;
pub const PANEL_MARGIN: i8 = 20;

/// Toast lifetime
pub const TOAST_SECS: u64 = 3;

/// Reference image window size
pub const REFERENCE_WIDTH: f32 = 420.0;
pub const REFERENCE_HEIGHT: f32 = 320.0;

/// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(0, 200, 0);
pub const STATUS_WARN: Color32 = Color32::from_rgb(200, 200, 0);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(200, 0, 0);

/// Repaint cadence while the widget is on screen
pub const TICK_MS: u64 = 250;

/// Ruler canvas height inside the panel
pub const RULER_CANVAS_HEIGHT: f32 = 220.0;

/// Clipboard list height
pub const CLIPBOARD_LIST_HEIGHT: f32 = 120.0;

/// Rendered QR code edge length
pub const QR_DISPLAY_SIZE: f32 = 120.0;
