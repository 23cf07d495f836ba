//! Screen ruler tool view: a draggable, resizable measuring rectangle

use eframe::egui;

use crate::constants::ruler;

use super::super::constants::{ITEM_SPACING, RULER_CANVAS_HEIGHT};

pub struct RulerState {
    pub width: f32,
    pub height: f32,
    pub visible: bool,
    /// Rectangle offset inside the canvas
    origin: egui::Vec2,
}

impl Default for RulerState {
    fn default() -> Self {
        Self {
            width: ruler::DEFAULT_WIDTH,
            height: ruler::DEFAULT_HEIGHT,
            visible: true,
            origin: egui::vec2(40.0, 36.0),
        }
    }
}

impl RulerState {
    pub fn reset_size(&mut self) {
        self.width = ruler::DEFAULT_WIDTH;
        self.height = ruler::DEFAULT_HEIGHT;
    }
}

pub fn clamp_width(width: f32) -> f32 {
    width.clamp(ruler::MIN_SIZE, ruler::MAX_WIDTH)
}

pub fn clamp_height(height: f32) -> f32 {
    height.clamp(ruler::MIN_SIZE, ruler::MAX_HEIGHT)
}

pub fn ui(ui: &mut egui::Ui, state: &mut RulerState) {
    ui.label(egui::RichText::new("Ruler").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        let toggle = if state.visible { "Hide" } else { "Show" };
        if ui.button(toggle).clicked() {
            state.visible = !state.visible;
        }
        if ui.button("Reset").clicked() {
            state.reset_size();
        }
    });

    ui.add_space(ITEM_SPACING);
    ui.horizontal(|ui| {
        ui.label("W:");
        ui.add(egui::Slider::new(&mut state.width, ruler::MIN_SIZE..=ruler::MAX_WIDTH).text(""));
        ui.add(
            egui::DragValue::new(&mut state.width)
                .range(ruler::MIN_SIZE..=ruler::MAX_WIDTH)
                .speed(1.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label("H:");
        ui.add(egui::Slider::new(&mut state.height, ruler::MIN_SIZE..=ruler::MAX_HEIGHT).text(""));
        ui.add(
            egui::DragValue::new(&mut state.height)
                .range(ruler::MIN_SIZE..=ruler::MAX_HEIGHT)
                .speed(1.0),
        );
    });

    ui.add_space(ITEM_SPACING);
    canvas(ui, state);
}

fn canvas(ui: &mut egui::Ui, state: &mut RulerState) {
    let size = egui::vec2(ui.available_width(), RULER_CANVAS_HEIGHT);
    let (canvas_rect, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let canvas_rect = canvas_rect.rect;

    painter.rect_filled(
        canvas_rect,
        egui::CornerRadius::same(4),
        egui::Color32::from_gray(30),
    );

    if !state.visible {
        return;
    }

    // Drag the body to move, drag the corner handle to resize
    let rect = egui::Rect::from_min_size(
        canvas_rect.min + state.origin,
        egui::vec2(state.width, state.height),
    );

    let handle_rect = egui::Rect::from_center_size(rect.max, egui::vec2(16.0, 16.0));
    let handle = ui.interact(
        handle_rect,
        ui.id().with("ruler_resize"),
        egui::Sense::drag(),
    );
    if handle.dragged() {
        let delta = handle.drag_delta();
        state.width = clamp_width(state.width + delta.x);
        state.height = clamp_height(state.height + delta.y);
    }

    let body = ui.interact(
        rect.shrink(8.0),
        ui.id().with("ruler_move"),
        egui::Sense::drag(),
    );
    if body.dragged() {
        state.origin += body.drag_delta();
    }

    // Keep the rectangle inside the canvas
    state.origin.x = state
        .origin
        .x
        .clamp(0.0, (canvas_rect.width() - state.width).max(0.0));
    state.origin.y = state
        .origin
        .y
        .clamp(0.0, (RULER_CANVAS_HEIGHT - state.height).max(0.0));

    let rect = egui::Rect::from_min_size(
        canvas_rect.min + state.origin,
        egui::vec2(state.width, state.height),
    );
    let accent = egui::Color32::from_rgb(90, 150, 250);

    painter.rect_filled(
        rect,
        egui::CornerRadius::same(4),
        egui::Color32::from_rgba_unmultiplied(90, 150, 250, 40),
    );
    painter.rect_stroke(
        rect,
        egui::CornerRadius::same(4),
        egui::Stroke::new(1.5, accent),
        egui::StrokeKind::Inside,
    );
    painter.circle_filled(rect.max, 5.0, accent);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{} x {} px", state.width as i32, state.height as i32),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
}
