//! Reference image tool: drop an image to open it in its own floating window

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use eframe::egui;
use tracing::{info, warn};

use super::super::constants::{ITEM_SPACING, REFERENCE_HEIGHT, REFERENCE_WIDTH};

const DROP_ZONE_HEIGHT: f32 = 180.0;

pub struct ReferenceImage {
    id: u64,
    name: String,
    texture: egui::TextureHandle,
}

#[derive(Default)]
pub struct ReferenceState {
    images: Vec<ReferenceImage>,
    next_id: u64,
}

impl ReferenceState {
    /// Decode `path` and open a floating window for it. Unreadable files
    /// log a warning and open nothing.
    pub fn open(&mut self, ctx: &egui::Context, path: &Path) {
        match load_reference(ctx, path, self.next_id) {
            Ok(image) => {
                info!(name = %image.name, "opened reference image");
                self.images.push(image);
                self.next_id += 1;
            }
            Err(err) => warn!("could not open reference image: {err:#}"),
        }
    }

    pub fn window_count(&self) -> usize {
        self.images.len()
    }

    fn prune(&mut self, closed: &[u64]) {
        if closed.is_empty() {
            return;
        }
        self.images.retain(|image| !closed.contains(&image.id));
    }
}

fn load_reference(ctx: &egui::Context, path: &Path, id: u64) -> Result<ReferenceImage> {
    let decoded = image::open(path).with_context(|| format!("failed to decode {path:?}"))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("reference")
        .to_string();
    let texture = ctx.load_texture(
        format!("reference_{id}"),
        color,
        egui::TextureOptions::LINEAR,
    );
    Ok(ReferenceImage { id, name, texture })
}

pub fn ui(ui: &mut egui::Ui, state: &mut ReferenceState, dropped: &[PathBuf]) {
    ui.label(egui::RichText::new("Reference").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.label(
        egui::RichText::new("Drop an image to open a floating reference window.")
            .small()
            .weak(),
    );
    ui.add_space(ITEM_SPACING);

    drop_zone(ui);

    if let Some(path) = dropped.first() {
        let ctx = ui.ctx().clone();
        state.open(&ctx, path);
    }

    if state.window_count() > 0 {
        ui.add_space(ITEM_SPACING);
        ui.label(
            egui::RichText::new(format!("{} window(s) open", state.window_count()))
                .small()
                .weak(),
        );
    }
}

fn drop_zone(ui: &mut egui::Ui) {
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let size = egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

    let stroke_color = if hovering {
        egui::Color32::from_rgb(90, 150, 250)
    } else {
        egui::Color32::from_white_alpha(50)
    };

    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(12), egui::Color32::from_gray(40));
    painter.rect_stroke(
        rect,
        egui::CornerRadius::same(12),
        egui::Stroke::new(1.5, stroke_color),
        egui::StrokeKind::Inside,
    );
    painter.text(
        rect.center() - egui::vec2(0.0, 22.0),
        egui::Align2::CENTER_CENTER,
        "🖼",
        egui::FontId::proportional(24.0),
        egui::Color32::WHITE,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 6.0),
        egui::Align2::CENTER_CENTER,
        "Drag Image Here",
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 24.0),
        egui::Align2::CENTER_CENTER,
        "PNG, JPG",
        egui::FontId::proportional(11.0),
        egui::Color32::GRAY,
    );
}

/// Draw one always-on-top borderless window per open image. Windows drag
/// from anywhere and close via the corner button or the window system.
pub fn show_windows(ctx: &egui::Context, state: &mut ReferenceState) {
    let mut closed: Vec<u64> = Vec::new();

    for image in &state.images {
        let viewport_id = egui::ViewportId::from_hash_of(("reference", image.id));
        let builder = egui::ViewportBuilder::default()
            .with_title(image.name.clone())
            .with_inner_size([REFERENCE_WIDTH, REFERENCE_HEIGHT])
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top();

        ctx.show_viewport_immediate(viewport_id, builder, |ctx, _class| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let rect = ui.max_rect();
                    ui.painter().rect_filled(
                        rect,
                        egui::CornerRadius::same(10),
                        egui::Color32::from_rgba_unmultiplied(20, 20, 24, 235),
                    );
                    ui.painter().rect_stroke(
                        rect,
                        egui::CornerRadius::same(10),
                        egui::Stroke::new(1.0, egui::Color32::from_white_alpha(46)),
                        egui::StrokeKind::Inside,
                    );

                    let response = ui.interact(
                        rect,
                        ui.id().with(("reference_drag", image.id)),
                        egui::Sense::click_and_drag(),
                    );
                    if response.drag_started() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                    }

                    ui.centered_and_justified(|ui| {
                        ui.add(
                            egui::Image::new(&image.texture)
                                .fit_to_exact_size(rect.size() - egui::vec2(16.0, 16.0)),
                        );
                    });
                });

            egui::Area::new(egui::Id::new(("reference_close", image.id)))
                .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-6.0, 6.0))
                .show(ctx, |ui| {
                    if ui.button("✖").clicked() {
                        closed.push(image.id);
                    }
                });

            if ctx.input(|i| i.viewport().close_requested()) {
                closed.push(image.id);
            }
        });
    }

    state.prune(&closed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_test_png(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("ref.png");
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 200, 10, 255]));
        image::DynamicImage::ImageRgba8(img).save(&path).unwrap();
        path
    }

    #[test]
    fn test_open_tracks_windows_with_unique_ids() {
        let ctx = egui::Context::default();
        let dir = TempDir::new().unwrap();
        let path = write_test_png(&dir);

        let mut state = ReferenceState::default();
        state.open(&ctx, &path);
        state.open(&ctx, &path);

        assert_eq!(state.window_count(), 2);
        assert_ne!(state.images[0].id, state.images[1].id);
        assert_eq!(state.images[0].name, "ref.png");
    }

    #[test]
    fn test_open_unreadable_file_opens_nothing() {
        let ctx = egui::Context::default();
        let dir = TempDir::new().unwrap();

        let mut state = ReferenceState::default();
        state.open(&ctx, &dir.path().join("missing.png"));
        assert_eq!(state.window_count(), 0);
    }

    #[test]
    fn test_prune_removes_closed_windows() {
        let ctx = egui::Context::default();
        let dir = TempDir::new().unwrap();
        let path = write_test_png(&dir);

        let mut state = ReferenceState::default();
        state.open(&ctx, &path);
        state.open(&ctx, &path);
        let first = state.images[0].id;

        state.prune(&[first]);
        assert_eq!(state.window_count(), 1);
        assert!(state.images.iter().all(|image| image.id != first));

        state.prune(&[]);
        assert_eq!(state.window_count(), 1);
    }
}
