//! Image converter tool view: drop an image, get a JPEG in Downloads

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use tracing::{info, warn};

use crate::constants::convert;

use super::super::constants::ITEM_SPACING;

const DROP_ZONE_HEIGHT: f32 = 170.0;

pub struct ConverterState {
    pub message: String,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self {
            message: "Drop an image to convert to JPG".to_string(),
        }
    }
}

impl ConverterState {
    /// Convert `path` to a JPEG named after its stem under `downloads`.
    /// Decode and write failures surface as separate messages.
    pub fn convert(&mut self, path: &Path, downloads: &Path) {
        let image = match load_image(path) {
            Ok(image) => image,
            Err(err) => {
                warn!("image conversion failed: {err:#}");
                self.message = "Conversion failed.".to_string();
                return;
            }
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("converted_image");
        match save_jpeg(&image, stem, downloads) {
            Ok(target) => {
                info!(target = %target.display(), "saved converted image");
                self.message = "Saved to Downloads!".to_string();
            }
            Err(err) => {
                warn!("failed to save converted image: {err:#}");
                self.message = "Save failed.".to_string();
            }
        }
    }
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("failed to decode {path:?}"))
}

fn save_jpeg(image: &DynamicImage, stem: &str, dir: &Path) -> Result<PathBuf> {
    let target = dir.join(format!("{stem}.jpg"));
    let mut file =
        fs::File::create(&target).with_context(|| format!("failed to create {target:?}"))?;
    // JPEG carries no alpha; flatten before encoding
    JpegEncoder::new_with_quality(&mut file, convert::JPEG_QUALITY)
        .encode_image(&image.to_rgb8())
        .context("failed to encode JPEG")?;
    Ok(target)
}

fn downloads_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn ui(ui: &mut egui::Ui, state: &mut ConverterState, dropped: &[PathBuf]) {
    ui.label(egui::RichText::new("Convert").heading().strong());
    ui.add_space(ITEM_SPACING);

    drop_zone(ui);
    ui.add_space(ITEM_SPACING);

    if let Some(path) = dropped.first() {
        state.convert(path, &downloads_dir());
    }

    ui.label(egui::RichText::new(&state.message).strong());
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
        "Drop Image Here",
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 24.0),
        egui::Align2::CENTER_CENTER,
        "Will save JPG to Downloads",
        egui::FontId::proportional(11.0),
        egui::Color32::GRAY,
    );
}
