//! QR code tool view: encodes typed text into an on-screen code

use eframe::egui;
use qrcode::{EcLevel, QrCode};
use tracing::warn;

use super::super::constants::{ITEM_SPACING, QR_DISPLAY_SIZE};

/// Quiet-zone border, in modules, on each side
const QUIET_MODULES: usize = 2;

#[derive(Default)]
pub struct QrState {
    pub input: String,
    texture: Option<egui::TextureHandle>,
    rendered_for: String,
}

/// Rasterizes the code one pixel per module, white quiet zone included.
/// Scaling up happens at draw time with nearest-neighbor sampling.
fn module_image(code: &QrCode) -> egui::ColorImage {
    let width = code.width();
    let size = width + QUIET_MODULES * 2;
    let colors = code.to_colors();

    let mut rgba = vec![255u8; size * size * 4];
    for y in 0..width {
        for x in 0..width {
            if colors[y * width + x] == qrcode::Color::Dark {
                let px = ((y + QUIET_MODULES) * size + (x + QUIET_MODULES)) * 4;
                rgba[px] = 0;
                rgba[px + 1] = 0;
                rgba[px + 2] = 0;
            }
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([size, size], &rgba)
}

pub fn ui(ui: &mut egui::Ui, state: &mut QrState) {
    ui.label(egui::RichText::new("QR Code").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.text_edit_singleline(&mut state.input);
    ui.add_space(ITEM_SPACING);

    if state.input.is_empty() {
        state.texture = None;
        state.rendered_for.clear();
        return;
    }

    if state.rendered_for != state.input {
        match QrCode::with_error_correction_level(state.input.as_bytes(), EcLevel::M) {
            Ok(code) => {
                let image = module_image(&code);
                state.texture =
                    Some(ui.ctx()
                        .load_texture("qr_code", image, egui::TextureOptions::NEAREST));
            }
            Err(err) => {
                warn!(%err, "QR encoding failed");
                state.texture = None;
            }
        }
        // Remember the attempt either way so a bad input is not retried every frame
        state.rendered_for = state.input.clone();
    }

    if let Some(texture) = &state.texture {
        ui.add(
            egui::Image::new(texture)
                .fit_to_exact_size(egui::vec2(QR_DISPLAY_SIZE, QR_DISPLAY_SIZE)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_image_adds_quiet_zone() {
        let code = QrCode::with_error_correction_level(b"hello", EcLevel::M).unwrap();
        let image = module_image(&code);
        let expected = code.width() + QUIET_MODULES * 2;
        assert_eq!(image.size, [expected, expected]);
    }

    #[test]
    fn test_module_image_quiet_zone_is_white() {
        let code = QrCode::with_error_correction_level(b"hello", EcLevel::M).unwrap();
        let image = module_image(&code);
        let size = image.size[0];
        assert_eq!(image.pixels[0], egui::Color32::WHITE);
        assert_eq!(image.pixels[size - 1], egui::Color32::WHITE);
        assert_eq!(image.pixels[size * size - 1], egui::Color32::WHITE);
    }

    #[test]
    fn test_module_image_draws_finder_pattern() {
        let code = QrCode::with_error_correction_level(b"hello", EcLevel::M).unwrap();
        let image = module_image(&code);
        let size = image.size[0];
        // Top-left finder pattern corner sits just inside the quiet zone
        let corner = QUIET_MODULES * size + QUIET_MODULES;
        assert_eq!(image.pixels[corner], egui::Color32::BLACK);
    }
}
