use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{PassFail, Subject};

pub const PASS: Color32 = Color32::from_rgb(0x00, 0xff, 0x7f);
pub const FAIL: Color32 = Color32::from_rgb(0xff, 0x4d, 0x4d);
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xbf, 0xff);
pub const CARD_TOTAL: Color32 = Color32::from_rgb(0x00, 0x1f, 0x3f);
pub const CARD_PASS: Color32 = Color32::from_rgb(0x00, 0x33, 0x66);
pub const CARD_FAIL: Color32 = Color32::from_rgb(0x33, 0x00, 0x00);

pub fn pass_fail(value: PassFail) -> Color32 {
    match value {
        PassFail::Pass => PASS,
        PassFail::Fail => FAIL,
    }
}

pub fn subject(subject: Subject) -> Color32 {
    match subject {
        Subject::Math => ACCENT,
        Subject::Reading => PASS,
        Subject::Writing => FAIL,
    }
}

// ---------------------------------------------------------------------------
// Heatmap scale
// ---------------------------------------------------------------------------

/// Map `t` in `[0, 1]` onto a purple → teal → yellow ramp.
pub fn heat(t: f64) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) as f32 } else { 0.0 };
    let hue = 280.0 - 220.0 * t;
    let lightness = 0.25 + 0.4 * t;
    let hsl = Hsl::new(hue, 0.75, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Normalise `value` within `[min, max]`; a flat range maps to the middle.
pub fn normalise(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range.abs() < f64::EPSILON {
        0.5
    } else {
        (value - min) / range
    }
}
