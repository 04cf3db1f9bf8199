//! Luminance, contrast ratio and automatic text color selection.
//!
//! Luminance is measured in linear sRGB (the WCAG 2.1 definition) even though
//! the palette itself is built in PUHSL.

use crate::space::{puhsl_to_srgb, to_linear};
use crate::types::Puhsl;

/// Pure black, hue 0.
pub const BLACK_TEXT: Puhsl = Puhsl {
    hue: 0.0,
    saturation: 0.0,
    lightness: 0.0,
};

/// Pure white, hue 0.
pub const WHITE_TEXT: Puhsl = Puhsl {
    hue: 0.0,
    saturation: 0.0,
    lightness: 100.0,
};

/// Backgrounds brighter than this get black text.
pub const TEXT_LUMINANCE_THRESHOLD: f64 = 0.5;

/// Relative luminance of a color per WCAG 2.1.
///
/// `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`, in `[0, 1]`.
pub fn relative_luminance(color: Puhsl) -> f64 {
    let rgb = puhsl_to_srgb(color);
    let r = to_linear(f64::from(rgb.red));
    let g = to_linear(f64::from(rgb.green));
    let b = to_linear(f64::from(rgb.blue));
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG 2.1 contrast ratio, in `[1, 21]` regardless of argument order.
pub fn contrast_ratio(a: Puhsl, b: Puhsl) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white text for a background.
///
/// This is a single luminance threshold, not a search for the higher
/// contrast ratio. The two agree for almost every color; near the crossover
/// (luminance ≈ 0.18) they can pick differently, and the threshold result is
/// kept for stable output.
pub fn high_contrast_text(background: Puhsl) -> Puhsl {
    if relative_luminance(background) > TEXT_LUMINANCE_THRESHOLD {
        BLACK_TEXT
    } else {
        WHITE_TEXT
    }
}
