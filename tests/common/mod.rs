//! Shared test infrastructure for perceptual-palette integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::{Srgb, Srgba};
use perceptual_palette::Puhsl;

// ============================================================================
// Sample Grids
// ============================================================================

/// Every channel value in `0..=steps`, scaled into [0, 1].
pub fn channel_steps(steps: u8) -> impl Iterator<Item = f32> + Clone {
    (0..=steps).map(move |i| f32::from(i) / f32::from(steps))
}

/// An RGB cube sampled with `steps + 1` values per channel.
pub fn rgb_grid(steps: u8) -> Vec<Srgb> {
    let mut colors = Vec::new();
    for r in channel_steps(steps) {
        for g in channel_steps(steps) {
            for b in channel_steps(steps) {
                colors.push(Srgb::new(r, g, b));
            }
        }
    }
    colors
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    colors_equal_epsilon(a, b, 0.001)
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Srgb, b: Srgb, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}

/// Compare two device colors including alpha
pub fn device_colors_equal(a: Srgba, b: Srgba) -> bool {
    colors_equal(a.color, b.color) && (a.alpha - b.alpha).abs() < 0.001
}

/// Euclidean distance between two colors in gamma-encoded RGB
pub fn rgb_distance(a: Srgb, b: Srgb) -> f32 {
    let dr = a.red - b.red;
    let dg = a.green - b.green;
    let db = a.blue - b.blue;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// True when the color sits at a lightness where hue cannot be recovered
pub fn hue_unrecoverable(color: Puhsl) -> bool {
    color.lightness < 1e-6 || color.lightness > 99.9999 || color.saturation < 1e-6
}
