#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Puhsl`**: A perceptually uniform hue/saturation/lightness color, where saturation is a percentage of the in-gamut maximum
//! - **`gamut`**: The six gamut boundary lines at a lightness and the maximum chroma along a hue ray
//! - **`space`**: The bidirectional sRGB ⇄ XYZ ⇄ Luv ⇄ LCh ⇄ PUHSL conversion chain
//! - **`contrast`**: Relative luminance, WCAG contrast ratio and black/white text selection
//! - **`StatePalette`**: Normal, hover, clicked, disabled and focus colors derived from one base color
//! - **`PaletteRules`**: Tunable derivation rules with a validating builder
//! - **`InteractionFlags`** / **`RenderState`**: Raw UI flags and the palette entry they resolve to
//!
//! The library uses `Srgba<f32>` (0.0-1.0 range) as its device color. Internally all
//! PUHSL math runs in `f64` through `libm`, so results are identical with and without `std`.
//! Conversions never fail: non-finite intermediates are replaced with `0.0` and every
//! output is clamped to its documented range.

// Re-export the device color types from palette for user convenience
pub use palette::{Srgb, Srgba};

pub mod colors;
pub mod contrast;
pub mod gamut;
pub mod interaction;
pub mod numeric;
pub mod scheme;
pub mod space;
pub mod types;

pub use colors::{BLACK, WHITE};
pub use contrast::{contrast_ratio, high_contrast_text, relative_luminance};
pub use gamut::{BoundaryLine, boundary_lines, max_chroma};
pub use interaction::{InteractionFlags, RenderState, resolve_render_state};
pub use scheme::{
    FocusEntry, PaletteEntry, PaletteRules, PaletteRulesBuilder, PaletteState, StatePalette,
    derive_palette, derive_palette_from_puhsl, update_palette,
};
pub use space::{device_color_to_puhsl, puhsl_to_device_color, puhsl_to_srgb, srgb_to_puhsl};
pub use types::{ColorError, Puhsl};
