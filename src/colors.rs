//! Color construction helpers.
//!
//! Convenience constructors that go straight from PUHSL components to
//! `palette::Srgb`, plus the packed and hex forms a rendering layer usually
//! stores its colors in.

use palette::{Srgb, Srgba};

use crate::types::{ColorError, Puhsl};

/// Opaque black.
pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Opaque white.
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);

/// Creates an RGB color from PUHSL (hue, saturation, lightness) components.
#[inline]
pub fn puhsl(hue: f64, saturation: f64, lightness: f64) -> Srgb {
    Puhsl::new(hue, saturation, lightness).to_srgb()
}

/// Creates an RGB color from hue only (full saturation, mid lightness).
#[inline]
pub fn hue(hue: f64) -> Srgb {
    puhsl(hue, 100.0, 50.0)
}

/// Unpacks a `0xAARRGGBB` pixel.
pub fn from_packed_argb(packed: u32) -> Srgba {
    let [a, r, g, b] = packed.to_be_bytes();
    Srgba::<u8>::new(r, g, b, a).into_format()
}

/// Packs a device color into `0xAARRGGBB`, rounding each channel to 8 bits.
pub fn to_packed_argb(color: Srgba) -> u32 {
    let rgba: Srgba<u8> = color.into_format();
    u32::from_be_bytes([rgba.alpha, rgba.red, rgba.green, rgba.blue])
}

/// Parses `#rrggbb` or `#rrggbbaa` (the `#` is optional).
///
/// # Errors
/// * `InvalidHexLength` - Not 6 or 8 digits
/// * `InvalidHexDigit` - A character is not a hex digit
pub fn parse_hex(text: &str) -> Result<Srgba, ColorError> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 && digits.len() != 8 {
        return Err(ColorError::InvalidHexLength(digits.len()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexDigit);
    }

    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHexDigit)
    };
    let alpha = if digits.len() == 8 { byte(6)? } else { u8::MAX };

    Ok(Srgba::<u8>::new(byte(0)?, byte(2)?, byte(4)?, alpha).into_format())
}
