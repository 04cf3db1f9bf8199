//! Core value types.

use crate::numeric::{clamp_sanitized, wrap_degrees};

/// A color in the perceptually uniform hue/saturation/lightness space.
///
/// Saturation is a percentage of the maximum chroma the sRGB gamut can reach
/// at this hue and lightness, not an absolute chroma. Every `(H, S, L)` in
/// range therefore maps to a displayable color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Puhsl {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in percent of the in-gamut maximum, `[0, 100]`.
    pub saturation: f64,
    /// Perceptual lightness (CIE L*), `[0, 100]`.
    pub lightness: f64,
}

impl Puhsl {
    /// The default base color: hue 0, saturation 75, lightness 50.
    pub const DEFAULT_BASE: Puhsl = Puhsl {
        hue: 0.0,
        saturation: 75.0,
        lightness: 50.0,
    };

    /// Creates a color, wrapping hue into `[0, 360)` and clamping S and L.
    ///
    /// Non-finite components become `0.0`.
    #[inline]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: wrap_degrees(hue),
            saturation: clamp_sanitized(saturation, 0.0, 100.0),
            lightness: clamp_sanitized(lightness, 0.0, 100.0),
        }
    }

    /// Creates a color, rejecting anything [`Puhsl::new`] would have to repair.
    ///
    /// # Errors
    /// * `NonFiniteComponent` - A component is NaN or infinite
    /// * `ComponentOutOfRange` - Hue outside `[0, 360)`, S or L outside `[0, 100]`
    pub fn try_new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ColorError> {
        if !(hue.is_finite() && saturation.is_finite() && lightness.is_finite()) {
            return Err(ColorError::NonFiniteComponent);
        }
        if !(0.0..360.0).contains(&hue) {
            return Err(ColorError::ComponentOutOfRange { name: "hue", value: hue });
        }
        if !(0.0..=100.0).contains(&saturation) {
            return Err(ColorError::ComponentOutOfRange {
                name: "saturation",
                value: saturation,
            });
        }
        if !(0.0..=100.0).contains(&lightness) {
            return Err(ColorError::ComponentOutOfRange {
                name: "lightness",
                value: lightness,
            });
        }
        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// Same color with a different hue.
    #[inline]
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::new(hue, self.saturation, self.lightness)
    }

    /// Same color with a different saturation.
    #[inline]
    pub fn with_saturation(&self, saturation: f64) -> Self {
        Self::new(self.hue, saturation, self.lightness)
    }

    /// Same color with a different lightness.
    #[inline]
    pub fn with_lightness(&self, lightness: f64) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    /// Rotates the hue by `degrees`, wrapping around 360.
    #[inline]
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness)
    }
}

impl Default for Puhsl {
    fn default() -> Self {
        Self::DEFAULT_BASE
    }
}

/// Input validation errors.
///
/// Conversions and palette derivation never fail; these only come from the
/// strict constructors, the rules builder and hex parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// A component was NaN or infinite.
    NonFiniteComponent,

    /// A component fell outside its documented range.
    ComponentOutOfRange {
        /// Which component.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Hex string had the wrong number of digits (expects 6 or 8).
    InvalidHexLength(usize),

    /// Hex string contained a non-hex character.
    InvalidHexDigit,
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::NonFiniteComponent => {
                write!(f, "color component must be finite")
            }
            ColorError::ComponentOutOfRange { name, value } => {
                write!(f, "{} out of range: {}", name, value)
            }
            ColorError::InvalidHexLength(len) => {
                write!(f, "hex color must have 6 or 8 digits, got {}", len)
            }
            ColorError::InvalidHexDigit => {
                write!(f, "hex color contains a non-hex digit")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
