//! Numeric safety guards shared by every conversion stage.
//!
//! The conversion chain never reports errors. Any computation that can leave
//! the finite range (near-zero divisors, powers of negative bases, degenerate
//! gamut lines) is passed through one of these guards at the stage boundary,
//! so a bad intermediate degrades to a defined value instead of spreading
//! NaN through the rest of the chain.

/// Replaces NaN and ±Infinity with `0.0`.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    finite_or(value, 0.0)
}

/// Replaces NaN and ±Infinity with `default`.
#[inline]
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() { value } else { default }
}

/// Pushes a divisor away from zero while keeping its sign.
///
/// A divisor of exactly zero is treated as positive. Non-finite divisors are
/// sanitized first.
#[inline]
pub fn guard_divisor(divisor: f64, min_magnitude: f64) -> f64 {
    let divisor = sanitize(divisor);
    if libm::fabs(divisor) >= min_magnitude {
        divisor
    } else if divisor < 0.0 {
        -min_magnitude
    } else {
        min_magnitude
    }
}

/// Sanitizes then clamps into `[min, max]`.
#[inline]
pub fn clamp_sanitized(value: f64, min: f64, max: f64) -> f64 {
    sanitize(value).clamp(min, max)
}

/// Sanitizes then clamps into `[0, 1]`.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    clamp_sanitized(value, 0.0, 1.0)
}

/// Wraps an angle in degrees into `[0, 360)`. Non-finite angles become `0.0`.
#[inline]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = libm::fmod(sanitize(degrees), 360.0);
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // fmod(-1e-20, 360) + 360 rounds to 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
