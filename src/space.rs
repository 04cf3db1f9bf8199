//! Bidirectional conversion between device sRGB and PUHSL.
//!
//! Forward:  PUHSL → LCh(uv) → Luv → XYZ → sRGB
//! Backward: sRGB → XYZ → Luv → LCh(uv) → PUHSL
//!
//! Every stage takes and returns a whole tuple, and every stage output is
//! sanitized before it reaches the next stage. The intermediate spaces are
//! private to this module.

use palette::{Srgb, Srgba};

use crate::gamut::{EPSILON, KAPPA, UNBOUNDED_CHROMA, XYZ_TO_LINEAR_RGB, max_chroma};
use crate::numeric::{clamp_sanitized, clamp_unit, guard_divisor, sanitize};
use crate::types::Puhsl;

/// Linear sRGB to XYZ (D65).
const LINEAR_RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
];

/// u′ of the D65 reference white.
const REF_U: f64 = 0.19783000664283;
/// v′ of the D65 reference white.
const REF_V: f64 = 0.46831999493879;

/// Lightness within this distance of 0 counts as black.
const LIGHTNESS_EPSILON: f64 = 1e-8;
/// Lightness above this counts as white.
const LIGHTNESS_WHITE: f64 = 99.99999;
/// Chroma at or below this counts as neutral.
const CHROMA_EPSILON: f64 = 1e-8;
/// Smallest magnitude allowed for the `4v′` divisor.
const MIN_DIVISOR: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Lch {
    l: f64,
    c: f64,
    h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Luv {
    l: f64,
    u: f64,
    v: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

#[inline]
fn is_lightness_extreme(l: f64) -> bool {
    l < LIGHTNESS_EPSILON || l > LIGHTNESS_WHITE
}

/// Max chroma, or `None` when the solve is degenerate at this L, H.
fn usable_max_chroma(l: f64, h: f64) -> Option<f64> {
    let max = max_chroma(l, h);
    if max <= CHROMA_EPSILON || max >= UNBOUNDED_CHROMA {
        None
    } else {
        Some(max)
    }
}

#[inline]
fn dot(row: &[f64; 3], a: f64, b: f64, c: f64) -> f64 {
    row[0] * a + row[1] * b + row[2] * c
}

// ─── Forward ────────────────────────────────────────────────────────────────

fn puhsl_to_lch(color: Puhsl) -> Lch {
    let Puhsl {
        hue: h,
        saturation: s,
        lightness: l,
    } = color;

    if is_lightness_extreme(l) {
        return Lch { l, c: 0.0, h };
    }

    match usable_max_chroma(l, h) {
        Some(max) => Lch {
            l,
            c: sanitize(max * s.clamp(0.0, 100.0) / 100.0),
            h,
        },
        None => Lch { l, c: 0.0, h },
    }
}

fn lch_to_luv(lch: Lch) -> Luv {
    let radians = lch.h.to_radians();
    Luv {
        l: lch.l,
        u: sanitize(lch.c * libm::cos(radians)),
        v: sanitize(lch.c * libm::sin(radians)),
    }
}

/// Y for a given L*, linear near black and cubic above L* = 8.
#[inline]
fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        libm::pow((l + 16.0) / 116.0, 3.0)
    }
}

fn luv_to_xyz(luv: Luv) -> Xyz {
    let y = sanitize(l_to_y(luv.l));

    let (var_u, var_v) = if luv.l < LIGHTNESS_EPSILON {
        (REF_U, REF_V)
    } else {
        (
            sanitize(luv.u / (13.0 * luv.l) + REF_U),
            sanitize(luv.v / (13.0 * luv.l) + REF_V),
        )
    };

    let four_v = guard_divisor(4.0 * var_v, MIN_DIVISOR);
    let x = sanitize(9.0 * y * var_u / four_v);
    let z = sanitize((9.0 * y - 15.0 * var_v * y - var_v * x) / (0.75 * four_v));

    Xyz { x, y, z }
}

/// sRGB transfer function, linear light to gamma-encoded.
#[inline]
pub(crate) fn from_linear(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * libm::pow(c, 1.0 / 2.4) - 0.055
    }
}

fn xyz_to_rgb(xyz: Xyz) -> [f64; 3] {
    XYZ_TO_LINEAR_RGB.map(|row| clamp_unit(from_linear(dot(&row, xyz.x, xyz.y, xyz.z))))
}

// ─── Backward ───────────────────────────────────────────────────────────────

/// Inverse sRGB transfer function, gamma-encoded to linear light.
///
/// The input is clamped to `[0, 1]` first.
#[inline]
pub(crate) fn to_linear(c: f64) -> f64 {
    let c = clamp_unit(c);
    if c <= 0.04045 {
        c / 12.92
    } else {
        libm::pow((c + 0.055) / 1.055, 2.4)
    }
}

fn rgb_to_xyz(rgb: [f64; 3]) -> Xyz {
    let [r, g, b] = rgb.map(to_linear);
    Xyz {
        x: sanitize(dot(&LINEAR_RGB_TO_XYZ[0], r, g, b)),
        y: sanitize(dot(&LINEAR_RGB_TO_XYZ[1], r, g, b)),
        z: sanitize(dot(&LINEAR_RGB_TO_XYZ[2], r, g, b)),
    }
}

/// L* for a given Y (reference white Y = 1).
#[inline]
fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * libm::cbrt(y) - 16.0
    }
}

fn xyz_to_luv(xyz: Xyz) -> Luv {
    let divider = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if libm::fabs(divider) < MIN_DIVISOR {
        return Luv {
            l: 0.0,
            u: 0.0,
            v: 0.0,
        };
    }

    let var_u = sanitize(4.0 * xyz.x / divider);
    let var_v = sanitize(9.0 * xyz.y / divider);
    let l = sanitize(y_to_l(xyz.y));
    if l < LIGHTNESS_EPSILON {
        return Luv {
            l: 0.0,
            u: 0.0,
            v: 0.0,
        };
    }

    Luv {
        l,
        u: sanitize(13.0 * l * (var_u - REF_U)),
        v: sanitize(13.0 * l * (var_v - REF_V)),
    }
}

/// Angle of `(x, y)` in radians, `(-π, π]`, with both axes handled explicitly.
fn atan2(y: f64, x: f64) -> f64 {
    use core::f64::consts::{FRAC_PI_2, PI};

    if x > 0.0 {
        libm::atan(y / x)
    } else if x < 0.0 {
        if y >= 0.0 {
            libm::atan(y / x) + PI
        } else {
            libm::atan(y / x) - PI
        }
    } else if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

fn luv_to_lch(luv: Luv) -> Lch {
    let c = sanitize(libm::sqrt(luv.u * luv.u + luv.v * luv.v));
    let h = if c < CHROMA_EPSILON {
        0.0
    } else {
        let degrees = sanitize(atan2(luv.v, luv.u).to_degrees());
        if degrees < 0.0 { degrees + 360.0 } else { degrees }
    };
    Lch { l: luv.l, c, h }
}

fn lch_to_puhsl(lch: Lch) -> Puhsl {
    let Lch { l, c, h } = lch;

    let saturation = if is_lightness_extreme(l) {
        0.0
    } else {
        match usable_max_chroma(l, h) {
            Some(max) => clamp_sanitized(100.0 * c / max, 0.0, 100.0),
            None => 0.0,
        }
    };

    Puhsl {
        hue: clamp_sanitized(h, 0.0, 360.0),
        saturation,
        lightness: clamp_sanitized(l, 0.0, 100.0),
    }
}

// ─── Public entry points ────────────────────────────────────────────────────

/// Converts a PUHSL color to gamma-encoded sRGB.
///
/// Hue is wrapped and S, L are clamped first. The output channels are always
/// in `[0, 1]`.
pub fn puhsl_to_srgb(color: Puhsl) -> Srgb {
    let color = Puhsl::new(color.hue, color.saturation, color.lightness);
    let [r, g, b] = xyz_to_rgb(luv_to_xyz(lch_to_luv(puhsl_to_lch(color))));
    Srgb::new(r as f32, g as f32, b as f32)
}

/// Converts a PUHSL color plus alpha to a device color.
///
/// Alpha passes through unchanged apart from being clamped to `[0, 1]`.
pub fn puhsl_to_device_color(color: Puhsl, alpha: f32) -> Srgba {
    let rgb = puhsl_to_srgb(color);
    Srgba::new(rgb.red, rgb.green, rgb.blue, unit_alpha(alpha))
}

/// Converts gamma-encoded sRGB to PUHSL.
///
/// Channels outside `[0, 1]` are clamped. Black and white come back with
/// saturation 0 and hue 0.
pub fn srgb_to_puhsl(color: Srgb) -> Puhsl {
    let rgb = [
        f64::from(color.red),
        f64::from(color.green),
        f64::from(color.blue),
    ];
    lch_to_puhsl(luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb))))
}

/// Converts a device color to PUHSL, returning alpha alongside.
pub fn device_color_to_puhsl(color: Srgba) -> (Puhsl, f32) {
    (srgb_to_puhsl(color.color), unit_alpha(color.alpha))
}

#[inline]
fn unit_alpha(alpha: f32) -> f32 {
    clamp_unit(f64::from(alpha)) as f32
}

impl Puhsl {
    /// Converts to gamma-encoded sRGB. See [`puhsl_to_srgb`].
    #[inline]
    pub fn to_srgb(&self) -> Srgb {
        puhsl_to_srgb(*self)
    }

    /// Converts to a device color with the given alpha.
    #[inline]
    pub fn to_srgba(&self, alpha: f32) -> Srgba {
        puhsl_to_device_color(*self, alpha)
    }

    /// Creates from gamma-encoded sRGB. See [`srgb_to_puhsl`].
    #[inline]
    pub fn from_srgb(color: Srgb) -> Self {
        srgb_to_puhsl(color)
    }

    /// Creates from a device color, dropping alpha.
    #[inline]
    pub fn from_srgba(color: Srgba) -> Self {
        srgb_to_puhsl(color.color)
    }
}
