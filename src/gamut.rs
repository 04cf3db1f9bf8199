//! Gamut boundary geometry in the CIE Luv u/v plane.
//!
//! For a fixed lightness the colors reproducible by the sRGB primaries form a
//! hexagon around the neutral axis. Each edge is where one linear RGB channel
//! sits exactly at 0 or at 1. [`boundary_lines`] solves those six edges as
//! lines `v = slope * u + intercept`, and [`max_chroma`] walks a hue ray out
//! from the origin to the nearest edge.

use heapless::Vec;

use crate::numeric::sanitize;

/// XYZ (D65) to linear sRGB, one row per output channel.
pub(crate) const XYZ_TO_LINEAR_RGB: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

/// CIE κ = 24389/27, slope of the linear L* segment near black.
pub(crate) const KAPPA: f64 = 903.2962962;

/// CIE ε = 216/24389, the Y/Yn threshold between the linear and cubic L* segments.
pub(crate) const EPSILON: f64 = 0.0088564516;

/// Below this magnitude a boundary line's denominator is treated as zero.
pub const DEGENERATE_DENOMINATOR: f64 = 1e-10;

/// Returned by [`max_chroma`] when no boundary constrains the hue ray.
pub const UNBOUNDED_CHROMA: f64 = f64::MAX;

/// The two values a primary channel is pinned to on the gamut surface.
const CHANNEL_EXTREMES: [f64; 2] = [0.0, 1.0];

/// One edge of the gamut hexagon: `v = slope * u + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundaryLine {
    /// Slope in the u/v plane.
    pub slope: f64,
    /// Value of v where the line crosses u = 0.
    pub intercept: f64,
}

impl BoundaryLine {
    /// Distance from the origin to where a ray at `hue_radians` meets this line.
    ///
    /// Negative means the line lies behind the ray. `None` when the ray runs
    /// parallel to the line and never meets it.
    #[inline]
    pub fn ray_length(&self, hue_radians: f64) -> Option<f64> {
        let denominator = libm::sin(hue_radians) - self.slope * libm::cos(hue_radians);
        let length = self.intercept / denominator;
        length.is_finite().then_some(length)
    }
}

/// Solves the line where one channel of one gamut extreme meets lightness `l`.
///
/// `row` is that channel's row of [`XYZ_TO_LINEAR_RGB`] and `extreme` is 0 or 1.
/// Returns `None` when the denominator vanishes: that channel contributes no
/// constraint at this lightness.
fn solve_line(l: f64, row: &[f64; 3], extreme: f64) -> Option<BoundaryLine> {
    let [m1, m2, m3] = *row;
    let sub2 = lightness_scale(l);

    let top1 = sanitize((284517.0 * m1 - 94839.0 * m3) * sub2);
    let top2 = sanitize(
        (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * l * sub2 - 769860.0 * extreme * l,
    );
    let bottom = sanitize((632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * extreme);

    if libm::fabs(bottom) < DEGENERATE_DENOMINATOR {
        return None;
    }

    Some(BoundaryLine {
        slope: sanitize(top1 / bottom),
        intercept: sanitize(top2 / bottom),
    })
}

/// `Y` for a given L*, using the cubic segment above ε and the linear one below.
#[inline]
fn lightness_scale(l: f64) -> f64 {
    let cubed = libm::pow((l + 16.0) / 116.0, 3.0);
    if cubed > EPSILON { cubed } else { l / KAPPA }
}

/// All six candidate edges of the gamut hexagon at lightness `l`.
///
/// Ordered red/green/blue, each as (channel = 0, channel = 1). Degenerate edges
/// are `None` and must be skipped.
pub fn boundary_lines(l: f64) -> [Option<BoundaryLine>; 6] {
    let mut lines = [None; 6];
    for (channel, row) in XYZ_TO_LINEAR_RGB.iter().enumerate() {
        for (side, &extreme) in CHANNEL_EXTREMES.iter().enumerate() {
            lines[channel * 2 + side] = solve_line(l, row, extreme);
        }
    }
    lines
}

/// The non-degenerate edges at lightness `l`.
pub fn valid_boundary_lines(l: f64) -> Vec<BoundaryLine, 6> {
    boundary_lines(l).into_iter().flatten().collect()
}

/// Maximum in-gamut chroma at lightness `l` along hue `h` (degrees).
///
/// Edges parallel to the ray are skipped. Returns [`UNBOUNDED_CHROMA`] if no
/// edge intersects the ray in front of the origin, which only happens at the lightness extremes. Callers treat that
/// as degenerate and fall back to zero saturation.
pub fn max_chroma(l: f64, h: f64) -> f64 {
    let hue_radians = h.to_radians();
    valid_boundary_lines(l)
        .iter()
        .filter_map(|line| line.ray_length(hue_radians))
        .filter(|length| *length >= 0.0)
        .fold(UNBOUNDED_CHROMA, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_lightness_has_six_edges() {
        let lines = boundary_lines(50.0);
        assert!(lines.iter().all(Option::is_some));
        assert_eq!(valid_boundary_lines(50.0).len(), 6);
    }

    #[test]
    fn edges_are_finite() {
        for l in [0.5, 8.0, 25.0, 50.0, 75.0, 99.0] {
            for line in valid_boundary_lines(l) {
                assert!(line.slope.is_finite());
                assert!(line.intercept.is_finite());
            }
        }
    }

    #[test]
    fn black_lightness_drops_degenerate_edges() {
        // At L = 0 every lower-extreme line collapses to a zero denominator.
        let lines = boundary_lines(0.0);
        assert!(lines[0].is_none());
        assert!(lines[2].is_none());
        assert!(lines[4].is_none());
    }

    #[test]
    fn max_chroma_is_non_negative() {
        for l in [1.0, 10.0, 30.0, 53.0, 70.0, 95.0] {
            for h in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
                let c = max_chroma(l, h);
                assert!(c >= 0.0, "l={l} h={h} c={c}");
                assert!(c < 200.0, "l={l} h={h} c={c}");
            }
        }
    }

    #[test]
    fn max_chroma_matches_pure_red() {
        // sRGB red is L*=53.2371, C=179.0414, h=12.1771 in LCh(uv)
        let c = max_chroma(53.23711559542933, 12.177050630061776);
        assert!(libm::fabs(c - 179.0414) < 0.05, "got {c}");
    }

    #[test]
    fn ray_parallel_to_edge_never_meets_it() {
        let line = BoundaryLine { slope: 0.0, intercept: 5.0 };
        assert_eq!(line.ray_length(0.0), None);
        assert_eq!(line.ray_length(core::f64::consts::FRAC_PI_2), Some(5.0));
    }

    #[test]
    fn parallel_edge_does_not_collapse_chroma() {
        // At L=50 this hue runs exactly parallel to one hexagon edge.
        let c = max_chroma(50.0, 329.5394297531977);
        assert!(c > 1.0, "got {c}");
        assert!(c < UNBOUNDED_CHROMA);

        let next = max_chroma(50.0, f64::from_bits(329.5394297531977_f64.to_bits() + 1));
        assert!(libm::fabs(c - next) < 1e-6, "c={c} next={next}");
    }
}
