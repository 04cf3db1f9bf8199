//! Integration tests for the sRGB ⇄ PUHSL conversion chain and gamut solver

mod common;
use common::*;

use palette::{Srgb, Srgba};
use perceptual_palette::gamut::{UNBOUNDED_CHROMA, valid_boundary_lines};
use perceptual_palette::{
    Puhsl, device_color_to_puhsl, max_chroma, puhsl_to_device_color, puhsl_to_srgb,
    srgb_to_puhsl,
};

#[test]
fn pure_red_matches_reference_values() {
    let (red, alpha) = device_color_to_puhsl(Srgba::new(1.0, 0.0, 0.0, 1.0));
    assert!(approx(red.hue, 12.2, 0.05), "hue {}", red.hue);
    assert!(approx(red.saturation, 100.0, 0.01), "saturation {}", red.saturation);
    assert!(approx(red.lightness, 53.2, 0.05), "lightness {}", red.lightness);
    assert_eq!(alpha, 1.0);
}

#[test]
fn primaries_and_secondaries_are_fully_saturated() {
    for color in [
        Srgb::new(0.0, 1.0, 0.0),
        Srgb::new(0.0, 0.0, 1.0),
        Srgb::new(1.0, 1.0, 0.0),
        Srgb::new(0.0, 1.0, 1.0),
        Srgb::new(1.0, 0.0, 1.0),
    ] {
        let c = srgb_to_puhsl(color);
        assert!(approx(c.saturation, 100.0, 0.01), "{color:?} -> {c:?}");
    }
}

#[test]
fn known_hues_of_green_and_blue() {
    // Standard HSLuv values: green 127.715, blue 265.874
    let green = srgb_to_puhsl(Srgb::new(0.0, 1.0, 0.0));
    assert!(approx(green.hue, 127.715, 0.01), "{green:?}");
    assert!(approx(green.lightness, 87.737, 0.01), "{green:?}");

    let blue = srgb_to_puhsl(Srgb::new(0.0, 0.0, 1.0));
    assert!(approx(blue.hue, 265.874, 0.01), "{blue:?}");
    assert!(approx(blue.lightness, 32.302, 0.01), "{blue:?}");
}

#[test]
fn device_round_trip_over_rgb_grid() {
    for color in rgb_grid(10) {
        let back = puhsl_to_srgb(srgb_to_puhsl(color));
        assert!(
            colors_equal_epsilon(back, color, 1e-3),
            "{color:?} came back as {back:?}"
        );
    }
}

#[test]
fn puhsl_round_trip_recovers_components() {
    for h in [10.0, 75.0, 140.0, 200.0, 290.0, 350.0] {
        for s in [5.0, 40.0, 80.0, 100.0] {
            for l in [5.0, 30.0, 50.0, 70.0, 95.0] {
                let original = Puhsl::new(h, s, l);
                let back = srgb_to_puhsl(original.to_srgb());
                assert!(approx(back.lightness, l, 0.05), "{original:?} -> {back:?}");
                assert!(approx(back.saturation, s, 0.5), "{original:?} -> {back:?}");
                if !hue_unrecoverable(back) {
                    assert!(approx(back.hue, h, 0.5), "{original:?} -> {back:?}");
                }
            }
        }
    }
}

#[test]
fn alpha_passes_through() {
    let device = puhsl_to_device_color(Puhsl::new(30.0, 60.0, 40.0), 0.25);
    assert_eq!(device.alpha, 0.25);

    let (_, alpha) = device_color_to_puhsl(Srgba::new(0.1, 0.2, 0.3, 0.75));
    assert_eq!(alpha, 0.75);
}

#[test]
fn extremes_force_zero_saturation_and_keep_hue() {
    for s in [0.0, 50.0, 100.0] {
        let black = puhsl_to_srgb(Puhsl::new(77.0, s, 0.0));
        assert!(colors_equal(black, Srgb::new(0.0, 0.0, 0.0)));
        let white = puhsl_to_srgb(Puhsl::new(77.0, s, 100.0));
        assert!(colors_equal(white, Srgb::new(1.0, 1.0, 1.0)));
    }

    let black = srgb_to_puhsl(Srgb::new(0.0, 0.0, 0.0));
    assert_eq!(black.saturation, 0.0);
    assert_eq!(black.lightness, 0.0);

    let white = srgb_to_puhsl(Srgb::new(1.0, 1.0, 1.0));
    assert_eq!(white.saturation, 0.0);
    assert!(approx(white.lightness, 100.0, 1e-4));
}

#[test]
fn max_chroma_is_non_negative_everywhere() {
    for l in (1..100).map(f64::from) {
        for h in (0..360).step_by(15).map(f64::from) {
            let c = max_chroma(l, h);
            assert!(c >= 0.0, "l={l} h={h} c={c}");
            assert!(c < UNBOUNDED_CHROMA, "l={l} h={h} unbounded");
        }
    }
}

#[test]
fn boundary_lines_stay_finite_at_extremes() {
    for l in [0.0, 1e-9, 99.99999, 100.0] {
        for line in valid_boundary_lines(l) {
            assert!(line.slope.is_finite() && line.intercept.is_finite());
        }
    }
}

#[test]
fn full_saturation_holds_where_hue_runs_parallel_to_an_edge() {
    let hue: f64 = 329.5394297531977;
    let next_hue = f64::from_bits(hue.to_bits() + 1);

    let c = puhsl_to_srgb(Puhsl::new(hue, 100.0, 50.0));
    let neighbor = puhsl_to_srgb(Puhsl::new(next_hue, 100.0, 50.0));

    let spread = c.red.max(c.green).max(c.blue) - c.red.min(c.green).min(c.blue);
    assert!(spread > 0.5, "collapsed to gray: {c:?}");
    assert!(colors_equal_epsilon(c, neighbor, 1e-4), "{c:?} vs {neighbor:?}");

    let back = srgb_to_puhsl(c);
    assert!(back.saturation > 99.0, "saturation {}", back.saturation);
}

#[test]
fn increasing_saturation_moves_away_from_gray() {
    for h in [0.0, 60.0, 130.0, 210.0, 280.0] {
        for l in [20.0, 45.0, 70.0, 90.0] {
            let gray = puhsl_to_srgb(Puhsl::new(h, 0.0, l));
            let mut previous = 0.0f32;
            for s in (0..=100).step_by(10).map(f64::from) {
                let distance = rgb_distance(puhsl_to_srgb(Puhsl::new(h, s, l)), gray);
                assert!(
                    distance + 1e-5 >= previous,
                    "h={h} l={l} s={s}: {distance} < {previous}"
                );
                previous = distance;
            }
        }
    }
}

#[test]
fn out_of_range_inputs_are_clamped() {
    let c = srgb_to_puhsl(Srgb::new(1.5, -0.5, f32::NAN));
    let expected = srgb_to_puhsl(Srgb::new(1.0, 0.0, 0.0));
    assert_eq!(c, expected);

    let rgb = puhsl_to_srgb(Puhsl {
        hue: f64::NAN,
        saturation: 500.0,
        lightness: -20.0,
    });
    assert!(colors_equal(rgb, Srgb::new(0.0, 0.0, 0.0)));
}

#[test]
fn outputs_stay_in_documented_ranges() {
    for color in rgb_grid(6) {
        let c = srgb_to_puhsl(color);
        assert!((0.0..=360.0).contains(&c.hue));
        assert!((0.0..=100.0).contains(&c.saturation));
        assert!((0.0..=100.0).contains(&c.lightness));
    }
}

#[test]
fn conversion_is_deterministic_across_threads() {
    let expected = srgb_to_puhsl(Srgb::new(0.3, 0.6, 0.9));
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| srgb_to_puhsl(Srgb::new(0.3, 0.6, 0.9))))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
