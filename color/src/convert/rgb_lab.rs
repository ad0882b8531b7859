// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB ↔ CIE L\*a\*b\* through CIE XYZ, relative to the D65 white point.
//!
//! ```text
//! sRGB ──inverse gamma──▶ linear RGB ──3x3 matrix──▶ XYZ ──÷ white──▶ f(t) ──▶ L*a*b*
//! ```
//!
//! The inverse runs each stage backwards and clamps the final RGB into `0..=255`, since
//! plenty of LAB values are outside the sRGB gamut.

use crate::{CIE_EPSILON, CIE_KAPPA, D65_WHITE, LabColor, RgbColor, SRGB_GAMMA_THRESHOLD,
            SRGB_LINEAR_THRESHOLD, SRGB_TO_XYZ, XYZ_TO_SRGB, channel_to_unit};

/// Convert RGB to LAB. Each component is rounded to an integer. Alpha is dropped.
#[must_use]
pub fn rgb_to_lab(rgb: RgbColor) -> LabColor {
    let linear = [
        srgb_to_linear(channel_to_unit(rgb.red)),
        srgb_to_linear(channel_to_unit(rgb.green)),
        srgb_to_linear(channel_to_unit(rgb.blue)),
    ];
    let xyz = multiply(&SRGB_TO_XYZ, linear);

    let [fx, fy, fz] = [
        lab_f(xyz[0] / D65_WHITE[0]),
        lab_f(xyz[1] / D65_WHITE[1]),
        lab_f(xyz[2] / D65_WHITE[2]),
    ];

    LabColor {
        l: (116.0 * fy - 16.0).round(),
        a: (500.0 * (fx - fy)).round(),
        b: (200.0 * (fy - fz)).round(),
    }
}

/// Convert LAB to RGB. Out of gamut results are clamped. The result is opaque.
#[must_use]
pub fn lab_to_rgb(lab: LabColor) -> RgbColor {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let xr = lab_f_inverse(fx);
    let yr = if lab.l > CIE_KAPPA * CIE_EPSILON {
        fy.powi(3)
    } else {
        lab.l / CIE_KAPPA
    };
    let zr = lab_f_inverse(fz);

    let xyz = [xr * D65_WHITE[0], yr * D65_WHITE[1], zr * D65_WHITE[2]];
    let [red, green, blue] = multiply(&XYZ_TO_SRGB, xyz);

    RgbColor::from_f64(
        linear_to_srgb(red) * 255.0,
        linear_to_srgb(green) * 255.0,
        linear_to_srgb(blue) * 255.0,
        1.0,
    )
}

/// Inverse sRGB companding (gamma expansion).
#[must_use]
pub fn srgb_to_linear(value: f64) -> f64 {
    if value > SRGB_LINEAR_THRESHOLD {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// sRGB companding (gamma compression).
#[must_use]
pub fn linear_to_srgb(value: f64) -> f64 {
    if value > SRGB_GAMMA_THRESHOLD {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inverse(f: f64) -> f64 {
    let cubed = f.powi(3);
    if cubed > CIE_EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / CIE_KAPPA
    }
}

fn multiply(matrix: &[[f64; 3]; 3], vector: [f64; 3]) -> [f64; 3] {
    let row = |it: &[f64; 3]| it[0] * vector[0] + it[1] * vector[1] + it[2] * vector[2];
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, assert_rgb_within};
    use test_case::test_case;

    #[test_case((255, 0, 0), (53.0, 80.0, 67.0))]
    #[test_case((0, 0, 0), (0.0, 0.0, 0.0))]
    #[test_case((255, 255, 255), (100.0, 0.0, 0.0))]
    #[test_case((128, 128, 128), (54.0, 0.0, 0.0))]
    #[test_case((0, 128, 0), (46.0, -52.0, 50.0))]
    #[test_case((59, 130, 246), (56.0, 18.0, -64.0))]
    fn test_rgb_to_lab(rgb: (u8, u8, u8), expected: (f64, f64, f64)) {
        let it = rgb_to_lab(rgb.into());
        // `-0.0 == 0.0`, so grays compare equal regardless of the sign of zero.
        assert_eq2!((it.l, it.a, it.b), expected);
    }

    /// Grays and mid tones survive rounding `L`, `a`, `b` to integers almost intact.
    #[test_case((0, 0, 0))]
    #[test_case((255, 255, 255))]
    #[test_case((128, 128, 128))]
    #[test_case((18, 52, 86))]
    #[test_case((0, 128, 0))]
    #[test_case((255, 165, 0))]
    #[test_case((240, 248, 255))]
    fn test_round_trip_within_one(rgb: (u8, u8, u8)) {
        let original = RgbColor::from(rgb);
        assert_rgb_within!(lab_to_rgb(rgb_to_lab(original)), original, 1);
    }

    /// A channel at or near `0` sits on the steep end of the sRGB gamma curve, so the
    /// integer rounding of `a` and `b` gets magnified there. Saturated greens and cyans
    /// are hit hardest.
    #[test_case((255, 0, 0), (254, 0, 0))]
    #[test_case((0, 255, 0), (10, 255, 5))]
    #[test_case((0, 0, 255), (0, 0, 254))]
    #[test_case((255, 0, 255), (253, 0, 254))]
    #[test_case((0, 255, 255), (5, 255, 254))]
    #[test_case((59, 130, 246), (65, 131, 246))]
    #[test_case((0, 233, 248), (28, 234, 249))]
    fn test_round_trip_saturated(rgb: (u8, u8, u8), expected: (u8, u8, u8)) {
        let round_tripped = lab_to_rgb(rgb_to_lab(RgbColor::from(rgb)));
        assert_eq2!(round_tripped, RgbColor::from(expected));
    }

    /// The worst case over the whole cube is 28, at `(0, 233, 248)`. Roughly half of all
    /// colors come back within 1.
    #[test]
    fn test_round_trip_grid_bounded() {
        let mut worst = 0_u8;
        for red in (0..=255_u8).step_by(5) {
            for green in (0..=255_u8).step_by(5) {
                for blue in (0..=255_u8).step_by(5) {
                    let original = RgbColor::from_u8(red, green, blue);
                    let it = lab_to_rgb(rgb_to_lab(original));
                    assert_rgb_within!(it, original, 28);
                    worst = worst
                        .max(it.red.abs_diff(red))
                        .max(it.green.abs_diff(green))
                        .max(it.blue.abs_diff(blue));
                }
            }
        }
        assert!(worst > 1, "worst: {worst}");
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let it = lab_to_rgb(LabColor::new(50.0, 127.0, -128.0));
        assert_eq2!(it.alpha, 1.0);
        assert_eq2!(it.green, 0);

        let it = lab_to_rgb(LabColor::new(100.0, 0.0, 0.0));
        assert_eq2!(it, RgbColor::WHITE);
    }

    #[test]
    fn test_srgb_companding_is_invertible() {
        for value in [0.0, 0.002, 0.04, 0.2, 0.5, 0.9, 1.0] {
            let round_tripped = linear_to_srgb(srgb_to_linear(value));
            assert!((round_tripped - value).abs() < 1e-6, "value: {value}");
        }
    }
}
