// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB ↔ HSL using the standard min / max / delta algorithm.

use crate::{HslColor, PERCENT_MAX, RgbColor, channel_to_unit, constants::HUE_MAX,
            normalize_hue};

/// Convert RGB to HSL.
///
/// - Hue is rounded to a whole degree. Saturation and lightness are not rounded.
/// - Grays (max == min) have hue `0` and saturation `0`.
/// - Alpha is carried over only when the input is not opaque.
#[must_use]
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let (red, green, blue) = (
        channel_to_unit(rgb.red),
        channel_to_unit(rgb.green),
        channel_to_unit(rgb.blue),
    );
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        (hue_in_degrees(red, green, blue, max, delta), saturation)
    };

    HslColor {
        hue,
        saturation: saturation * PERCENT_MAX,
        lightness: lightness * PERCENT_MAX,
        alpha: carry_alpha(rgb),
    }
}

/// Convert HSL to RGB. Channels are rounded and clamped into `0..=255`. Missing alpha
/// means opaque.
#[must_use]
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let hue = normalize_hue(hsl.hue) / HUE_MAX;
    let saturation = hsl.saturation / PERCENT_MAX;
    let lightness = hsl.lightness / PERCENT_MAX;
    let alpha = hsl.alpha.unwrap_or(1.0);

    if saturation == 0.0 {
        let gray = lightness * 255.0;
        return RgbColor::from_f64(gray, gray, gray, alpha);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    RgbColor::from_f64(
        hue_to_rgb(p, q, hue + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, hue) * 255.0,
        hue_to_rgb(p, q, hue - 1.0 / 3.0) * 255.0,
        alpha,
    )
}

/// The canonical piecewise helper. `t` may fall slightly outside `0.0..=1.0` (by a
/// third at most) and is wrapped back in.
#[must_use]
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Hue shared by HSL and HSB. Picked piecewise by whichever channel is the max (red wins
/// ties, then green), then rounded to a whole degree in `0.0..360.0`.
pub(crate) fn hue_in_degrees(red: f64, green: f64, blue: f64, max: f64, delta: f64) -> f64 {
    #[allow(clippy::float_cmp)]
    let sextant = if max == red {
        (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };
    normalize_hue((sextant * 60.0).round())
}

pub(crate) fn carry_alpha(rgb: RgbColor) -> Option<f64> {
    (!rgb.is_opaque()).then_some(rgb.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, assert_rgb_within};
    use test_case::test_case;

    #[test_case((255, 0, 0), (0.0, 100.0, 50.0))]
    #[test_case((0, 255, 0), (120.0, 100.0, 50.0))]
    #[test_case((0, 0, 255), (240.0, 100.0, 50.0))]
    #[test_case((0, 0, 0), (0.0, 0.0, 0.0))]
    #[test_case((255, 255, 255), (0.0, 0.0, 100.0))]
    #[test_case((255, 0, 255), (300.0, 100.0, 50.0))]
    fn test_rgb_to_hsl(rgb: (u8, u8, u8), expected: (f64, f64, f64)) {
        let it = rgb_to_hsl(rgb.into());
        assert_eq2!((it.hue, it.saturation, it.lightness), expected);
        assert_eq2!(it.alpha, None);
    }

    #[test]
    fn test_rgb_to_hsl_rounds_hue_only() {
        // #3b82f6: hue 217.2 rounds to 217, the rest keep their precision.
        let it = rgb_to_hsl(RgbColor::from_u8(59, 130, 246));
        assert_eq2!(it.hue, 217.0);
        assert!((it.saturation - 91.219_512).abs() < 1e-5);
        assert!((it.lightness - 59.803_921).abs() < 1e-5);
    }

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        let it = rgb_to_hsl(RgbColor::from_u8(128, 128, 128));
        assert_eq2!((it.hue, it.saturation), (0.0, 0.0));
    }

    #[test]
    fn test_alpha_is_carried_only_when_translucent() {
        let it = rgb_to_hsl(RgbColor::from_u8(255, 0, 0).with_alpha(0.5));
        assert_eq2!(it.alpha, Some(0.5));
        assert_eq2!(hsl_to_rgb(it).alpha, 0.5);
        assert_eq2!(hsl_to_rgb(HslColor::new(0.0, 100.0, 50.0)).alpha, 1.0);
    }

    #[test_case(HslColor::new(0.0, 100.0, 50.0), (255, 0, 0))]
    #[test_case(HslColor::new(180.0, 100.0, 50.0), (0, 255, 255))]
    #[test_case(HslColor::new(360.0, 100.0, 50.0), (255, 0, 0))]
    #[test_case(HslColor::new(0.0, 0.0, 50.0), (128, 128, 128))]
    #[test_case(HslColor::new(210.0, 65.384_615_384_615_4, 20.392_156_862_745_097), (18, 52, 86))]
    fn test_hsl_to_rgb(hsl: HslColor, expected: (u8, u8, u8)) {
        assert_eq2!(hsl_to_rgb(hsl), RgbColor::from(expected));
    }

    /// Hue is rounded to a whole degree, so saturated colors may drift by 1.
    #[test_case((255, 0, 0))]
    #[test_case((18, 52, 86))]
    #[test_case((200, 100, 50))]
    #[test_case((0, 128, 0))]
    #[test_case((255, 165, 0))]
    #[test_case((75, 0, 130))]
    #[test_case((240, 248, 255))]
    #[test_case((59, 130, 246))]
    #[test_case((1, 2, 3))]
    fn test_round_trip_within_one(rgb: (u8, u8, u8)) {
        let original = RgbColor::from(rgb);
        assert_rgb_within!(hsl_to_rgb(rgb_to_hsl(original)), original, 1);
    }

    /// The worst case over the whole cube is 2, caused by hue rounding.
    #[test]
    fn test_round_trip_grid_bounded_by_hue_rounding() {
        for red in (0..=255_u8).step_by(15) {
            for green in (0..=255_u8).step_by(15) {
                for blue in (0..=255_u8).step_by(15) {
                    let original = RgbColor::from_u8(red, green, blue);
                    assert_rgb_within!(hsl_to_rgb(rgb_to_hsl(original)), original, 2);
                }
            }
        }
    }

    #[test]
    fn test_hue_to_rgb_wraps() {
        assert_eq2!(hue_to_rgb(0.0, 1.0, -0.25), hue_to_rgb(0.0, 1.0, 0.75));
        assert_eq2!(hue_to_rgb(0.0, 1.0, 1.25), hue_to_rgb(0.0, 1.0, 0.25));
    }
}
