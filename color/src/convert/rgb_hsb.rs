// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB ↔ HSB (HSV).

use super::rgb_hsl::{carry_alpha, hue_in_degrees};
use crate::{HsbColor, PERCENT_MAX, RgbColor, channel_to_unit, constants::HUE_MAX,
            normalize_hue};

/// Convert RGB to HSB. Hue is computed (and rounded) exactly like [`crate::rgb_to_hsl`];
/// saturation is `delta / max` (`0` for black) and brightness is `max`.
#[must_use]
pub fn rgb_to_hsb(rgb: RgbColor) -> HsbColor {
    let (red, green, blue) = (
        channel_to_unit(rgb.red),
        channel_to_unit(rgb.green),
        channel_to_unit(rgb.blue),
    );
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    let hue = if delta == 0.0 {
        0.0
    } else {
        hue_in_degrees(red, green, blue, max, delta)
    };

    HsbColor {
        hue,
        saturation: saturation * PERCENT_MAX,
        brightness: max * PERCENT_MAX,
        alpha: carry_alpha(rgb),
    }
}

/// Convert HSB to RGB with the sector method: `i = floor(h * 6)`, `f` is the
/// fractional part, and `i mod 6` picks how `(v, p, q, t)` map onto `(r, g, b)`.
#[must_use]
pub fn hsb_to_rgb(hsb: HsbColor) -> RgbColor {
    let hue = normalize_hue(hsb.hue) / HUE_MAX;
    let saturation = hsb.saturation / PERCENT_MAX;
    let value = hsb.brightness / PERCENT_MAX;

    let sector = (hue * 6.0).floor();
    let fraction = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    #[allow(clippy::cast_possible_truncation)]
    let (red, green, blue) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    RgbColor::from_f64(
        red * 255.0,
        green * 255.0,
        blue * 255.0,
        hsb.alpha.unwrap_or(1.0),
    )
}
