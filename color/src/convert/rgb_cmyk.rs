// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB ↔ CMYK (naive device independent formula, no ink profiles).

use crate::{CmykColor, PERCENT_MAX, RgbColor, channel_to_unit};

/// Convert RGB to CMYK. Pure black short circuits to `(0, 0, 0, 100)` to avoid dividing
/// by zero. Alpha is dropped.
#[must_use]
pub fn rgb_to_cmyk(rgb: RgbColor) -> CmykColor {
    let (red, green, blue) = (
        channel_to_unit(rgb.red),
        channel_to_unit(rgb.green),
        channel_to_unit(rgb.blue),
    );
    let key = 1.0 - red.max(green).max(blue);

    #[allow(clippy::float_cmp)]
    if key == 1.0 {
        return CmykColor::new(0.0, 0.0, 0.0, PERCENT_MAX);
    }

    let ink = |channel: f64| (1.0 - channel - key) / (1.0 - key) * PERCENT_MAX;
    CmykColor::new(ink(red), ink(green), ink(blue), key * PERCENT_MAX)
}

/// Convert CMYK to RGB: `channel = 255 * (1 - X) * (1 - K)`. The result is opaque.
#[must_use]
pub fn cmyk_to_rgb(cmyk: CmykColor) -> RgbColor {
    let key = cmyk.key / PERCENT_MAX;
    let channel = |ink: f64| 255.0 * (1.0 - ink / PERCENT_MAX) * (1.0 - key);
    RgbColor::from_f64(
        channel(cmyk.cyan),
        channel(cmyk.magenta),
        channel(cmyk.yellow),
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_black_is_pure_key() {
        assert_eq2!(
            rgb_to_cmyk(RgbColor::BLACK),
            CmykColor::new(0.0, 0.0, 0.0, 100.0)
        );
    }

    #[test_case((255, 255, 255), (0.0, 0.0, 0.0, 0.0))]
    #[test_case((255, 0, 0), (0.0, 100.0, 100.0, 0.0))]
    #[test_case((0, 255, 255), (100.0, 0.0, 0.0, 0.0))]
    fn test_rgb_to_cmyk(rgb: (u8, u8, u8), expected: (f64, f64, f64, f64)) {
        let it = rgb_to_cmyk(rgb.into());
        assert_eq2!((it.cyan, it.magenta, it.yellow, it.key), expected);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let rgb = RgbColor::from_u8(10, 20, 30).with_alpha(0.2);
        assert_eq2!(cmyk_to_rgb(rgb_to_cmyk(rgb)).alpha, 1.0);
    }

    #[test]
    fn test_round_trip_is_exact_over_grid() {
        for red in (0..=255_u8).step_by(15) {
            for green in (0..=255_u8).step_by(15) {
                for blue in (0..=255_u8).step_by(15) {
                    let original = RgbColor::from_u8(red, green, blue);
                    assert_eq2!(cmyk_to_rgb(rgb_to_cmyk(original)), original);
                }
            }
        }
    }
}
