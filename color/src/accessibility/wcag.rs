// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! WCAG 2.x relative luminance and contrast.
//!
//! - <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
//! - <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use serde::{Deserialize, Serialize};

use crate::{LIGHT_COLOR_LUMINANCE_THRESHOLD, RgbColor, WCAG_AA_LARGE_RATIO,
            WCAG_AA_RATIO, WCAG_AAA_LARGE_RATIO, WCAG_AAA_RATIO, WCAG_BLUE_WEIGHT,
            WCAG_FLARE, WCAG_GREEN_WEIGHT, WCAG_LINEAR_THRESHOLD, WCAG_RED_WEIGHT,
            channel_to_unit, round_to};

/// Which WCAG contrast levels a foreground and background pair passes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WcagCompliance {
    /// Contrast ratio rounded to 2 decimals.
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

/// Relative luminance in `0.0..=1.0`. Alpha is ignored.
#[must_use]
pub fn get_luminance(rgb: RgbColor) -> f64 {
    WCAG_RED_WEIGHT * linearize(rgb.red)
        + WCAG_GREEN_WEIGHT * linearize(rgb.green)
        + WCAG_BLUE_WEIGHT * linearize(rgb.blue)
}

/// `(lighter + 0.05) / (darker + 0.05)`, in `1.0..=21.0`. Symmetric in its arguments.
#[must_use]
pub fn get_contrast_ratio(color_1: RgbColor, color_2: RgbColor) -> f64 {
    let luminance_1 = get_luminance(color_1);
    let luminance_2 = get_luminance(color_2);
    let (lighter, darker) = if luminance_1 >= luminance_2 {
        (luminance_1, luminance_2)
    } else {
        (luminance_2, luminance_1)
    };
    (lighter + WCAG_FLARE) / (darker + WCAG_FLARE)
}

/// The thresholds are compared against the unrounded ratio, so a pair at `4.499` fails
/// AA even though `ratio` reports `4.5`.
#[must_use]
pub fn get_wcag_compliance(foreground: RgbColor, background: RgbColor) -> WcagCompliance {
    let ratio = get_contrast_ratio(foreground, background);
    WcagCompliance {
        ratio: round_to(ratio, 2),
        aa: ratio >= WCAG_AA_RATIO,
        aa_large: ratio >= WCAG_AA_LARGE_RATIO,
        aaa: ratio >= WCAG_AAA_RATIO,
        aaa_large: ratio >= WCAG_AAA_LARGE_RATIO,
    }
}

#[must_use]
pub fn is_light_color(rgb: RgbColor) -> bool {
    get_luminance(rgb) > LIGHT_COLOR_LUMINANCE_THRESHOLD
}

/// Black text on light backgrounds, white text on dark ones.
#[must_use]
pub fn get_contrasting_text_color(background: RgbColor) -> RgbColor {
    if is_light_color(background) {
        RgbColor::BLACK
    } else {
        RgbColor::WHITE
    }
}

fn linearize(channel: u8) -> f64 {
    let value = channel_to_unit(channel);
    if value <= WCAG_LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "actual: {actual}, expected: {expected}"
        );
    }

    #[test]
    fn test_luminance_extremes() {
        assert_close(get_luminance(RgbColor::WHITE), 1.0);
        assert_close(get_luminance(RgbColor::BLACK), 0.0);
        assert_close(get_luminance(RgbColor::from_u8(255, 0, 0)), 0.2126);
        assert_close(get_luminance(RgbColor::from_u8(0, 255, 0)), 0.7152);
        assert_close(get_luminance(RgbColor::from_u8(0, 0, 255)), 0.0722);
    }

    #[test]
    fn test_luminance_is_monotonic_per_channel() {
        let mut previous = -1.0;
        for value in 0..=255_u8 {
            let it = get_luminance(RgbColor::from_u8(value, 0, 0));
            assert!(it > previous, "value: {value}");
            previous = it;
        }
    }

    #[test]
    fn test_contrast_ratio() {
        assert_close(get_contrast_ratio(RgbColor::BLACK, RgbColor::WHITE), 21.0);
        assert_close(get_contrast_ratio(RgbColor::WHITE, RgbColor::BLACK), 21.0);

        let gray = RgbColor::from_u8(118, 118, 118);
        assert_close(get_contrast_ratio(gray, gray), 1.0);
        assert_eq2!(
            get_contrast_ratio(gray, RgbColor::WHITE),
            get_contrast_ratio(RgbColor::WHITE, gray)
        );
    }

    #[test_case((0, 0, 0), (255, 255, 255), WcagCompliance { ratio: 21.0, aa: true, aa_large: true, aaa: true, aaa_large: true })]
    #[test_case((118, 118, 118), (255, 255, 255), WcagCompliance { ratio: 4.54, aa: true, aa_large: true, aaa: false, aaa_large: true })]
    #[test_case((255, 0, 0), (255, 255, 255), WcagCompliance { ratio: 4.0, aa: false, aa_large: true, aaa: false, aaa_large: false })]
    #[test_case((59, 130, 246), (0, 0, 0), WcagCompliance { ratio: 5.71, aa: true, aa_large: true, aaa: false, aaa_large: true })]
    #[test_case((255, 255, 255), (255, 255, 255), WcagCompliance { ratio: 1.0, aa: false, aa_large: false, aaa: false, aaa_large: false })]
    fn test_get_wcag_compliance(
        foreground: (u8, u8, u8),
        background: (u8, u8, u8),
        expected: WcagCompliance,
    ) {
        assert_eq2!(
            get_wcag_compliance(foreground.into(), background.into()),
            expected
        );
    }

    #[test_case((255, 255, 255), true)]
    #[test_case((128, 128, 128), true)]
    #[test_case((118, 118, 118), true)]
    #[test_case((59, 130, 246), false)]
    #[test_case((0, 0, 0), false)]
    fn test_is_light_color(rgb: (u8, u8, u8), expected: bool) {
        assert_eq2!(is_light_color(rgb.into()), expected);
    }

    #[test]
    fn test_get_contrasting_text_color() {
        assert_eq2!(
            get_contrasting_text_color(RgbColor::from_u8(255, 255, 0)),
            RgbColor::BLACK
        );
        assert_eq2!(
            get_contrasting_text_color(RgbColor::from_u8(0, 0, 128)),
            RgbColor::WHITE
        );
    }
}
