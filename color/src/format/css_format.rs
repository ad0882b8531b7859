// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CmykColor, HsbColor, HslColor, LabColor, RgbColor, round_to};

/// `rgb(r, g, b)` for opaque colors, else `rgba(r, g, b, a)` with alpha rounded to 2
/// decimals.
#[must_use]
pub fn rgb_to_css(rgb: RgbColor) -> String {
    let RgbColor {
        red,
        green,
        blue,
        alpha,
    } = rgb;
    if rgb.is_opaque() {
        format!("rgb({red}, {green}, {blue})")
    } else {
        format!("rgba({red}, {green}, {blue}, {})", round_to(alpha, 2))
    }
}

/// `hsl(h, s%, l%)` with every component rounded to a whole number, or
/// `hsla(h, s%, l%, a)` when the color carries an alpha below 1.
#[must_use]
pub fn hsl_to_css(hsl: HslColor) -> String {
    let (hue, saturation, lightness) =
        (whole(hsl.hue), whole(hsl.saturation), whole(hsl.lightness));
    match hsl.alpha {
        Some(alpha) if alpha < 1.0 => format!(
            "hsla({hue}, {saturation}%, {lightness}%, {})",
            round_to(alpha, 2)
        ),
        _ => format!("hsl({hue}, {saturation}%, {lightness}%)"),
    }
}

#[must_use]
pub fn hsb_to_string(hsb: HsbColor) -> String {
    format!(
        "hsb({}, {}%, {}%)",
        whole(hsb.hue),
        whole(hsb.saturation),
        whole(hsb.brightness)
    )
}

#[must_use]
pub fn cmyk_to_string(cmyk: CmykColor) -> String {
    format!(
        "cmyk({}%, {}%, {}%, {}%)",
        whole(cmyk.cyan),
        whole(cmyk.magenta),
        whole(cmyk.yellow),
        whole(cmyk.key)
    )
}

#[must_use]
pub fn lab_to_string(lab: LabColor) -> String {
    format!("lab({}, {}, {})", whole(lab.l), whole(lab.a), whole(lab.b))
}

/// Rounded to an integer so that `-0.0` prints as `0`.
#[allow(clippy::cast_possible_truncation)]
fn whole(value: f64) -> i64 { value.round() as i64 }

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", rgb_to_css(*self)) }
}

impl Display for HslColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", hsl_to_css(*self)) }
}

impl Display for HsbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", hsb_to_string(*self)) }
}

impl Display for CmykColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", cmyk_to_string(*self))
    }
}

impl Display for LabColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", lab_to_string(*self)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransformColor, assert_eq2, parse_color};

    const BLUE_500: RgbColor = RgbColor::from_u8(59, 130, 246);

    #[test]
    fn test_rgb_to_css() {
        assert_eq2!(rgb_to_css(BLUE_500), "rgb(59, 130, 246)");
        assert_eq2!(
            rgb_to_css(BLUE_500.with_alpha(128.0 / 255.0)),
            "rgba(59, 130, 246, 0.5)"
        );
        assert_eq2!(BLUE_500.to_string(), "rgb(59, 130, 246)");
    }

    #[test]
    fn test_hsl_to_css() {
        assert_eq2!(hsl_to_css(BLUE_500.as_hsl()), "hsl(217, 91%, 60%)");
        assert_eq2!(
            hsl_to_css(HslColor::new(0.0, 100.0, 50.0).with_alpha(0.25)),
            "hsla(0, 100%, 50%, 0.25)"
        );
        // An explicit alpha of 1 is the same as no alpha.
        assert_eq2!(
            hsl_to_css(HslColor::new(0.0, 100.0, 50.0).with_alpha(1.0)),
            "hsl(0, 100%, 50%)"
        );
    }

    #[test]
    fn test_display_only_strings() {
        assert_eq2!(hsb_to_string(BLUE_500.as_hsb()), "hsb(217, 76%, 96%)");
        assert_eq2!(cmyk_to_string(BLUE_500.as_cmyk()), "cmyk(76%, 47%, 0%, 4%)");
        assert_eq2!(lab_to_string(BLUE_500.as_lab()), "lab(56, 18, -64)");
        // Grays produce `-0.0` for `a`, which must not leak into the output.
        assert_eq2!(
            RgbColor::from_u8(128, 128, 128).as_lab().to_string(),
            "lab(54, 0, 0)"
        );
    }

    #[test]
    fn test_css_output_parses_back() {
        for rgb in [BLUE_500, RgbColor::BLACK, RgbColor::from_u8(255, 165, 0)] {
            assert_eq2!(parse_color(&rgb_to_css(rgb)), Some(rgb));
        }
        let translucent = RgbColor::from_u8(255, 0, 0).with_alpha(0.25);
        assert_eq2!(parse_color(&rgb_to_css(translucent)), Some(translucent));
        assert_eq2!(
            parse_color(&hsl_to_css(HslColor::new(120.0, 100.0, 25.0))),
            Some(RgbColor::from_u8(0, 128, 0))
        );
    }
}
