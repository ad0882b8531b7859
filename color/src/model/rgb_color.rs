// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) plus alpha. This is the hub representation that every other
//! model converts through.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ColorError, CommonResult, RoundToChannel, TransformColor, clamp_f64,
            hex_to_rgb, parse_color, rgb_to_hex, try_from_hex_color};

/// Represents a color in RGB format with an alpha channel.
///
/// - The channels are bytes, so they are always in `0..=255`. Constructors that take
///   real values ([`RgbColor::from_f64`]) round and clamp.
/// - `alpha` is in `0.0..=1.0`, and defaults to `1.0` (opaque).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Default for RgbColor {
    fn default() -> Self { Self::from_u8(255, 255, 255) }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbColor {
    /// `0xRRGGBB`. Any bits above the low 24 are ignored.
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self::from_u8(red, green, blue)
    }
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::from_u8(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::from_u8(255, 255, 255);

    /// Opaque color from bytes.
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Channels given as reals (nominally `0.0..=255.0`) are rounded and clamped. Alpha
    /// is clamped into `0.0..=1.0`.
    #[must_use]
    pub fn from_f64(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: red.round_to_channel(),
            green: green.round_to_channel(),
            blue: blue.round_to_channel(),
            alpha: clamp_f64(alpha, 0.0, 1.0),
        }
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: clamp_f64(alpha, 0.0, 1.0),
            ..self
        }
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool { self.alpha >= 1.0 }

    /// Lenient. Malformed digit groups become `0`. See [`hex_to_rgb`].
    #[must_use]
    pub fn from_hex(input: &str) -> Self { hex_to_rgb(input) }

    /// Strict. See [`try_from_hex_color`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexColor`] if the input string is not a valid hex
    /// color format.
    pub fn try_from_hex_color(input: &str) -> CommonResult<Self> {
        try_from_hex_color(input)
    }

    /// `#rrggbb`, or `#rrggbbaa` when `include_alpha` is set and the color is not opaque.
    #[must_use]
    pub fn to_hex(&self, include_alpha: bool) -> String { rgb_to_hex(*self, include_alpha) }
}

impl TransformColor for RgbColor {
    fn as_rgb(&self) -> RgbColor { *self }
}

impl FromStr for RgbColor {
    type Err = miette::Report;

    /// Accepts everything [`parse_color`] accepts.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match parse_color(input) {
            Some(color) => Ok(color),
            None => ColorError::UnrecognizedColor {
                input: input.to_string(),
            }
            .into_result(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_from_u8_is_opaque() {
        let value = RgbColor::from_u8(1, 2, 3);
        assert_eq2!((value.red, value.green, value.blue), (1, 2, 3));
        assert!(value.is_opaque());
    }

    #[test]
    fn test_default_is_white() {
        assert_eq2!(RgbColor::default(), RgbColor::WHITE);
    }

    #[test]
    fn test_from_u32() {
        assert_eq2!(RgbColor::from(0x3B_82F6), RgbColor::from_u8(59, 130, 246));
        assert_eq2!(RgbColor::from(0xFF00_0000), RgbColor::BLACK);
    }

    #[test_case(-10.0, 300.0, 127.5, 2.0, RgbColor { red: 0, green: 255, blue: 128, alpha: 1.0 })]
    #[test_case(12.4, 12.5, 12.6, 0.5, RgbColor { red: 12, green: 13, blue: 13, alpha: 0.5 })]
    #[test_case(0.0, 0.0, 0.0, -1.0, RgbColor { red: 0, green: 0, blue: 0, alpha: 0.0 })]
    fn test_from_f64_rounds_and_clamps(r: f64, g: f64, b: f64, a: f64, expected: RgbColor) {
        assert_eq2!(RgbColor::from_f64(r, g, b, a), expected);
    }

    #[test]
    fn test_with_alpha_clamps() {
        let it = RgbColor::BLACK.with_alpha(1.5);
        assert_eq2!(it.alpha, 1.0);
        let it = RgbColor::BLACK.with_alpha(0.25);
        assert_eq2!(it.alpha, 0.25);
        assert!(!it.is_opaque());
    }

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbColor::try_from_hex_color("#ff0000").unwrap();
            assert_eq2!(value, RgbColor::from_u8(255, 0, 0));
        }

        // Invalid.
        {
            let value = RgbColor::try_from_hex_color("#ff000");
            assert!(value.is_err());
        }
    }

    #[test]
    fn test_from_str() {
        let value: RgbColor = "rgb(1, 2, 3)".parse().unwrap();
        assert_eq2!(value, RgbColor::from_u8(1, 2, 3));

        let value: RgbColor = " Orange ".parse().unwrap();
        assert_eq2!(value, RgbColor::from_u8(255, 165, 0));

        let error = "not-a-color".parse::<RgbColor>().unwrap_err();
        assert_eq2!(
            error.downcast_ref::<ColorError>(),
            Some(&ColorError::UnrecognizedColor {
                input: "not-a-color".into()
            })
        );
    }

    #[test]
    fn test_to_hex() {
        let it = RgbColor::from_u8(59, 130, 246);
        assert_eq2!(it.to_hex(false), "#3b82f6");
        assert_eq2!(it.with_alpha(0.5).to_hex(true), "#3b82f680");
    }
}
