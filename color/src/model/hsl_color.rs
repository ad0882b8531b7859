// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{RgbColor, TransformColor, hsl_to_rgb, normalize_hue, rgb_to_hsl};

/// Hue, saturation, lightness.
///
/// - `hue` is in degrees, `0.0..360.0`, and wraps.
/// - `saturation` and `lightness` are percentages, `0.0..=100.0`.
/// - `alpha` is only present when the color it came from was translucent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: Option<f64>,
}

impl HslColor {
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: None,
        }
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Rotate the hue by `degrees` (may be negative). The result is always in
    /// `0.0..360.0`.
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            hue: normalize_hue(self.hue + degrees),
            ..self
        }
    }

    #[must_use]
    pub fn with_lightness(self, lightness: f64) -> Self { Self { lightness, ..self } }
}

impl From<RgbColor> for HslColor {
    fn from(rgb: RgbColor) -> Self { rgb_to_hsl(rgb) }
}

impl TransformColor for HslColor {
    fn as_rgb(&self) -> RgbColor { hsl_to_rgb(*self) }

    fn as_hsl(&self) -> HslColor { *self }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0.0, 180.0, 180.0)]
    #[test_case(270.0, 180.0, 90.0)]
    #[test_case(10.0, -30.0, 340.0)]
    #[test_case(0.0, 360.0, 0.0)]
    fn test_rotate_hue(hue: f64, degrees: f64, expected: f64) {
        let it = HslColor::new(hue, 50.0, 50.0).rotate_hue(degrees);
        assert_eq2!(it.hue, expected);
    }

    #[test]
    fn test_from_rgb() {
        let it = HslColor::from(RgbColor::from_u8(255, 0, 0));
        assert_eq2!(it, HslColor::new(0.0, 100.0, 50.0));
    }
}
