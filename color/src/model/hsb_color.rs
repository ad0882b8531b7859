// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{RgbColor, TransformColor, hsb_to_rgb, rgb_to_hsb};

/// Hue, saturation, brightness (also known as HSV).
///
/// - `hue` is in degrees, `0.0..360.0`.
/// - `saturation` and `brightness` are percentages, `0.0..=100.0`.
/// - `alpha` is only present when the color it came from was translucent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HsbColor {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: Option<f64>,
}

impl HsbColor {
    #[must_use]
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
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
}

impl From<RgbColor> for HsbColor {
    fn from(rgb: RgbColor) -> Self { rgb_to_hsb(rgb) }
}

impl TransformColor for HsbColor {
    fn as_rgb(&self) -> RgbColor { hsb_to_rgb(*self) }

    fn as_hsb(&self) -> HsbColor { *self }
}
