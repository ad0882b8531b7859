// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{RgbColor, TransformColor, lab_to_rgb, rgb_to_lab};

/// CIE L\*a\*b\* relative to the D65 white point.
///
/// - `l` (lightness) is in `0.0..=100.0`.
/// - `a` (green to red) and `b` (blue to yellow) are nominally in `-128.0..=127.0`. The
///   conversion math does not clamp them; only editors that let users type values do.
///
/// This model is opaque: there is no alpha channel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabColor {
    #[must_use]
    pub fn new(l: f64, a: f64, b: f64) -> Self { Self { l, a, b } }
}

impl From<RgbColor> for LabColor {
    fn from(rgb: RgbColor) -> Self { rgb_to_lab(rgb) }
}

impl TransformColor for LabColor {
    fn as_rgb(&self) -> RgbColor { lab_to_rgb(*self) }

    fn as_lab(&self) -> LabColor { *self }
}
