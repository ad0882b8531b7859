// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{RgbColor, TransformColor, cmyk_to_rgb, rgb_to_cmyk};

/// Cyan, magenta, yellow, key (black). Every component is a percentage in
/// `0.0..=100.0`. This model is opaque: there is no alpha channel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CmykColor {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl CmykColor {
    #[must_use]
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }
}

impl From<RgbColor> for CmykColor {
    fn from(rgb: RgbColor) -> Self { rgb_to_cmyk(rgb) }
}

impl TransformColor for CmykColor {
    fn as_rgb(&self) -> RgbColor { cmyk_to_rgb(*self) }

    fn as_cmyk(&self) -> CmykColor { *self }
}
