// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CmykColor, HsbColor, HslColor, LabColor, RgbColor, rgb_to_cmyk, rgb_to_hex,
            rgb_to_hsb, rgb_to_hsl, rgb_to_lab};

/// Every color model converts to [`RgbColor`], the hub. The remaining conversions are
/// composed through it, so implementors only provide [`TransformColor::as_rgb`].
pub trait TransformColor {
    /// Returns a [`RgbColor`] representation of the `self` color.
    fn as_rgb(&self) -> RgbColor;

    fn as_hsl(&self) -> HslColor { rgb_to_hsl(self.as_rgb()) }

    fn as_hsb(&self) -> HsbColor { rgb_to_hsb(self.as_rgb()) }

    fn as_cmyk(&self) -> CmykColor { rgb_to_cmyk(self.as_rgb()) }

    fn as_lab(&self) -> LabColor { rgb_to_lab(self.as_rgb()) }

    /// Opaque `#rrggbb` form.
    fn as_hex(&self) -> String { rgb_to_hex(self.as_rgb(), false) }
}
