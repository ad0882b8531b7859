// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{RgbColor, TransformColor, cmyk_to_string, hsb_to_string, hsl_to_css,
            lab_to_string, rgb_to_css, rgb_to_hex};

/// The text representations that [`format_color`] can produce.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`, or `#rrggbbaa` when translucent.
    Hex,
    Rgb,
    Hsl,
    Hsb,
    Cmyk,
    Lab,
}

#[must_use]
pub fn format_color(rgb: RgbColor, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => rgb_to_hex(rgb, true),
        ColorFormat::Rgb => rgb_to_css(rgb),
        ColorFormat::Hsl => hsl_to_css(rgb.as_hsl()),
        ColorFormat::Hsb => hsb_to_string(rgb.as_hsb()),
        ColorFormat::Cmyk => cmyk_to_string(rgb.as_cmyk()),
        ColorFormat::Lab => lab_to_string(rgb.as_lab()),
    }
}
