// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HarmonyType, HexColorList, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};

/// Rotate `hex` around the color wheel by each of the [`HarmonyType::hue_offsets`]. The
/// base entry is `hex` exactly as given (not re-serialized), the others are lowercase
/// `#rrggbb`. Malformed hex degrades the same way [`hex_to_rgb`] does.
#[must_use]
pub fn generate_harmony(hex: &str, harmony_type: HarmonyType) -> HexColorList {
    let base = rgb_to_hsl(hex_to_rgb(hex));
    harmony_type
        .hue_offsets()
        .iter()
        .map(|&degrees| {
            if degrees == 0.0 {
                hex.to_string()
            } else {
                rgb_to_hex(hsl_to_rgb(base.rotate_hue(degrees)), false)
            }
        })
        .collect()
}

/// `[base, +180]`
#[must_use]
pub fn get_complementary(hex: &str) -> HexColorList {
    generate_harmony(hex, HarmonyType::Complementary)
}

/// `[-30, base, +30]`
#[must_use]
pub fn get_analogous(hex: &str) -> HexColorList {
    generate_harmony(hex, HarmonyType::Analogous)
}

/// `[base, +120, +240]`
#[must_use]
pub fn get_triadic(hex: &str) -> HexColorList { generate_harmony(hex, HarmonyType::Triadic) }

/// `[base, +150, +210]`
#[must_use]
pub fn get_split_complementary(hex: &str) -> HexColorList {
    generate_harmony(hex, HarmonyType::SplitComplementary)
}

/// `[base, +60, +180, +240]`
#[must_use]
pub fn get_tetradic(hex: &str) -> HexColorList { generate_harmony(hex, HarmonyType::Tetradic) }

/// `[base, +90, +180, +270]`
#[must_use]
pub fn get_square(hex: &str) -> HexColorList { generate_harmony(hex, HarmonyType::Square) }
