// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
    Square,
}

impl HarmonyType {
    /// Hue rotations in output order. `0.0` is the base color itself.
    #[must_use]
    pub fn hue_offsets(self) -> &'static [f64] {
        match self {
            HarmonyType::Complementary => &[0.0, 180.0],
            HarmonyType::Analogous => &[-30.0, 0.0, 30.0],
            HarmonyType::Triadic => &[0.0, 120.0, 240.0],
            HarmonyType::SplitComplementary => &[0.0, 150.0, 210.0],
            HarmonyType::Tetradic => &[0.0, 60.0, 180.0, 240.0],
            HarmonyType::Square => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    #[must_use]
    pub fn info(self) -> HarmonyInfo {
        let (name, description) = match self {
            HarmonyType::Complementary => (
                "Complementary",
                "Two colors opposite each other on the color wheel",
            ),
            HarmonyType::Analogous => (
                "Analogous",
                "Three colors next to each other on the color wheel",
            ),
            HarmonyType::Triadic => (
                "Triadic",
                "Three colors evenly spaced around the color wheel",
            ),
            HarmonyType::SplitComplementary => (
                "Split Complementary",
                "A base color and the two colors adjacent to its complement",
            ),
            HarmonyType::Tetradic => (
                "Tetradic",
                "Four colors forming a rectangle on the color wheel",
            ),
            HarmonyType::Square => (
                "Square",
                "Four colors evenly spaced around the color wheel",
            ),
        };
        HarmonyInfo {
            harmony_type: self,
            name,
            description,
        }
    }
}

/// Display metadata for a [`HarmonyType`], eg: to populate a picker menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HarmonyInfo {
    pub harmony_type: HarmonyType,
    pub name: &'static str,
    pub description: &'static str,
}

/// All six harmonies, in declaration order.
#[must_use]
pub fn get_harmony_info() -> Vec<HarmonyInfo> {
    HarmonyType::iter().map(HarmonyType::info).collect()
}
