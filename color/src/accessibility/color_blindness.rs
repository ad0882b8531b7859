// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color vision deficiency (CVD) simulation. Each kind is a fixed 3x3 matrix applied to
//! normalized RGB. This is a crude linear approximation that is good enough to eyeball a
//! palette, not a physiological model of cone response.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{RgbColor, channel_to_unit};

type Matrix = [[f64; 3]; 3];

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CvdKind {
    /// Red blind.
    Protanopia,
    /// Green blind.
    Deuteranopia,
    /// Blue blind.
    Tritanopia,
    /// No color at all, luma only.
    Achromatopsia,
}

impl CvdKind {
    #[must_use]
    pub fn matrix(self) -> &'static Matrix {
        match self {
            CvdKind::Protanopia => &PROTANOPIA,
            CvdKind::Deuteranopia => &DEUTERANOPIA,
            CvdKind::Tritanopia => &TRITANOPIA,
            CvdKind::Achromatopsia => &ACHROMATOPSIA,
        }
    }
}

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]];

const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

const LUMA: [f64; 3] = [0.299, 0.587, 0.114];
const ACHROMATOPSIA: Matrix = [LUMA, LUMA, LUMA];

/// How `rgb` looks to someone with the given [`CvdKind`]. Output channels are rounded
/// and clamped. Alpha passes through untouched.
#[must_use]
pub fn simulate_color_blindness(rgb: RgbColor, kind: CvdKind) -> RgbColor {
    let input = [
        channel_to_unit(rgb.red),
        channel_to_unit(rgb.green),
        channel_to_unit(rgb.blue),
    ];
    let row = |it: &[f64; 3]| (it[0] * input[0] + it[1] * input[1] + it[2] * input[2]) * 255.0;
    let [red, green, blue] = kind.matrix();
    RgbColor::from_f64(row(red), row(green), row(blue), rgb.alpha)
}
