// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    /// Always serialized as a `circle`.
    Radial,
}

/// A color at a position along the gradient line.
///
/// - `color` is kept as text (hex or a functional CSS color), exactly as it was written.
/// - `position` is a percentage, nominally `0.0..=100.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

/// A linear or radial gradient. Stops are stored in the order they were given; every
/// consumer works off [`GradientValue::sorted_stops`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientValue {
    pub gradient_type: GradientType,
    /// Degrees, only meaningful for [`GradientType::Linear`]. [`None`] means the CSS
    /// default of `180` (top to bottom).
    pub angle: Option<f64>,
    pub stops: Vec<GradientStop>,
}

impl GradientValue {
    #[must_use]
    pub fn linear(angle: f64, stops: Vec<GradientStop>) -> Self {
        Self {
            gradient_type: GradientType::Linear,
            angle: Some(angle),
            stops,
        }
    }

    #[must_use]
    pub fn radial(stops: Vec<GradientStop>) -> Self {
        Self {
            gradient_type: GradientType::Radial,
            angle: None,
            stops,
        }
    }

    /// Stops ordered by position, ascending. The sort is stable, so stops that share a
    /// position keep their relative order (which is how hard color edges are written).
    #[must_use]
    pub fn sorted_stops(&self) -> Vec<&GradientStop> {
        let mut acc = self.stops.iter().collect::<Vec<_>>();
        acc.sort_by(|lhs, rhs| lhs.position.total_cmp(&rhs.position));
        acc
    }
}
