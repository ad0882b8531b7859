// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Evaluate a [`GradientValue`] at evenly spaced positions using [`colorgrad`]. Radial
//! gradients are sampled along their radius, which is the same as a linear gradient
//! over the sorted stops.

use colorgrad::Gradient;

use crate::{ColorError, CommonResult, GradientValue, PERCENT_MAX, RgbColor,
            channel_to_unit, parse_color, rgb_to_hex, unit_to_channel};

impl GradientValue {
    /// Returns `steps` hex colors, evenly spaced from position `0` to `100` inclusive.
    /// Stop positions are honored, so stops at `0%` and `50%` make the second half of
    /// the result a flat run of the last color. Translucent samples keep their alpha
    /// byte (`#rrggbbaa`).
    ///
    /// # Errors
    ///
    /// - [`ColorError::NotEnoughGradientStops`] if there are fewer than 2 stops.
    /// - [`ColorError::UnrecognizedColor`] if a stop's color can't be parsed.
    /// - [`ColorError::GradientBuildFailed`] if [`colorgrad`] rejects the stops.
    pub fn sample(&self, steps: usize) -> CommonResult<Vec<String>> {
        let stops = self.sorted_stops();
        if stops.len() < 2 {
            return ColorError::NotEnoughGradientStops { count: stops.len() }.into_result();
        }

        let mut colors = Vec::with_capacity(stops.len());
        let mut domain = Vec::with_capacity(stops.len());
        for stop in &stops {
            let Some(rgb) = parse_color(&stop.color) else {
                return ColorError::UnrecognizedColor {
                    input: stop.color.clone(),
                }
                .into_result();
            };
            colors.push(colorgrad::Color::from_rgba8(
                rgb.red,
                rgb.green,
                rgb.blue,
                unit_to_channel(rgb.alpha),
            ));
            domain.push(as_number(stop.position));
        }

        let gradient = match colorgrad::GradientBuilder::new()
            .colors(&colors)
            .domain(&domain)
            .build::<colorgrad::LinearGradient>()
        {
            Ok(gradient) => gradient,
            Err(error) => {
                tracing::debug!(%error, css = %self, "gradient build failed");
                return ColorError::GradientBuildFailed {
                    reason: error.to_string(),
                }
                .into_result();
            }
        };

        let fractional_step = if steps > 1 {
            PERCENT_MAX / as_f64(steps - 1)
        } else {
            0.0
        };

        let acc = (0..steps)
            .map(|step_count| {
                let [red, green, blue, alpha] = gradient
                    .at(as_number(fractional_step * as_f64(step_count)))
                    .to_rgba8();
                let rgb = RgbColor {
                    red,
                    green,
                    blue,
                    alpha: channel_to_unit(alpha),
                };
                rgb_to_hex(rgb, true)
            })
            .collect::<Vec<_>>();

        Ok(acc)
    }
}

/// Convenience for [`GradientValue::sample`].
///
/// # Errors
///
/// See [`GradientValue::sample`].
pub fn sample_gradient(gradient: &GradientValue, steps: usize) -> CommonResult<Vec<String>> {
    gradient.sample(steps)
}

#[allow(clippy::cast_possible_truncation)]
fn as_number(value: f64) -> f32 { value as f32 }

#[allow(clippy::cast_precision_loss)]
fn as_f64(value: usize) -> f64 { value as f64 }
