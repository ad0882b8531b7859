// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Clamping and rounding helpers shared by every conversion.

use crate::constants::{CHANNEL_MAX, HUE_MAX};

/// Clamp `value` into `[min, max]`. Unlike [`f64::clamp`] this never panics (even when
/// `min > max`, in which case `min` wins) and maps `NaN` to `min`.
#[must_use]
pub fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.min(max).max(min)
}

/// Round `value` to `decimals` places, eg: `round_to(4.546, 2) == 4.55`.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Wrap a hue in degrees into `[0, 360)`. Negative hues wrap from the top, so the result
/// is never negative.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    let it = hue.rem_euclid(HUE_MAX);
    // `rem_euclid` can return exactly 360.0 for tiny negative inputs due to rounding.
    if it >= HUE_MAX { 0.0 } else { it }
}

/// Converts a real valued channel (nominally `0.0..=255.0`) into a byte, by rounding to
/// the nearest integer and then clamping. `NaN` becomes `0`.
pub trait RoundToChannel {
    #[must_use]
    fn round_to_channel(self) -> u8;
}

impl RoundToChannel for f64 {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn round_to_channel(self) -> u8 { clamp_f64(self.round(), 0.0, CHANNEL_MAX) as u8 }
}

/// Scales a normalized `0.0..=1.0` value up to a byte.
#[must_use]
pub fn unit_to_channel(unit: f64) -> u8 { (unit * CHANNEL_MAX).round_to_channel() }

/// Scales a byte down to a normalized `0.0..=1.0` value.
#[must_use]
pub fn channel_to_unit(channel: u8) -> f64 { f64::from(channel) / CHANNEL_MAX }
