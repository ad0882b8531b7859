// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lightness scales. Hue and saturation stay fixed; only lightness moves.
//!
//! | Scale              | Lightness of entry `i`                          | Order            |
//! | ------------------ | ----------------------------------------------- | ---------------- |
//! | [`get_monochromatic`] | `round(10 + i * 80 / (count - 1))`           | dark to light    |
//! | [`get_shades`]     | `max(L - step * (i + 1), 0)`, `step = L / count` | darkest first    |
//! | [`get_tints`]      | `L + step * i`, `step = (100 - L) / count`      | base first       |
//!
//! A `count` of `0` always produces an empty list.

use crate::{HexColorList, HslColor, MONOCHROMATIC_MAX_LIGHTNESS,
            MONOCHROMATIC_MIN_LIGHTNESS, PERCENT_MAX, hex_to_rgb, hsl_to_rgb, rgb_to_hex,
            rgb_to_hsl};

/// `count` evenly spaced lightnesses from 10 to 90. With a `count` of 1 the single entry
/// is the darkest one (lightness 10).
#[must_use]
pub fn get_monochromatic(hex: &str, count: usize) -> HexColorList {
    let base = base_hsl(hex);
    let span = MONOCHROMATIC_MAX_LIGHTNESS - MONOCHROMATIC_MIN_LIGHTNESS;
    let last_index = as_f64(count.saturating_sub(1)).max(1.0);

    (0..count)
        .map(|index| {
            let lightness =
                (MONOCHROMATIC_MIN_LIGHTNESS + as_f64(index) * span / last_index).round();
            with_lightness(base, lightness)
        })
        .collect()
}

/// `count` progressively darker versions of `hex`, ending in black, ordered darkest
/// first. The base itself is not included.
#[must_use]
pub fn get_shades(hex: &str, count: usize) -> HexColorList {
    if count == 0 {
        return HexColorList::new();
    }

    let base = base_hsl(hex);
    let step = base.lightness / as_f64(count);

    (0..count)
        .rev()
        .map(|index| {
            let lightness = (base.lightness - step * as_f64(index + 1)).max(0.0);
            with_lightness(base, lightness)
        })
        .collect()
}

/// `count` progressively lighter versions of `hex`, base first. The first entry is
/// `hex` exactly as given, and white is never reached.
#[must_use]
pub fn get_tints(hex: &str, count: usize) -> HexColorList {
    if count == 0 {
        return HexColorList::new();
    }

    let base = base_hsl(hex);
    let step = (PERCENT_MAX - base.lightness) / as_f64(count);

    (0..count)
        .map(|index| {
            if index == 0 {
                hex.to_string()
            } else {
                with_lightness(base, base.lightness + step * as_f64(index))
            }
        })
        .collect()
}

fn base_hsl(hex: &str) -> HslColor { rgb_to_hsl(hex_to_rgb(hex)) }

fn with_lightness(base: HslColor, lightness: f64) -> String {
    rgb_to_hex(hsl_to_rgb(base.with_lightness(lightness)), false)
}

/// Scale sizes are tiny, so this never loses precision.
#[allow(clippy::cast_precision_loss)]
fn as_f64(value: usize) -> f64 { value as f64 }
