// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hex color codec. Accepts `#RGB`, `#RGBA`, `#RRGGBB`, and `#RRGGBBAA`, case
//! insensitive, with the `#` optional. Always emits lowercase with a leading `#`.
//!
//! There are two ways in:
//! 1. [`hex_to_rgb`] is lenient. It never fails, and a malformed digit group becomes `0`
//!    for that channel. This is what the color picker surfaces use while a user is still
//!    typing.
//! 2. [`try_from_hex_color`] is strict. It is built on [`parse_hex_color`], a [`nom`]
//!    parser, and rejects anything malformed.

use std::fmt::Write as _;

use nom::{IResult, Parser,
          character::complete::{char, hex_digit1},
          combinator::{all_consuming, map_res, opt},
          sequence::preceded};

use crate::{ColorError, CommonResult, HASH_CHAR, InlineString, RgbColor, channel_to_unit,
            unit_to_channel};

/// Lenient hex decoding. See the module docs.
///
/// - Shorthand forms (3 or 4 digits) double each digit.
/// - The 8 digit form's last byte is alpha, scaled into `0.0..=1.0`.
/// - A digit group that is missing or not valid hex becomes `0`, it does not fail.
///   Callers that need validation should use [`is_valid_hex`] or [`try_from_hex_color`].
#[must_use]
pub fn hex_to_rgb(hex: &str) -> RgbColor {
    let digits = strip_hash(hex.trim());
    let expanded = expand_shorthand(digits);

    let channel = |index: usize| -> u8 {
        hex_group(&expanded, index).unwrap_or_else(|| {
            tracing::trace!(hex, group = index, "malformed hex digit group, using 0");
            0
        })
    };

    let alpha = if expanded.len() == 8 {
        channel_to_unit(channel(3))
    } else {
        1.0
    };

    RgbColor {
        red: channel(0),
        green: channel(1),
        blue: channel(2),
        alpha,
    }
}

/// Encode as `#rrggbb`. When `include_alpha` is set and the color is translucent, the
/// alpha byte is appended (`#rrggbbaa`).
#[must_use]
pub fn rgb_to_hex(rgb: RgbColor, include_alpha: bool) -> String {
    let mut acc = String::with_capacity(9);
    _ = write!(acc, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
    if include_alpha && rgb.alpha < 1.0 {
        _ = write!(acc, "{:02x}", unit_to_channel(rgb.alpha));
    }
    acc
}

/// Equivalent to matching `^#?[0-9A-Fa-f]{3,8}$` and checking that the number of digits
/// is 3, 4, 6, or 8.
#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = strip_hash(hex);
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Strict hex decoding. Leading and trailing whitespace is ignored, anything else that
/// isn't a well formed hex color is an error.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexColor`] if the input string is not a valid hex color
/// format.
pub fn try_from_hex_color(input: &str) -> CommonResult<RgbColor> {
    match all_consuming(parse_hex_color).parse(input.trim()) {
        Ok((_, color)) => Ok(color),
        Err(_) => ColorError::InvalidHexColor {
            input: input.to_string(),
        }
        .into_result(),
    }
}

/// Parse function that generates a [`RgbColor`] from a hex color string, and returns
/// the remainder of the input.
///
/// # Errors
///
/// Returns a nom parsing error if the input does not start with a well formed hex
/// color.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    map_res(
        preceded(opt(char(HASH_CHAR)), hex_digit1),
        helper_fns::parse_hex_digits,
    )
    .parse(input)
}

/// Helper functions to match and parse hex digits. These are not [`Parser`]
/// implementations.
mod helper_fns {
    use super::{ColorError, RgbColor, channel_to_unit, expand_shorthand, hex_group};

    /// This function is used by [`nom::combinator::map_res`] and it returns a
    /// [`Result`], not an [`nom::IResult`]. Every char of `digits` is already known to be
    /// a hex digit, only the count needs checking.
    pub fn parse_hex_digits(digits: &str) -> Result<RgbColor, ColorError> {
        let invalid = || ColorError::InvalidHexColor {
            input: digits.to_string(),
        };

        if !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return Err(invalid());
        }

        let expanded = expand_shorthand(digits);
        let red = hex_group(&expanded, 0).ok_or_else(invalid)?;
        let green = hex_group(&expanded, 1).ok_or_else(invalid)?;
        let blue = hex_group(&expanded, 2).ok_or_else(invalid)?;
        let alpha = match hex_group(&expanded, 3) {
            Some(byte) => channel_to_unit(byte),
            None => 1.0,
        };

        Ok(RgbColor {
            red,
            green,
            blue,
            alpha,
        })
    }
}

fn strip_hash(hex: &str) -> &str { hex.strip_prefix(HASH_CHAR).unwrap_or(hex) }

/// `abc` → `aabbcc` and `abcd` → `aabbccdd`. Other lengths are returned as is.
fn expand_shorthand(digits: &str) -> InlineString {
    let mut acc = InlineString::new();
    if matches!(digits.chars().count(), 3 | 4) {
        for c in digits.chars() {
            acc.push(c);
            acc.push(c);
        }
    } else {
        acc.push_str(digits);
    }
    acc
}

/// The byte encoded by the 2 digit group at `index`, or [`None`] if that group is
/// missing or isn't hex. `from_str_radix` accepts a leading `+`, hence the digit check.
fn hex_group(expanded: &str, index: usize) -> Option<u8> {
    let start = index * 2;
    let group = expanded.get(start..start + 2)?;
    if !group.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(group, 16).ok()
}
