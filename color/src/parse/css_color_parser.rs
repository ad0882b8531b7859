// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Generic color string parser. The input is trimmed and lowercased, then tried as:
//!
//! 1. `#` followed by a valid hex color (see [`is_valid_hex`]).
//! 2. `rgb(r, g, b)` or `rgba(r, g, b, a)`. Channels are unsigned integers, clamped to
//!    `255`. Alpha is clamped into `0.0..=1.0`.
//! 3. `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`. The `%` signs are required.
//! 4. A [`NamedColor`].
//!
//! The functional forms must consume the whole input. Whitespace is allowed around
//! every argument.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while1},
          character::complete::{char, digit1, multispace0},
          combinator::{all_consuming, map, map_res, opt},
          sequence::{delimited, preceded, terminated}};

use crate::{HASH_CHAR, HslColor, NamedColor, RgbColor, hex_to_rgb, hsl_to_rgb,
            is_valid_hex};

/// Parse any supported color string. Returns [`None`] when nothing matches; use
/// [`RgbColor`]'s [`std::str::FromStr`] impl for an error instead.
#[must_use]
pub fn parse_color(input: &str) -> Option<RgbColor> {
    let normalized = input.trim().to_lowercase();
    let it = normalized.as_str();

    let maybe_color = if it.starts_with(HASH_CHAR) {
        is_valid_hex(it).then(|| hex_to_rgb(it))
    } else if let Ok((_, color)) = all_consuming(parse_rgb_function).parse(it) {
        Some(color)
    } else if let Ok((_, color)) = all_consuming(parse_hsl_function).parse(it) {
        Some(color)
    } else {
        it.parse::<NamedColor>().ok().map(RgbColor::from)
    };

    if maybe_color.is_none() {
        tracing::trace!(input, "unrecognized color");
    }

    maybe_color
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`. Expects lowercase input.
///
/// # Errors
///
/// Returns a nom parsing error if the input does not start with an `rgb` function.
pub fn parse_rgb_function(input: &str) -> IResult<&str, RgbColor> {
    map(
        delimited(
            (tag("rgb"), opt(char('a')), multispace0, char('(')),
            (
                parse_channel,
                preceded(parse_comma, parse_channel),
                preceded(parse_comma, parse_channel),
                opt(preceded(parse_comma, parse_alpha)),
            ),
            char(')'),
        ),
        |(red, green, blue, maybe_alpha)| {
            RgbColor::from_u8(red, green, blue).with_alpha(maybe_alpha.unwrap_or(1.0))
        },
    )
    .parse(input)
}

/// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`. Expects lowercase input.
///
/// # Errors
///
/// Returns a nom parsing error if the input does not start with an `hsl` function.
pub fn parse_hsl_function(input: &str) -> IResult<&str, RgbColor> {
    map(
        delimited(
            (tag("hsl"), opt(char('a')), multispace0, char('(')),
            (
                parse_unsigned,
                preceded(parse_comma, parse_percent),
                preceded(parse_comma, parse_percent),
                opt(preceded(parse_comma, parse_alpha)),
            ),
            char(')'),
        ),
        |(hue, saturation, lightness, maybe_alpha)| {
            let hsl = HslColor {
                hue: f64::from(hue),
                saturation: f64::from(saturation),
                lightness: f64::from(lightness),
                alpha: maybe_alpha,
            };
            hsl_to_rgb(hsl)
        },
    )
    .parse(input)
}

fn parse_unsigned(input: &str) -> IResult<&str, u32> {
    map_res(delimited(multispace0, digit1, multispace0), str::parse::<u32>).parse(input)
}

/// An unsigned integer, clamped to `255`.
fn parse_channel(input: &str) -> IResult<&str, u8> {
    map(parse_unsigned, |it| u8::try_from(it).unwrap_or(u8::MAX)).parse(input)
}

fn parse_percent(input: &str) -> IResult<&str, u32> {
    terminated(parse_unsigned, (char('%'), multispace0)).parse(input)
}

/// A decimal number such as `1`, `0.5`, or `.5`, clamped into `0.0..=1.0` later by
/// [`RgbColor::with_alpha`].
fn parse_alpha(input: &str) -> IResult<&str, f64> {
    map_res(
        delimited(
            multispace0,
            take_while1(|c: char| c.is_ascii_digit() || c == '.'),
            multispace0,
        ),
        str::parse::<f64>,
    )
    .parse(input)
}

fn parse_comma(input: &str) -> IResult<&str, char> { char(',').parse(input) }
