// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gradient ↔ CSS text.
//!
//! Serializing always produces one of:
//!
//! ```text
//! linear-gradient(<angle>deg, <color> <pos>%, <color> <pos>%, ...)
//! radial-gradient(circle, <color> <pos>%, <color> <pos>%, ...)
//! ```
//!
//! Parsing is lenient. After the wrapper (and the optional angle or shape) the argument
//! list is scanned for color tokens (hex, `rgb()`, `rgba()`, `hsl()`, `hsla()`), each
//! optionally followed by a `<number>%` position. Anything else between tokens, eg: a
//! named color, is skipped. An angle or position that reads as `nan`, `inf`, or an
//! overflowing exponent rejects the whole gradient.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag_no_case, take_till},
          character::complete::{char, hex_digit1, multispace0},
          combinator::{opt, recognize, verify},
          error::{Error, ErrorKind},
          number::complete::double,
          sequence::{preceded, terminated}};

use crate::{ColorError, DEFAULT_GRADIENT_ANGLE, GradientStop, GradientType,
            GradientValue, HASH_CHAR, PERCENT_MAX, is_valid_hex};

/// See the module docs for the format. Stops are sorted by position first.
#[must_use]
pub fn gradient_to_css(gradient: &GradientValue) -> String {
    let prefix = match gradient.gradient_type {
        GradientType::Linear => {
            format!("{}deg", gradient.angle.unwrap_or(DEFAULT_GRADIENT_ANGLE))
        }
        GradientType::Radial => "circle".to_string(),
    };

    let args = std::iter::once(prefix)
        .chain(
            gradient
                .sorted_stops()
                .into_iter()
                .map(|stop| format!("{} {}%", stop.color, stop.position)),
        )
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}-gradient({args})", gradient.gradient_type)
}

impl GradientValue {
    #[must_use]
    pub fn to_css(&self) -> String { gradient_to_css(self) }
}

impl Display for GradientValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", gradient_to_css(self))
    }
}

impl FromStr for GradientValue {
    type Err = miette::Report;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match parse_gradient_css(input) {
            Some(gradient) => Ok(gradient),
            None => ColorError::InvalidGradient {
                input: input.to_string(),
            }
            .into_result(),
        }
    }
}

/// Returns [`None`] when `input` is not wrapped in `linear-gradient(...)` or
/// `radial-gradient(...)`, or when no color stop can be found inside.
///
/// Stops written without a position are spread evenly: among `n` such stops, the `k`th
/// gets `0` when `k == 0`, `100` when `k == n - 1`, and `k / (n - 1) * 100` otherwise.
#[must_use]
pub fn parse_gradient_css(input: &str) -> Option<GradientValue> {
    let maybe_gradient = parse_gradient_parts(input.trim());
    if maybe_gradient.is_none() {
        tracing::debug!(input, "not a css gradient");
    }
    maybe_gradient
}

fn parse_gradient_parts(input: &str) -> Option<GradientValue> {
    let (remainder, gradient_type) = parse_wrapper_open(input).ok()?;
    let args = remainder.trim_end().strip_suffix(')')?;

    let (stops_text, angle) = match gradient_type {
        GradientType::Linear => opt(terminated(parse_angle, parse_comma))
            .parse(args)
            .ok()?,
        GradientType::Radial => {
            let (rest, _) = opt(terminated(parse_shape, parse_comma)).parse(args).ok()?;
            (rest, None)
        }
    };

    let raw_stops = tokenize_stops(stops_text)?;
    if raw_stops.is_empty() {
        return None;
    }

    Some(GradientValue {
        gradient_type,
        angle,
        stops: assign_positions(raw_stops),
    })
}

/// A color token and the position written after it, if any.
type RawStop<'a> = (&'a str, Option<f64>);

/// Scan `input` left to right, collecting every `<color> [<number>%]` match and skipping
/// one char at a time over anything that doesn't match. Returns [`None`] if a stop has a
/// position that isn't a finite number.
fn tokenize_stops(input: &str) -> Option<Vec<RawStop<'_>>> {
    let mut acc = vec![];
    let mut rest = input;
    while !rest.is_empty() {
        match parse_stop(rest) {
            Ok((remainder, stop)) => {
                acc.push(stop);
                rest = remainder;
            }
            Err(nom::Err::Failure(_)) => return None,
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    Some(acc)
}

fn assign_positions(raw_stops: Vec<RawStop<'_>>) -> Vec<GradientStop> {
    let unpositioned_count = raw_stops.iter().filter(|(_, it)| it.is_none()).count();
    let mut ordinal = 0_usize;

    raw_stops
        .into_iter()
        .map(|(color, maybe_position)| {
            let position = maybe_position.unwrap_or_else(|| {
                let it = spread_position(ordinal, unpositioned_count);
                ordinal += 1;
                it
            });
            GradientStop::new(color, position)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn spread_position(ordinal: usize, count: usize) -> f64 {
    if ordinal == 0 {
        0.0
    } else if ordinal + 1 == count {
        PERCENT_MAX
    } else {
        ordinal as f64 / (count - 1) as f64 * PERCENT_MAX
    }
}

fn parse_wrapper_open(input: &str) -> IResult<&str, GradientType> {
    terminated(
        alt((
            tag_no_case("linear-gradient").map(|_| GradientType::Linear),
            tag_no_case("radial-gradient").map(|_| GradientType::Radial),
        )),
        (multispace0, char('(')),
    )
    .parse(input)
}

/// `90deg`
fn parse_angle(input: &str) -> IResult<&str, f64> {
    let it = preceded(multispace0, terminated(double, tag_no_case("deg"))).parse(input)?;
    require_finite(input, it)
}

fn parse_shape(input: &str) -> IResult<&str, &str> {
    preceded(
        multispace0,
        alt((tag_no_case("circle"), tag_no_case("ellipse"))),
    )
    .parse(input)
}

fn parse_comma(input: &str) -> IResult<&str, char> {
    preceded(multispace0, char(',')).parse(input)
}

fn parse_stop(input: &str) -> IResult<&str, RawStop<'_>> {
    (parse_color_token, opt(parse_position)).parse(input)
}

/// `50%`, preceded by optional whitespace.
fn parse_position(input: &str) -> IResult<&str, f64> {
    let it = preceded(multispace0, terminated(double, char('%'))).parse(input)?;
    require_finite(input, it)
}

/// [`double`] also reads `nan`, `inf`, and exponents that overflow. Those are a hard
/// [`nom::Err::Failure`] rather than an [`nom::Err::Error`], so neither [`opt`] nor the
/// stop scanner can skip past them.
fn require_finite<'a>(
    input: &'a str,
    (rest, value): (&'a str, f64),
) -> IResult<&'a str, f64> {
    if value.is_finite() {
        Ok((rest, value))
    } else {
        Err(nom::Err::Failure(Error::new(input, ErrorKind::Verify)))
    }
}

fn parse_color_token(input: &str) -> IResult<&str, &str> {
    alt((parse_hex_token, parse_function_token)).parse(input)
}

/// `#` followed by 3, 4, 6, or 8 hex digits.
fn parse_hex_token(input: &str) -> IResult<&str, &str> {
    verify(recognize((char(HASH_CHAR), hex_digit1)), is_valid_hex).parse(input)
}

/// `rgb(...)`, `rgba(...)`, `hsl(...)`, or `hsla(...)`. The arguments are not checked
/// here, they are validated when the stop color is used.
fn parse_function_token(input: &str) -> IResult<&str, &str> {
    recognize((
        alt((tag_no_case("rgb"), tag_no_case("hsl"))),
        opt(tag_no_case("a")),
        multispace0,
        char('('),
        take_till(|c| c == ')'),
        char(')'),
    ))
    .parse(input)
}
