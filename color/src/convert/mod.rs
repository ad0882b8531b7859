// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pairwise converters between [`RgbColor`] (the hub) and every other model. Anything
//! else, eg: HSB to CMYK, composes through RGB (see [`TransformColor`]).
//!
//! Conversions that go through real valued models round on the way back to bytes, so
//! round trips are only exact within a tolerance:
//!
//! | Round trip         | Max channel error | Why                                          |
//! | ------------------ | ----------------- | -------------------------------------------- |
//! | RGB → CMYK → RGB   | 0                 | No intermediate rounding                     |
//! | RGB → HSL → RGB    | 1, 2 at worst     | Hue is rounded to a whole degree             |
//! | RGB → HSB → RGB    | 1, 2 at worst     | Hue is rounded to a whole degree             |
//! | RGB → LAB → RGB    | 28                | `L`, `a`, `b` are rounded to integers, and   |
//! |                    |                   | the sRGB gamma curve magnifies that near a   |
//! |                    |                   | `0` channel (saturated greens and cyans)     |
//!
//! About half of all colors survive the LAB round trip within 1. Pure green comes back as
//! `(10, 255, 5)`.
//!
//! [`RgbColor`]: crate::RgbColor
//! [`TransformColor`]: crate::TransformColor

// Attach.
mod rgb_cmyk;
mod rgb_hsb;
mod rgb_hsl;
mod rgb_lab;

// Re-export.
pub use rgb_cmyk::*;
pub use rgb_hsb::*;
pub use rgb_hsl::*;
pub use rgb_lab::*;
