// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turning text into colors (and hex colors back into text).
//!
//! - [`hex_to_rgb`] and [`rgb_to_hex`]: the hex codec (lenient).
//! - [`try_from_hex_color`]: the strict, [`nom`] based hex parser.
//! - [`parse_color`]: hex, `rgb()`, `rgba()`, `hsl()`, `hsla()`, and [`NamedColor`]s.

// Attach.
pub mod css_color_parser;
pub mod hex_color_parser;
pub mod named_colors;

// Re-export.
pub use css_color_parser::*;
pub use hex_color_parser::*;
pub use named_colors::*;
