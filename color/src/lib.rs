// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color
//!
//! A pure, stateless color science engine. Every operation in this crate is a
//! synchronous function over plain `Copy` value types, so everything here can be called
//! from any thread without synchronization.
//!
//! ## What is in the box
//!
//! | Module            | What it does                                                        |
//! | ----------------- | ------------------------------------------------------------------- |
//! | [`model`]         | [`RgbColor`], [`HslColor`], [`HsbColor`], [`CmykColor`], [`LabColor`] |
//! | [`convert`]       | RGB is the hub. RGB ↔ HSL, HSB, CMYK, and CIE LAB (D65)             |
//! | [`parse`]         | Hex codec, `rgb()` / `hsl()` functional syntax, named colors        |
//! | [`format`]        | CSS and display serializers for every model                         |
//! | [`accessibility`] | WCAG luminance and contrast, color vision deficiency simulation     |
//! | [`harmony`]       | Hue rotation harmonies and monochromatic, shade, and tint scales    |
//! | [`gradient`]      | Linear and radial gradients, CSS serialization, and sampling        |
//!
//! ## Leniency
//!
//! The engine prefers degrading over failing. [`hex_to_rgb`] never fails (malformed
//! digit groups become `0`), and [`parse_color`] and [`parse_gradient_css`] return
//! [`None`] for input they don't understand. When you need strict validation use the
//! fallible entry points which return a [`CommonResult`]:
//! - [`try_from_hex_color`]
//! - [`RgbColor`]'s [`std::str::FromStr`] impl
//! - [`GradientValue`]'s [`std::str::FromStr`] impl
//!
//! ## Example
//!
//! ```
//! use r3bl_color::{get_complementary, get_contrast_ratio, hex_to_rgb, rgb_to_hsl};
//!
//! let red = hex_to_rgb("#ff0000");
//! let hsl = rgb_to_hsl(red);
//! assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (0.0, 100.0, 50.0));
//!
//! let pair = get_complementary("#ff0000");
//! assert_eq!(pair.as_slice(), &["#ff0000", "#00ffff"]);
//!
//! let ratio = get_contrast_ratio(hex_to_rgb("#000"), hex_to_rgb("#fff"));
//! assert!((ratio - 21.0).abs() < f64::EPSILON);
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(rust_2018_idioms)]
// Enforce strict error handling in production code only. See the workspace Cargo.toml.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod accessibility;
pub mod common;
pub mod constants;
pub mod convert;
pub mod decl_macros;
pub mod format;
pub mod gradient;
pub mod harmony;
pub mod model;
pub mod parse;

// Re-export.
pub use accessibility::*;
pub use common::*;
pub use constants::*;
pub use convert::*;
pub use format::*;
pub use gradient::*;
pub use harmony::*;
pub use model::*;
pub use parse::*;
