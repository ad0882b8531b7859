// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Most of the engine is lenient and never fails (see the crate docs). The strict entry
//! points return a [`CommonResult`], which carries a [`ColorError`] inside a
//! [`miette::Report`].

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers.
///
/// # Example
///
/// ```
/// use r3bl_color::{CommonResult, RgbColor, try_from_hex_color};
///
/// fn brand_color() -> CommonResult<RgbColor> { try_from_hex_color("#3b82f6") }
///
/// assert_eq!(brand_color().unwrap(), RgbColor::from_u8(59, 130, 246));
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Things that can go wrong in the strict (fallible) entry points of the engine.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid hex color: '{input}'")]
    #[diagnostic(
        code(r3bl_color::invalid_hex_color),
        help("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA (the # is optional)")
    )]
    InvalidHexColor { input: String },

    #[error("Unrecognized color: '{input}'")]
    #[diagnostic(
        code(r3bl_color::unrecognized_color),
        help("Use a hex color, rgb(), rgba(), hsl(), hsla(), or a named color like 'orange'")
    )]
    UnrecognizedColor { input: String },

    #[error("Invalid gradient: '{input}'")]
    #[diagnostic(
        code(r3bl_color::invalid_gradient),
        help("Use linear-gradient(<angle>deg, <stops>) or radial-gradient(circle, <stops>)")
    )]
    InvalidGradient { input: String },

    #[error("A gradient needs at least 2 stops to be sampled, found {count}")]
    #[diagnostic(code(r3bl_color::not_enough_gradient_stops))]
    NotEnoughGradientStops { count: usize },

    #[error("Could not build gradient: {reason}")]
    #[diagnostic(
        code(r3bl_color::gradient_build_failed),
        help("Stop positions must be in ascending order, and stop colors must be parseable")
    )]
    GradientBuildFailed { reason: String },
}

impl ColorError {
    /// Wrap this error in a [`CommonResult`].
    ///
    /// # Errors
    ///
    /// Always returns [`Err`], that's the point.
    pub fn into_result<T>(self) -> CommonResult<T> { Err(miette::Report::new(self)) }
}
