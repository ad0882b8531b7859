// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Serializers. [`rgb_to_css`] and [`hsl_to_css`] produce strings that
//! [`crate::parse_color`] accepts. The HSB, CMYK, and LAB strings are for display only.

// Attach.
pub mod color_format;
pub mod css_format;

// Re-export.
pub use color_format::*;
pub use css_format::*;
