// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain color value records. Each one is [`Copy`], owns no resources, and converts to
//! and from [`RgbColor`], which is the hub representation (see [`TransformColor`]).

// Attach.
mod cmyk_color;
mod hsb_color;
mod hsl_color;
mod lab_color;
mod rgb_color;
mod transform_color;

// Re-export.
pub use cmyk_color::*;
pub use hsb_color::*;
pub use hsl_color::*;
pub use lab_color::*;
pub use rgb_color::*;
pub use transform_color::*;
