// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color theory. Harmonies rotate the hue of a base color around the color wheel, and
//! scales walk its lightness. Both take a hex string and return hex strings, and both
//! echo the caller's base hex back unchanged where it appears in the output.

// Attach.
pub mod harmony_impl;
pub mod harmony_types;
pub mod scales;

// Re-export.
pub use harmony_impl::*;
pub use harmony_types::*;
pub use scales::*;
