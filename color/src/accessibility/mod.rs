// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod color_blindness;
pub mod wcag;

// Re-export.
pub use color_blindness::*;
pub use wcag::*;
