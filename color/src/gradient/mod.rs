// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSS gradients: a [`GradientValue`] model, a serializer ([`gradient_to_css`]), a
//! lenient parser ([`parse_gradient_css`]), and sampling into hex colors
//! ([`GradientValue::sample`]).

// Attach.
pub mod gradient_css;
pub mod gradient_sample;
pub mod gradient_types;

// Re-export.
pub use gradient_css::*;
pub use gradient_sample::*;
pub use gradient_types::*;
