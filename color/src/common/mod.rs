// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_math;
pub mod common_result_and_error;
pub mod sizes;

// Re-export.
pub use common_math::*;
pub use common_result_and_error::*;
pub use sizes::*;
