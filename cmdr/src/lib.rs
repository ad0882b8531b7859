// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rcolor
//!
//! A command line front end for [`r3bl_color`]. Every subcommand is a thin shell over
//! one or two engine calls; the engine does the work and this crate only parses
//! arguments and renders reports.
//!
//! ```text
//! rcolor convert "#3b82f6"
//! rcolor convert "rgb(59, 130, 246)" --format hsl
//! rcolor contrast "#767676" white
//! rcolor harmony "#ff0000" --kind triadic
//! rcolor scale "#3b82f6" --kind tints --count 7
//! rcolor simulate orange --kind deuteranopia
//! rcolor gradient "linear-gradient(90deg, #f00, #00f)" --steps 5
//! rcolor --json --log-level debug convert orange
//! ```
//!
//! Text output goes to stdout, JSON output (with `--json`) is pretty printed
//! [`serde_json`], and logs (with `--log-level`) go to stderr so they never mix with
//! the report.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(rust_2018_idioms)]
// Enforce strict error handling in production code only. See the workspace Cargo.toml.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod clap_config;
pub mod color_commands;
pub mod report;
pub mod tracing_init;

// Re-export.
pub use clap_config::*;
pub use color_commands::*;
pub use report::*;
pub use tracing_init::*;
