// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_color::CommonResult;
use r3bl_color_cmdr::{CLIArg, render_report, run_command, try_initialize_logging_global};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(cli_arg.global_options.log_level.into())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let report = run_command(&cli_arg.command)?;
    println!("{}", render_report(&report, cli_arg.global_options.json)?);

    tracing::debug!(message = "Stop logging...");
    Ok(())
}
