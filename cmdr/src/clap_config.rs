// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_color::{ColorFormat, CvdKind, HarmonyType};
use serde::Serialize;
use tracing_core::LevelFilter;

/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
#[derive(Debug, Parser)]
#[command(bin_name = "rcolor")]
#[command(about = "🎨 Convert, check, and explore colors")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  rcolor [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'j',
        help = "Print the report as JSON instead of plain text"
    )]
    pub json: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Off,
        help = "Log engine events to stderr at this level and above"
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🔁 Show a color in every format\n💡 Eg: `rcolor convert orange`")]
    Convert {
        /// Hex, rgb(), rgba(), hsl(), hsla(), or a named color.
        color: String,

        #[arg(
            long,
            short = 'f',
            help = "Only show this format: hex, rgb, hsl, hsb, cmyk, or lab"
        )]
        format: Option<ColorFormat>,
    },

    #[clap(
        about = "🔍 WCAG contrast between a foreground and a background\n💡 Eg: `rcolor contrast '#767676' white`"
    )]
    Contrast { foreground: String, background: String },

    #[clap(
        about = "🎡 Color harmonies of a base hex color\n💡 Eg: `rcolor harmony '#ff0000' --kind triadic`"
    )]
    Harmony {
        hex: String,

        #[arg(
            long,
            short = 'k',
            help = "Only show this harmony: complementary, analogous, triadic, split-complementary, tetradic, or square"
        )]
        kind: Option<HarmonyType>,
    },

    #[clap(
        about = "🌗 Monochromatic, shade, or tint scale of a base hex color\n💡 Eg: `rcolor scale '#3b82f6' --kind shades`"
    )]
    Scale {
        hex: String,

        #[arg(long, short = 'k', value_enum)]
        kind: ScaleKind,

        #[arg(long, short = 'c', default_value_t = r3bl_color::DEFAULT_SCALE_COUNT)]
        count: usize,
    },

    #[clap(
        about = "👓 Simulate color vision deficiencies\n💡 Eg: `rcolor simulate orange --kind protanopia`"
    )]
    Simulate {
        color: String,

        #[arg(
            long,
            short = 'k',
            help = "Only simulate this kind: protanopia, deuteranopia, tritanopia, or achromatopsia"
        )]
        kind: Option<CvdKind>,
    },

    #[clap(
        about = "🌈 Normalize a CSS gradient, and optionally sample it\n💡 Eg: `rcolor gradient 'linear-gradient(90deg, #f00, #00f)' --steps 5`"
    )]
    Gradient {
        css: String,

        #[arg(long, short = 's', help = "Sample this many evenly spaced colors")]
        steps: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Monochromatic,
    Shades,
    Tints,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_global_options_defaults() {
        let it = CLIArg::try_parse_from(["rcolor", "convert", "orange"]).unwrap();
        assert!(!it.global_options.json);
        assert_eq!(it.global_options.log_level, LogLevel::Off);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let it = CLIArg::try_parse_from([
            "rcolor",
            "harmony",
            "#ff0000",
            "--kind",
            "split-complementary",
            "--json",
            "--log-level",
            "trace",
        ])
        .unwrap();
        assert!(it.global_options.json);
        assert_eq!(it.global_options.log_level, LogLevel::Trace);
        let CLICommand::Harmony { hex, kind } = it.command else {
            panic!("expected harmony");
        };
        assert_eq!(hex, "#ff0000");
        assert_eq!(kind, Some(HarmonyType::SplitComplementary));
    }

    #[test]
    fn test_library_enums_parse_as_args() {
        let it = CLIArg::try_parse_from(["rcolor", "convert", "red", "-f", "cmyk"]).unwrap();
        let CLICommand::Convert { format, .. } = it.command else {
            panic!("expected convert");
        };
        assert_eq!(format, Some(ColorFormat::Cmyk));

        let it = CLIArg::try_parse_from(["rcolor", "simulate", "red", "-k", "nope"]);
        assert!(it.is_err());
    }

    #[test]
    fn test_scale_defaults() {
        let it = CLIArg::try_parse_from(["rcolor", "scale", "#abc", "--kind", "tints"]).unwrap();
        let CLICommand::Scale { kind, count, .. } = it.command else {
            panic!("expected scale");
        };
        assert_eq!(kind, ScaleKind::Tints);
        assert_eq!(count, 5);
    }

    #[test]
    fn test_log_level_to_level_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
    }
}
