// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One function per [`CLICommand`]. Every input is validated strictly (unlike the lenient
//! engine defaults) so that typos surface as diagnostics instead of silently turning
//! into black.

use r3bl_color::{ColorFormat, CommonResult, CvdKind, GradientValue, HarmonyType, RgbColor,
                 format_color, generate_harmony, get_contrasting_text_color,
                 get_monochromatic, get_shades, get_tints, get_wcag_compliance,
                 simulate_color_blindness, try_from_hex_color};
use strum::IntoEnumIterator;

use crate::{CLICommand, ContrastReport, ConvertReport, FormattedColor, GradientReport,
            HarmonyEntry, HarmonyReport, Report, ScaleKind, ScaleReport, SimulateReport,
            Simulation};

/// Dispatch a parsed [`CLICommand`].
///
/// # Errors
///
/// Returns the engine's diagnostic when an input color or gradient can't be parsed, or
/// when a gradient can't be sampled.
pub fn run_command(command: &CLICommand) -> CommonResult<Report> {
    tracing::debug!(?command, "running");
    match command {
        CLICommand::Convert { color, format } => {
            convert(color, *format).map(Report::Convert)
        }
        CLICommand::Contrast {
            foreground,
            background,
        } => contrast(foreground, background).map(Report::Contrast),
        CLICommand::Harmony { hex, kind } => harmony(hex, *kind).map(Report::Harmony),
        CLICommand::Scale { hex, kind, count } => {
            scale(hex, *kind, *count).map(Report::Scale)
        }
        CLICommand::Simulate { color, kind } => simulate(color, *kind).map(Report::Simulate),
        CLICommand::Gradient { css, steps } => gradient(css, *steps).map(Report::Gradient),
    }
}

/// # Errors
///
/// Returns an error if `color` is not a recognized color string.
pub fn convert(color: &str, maybe_format: Option<ColorFormat>) -> CommonResult<ConvertReport> {
    let rgb = color.parse::<RgbColor>()?;
    let formats = match maybe_format {
        Some(format) => vec![format],
        None => ColorFormat::iter().collect(),
    };
    Ok(ConvertReport {
        input: color.to_string(),
        formats: formats
            .into_iter()
            .map(|format| FormattedColor {
                format,
                value: format_color(rgb, format),
            })
            .collect(),
    })
}

/// # Errors
///
/// Returns an error if either color is not a recognized color string.
pub fn contrast(foreground: &str, background: &str) -> CommonResult<ContrastReport> {
    let foreground_rgb = foreground.parse::<RgbColor>()?;
    let background_rgb = background.parse::<RgbColor>()?;
    Ok(ContrastReport {
        foreground: foreground.to_string(),
        background: background.to_string(),
        compliance: get_wcag_compliance(foreground_rgb, background_rgb),
        suggested_text_color: get_contrasting_text_color(background_rgb).to_hex(false),
    })
}

/// # Errors
///
/// Returns an error if `hex` is not a well formed hex color.
pub fn harmony(hex: &str, maybe_kind: Option<HarmonyType>) -> CommonResult<HarmonyReport> {
    try_from_hex_color(hex)?;
    let kinds = match maybe_kind {
        Some(kind) => vec![kind],
        None => HarmonyType::iter().collect(),
    };
    Ok(HarmonyReport {
        base: hex.to_string(),
        harmonies: kinds
            .into_iter()
            .map(|harmony_type| HarmonyEntry {
                harmony_type,
                name: harmony_type.info().name,
                colors: generate_harmony(hex, harmony_type).into_vec(),
            })
            .collect(),
    })
}

/// # Errors
///
/// Returns an error if `hex` is not a well formed hex color.
pub fn scale(hex: &str, kind: ScaleKind, count: usize) -> CommonResult<ScaleReport> {
    try_from_hex_color(hex)?;
    let colors = match kind {
        ScaleKind::Monochromatic => get_monochromatic(hex, count),
        ScaleKind::Shades => get_shades(hex, count),
        ScaleKind::Tints => get_tints(hex, count),
    };
    Ok(ScaleReport {
        base: hex.to_string(),
        kind,
        colors: colors.into_vec(),
    })
}

/// # Errors
///
/// Returns an error if `color` is not a recognized color string.
pub fn simulate(color: &str, maybe_kind: Option<CvdKind>) -> CommonResult<SimulateReport> {
    let rgb = color.parse::<RgbColor>()?;
    let kinds = match maybe_kind {
        Some(kind) => vec![kind],
        None => CvdKind::iter().collect(),
    };
    Ok(SimulateReport {
        input: color.to_string(),
        simulations: kinds
            .into_iter()
            .map(|kind| Simulation {
                kind,
                hex: simulate_color_blindness(rgb, kind).to_hex(true),
            })
            .collect(),
    })
}

/// # Errors
///
/// Returns an error if `css` is not a gradient, or if sampling was requested and the
/// gradient can't be sampled (eg: it has a single stop).
pub fn gradient(css: &str, maybe_steps: Option<usize>) -> CommonResult<GradientReport> {
    let gradient = css.parse::<GradientValue>()?;
    let samples = match maybe_steps {
        Some(steps) => Some(gradient.sample(steps)?),
        None => None,
    };
    Ok(GradientReport {
        css: gradient.to_css(),
        gradient,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use r3bl_color::ColorError;

    #[test]
    fn test_convert_all_formats() {
        let it = convert("orange", None).unwrap();
        assert_eq!(it.formats.len(), 6);
        assert_eq!(it.formats[0].value, "#ffa500");
        assert_eq!(it.formats[1].value, "rgb(255, 165, 0)");
    }

    #[test]
    fn test_convert_single_format() {
        let it = convert("#ff0000", Some(ColorFormat::Hsl)).unwrap();
        assert_eq!(
            it.formats,
            vec![FormattedColor {
                format: ColorFormat::Hsl,
                value: "hsl(0, 100%, 50%)".into()
            }]
        );
    }

    #[test]
    fn test_convert_rejects_unknown_color() {
        let report = convert("not-a-color", None).unwrap_err();
        assert_eq!(
            report.downcast_ref::<ColorError>(),
            Some(&ColorError::UnrecognizedColor {
                input: "not-a-color".into()
            })
        );
    }

    #[test]
    fn test_contrast() {
        let it = contrast("black", "#fff").unwrap();
        assert_eq!(it.compliance.ratio, 21.0);
        assert!(it.compliance.aaa);
        assert_eq!(it.suggested_text_color, "#000000");
    }

    #[test]
    fn test_harmony() {
        let it = harmony("#ff0000", Some(HarmonyType::Complementary)).unwrap();
        assert_eq!(it.harmonies.len(), 1);
        assert_eq!(it.harmonies[0].colors, vec!["#ff0000", "#00ffff"]);

        let it = harmony("#ff0000", None).unwrap();
        assert_eq!(it.harmonies.len(), 6);

        // Strict: the lenient engine would turn this into black.
        assert!(harmony("#zzz", None).is_err());
    }

    #[test]
    fn test_scale() {
        let it = scale("#ff0000", ScaleKind::Shades, 2).unwrap();
        assert_eq!(it.colors, vec!["#000000", "#800000"]);
        assert!(scale("orange", ScaleKind::Tints, 3).is_err());
    }

    #[test]
    fn test_simulate() {
        let it = simulate("#ff0000", Some(CvdKind::Achromatopsia)).unwrap();
        assert_eq!(it.simulations[0].hex, "#4c4c4c");
        assert_eq!(simulate("red", None).unwrap().simulations.len(), 4);
    }

    #[test]
    fn test_gradient() {
        let it = gradient("linear-gradient(90deg, #ff0000, #0000ff)", Some(3)).unwrap();
        assert_eq!(it.css, "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)");
        assert_eq!(
            it.samples,
            Some(vec!["#ff0000".into(), "#800080".into(), "#0000ff".into()])
        );

        let it = gradient("radial-gradient(circle, #000)", None).unwrap();
        assert_eq!(it.samples, None);

        let report = gradient("radial-gradient(circle, #000)", Some(2)).unwrap_err();
        assert_eq!(
            report.downcast_ref::<ColorError>(),
            Some(&ColorError::NotEnoughGradientStops { count: 1 })
        );
    }
}
