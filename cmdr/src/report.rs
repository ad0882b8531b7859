// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! What each command produces. Every report is [`Serialize`] (for `--json`) and
//! [`Display`] (for plain text).

use std::fmt::{Display, Formatter, Result};

use miette::IntoDiagnostic;
use r3bl_color::{ColorFormat, CommonResult, CvdKind, GradientValue, HarmonyType,
                 WcagCompliance};
use serde::Serialize;

use crate::ScaleKind;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Convert(ConvertReport),
    Contrast(ContrastReport),
    Harmony(HarmonyReport),
    Scale(ScaleReport),
    Simulate(SimulateReport),
    Gradient(GradientReport),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConvertReport {
    pub input: String,
    pub formats: Vec<FormattedColor>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormattedColor {
    pub format: ColorFormat,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub compliance: WcagCompliance,
    /// Black or white, whichever reads better on the background.
    pub suggested_text_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HarmonyReport {
    pub base: String,
    pub harmonies: Vec<HarmonyEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HarmonyEntry {
    pub harmony_type: HarmonyType,
    pub name: &'static str,
    pub colors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScaleReport {
    pub base: String,
    pub kind: ScaleKind,
    pub colors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulateReport {
    pub input: String,
    pub simulations: Vec<Simulation>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Simulation {
    pub kind: CvdKind,
    pub hex: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientReport {
    /// Normalized: stops sorted and every position explicit.
    pub css: String,
    pub gradient: GradientValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<String>>,
}

/// Plain text, or pretty printed JSON when `json` is set.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(report: &Report, json: bool) -> CommonResult<String> {
    if json {
        serde_json::to_string_pretty(report).into_diagnostic()
    } else {
        Ok(report.to_string())
    }
}

const LABEL_WIDTH: usize = 20;

fn pass_or_fail(passed: bool) -> &'static str { if passed { "pass" } else { "fail" } }

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Report::Convert(it) => write!(f, "{it}"),
            Report::Contrast(it) => write!(f, "{it}"),
            Report::Harmony(it) => write!(f, "{it}"),
            Report::Scale(it) => write!(f, "{it}"),
            Report::Simulate(it) => write!(f, "{it}"),
            Report::Gradient(it) => write!(f, "{it}"),
        }
    }
}

impl Display for ConvertReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let lines = self
            .formats
            .iter()
            .map(|it| format!("{:<LABEL_WIDTH$}{}", it.format.to_string(), it.value))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

impl Display for ContrastReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let WcagCompliance {
            ratio,
            aa,
            aa_large,
            aaa,
            aaa_large,
        } = self.compliance;
        writeln!(f, "{:<LABEL_WIDTH$}{ratio}:1", "ratio")?;
        writeln!(f, "{:<LABEL_WIDTH$}{}", "AA", pass_or_fail(aa))?;
        writeln!(f, "{:<LABEL_WIDTH$}{}", "AA large", pass_or_fail(aa_large))?;
        writeln!(f, "{:<LABEL_WIDTH$}{}", "AAA", pass_or_fail(aaa))?;
        writeln!(f, "{:<LABEL_WIDTH$}{}", "AAA large", pass_or_fail(aaa_large))?;
        write!(f, "{:<LABEL_WIDTH$}{}", "text on background", self.suggested_text_color)
    }
}

impl Display for HarmonyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let lines = self
            .harmonies
            .iter()
            .map(|it| {
                format!(
                    "{:<LABEL_WIDTH$}{}",
                    it.harmony_type.to_string(),
                    it.colors.join(" ")
                )
            })
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

impl Display for ScaleReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.colors.join(" ")) }
}

impl Display for SimulateReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let lines = self
            .simulations
            .iter()
            .map(|it| format!("{:<LABEL_WIDTH$}{}", it.kind.to_string(), it.hex))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

impl Display for GradientReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.css)?;
        if let Some(samples) = &self.samples {
            write!(f, "\n{}", samples.join(" "))?;
        }
        Ok(())
    }
}
