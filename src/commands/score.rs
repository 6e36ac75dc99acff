//! Implementation of the `score` command

use crate::cli::OutputFormat;
use crate::{Cvss, CvssError, CvssVersion, Severity};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead};

/// One scored vector as rendered by the CLI.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub vector: String,
    pub version: CvssVersion,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl ScoreReport {
    /// Score one vector via the prefix dispatcher.
    pub fn from_vector(vector: &str) -> Result<Self, CvssError> {
        let cvss = Cvss::from_vector(vector)?;
        Ok(Self {
            vector: cvss.vector().to_string(),
            version: cvss.version(),
            valid: cvss.is_valid(),
            base_score: cvss.base_score().ok(),
            temporal_score: cvss.temporal_score().ok(),
            environmental_score: cvss.environmental_score().ok(),
            overall_score: cvss.overall_score().ok(),
            severity: cvss.severity().ok(),
        })
    }
}

/// Score the given vectors, or stdin lines when none are given.
///
/// Exits nonzero when any input could not be scored, so the command is
/// usable as a validity filter in pipelines.
pub fn run(vectors: Vec<String>, format: OutputFormat) -> Result<()> {
    let vectors = if vectors.is_empty() {
        read_stdin_vectors()?
    } else {
        vectors
    };

    let mut reports = Vec::with_capacity(vectors.len());
    let mut failures = 0;
    for vector in &vectors {
        match ScoreReport::from_vector(vector) {
            Ok(report) => {
                if !report.valid {
                    failures += 1;
                }
                reports.push(report);
            }
            Err(err) => {
                failures += 1;
                eprintln!("{vector}: {err}");
            }
        }
    }

    match format {
        OutputFormat::Terminal => write_terminal(&reports),
        OutputFormat::Json => write_json(&reports)?,
    }

    if failures > 0 {
        bail!("{failures} of {} vectors could not be scored", vectors.len());
    }
    Ok(())
}

fn read_stdin_vectors() -> Result<Vec<String>> {
    let mut vectors = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read vector from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            vectors.push(line.to_string());
        }
    }
    Ok(vectors)
}

fn write_terminal(reports: &[ScoreReport]) {
    for report in reports {
        match (report.overall_score, report.severity) {
            (Some(score), Some(severity)) => {
                println!(
                    "{:>4}  {:<10} {}",
                    format!("{score:.1}"),
                    colorize_severity(severity),
                    report.vector
                );
            }
            _ => {
                println!("{:>4}  {:<10} {}", "-", "invalid".red(), report.vector);
            }
        }
    }
}

fn write_json(reports: &[ScoreReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{json}");
    Ok(())
}

fn colorize_severity(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::None => severity.as_str().normal(),
        Severity::Low => severity.as_str().green(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::High => severity.as_str().red(),
        Severity::Critical => severity.as_str().red().bold(),
    }
}
