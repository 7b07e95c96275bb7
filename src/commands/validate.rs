//! `recoup validate`: business sanity checks with a pass/fail summary.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::config::RecoupConfig;
use crate::model::ParameterSet;
use crate::sanity::{run_sanity_checks, SanityReport, ValidationParams};

pub struct ValidateConfig {
    pub model: PathBuf,
    pub min_spread: Option<f64>,
    pub verbosity: u8,
}

pub fn validate_model(config: ValidateConfig, app: &RecoupConfig) -> Result<()> {
    let params = ParameterSet::from_file(&config.model)?;

    let validation = ValidationParams {
        min_spread: config.min_spread.unwrap_or(app.validation.min_spread),
    };
    let report = run_sanity_checks(&params, &validation)?;

    print_report(&report, config.verbosity);

    if !report.passed() {
        anyhow::bail!(
            "validation failed: {}/{} checks passed",
            report.passed_count(),
            report.total()
        );
    }
    Ok(())
}

fn print_report(report: &SanityReport, verbosity: u8) {
    for check in &report.checks {
        if check.passed {
            println!("  {} {}: {}", "[PASS]".green(), check.name, check.detail);
        } else {
            println!("  {} {}: {}", "[FAIL]".red().bold(), check.name, check.detail);
        }
    }

    println!();
    if report.passed() {
        println!(
            "{} Validation PASSED - model satisfies all {} business constraints",
            "[OK]".green(),
            report.total()
        );
    } else {
        println!(
            "{} Validation FAILED - {}/{} checks passed",
            "[ERROR]".red().bold(),
            report.passed_count(),
            report.total()
        );
        if verbosity > 0 {
            println!("  A failing direction check usually means the fit found a");
            println!("  degenerate solution; refit with more samples or epochs.");
        }
    }
}
