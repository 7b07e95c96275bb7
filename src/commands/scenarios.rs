//! `recoup scenarios`: run the built-in suite and print a ranked benchmark.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::RecoupConfig;
use crate::features::normalize;
use crate::formatting::{format_priority_score, format_probability, priority_label};
use crate::io::output::{create_writer, write_json};
use crate::model::ParameterSet;
use crate::scenarios::builtin_scenarios;
use crate::scoring::{predict, reason_codes, Prediction};

pub struct ScenariosConfig {
    pub model: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ScenarioResult {
    id: &'static str,
    name: &'static str,
    expected: &'static str,
    prediction: Prediction,
    priority_label: String,
    reason_codes: Vec<String>,
    has_ptp: bool,
    has_dispute: bool,
}

pub fn run_scenarios(config: ScenariosConfig, app: &RecoupConfig) -> Result<()> {
    let params = ParameterSet::from_file(&config.model)?;

    let mut results = Vec::new();
    for scenario in builtin_scenarios() {
        let features = normalize(&scenario.case, &app.normalization);
        let prediction = predict(&params, &features, &app.priority)?;
        let reasons = reason_codes(&params, &features)?;
        results.push((scenario, prediction, reasons));
    }

    let mut writer = create_writer(config.output.as_deref())?;
    match config.format {
        OutputFormat::Json => {
            let report: Vec<ScenarioResult> = results
                .iter()
                .map(|(scenario, prediction, reasons)| ScenarioResult {
                    id: scenario.id,
                    name: scenario.name,
                    expected: scenario.expected,
                    prediction: *prediction,
                    priority_label: priority_label(prediction.priority_score, &app.labels)
                        .as_str()
                        .to_string(),
                    reason_codes: reasons.clone(),
                    has_ptp: scenario.case.ptp_active,
                    has_dispute: scenario.case.has_dispute,
                })
                .collect();
            write_json(&mut writer, &report)?;
            return Ok(());
        }
        OutputFormat::Terminal => {}
    }

    writeln!(
        writer,
        "Loaded parameter set v{} ({} scenarios)\n",
        params.version,
        results.len()
    )?;

    for (scenario, prediction, reasons) in &results {
        writeln!(writer, "{}", scenario.name.bold())?;
        writeln!(writer, "  {}", scenario.description)?;
        writeln!(writer, "  Expected outcome: {}", scenario.expected)?;
        writeln!(
            writer,
            "  Probability {}  Priority {} ({})  Logit {:.3}",
            format_probability(prediction.probability),
            format_priority_score(prediction.priority_score),
            priority_label(prediction.priority_score, &app.labels).colored(),
            prediction.logit
        )?;
        for (i, reason) in reasons.iter().enumerate() {
            writeln!(writer, "    {}. {reason}", i + 1)?;
        }
        writeln!(writer)?;
    }

    // ranking table
    let mut ranked: Vec<&(crate::scenarios::Scenario, Prediction, Vec<String>)> =
        results.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.probability
            .partial_cmp(&a.1.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    writeln!(writer, "{}", "Ranking by recovery probability".bold())?;
    writeln!(
        writer,
        "{:<6}{:<38}{:>12}{:>16}",
        "Rank", "Scenario", "Probability", "Priority"
    )?;
    writeln!(writer, "{}", "-".repeat(72))?;
    for (rank, (scenario, prediction, _)) in ranked.iter().enumerate() {
        writeln!(
            writer,
            "{:<6}{:<38}{:>12}{:>16}",
            rank + 1,
            scenario.name,
            format_probability(prediction.probability),
            format_priority_score(prediction.priority_score)
        )?;
    }

    write_group_analysis(&mut writer, &results)?;
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn write_group_analysis<W: Write>(
    writer: &mut W,
    results: &[(crate::scenarios::Scenario, Prediction, Vec<String>)],
) -> Result<()> {
    let with_ptp: Vec<f64> = results
        .iter()
        .filter(|(s, _, _)| s.case.ptp_active)
        .map(|(_, p, _)| p.probability)
        .collect();
    let without_ptp: Vec<f64> = results
        .iter()
        .filter(|(s, _, _)| !s.case.ptp_active)
        .map(|(_, p, _)| p.probability)
        .collect();
    let with_dispute: Vec<f64> = results
        .iter()
        .filter(|(s, _, _)| s.case.has_dispute)
        .map(|(_, p, _)| p.probability)
        .collect();
    let without_dispute: Vec<f64> = results
        .iter()
        .filter(|(s, _, _)| !s.case.has_dispute)
        .map(|(_, p, _)| p.probability)
        .collect();

    writeln!(writer, "\n{}", "Group analysis".bold())?;
    if !with_ptp.is_empty() && !without_ptp.is_empty() {
        writeln!(
            writer,
            "  PTP:     avg {} with, {} without",
            format_probability(mean(&with_ptp)),
            format_probability(mean(&without_ptp))
        )?;
    }
    if !with_dispute.is_empty() && !without_dispute.is_empty() {
        writeln!(
            writer,
            "  Dispute: avg {} with, {} without",
            format_probability(mean(&with_dispute)),
            format_probability(mean(&without_dispute))
        )?;
    }
    Ok(())
}
