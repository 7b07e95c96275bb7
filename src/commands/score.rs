//! `recoup score`: one case in, probability + priority + reasons out.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::RecoupConfig;
use crate::features::{normalize, CaseAttributes, FeatureVector};
use crate::formatting::{format_priority_score, format_probability, priority_label};
use crate::io::output::{create_writer, write_json};
use crate::model::ParameterSet;
use crate::scoring::{predict, reason_codes, Prediction};

pub struct ScoreConfig {
    pub model: PathBuf,
    pub case: CaseAttributes,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ScoreReport {
    features: FeatureVector,
    prediction: Prediction,
    priority_label: String,
    reason_codes: Vec<String>,
}

pub fn score_case(config: ScoreConfig, app: &RecoupConfig) -> Result<()> {
    let params = ParameterSet::from_file(&config.model)?;
    let features = normalize(&config.case, &app.normalization);
    let prediction = predict(&params, &features, &app.priority)?;
    let reasons = reason_codes(&params, &features)?;
    let label = priority_label(prediction.priority_score, &app.labels);

    let mut writer = create_writer(config.output.as_deref())?;
    match config.format {
        OutputFormat::Json => {
            let report = ScoreReport {
                features,
                prediction,
                priority_label: label.as_str().to_string(),
                reason_codes: reasons,
            };
            write_json(&mut writer, &report)?;
        }
        OutputFormat::Terminal => {
            writeln!(writer, "{}", "Case characteristics".bold())?;
            writeln!(writer, "  Amount:            {:.0}", config.case.amount)?;
            writeln!(writer, "  Ageing:            {:.0} days", config.case.ageing_days)?;
            writeln!(writer, "  Contact attempts:  {}", config.case.attempts_count)?;
            writeln!(
                writer,
                "  Last update:       {:.0} days ago",
                config.case.days_since_update
            )?;
            writeln!(
                writer,
                "  Dispute:           {}",
                if config.case.has_dispute { "YES" } else { "NO" }
            )?;
            writeln!(
                writer,
                "  PTP active:        {}",
                if config.case.ptp_active { "YES" } else { "NO" }
            )?;

            writeln!(writer, "\n{}", "Prediction".bold())?;
            writeln!(
                writer,
                "  Recovery probability: {}",
                format_probability(prediction.probability)
            )?;
            writeln!(
                writer,
                "  Priority score:       {} ({})",
                format_priority_score(prediction.priority_score),
                label.colored()
            )?;
            writeln!(writer, "  Logit:                {:.3}", prediction.logit)?;

            writeln!(writer, "\n{}", "Top reasons".bold())?;
            for (i, reason) in reasons.iter().enumerate() {
                writeln!(writer, "  {}. {reason}", i + 1)?;
            }
        }
    }
    Ok(())
}
