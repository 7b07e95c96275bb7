//! `recoup train`: generate cases, fit, evaluate, write the parameter file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;

use crate::config::RecoupConfig;
use crate::model::{default_reason_mappings, ParameterSet};
use crate::training::metrics::{brier_score, confusion_matrix, log_loss, roc_auc};
use crate::training::{design_matrix, fit, generate, stratified_split, FitConfig, SynthConfig};

pub const PARAMETER_FILE_VERSION: &str = "1.0";

pub struct TrainConfig {
    pub output: PathBuf,
    pub samples: usize,
    pub seed: u64,
    pub epochs: usize,
    pub learning_rate: f64,
    pub test_fraction: f64,
    pub verbosity: u8,
}

pub fn train_model(config: TrainConfig, app: &RecoupConfig) -> Result<()> {
    println!("Generating {} synthetic debt-collection cases...", config.samples);
    let cases = generate(
        &SynthConfig {
            samples: config.samples,
            seed: config.seed,
        },
        &app.normalization,
    )?;
    let recovered = cases.iter().filter(|c| c.recovered).count();
    println!(
        "  {} cases generated, {:.1}% recovered",
        cases.len(),
        100.0 * recovered as f64 / cases.len().max(1) as f64
    );

    let (train_cases, test_cases) = stratified_split(&cases, config.test_fraction, config.seed);
    println!(
        "  split: {} train / {} test\n",
        train_cases.len(),
        test_cases.len()
    );

    println!(
        "Fitting logistic regression ({} epochs, learning rate {})...",
        config.epochs, config.learning_rate
    );
    let (train_xs, train_ys) = design_matrix(&train_cases);
    let fitted = fit(
        &train_xs,
        &train_ys,
        &FitConfig {
            learning_rate: config.learning_rate,
            epochs: config.epochs,
            l2: 0.0,
        },
    )
    .context("fit rejected its input (empty training set or bad hyperparameters)")?;
    log::info!("fit complete, bias {:.3}", fitted.bias);

    let (test_xs, test_ys) = design_matrix(&test_cases);
    let train_probs: Vec<f64> = train_xs.iter().map(|x| fitted.predict_proba(x)).collect();
    let test_probs: Vec<f64> = test_xs.iter().map(|x| fitted.predict_proba(x)).collect();

    let test_cm = confusion_matrix(&test_probs, &test_ys, 0.5);
    let test_accuracy = test_cm.accuracy();
    let test_auc = roc_auc(&test_probs, &test_ys);

    println!("\n{}", "Model performance".bold());
    println!(
        "  accuracy    train {:.1}%  test {:.1}%",
        100.0 * confusion_matrix(&train_probs, &train_ys, 0.5).accuracy(),
        100.0 * test_accuracy
    );
    println!(
        "  ROC-AUC     train {:.3}  test {:.3}",
        roc_auc(&train_probs, &train_ys),
        test_auc
    );
    println!(
        "  Brier       train {:.4}  test {:.4}",
        brier_score(&train_probs, &train_ys),
        brier_score(&test_probs, &test_ys)
    );
    println!(
        "  log-loss    train {:.4}  test {:.4}",
        log_loss(&train_probs, &train_ys),
        log_loss(&test_probs, &test_ys)
    );

    if config.verbosity > 0 {
        println!("\n  Confusion matrix (test set):");
        println!(
            "    TN {:>5}  FP {:>5}",
            test_cm.true_negatives, test_cm.false_positives
        );
        println!(
            "    FN {:>5}  TP {:>5}",
            test_cm.false_negatives, test_cm.true_positives
        );
    }

    println!("\n{}", "Feature influence".bold());
    let mut influence: Vec<(String, f64)> = fitted.named_weights().into_iter().collect();
    influence.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (feature, weight) in &influence {
        let direction = if *weight > 0.0 {
            "increases recovery".green()
        } else {
            "decreases recovery".red()
        };
        println!("  {feature:<12} {weight:+.3}  {direction}");
    }
    println!("  {:<12} {:+.3}", "bias", fitted.bias);

    let params = ParameterSet {
        version: PARAMETER_FILE_VERSION.to_string(),
        trained_on: Some(Utc::now().format("%Y-%m-%d").to_string()),
        n_samples: Some(cases.len()),
        test_accuracy: Some(test_accuracy),
        test_auc: Some(test_auc),
        bias: fitted.bias,
        weights: fitted.named_weights(),
        reason_mappings: default_reason_mappings(),
    };
    params.write_file(&config.output)?;

    println!(
        "\n{} parameter file written to {}",
        "[OK]".green(),
        config.output.display()
    );
    Ok(())
}
