use anyhow::Result;
use clap::Parser;
use recoup::cli::{Cli, Commands};
use recoup::config::RecoupConfig;
use recoup::features::CaseAttributes;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            output,
            samples,
            seed,
            epochs,
            learning_rate,
            config,
            verbose,
        } => {
            let app = RecoupConfig::load(config.as_deref())?;
            let train_config = recoup::commands::train::TrainConfig {
                output,
                samples: samples.unwrap_or(app.training.samples),
                seed: seed.unwrap_or(app.training.seed),
                epochs: epochs.unwrap_or(app.training.epochs),
                learning_rate: learning_rate.unwrap_or(app.training.learning_rate),
                test_fraction: app.training.test_fraction,
                verbosity: verbose,
            };
            recoup::commands::train::train_model(train_config, &app)
        }
        Commands::Score {
            model,
            amount,
            ageing_days,
            attempts,
            days_since_update,
            dispute,
            ptp_active,
            format,
            output,
            config,
        } => {
            let app = RecoupConfig::load(config.as_deref())?;
            let score_config = recoup::commands::score::ScoreConfig {
                model,
                case: CaseAttributes {
                    amount,
                    ageing_days,
                    attempts_count: attempts,
                    days_since_update,
                    has_dispute: dispute,
                    ptp_active,
                },
                format,
                output,
            };
            recoup::commands::score::score_case(score_config, &app)
        }
        Commands::Scenarios {
            model,
            format,
            output,
            config,
        } => {
            let app = RecoupConfig::load(config.as_deref())?;
            let scenarios_config = recoup::commands::scenarios::ScenariosConfig {
                model,
                format,
                output,
            };
            recoup::commands::scenarios::run_scenarios(scenarios_config, &app)
        }
        Commands::Validate {
            model,
            min_spread,
            config,
            verbose,
        } => {
            let app = RecoupConfig::load(config.as_deref())?;
            let validate_config = recoup::commands::validate::ValidateConfig {
                model,
                min_spread,
                verbosity: verbose,
            };
            recoup::commands::validate::validate_model(validate_config, &app)
        }
        Commands::Init { force } => recoup::commands::init::init_config(force),
    }
}
