use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal report
    Terminal,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "recoup")]
#[command(about = "Debt-recovery scoring and prioritization toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the recovery model on synthetic cases and write the parameter file
    Train {
        /// Parameter file to write
        #[arg(short, long, default_value = "model.json")]
        output: PathBuf,

        /// Number of synthetic cases to generate
        #[arg(long)]
        samples: Option<usize>,

        /// RNG seed for data generation and the train/test split
        #[arg(long)]
        seed: Option<u64>,

        /// Gradient-descent epochs
        #[arg(long)]
        epochs: Option<usize>,

        /// Gradient-descent learning rate
        #[arg(long = "learning-rate")]
        learning_rate: Option<f64>,

        /// Configuration file (defaults to recoup.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity (can be repeated: -v, -vv)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },

    /// Score a single case: probability, priority and reason codes
    Score {
        /// Parameter file to score against
        #[arg(short, long, default_value = "model.json")]
        model: PathBuf,

        /// Outstanding amount
        #[arg(long)]
        amount: f64,

        /// Days since the case originated
        #[arg(long = "ageing-days")]
        ageing_days: f64,

        /// Contact attempts in the last 30 days
        #[arg(long, default_value = "0")]
        attempts: u32,

        /// Days since the last case update
        #[arg(long = "days-since-update", default_value = "0")]
        days_since_update: f64,

        /// Case has an active dispute
        #[arg(long)]
        dispute: bool,

        /// Case has an active promise to pay
        #[arg(long = "ptp-active")]
        ptp_active: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to recoup.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the built-in scenario suite against a parameter file
    Scenarios {
        /// Parameter file to benchmark
        #[arg(short, long, default_value = "model.json")]
        model: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to recoup.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check fitted weights against business sanity rules
    Validate {
        /// Parameter file to validate
        #[arg(short, long, default_value = "model.json")]
        model: PathBuf,

        /// Minimum best-vs-worst probability spread (0-1)
        #[arg(long = "min-spread")]
        min_spread: Option<f64>,

        /// Configuration file (defaults to recoup.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity (can be repeated: -v, -vv)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },

    /// Write a default recoup.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
