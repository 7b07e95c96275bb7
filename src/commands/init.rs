use anyhow::Result;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::io;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Recoup configuration

[normalization]
ageing_cap_days = 120.0
log_amount_divisor = 10.0
attempts_cap = 10.0
staleness_cap_days = 14.0

[priority]
urgency_window_days = 365.0
urgency_divisor_days = 90.0
amount_scale = 1.0

[labels]
critical = 7000.0
high = 5000.0
medium = 3000.0

[training]
samples = 5000
seed = 42
epochs = 2000
learning_rate = 0.5
test_fraction = 0.2

[validation]
min_spread = 0.2
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {DEFAULT_CONFIG_FILE} configuration file");

    Ok(())
}
