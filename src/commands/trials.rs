//! Trials command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TrialsConfig;
use crate::error::TrainError;

impl FromCommand for TrialsConfig {
    fn from_command(command: Commands) -> Result<Self, TrainError> {
        match command {
            Commands::Trials {
                train,
                strategy,
                batch,
                format,
                error_on_miss,
            } => TrialsConfig::builder()
                .with_settings(train.settings(batch.trials)?.with_parallel(!batch.sequential))
                .with_strategy(strategy.strategy)
                .with_format(format.format)
                .with_show_trials(batch.show_trials)
                .with_error_on_miss(error_on_miss)
                .build(),
            _ => Err(TrainError::ConfigurationError {
                message: "Invalid command type for TrialsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TrialsConfig);

/// Execute the trials command for a batch of random trains
pub fn execute_trials_command(command: Commands) -> Result<()> {
    let config = TrialsConfig::from_command(command)
        .wrap_err("Failed to parse trials command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::trials::TrialsExecutor;
    TrialsExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_trials_config_from_command() {
        let cli = Cli::try_parse_from([
            "train-counter",
            "trials",
            "-n",
            "10000",
            "--min-cars",
            "50",
            "--max-cars",
            "50",
            "--sequential",
            "--show-trials",
        ])
        .unwrap();

        let config = TrialsConfig::try_from(cli.command).unwrap();
        assert_eq!(config.settings.trials, 10_000);
        assert_eq!(config.settings.min_cars, 50);
        assert_eq!(config.settings.max_cars, 50);
        assert!(!config.settings.parallel);
        assert!(config.show_trials);
        assert!(!config.error_on_miss);
    }

    #[test]
    fn test_trials_config_rejects_zero_trials() {
        let cli = Cli::try_parse_from(["train-counter", "trials", "-n", "0"]).unwrap();
        assert!(matches!(
            TrialsConfig::from_command(cli.command),
            Err(TrainError::ConfigurationError { .. })
        ));
    }
}
