//! Count command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CountConfig;
use crate::error::TrainError;

impl FromCommand for CountConfig {
    fn from_command(command: Commands) -> Result<Self, TrainError> {
        match command {
            Commands::Count {
                train,
                strategy,
                format,
                error_on_miss,
            } => CountConfig::builder()
                .with_settings(train.settings(1)?)
                .with_strategy(strategy.strategy)
                .with_format(format.format)
                .with_error_on_miss(error_on_miss)
                .build(),
            _ => Err(TrainError::ConfigurationError {
                message: "Invalid command type for CountConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CountConfig);

/// Execute the count command for a single random train
pub fn execute_count_command(command: Commands) -> Result<()> {
    let config = CountConfig::from_command(command)
        .wrap_err("Failed to parse count command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::count::CountExecutor;
    CountExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};
    use crate::discovery::Strategy;

    #[test]
    fn test_count_config_from_command() {
        let cli = Cli::try_parse_from([
            "train-counter",
            "count",
            "--seed",
            "11",
            "--strategy",
            "legacy",
            "--max-steps",
            "300",
            "--error-on-miss",
        ])
        .unwrap();

        let config = CountConfig::try_from(cli.command).unwrap();
        assert_eq!(config.settings.trials, 1);
        assert_eq!(config.settings.seed, 11);
        assert_eq!(config.settings.step_limit, Some(300));
        assert_eq!(config.strategy, Strategy::Legacy);
        assert_eq!(config.format, OutputFormat::Human);
        assert!(config.error_on_miss);
    }

    #[test]
    fn test_count_config_rejects_other_commands() {
        let cli = Cli::try_parse_from(["train-counter", "compare"]).unwrap();
        assert!(matches!(
            CountConfig::from_command(cli.command),
            Err(TrainError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_count_config_rejects_bad_range() {
        let cli = Cli::try_parse_from([
            "train-counter",
            "count",
            "--min-cars",
            "0",
        ])
        .unwrap();
        assert!(matches!(
            CountConfig::from_command(cli.command),
            Err(TrainError::InvalidCarRange { min: 0, .. })
        ));
    }
}
