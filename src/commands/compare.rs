//! Compare command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CompareConfig;
use crate::discovery::Strategy;
use crate::error::TrainError;

impl FromCommand for CompareConfig {
    fn from_command(command: Commands) -> Result<Self, TrainError> {
        match command {
            Commands::Compare {
                train,
                batch,
                format,
                error_on_miss,
            } => CompareConfig::builder()
                .with_settings(train.settings(batch.trials)?.with_parallel(!batch.sequential))
                .with_strategies(Strategy::ALL.to_vec())
                .with_format(format.format)
                .with_show_trials(batch.show_trials)
                .with_error_on_miss(error_on_miss)
                .build(),
            _ => Err(TrainError::ConfigurationError {
                message: "Invalid command type for CompareConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CompareConfig);

/// Execute the compare command, running every strategy on the same trains
pub fn execute_compare_command(command: Commands) -> Result<()> {
    let config = CompareConfig::from_command(command)
        .wrap_err("Failed to parse compare command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::compare::CompareExecutor;
    CompareExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_compare_runs_every_strategy() {
        let cli = Cli::try_parse_from(["train-counter", "compare", "--seed", "3"]).unwrap();
        let config = CompareConfig::try_from(cli.command).unwrap();

        assert_eq!(config.strategies, vec![Strategy::Probabilistic, Strategy::Legacy]);
        assert_eq!(config.settings.seed, 3);
        assert!(config.settings.parallel);
    }
}
