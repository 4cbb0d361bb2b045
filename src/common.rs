//! Common functionality shared across commands

use clap::Args;
use rand::Rng;

use crate::constants::train::{DEFAULT_MAX_CARS, DEFAULT_MIN_CARS, DEFAULT_TRIALS};
use crate::discovery::Strategy;
use crate::error::TrainError;
use crate::simulation::SimulationSettings;

/// Train generation arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Fewest cars a generated train may have
    #[arg(long, default_value_t = DEFAULT_MIN_CARS, env = "TRAIN_COUNTER_MIN_CARS")]
    pub min_cars: usize,

    /// Most cars a generated train may have
    #[arg(long, default_value_t = DEFAULT_MAX_CARS, env = "TRAIN_COUNTER_MAX_CARS")]
    pub max_cars: usize,

    /// Seed for train generation (random if not given)
    #[arg(long, env = "TRAIN_COUNTER_SEED")]
    pub seed: Option<u64>,

    /// Give up on a train after this many light reads
    #[arg(long, env = "TRAIN_COUNTER_MAX_STEPS")]
    pub max_steps: Option<u64>,
}

/// Strategy selection arguments
#[derive(Args, Debug, Clone)]
pub struct StrategyArgs {
    /// Discovery strategy to run
    #[arg(
        short,
        long,
        value_enum,
        default_value = "probabilistic",
        env = "TRAIN_COUNTER_STRATEGY"
    )]
    pub strategy: Strategy,
}

/// Batch size and scheduling arguments
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Number of trains to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS, env = "TRAIN_COUNTER_TRIALS")]
    pub trials: usize,

    /// List every trial, not just the summary
    #[arg(long, env = "TRAIN_COUNTER_SHOW_TRIALS")]
    pub show_trials: bool,

    /// Run trials one after another instead of on all cores
    #[arg(long, env = "TRAIN_COUNTER_SEQUENTIAL")]
    pub sequential: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "TRAIN_COUNTER_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl TrainArgs {
    /// Seed to use, drawing a fresh one if none was given
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    /// Validated simulation settings for `trials` trains
    pub fn settings(&self, trials: usize) -> Result<SimulationSettings, TrainError> {
        Ok(
            SimulationSettings::new(self.min_cars, self.max_cars, trials, self.resolve_seed())?
                .with_step_limit(self.max_steps),
        )
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, TrainError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, TrainError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::TrainError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro to generate a `with_*` builder whose `build` requires every field
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<$config, $crate::error::TrainError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::TrainError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn train_args(seed: Option<u64>) -> TrainArgs {
        TrainArgs {
            min_cars: 9,
            max_cars: 100,
            seed,
            max_steps: Some(500),
        }
    }

    #[test]
    fn test_explicit_seed_is_kept() {
        assert_eq!(train_args(Some(1234)).resolve_seed(), 1234);
    }

    #[test]
    fn test_settings_carry_every_flag() {
        let settings = train_args(Some(5)).settings(42).unwrap();
        assert_eq!(settings.min_cars, 9);
        assert_eq!(settings.max_cars, 100);
        assert_eq!(settings.trials, 42);
        assert_eq!(settings.seed, 5);
        assert_eq!(settings.step_limit, Some(500));
    }

    #[test]
    fn test_settings_reject_inverted_range() {
        let args = TrainArgs {
            min_cars: 50,
            max_cars: 10,
            seed: None,
            max_steps: None,
        };
        assert!(matches!(
            args.settings(1),
            Err(TrainError::InvalidCarRange { min: 50, max: 10 })
        ));
    }
}
