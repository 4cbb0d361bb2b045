//! Count command configuration

use crate::cli::OutputFormat;
use crate::discovery::Strategy;
use crate::impl_builder;
use crate::simulation::SimulationSettings;

/// Configuration for the count command
#[derive(Debug, Clone)]
pub struct CountConfig {
    /// Car range, seed and read cap for the single train
    pub settings: SimulationSettings,
    /// Strategy that walks the train
    pub strategy: Strategy,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if the count is wrong
    pub error_on_miss: bool,
}

impl CountConfig {
    pub fn builder() -> CountConfigBuilder {
        CountConfigBuilder::new()
    }
}

impl_builder! {
    CountConfigBuilder => CountConfig {
        with_settings => settings: SimulationSettings,
        with_strategy => strategy: Strategy,
        with_format => format: OutputFormat,
        with_error_on_miss => error_on_miss: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::TrainError;

    #[test]
    fn test_missing_field_is_reported() {
        let result = CountConfig::builder()
            .with_strategy(Strategy::Legacy)
            .with_format(OutputFormat::Json)
            .with_error_on_miss(true)
            .build();

        match result {
            Err(TrainError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: settings");
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
