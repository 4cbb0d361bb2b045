//! Trials command configuration

use crate::cli::OutputFormat;
use crate::discovery::Strategy;
use crate::impl_builder;
use crate::simulation::SimulationSettings;

/// Configuration for the trials command
#[derive(Debug, Clone)]
pub struct TrialsConfig {
    pub settings: SimulationSettings,
    pub strategy: Strategy,
    pub format: OutputFormat,
    /// List every trial in the report
    pub show_trials: bool,
    pub error_on_miss: bool,
}

impl TrialsConfig {
    pub fn builder() -> TrialsConfigBuilder {
        TrialsConfigBuilder::new()
    }
}

impl_builder! {
    TrialsConfigBuilder => TrialsConfig {
        with_settings => settings: SimulationSettings,
        with_strategy => strategy: Strategy,
        with_format => format: OutputFormat,
        with_show_trials => show_trials: bool,
        with_error_on_miss => error_on_miss: bool,
    }
}
