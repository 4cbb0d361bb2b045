//! Compare command configuration

use crate::cli::OutputFormat;
use crate::discovery::Strategy;
use crate::impl_builder;
use crate::simulation::SimulationSettings;

#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub settings: SimulationSettings,
    /// Strategies to run, in report order
    pub strategies: Vec<Strategy>,
    pub format: OutputFormat,
    pub show_trials: bool,
    pub error_on_miss: bool,
}

impl CompareConfig {
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::new()
    }
}

impl_builder! {
    CompareConfigBuilder => CompareConfig {
        with_settings => settings: SimulationSettings,
        with_strategies => strategies: Vec<Strategy>,
        with_format => format: OutputFormat,
        with_show_trials => show_trials: bool,
        with_error_on_miss => error_on_miss: bool,
    }
}
