//! # Configuration Module
//!
//! This module provides configuration structures for all train-counter
//! commands. Each command has its own config module with a builder generated
//! by `impl_builder!`.
//!
//! ## Command Configurations
//!
//! - **CountConfig**: Configuration for the `count` command (one train)
//! - **TrialsConfig**: Configuration for the `trials` command (a batch of
//!   trains, one strategy)
//! - **CompareConfig**: Configuration for the `compare` command (a batch of
//!   trains, every strategy)
//!
//! ## Example
//!
//! ```
//! use train_counter::cli::OutputFormat;
//! use train_counter::common::ConfigBuilder;
//! use train_counter::config::CountConfig;
//! use train_counter::discovery::Strategy;
//! use train_counter::simulation::SimulationSettings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CountConfig::builder()
//!     .with_settings(SimulationSettings::new(9, 100, 1, 42)?)
//!     .with_strategy(Strategy::Probabilistic)
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_miss(false)
//!     .build()?;
//!
//! assert_eq!(config.settings.seed, 42);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod count;
pub mod trials;

pub use compare::CompareConfig;
pub use count::CountConfig;
pub use trials::TrialsConfig;
