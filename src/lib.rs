//! # Train Counter - Count the Cars of a Circular Train
//!
//! A train of unknown length loops back on itself. Every car has a light that
//! is on or off, and the only things you can do are look at the light of the
//! car at some position and flip it. Train Counter finds the number of cars
//! with exactly those two operations, and simulates many random trains to
//! show how reliably it does so.
//!
//! ## Main Components
//!
//! - **Train**: The circular sequence of cars and the [`train::CarAccess`]
//!   view strategies are limited to
//! - **Discovery**: The counting strategies: the probabilistic
//!   marker-and-flip walk and the legacy run-length heuristic
//! - **Simulation**: Seeded, reproducible batches of trains, optionally run
//!   in parallel
//! - **Reports**: Human-readable and machine-readable results
//!
//! ## Usage
//!
//! ### Counting a Single Train
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use train_counter::discovery::{LengthDiscoverer, ProbabilisticDiscoverer};
//! use train_counter::train::Train;
//!
//! # fn main() -> miette::Result<()> {
//! let mut rng = ChaCha8Rng::seed_from_u64(2025);
//! let mut train = Train::new(73, &mut rng)?;
//! let real_length = train.len() as u64;
//!
//! // The discoverer only ever sees reads and flips
//! let discovery = ProbabilisticDiscoverer::new().discover(&mut train, None)?;
//!
//! println!(
//!     "real cars: {real_length}, discovered: {} after {} reads",
//!     discovery.length, discovery.reads
//! );
//! assert!(discovery.length <= real_length);
//! # Ok(())
//! # }
//! ```
//!
//! ### Comparing Strategies Over Many Trains
//!
//! ```
//! use train_counter::discovery::Strategy;
//! use train_counter::reports::{HumanReportGenerator, ReportGenerator};
//! use train_counter::simulation::{Simulation, SimulationSettings};
//!
//! # fn main() -> miette::Result<()> {
//! let settings = SimulationSettings::new(9, 100, 200, 7)?;
//! let report = Simulation::new(settings).compare(&Strategy::ALL, None)?;
//!
//! for run in &report.runs {
//!     println!("{}: {:.2}% correct", run.strategy, run.summary.accuracy());
//! }
//!
//! println!("{}", HumanReportGenerator::new(false).generate_report(&report)?);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod reports;
pub mod simulation;
pub mod train;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
