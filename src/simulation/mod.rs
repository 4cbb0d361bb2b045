//! # Simulation Module
//!
//! Drives discovery strategies over many random trains and checks their
//! answers against the true lengths, which only the harness knows.
//!
//! ## Key Components
//!
//! - **SimulationSettings**: car range, trial count, seed and read cap
//! - **Simulation**: builds the train for each trial and runs a strategy on it
//! - **StrategyRun**: per-trial outcomes plus a **BatchSummary** for one
//!   strategy
//! - **SimulationReport**: the runs handed to a report generator
//!
//! Trial `i` draws its train from a ChaCha8 stream keyed by `(seed, i)`, so a
//! batch is reproducible from its seed regardless of thread scheduling.
//!
//! ## Example
//!
//! ```
//! use train_counter::discovery::Strategy;
//! use train_counter::simulation::{Simulation, SimulationSettings};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = SimulationSettings::new(9, 100, 50, 42)?;
//! let simulation = Simulation::new(settings);
//!
//! let run = simulation.run(Strategy::Probabilistic, None)?;
//! assert_eq!(run.summary.total, 50);
//! println!("accuracy: {:.1}%", run.summary.accuracy());
//! # Ok(())
//! # }
//! ```

mod simulation_impl;

pub use simulation_impl::*;
