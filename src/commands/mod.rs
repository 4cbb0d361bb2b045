//! Command implementations for train-counter CLI
//!
//! This module contains the implementations for each CLI command:
//! - count: Count the cars of a single random train
//! - trials: Count many random trains and report accuracy
//! - compare: Run every strategy over the same trains

pub mod compare;
pub mod count;
pub mod trials;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Count { .. } => count::execute_count_command(command),
        Commands::Trials { .. } => trials::execute_trials_command(command),
        Commands::Compare { .. } => compare::execute_compare_command(command),
    }
}
