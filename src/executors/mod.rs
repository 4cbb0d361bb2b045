//! Command executors that handle the actual logic for each command

pub mod compare;
pub mod count;
pub mod trials;

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::reports::render_report;
use crate::simulation::SimulationReport;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

fn announce_seed(seed: u64) {
    eprintln!(
        "  {} Seed: {} (pass --seed {} to replay)\n",
        style("→").dim(),
        style(seed).yellow(),
        seed
    );
}

/// Print the report to stdout and exit non-zero on a miss if asked to
fn emit_report(
    report: &SimulationReport,
    format: OutputFormat,
    show_trials: bool,
    error_on_miss: bool,
) -> Result<()> {
    let output = render_report(report, format, show_trials)
        .wrap_err("Failed to generate report")?;
    print!("{output}");

    if error_on_miss && report.has_misses() {
        std::process::exit(1);
    }

    Ok(())
}
