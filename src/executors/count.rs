//! Count command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::CountConfig;
use crate::executors::{CommandExecutor, announce_seed, emit_report};
use crate::progress::ProgressReporter;
use crate::simulation::{Simulation, SimulationReport};

pub struct CountExecutor;

impl CommandExecutor for CountExecutor {
    type Config = CountConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Counting the cars of one train with the {} strategy...",
            style("🚃").cyan(),
            style(config.strategy).bold()
        );
        announce_seed(config.settings.seed);

        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let simulation = Simulation::new(config.settings);
        if let Some(p) = progress.as_mut() {
            p.start_walk();
        }

        let run = simulation
            .run(config.strategy, None)
            .wrap_err("Failed to count the train")?;

        if let Some(p) = progress.as_mut() {
            p.finish_walk();
            p.report_run(&run);
        }

        let report = SimulationReport {
            settings: config.settings,
            runs: vec![run],
        };
        emit_report(&report, config.format, true, config.error_on_miss)
    }
}
