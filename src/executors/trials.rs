//! Trials command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::TrialsConfig;
use crate::executors::{CommandExecutor, announce_seed, emit_report};
use crate::progress::ProgressReporter;
use crate::simulation::{Simulation, SimulationReport};

pub struct TrialsExecutor;

impl CommandExecutor for TrialsExecutor {
    type Config = TrialsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let settings = config.settings;
        eprintln!(
            "{} Running {} trains of {} to {} cars with the {} strategy...",
            style("🚃").cyan(),
            style(settings.trials).yellow().bold(),
            settings.min_cars,
            settings.max_cars,
            style(config.strategy).bold()
        );
        announce_seed(settings.seed);
        eprintln!(
            "  {} Parallel: {}",
            style("→").dim(),
            if settings.parallel {
                style("yes").green()
            } else {
                style("no").red()
            }
        );
        eprintln!(
            "  {} Read cap per train: {}",
            style("→").dim(),
            match settings.step_limit_for(config.strategy) {
                Some(limit) => style(limit.to_string()).yellow(),
                None => style("none".to_string()).green(),
            }
        );

        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let simulation = Simulation::new(settings);
        let bar = progress
            .as_mut()
            .map(|p| p.start_trials(settings.trials as u64, config.strategy.name()));

        let run = simulation
            .run(config.strategy, bar.as_ref())
            .wrap_err("Failed to run trials")?;

        if let Some(p) = progress.as_mut() {
            p.finish_trials();
            p.report_run(&run);
        }

        let report = SimulationReport {
            settings,
            runs: vec![run],
        };
        emit_report(&report, config.format, config.show_trials, config.error_on_miss)
    }
}
