//! Compare command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::CompareConfig;
use crate::executors::{CommandExecutor, announce_seed, emit_report};
use crate::progress::ProgressReporter;
use crate::simulation::Simulation;

pub struct CompareExecutor;

impl CommandExecutor for CompareExecutor {
    type Config = CompareConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let settings = config.settings;
        let names: Vec<_> = config.strategies.iter().map(|s| s.name()).collect();
        eprintln!(
            "{} Comparing {} on {} shared trains of {} to {} cars...",
            style("⚖").cyan(),
            style(names.join(" vs ")).bold(),
            style(settings.trials).yellow().bold(),
            settings.min_cars,
            settings.max_cars
        );
        announce_seed(settings.seed);

        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let simulation = Simulation::new(settings);
        let total = (settings.trials * config.strategies.len()) as u64;
        let bar = progress
            .as_mut()
            .map(|p| p.start_trials(total, "all strategies"));

        let report = simulation
            .compare(&config.strategies, bar.as_ref())
            .wrap_err("Failed to compare strategies")?;

        if let Some(p) = progress.as_mut() {
            p.finish_trials();
            for run in &report.runs {
                p.report_run(run);
            }
        }

        emit_report(&report, config.format, config.show_trials, config.error_on_miss)
    }
}
