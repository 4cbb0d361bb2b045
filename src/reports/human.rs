//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::{TrialOutcome, Verdict};
use crate::discovery::{ProbabilisticDiscoverer, Strategy};
use crate::error::TrainError;
use crate::simulation::{SimulationReport, StrategyRun};
use crate::utils::string::{count_of, pluralize};

pub struct HumanReportGenerator {
    show_trials: bool,
}

impl HumanReportGenerator {
    pub fn new(show_trials: bool) -> Self {
        Self { show_trials }
    }

    fn write_trial(output: &mut String, outcome: &TrialOutcome) -> Result<(), TrainError> {
        match (outcome.verdict, outcome.discovered_length) {
            (Verdict::StepLimitExceeded, _) | (_, None) => writeln!(
                output,
                "  {} Trial #{}: real cars: {}, gave up after {} reads",
                style("⏱").yellow(),
                outcome.index + 1,
                outcome.true_length,
                outcome.reads
            )?,
            (verdict, Some(discovered)) => {
                let mark = if verdict == Verdict::Correct {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                writeln!(
                    output,
                    "  {} Trial #{}: real cars: {}, discovered: {} ({} reads, {} rejected {})",
                    mark,
                    outcome.index + 1,
                    outcome.true_length,
                    discovered,
                    outcome.reads,
                    outcome.rejected_candidates,
                    pluralize("candidate", outcome.rejected_candidates as usize)
                )?
            }
        }
        Ok(())
    }

    fn write_run(
        &self,
        output: &mut String,
        report: &SimulationReport,
        run: &StrategyRun,
    ) -> Result<(), TrainError> {
        let summary = &run.summary;

        writeln!(
            output,
            "\n{} Strategy: {}",
            style("🚃").cyan(),
            style(run.strategy).bold()
        )?;

        if self.show_trials {
            for outcome in &run.outcomes {
                Self::write_trial(output, outcome)?;
            }
            writeln!(output)?;
        }

        writeln!(
            output,
            "  {} Correct: {}/{} ({:.2}%)",
            style("📊").blue(),
            style(summary.correct).green().bold(),
            summary.total,
            summary.accuracy()
        )?;
        if summary.incorrect > 0 {
            writeln!(
                output,
                "    {} Miscounted: {}",
                style("•").dim(),
                style(summary.incorrect).red().bold()
            )?;
        }
        if summary.step_limited > 0 {
            writeln!(
                output,
                "    {} Gave up: {} (read cap {})",
                style("•").dim(),
                style(summary.step_limited).red().bold(),
                run.step_limit
                    .map_or_else(|| "none".to_string(), |limit| limit.to_string())
            )?;
        }
        writeln!(
            output,
            "    {} Reads per car: {:.2}",
            style("•").dim(),
            summary.reads_per_car()
        )?;
        if run.strategy == Strategy::Probabilistic {
            let bound =
                ProbabilisticDiscoverer::false_positive_bound(report.settings.max_cars as u64);
            writeln!(
                output,
                "    {} Miscount bound per train: {:.4}%",
                style("•").dim(),
                bound * 100.0
            )?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &SimulationReport) -> Result<String, TrainError> {
        let mut output = String::new();
        let settings = &report.settings;

        writeln!(
            output,
            "\n{} {} of {} to {} cars (seed {})",
            style("🚂").cyan().bold(),
            count_of(settings.trials, "train"),
            settings.min_cars,
            settings.max_cars,
            style(settings.seed).yellow()
        )?;

        for run in &report.runs {
            self.write_run(&mut output, report, run)?;
        }

        if !report.has_misses() {
            writeln!(
                output,
                "\n{} Every train was counted correctly.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(output)?;
        if report
            .runs
            .iter()
            .any(|run| run.strategy == Strategy::Legacy && run.summary.misses() > 0)
        {
            writeln!(
                output,
                "{} The legacy heuristic trusts any long enough run of marked cars, and never \
                 stops on trains shorter than its minimum.",
                style("💡").yellow()
            )?;
        }
        writeln!(
            output,
            "{} Re-run with --seed {} --show-trials to see which trains were miscounted.",
            style("💡").yellow(),
            settings.seed
        )?;

        Ok(output)
    }
}
