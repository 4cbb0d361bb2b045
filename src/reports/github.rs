//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::error::TrainError;
use crate::simulation::SimulationReport;
use crate::utils::string::count_of;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, report: &SimulationReport) -> Result<String, TrainError> {
        let mut output = String::new();

        for run in &report.runs {
            let summary = &run.summary;

            if summary.misses() == 0 {
                writeln!(
                    output,
                    "::notice title=Train Count::{}: all {} counted correctly ✅",
                    run.strategy,
                    count_of(summary.total, "train")
                )?;
                continue;
            }

            writeln!(
                output,
                "::error title=Train Count::{}: {} of {} trains miscounted or abandoned ({:.2}% \
                 correct)",
                run.strategy,
                summary.misses(),
                summary.total,
                summary.accuracy()
            )?;

            for outcome in run.outcomes.iter().filter(|o| !o.is_correct()) {
                match outcome.discovered_length {
                    Some(length) => writeln!(
                        output,
                        "::warning title=Trial {}::{} counted {} cars, train has {}",
                        outcome.index + 1,
                        run.strategy,
                        length,
                        outcome.true_length
                    )?,
                    None => writeln!(
                        output,
                        "::warning title=Trial {}::{} gave up after {} reads on {} cars",
                        outcome.index + 1,
                        run.strategy,
                        outcome.reads,
                        outcome.true_length
                    )?,
                }
            }
        }

        if report.has_misses() {
            writeln!(
                output,
                "::notice title=Reproduce::Re-run with --seed {} --show-trials",
                report.settings.seed
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reports::test_support::*;

    #[test]
    fn test_github_clean_report() {
        let output = GitHubReportGenerator::new()
            .generate_report(&clean_report())
            .unwrap();
        assert_eq!(
            output,
            "::notice title=Train Count::probabilistic: all 2 trains counted correctly ✅\n"
        );
    }

    #[test]
    fn test_github_annotates_each_miss() {
        let output = GitHubReportGenerator::new()
            .generate_report(&mixed_report())
            .unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("::notice title=Train Count::probabilistic"));
        assert_eq!(
            lines[1],
            "::error title=Train Count::legacy: 2 of 3 trains miscounted or abandoned (33.33% \
             correct)"
        );
        assert_eq!(
            lines[2],
            "::warning title=Trial 1::legacy counted 9 cars, train has 20"
        );
        assert_eq!(
            lines[3],
            "::warning title=Trial 2::legacy gave up after 15 reads on 5 cars"
        );
        assert_eq!(
            lines[4],
            "::notice title=Reproduce::Re-run with --seed 42 --show-trials"
        );
    }
}
