//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::Verdict;
use crate::error::TrainError;
use crate::simulation::SimulationReport;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, report: &SimulationReport) -> Result<String, TrainError> {
        let mut output = String::new();
        let tests: usize = report.runs.iter().map(|run| run.summary.total).sum();
        let failures: usize = report.runs.iter().map(|run| run.summary.misses()).sum();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="train-counter" tests="{tests}" failures="{failures}">"#
        )?;

        for run in &report.runs {
            writeln!(
                output,
                r#"  <testsuite name="{}" tests="{}" failures="{}">"#,
                run.strategy,
                run.summary.total,
                run.summary.misses()
            )?;

            for outcome in &run.outcomes {
                let name = format!("trial-{}-{}-cars", outcome.index + 1, outcome.true_length);
                match (outcome.verdict, outcome.discovered_length) {
                    (Verdict::Correct, _) => writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="train-counter.{}" />"#,
                        run.strategy
                    )?,
                    (verdict, discovered) => {
                        let message = match discovered {
                            Some(length) => format!(
                                "Counted {length} cars, train has {}",
                                outcome.true_length
                            ),
                            None => format!("Gave up after {} reads", outcome.reads),
                        };
                        writeln!(
                            output,
                            r#"    <testcase name="{name}" classname="train-counter.{}">"#,
                            run.strategy
                        )?;
                        writeln!(
                            output,
                            r#"      <failure message="{message}" type="{}" />"#,
                            verdict
                        )?;
                        writeln!(output, r#"    </testcase>"#)?;
                    }
                }
            }

            writeln!(output, r#"  </testsuite>"#)?;
        }

        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
