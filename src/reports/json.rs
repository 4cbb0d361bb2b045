//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::discovery::{ProbabilisticDiscoverer, Strategy};
use crate::error::TrainError;
use crate::simulation::SimulationReport;

pub struct JsonReportGenerator {
    include_trials: bool,
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl JsonReportGenerator {
    pub fn new(include_trials: bool) -> Self {
        Self { include_trials }
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &SimulationReport) -> Result<String, TrainError> {
        let settings = &report.settings;

        let runs: Vec<_> = report
            .runs
            .iter()
            .map(|run| {
                let summary = &run.summary;
                let mut value = json!({
                    "strategy": run.strategy.name(),
                    "step_limit": run.step_limit,
                    "total": summary.total,
                    "correct": summary.correct,
                    "incorrect": summary.incorrect,
                    "step_limit_exceeded": summary.step_limited,
                    "accuracy": summary.accuracy(),
                    "reads_per_car": summary.reads_per_car(),
                });

                if run.strategy == Strategy::Probabilistic {
                    value["miscount_bound"] = json!(ProbabilisticDiscoverer::false_positive_bound(
                        settings.max_cars as u64
                    ));
                }
                if self.include_trials {
                    value["trials"] = json!(run.outcomes);
                }
                value
            })
            .collect();

        let output = json!({
            "seed": settings.seed,
            "min_cars": settings.min_cars,
            "max_cars": settings.max_cars,
            "trials": settings.trials,
            "has_misses": report.has_misses(),
            "runs": runs,
        });

        serde_json::to_string_pretty(&output).map_err(TrainError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::test_support::*;

    #[test]
    fn test_json_report_summary() {
        let report = JsonReportGenerator::new(false)
            .generate_report(&mixed_report())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["seed"], 42);
        assert_eq!(json["min_cars"], 5);
        assert_eq!(json["max_cars"], 40);
        assert_eq!(json["has_misses"], true);

        let runs = json["runs"].as_array().unwrap();
        assert_eq!(runs.len(), 2);

        assert_eq!(runs[0]["strategy"], "probabilistic");
        assert_eq!(runs[0]["correct"], 3);
        assert_eq!(runs[0]["step_limit"], Value::Null);
        assert!(runs[0]["miscount_bound"].as_f64().unwrap() > 0.0);
        assert!(runs[0].get("trials").is_none());

        assert_eq!(runs[1]["strategy"], "legacy");
        assert_eq!(runs[1]["correct"], 1);
        assert_eq!(runs[1]["incorrect"], 1);
        assert_eq!(runs[1]["step_limit_exceeded"], 1);
        assert_eq!(runs[1]["step_limit"], 320);
        assert!(runs[1].get("miscount_bound").is_none());
    }

    #[test]
    fn test_json_report_with_trials() {
        let report = JsonReportGenerator::new(true)
            .generate_report(&mixed_report())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let trials = json["runs"][1]["trials"].as_array().unwrap();
        assert_eq!(trials.len(), 3);
        assert_eq!(trials[0]["true_length"], 20);
        assert_eq!(trials[0]["discovered_length"], 9);
        assert_eq!(trials[0]["verdict"], "incorrect");
        assert_eq!(trials[1]["discovered_length"], Value::Null);
        assert_eq!(trials[1]["verdict"], "step_limit_exceeded");
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator::default()
            .generate_report(&clean_report())
            .unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
