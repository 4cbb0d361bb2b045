//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions format for workflow annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::cli::OutputFormat;
use crate::error::TrainError;
use crate::simulation::SimulationReport;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from simulation results
    fn generate_report(&self, report: &SimulationReport) -> Result<String, TrainError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

/// Render `report` with the generator for `format`
pub fn render_report(
    report: &SimulationReport,
    format: OutputFormat,
    show_trials: bool,
) -> Result<String, TrainError> {
    match format {
        OutputFormat::Human => HumanReportGenerator::new(show_trials).generate_report(report),
        OutputFormat::Json => JsonReportGenerator::new(show_trials).generate_report(report),
        OutputFormat::Junit => JunitReportGenerator::new().generate_report(report),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(report),
    }
}
