//! Command line to report pipeline, driven through the library interface

use clap::Parser;
use miette::IntoDiagnostic;
use pretty_assertions::assert_eq;
use train_counter::ConfigBuilder;
use train_counter::cli::{Cli, OutputFormat};
use train_counter::config::{CompareConfig, TrialsConfig};
use train_counter::discovery::Strategy;
use train_counter::reports::render_report;
use train_counter::simulation::{Simulation, SimulationSettings};

#[test]
fn test_compare_command_to_json_report() -> miette::Result<()> {
    let cli = Cli::try_parse_from([
        "train-counter",
        "compare",
        "--min-cars",
        "20",
        "--max-cars",
        "80",
        "--seed",
        "31337",
        "-n",
        "250",
        "--format",
        "json",
        "--show-trials",
    ])
    .into_diagnostic()?;
    let config = CompareConfig::try_from(cli.command)?;

    assert_eq!(config.strategies, Strategy::ALL.to_vec());
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.settings.seed, 31337);

    let report = Simulation::new(config.settings).compare(&config.strategies, None)?;
    let rendered = render_report(&report, config.format, config.show_trials)?;
    let json: serde_json::Value = serde_json::from_str(&rendered).into_diagnostic()?;

    assert_eq!(json["seed"], 31337);
    assert_eq!(json["min_cars"], 20);
    assert_eq!(json["max_cars"], 80);
    assert_eq!(json["trials"], 250);

    let runs = json["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0]["strategy"], "probabilistic");
    assert_eq!(runs[1]["strategy"], "legacy");
    assert_eq!(runs[1]["step_limit"], 640);
    assert!(runs[0]["miscount_bound"].is_f64());
    assert!(runs[1].get("miscount_bound").is_none());
    for run in runs {
        assert_eq!(run["trials"].as_array().unwrap().len(), 250);
    }

    Ok(())
}

#[test]
fn test_same_seed_renders_identical_reports() -> miette::Result<()> {
    let render = || -> miette::Result<String> {
        let settings = SimulationSettings::new(9, 60, 120, 4242)?;
        let config = TrialsConfig::builder()
            .with_settings(settings)
            .with_strategy(Strategy::Probabilistic)
            .with_format(OutputFormat::Junit)
            .with_show_trials(false)
            .with_error_on_miss(false)
            .build()?;

        let run = Simulation::new(config.settings).run(config.strategy, None)?;
        let report = train_counter::simulation::SimulationReport {
            settings: config.settings,
            runs: vec![run],
        };
        Ok(render_report(&report, config.format, config.show_trials)?)
    };

    let first = render()?;
    assert_eq!(first, render()?);
    assert!(first.contains("<testsuite name=\"probabilistic\""));
    assert_eq!(first.matches("<testcase ").count(), 120);

    Ok(())
}

#[test]
fn test_invalid_range_is_rejected_before_running() {
    let cli = Cli::try_parse_from([
        "train-counter",
        "trials",
        "--min-cars",
        "50",
        "--max-cars",
        "10",
    ])
    .unwrap();

    let error = TrialsConfig::try_from(cli.command).unwrap_err();
    assert_eq!(error.to_string(), "Invalid car range 50..=10");
}
