use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::simulation::StrategyRun;
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_walk(&mut self) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner("Walking the train, flipping lights...");
        self.current_bar = Some(spinner);
    }

    pub fn finish_walk(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn start_trials(&mut self, total: u64, label: &str) -> ProgressBar {
        let pb = self.create_progress_bar(total, &format!("Counting trains ({label})"));
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_trials(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_with_message("All trains counted");
        }
    }

    pub fn report_run(&self, run: &StrategyRun) {
        let summary = &run.summary;
        let _ = self.term.clear_line();
        if summary.misses() == 0 {
            eprintln!(
                "{} {}: {} {} counted correctly",
                style("✓").green().bold(),
                style(run.strategy).bold(),
                style(summary.correct).green().bold(),
                pluralize("train", summary.correct)
            );
        } else {
            eprintln!(
                "{} {}: {} of {} {} miscounted or abandoned",
                style("⚠").yellow().bold(),
                style(run.strategy).bold(),
                style(summary.misses()).red().bold(),
                summary.total,
                pluralize("train", summary.total)
            );
        }
    }
}
