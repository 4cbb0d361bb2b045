use indicatif::{ParallelProgressIterator, ProgressBar};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::core::{TrialOutcome, Verdict};
use crate::discovery::Strategy;
use crate::error::TrainError;
use crate::train::Train;

/// Knobs for a batch of simulated trains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    /// Shortest train that may be drawn
    pub min_cars: usize,
    /// Longest train that may be drawn
    pub max_cars: usize,
    /// Number of trains to simulate
    pub trials: usize,
    /// Seed every trial RNG is derived from
    pub seed: u64,
    /// Read cap per trial (None = the strategy's default)
    pub step_limit: Option<u64>,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
}

impl SimulationSettings {
    pub fn new(
        min_cars: usize,
        max_cars: usize,
        trials: usize,
        seed: u64,
    ) -> Result<Self, TrainError> {
        if min_cars == 0 || min_cars > max_cars {
            return Err(TrainError::InvalidCarRange {
                min: min_cars,
                max: max_cars,
            });
        }
        if trials == 0 {
            return Err(TrainError::ConfigurationError {
                message: "At least one trial is required".to_string(),
            });
        }

        Ok(Self {
            min_cars,
            max_cars,
            trials,
            seed,
            step_limit: None,
            parallel: true,
        })
    }

    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Read cap that applies to `strategy` in this simulation
    pub fn step_limit_for(&self, strategy: Strategy) -> Option<u64> {
        self.step_limit
            .or_else(|| strategy.default_step_limit(self.max_cars))
    }
}

/// Aggregate counts over a batch of trials
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub step_limited: usize,
    pub total_reads: u64,
    pub total_cars: u64,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[TrialOutcome]) -> Self {
        outcomes
            .iter()
            .fold(BatchSummary::default(), |mut summary, outcome| {
                summary.total += 1;
                match outcome.verdict {
                    Verdict::Correct => summary.correct += 1,
                    Verdict::Incorrect => summary.incorrect += 1,
                    Verdict::StepLimitExceeded => summary.step_limited += 1,
                }
                summary.total_reads += outcome.reads;
                summary.total_cars += outcome.true_length as u64;
                summary
            })
    }

    /// Share of correct trials, as a percentage
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn reads_per_car(&self) -> f64 {
        if self.total_cars == 0 {
            return 0.0;
        }
        self.total_reads as f64 / self.total_cars as f64
    }

    pub fn misses(&self) -> usize {
        self.incorrect + self.step_limited
    }
}

/// Every trial of one strategy
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub step_limit: Option<u64>,
    pub outcomes: Vec<TrialOutcome>,
    pub summary: BatchSummary,
}

/// The result of a simulation, ready to hand to a report generator
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub settings: SimulationSettings,
    pub runs: Vec<StrategyRun>,
}

impl SimulationReport {
    pub fn has_misses(&self) -> bool {
        self.runs.iter().any(|run| run.summary.misses() > 0)
    }
}

/// Builds seeded trains and runs strategies over them
///
/// Trial `i` always gets the same train for a given seed, whichever
/// strategy runs it and whether or not the batch runs in parallel.
pub struct Simulation {
    settings: SimulationSettings,
}

impl Simulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    fn trial_rng(&self, index: usize) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.settings.seed);
        rng.set_stream(index as u64);
        rng
    }

    /// The train used by trial `index`
    pub fn build_train(&self, index: usize) -> Result<Train, TrainError> {
        let mut rng = self.trial_rng(index);
        let length = rng.random_range(self.settings.min_cars..=self.settings.max_cars);
        Train::new(length, &mut rng)
    }

    /// Run one strategy on one train and classify the result
    pub fn run_trial(&self, strategy: Strategy, index: usize) -> Result<TrialOutcome, TrainError> {
        let mut train = self.build_train(index)?;
        let true_length = train.len();
        let step_limit = self.settings.step_limit_for(strategy);

        match strategy.discover(&mut train, step_limit) {
            Ok(discovery) => Ok(TrialOutcome {
                index,
                true_length,
                discovered_length: Some(discovery.length),
                verdict: if discovery.length == true_length as u64 {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                },
                reads: discovery.reads,
                flips: discovery.flips,
                rejected_candidates: discovery.rejected_candidates,
            }),
            Err(TrainError::StepLimitExceeded { limit, .. }) => Ok(TrialOutcome {
                index,
                true_length,
                discovered_length: None,
                verdict: Verdict::StepLimitExceeded,
                reads: limit,
                flips: 0,
                rejected_candidates: 0,
            }),
            Err(e) => Err(e),
        }
    }

    /// Run every trial with `strategy`
    pub fn run(
        &self,
        strategy: Strategy,
        progress: Option<&ProgressBar>,
    ) -> Result<StrategyRun, TrainError> {
        let trials = self.settings.trials;

        let outcomes: Vec<TrialOutcome> = if self.settings.parallel {
            match progress {
                Some(pb) => (0..trials)
                    .into_par_iter()
                    .progress_with(pb.clone())
                    .map(|index| self.run_trial(strategy, index))
                    .collect::<Result<Vec<_>, TrainError>>()?,
                None => (0..trials)
                    .into_par_iter()
                    .map(|index| self.run_trial(strategy, index))
                    .collect::<Result<Vec<_>, TrainError>>()?,
            }
        } else {
            (0..trials)
                .map(|index| {
                    let outcome = self.run_trial(strategy, index);
                    if let Some(pb) = progress {
                        pb.inc(1);
                    }
                    outcome
                })
                .collect::<Result<Vec<_>, TrainError>>()?
        };

        let summary = BatchSummary::from_outcomes(&outcomes);
        Ok(StrategyRun {
            strategy,
            step_limit: self.settings.step_limit_for(strategy),
            outcomes,
            summary,
        })
    }

    /// Run each strategy over the same trains
    pub fn compare(
        &self,
        strategies: &[Strategy],
        progress: Option<&ProgressBar>,
    ) -> Result<SimulationReport, TrainError> {
        let runs = strategies
            .iter()
            .map(|strategy| self.run(*strategy, progress))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SimulationReport {
            settings: self.settings,
            runs,
        })
    }
}
