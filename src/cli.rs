use clap::{Parser, Subcommand};

use crate::common::{BatchArgs, FormatArgs, StrategyArgs, TrainArgs};

#[derive(Parser)]
#[command(
    name = "train-counter",
    about = "🚃 Count the cars of a circular train you can only walk through",
    long_about = "train-counter simulates the circular train puzzle: every car has a light that \
                  is on or off, the train loops back on itself, and the only way to learn its \
                  length is to walk it, reading and flipping lights. It runs the probabilistic \
                  marker-and-flip strategy, or the legacy run-length heuristic for comparison, \
                  over random trains and reports how often each gets the count right.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the cars of a single random train
    ///
    /// Builds one train with a random length, walks it with the chosen
    /// strategy and prints the real and discovered lengths side by side.
    #[command(
        long_about = "Build one random train, count its cars with the selected strategy and \
                      compare the answer with the real length. The seed is always printed so a \
                      surprising train can be rebuilt with --seed."
    )]
    Count {
        #[command(flatten)]
        train: TrainArgs,

        #[command(flatten)]
        strategy: StrategyArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if the count is wrong
        #[arg(long, env = "TRAIN_COUNTER_ERROR_ON_MISS")]
        error_on_miss: bool,
    },

    /// Count many random trains and report accuracy
    ///
    /// Runs the chosen strategy over a batch of seeded trains and reports
    /// how many were counted correctly, how many were miscounted, and how
    /// many ran out of reads.
    #[command(
        long_about = "Run the selected strategy over a batch of random trains. Each trial draws a \
                      length from the car range and a light for every car from a stream derived \
                      from the seed and the trial number, so the batch is reproducible and can \
                      run in parallel. The report shows accuracy and the average number of reads \
                      per car."
    )]
    Trials {
        #[command(flatten)]
        train: TrainArgs,

        #[command(flatten)]
        strategy: StrategyArgs,

        #[command(flatten)]
        batch: BatchArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if any train is miscounted
        #[arg(long, env = "TRAIN_COUNTER_ERROR_ON_MISS")]
        error_on_miss: bool,
    },

    /// Run every strategy over the same trains
    ///
    /// Puts the probabilistic strategy and the legacy heuristic on identical
    /// trains so their accuracy can be compared directly.
    #[command(
        long_about = "Run every available strategy over the same batch of random trains and \
                      report each one. The legacy heuristic is known to miscount trains with \
                      long runs of the same light and to stall on trains shorter than its \
                      minimum; this command makes those failures visible next to the \
                      probabilistic strategy."
    )]
    Compare {
        #[command(flatten)]
        train: TrainArgs,

        #[command(flatten)]
        batch: BatchArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if any strategy miscounts any train
        #[arg(long, env = "TRAIN_COUNTER_ERROR_ON_MISS")]
        error_on_miss: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}
