use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TrainError {
    #[error("A train needs at least one car")]
    #[diagnostic(
        code(train_counter::empty_train),
        help("Trains are built with a length of 1 or more")
    )]
    EmptyTrain,

    #[error("Invalid car range {min}..={max}")]
    #[diagnostic(
        code(train_counter::invalid_car_range),
        help("Use --min-cars >= 1 and --max-cars >= --min-cars")
    )]
    InvalidCarRange { min: usize, max: usize },

    #[error("The {strategy} strategy gave up after {limit} reads")]
    #[diagnostic(
        code(train_counter::step_limit_exceeded),
        help("Raise --max-steps, or check whether the strategy can terminate on this train")
    )]
    StepLimitExceeded { strategy: String, limit: u64 },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(train_counter::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(train_counter::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(train_counter::io_error),
        help("Check that stdout and stderr are writable")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(train_counter::config_error),
        help("Check your command arguments and environment variables")
    )]
    ConfigurationError { message: String },
}
