//! Configuration constants for train-counter
//!
//! Defaults for the CLI flags and the tuning values of the discovery
//! strategies live here so the command layer and the tests agree on them.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the departing train animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🚃    ", // Just the car
        "🚃🚃   ", // Two cars
        "🚃🚃🚃  ", // Three cars
        "🚃🚃🚃🚃 ", // Four cars
        "🚂🚃🚃🚃 ", // Locomotive arrives
        " 🚂🚃🚃 ", // Leaving
        "  🚂🚃 ", // Almost gone
        "   🚂 ", // Gone
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Train generation defaults
pub mod train {
    /// Smallest train length drawn when `--min-cars` is not given
    pub const DEFAULT_MIN_CARS: usize = 9;

    /// Largest train length drawn when `--max-cars` is not given
    pub const DEFAULT_MAX_CARS: usize = 100;

    /// Number of trains simulated by `trials` and `compare`
    pub const DEFAULT_TRIALS: usize = 100;
}

/// Discovery strategy tuning
pub mod discovery {
    /// Confirmation reads required for every candidate, before the
    /// logarithmic term is added
    pub const BASE_CONFIRMATIONS: u32 = 10;

    /// Extra confirmation reads per bit of the candidate length
    pub const CONFIRMATIONS_PER_BIT: u32 = 2;

    /// Shortest train the legacy heuristic will ever report
    pub const LEGACY_MINIMUM_CARS: i64 = 9;

    /// Reads per car granted to the legacy heuristic before the harness
    /// reports it as stuck
    pub const LEGACY_STEPS_PER_CAR: u64 = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 8);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }

    #[test]
    fn test_train_defaults_form_a_valid_range() {
        assert!(train::DEFAULT_MIN_CARS >= 1);
        assert!(train::DEFAULT_MIN_CARS <= train::DEFAULT_MAX_CARS);
    }
}
