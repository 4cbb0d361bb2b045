//! # Length Discovery Module
//!
//! This module implements the strategies that count the cars of a train
//! through [`CarAccess`] alone: read a light, flip a light, nothing else.
//!
//! ## Algorithm
//!
//! Both strategies take the light of car 0 as a reference and walk forward
//! from car 1, flipping every car that still shows the reference light. Once
//! the walk has gone all the way around, every car it meets is marked, and
//! the first car to show the reference light again is car 0 itself at
//! position N. The difficulty is that a car can show the reference light by
//! chance before that, so every such position is only a *candidate*.
//!
//! - **ProbabilisticDiscoverer** checks the next
//!   `k = 10 + 2 * ceil(log2(candidate))` cars and accepts the candidate only
//!   if all of them are marked.
//! - **LegacyDiscoverer** accepts a candidate of at least 9 once it is
//!   followed by `candidate - 1` marked cars. It gets fooled by long random
//!   runs and is kept so the failure stays reproducible.
//!
//! ## Example
//!
//! ```
//! use train_counter::core::Light::{Off, On};
//! use train_counter::discovery::{LengthDiscoverer, ProbabilisticDiscoverer};
//! use train_counter::train::Train;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut train = Train::from_lights(vec![On, Off, Off, On, Off, On, On, Off, On, Off, Off, On])?;
//!
//! let discovery = ProbabilisticDiscoverer::new().discover(&mut train, None)?;
//! assert_eq!(discovery.length, 12);
//! assert_eq!(discovery.confirmation_length, 18);
//! # Ok(())
//! # }
//! ```

mod legacy;
mod probabilistic;
mod probe;

pub use legacy::LegacyDiscoverer;
pub use probabilistic::ProbabilisticDiscoverer;

use crate::constants::discovery::{LEGACY_MINIMUM_CARS, LEGACY_STEPS_PER_CAR};
use crate::core::Discovery;
use crate::error::TrainError;
use crate::train::CarAccess;

/// A way of counting the cars of a train through [`CarAccess`]
pub trait LengthDiscoverer {
    /// Short name used in reports and errors
    fn name(&self) -> &'static str;

    /// Walk the train until a length is accepted
    ///
    /// The train is mutated. With `step_limit` set, the run stops with
    /// [`TrainError::StepLimitExceeded`] once that many reads are spent;
    /// with `None` it runs until it accepts a length.
    fn discover<C: CarAccess + ?Sized>(
        &self,
        train: &mut C,
        step_limit: Option<u64>,
    ) -> Result<Discovery, TrainError>;
}

/// Selectable discovery strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    Probabilistic,
    Legacy,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Probabilistic, Strategy::Legacy];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Probabilistic => ProbabilisticDiscoverer::new().name(),
            Strategy::Legacy => LegacyDiscoverer::default().name(),
        }
    }

    /// Read cap applied when the user does not pass one
    ///
    /// The probabilistic walk always terminates. The legacy heuristic spins
    /// forever on trains shorter than its minimum, so it gets a budget
    /// proportional to the longest train in play.
    pub fn default_step_limit(self, max_cars: usize) -> Option<u64> {
        match self {
            Strategy::Probabilistic => None,
            Strategy::Legacy => {
                let cars = (max_cars as u64).max(LEGACY_MINIMUM_CARS.unsigned_abs());
                Some(cars.saturating_mul(LEGACY_STEPS_PER_CAR))
            }
        }
    }

    pub fn discover<C: CarAccess + ?Sized>(
        self,
        train: &mut C,
        step_limit: Option<u64>,
    ) -> Result<Discovery, TrainError> {
        match self {
            Strategy::Probabilistic => ProbabilisticDiscoverer::new().discover(train, step_limit),
            Strategy::Legacy => LegacyDiscoverer::default().discover(train, step_limit),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::Light::{Off, On};
    use crate::train::Train;

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::Probabilistic.to_string(), "probabilistic");
        assert_eq!(Strategy::Legacy.to_string(), "legacy");
    }

    #[test]
    fn test_default_step_limits() {
        assert_eq!(Strategy::Probabilistic.default_step_limit(100), None);
        assert_eq!(Strategy::Legacy.default_step_limit(100), Some(800));
        assert_eq!(Strategy::Legacy.default_step_limit(2), Some(72));
    }

    #[test]
    fn test_strategies_agree_on_a_plain_train() {
        let lights: Vec<_> = (0..24).map(|i| if i % 3 == 0 { On } else { Off }).collect();
        for strategy in Strategy::ALL {
            let mut train = Train::from_lights(lights.clone()).unwrap();
            let discovery = strategy.discover(&mut train, None).unwrap();
            assert_eq!(discovery.length, 24, "strategy {strategy}");
        }
    }
}
