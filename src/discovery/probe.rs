use crate::core::{Discovery, Light};
use crate::error::TrainError;
use crate::train::CarAccess;

/// Metered access to a train for one discovery run
///
/// Counts every read and flip, and refuses further reads once the optional
/// step limit is spent.
pub(crate) struct Probe<'a, C: CarAccess + ?Sized> {
    train: &'a mut C,
    strategy: &'static str,
    step_limit: Option<u64>,
    reads: u64,
    flips: u64,
}

impl<'a, C: CarAccess + ?Sized> Probe<'a, C> {
    pub(crate) fn new(train: &'a mut C, strategy: &'static str, step_limit: Option<u64>) -> Self {
        Self {
            train,
            strategy,
            step_limit,
            reads: 0,
            flips: 0,
        }
    }

    pub(crate) fn read(&mut self, position: i64) -> Result<Light, TrainError> {
        if let Some(limit) = self.step_limit.filter(|limit| self.reads >= *limit) {
            return Err(TrainError::StepLimitExceeded {
                strategy: self.strategy.to_string(),
                limit,
            });
        }
        self.reads += 1;
        Ok(self.train.light(position))
    }

    pub(crate) fn flip(&mut self, position: i64) {
        self.flips += 1;
        self.train.flip(position);
    }

    pub(crate) fn finish(
        self,
        length: u64,
        rejected_candidates: u64,
        confirmation_length: u32,
    ) -> Discovery {
        Discovery {
            length,
            reads: self.reads,
            flips: self.flips,
            rejected_candidates,
            confirmation_length,
        }
    }
}
