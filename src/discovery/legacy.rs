//! Minimum-length heuristic, kept to document how it fails

use super::LengthDiscoverer;
use super::probe::Probe;
use crate::constants::discovery::LEGACY_MINIMUM_CARS;
use crate::core::Discovery;
use crate::error::TrainError;
use crate::train::CarAccess;

/// Counts cars by trusting a long enough run of marked cars
///
/// Walks and marks exactly like [`super::ProbabilisticDiscoverer`], but the
/// most recent candidate is accepted as soon as it is at least
/// `minimum_cars` and it has been followed by `candidate - 1` marked cars in
/// a row. Random trains with long runs of the marked light fool it into
/// reporting a short length, and trains shorter than `minimum_cars` make it
/// walk forever.
#[derive(Debug, Clone, Copy)]
pub struct LegacyDiscoverer {
    minimum_cars: i64,
}

impl Default for LegacyDiscoverer {
    fn default() -> Self {
        Self::new(LEGACY_MINIMUM_CARS)
    }
}

impl LegacyDiscoverer {
    pub fn new(minimum_cars: i64) -> Self {
        Self { minimum_cars }
    }

    pub fn minimum_cars(&self) -> i64 {
        self.minimum_cars
    }
}

impl LengthDiscoverer for LegacyDiscoverer {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn discover<C: CarAccess + ?Sized>(
        &self,
        train: &mut C,
        step_limit: Option<u64>,
    ) -> Result<Discovery, TrainError> {
        let mut probe = Probe::new(train, self.name(), step_limit);

        let reference = probe.read(0)?;
        let mut candidate: Option<i64> = None;
        let mut consecutive_marked: i64 = 0;
        let mut rejected_candidates = 0;
        let mut position: i64 = 1;

        loop {
            if probe.read(position)? == reference {
                probe.flip(position);
                if candidate.is_some() {
                    rejected_candidates += 1;
                }
                candidate = Some(position);
                consecutive_marked = 0;
            } else {
                consecutive_marked += 1;
            }
            position += 1;

            if let Some(candidate) = candidate.filter(|c| *c >= self.minimum_cars) {
                if consecutive_marked == candidate - 1 {
                    let window = u32::try_from(candidate - 1).unwrap_or(u32::MAX);
                    return Ok(probe.finish(
                        candidate.unsigned_abs(),
                        rejected_candidates,
                        window,
                    ));
                }
            }
        }
    }
}
