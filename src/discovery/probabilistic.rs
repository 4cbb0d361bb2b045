//! Marker-and-flip walk with a probabilistic confirmation pass

use super::LengthDiscoverer;
use super::probe::Probe;
use crate::constants::discovery::{BASE_CONFIRMATIONS, CONFIRMATIONS_PER_BIT};
use crate::core::{Discovery, Light};
use crate::error::TrainError;
use crate::train::CarAccess;

/// Counts cars by walking forward and marking every car it passes
///
/// Car 0 fixes the reference light. Walking from position 1, any car still
/// showing the reference light gets flipped and becomes a candidate length.
/// A candidate is accepted only once the next `k` cars all show the marked
/// light, with `k = 10 + 2 * ceil(log2(candidate))`. A wrong candidate
/// survives that check with probability at most `2^-k`; the true length
/// always survives it, since the cars after it are the ones already walked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbabilisticDiscoverer;

impl ProbabilisticDiscoverer {
    pub fn new() -> Self {
        Self
    }

    /// Confirmation reads required before `candidate` is accepted
    pub fn confirmation_length(candidate: u64) -> u32 {
        BASE_CONFIRMATIONS + CONFIRMATIONS_PER_BIT * ceil_log2(candidate)
    }

    /// Upper bound on the chance that a run over `length` cars settles on a
    /// shorter, wrong length
    ///
    /// Each position `c` below the true length is a candidate with
    /// probability 1/2 and then survives confirmation with probability
    /// `2^-k(c)`, so the bound sums `2^-(k(c) + 1)` over those positions.
    pub fn false_positive_bound(length: u64) -> f64 {
        (1..length)
            .map(|candidate| {
                let exponent = Self::confirmation_length(candidate) + 1;
                0.5_f64.powi(exponent as i32)
            })
            .sum()
    }

    fn confirm<C: CarAccess + ?Sized>(
        probe: &mut Probe<'_, C>,
        candidate: i64,
        confirmation_length: u32,
        marked: Light,
    ) -> Result<bool, TrainError> {
        for offset in 1..=i64::from(confirmation_length) {
            if probe.read(candidate + offset)? != marked {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// `ceil(log2(n))`, taken as 0 for `n <= 1`
fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

impl LengthDiscoverer for ProbabilisticDiscoverer {
    fn name(&self) -> &'static str {
        "probabilistic"
    }

    fn discover<C: CarAccess + ?Sized>(
        &self,
        train: &mut C,
        step_limit: Option<u64>,
    ) -> Result<Discovery, TrainError> {
        let mut probe = Probe::new(train, self.name(), step_limit);

        let reference = probe.read(0)?;
        let marked = reference.flipped();
        let mut rejected_candidates = 0;
        let mut position: i64 = 1;

        loop {
            if probe.read(position)? == reference {
                probe.flip(position);

                let candidate = position.unsigned_abs();
                let confirmation_length = Self::confirmation_length(candidate);
                if Self::confirm(&mut probe, position, confirmation_length, marked)? {
                    return Ok(probe.finish(candidate, rejected_candidates, confirmation_length));
                }
                rejected_candidates += 1;
            }
            position += 1;
        }
    }
}
