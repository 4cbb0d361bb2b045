//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

/// State of the light in a single car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Light {
    On,
    Off,
}

impl Light {
    /// The opposite state
    pub fn flipped(self) -> Self {
        match self {
            Light::On => Light::Off,
            Light::Off => Light::On,
        }
    }
}

impl From<bool> for Light {
    fn from(on: bool) -> Self {
        if on { Light::On } else { Light::Off }
    }
}

impl std::fmt::Display for Light {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Light::On => write!(f, "on"),
            Light::Off => write!(f, "off"),
        }
    }
}

/// What a finished discovery run found, and what it cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discovery {
    /// The length the strategy settled on
    pub length: u64,
    /// Number of `light` calls made
    pub reads: u64,
    /// Number of `flip` calls made
    pub flips: u64,
    /// Candidates the strategy considered and threw away
    pub rejected_candidates: u64,
    /// Confirmation reads demanded of the accepted candidate
    pub confirmation_length: u32,
}

/// Classification of a single trial by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
    StepLimitExceeded,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Correct => write!(f, "correct"),
            Verdict::Incorrect => write!(f, "incorrect"),
            Verdict::StepLimitExceeded => write!(f, "step limit exceeded"),
        }
    }
}

/// One simulated train and how a strategy fared on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialOutcome {
    pub index: usize,
    pub true_length: usize,
    pub discovered_length: Option<u64>,
    pub verdict: Verdict,
    pub reads: u64,
    pub flips: u64,
    pub rejected_candidates: u64,
}

impl TrialOutcome {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped_is_an_involution() {
        assert_eq!(Light::On.flipped(), Light::Off);
        assert_eq!(Light::Off.flipped(), Light::On);
        assert_eq!(Light::On.flipped().flipped(), Light::On);
    }

    #[test]
    fn test_light_from_bool() {
        assert_eq!(Light::from(true), Light::On);
        assert_eq!(Light::from(false), Light::Off);
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        let json = serde_json::to_string(&Verdict::StepLimitExceeded).unwrap();
        assert_eq!(json, "\"step_limit_exceeded\"");
    }
}
