use crate::*;
use std::time::Duration;

/// Tunables of an [`Agent`](super::Agent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// UCT exploration constant
    pub exploration: Utility,
    /// carved out of every time budget before the search starts
    pub margin: Duration,
    /// fixed seed for reproducible play, OS entropy otherwise
    pub seed: Option<u64>,
    /// stop after this many iterations even if time remains
    pub iterations: Option<usize>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            exploration: EXPLORATION,
            margin: SAFETY_MARGIN,
            seed: None,
            iterations: None,
        }
    }
}

impl AgentConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
    pub fn capped(self, iterations: usize) -> Self {
        Self {
            iterations: Some(iterations),
            ..self
        }
    }
}
