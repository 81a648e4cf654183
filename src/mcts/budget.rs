use std::time::Duration;
use std::time::Instant;

/// When to stop searching.
///
/// The deadline is polled cooperatively: at the top of every iteration,
/// at every step of the selection descent and at every step of a rollout.
/// The optional iteration cap is only checked between iterations and
/// makes searches reproducible under a fixed seed.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    deadline: Instant,
    iterations: Option<usize>,
}

impl Budget {
    pub fn until(deadline: Instant) -> Self {
        Self {
            deadline,
            iterations: None,
        }
    }
    pub fn within(duration: Duration) -> Self {
        Self::until(Instant::now() + duration)
    }
    pub fn capped(self, iterations: usize) -> Self {
        Self {
            iterations: Some(iterations),
            ..self
        }
    }
    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
    /// no further iteration may start
    pub fn exhausted(&self, done: usize) -> bool {
        self.expired() || self.iterations.is_some_and(|cap| done >= cap)
    }
}
