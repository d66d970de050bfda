//! Search control: the wall-clock budget of one `go`.

use std::time::{Duration, Instant};

/// Decides when a search must stop.
///
/// The clock starts when the control is created. A control without a
/// budget never expires, which is how fixed-depth searches run.
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    budget: Option<Duration>,
}

impl SearchControl {
    /// Control for a search with no time limit.
    pub fn new_infinite() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    /// Control for a search that must stop once `budget` has elapsed.
    pub fn new_timed(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
        }
    }

    /// Return `true` once the budget, if any, has been used up.
    #[inline]
    pub fn expired(&self) -> bool {
        self.budget.is_some_and(|budget| self.start.elapsed() >= budget)
    }

    /// Elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
