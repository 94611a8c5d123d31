//! Batch-wide budget for auto-applied renames.
//!
//! One batch pass over a project may only apply so many fixes. The budget
//! is owned by the orchestrator and shared across however many worker
//! threads the batch uses; the core sees it only as a yes/no gate.
//! Exhaustion withholds further fixes, it never fails them.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default cap on fixes applied in one batch pass.
pub const DEFAULT_MAX_RENAMES: usize = 1000;

/// Caps how many fixes one batch pass may apply.
#[derive(Debug)]
pub struct RenameBudget {
    max: usize,
    used: AtomicUsize,
}

impl Default for RenameBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RENAMES)
    }
}

impl RenameBudget {
    /// Creates a budget allowing `max` fixes.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self {
            max,
            used: AtomicUsize::new(0),
        }
    }

    /// Claims one slot; `false` once the budget is exhausted.
    pub fn try_acquire(&self) -> bool {
        self.used.fetch_add(1, Ordering::Relaxed) < self.max
    }

    /// Number of slots claimed so far, capped at the maximum.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used.load(Ordering::Relaxed).min(self.max)
    }

    /// Slots still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max - self.used()
    }
}
