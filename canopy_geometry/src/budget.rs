// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Scroll resistance budget.
///
/// A budget absorbs the first points of a drag before the bar starts moving,
/// modeling scroll "slack". Collapsing drags spend it down; once it crosses
/// zero, only the overflow past the exhausted budget moves the bar. Expanding
/// drags also draw it down (the deltas are negative) and are skipped while it
/// is still positive and the content is scrolled past the configured limit.
/// Only reaching a rest state refills it.
///
/// The two directions deliberately do not mirror each other; the asymmetry is
/// part of the observable scroll feel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayBudget {
    remaining: f64,
    limit: f64,
}

impl DelayBudget {
    /// Creates a full budget with the given limit.
    ///
    /// A negative limit is treated as zero (no resistance).
    #[must_use]
    pub fn new(limit: f64) -> Self {
        let limit = limit.max(0.0);
        Self {
            remaining: limit,
            limit,
        }
    }

    /// Returns the configured resistance limit.
    #[must_use]
    pub fn limit(self) -> f64 {
        self.limit
    }

    /// Returns the remaining resistance. May be negative after the budget has
    /// been overdrawn by a collapsing drag.
    #[must_use]
    pub fn remaining(self) -> f64 {
        self.remaining
    }

    /// Restores the full resistance limit.
    ///
    /// Called when the bar reaches either rest state.
    pub fn refill(&mut self) {
        self.remaining = self.limit;
    }

    /// Spends the budget against a collapsing delta and returns the portion
    /// of the delta that should move the bar.
    ///
    /// While the budget stays positive the whole delta is absorbed and `0.0`
    /// is returned. The delta that first crosses zero moves the bar only by
    /// the overflow past the exhausted budget.
    pub fn consume_collapse(&mut self, delta: f64) -> f64 {
        let before = self.remaining;
        self.remaining -= delta;
        if self.remaining > 0.0 {
            return 0.0;
        }
        delta.min(delta - before)
    }

    /// Draws the budget down by an expanding (negative) delta and reports
    /// whether the step may proceed.
    ///
    /// The step is skipped only while the budget is positive *and* the content
    /// offset sits past the configured limit; near the top of the content the
    /// bar expands without resistance.
    pub fn consume_expand(&mut self, delta: f64, content_offset_y: f64) -> bool {
        self.remaining += delta;
        !(self.remaining > 0.0 && self.limit < content_offset_y)
    }

    /// Snapshot of the current budget state for debugging and inspection.
    #[must_use]
    pub fn debug_info(self) -> DelayBudgetDebugInfo {
        DelayBudgetDebugInfo {
            remaining: self.remaining,
            limit: self.limit,
        }
    }
}

/// Debug snapshot of a [`DelayBudget`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayBudgetDebugInfo {
    /// Remaining resistance; negative once overdrawn.
    pub remaining: f64,
    /// Configured resistance limit.
    pub limit: f64,
}
