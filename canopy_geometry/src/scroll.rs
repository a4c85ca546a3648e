// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::budget::DelayBudget;
use crate::extents::BarExtents;
use crate::modes::BarState;

/// Per-call context consulted before a collapsing step is allowed to move the
/// bar.
///
/// Rebuilt from live scroll-view geometry on every event, like
/// [`BarExtents`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollGate {
    /// Whether the content is entirely visible without scrolling.
    pub content_fits: bool,
    /// Whether the bar may collapse even when the content fits.
    pub collapse_when_content_fits: bool,
    /// Current vertical content offset of the scroll view.
    pub content_offset_y: f64,
}

/// Result of one [`scroll_step`] computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    /// Bar offset after the step.
    pub offset: f64,
    /// The portion of the delta that actually moved the bar, after delay
    /// consumption and clamping. Zero for a no-op step.
    pub applied: f64,
    /// Bar state after the step.
    pub state: BarState,
}

impl ScrollStep {
    fn unchanged(offset: f64, state: BarState) -> Self {
        Self {
            offset,
            applied: 0.0,
            state,
        }
    }
}

/// Applies a signed scroll delta to a bar offset.
///
/// Positive deltas collapse, negative deltas expand. Unless `ignore_delay` is
/// set, the delta is first run through `budget`; the budget also gates
/// expansion depending on the content offset in `gate`. A delta that would
/// overshoot either rest offset is shrunk so the bar lands exactly on it, and
/// reaching a rest offset refills the budget.
///
/// The returned [`ScrollStep::applied`] is what callers forward to follower
/// translation and content-offset compensation; a no-op step reports the
/// incoming offset and state untouched.
pub fn scroll_step(
    extents: BarExtents,
    offset: f64,
    state: BarState,
    delta: f64,
    ignore_delay: bool,
    budget: &mut DelayBudget,
    gate: ScrollGate,
) -> ScrollStep {
    if delta > 0.0 {
        let mut delta = delta;
        if !ignore_delay {
            delta = budget.consume_collapse(delta);
            if delta <= 0.0 {
                return ScrollStep::unchanged(offset, state);
            }
        }

        // Fully visible content gives the gesture nothing to scroll; keep the
        // bar put unless configured otherwise or already on its way out.
        if gate.content_fits && !gate.collapse_when_content_fits && state != BarState::Collapsed {
            return ScrollStep::unchanged(offset, state);
        }

        if offset - delta < extents.collapsed_offset() {
            delta = offset - extents.collapsed_offset();
        }
        let offset = offset - delta;
        let state = if offset <= extents.collapsed_offset() {
            budget.refill();
            BarState::Collapsed
        } else {
            BarState::Scrolling
        };
        return ScrollStep {
            offset,
            applied: delta,
            state,
        };
    }

    if delta < 0.0 {
        let mut delta = delta;
        if !ignore_delay && !budget.consume_expand(delta, gate.content_offset_y) {
            return ScrollStep::unchanged(offset, state);
        }

        if offset - delta > extents.expanded_offset() {
            delta = offset - extents.expanded_offset();
        }
        let offset = offset - delta;
        let state = if offset >= extents.expanded_offset() {
            budget.refill();
            BarState::Expanded
        } else {
            BarState::Scrolling
        };
        return ScrollStep {
            offset,
            applied: delta,
            state,
        };
    }

    ScrollStep::unchanged(offset, state)
}

#[cfg(test)]
mod tests {
    use super::{BarExtents, BarState, DelayBudget, ScrollGate, ScrollStep, scroll_step};

    fn no_delay() -> DelayBudget {
        DelayBudget::new(0.0)
    }

    fn bare() -> BarExtents {
        BarExtents::new(44.0, 0.0)
    }

    fn run_stream(
        extents: BarExtents,
        budget: &mut DelayBudget,
        deltas: &[f64],
    ) -> (ScrollStep, BarState) {
        let mut offset = extents.expanded_offset();
        let mut state = BarState::Expanded;
        let mut last = ScrollStep {
            offset,
            applied: 0.0,
            state,
        };
        for &delta in deltas {
            last = scroll_step(
                extents,
                offset,
                state,
                delta,
                false,
                budget,
                ScrollGate::default(),
            );
            offset = last.offset;
            state = last.state;
        }
        (last, state)
    }

    #[test]
    fn delta_stream_walks_expanded_to_collapsed() {
        let extents = bare();
        let mut budget = no_delay();
        let mut offset = extents.expanded_offset();
        let mut state = BarState::Expanded;
        let mut seen = [BarState::Expanded; 5];
        for (i, delta) in [10.0, 10.0, 10.0, 10.0, 4.0].into_iter().enumerate() {
            let step = scroll_step(
                extents,
                offset,
                state,
                delta,
                false,
                &mut budget,
                ScrollGate::default(),
            );
            offset = step.offset;
            state = step.state;
            seen[i] = state;
        }
        assert_eq!(offset, -44.0);
        assert_eq!(
            seen,
            [
                BarState::Scrolling,
                BarState::Scrolling,
                BarState::Scrolling,
                BarState::Scrolling,
                BarState::Collapsed,
            ]
        );
    }

    #[test]
    fn collapse_never_overshoots() {
        let extents = bare();
        let mut budget = no_delay();
        let (last, state) = run_stream(extents, &mut budget, &[30.0, 30.0, 30.0]);
        assert_eq!(last.offset, extents.collapsed_offset());
        assert_eq!(state, BarState::Collapsed);
        // The clamped final step only applied what was left of the travel.
        assert_eq!(last.applied, 14.0);
    }

    #[test]
    fn collapse_with_status_bar_covers_the_longer_travel() {
        let extents = BarExtents::new(44.0, 20.0);
        let mut budget = no_delay();
        let (last, state) = run_stream(extents, &mut budget, &[40.0, 40.0]);
        assert_eq!(state, BarState::Collapsed);
        assert_eq!(last.offset, -44.0);
        assert_eq!(last.applied, 24.0);
    }

    #[test]
    fn expand_never_overshoots() {
        let extents = BarExtents::new(44.0, 20.0);
        let mut budget = no_delay();
        let step = scroll_step(
            extents,
            extents.collapsed_offset(),
            BarState::Collapsed,
            -500.0,
            false,
            &mut budget,
            ScrollGate::default(),
        );
        assert_eq!(step.offset, extents.expanded_offset());
        assert_eq!(step.state, BarState::Expanded);
        assert_eq!(step.applied, -64.0);
    }

    #[test]
    fn delay_budget_holds_then_releases_the_excess() {
        let extents = bare();
        let mut budget = DelayBudget::new(20.0);
        let start = extents.expanded_offset();

        let held = scroll_step(
            extents,
            start,
            BarState::Expanded,
            15.0,
            false,
            &mut budget,
            ScrollGate::default(),
        );
        assert_eq!(held.applied, 0.0);
        assert_eq!(held.offset, start);
        assert_eq!(held.state, BarState::Expanded);
        assert_eq!(budget.remaining(), 5.0);

        let moved = scroll_step(
            extents,
            held.offset,
            held.state,
            10.0,
            false,
            &mut budget,
            ScrollGate::default(),
        );
        assert_eq!(moved.applied, 5.0);
        assert_eq!(moved.offset, start - 5.0);
        assert_eq!(moved.state, BarState::Scrolling);
    }

    #[test]
    fn ignore_delay_bypasses_the_budget() {
        let extents = bare();
        let mut budget = DelayBudget::new(20.0);
        let step = scroll_step(
            extents,
            extents.expanded_offset(),
            BarState::Expanded,
            10.0,
            true,
            &mut budget,
            ScrollGate::default(),
        );
        assert_eq!(step.applied, 10.0);
        assert_eq!(budget.remaining(), 20.0);
    }

    #[test]
    fn fitting_content_keeps_the_bar_expanded() {
        let extents = bare();
        let mut budget = no_delay();
        let gate = ScrollGate {
            content_fits: true,
            ..ScrollGate::default()
        };
        let step = scroll_step(
            extents,
            extents.expanded_offset(),
            BarState::Expanded,
            10.0,
            false,
            &mut budget,
            gate,
        );
        assert_eq!(step.applied, 0.0);
        assert_eq!(step.state, BarState::Expanded);
    }

    #[test]
    fn fitting_content_may_collapse_when_configured() {
        let extents = bare();
        let mut budget = no_delay();
        let gate = ScrollGate {
            content_fits: true,
            collapse_when_content_fits: true,
            ..ScrollGate::default()
        };
        let step = scroll_step(
            extents,
            extents.expanded_offset(),
            BarState::Expanded,
            10.0,
            false,
            &mut budget,
            gate,
        );
        assert_eq!(step.applied, 10.0);
    }

    #[test]
    fn expansion_skipped_deep_in_the_content() {
        let extents = bare();
        let mut budget = DelayBudget::new(20.0);
        let gate = ScrollGate {
            content_offset_y: 500.0,
            ..ScrollGate::default()
        };
        let step = scroll_step(
            extents,
            -10.0,
            BarState::Scrolling,
            -5.0,
            false,
            &mut budget,
            gate,
        );
        assert_eq!(step.applied, 0.0);
        assert_eq!(step.offset, -10.0);
    }

    #[test]
    fn reaching_collapsed_refills_the_budget() {
        let extents = bare();
        let mut budget = DelayBudget::new(20.0);
        budget.consume_collapse(25.0);
        let step = scroll_step(
            extents,
            extents.expanded_offset(),
            BarState::Expanded,
            100.0,
            false,
            &mut budget,
            ScrollGate::default(),
        );
        assert_eq!(step.state, BarState::Collapsed);
        assert_eq!(budget.remaining(), 20.0);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let extents = bare();
        let mut budget = no_delay();
        let step = scroll_step(
            extents,
            -7.0,
            BarState::Scrolling,
            0.0,
            false,
            &mut budget,
            ScrollGate::default(),
        );
        assert_eq!(step.offset, -7.0);
        assert_eq!(step.applied, 0.0);
        assert_eq!(step.state, BarState::Scrolling);
    }
}
