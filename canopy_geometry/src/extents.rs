// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::modes::BarState;

/// Multiplier turning a snap distance ratio into an animation duration.
const SNAP_DURATION_FACTOR: f64 = 0.2;

/// Upper bound on the duration of a snap animation, in seconds.
const SNAP_DURATION_CAP: f64 = 0.2;

/// Vertical travel range of a collapsing bar.
///
/// `BarExtents` is rebuilt from live host geometry on every event rather than
/// cached: the bar height and the status-bar inset both change under rotation
/// and in-call status bars, and everything else here derives from them.
///
/// The bar offset is the vertical position of the bar's frame origin. It
/// rests at [`expanded_offset`](Self::expanded_offset) (the status-bar inset)
/// when fully visible and travels down to
/// [`collapsed_offset`](Self::collapsed_offset) (minus the bar height) when
/// fully hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarExtents {
    bar_height: f64,
    status_bar_height: f64,
}

impl BarExtents {
    /// Creates extents for a bar of the given frame height under the given
    /// status-bar inset.
    ///
    /// Negative inputs are treated as zero.
    #[must_use]
    pub fn new(bar_height: f64, status_bar_height: f64) -> Self {
        Self {
            bar_height: bar_height.max(0.0),
            status_bar_height: status_bar_height.max(0.0),
        }
    }

    /// Returns the bar frame height.
    #[must_use]
    pub fn bar_height(self) -> f64 {
        self.bar_height
    }

    /// Returns the status-bar inset above the bar.
    #[must_use]
    pub fn status_bar_height(self) -> f64 {
        self.status_bar_height
    }

    /// Maximum collapse distance below the screen edge; equals the bar height.
    #[must_use]
    pub fn delta_limit(self) -> f64 {
        self.bar_height
    }

    /// Offset of the fully expanded rest position.
    #[must_use]
    pub fn expanded_offset(self) -> f64 {
        self.status_bar_height
    }

    /// Offset of the fully collapsed rest position.
    #[must_use]
    pub fn collapsed_offset(self) -> f64 {
        -self.delta_limit()
    }

    /// Total distance between the two rest positions.
    #[must_use]
    pub fn travel(self) -> f64 {
        self.expanded_offset() - self.collapsed_offset()
    }

    /// Clamps an offset into the travel range.
    #[must_use]
    pub fn clamp_offset(self, offset: f64) -> f64 {
        offset.clamp(self.collapsed_offset(), self.expanded_offset())
    }

    /// Returns the rest state an offset corresponds to, or
    /// [`BarState::Scrolling`] for anything in between.
    #[must_use]
    pub fn state_for_offset(self, offset: f64) -> BarState {
        if offset >= self.expanded_offset() {
            BarState::Expanded
        } else if offset <= self.collapsed_offset() {
            BarState::Collapsed
        } else {
            BarState::Scrolling
        }
    }

    /// Content alpha for the given bar offset.
    ///
    /// Fades from `1.0` at the expanded rest offset down to `0.0` when fully
    /// collapsed. A degenerate zero-height bar reads as fully visible.
    #[must_use]
    pub fn content_alpha(self, offset: f64) -> f64 {
        if self.bar_height <= 0.0 {
            return 1.0;
        }
        ((offset + self.delta_limit()) / self.bar_height).clamp(0.0, 1.0)
    }

    /// Offset below which a released gesture snaps the bar closed.
    ///
    /// The threshold sits half a bar height below the expanded rest offset.
    #[must_use]
    pub fn snap_threshold(self) -> f64 {
        self.status_bar_height - self.bar_height / 2.0
    }

    /// Resolves a mid-travel offset to the rest state a released gesture
    /// should settle into.
    ///
    /// The threshold itself belongs to the expand side.
    #[must_use]
    pub fn snap_target(self, offset: f64) -> BarState {
        if offset >= self.snap_threshold() {
            BarState::Expanded
        } else {
            BarState::Collapsed
        }
    }

    /// Signed scroll delta that moves an offset to the given rest state.
    ///
    /// Positive deltas collapse. Feeding the result through
    /// [`scroll_step`](crate::scroll_step) with the delay ignored lands the
    /// bar exactly on the rest offset.
    #[must_use]
    pub fn snap_delta(self, offset: f64, target: BarState) -> f64 {
        match target {
            BarState::Collapsed => offset - self.collapsed_offset(),
            _ => offset - self.expanded_offset(),
        }
    }

    /// Duration of the snap animation covering the given delta.
    ///
    /// Scales with the remaining distance, at 0.2 seconds per half bar height
    /// of travel, capped at 0.2 seconds. Longer partial scrolls take longer to
    /// resolve; tiny ones settle almost immediately.
    #[must_use]
    pub fn snap_duration(self, delta: f64) -> Duration {
        let half = self.bar_height / 2.0;
        if half <= 0.0 {
            return Duration::ZERO;
        }
        let seconds = (delta / half * SNAP_DURATION_FACTOR).abs().min(SNAP_DURATION_CAP);
        if seconds.is_finite() {
            Duration::from_secs_f64(seconds)
        } else {
            Duration::ZERO
        }
    }
}
