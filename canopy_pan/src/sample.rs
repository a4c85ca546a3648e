// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Phase of a pan gesture sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// The gesture was recognized and started delivering samples.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer lifted normally.
    Ended,
    /// The gesture was cancelled by the system.
    Cancelled,
    /// The gesture failed to complete.
    Failed,
}

impl PanPhase {
    /// Returns `true` for the phases that end a gesture.
    ///
    /// A terminal sample triggers partial-scroll resolution regardless of how
    /// the gesture ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// One sample of a pan gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSample {
    /// Cumulative translation since the gesture began.
    pub translation: Vec2,
    /// Instantaneous pointer velocity.
    pub velocity: Vec2,
    /// Phase this sample was delivered in.
    pub phase: PanPhase,
}

/// Whether a gesture with this velocity qualifies as a vertical scroll.
///
/// The vertical component has to strictly dominate; diagonal ties are left to
/// whatever other recognizer wants them.
#[must_use]
pub fn is_vertical(velocity: Vec2) -> bool {
    velocity.y.abs() > velocity.x.abs()
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{PanPhase, is_vertical};

    #[test]
    fn terminal_phases() {
        assert!(!PanPhase::Began.is_terminal());
        assert!(!PanPhase::Changed.is_terminal());
        assert!(PanPhase::Ended.is_terminal());
        assert!(PanPhase::Cancelled.is_terminal());
        assert!(PanPhase::Failed.is_terminal());
    }

    #[test]
    fn vertical_dominance_is_strict() {
        assert!(is_vertical(Vec2::new(2.0, -80.0)));
        assert!(is_vertical(Vec2::new(-3.0, 5.0)));
        assert!(!is_vertical(Vec2::new(80.0, 2.0)));
        // A perfect diagonal is not a vertical scroll.
        assert!(!is_vertical(Vec2::new(10.0, -10.0)));
        assert!(!is_vertical(Vec2::ZERO));
    }
}
