// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-pumped animation of programmatic and snap transitions.
//!
//! A session has no clock of its own; the host calls
//! [`BarSession::tick`](crate::BarSession::tick) with elapsed time and the
//! active [`Slide`] interpolates the bar offset between two rest positions.
//! Logical completion — terminal state, budget refill, input re-enable —
//! happens inside the completing tick, never in the call that started the
//! slide.

use core::time::Duration;

use canopy_geometry::BarState;

/// Interpolation curve for slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-velocity interpolation.
    #[default]
    Linear,
    /// Smooth acceleration and deceleration.
    EaseInOut,
}

impl Easing {
    /// Maps a progress fraction in `[0, 1]` through the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// One in-flight animated transition of the bar offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Slide {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
    /// State committed when the slide completes.
    pub(crate) target: BarState,
    /// Whether applied deltas also nudge the content offset.
    pub(crate) compensate: bool,
    /// Whether the session releases its binding once the slide completes.
    pub(crate) detach_when_done: bool,
}

impl Slide {
    pub(crate) fn new(
        from: f64,
        to: f64,
        duration: Duration,
        easing: Easing,
        target: BarState,
        compensate: bool,
    ) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
            target,
            compensate,
            detach_when_done: false,
        }
    }

    /// Advances the slide and returns the interpolated bar offset plus
    /// whether the slide has finished.
    pub(crate) fn advance(&mut self, dt: Duration) -> (f64, bool) {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return (self.to, true);
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let position = self.from + (self.to - self.from) * self.easing.apply(t);
        (position, false)
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use canopy_geometry::BarState;

    use super::{Easing, Slide};

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            // Out-of-range progress clamps instead of extrapolating.
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_and_slow_at_the_ends() {
        let curve = Easing::EaseInOut;
        assert!(curve.apply(0.1) < 0.1);
        assert!(curve.apply(0.9) > 0.9);
        let mid = curve.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn slide_interpolates_and_completes() {
        let mut slide = Slide::new(
            20.0,
            -44.0,
            Duration::from_millis(100),
            Easing::Linear,
            BarState::Collapsed,
            true,
        );
        let (halfway, done) = slide.advance(Duration::from_millis(50));
        assert!(!done);
        assert!((halfway - (20.0 + (-64.0) * 0.5)).abs() < 1e-9);

        let (end, done) = slide.advance(Duration::from_millis(50));
        assert!(done);
        assert_eq!(end, -44.0);
    }

    #[test]
    fn zero_duration_slide_finishes_immediately() {
        let mut slide = Slide::new(
            0.0,
            20.0,
            Duration::ZERO,
            Easing::Linear,
            BarState::Expanded,
            false,
        );
        let (position, done) = slide.advance(Duration::ZERO);
        assert!(done);
        assert_eq!(position, 20.0);
    }

    #[test]
    fn overshooting_ticks_clamp_to_the_target() {
        let mut slide = Slide::new(
            20.0,
            -44.0,
            Duration::from_millis(100),
            Easing::EaseInOut,
            BarState::Collapsed,
            true,
        );
        let (position, done) = slide.advance(Duration::from_secs(5));
        assert!(done);
        assert_eq!(position, -44.0);
    }
}
