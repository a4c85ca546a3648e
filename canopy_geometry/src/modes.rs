// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Position of a collapsing bar relative to its travel range.
///
/// `Expanded` and `Collapsed` are the stable rest states; `Scrolling` only
/// exists while a gesture or a snap animation is moving the bar between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BarState {
    /// The bar rests at its fully visible offset.
    #[default]
    Expanded,
    /// The bar rests fully off-screen above the content.
    Collapsed,
    /// The bar is somewhere between its rest offsets.
    Scrolling,
}

/// Scroll direction associated with a collapse or a follower translation.
///
/// Used in two places: as the session-wide collapse direction (which content
/// scroll direction hides the bar) and as the per-follower translation
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Follow the bar's motion (tab bars and other bottom-anchored surfaces
    /// move down and away); as a collapse direction, scrolling the content
    /// down hides the bar.
    #[default]
    ScrollDown,
    /// Mirror the bar's motion (top-anchored surfaces slide up with the bar);
    /// as a collapse direction, scrolling the content up hides the bar.
    ScrollUp,
}

impl ScrollDirection {
    /// Returns the signed factor applied to deltas moving in this direction.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::ScrollDown => 1.0,
            Self::ScrollUp => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BarState, ScrollDirection};

    #[test]
    fn defaults_match_session_start() {
        assert_eq!(BarState::default(), BarState::Expanded);
        assert_eq!(ScrollDirection::default(), ScrollDirection::ScrollDown);
    }

    #[test]
    fn direction_factors_are_signed_units() {
        assert_eq!(ScrollDirection::ScrollDown.factor(), 1.0);
        assert_eq!(ScrollDirection::ScrollUp.factor(), -1.0);
    }
}
