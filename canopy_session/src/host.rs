// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits the embedding toolkit implements for a session.
//!
//! A session never caches host geometry: heights, offsets, and insets are read
//! back through these traits on every event, so rotation and dynamic bar
//! sizing need no invalidation protocol.

use canopy_geometry::BarState;

/// Bar content that participates in the collapse fade.
///
/// The set of roles a session fades is declared in its configuration instead
/// of being discovered by walking the bar's subview tree; hosts map each role
/// onto whatever views render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeRole {
    /// The title view.
    Title,
    /// Leading/trailing button items.
    ButtonItems,
    /// The title's text color (fading text without hiding the title view).
    TitleColor,
    /// Custom views installed inside bar button items.
    CustomBarViews,
}

impl FadeRole {
    /// Every role, in the order hosts usually apply them.
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::ButtonItems,
        Self::TitleColor,
        Self::CustomBarViews,
    ];
}

/// Host-side view of the navigation bar a session drives.
pub trait BarSurface {
    /// Current vertical origin of the bar's frame.
    fn origin_y(&self) -> f64;

    /// Moves the bar's frame origin to the given vertical position.
    fn set_origin_y(&mut self, y: f64);

    /// Current height of the bar's frame, excluding the status-bar inset.
    fn frame_height(&self) -> f64;

    /// Current status-bar inset above the bar. Zero when hidden.
    fn status_bar_height(&self) -> f64;

    /// Height of a system search affordance currently expanding directly
    /// above the bar, or zero when none is.
    fn search_affordance_height(&self) -> f64 {
        0.0
    }

    /// Applies a fade alpha to the bar content rendering the given role.
    fn set_content_alpha(&mut self, role: FadeRole, alpha: f64);
}

/// Host-side view of the scrollable content a session follows.
pub trait ScrollSurface {
    /// Current vertical content offset.
    fn content_offset_y(&self) -> f64;

    /// Moves the vertical content offset (programmatic compensation while the
    /// bar shows or hides).
    fn set_content_offset_y(&mut self, y: f64);

    /// Total height of the scrollable content.
    fn content_height(&self) -> f64;

    /// Height of the viewport the content scrolls within.
    fn viewport_height(&self) -> f64;

    /// Top content inset.
    fn content_inset_top(&self) -> f64 {
        0.0
    }
}

/// Observer notified around bar state changes.
///
/// Both callbacks default to no-ops; sessions only call them when the state
/// actually changes value.
pub trait StateObserver {
    /// Called before a state change commits.
    fn will_change_state(&mut self, _new: BarState) {}

    /// Called after a state change commits.
    fn did_change_state(&mut self, _state: BarState) {}
}
