// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host event plumbing: subscriptions and orientation changes.

bitflags::bitflags! {
    /// Event subscriptions a session holds while following a scroll view.
    ///
    /// The set is installed as a unit by [`BarSession::follow`] and released
    /// as a unit on teardown; an event arriving without its bit set is
    /// ignored. Hosts that multiplex notification centers can mirror this set
    /// when registering, but the session enforces it regardless.
    ///
    /// [`BarSession::follow`]: crate::BarSession::follow
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Subscriptions: u8 {
        /// Pan gesture samples.
        const PAN = 0b0000_0001;
        /// Device orientation changes.
        const ORIENTATION = 0b0000_0010;
        /// App active/resign lifecycle notifications.
        const LIFECYCLE = 0b0000_0100;
    }
}

impl Default for Subscriptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Device orientation as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Upright portrait.
    #[default]
    Portrait,
    /// Upside-down portrait.
    PortraitUpsideDown,
    /// Landscape, device rotated left.
    LandscapeLeft,
    /// Landscape, device rotated right.
    LandscapeRight,
}

impl Orientation {
    /// Returns `true` for the two landscape orientations.
    #[must_use]
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}

/// Whether a rotation from `from` to `to` forces the bar open.
///
/// A redundant rotation (same orientation reported again) and any crossing of
/// the portrait/landscape axis both re-show the bar; flipping between the two
/// orientations of the same axis does not.
#[must_use]
pub fn rotation_forces_show(from: Orientation, to: Orientation) -> bool {
    from == to || from.is_landscape() != to.is_landscape()
}
