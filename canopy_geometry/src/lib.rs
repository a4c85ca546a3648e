// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_geometry --heading-base-level=0

//! Canopy Geometry: collapse/expand math for scroll-coupled top bars.
//!
//! This crate provides small, headless models of the vertical geometry of a
//! collapsing navigation bar. It focuses on:
//! - The bar's travel range between its expanded and collapsed rest offsets.
//! - Scroll resistance ("delay") budgets that absorb the first points of a
//!   drag before the bar starts moving.
//! - Turning a signed scroll delta into a clamped bar movement and the
//!   resulting bar state.
//! - Content fade alpha derived from the bar offset.
//! - Snap resolution for gestures that end mid-travel.
//!
//! It does **not** own any view hierarchy, gesture recognition, or animation
//! clock. Callers are expected to:
//! - Read live bar/status-bar heights from their host toolkit each event and
//!   describe them as a [`BarExtents`].
//! - Feed normalized scroll deltas (for example from `canopy_pan`) into
//!   [`scroll_step`] and apply the returned offset to their bar surface.
//! - Resolve gesture-end positions with the snap helpers and drive the
//!   resulting animation at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_geometry::{BarExtents, BarState, DelayBudget, ScrollGate, scroll_step};
//!
//! // A 44-point bar with no status-bar inset and no scroll resistance.
//! let extents = BarExtents::new(44.0, 0.0);
//! let mut budget = DelayBudget::new(0.0);
//! let gate = ScrollGate::default();
//!
//! // Dragging the content up by 10 points collapses the bar by 10 points.
//! let step = scroll_step(
//!     extents,
//!     extents.expanded_offset(),
//!     BarState::Expanded,
//!     10.0,
//!     false,
//!     &mut budget,
//!     gate,
//! );
//! assert_eq!(step.offset, -10.0);
//! assert_eq!(step.state, BarState::Scrolling);
//!
//! // The bar never travels past its fully collapsed offset.
//! let step = scroll_step(extents, step.offset, step.state, 1_000.0, false, &mut budget, gate);
//! assert_eq!(step.offset, extents.collapsed_offset());
//! assert_eq!(step.state, BarState::Collapsed);
//! ```
//!
//! ## Design notes
//!
//! - Offsets grow downward: the bar rests at `status_bar_height` when fully
//!   expanded and at `-bar_height` when fully collapsed.
//! - Deltas are positive in the collapsing direction. A delta that would push
//!   the bar past either rest offset is shrunk so the bar lands exactly on it.
//! - All edge conditions degrade to no-op steps; nothing here panics or
//!   returns errors.
//!
//! This crate is `no_std`.

#![no_std]

mod budget;
mod extents;
mod modes;
mod scroll;

pub use budget::{DelayBudget, DelayBudgetDebugInfo};
pub use extents::BarExtents;
pub use modes::{BarState, ScrollDirection};
pub use scroll::{ScrollGate, ScrollStep, scroll_step};
