// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_pan --heading-base-level=0

//! Canopy Pan: turns raw pan-gesture samples into normalized scroll deltas.
//!
//! Hosts deliver a continuous stream of gesture samples — cumulative
//! translation, instantaneous velocity, and a phase — and a collapsing-bar
//! session needs a signed per-sample delta out of them. This crate owns that
//! conversion:
//!
//! - [`PanSample`] / [`PanPhase`]: the abstract drag-delta stream, independent
//!   of any gesture-recognizer framework.
//! - [`PanTracker`]: the baseline bookkeeping producing
//!   `(last − current) / speed_factor` deltas. Every sample becomes the new
//!   baseline, whether or not the caller ends up acting on the delta.
//! - [`is_vertical`]: the dominance check deciding whether a gesture should
//!   be treated as a vertical scroll at all.
//! - [`blocked_by_search_affordance`]: suppression of collapsing deltas while
//!   a system search affordance is expanding directly above the bar.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use canopy_pan::{PanPhase, PanSample, PanTracker, is_vertical};
//!
//! let mut tracker = PanTracker::new(1.0);
//!
//! let sample = PanSample {
//!     translation: Vec2::new(0.0, -12.0),
//!     velocity: Vec2::new(2.0, -80.0),
//!     phase: PanPhase::Changed,
//! };
//! assert!(is_vertical(sample.velocity));
//!
//! // Dragging the content up by 12 points collapses the bar by 12 points.
//! let delta = tracker.advance(sample.translation.y);
//! assert_eq!(delta, 12.0);
//!
//! // The gesture ended; the next gesture starts from a zero baseline.
//! tracker.reset();
//! ```
//!
//! Whether simultaneous recognition with other gesture handlers is permitted
//! is a host policy; this crate assumes it always is and never needs to know.
//!
//! This crate is `no_std`.

#![no_std]

mod sample;
mod tracker;

pub use sample::{PanPhase, PanSample, is_vertical};
pub use tracker::{PanTracker, blocked_by_search_affordance};
