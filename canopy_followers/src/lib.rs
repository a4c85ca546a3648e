// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_followers --heading-base-level=0

//! Canopy Followers: auxiliary surfaces that move in sync with a collapsing
//! bar.
//!
//! A *follower* is a host surface — a tab bar, a toolbar, a floating banner —
//! that should slide in lockstep with the navigation bar's collapse/expand
//! motion. This crate owns the bookkeeping for a session's follower set:
//!
//! - Non-owning [`SurfaceHandle`]s so followers never extend the lifetime of
//!   host views; a handle that no longer upgrades is skipped silently.
//! - Declared [`FollowerRole`]s instead of runtime type sniffing: a follower
//!   is either a plain shifted surface with a direction, or the session's one
//!   *companion bar* (typically a tab bar), which needs translucency
//!   bookkeeping while it is away from its rest position.
//! - The proportional translation math: shorter followers travel
//!   proportionally less than the bar itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use canopy_followers::{Follower, FollowerRole, FollowerSet, VerticalSurface};
//! use canopy_geometry::ScrollDirection;
//!
//! #[derive(Default)]
//! struct Banner {
//!     y: f64,
//! }
//!
//! impl VerticalSurface for Banner {
//!     fn height(&self) -> f64 {
//!         44.0
//!     }
//!     fn origin_y(&self) -> f64 {
//!         self.y
//!     }
//!     fn set_origin_y(&mut self, y: f64) {
//!         self.y = y;
//!     }
//!     fn translate_y(&mut self, dy: f64) {
//!         self.y += dy;
//!     }
//! }
//!
//! let banner = Rc::new(RefCell::new(Banner::default()));
//! let mut set = FollowerSet::bind([Follower::for_surface(
//!     &banner,
//!     FollowerRole::Shifted(ScrollDirection::ScrollUp),
//! )]);
//!
//! // A 10-point collapse of a 44-point bar slides the banner up.
//! set.shift(10.0, 44.0);
//! assert!((banner.borrow().y - (-10.0 * 44.0 / 45.0)).abs() < 1e-12);
//! ```
//!
//! Set membership is fixed once bound; individual surfaces keep mutating
//! through their own handles. The set itself never fails: dead handles,
//! degenerate bar heights, and empty sets all degrade to doing less.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod set;
mod surface;

pub use set::{Follower, FollowerRole, FollowerSet, RestSnapshot};
pub use surface::{SurfaceHandle, VerticalSurface};
