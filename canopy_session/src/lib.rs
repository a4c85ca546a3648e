// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_session --heading-base-level=0

//! Canopy Session: the scroll-coupled collapse/expand session for a top
//! navigation bar.
//!
//! A [`BarSession`] binds one scrollable content view to one navigation bar
//! and keeps the two in lockstep: drag gestures slide the bar off-screen and
//! back, gestures released mid-travel snap to the nearer rest position, and
//! programmatic show/hide commands animate the bar while input is held off.
//! Optional follower surfaces (a tab bar, toolbars) move in sync.
//!
//! The host toolkit stays on the other side of three small seams:
//!
//! - [`BarSurface`] / [`ScrollSurface`]: live geometry queries and the few
//!   mutations a session performs (bar origin, fade alphas, content offset).
//! - [`PanSample`](canopy_pan::PanSample) values for the drag-delta stream,
//!   plus plain method calls for rotation, lifecycle, and scroll-to-top
//!   events.
//! - [`BarSession::tick`]: the session has no clock; the host pumps elapsed
//!   time and animated transitions resolve inside those calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use canopy_session::{
//!     BarSession, BarState, BarSurface, FadeRole, FollowOptions, ScrollSurface, StopOptions,
//! };
//!
//! struct Bar {
//!     origin_y: f64,
//! }
//!
//! impl BarSurface for Bar {
//!     fn origin_y(&self) -> f64 {
//!         self.origin_y
//!     }
//!     fn set_origin_y(&mut self, y: f64) {
//!         self.origin_y = y;
//!     }
//!     fn frame_height(&self) -> f64 {
//!         44.0
//!     }
//!     fn status_bar_height(&self) -> f64 {
//!         20.0
//!     }
//!     fn set_content_alpha(&mut self, _role: FadeRole, _alpha: f64) {}
//! }
//!
//! struct Content;
//!
//! impl ScrollSurface for Content {
//!     fn content_offset_y(&self) -> f64 {
//!         300.0
//!     }
//!     fn set_content_offset_y(&mut self, _y: f64) {}
//!     fn content_height(&self) -> f64 {
//!         2_000.0
//!     }
//!     fn viewport_height(&self) -> f64 {
//!         800.0
//!     }
//! }
//!
//! let bar = Rc::new(RefCell::new(Bar { origin_y: 20.0 }));
//! let content = Rc::new(RefCell::new(Content));
//!
//! let mut session = BarSession::new();
//! session.follow(&bar, &content, FollowOptions::default());
//!
//! // Collapse without animation and confirm the bar moved.
//! session.hide(false, Duration::ZERO);
//! assert_eq!(session.state(), BarState::Collapsed);
//! assert_eq!(bar.borrow().origin_y, -44.0);
//!
//! session.stop_following(StopOptions {
//!     animated: false,
//!     ..StopOptions::default()
//! });
//! assert!(!session.is_following());
//! ```
//!
//! Everything runs single-threaded on the host's event loop; see the module
//! docs for the exact event pipeline and the teardown contract.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod events;
mod host;
mod session;
mod slide;

pub use canopy_geometry::{BarState, ScrollDirection};
pub use events::{Orientation, Subscriptions, rotation_forces_show};
pub use host::{BarSurface, FadeRole, ScrollSurface, StateObserver};
pub use session::{
    BarSession, BarSessionDebugInfo, DEFAULT_SLIDE_DURATION, FollowOptions, PanOutcome,
    StopOptions,
};
pub use slide::Easing;
