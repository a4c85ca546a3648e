// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared in-memory host for the Canopy demos.
//!
//! The demos drive a [`canopy_session::BarSession`] against plain structs that
//! stand in for a host toolkit's navigation bar, scroll view, and tab bar, so
//! the whole collapse pipeline can be scripted and printed from a terminal.

use std::cell::RefCell;
use std::rc::Rc;

use canopy_followers::VerticalSurface;
use canopy_pan::{PanPhase, PanSample};
use canopy_session::{BarState, BarSurface, FadeRole, ScrollSurface, StateObserver};
use kurbo::Vec2;

/// A navigation bar as a demo host sees it: a frame origin, fixed metrics,
/// and one alpha per fadeable role.
#[derive(Debug)]
pub struct DemoBar {
    /// Vertical frame origin.
    pub origin_y: f64,
    /// Bar frame height.
    pub frame_height: f64,
    /// Status-bar inset above the bar.
    pub status_bar_height: f64,
    /// Height of an expanding search affordance, when scripted.
    pub search_affordance_height: f64,
    /// Last alpha applied to the title role.
    pub title_alpha: f64,
    /// Last alpha applied to the button-items role.
    pub items_alpha: f64,
}

impl DemoBar {
    /// A 44-point bar resting expanded under a 20-point status bar.
    #[must_use]
    pub fn phone() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            origin_y: 20.0,
            frame_height: 44.0,
            status_bar_height: 20.0,
            search_affordance_height: 0.0,
            title_alpha: 1.0,
            items_alpha: 1.0,
        }))
    }
}

impl BarSurface for DemoBar {
    fn origin_y(&self) -> f64 {
        self.origin_y
    }

    fn set_origin_y(&mut self, y: f64) {
        self.origin_y = y;
    }

    fn frame_height(&self) -> f64 {
        self.frame_height
    }

    fn status_bar_height(&self) -> f64 {
        self.status_bar_height
    }

    fn search_affordance_height(&self) -> f64 {
        self.search_affordance_height
    }

    fn set_content_alpha(&mut self, role: FadeRole, alpha: f64) {
        match role {
            FadeRole::Title | FadeRole::TitleColor => self.title_alpha = alpha,
            FadeRole::ButtonItems | FadeRole::CustomBarViews => self.items_alpha = alpha,
        }
    }
}

/// Scrollable content backing the demos.
#[derive(Debug)]
pub struct DemoScrollView {
    /// Vertical content offset.
    pub content_offset_y: f64,
    /// Total content height.
    pub content_height: f64,
    /// Viewport height.
    pub viewport_height: f64,
}

impl DemoScrollView {
    /// A long feed: plenty of content below the fold.
    #[must_use]
    pub fn feed() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            content_offset_y: 0.0,
            content_height: 4_000.0,
            viewport_height: 800.0,
        }))
    }
}

impl ScrollSurface for DemoScrollView {
    fn content_offset_y(&self) -> f64 {
        self.content_offset_y
    }

    fn set_content_offset_y(&mut self, y: f64) {
        self.content_offset_y = y;
    }

    fn content_height(&self) -> f64 {
        self.content_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

/// A tab bar registered as the session's companion follower.
#[derive(Debug)]
pub struct DemoTabBar {
    /// Vertical frame origin.
    pub origin_y: f64,
    /// Tab bar height.
    pub height: f64,
    /// Current translucency.
    pub translucent: bool,
}

impl DemoTabBar {
    /// A 49-point tab bar resting at the bottom of an 800-point screen.
    #[must_use]
    pub fn bottom() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            origin_y: 751.0,
            height: 49.0,
            translucent: false,
        }))
    }
}

impl VerticalSurface for DemoTabBar {
    fn height(&self) -> f64 {
        self.height
    }

    fn origin_y(&self) -> f64 {
        self.origin_y
    }

    fn set_origin_y(&mut self, y: f64) {
        self.origin_y = y;
    }

    fn translate_y(&mut self, dy: f64) {
        self.origin_y += dy;
    }

    fn is_translucent(&self) -> bool {
        self.translucent
    }

    fn set_translucent(&mut self, translucent: bool) {
        self.translucent = translucent;
    }
}

/// Observer printing every state transition to stdout.
#[derive(Debug, Default)]
pub struct PrintingObserver;

impl StateObserver for PrintingObserver {
    fn will_change_state(&mut self, new: BarState) {
        println!("  -> will change to {new:?}");
    }

    fn did_change_state(&mut self, state: BarState) {
        println!("  -> now {state:?}");
    }
}

/// Builds a mid-gesture pan sample for the given cumulative translation.
#[must_use]
pub fn drag(translation_y: f64) -> PanSample {
    PanSample {
        translation: Vec2::new(0.0, translation_y),
        velocity: Vec2::new(4.0, -140.0),
        phase: PanPhase::Changed,
    }
}

/// Builds the terminal sample releasing a gesture at the given translation.
#[must_use]
pub fn release(translation_y: f64) -> PanSample {
    PanSample {
        translation: Vec2::new(0.0, translation_y),
        velocity: Vec2::new(0.0, -40.0),
        phase: PanPhase::Ended,
    }
}
