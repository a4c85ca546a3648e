// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;

use canopy_followers::{Follower, FollowerSet};
use canopy_geometry::{
    BarExtents, BarState, DelayBudget, ScrollDirection, ScrollGate, scroll_step,
};
use canopy_pan::{PanSample, PanTracker, blocked_by_search_affordance, is_vertical};
use smallvec::SmallVec;

use crate::events::{Orientation, Subscriptions, rotation_forces_show};
use crate::host::{BarSurface, FadeRole, ScrollSurface, StateObserver};
use crate::slide::{Easing, Slide};

/// Duration used by programmatic show/hide when callers have no opinion.
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(100);

/// Options for [`BarSession::follow`].
#[derive(Debug)]
pub struct FollowOptions {
    /// Scroll resistance budget in points; the bar only starts moving once a
    /// gesture has scrolled past it.
    pub delay: f64,
    /// Divisor applied to raw gesture deltas; values above `1.0` slow the bar
    /// relative to the content.
    pub speed_factor: f64,
    /// Which content scroll direction collapses the bar.
    pub collapse_direction: ScrollDirection,
    /// Surfaces that move in sync with the bar. Membership is fixed for the
    /// lifetime of the binding.
    pub followers: Vec<Follower>,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            delay: 0.0,
            speed_factor: 1.0,
            collapse_direction: ScrollDirection::ScrollDown,
            followers: Vec::new(),
        }
    }
}

/// Options for [`BarSession::stop_following`].
#[derive(Clone, Copy, Debug)]
pub struct StopOptions {
    /// Show the bar before releasing the binding if it is collapsed.
    pub showing_navbar: bool,
    /// Animate that closing show instead of applying it synchronously.
    pub animated: bool,
    /// Compensate the content offset while showing.
    pub adjust_content_offset: bool,
}

impl Default for StopOptions {
    fn default() -> Self {
        Self {
            showing_navbar: true,
            animated: true,
            adjust_content_offset: true,
        }
    }
}

/// What a session did with one pan sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanOutcome {
    /// The session is not consuming gestures right now: nothing is bound,
    /// scrolling is disabled, the pan subscription is gone, or an animated
    /// transition owns the bar.
    NotInterested,
    /// The sample was recorded but deliberately produced no motion (search
    /// affordance expanding, or rubber-banding past the content edge).
    Suppressed,
    /// The sample went through the scroll pipeline.
    Handled,
}

/// The active binding between one scroll view and one bar.
///
/// Created by [`BarSession::follow`], released as a unit on teardown so a
/// stopped session cannot be resurrected without a fresh `follow`.
struct Binding {
    bar: Weak<RefCell<dyn BarSurface>>,
    scroll: Weak<RefCell<dyn ScrollSurface>>,
    followers: FollowerSet,
    tracker: PanTracker,
    budget: DelayBudget,
    collapse_direction: ScrollDirection,
    subscriptions: Subscriptions,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("bar_live", &(self.bar.strong_count() > 0))
            .field("scroll_live", &(self.scroll.strong_count() > 0))
            .field("followers", &self.followers.len())
            .field("tracker", &self.tracker)
            .field("budget", &self.budget)
            .field("collapse_direction", &self.collapse_direction)
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}

/// Scroll-coupled collapse/expand session for one navigation bar.
///
/// The session owns the bar state machine and everything around it: the
/// binding to the host surfaces, the pan baseline, the resistance budget, the
/// follower set, and any in-flight animated transition. All of it mutates
/// synchronously inside the `handle_*`/[`tick`](Self::tick) calls the host
/// event loop serializes; there is no interior concurrency.
///
/// Every operation degrades to a no-op when its preconditions fail — dead
/// surfaces, missing bindings, redundant show/hide — so none of them return
/// errors.
#[derive(Debug)]
pub struct BarSession {
    binding: Option<Binding>,
    state: BarState,
    previous_state: BarState,
    observer: Option<Weak<RefCell<dyn StateObserver>>>,
    slide: Option<Slide>,
    input_enabled: bool,
    scrolling_enabled: bool,
    expand_on_active: bool,
    collapse_when_content_fits: bool,
    fade_roles: SmallVec<[FadeRole; 4]>,
    easing: Easing,
}

impl Default for BarSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BarSession {
    /// Creates an idle session; nothing happens until [`follow`](Self::follow)
    /// binds it to host surfaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binding: None,
            state: BarState::Expanded,
            previous_state: BarState::Expanded,
            observer: None,
            slide: None,
            input_enabled: true,
            scrolling_enabled: true,
            expand_on_active: true,
            collapse_when_content_fits: false,
            fade_roles: SmallVec::from_slice(&FadeRole::ALL),
            easing: Easing::Linear,
        }
    }

    /// Current bar state.
    #[must_use]
    pub fn state(&self) -> BarState {
        self.state
    }

    /// Whether a binding is currently installed.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.binding.is_some()
    }

    /// Whether an animated transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Whether the session currently reacts to scroll gestures.
    #[must_use]
    pub fn scrolling_enabled(&self) -> bool {
        self.scrolling_enabled
    }

    /// Enables or disables gesture-driven scrolling. While disabled the bar
    /// stays visually static and [`handle_pan`](Self::handle_pan) reports
    /// [`PanOutcome::NotInterested`].
    pub fn set_scrolling_enabled(&mut self, enabled: bool) {
        self.scrolling_enabled = enabled;
    }

    /// Controls whether returning to the foreground re-expands the bar.
    pub fn set_expand_on_active(&mut self, expand: bool) {
        self.expand_on_active = expand;
    }

    /// Controls whether the bar may collapse while the content already fits
    /// its viewport.
    pub fn set_collapse_when_content_fits(&mut self, collapse: bool) {
        self.collapse_when_content_fits = collapse;
    }

    /// Declares which bar content roles fade with the collapse.
    pub fn set_fade_roles(&mut self, roles: impl IntoIterator<Item = FadeRole>) {
        self.fade_roles = roles.into_iter().collect();
    }

    /// Sets the interpolation curve used by animated transitions.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Installs the state observer. Held weakly; the session never extends
    /// its lifetime.
    pub fn set_observer<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: StateObserver + 'static,
    {
        let dynamic: Rc<RefCell<dyn StateObserver>> = observer.clone();
        self.observer = Some(Rc::downgrade(&dynamic));
    }

    /// Removes the state observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Binds the session to a bar and the scroll view it follows.
    ///
    /// Installs the full subscription set, resets the pan baseline and the
    /// resistance budget, and re-enables scrolling. Calling this on an
    /// already-following session replaces the prior binding wholesale; any
    /// in-flight transition is abandoned where it stands.
    pub fn follow<B, S>(
        &mut self,
        bar: &Rc<RefCell<B>>,
        scroll: &Rc<RefCell<S>>,
        options: FollowOptions,
    ) where
        B: BarSurface + 'static,
        S: ScrollSurface + 'static,
    {
        let bar: Rc<RefCell<dyn BarSurface>> = bar.clone();
        let scroll: Rc<RefCell<dyn ScrollSurface>> = scroll.clone();
        self.binding = Some(Binding {
            bar: Rc::downgrade(&bar),
            scroll: Rc::downgrade(&scroll),
            followers: FollowerSet::bind(options.followers),
            tracker: PanTracker::new(options.speed_factor),
            budget: DelayBudget::new(options.delay),
            collapse_direction: options.collapse_direction,
            subscriptions: Subscriptions::all(),
        });
        self.slide = None;
        self.input_enabled = true;
        self.scrolling_enabled = true;
    }

    /// Tears the session down, optionally showing the bar first.
    ///
    /// Safe to call repeatedly; a session with no binding returns
    /// immediately. With an animated closing show, the pan subscription is
    /// dropped at once and the remaining references are released when the
    /// slide completes.
    pub fn stop_following(&mut self, options: StopOptions) {
        if self.binding.is_none() {
            return;
        }
        if options.showing_navbar && self.state == BarState::Collapsed {
            if options.animated {
                self.show(true, options.adjust_content_offset, DEFAULT_SLIDE_DURATION);
                if let Some(slide) = self.slide.as_mut() {
                    slide.detach_when_done = true;
                    if let Some(binding) = self.binding.as_mut() {
                        binding.subscriptions = Subscriptions::empty();
                    }
                    return;
                }
                // The show fell through (surface already gone); release now.
                self.detach();
                return;
            }
            self.show(false, options.adjust_content_offset, Duration::ZERO);
        }
        self.detach();
    }

    /// Collapses the bar programmatically.
    ///
    /// A no-op beyond an alpha refresh unless the bar is fully expanded. The
    /// full-height collapsing delta ignores the resistance budget, and the
    /// content offset is nudged to compensate for the vanishing bar. While an
    /// animated hide is in flight, input is disabled; it is re-enabled exactly
    /// once when the slide completes.
    pub fn hide(&mut self, animated: bool, duration: Duration) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        let Some(bar) = binding.bar.upgrade() else {
            return;
        };
        if binding.scroll.strong_count() == 0 {
            return;
        }
        if self.state != BarState::Expanded {
            self.refresh_content_alpha();
            return;
        }
        let (offset, extents) = {
            let bar = bar.borrow();
            (
                bar.origin_y(),
                BarExtents::new(bar.frame_height(), bar.status_bar_height()),
            )
        };
        if animated {
            self.input_enabled = false;
            self.slide = Some(Slide::new(
                offset,
                extents.collapsed_offset(),
                duration,
                self.easing,
                BarState::Collapsed,
                true,
            ));
        } else {
            self.apply_scroll_delta(offset - extents.collapsed_offset(), true, true);
            self.set_state(BarState::Collapsed);
        }
    }

    /// Expands the bar programmatically.
    ///
    /// Symmetric to [`hide`](Self::hide): a no-op beyond an alpha refresh
    /// unless the bar is fully collapsed. Resets the pan baseline so the next
    /// gesture measures from scratch; content-offset compensation is optional.
    pub fn show(&mut self, animated: bool, adjust_content_offset: bool, duration: Duration) {
        {
            let Some(binding) = self.binding.as_ref() else {
                return;
            };
            if binding.bar.strong_count() == 0 || binding.scroll.strong_count() == 0 {
                return;
            }
        }
        if self.state != BarState::Collapsed {
            self.refresh_content_alpha();
            return;
        }
        let Some(binding) = self.binding.as_mut() else {
            return;
        };
        let Some(bar) = binding.bar.upgrade() else {
            return;
        };
        binding.tracker.reset();
        let (offset, extents) = {
            let bar = bar.borrow();
            (
                bar.origin_y(),
                BarExtents::new(bar.frame_height(), bar.status_bar_height()),
            )
        };
        if animated {
            self.input_enabled = false;
            self.slide = Some(Slide::new(
                offset,
                extents.expanded_offset(),
                duration,
                self.easing,
                BarState::Expanded,
                adjust_content_offset,
            ));
        } else {
            self.apply_scroll_delta(
                offset - extents.expanded_offset(),
                true,
                adjust_content_offset,
            );
            self.set_state(BarState::Expanded);
        }
    }

    /// Whether a gesture with this sample's velocity concerns the session.
    ///
    /// Hosts consult this when deciding to begin recognition: only gestures
    /// whose vertical velocity dominates qualify, and a session with scrolling
    /// disabled is never interested. Simultaneous recognition with other
    /// handlers is always acceptable and needs no query.
    #[must_use]
    pub fn should_recognize(&self, sample: &PanSample) -> bool {
        self.scrolling_enabled && is_vertical(sample.velocity)
    }

    /// Feeds one pan sample through the scroll pipeline.
    ///
    /// Movement samples normalize into a delta, run the suppression checks,
    /// and drive the bar; terminal samples resolve partial scrolls and zero
    /// the baseline. Samples arriving while an animated transition owns the
    /// bar are dropped entirely.
    pub fn handle_pan(&mut self, sample: PanSample) -> PanOutcome {
        let Some(binding) = self.binding.as_mut() else {
            return PanOutcome::NotInterested;
        };
        if !binding.subscriptions.contains(Subscriptions::PAN) {
            return PanOutcome::NotInterested;
        }
        if !self.scrolling_enabled || !self.input_enabled {
            return PanOutcome::NotInterested;
        }

        enum Move {
            Apply(f64),
            RubberBanded,
            Unavailable,
        }

        let movement = match (binding.bar.upgrade(), binding.scroll.upgrade()) {
            (Some(bar), Some(scroll)) => {
                let delta = binding.tracker.advance(sample.translation.y)
                    * binding.collapse_direction.factor();
                if blocked_by_search_affordance(bar.borrow().search_affordance_height(), delta) {
                    // The baseline advanced with the sample; the motion is
                    // dropped and so is any terminal handling, exactly like a
                    // gesture the search affordance owns.
                    return PanOutcome::Suppressed;
                }
                let scroll = scroll.borrow();
                let rubber_banding = delta < 0.0
                    && scroll.content_offset_y() + scroll.viewport_height()
                        > scroll.content_height()
                    && scroll.viewport_height() < scroll.content_height();
                if rubber_banding {
                    Move::RubberBanded
                } else {
                    Move::Apply(delta)
                }
            }
            _ => Move::Unavailable,
        };

        if let Move::Apply(delta) = movement {
            self.apply_scroll_delta(delta, false, false);
        }
        if sample.phase.is_terminal() {
            self.check_for_partial_scroll();
            if let Some(binding) = self.binding.as_mut() {
                binding.tracker.reset();
            }
        }
        match movement {
            Move::RubberBanded => PanOutcome::Suppressed,
            _ => PanOutcome::Handled,
        }
    }

    /// Resolves a bar released between its rest positions.
    ///
    /// Offsets at or above the halfway threshold animate fully open, the rest
    /// animate closed. The animation duration scales with the remaining
    /// distance, so longer partial scrolls take longer to settle.
    pub fn check_for_partial_scroll(&mut self) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        let Some(bar) = binding.bar.upgrade() else {
            return;
        };
        let (offset, extents) = {
            let bar = bar.borrow();
            (
                bar.origin_y(),
                BarExtents::new(bar.frame_height(), bar.status_bar_height()),
            )
        };
        let target = extents.snap_target(offset);
        let delta = extents.snap_delta(offset, target);
        if delta == 0.0 {
            self.set_state(target);
            return;
        }
        let duration = extents.snap_duration(delta);
        if duration.is_zero() {
            self.apply_scroll_delta(delta, true, false);
            self.set_state(target);
            return;
        }
        let to = match target {
            BarState::Collapsed => extents.collapsed_offset(),
            _ => extents.expanded_offset(),
        };
        self.input_enabled = false;
        self.slide = Some(Slide::new(offset, to, duration, self.easing, target, false));
    }

    /// Advances the in-flight transition, if any.
    ///
    /// Hosts pump this from their frame clock; the elapsed time between calls
    /// sets the animation pace. The completing tick commits the terminal
    /// state, re-enables input, and performs any deferred teardown.
    pub fn tick(&mut self, dt: Duration) {
        let Some(slide) = self.slide.as_mut() else {
            return;
        };
        let (position, done) = slide.advance(dt);
        let compensate = slide.compensate;
        let target = slide.target;
        let detach = slide.detach_when_done;

        let current = self
            .binding
            .as_ref()
            .and_then(|binding| binding.bar.upgrade())
            .map(|bar| bar.borrow().origin_y());
        let Some(current) = current else {
            // The bar went away mid-flight; abandon the slide cleanly.
            self.slide = None;
            self.input_enabled = true;
            if detach {
                self.detach();
            }
            return;
        };

        self.apply_scroll_delta(current - position, true, compensate);
        if done {
            self.slide = None;
            self.input_enabled = true;
            self.set_state(target);
            if detach {
                self.detach();
            }
        }
    }

    /// Rotation notification: re-shows the bar for redundant rotations and
    /// portrait/landscape crossings.
    pub fn handle_orientation_change(&mut self, from: Orientation, to: Orientation) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        if !binding.subscriptions.contains(Subscriptions::ORIENTATION) {
            return;
        }
        if rotation_forces_show(from, to) {
            self.show(true, true, DEFAULT_SLIDE_DURATION);
        }
    }

    /// The app is about to resign active: snapshot the state so it can be
    /// restored on return. No visual change.
    pub fn handle_will_resign_active(&mut self) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        if !binding.subscriptions.contains(Subscriptions::LIFECYCLE) {
            return;
        }
        self.previous_state = self.state;
    }

    /// The app became active again: either force the bar open, or restore the
    /// collapsed state captured at resign time.
    pub fn handle_did_become_active(&mut self) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        if !binding.subscriptions.contains(Subscriptions::LIFECYCLE) {
            return;
        }
        if self.expand_on_active {
            self.show(false, false, Duration::ZERO);
        } else if self.previous_state == BarState::Collapsed {
            self.hide(false, Duration::ZERO);
        }
    }

    /// The scroll view is about to scroll to its top (status-bar tap): show
    /// the bar alongside.
    pub fn handle_scroll_to_top(&mut self) {
        if self.binding.is_none() || !self.scrolling_enabled {
            return;
        }
        self.show(true, true, DEFAULT_SLIDE_DURATION);
    }

    /// Re-applies the content fade for the bar's current offset.
    ///
    /// Also the fallback path of redundant show/hide calls; hosts call it
    /// after relayout.
    pub fn refresh_content_alpha(&self) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        let Some(bar) = binding.bar.upgrade() else {
            return;
        };
        let mut bar = bar.borrow_mut();
        let extents = BarExtents::new(bar.frame_height(), bar.status_bar_height());
        let alpha = extents.content_alpha(bar.origin_y());
        for role in &self.fade_roles {
            bar.set_content_alpha(*role, alpha);
        }
    }

    /// Snapshot of the session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> BarSessionDebugInfo {
        BarSessionDebugInfo {
            state: self.state,
            previous_state: self.previous_state,
            following: self.binding.is_some(),
            animating: self.slide.is_some(),
            input_enabled: self.input_enabled,
            scrolling_enabled: self.scrolling_enabled,
            subscriptions: self
                .binding
                .as_ref()
                .map(|binding| binding.subscriptions),
        }
    }

    /// Releases everything the binding holds, as a unit.
    fn detach(&mut self) {
        self.binding = None;
        self.observer = None;
        self.slide = None;
        self.input_enabled = true;
        self.scrolling_enabled = false;
    }

    /// Routes a delta through the geometry engine and applies the outcome to
    /// the bar, the followers, the fade, and (optionally) the content offset.
    fn apply_scroll_delta(&mut self, delta: f64, ignore_delay: bool, compensate: bool) -> f64 {
        let Some(binding) = self.binding.as_mut() else {
            return 0.0;
        };
        let Some(bar) = binding.bar.upgrade() else {
            return 0.0;
        };
        let Some(scroll) = binding.scroll.upgrade() else {
            return 0.0;
        };

        let (content_offset_y, content_fits) = {
            let scroll = scroll.borrow();
            (
                scroll.content_offset_y(),
                scroll.content_height() <= scroll.viewport_height(),
            )
        };

        let step = {
            let mut bar = bar.borrow_mut();
            let extents = BarExtents::new(bar.frame_height(), bar.status_bar_height());
            let gate = ScrollGate {
                content_fits,
                collapse_when_content_fits: self.collapse_when_content_fits,
                content_offset_y,
            };
            let step = scroll_step(
                extents,
                bar.origin_y(),
                self.state,
                delta,
                ignore_delay,
                &mut binding.budget,
                gate,
            );
            if step.applied != 0.0 {
                bar.set_origin_y(step.offset);
            }
            let alpha = extents.content_alpha(step.offset);
            for role in &self.fade_roles {
                bar.set_content_alpha(*role, alpha);
            }
            drop(bar);
            if step.applied != 0.0 {
                binding.followers.shift(step.applied, extents.bar_height());
            }
            step
        };

        if compensate && step.applied != 0.0 {
            scroll
                .borrow_mut()
                .set_content_offset_y(content_offset_y + step.applied);
        }
        self.set_state(step.state);
        step.applied
    }

    fn set_state(&mut self, new: BarState) {
        if new == self.state {
            return;
        }
        self.notify(new, |observer, state| observer.will_change_state(state));
        self.state = new;
        self.notify(new, |observer, state| observer.did_change_state(state));
    }

    fn notify(&self, state: BarState, call: impl Fn(&mut dyn StateObserver, BarState)) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            call(&mut *observer.borrow_mut(), state);
        }
    }
}

/// Debug snapshot of a [`BarSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarSessionDebugInfo {
    /// Current bar state.
    pub state: BarState,
    /// State captured at the last resign-active.
    pub previous_state: BarState,
    /// Whether a binding is installed.
    pub following: bool,
    /// Whether an animated transition is in flight.
    pub animating: bool,
    /// Whether gesture input is currently accepted.
    pub input_enabled: bool,
    /// Whether gesture-driven scrolling is enabled.
    pub scrolling_enabled: bool,
    /// The binding's subscription set, if one is installed.
    pub subscriptions: Option<Subscriptions>,
}
