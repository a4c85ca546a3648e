// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use canopy_geometry::ScrollDirection;
use smallvec::SmallVec;

use crate::surface::{SurfaceHandle, VerticalSurface};

/// A companion bar counts as returned to rest when its origin is back within
/// this distance of the captured rest origin. Equivalent to comparing rounded
/// origins without needing a rounding intrinsic.
const REST_TOLERANCE: f64 = 0.5;

/// How a registered follower reacts to bar motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowerRole {
    /// Translate the surface by a direction-scaled, height-proportional share
    /// of every bar movement.
    Shifted(ScrollDirection),
    /// The session's one bar-like follower (typically a tab bar): its frame
    /// origin is offset directly and its translucency is managed while it is
    /// away from its rest position.
    CompanionBar,
}

/// Captured visual state of the companion bar at bind time.
///
/// Read-only after capture; used to restore the companion's translucency once
/// it has returned to where it started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestSnapshot {
    /// Frame origin the companion rested at when the set was bound.
    pub origin_y: f64,
    /// Whether the companion rendered translucent at bind time.
    pub translucent: bool,
}

/// One registered follower: a non-owning surface handle plus its role.
pub struct Follower {
    handle: SurfaceHandle,
    role: FollowerRole,
}

impl Follower {
    /// Creates a follower from a raw surface handle.
    #[must_use]
    pub fn new(handle: SurfaceHandle, role: FollowerRole) -> Self {
        Self { handle, role }
    }

    /// Creates a follower for a shared surface, downgrading to a non-owning
    /// handle.
    #[must_use]
    pub fn for_surface<S>(surface: &Rc<RefCell<S>>, role: FollowerRole) -> Self
    where
        S: VerticalSurface + 'static,
    {
        let dynamic: Rc<RefCell<dyn VerticalSurface>> = surface.clone();
        Self::new(Rc::downgrade(&dynamic), role)
    }

    /// Returns the follower's declared role.
    #[must_use]
    pub fn role(&self) -> FollowerRole {
        self.role
    }

    /// Returns `true` while the underlying surface is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.strong_count() > 0
    }
}

impl fmt::Debug for Follower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Follower")
            .field("role", &self.role)
            .field("live", &self.is_live())
            .finish()
    }
}

/// The followers bound to one session.
///
/// Membership is fixed at bind time; the companion bar's rest state is
/// captured once, then every [`shift`](Self::shift) walks the set and skips
/// any follower whose surface has been released.
#[derive(Debug, Default)]
pub struct FollowerSet {
    followers: SmallVec<[Follower; 2]>,
    rest: Option<RestSnapshot>,
}

impl FollowerSet {
    /// Binds a follower set, capturing the companion bar's rest snapshot if
    /// one is declared and still alive.
    ///
    /// Only the first live companion contributes a snapshot; a session has at
    /// most one bar-like follower.
    #[must_use]
    pub fn bind(followers: impl IntoIterator<Item = Follower>) -> Self {
        let followers: SmallVec<[Follower; 2]> = followers.into_iter().collect();
        let rest = followers
            .iter()
            .filter(|follower| follower.role == FollowerRole::CompanionBar)
            .find_map(|follower| follower.handle.upgrade())
            .map(|surface| {
                let surface = surface.borrow();
                RestSnapshot {
                    origin_y: surface.origin_y(),
                    translucent: surface.is_translucent(),
                }
            });
        Self { followers, rest }
    }

    /// Returns the number of registered followers, live or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.followers.len()
    }

    /// Returns `true` when no followers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    /// Returns the companion bar's captured rest state, if any.
    #[must_use]
    pub fn rest_snapshot(&self) -> Option<RestSnapshot> {
        self.rest
    }

    /// Applies one bar movement to every live follower.
    ///
    /// `delta` is the applied scroll delta (positive collapses) and
    /// `bar_height` the bar's current frame height. Shifted followers are
    /// translated by `direction * delta * height / (bar_height + 1)`; the
    /// extra point in the divisor keeps a zero-height bar from dividing by
    /// zero. The companion bar's origin moves by `delta * height / bar_height`
    /// (skipped for degenerate bars); it is held translucent while away from
    /// rest and restored once it is back.
    pub fn shift(&mut self, delta: f64, bar_height: f64) {
        for follower in &self.followers {
            let Some(surface) = follower.handle.upgrade() else {
                continue;
            };
            let mut surface = surface.borrow_mut();
            match follower.role {
                FollowerRole::Shifted(direction) => {
                    let dy = direction.factor() * delta * surface.height() / (bar_height + 1.0);
                    surface.translate_y(dy);
                }
                FollowerRole::CompanionBar => {
                    if bar_height <= 0.0 {
                        continue;
                    }
                    surface.set_translucent(true);
                    let dy = delta * surface.height() / bar_height;
                    let origin = surface.origin_y() + dy;
                    surface.set_origin_y(origin);
                    if let Some(rest) = self.rest
                        && (origin - rest.origin_y).abs() < REST_TOLERANCE
                    {
                        surface.set_translucent(rest.translucent);
                    }
                }
            }
        }
    }
}
