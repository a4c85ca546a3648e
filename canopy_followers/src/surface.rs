// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Weak;
use core::cell::RefCell;

/// Host-side view of a surface that can slide vertically.
///
/// Implemented by the embedder for every view it registers as a follower.
/// Geometry is read live on each update; nothing is cached here.
///
/// The translucency accessors only matter for the companion bar and default
/// to an opaque surface that ignores writes.
pub trait VerticalSurface {
    /// Current height of the surface's frame.
    fn height(&self) -> f64;

    /// Current vertical origin of the surface's frame.
    fn origin_y(&self) -> f64;

    /// Moves the surface's frame origin to the given vertical position.
    fn set_origin_y(&mut self, y: f64);

    /// Translates the surface by the given vertical distance.
    fn translate_y(&mut self, dy: f64);

    /// Whether the surface currently renders translucent.
    fn is_translucent(&self) -> bool {
        false
    }

    /// Switches the surface between translucent and opaque rendering.
    fn set_translucent(&mut self, _translucent: bool) {}
}

/// Non-owning handle to a follower surface.
///
/// Followers must never keep host views alive; upgrading the handle is the
/// liveness check performed before every update.
pub type SurfaceHandle = Weak<RefCell<dyn VerticalSurface>>;
