// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;

use canopy_pan::{PanPhase, PanSample};
use canopy_session::{BarSession, BarSurface, FadeRole, FollowOptions, ScrollSurface};

struct BenchBar {
    origin: f64,
    alpha: f64,
}

impl BarSurface for BenchBar {
    fn origin_y(&self) -> f64 {
        self.origin
    }
    fn set_origin_y(&mut self, y: f64) {
        self.origin = y;
    }
    fn frame_height(&self) -> f64 {
        44.0
    }
    fn status_bar_height(&self) -> f64 {
        20.0
    }
    fn set_content_alpha(&mut self, _role: FadeRole, alpha: f64) {
        self.alpha = alpha;
    }
}

struct BenchScroll {
    offset: f64,
}

impl ScrollSurface for BenchScroll {
    fn content_offset_y(&self) -> f64 {
        self.offset
    }
    fn set_content_offset_y(&mut self, y: f64) {
        self.offset = y;
    }
    fn content_height(&self) -> f64 {
        4_000.0
    }
    fn viewport_height(&self) -> f64 {
        800.0
    }
}

fn bound_session() -> (BarSession, Rc<RefCell<BenchBar>>, Rc<RefCell<BenchScroll>>) {
    let bar = Rc::new(RefCell::new(BenchBar {
        origin: 20.0,
        alpha: 1.0,
    }));
    let scroll = Rc::new(RefCell::new(BenchScroll { offset: 300.0 }));
    let mut session = BarSession::new();
    session.follow(&bar, &scroll, FollowOptions::default());
    (session, bar, scroll)
}

fn sample(y: f64, phase: PanPhase) -> PanSample {
    PanSample {
        translation: Vec2::new(0.0, y),
        velocity: Vec2::new(0.0, -120.0),
        phase,
    }
}

fn bench_session_round(c: &mut Criterion) {
    c.bench_function("session/drag_and_snap", |b| {
        b.iter_batched(
            bound_session,
            |(mut session, bar, _scroll)| {
                // A 60-sample drag two thirds of the way out, then release.
                for i in 1..=60_i32 {
                    session.handle_pan(sample(f64::from(i) * -0.7, PanPhase::Changed));
                }
                session.handle_pan(sample(-42.0, PanPhase::Ended));
                while session.is_animating() {
                    session.tick(Duration::from_millis(16));
                }
                black_box(bar.borrow().origin)
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("session/hide_show_animated", |b| {
        b.iter_batched(
            bound_session,
            |(mut session, bar, _scroll)| {
                session.hide(true, Duration::from_millis(100));
                while session.is_animating() {
                    session.tick(Duration::from_millis(16));
                }
                session.show(true, true, Duration::from_millis(100));
                while session.is_animating() {
                    session.tick(Duration::from_millis(16));
                }
                black_box(bar.borrow().origin)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_session_round);
criterion_main!(benches);
