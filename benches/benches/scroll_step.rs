// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use canopy_geometry::{BarExtents, BarState, DelayBudget, ScrollGate, scroll_step};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_delta(&mut self) -> f64 {
        // Signed deltas in roughly [-16, 16), the range a 60 Hz drag produces.
        (f64::from(self.next_u32()) / f64::from(u32::MAX)) * 32.0 - 16.0
    }
}

fn build_stream(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..len).map(|_| rng.next_delta()).collect()
}

fn bench_scroll_step(c: &mut Criterion) {
    let extents = BarExtents::new(44.0, 20.0);
    let stream = build_stream(1_024, 7);

    c.bench_function("scroll_step/stream_1k", |b| {
        b.iter(|| {
            let mut budget = DelayBudget::new(20.0);
            let mut offset = extents.expanded_offset();
            let mut state = BarState::Expanded;
            for &delta in &stream {
                let step = scroll_step(
                    extents,
                    offset,
                    state,
                    black_box(delta),
                    false,
                    &mut budget,
                    ScrollGate {
                        content_fits: false,
                        collapse_when_content_fits: false,
                        content_offset_y: 300.0,
                    },
                );
                offset = step.offset;
                state = step.state;
            }
            (offset, state)
        });
    });

    c.bench_function("scroll_step/alpha_and_snap", |b| {
        b.iter(|| {
            let mut acc = 0.0_f64;
            for i in 0..1_024_u32 {
                let offset = -44.0 + f64::from(i % 65);
                acc += extents.content_alpha(black_box(offset));
                let target = extents.snap_target(offset);
                acc += extents.snap_delta(offset, target);
            }
            acc
        });
    });
}

criterion_group!(benches, bench_scroll_step);
criterion_main!(benches);
