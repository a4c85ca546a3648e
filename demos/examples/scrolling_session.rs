// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted drag gesture: collapse the bar most of the way, release, and
//! watch the partial scroll snap it shut.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use canopy_demos::{DemoBar, DemoScrollView, PrintingObserver, drag, release};
use canopy_session::{BarSession, FollowOptions};

fn main() {
    let bar = DemoBar::phone();
    let scroll = DemoScrollView::feed();
    let observer = Rc::new(RefCell::new(PrintingObserver));

    let mut session = BarSession::new();
    session.set_observer(&observer);
    session.follow(
        &bar,
        &scroll,
        FollowOptions {
            delay: 10.0,
            ..FollowOptions::default()
        },
    );

    println!("dragging up through the 10-point resistance budget:");
    for step in 1..=9 {
        session.handle_pan(drag(f64::from(step) * -5.0));
        let bar = bar.borrow();
        println!(
            "  translation {:>6.1}  bar origin {:>7.2}  title alpha {:.2}",
            f64::from(step) * -5.0,
            bar.origin_y,
            bar.title_alpha,
        );
    }

    println!("releasing past the halfway threshold:");
    session.handle_pan(release(-45.0));
    while session.is_animating() {
        session.tick(Duration::from_millis(16));
        println!("  tick: bar origin {:>7.2}", bar.borrow().origin_y);
    }

    println!(
        "settled {:?} at origin {:.1}",
        session.state(),
        bar.borrow().origin_y
    );
}
