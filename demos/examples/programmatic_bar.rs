// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic show/hide with a tab-bar follower: the bar animates away and
//! back while the tab bar slides in sync and the content offset compensates.

use std::time::Duration;

use canopy_demos::{DemoBar, DemoScrollView, DemoTabBar};
use canopy_followers::{Follower, FollowerRole};
use canopy_session::{BarSession, Easing, FollowOptions, StopOptions};

fn main() {
    let bar = DemoBar::phone();
    let scroll = DemoScrollView::feed();
    let tab_bar = DemoTabBar::bottom();

    let mut session = BarSession::new();
    session.set_easing(Easing::EaseInOut);
    session.follow(
        &bar,
        &scroll,
        FollowOptions {
            followers: vec![Follower::for_surface(&tab_bar, FollowerRole::CompanionBar)],
            ..FollowOptions::default()
        },
    );

    println!("hiding the bar over 100 ms:");
    session.hide(true, Duration::from_millis(100));
    while session.is_animating() {
        session.tick(Duration::from_millis(16));
        println!(
            "  bar {:>7.2}  tab bar {:>7.2} (translucent: {})  content offset {:>7.2}",
            bar.borrow().origin_y,
            tab_bar.borrow().origin_y,
            tab_bar.borrow().translucent,
            scroll.borrow().content_offset_y,
        );
    }
    println!("hidden: {:?}", session.state());

    println!("showing it again:");
    session.show(true, true, Duration::from_millis(100));
    while session.is_animating() {
        session.tick(Duration::from_millis(16));
    }
    println!(
        "shown: {:?}; tab bar back at {:.1} (translucent: {})",
        session.state(),
        tab_bar.borrow().origin_y,
        tab_bar.borrow().translucent,
    );

    session.stop_following(StopOptions::default());
    println!("stopped following; session idle: {}", !session.is_following());
}
