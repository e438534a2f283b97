// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for image allocation sessions.

use std::collections::HashSet;

use folio_core::gallery::ImagePool;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn pool(len: usize, group_size: usize) -> ImagePool {
    ImagePool::new((0..len).map(|i| format!("/img/{i}.png")), group_size).expect("unique urls")
}

fn requests() -> impl Strategy<Value = Vec<(usize, Option<usize>)>> {
    prop::collection::vec((0_usize..12, prop::option::of(0_usize..8)), 0..10)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn allocations_are_disjoint(
        len in 0_usize..60,
        group_size in 1_usize..15,
        calls in requests(),
    ) {
        let pool = pool(len, group_size);
        let mut session = pool.session();
        let mut seen = HashSet::new();
        for (count, group) in calls {
            let got = session.allocate(count, group);
            prop_assert!(got.len() <= count);
            for url in got {
                prop_assert!(seen.insert(url), "{url} handed out twice");
                prop_assert!(session.is_used(url));
            }
        }
        prop_assert_eq!(seen.len() + session.remaining(), pool.len());
    }

    #[test]
    fn allocation_is_deterministic(
        len in 0_usize..60,
        group_size in 1_usize..15,
        calls in requests(),
    ) {
        let pool = pool(len, group_size);
        let mut first = pool.session();
        let mut second = pool.session();
        for &(count, group) in &calls {
            prop_assert_eq!(first.allocate(count, group), second.allocate(count, group));
        }
    }

    #[test]
    fn exhaustion_returns_what_is_left(
        len in 0_usize..60,
        group_size in 1_usize..15,
        calls in requests(),
    ) {
        let pool = pool(len, group_size);
        let mut session = pool.session();
        let requested: usize = calls.iter().map(|&(count, _)| count).sum();
        let returned: usize = calls
            .iter()
            .map(|&(count, group)| session.allocate(count, group).len())
            .sum();
        prop_assert_eq!(returned, requested.min(pool.len()));
    }
}

#[test]
fn grouped_requests_then_remainder_cover_the_pool() {
    let pool = pool(12, 3);
    let mut session = pool.session();

    let a = session.allocate(3, Some(0));
    let b = session.allocate(3, Some(1));
    let c = session.allocate(6, None);

    assert_eq!(a, ["/img/0.png", "/img/1.png", "/img/2.png"]);
    assert_eq!(b, ["/img/3.png", "/img/4.png", "/img/5.png"]);
    assert_eq!(
        c,
        [
            "/img/6.png",
            "/img/7.png",
            "/img/8.png",
            "/img/9.png",
            "/img/10.png",
            "/img/11.png",
        ]
    );
    assert_eq!(session.remaining(), 0);
}
