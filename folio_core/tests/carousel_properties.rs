// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for carousel index, slider and layout invariants.

use folio_core::carousel::{Carousel, CarouselConfig, Direction};
use folio_core::time::Timestamp;
use proptest::prelude::*;
use proptest::test_runner::Config;

#[derive(Clone, Debug)]
enum Action {
    Next,
    Previous,
    Select(usize),
    Click(f64),
    DragRelease(f64, f64),
    Tick,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Previous),
        (0_usize..20).prop_map(Action::Select),
        (-20.0_f64..120.0).prop_map(Action::Click),
        (0.0_f64..100.0, 0.0_f64..100.0).prop_map(|(a, b)| Action::DragRelease(a, b)),
        Just(Action::Tick),
    ]
}

fn apply(carousel: &mut Carousel, action: &Action, now: Timestamp) {
    match *action {
        Action::Next => carousel.rotate(Direction::Next, now),
        Action::Previous => carousel.rotate(Direction::Previous, now),
        Action::Select(i) => {
            carousel.select(i, now);
        }
        Action::Click(p) => carousel.click_slider(p, now),
        Action::DragRelease(a, b) => {
            carousel.drag_slider(a, now);
            carousel.drag_slider(b, now);
            carousel.release_slider(now);
        }
        Action::Tick => {
            carousel.tick(now);
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn slider_tracks_index(
        len in 2_usize..12,
        actions in prop::collection::vec(action(), 1..40),
    ) {
        let mut carousel = Carousel::new(len, CarouselConfig::WEB).expect("non-empty");
        let step = 100.0 / (len - 1) as f64;
        for (t, action) in actions.iter().enumerate() {
            apply(&mut carousel, action, Timestamp(t as u64 * 7_000));
            prop_assert!(carousel.active_index() < len);
            let expected = carousel.active_index() as f64 * step;
            prop_assert!(
                (carousel.slider_value() - expected).abs() < 1e-9,
                "slider {} vs index {}",
                carousel.slider_value(),
                carousel.active_index()
            );
        }
    }

    #[test]
    fn next_then_previous_is_identity(len in 1_usize..12, start in 0_usize..12) {
        let mut carousel = Carousel::new(len, CarouselConfig::WEB).expect("non-empty");
        carousel.select(start % len, Timestamp(0));
        let before = carousel.active_index();
        carousel.rotate(Direction::Next, Timestamp(1));
        carousel.rotate(Direction::Previous, Timestamp(2));
        prop_assert_eq!(carousel.active_index(), before);
    }

    #[test]
    fn active_card_is_most_prominent(len in 1_usize..12, active in 0_usize..12) {
        let mut carousel = Carousel::new(len, CarouselConfig::WEB).expect("non-empty");
        let active = active % len;
        carousel.select(active, Timestamp(0));
        let layout = carousel.layout();
        let top = &layout[active];
        prop_assert!((top.scale - 1.0).abs() < 1e-12);
        prop_assert!((top.opacity - 1.0).abs() < 1e-12);
        prop_assert!(top.visible);
        for card in &layout {
            prop_assert!(card.scale <= top.scale);
            prop_assert!(card.opacity <= top.opacity);
            prop_assert!(card.z_index <= top.z_index);
            if !card.visible {
                prop_assert_eq!(card.scale, 0.0);
                prop_assert_eq!(card.opacity, 0.0);
            }
        }
    }
}

#[test]
fn wraps_in_both_directions() {
    let mut carousel = Carousel::new(5, CarouselConfig::WEB).unwrap();
    carousel.select(4, Timestamp(0));
    carousel.rotate(Direction::Next, Timestamp(1));
    assert_eq!(carousel.active_index(), 0);
    carousel.rotate(Direction::Previous, Timestamp(2));
    assert_eq!(carousel.active_index(), 4);
}

#[test]
fn advancing_from_two_of_five() {
    let mut carousel = Carousel::new(5, CarouselConfig::WEB).unwrap();
    carousel.select(2, Timestamp(0));
    carousel.rotate(Direction::Next, Timestamp(1));
    assert_eq!(carousel.active_index(), 3);
    assert!((carousel.slider_value() - 75.0).abs() < 1e-9);
}
