// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation contract for the carousel.
//!
//! The core computes [`CardPlacement`]s; a platform crate owns the actual
//! card elements. The pieces a platform provides:
//!
//! - **Tick source**: Drives the frame loop (`requestAnimationFrame` on the
//!   web). Not abstracted by a trait because its setup and lifecycle are
//!   platform-specific.
//!
//! - **Time**: A `now() -> Timestamp` free function over the platform's
//!   monotonic clock.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to write placements
//!   onto native card elements.
//!
//! [`CardStage`] sits between the two: it remembers what was last presented
//! and hands the presenter only the cards whose placement moved.

use alloc::vec::Vec;

use crate::carousel::CardPlacement;

/// Applies card placements to a platform-native presentation tree.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(now: Timestamp) {
///     // Animate: let the timer advance the index
///     carousel.tick(now);
///
///     // Present: write only the cards that moved
///     stage.present(carousel.layout(), &mut presenter);
/// }
/// ```
pub trait Presenter {
    /// Applies `layout` to the backing tree. `changed` lists the card
    /// indices whose placement differs from the previous call, in ascending
    /// order.
    fn apply(&mut self, layout: &[CardPlacement], changed: &[usize]);
}

/// Diffs successive layouts so presenters only touch moved cards.
#[derive(Clone, Debug, Default)]
pub struct CardStage {
    previous: Vec<CardPlacement>,
    changed: Vec<usize>,
}

impl CardStage {
    /// A stage that has presented nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the last layout, so the next present repaints every card.
    pub fn invalidate(&mut self) {
        self.previous.clear();
    }

    /// The layout most recently handed to a presenter.
    #[must_use]
    pub fn current(&self) -> &[CardPlacement] {
        &self.previous
    }

    /// Presents `layout`, returning how many cards changed.
    ///
    /// The presenter is not called when nothing moved.
    pub fn present<P: Presenter + ?Sized>(
        &mut self,
        layout: Vec<CardPlacement>,
        presenter: &mut P,
    ) -> usize {
        self.changed.clear();
        for (i, placement) in layout.iter().enumerate() {
            if self.previous.get(i) != Some(placement) {
                self.changed.push(i);
            }
        }
        let count = self.changed.len();
        if count > 0 || layout.len() != self.previous.len() {
            presenter.apply(&layout, &self.changed);
        }
        self.previous = layout;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Carousel, CarouselConfig, Direction};
    use crate::time::Timestamp;

    #[derive(Default)]
    struct Recording {
        calls: Vec<Vec<usize>>,
        last_len: usize,
    }

    impl Presenter for Recording {
        fn apply(&mut self, layout: &[CardPlacement], changed: &[usize]) {
            self.calls.push(changed.to_vec());
            self.last_len = layout.len();
        }
    }

    #[test]
    fn first_present_touches_every_card() {
        let carousel = Carousel::new(5, CarouselConfig::WEB).unwrap();
        let mut stage = CardStage::new();
        let mut rec = Recording::default();
        assert_eq!(stage.present(carousel.layout(), &mut rec), 5);
        assert_eq!(rec.calls, [alloc::vec![0, 1, 2, 3, 4]]);
        assert_eq!(rec.last_len, 5);
    }

    #[test]
    fn unchanged_layout_skips_presenter() {
        let carousel = Carousel::new(4, CarouselConfig::WEB).unwrap();
        let mut stage = CardStage::new();
        let mut rec = Recording::default();
        stage.present(carousel.layout(), &mut rec);
        assert_eq!(stage.present(carousel.layout(), &mut rec), 0);
        assert_eq!(rec.calls.len(), 1);
    }

    #[test]
    fn rotation_reports_moved_cards() {
        let mut carousel = Carousel::new(5, CarouselConfig::WEB).unwrap();
        let mut stage = CardStage::new();
        let mut rec = Recording::default();
        stage.present(carousel.layout(), &mut rec);

        carousel.rotate(Direction::Next, Timestamp(10));
        let moved = stage.present(carousel.layout(), &mut rec);
        assert!(moved > 0, "rotation should move at least one card");
        assert_eq!(rec.calls.len(), 2);
        assert_eq!(stage.current()[0].index, 0);
    }

    #[test]
    fn invalidate_forces_full_repaint() {
        let carousel = Carousel::new(3, CarouselConfig::WEB).unwrap();
        let mut stage = CardStage::new();
        let mut rec = Recording::default();
        stage.present(carousel.layout(), &mut rec);
        stage.invalidate();
        assert_eq!(stage.present(carousel.layout(), &mut rec), 3);
    }
}
