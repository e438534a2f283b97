// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel card elements.
//!
//! Writes [`CardPlacement`]s onto absolutely positioned card elements inside
//! an arc container.

use alloc::format;
use alloc::vec::Vec;

use folio_core::backend::Presenter;
use folio_core::carousel::CardPlacement;
use web_sys::HtmlElement;

/// Positions pre-built card elements from carousel placements.
///
/// Cards are centered on the container's arc origin; each `apply` writes
/// transform, opacity, stacking and hit-testing for the changed cards only.
pub struct CardPresenter {
    container: HtmlElement,
    cards: Vec<HtmlElement>,
    width: f64,
    height: f64,
}

impl core::fmt::Debug for CardPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CardPresenter")
            .field("container", &"HtmlElement")
            .field("cards_len", &self.cards.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CardPresenter {
    /// Takes ownership of `cards` (in carousel index order) inside
    /// `container`, and prepares them for absolute positioning.
    #[must_use]
    pub fn new(container: HtmlElement, cards: Vec<HtmlElement>) -> Self {
        for card in &cards {
            let s = card.style();
            let _ = s.set_property("position", "absolute");
            let _ = s.set_property("left", "50%");
            let _ = s.set_property("top", "50%");
            let _ = s.set_property("translate", "-50% -50%");
            let _ = s.set_property(
                "transition",
                "transform 0.5s ease-out, opacity 0.5s ease-out",
            );
        }
        let mut presenter = Self {
            container,
            cards,
            width: 0.0,
            height: 0.0,
        };
        presenter.measure();
        presenter
    }

    /// Re-reads the container size. Returns whether it changed; callers
    /// should invalidate their stage when it did.
    pub fn measure(&mut self) -> bool {
        let width = f64::from(self.container.offset_width());
        let height = f64::from(self.container.offset_height());
        let changed = width != self.width || height != self.height;
        self.width = width;
        self.height = height;
        changed
    }
}

impl Presenter for CardPresenter {
    fn apply(&mut self, layout: &[CardPlacement], changed: &[usize]) {
        for &idx in changed {
            let (Some(card), Some(placement)) = (self.cards.get(idx), layout.get(idx)) else {
                continue;
            };
            let s = card.style();
            let xf = placement.transform(self.width, self.height);
            let _ = s.set_property("transform", &xf.to_css());
            let _ = s.set_property("opacity", &format!("{}", placement.opacity));
            let _ = s.set_property("z-index", &format!("{}", placement.z_index));
            let _ = s.set_property(
                "pointer-events",
                if placement.visible { "auto" } else { "none" },
            );
            let _ = card.set_attribute(
                "aria-hidden",
                if placement.visible { "false" } else { "true" },
            );
        }
    }
}
