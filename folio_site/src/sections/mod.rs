// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page sections.
//!
//! Each section builds its DOM subtree and returns a [`Mounted`] that owns
//! every listener, timer and observer it registered: gloo `EventListener`s
//! and timers, [`RafLoop`](folio_web::RafLoop)s,
//! [`VisibilityObserver`](folio_web::VisibilityObserver)s and [`Cleanup`]s.
//! Dropping the `Mounted` cancels them all, so no callback can touch a
//! detached section.

use std::any::Any;
use std::cell::Cell;

use folio_web::VisibilityObserver;
use web_sys::HtmlElement;

use crate::dom;
use crate::error::SiteResult;

pub(crate) mod about;
pub(crate) mod case_study;
pub(crate) mod contact;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod nav;
pub(crate) mod projects;
pub(crate) mod trail;

/// Runs a closure on drop.
pub(crate) struct Cleanup(Option<Box<dyn FnOnce()>>);

impl Cleanup {
    pub(crate) fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(f)))
    }
}

impl Drop for Cleanup {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

/// A built section and the guards keeping it live.
pub(crate) struct Mounted {
    pub(crate) root: HtmlElement,
    guards: Vec<Box<dyn Any>>,
}

impl core::fmt::Debug for Mounted {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mounted")
            .field("root", &self.root.tag_name())
            .field("guards", &self.guards.len())
            .finish()
    }
}

impl Mounted {
    pub(crate) fn new(root: HtmlElement) -> Self {
        Self {
            root,
            guards: Vec::new(),
        }
    }

    /// Ties `guard` to this section's lifetime.
    pub(crate) fn keep(&mut self, guard: impl Any) {
        self.guards.push(Box::new(guard));
    }

    /// Adopts another section's guards (for nested builders).
    pub(crate) fn absorb(&mut self, other: Self) {
        let Self { guards, .. } = other;
        self.guards.extend(guards);
    }
}

/// Fraction of an element that must be on screen before it fades in.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Hides `target` (shifted by the CSS transform `from`) until it first
/// scrolls into view, then eases it into place.
pub(crate) fn reveal(target: &HtmlElement, from: &str) -> SiteResult<VisibilityObserver> {
    dom::set_css(target, "opacity", "0");
    dom::set_css(target, "transform", from);
    dom::set_css(target, "transition", "opacity 0.7s ease-out, transform 0.7s ease-out");
    let el = target.clone();
    let shown = Cell::new(false);
    let observer = VisibilityObserver::new(target, REVEAL_THRESHOLD, move |ratio| {
        if shown.get() || ratio <= 0.0 {
            return;
        }
        shown.set(true);
        dom::set_css(&el, "opacity", "1");
        dom::set_css(&el, "transform", "none");
    })?;
    Ok(observer)
}
