// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked effects shared by the case-study pages.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::motion::{HoverStyle, ParallaxFrame, Spring, page_progress, scroll_progress};
use folio_core::time::{Duration, Timestamp};
use folio_core::transform::Transform3d;
use folio_web::RafLoop;
use gloo::events::EventListener;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;
use crate::sections::Mounted;

/// The fixed reading-progress bar, eased by [`Spring::PROGRESS`].
///
/// The frame loop only runs while the spring is moving.
pub(crate) fn progress_bar(ctx: &Ctx) -> SiteResult<Mounted> {
    let bar = dom::styled(
        &ctx.document,
        "div",
        "position: fixed; top: 0; left: 0; right: 0; height: 4px; z-index: 70; \
         transform-origin: 0 50%; transform: scaleX(0); \
         background: linear-gradient(90deg, #4f46e5, #9333ea, #db2777);",
        None,
    )?;
    bar.set_attribute("aria-hidden", "true")?;

    let spring = Rc::new(RefCell::new(Spring::PROGRESS));
    let last_frame: Rc<Cell<Option<Timestamp>>> = Rc::new(Cell::new(None));
    let frames = {
        let spring = Rc::clone(&spring);
        let bar = bar.clone();
        Rc::new(RafLoop::new(move |now| {
            let dt = last_frame
                .replace(Some(now))
                .map_or(Duration::ZERO, |prev| now - prev);
            let mut spring = spring.borrow_mut();
            let value = spring.step(dt);
            dom::set_css(&bar, "transform", &format!("scaleX({value})"));
            let moving = !spring.is_settled();
            if !moving {
                last_frame.set(None);
            }
            moving
        }))
    };

    let retarget = {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let spring = Rc::clone(&spring);
        let frames = Rc::clone(&frames);
        move || {
            let scroll_height = document
                .document_element()
                .map_or(0.0, |el| f64::from(el.scroll_height()));
            let progress = page_progress(
                window.scroll_y().unwrap_or(0.0),
                scroll_height,
                dom::viewport_height(&window),
            );
            spring.borrow_mut().set_target(progress);
            frames.start();
        }
    };
    retarget();

    let mut mounted = Mounted::new(bar);
    mounted.keep(EventListener::new(&ctx.window, "scroll", move |_| retarget()));
    mounted.keep(frames);
    Ok(mounted)
}

/// Images that drift and tilt as they cross the viewport.
#[derive(Default)]
pub(crate) struct Parallax {
    frames: Vec<(HtmlElement, usize)>,
}

impl Parallax {
    /// Builds an image frame and registers it; `index` varies its motion.
    pub(crate) fn image(
        &mut self,
        doc: &Document,
        src: &str,
        alt: &str,
        index: usize,
    ) -> SiteResult<HtmlElement> {
        let frame = figure(doc, src, alt)?;
        self.frames.push((frame.clone(), index));
        Ok(frame)
    }

    fn apply(&self, viewport_height: f64) {
        for (frame, index) in &self.frames {
            let rect = frame.get_bounding_client_rect();
            let progress = scroll_progress(rect.top(), rect.height(), viewport_height);
            let styling = ParallaxFrame::at(progress, *index);
            let css = format!("perspective(1000px) {}", styling.transform().to_css());
            dom::set_css(frame, "transform", &css);
            dom::set_css(frame, "opacity", &styling.opacity.to_string());
            dom::set_css(frame, "filter", &styling.filter());
        }
    }

    /// Starts tracking scroll and viewport size.
    pub(crate) fn attach(self, ctx: &Ctx, mounted: &mut Mounted) {
        let parallax = Rc::new(self);
        parallax.apply(dom::viewport_height(&ctx.window));
        for kind in ["scroll", "resize"] {
            let parallax = Rc::clone(&parallax);
            let window = ctx.window.clone();
            mounted.keep(EventListener::new(&ctx.window, kind, move |_| {
                parallax.apply(dom::viewport_height(&window));
            }));
        }
    }
}

/// A rounded image frame. The image is lazily loaded.
pub(crate) fn figure(doc: &Document, src: &str, alt: &str) -> SiteResult<HtmlElement> {
    let frame = dom::styled(
        doc,
        "figure",
        "margin: 0; border-radius: 16px; overflow: hidden; will-change: transform, opacity; \
         box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);",
        None,
    )?;
    let img = dom::styled(
        doc,
        "img",
        "display: block; width: 100%; height: auto; transition: transform 0.5s ease, filter 0.5s ease;",
        None,
    )?;
    img.set_attribute("src", src)?;
    img.set_attribute("alt", alt)?;
    img.set_attribute("loading", "lazy")?;
    frame.append_child(&img)?;
    Ok(frame)
}

/// Adds the per-index hover emphasis to an image frame built by
/// [`figure`].
pub(crate) fn hover_emphasis(frame: &HtmlElement, index: usize, mounted: &mut Mounted) {
    let Some(img) = frame
        .first_element_child()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = HoverStyle::for_index(index);
    let hovered = (Transform3d::from_scale(style.scale)
        * Transform3d::from_rotation_y_deg(style.rotate_y_deg)
        * Transform3d::from_rotation_x_deg(style.rotate_x_deg))
    .to_css();
    let brightness = format!("brightness({})", style.brightness);
    {
        let img = img.clone();
        mounted.keep(EventListener::new(frame, "mouseenter", move |_| {
            dom::set_css(&img, "transform", &hovered);
            dom::set_css(&img, "filter", &brightness);
        }));
    }
    mounted.keep(EventListener::new(frame, "mouseleave", move |_| {
        dom::set_css(&img, "transform", "none");
        dom::set_css(&img, "filter", "none");
    }));
}
