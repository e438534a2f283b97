// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor dot and its fading trail. Desktop pointers only.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::motion::{CursorTrail, TrailConfig};
use folio_core::theme::ThemeMode;
use folio_web::RafLoop;
use gloo::events::EventListener;
use wasm_bindgen::JsCast as _;
use web_sys::{HtmlElement, MouseEvent};

use super::Mounted;
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;

const CURSOR_RADIUS: f64 = 6.0;

fn render(trail: &CursorTrail, cursor: &HtmlElement, dots: &[HtmlElement], mode: ThemeMode) {
    let (x, y) = trail.pointer();
    dom::set_css(
        cursor,
        "transform",
        &format!("translate3d({}px, {}px, 0)", x - CURSOR_RADIUS, y - CURSOR_RADIUS),
    );
    for (el, dot) in dots.iter().zip(trail.dots()) {
        dom::set_css(
            el,
            "transform",
            &format!("translate3d({}px, {}px, 0) scale({})", dot.x, dot.y, dot.scale),
        );
        dom::set_css(el, "opacity", &dot.opacity.to_string());
        match dot.glow {
            Some(glow) => {
                dom::set_css(el, "box-shadow", &glow.box_shadow(mode));
                dom::set_css(el, "filter", &format!("blur({}px)", glow.filter_blur));
            }
            None => {
                dom::set_css(el, "box-shadow", "none");
                dom::set_css(el, "filter", "none");
            }
        }
    }
}

/// Builds the trail layer. It stays hidden and idle whenever the profile
/// disables pointer effects.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let config = TrailConfig::DEFAULT;
    let layer = dom::styled(
        doc,
        "div",
        "position: fixed; inset: 0; pointer-events: none; z-index: 9999; overflow: hidden;",
        None,
    )?;
    layer.set_attribute("aria-hidden", "true")?;

    let dot_css = format!(
        "position: absolute; left: 0; top: 0; width: {d}px; height: {d}px; \
         border-radius: 9999px; background: #6366f1; will-change: transform, opacity;",
        d = config.dot_radius * 2.0
    );
    let mut dots = Vec::with_capacity(config.length);
    for _ in 0..config.length {
        let dot = dom::styled(doc, "div", &dot_css, None)?;
        layer.append_child(&dot)?;
        dots.push(dot);
    }
    let cursor = dom::styled(
        doc,
        "div",
        &format!(
            "position: absolute; left: 0; top: 0; width: {d}px; height: {d}px; \
             border-radius: 9999px; border: 2px solid #818cf8; mix-blend-mode: difference;",
            d = CURSOR_RADIUS * 2.0
        ),
        None,
    )?;
    layer.append_child(&cursor)?;

    let trail = Rc::new(RefCell::new(CursorTrail::new(config)));
    let mode = Rc::new(Cell::new(ctx.mode()));

    let frames = {
        let trail = Rc::clone(&trail);
        let mode = Rc::clone(&mode);
        Rc::new(RafLoop::new(move |now| {
            let mut trail = trail.borrow_mut();
            trail.frame(now);
            render(&trail, &cursor, &dots, mode.get());
            true
        }))
    };

    let enabled = CursorTrail::enabled_for(&ctx.profile());
    dom::set_css(&layer, "display", if enabled { "block" } else { "none" });
    if enabled {
        frames.start();
    }

    let mut mounted = Mounted::new(layer.clone());

    mounted.keep(EventListener::new(&ctx.window, "pointermove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            trail
                .borrow_mut()
                .pointer_moved(f64::from(event.client_x()), f64::from(event.client_y()));
        }
    }));

    mounted.keep(ctx.on_theme(move |next| mode.set(next)));

    {
        let frames = Rc::clone(&frames);
        mounted.keep(ctx.on_profile(move |profile| {
            let enabled = CursorTrail::enabled_for(&profile);
            dom::set_css(&layer, "display", if enabled { "block" } else { "none" });
            if enabled {
                frames.start();
            } else {
                frames.stop();
            }
        }));
    }
    mounted.keep(frames);

    Ok(mounted)
}
