// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed header: logo, section links, theme toggle and the mobile menu.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::device::DeviceProfile;
use folio_core::theme::{THEME_ANIMATION, ThemeMode};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;

use super::Mounted;
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;
use crate::routing::Route;

const LINKS: [(&str, &str); 3] = [("About", "about"), ("Projects", "projects"), ("Contact", "contact")];

/// Scroll offset past which the header gets its solid background.
const SCROLLED_PX: f64 = 10.0;

struct Parts {
    header: HtmlElement,
    toggle: HtmlElement,
    menu: HtmlElement,
    links: Vec<HtmlElement>,
}

impl Parts {
    fn paint(&self, mode: ThemeMode, scrolled: bool) {
        let background = if scrolled { mode.surface() } else { "transparent" };
        dom::set_css(&self.header, "background-color", background);
        dom::set_css(
            &self.header,
            "box-shadow",
            if scrolled { "0 1px 12px rgba(0, 0, 0, 0.12)" } else { "none" },
        );
        dom::set_css(&self.header, "padding", if scrolled { "12px 24px" } else { "20px 24px" });
        dom::set_css(&self.menu, "background-color", mode.surface());
        for link in &self.links {
            dom::set_css(link, "color", mode.foreground());
        }
        self.toggle
            .set_text_content(Some(if mode.is_dark() { "\u{2600}" } else { "\u{263e}" }));
        let label = format!("Switch to {} mode", mode.toggled().as_str());
        let _ = self.toggle.set_attribute("aria-label", &label);
    }

    fn show_for(&self, profile: DeviceProfile, links_row: &HtmlElement, burger: &HtmlElement) {
        dom::set_css(links_row, "display", if profile.is_mobile { "none" } else { "flex" });
        dom::set_css(burger, "display", if profile.is_mobile { "block" } else { "none" });
        if !profile.is_mobile {
            dom::set_css(&self.menu, "display", "none");
        }
    }
}

/// Builds the header. Off the home page the section links point back to
/// the home page anchors.
pub(crate) fn mount(ctx: &Ctx, route: Route) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let header = dom::styled(
        doc,
        "header",
        "position: fixed; top: 0; left: 0; right: 0; z-index: 50; display: flex; \
         align-items: center; justify-content: space-between; \
         transition: background-color 0.3s, padding 0.3s, box-shadow 0.3s;",
        None,
    )?;

    let logo = dom::styled(
        doc,
        "a",
        "font-weight: 700; font-size: 1.5rem; text-decoration: none; \
         background: linear-gradient(90deg, #4f46e5, #9333ea); \
         -webkit-background-clip: text; background-clip: text; color: transparent;",
        Some("JB.Zetsu"),
    )?;
    logo.set_attribute("href", Route::Home.path())?;

    let prefix = if route == Route::Home { "#" } else { "/#" };
    let links_row = dom::styled(doc, "nav", "display: flex; gap: 32px; align-items: center;", None)?;
    let menu = dom::styled(
        doc,
        "nav",
        "display: none; position: absolute; top: 100%; left: 0; right: 0; \
         flex-direction: column; gap: 16px; padding: 16px 24px;",
        None,
    )?;
    let mut links = Vec::with_capacity(LINKS.len() * 2);
    for (label, anchor) in LINKS {
        let href = format!("{prefix}{anchor}");
        for row in [&links_row, &menu] {
            let link = dom::styled(doc, "a", "text-decoration: none; font-weight: 500;", Some(label))?;
            link.set_attribute("href", &href)?;
            row.append_child(&link)?;
            links.push(link);
        }
    }

    let toggle = dom::styled(
        doc,
        "button",
        "border: none; background: none; cursor: pointer; font-size: 1.25rem; \
         width: 40px; height: 40px; border-radius: 9999px; \
         transition: transform 0.6s ease, background-color 0.3s;",
        None,
    )?;
    toggle.set_attribute("type", "button")?;
    let burger = dom::styled(
        doc,
        "button",
        "border: none; background: none; cursor: pointer; font-size: 1.5rem;",
        Some("\u{2630}"),
    )?;
    burger.set_attribute("type", "button")?;
    burger.set_attribute("aria-label", "Toggle menu")?;

    let controls = dom::styled(doc, "div", "display: flex; gap: 8px; align-items: center;", None)?;
    dom::append_all(&controls, &[&links_row, &toggle, &burger])?;
    dom::append_all(&header, &[&logo, &controls, &menu])?;

    let parts = Rc::new(Parts {
        header: header.clone(),
        toggle: toggle.clone(),
        menu: menu.clone(),
        links,
    });
    let mode = Rc::new(Cell::new(ctx.mode()));
    let scrolled = Rc::new(Cell::new(ctx.window.scroll_y().unwrap_or(0.0) > SCROLLED_PX));
    parts.paint(mode.get(), scrolled.get());
    parts.show_for(ctx.profile(), &links_row, &burger);

    let mut mounted = Mounted::new(header);

    {
        let parts = Rc::clone(&parts);
        let mode = Rc::clone(&mode);
        let scrolled = Rc::clone(&scrolled);
        let window = ctx.window.clone();
        mounted.keep(EventListener::new(&ctx.window, "scroll", move |_| {
            let now_scrolled = window.scroll_y().unwrap_or(0.0) > SCROLLED_PX;
            if scrolled.replace(now_scrolled) != now_scrolled {
                parts.paint(mode.get(), now_scrolled);
            }
        }));
    }

    {
        let parts = Rc::clone(&parts);
        let mode = Rc::clone(&mode);
        mounted.keep(ctx.on_theme(move |next| {
            mode.set(next);
            parts.paint(next, scrolled.get());
        }));
    }

    {
        let ctx = ctx.clone();
        let button = toggle.clone();
        let settle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        mounted.keep(EventListener::new(&toggle, "click", move |_| {
            let next = ctx.theme.borrow_mut().toggle(folio_web::now());
            tracing::debug!(mode = next.as_str(), "theme toggled");
            dom::set_css(&button, "transform", "rotate(360deg) scale(1.1)");
            let button = button.clone();
            let timeout = Timeout::new(THEME_ANIMATION.as_timer_millis(), move || {
                dom::set_css(&button, "transform", "none");
            });
            settle.borrow_mut().replace(timeout);
        }));
    }

    {
        let open = Rc::new(Cell::new(false));
        let burger_open = Rc::clone(&open);
        let burger_menu = menu.clone();
        mounted.keep(EventListener::new(&burger, "click", move |_| {
            let next = !burger_open.get();
            burger_open.set(next);
            dom::set_css(&burger_menu, "display", if next { "flex" } else { "none" });
        }));
        // Following a link closes the menu.
        let target = menu.clone();
        mounted.keep(EventListener::new(&target, "click", move |_| {
            open.set(false);
            dom::set_css(&menu, "display", "none");
        }));
    }

    {
        let parts = Rc::clone(&parts);
        mounted.keep(ctx.on_profile(move |profile| {
            parts.show_for(profile, &links_row, &burger);
        }));
    }

    Ok(mounted)
}
