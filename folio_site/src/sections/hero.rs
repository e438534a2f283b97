// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero: rotating role heading, calls to action and the 3D scene slot.
//!
//! The scene slot drives a [`SceneLoader`] from three inputs: the visibility
//! observer, profile changes, and the async import started on
//! [`MountAction::StartImport`]. An import that completes after the section
//! is gone finds the loader detached and disposes its scene.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::device::DeviceProfile;
use folio_core::loader::{
    FallbackImage, GateDecision, LoaderState, MountAction, SceneConfig, SceneGate, SceneLoader,
    SceneView,
};
use folio_core::motion::RoleTicker;
use folio_core::theme::ThemeMode;
use folio_web::{SceneHandle, VisibilityObserver};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast as _;
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlImageElement};

use super::{Cleanup, Mounted};
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;

const DESCRIPTION: [&str; 2] = [
    "Crafting immersive digital experiences through code and design.",
    "Specializing in interactive 3D web experiences and creative development.",
];

const FIGMA_SVG: &str = r##"<svg viewBox="0 0 38 57" fill="none" xmlns="http://www.w3.org/2000/svg" width="100%" height="100%"><path d="M19 28.5a9.5 9.5 0 1 1 19 0a9.5 9.5 0 0 1-19 0Z" fill="#1ABCFE"/><path d="M0 47.5A9.5 9.5 0 0 1 9.5 38H19v9.5a9.5 9.5 0 1 1-19 0Z" fill="#0ACF83"/><path d="M19 0v19h9.5a9.5 9.5 0 1 0 0-19H19Z" fill="#FF7262"/><path d="M0 9.5A9.5 9.5 0 0 0 9.5 19H19V0H9.5A9.5 9.5 0 0 0 0 9.5Z" fill="#F24E1E"/><path d="M0 28.5A9.5 9.5 0 0 0 9.5 38H19V19H9.5A9.5 9.5 0 0 0 0 28.5Z" fill="#A259FF"/></svg>"##;

fn schedule_roles(ticker: &Rc<RefCell<RoleTicker>>, heading: &HtmlElement) -> Interval {
    let millis = ticker.borrow().interval().as_timer_millis();
    let ticker = Rc::clone(ticker);
    let heading = heading.clone();
    Interval::new(millis, move || {
        let role = ticker.borrow_mut().advance();
        heading.set_text_content(Some(&role.heading()));
    })
}

struct SceneSlot {
    gate: SceneGate,
    loader: SceneLoader<SceneHandle>,
    /// Set while the device policy bypasses the scene.
    bypass: Option<FallbackImage>,
    notice: HtmlElement,
    canvas: HtmlCanvasElement,
    image: HtmlImageElement,
}

impl SceneSlot {
    fn view(&self) -> SceneView {
        match &self.bypass {
            Some(fallback) => fallback.view(),
            None => self.loader.view(),
        }
    }

    fn render(&self) {
        let view = self.view();
        let (notice, live, image) = match view {
            SceneView::Placeholder(text) | SceneView::Notice(text) => {
                self.notice.set_text_content(Some(text));
                (true, false, false)
            }
            SceneView::Live => (false, true, false),
            SceneView::StaticImage { src, alt } => {
                if self.image.get_attribute("src").as_deref() != Some(src) {
                    self.image.set_src(src);
                }
                self.image.set_alt(alt);
                (false, false, true)
            }
        };
        let show = |visible: bool| if visible { "block" } else { "none" };
        dom::set_css(&self.notice, "display", show(notice));
        dom::set_css(&self.canvas, "display", show(live));
        dom::set_css(&self.image, "display", show(image));
    }

    /// Re-runs the gate. Returns whether an import must start.
    fn update(&mut self, profile: &DeviceProfile) -> bool {
        if !matches!(self.loader.state(), LoaderState::NotMounted) {
            return false;
        }
        let start = match self.gate.decision(profile) {
            GateDecision::Wait => false,
            GateDecision::Static => {
                if self.bypass.is_none() {
                    tracing::debug!("scene bypassed on this device");
                    self.bypass = Some(FallbackImage::new(*self.loader.config()));
                }
                false
            }
            GateDecision::Load => {
                self.bypass = None;
                self.loader.mount(true) == MountAction::StartImport
            }
        };
        self.render();
        start
    }

    fn image_failed(&mut self) {
        match &mut self.bypass {
            Some(fallback) => fallback.image_failed(),
            None => self.loader.fallback_failed(),
        }
        self.render();
    }
}

fn refresh(slot: &Rc<RefCell<SceneSlot>>, profile: &DeviceProfile) {
    if slot.borrow_mut().update(profile) {
        start_import(slot);
    }
}

fn start_import(slot: &Rc<RefCell<SceneSlot>>) {
    let (config, canvas) = {
        let slot = slot.borrow();
        (*slot.loader.config(), slot.canvas.clone())
    };
    let slot = Rc::clone(slot);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = folio_web::load_scene(&config, canvas).await;
        let mut slot = slot.borrow_mut();
        if matches!(slot.loader.state(), LoaderState::Loading) {
            slot.loader.resolve(outcome);
            slot.render();
        } else if let Ok(handle) = outcome {
            tracing::debug!("scene finished loading after unmount, disposing");
            handle.dispose();
        }
    });
}

fn scene_box(ctx: &Ctx, config: SceneConfig) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let frame = dom::styled(
        doc,
        "div",
        "position: relative; width: 100%; min-height: 60vh; display: flex; \
         align-items: center; justify-content: center;",
        None,
    )?;
    let notice = dom::styled(doc, "div", "opacity: 0.5; animation: folio-pulse 2s infinite;", None)?;
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.unchecked_into();
    dom::style(&canvas, "width: 100%; height: 100%; display: none;")?;
    let image: HtmlImageElement = doc.create_element("img")?.unchecked_into();
    dom::style(&image, "max-width: 100%; max-height: 100%; object-fit: contain; display: none;")?;
    dom::append_all(&frame, &[&notice, &canvas, &image])?;

    let slot = Rc::new(RefCell::new(SceneSlot {
        gate: SceneGate::new(config.visibility_threshold),
        loader: SceneLoader::new(config),
        bypass: None,
        notice,
        canvas,
        image: image.clone(),
    }));
    refresh(&slot, &ctx.profile());

    let mut mounted = Mounted::new(frame.clone());
    {
        let slot = Rc::clone(&slot);
        mounted.keep(EventListener::new(&image, "error", move |_| {
            slot.borrow_mut().image_failed();
        }));
    }
    {
        let slot = Rc::clone(&slot);
        let ctx = ctx.clone();
        let observer = VisibilityObserver::new(&frame, config.visibility_threshold, move |ratio| {
            let opened = slot.borrow_mut().gate.observe(ratio);
            if opened {
                refresh(&slot, &ctx.profile());
            }
        })?;
        mounted.keep(observer);
    }
    {
        let slot = Rc::clone(&slot);
        mounted.keep(ctx.on_profile(move |profile| refresh(&slot, &profile)));
    }
    mounted.keep(Cleanup::new(move || {
        if let Ok(mut slot) = slot.try_borrow_mut()
            && let Some(handle) = slot.loader.unmount()
        {
            handle.dispose();
        }
    }));
    Ok(mounted)
}

fn tech_logos(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let row = dom::styled(
        doc,
        "div",
        "margin-top: 56px; display: flex; align-items: center; flex-wrap: wrap; gap: 20px;",
        None,
    )?;
    let label = dom::styled(doc, "span", "font-size: 0.875rem; opacity: 0.8;", Some("Tech I work with:"))?;
    row.append_child(&label)?;

    let logo = |src: &str, alt: &str| -> SiteResult<HtmlElement> {
        let img = dom::styled(doc, "img", "width: 28px; height: 28px; object-fit: contain;", None)?;
        img.set_attribute("src", src)?;
        img.set_attribute("alt", alt)?;
        Ok(img)
    };
    let figma = dom::styled(doc, "div", "width: 24px; height: 24px;", None)?;
    figma.set_inner_html(FIGMA_SVG);
    figma.set_attribute("aria-label", "Figma")?;
    let cursor = logo("/cursor.svg", "Cursor")?;
    let spline = logo("/idpEx9OuCE_1743870884923.png", "Spline")?;
    let framer = logo("/framer-svgrepo-com.svg", "Framer")?;
    dom::append_all(&row, &[&cursor, &figma, &spline, &framer])?;

    let paint = move |mode: ThemeMode| {
        dom::set_css(&framer, "filter", if mode.is_dark() { "invert(1)" } else { "none" });
    };
    paint(ctx.mode());
    let mut mounted = Mounted::new(row);
    mounted.keep(ctx.on_theme(paint));
    Ok(mounted)
}

/// Builds the hero section.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let root = dom::styled(
        doc,
        "section",
        "position: relative; min-height: 100vh; display: grid; \
         grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); align-items: center; \
         gap: 24px; padding: 120px 24px 48px; max-width: 1280px; margin: 0 auto;",
        None,
    )?;
    root.set_id("home");

    let copy = dom::styled(doc, "div", "position: relative; z-index: 20;", None)?;
    let ticker = Rc::new(RefCell::new(RoleTicker::new(&ctx.profile())));
    let heading = dom::styled(
        doc,
        "h1",
        "font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 800; line-height: 1.1; \
         min-height: 2.4em; margin: 0;",
        Some(&ticker.borrow().current().heading()),
    )?;
    heading.set_attribute("aria-live", "polite")?;

    let description = dom::styled(doc, "p", "font-size: 1rem; line-height: 1.5; font-weight: 500;", None)?;
    description.set_text_content(Some(DESCRIPTION[0]));
    let line_break = doc.create_element("br")?;
    description.append_child(&line_break)?;
    description.append_child(&doc.create_text_node(DESCRIPTION[1]))?;

    let actions = dom::styled(doc, "div", "margin-top: 40px; display: flex; flex-wrap: wrap; gap: 16px;", None)?;
    let primary = dom::styled(
        doc,
        "a",
        "padding: 12px 24px; border-radius: 8px; font-weight: 500; text-decoration: none; \
         color: #ffffff; background: linear-gradient(90deg, #1f2937, #000000);",
        Some("View Projects"),
    )?;
    primary.set_attribute("href", "#projects")?;
    let secondary = dom::styled(
        doc,
        "a",
        "padding: 12px 24px; border-radius: 8px; font-weight: 500; text-decoration: none; \
         border: 1px solid currentColor; color: inherit;",
        Some("Get in Touch"),
    )?;
    secondary.set_attribute("href", "#contact")?;
    dom::append_all(&actions, &[&primary, &secondary])?;

    let logos = tech_logos(ctx)?;
    dom::append_all(&copy, &[&heading, &description, &actions, &logos.root])?;

    let scene = scene_box(ctx, SceneConfig::HERO)?;
    dom::append_all(&root, &[&scene.root, &copy])?;

    let colors = {
        let description = description.clone();
        move |mode: ThemeMode| {
            dom::set_css(&description, "color", mode.muted());
        }
    };
    colors(ctx.mode());

    let mut mounted = Mounted::new(root);
    mounted.absorb(logos);
    mounted.absorb(scene);
    mounted.keep(ctx.on_theme(colors));

    let roles = Rc::new(RefCell::new(schedule_roles(&ticker, &heading)));
    {
        let roles = Rc::clone(&roles);
        mounted.keep(ctx.on_profile(move |profile| {
            if ticker.borrow_mut().update_profile(&profile) {
                tracing::debug!(interval = ?ticker.borrow().interval(), "role interval changed");
                *roles.borrow_mut() = schedule_roles(&ticker, &heading);
            }
        }));
    }
    mounted.keep(roles);

    Ok(mounted)
}
