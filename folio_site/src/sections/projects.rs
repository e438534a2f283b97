// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Featured projects: the card carousel, its slider and the detail panel.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::backend::CardStage;
use folio_core::carousel::{Carousel, CarouselConfig, Direction, TapOutcome};
use folio_core::catalog::{PROJECTS, Project};
use folio_core::motion::{self, Rect};
use folio_core::theme::ThemeMode;
use folio_web::CardPresenter;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, PointerEvent};

use super::Mounted;
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;

const SUBTITLE: &str = "Explore my latest work showcasing interactive 3D experiences, \
                        creative coding, and immersive digital solutions.";

/// Features listed on the card face; the rest are in the detail panel.
const CARD_FEATURES: usize = 3;

/// The two faces of a card body: the short summary and the expanded detail
/// shown while the card is hovered or tapped once.
struct CardReveal {
    summary: HtmlElement,
    detail: HtmlElement,
}

impl CardReveal {
    fn show(&self, expanded: bool) {
        dom::set_css(&self.summary, "display", if expanded { "none" } else { "block" });
        dom::set_css(&self.detail, "display", if expanded { "block" } else { "none" });
    }
}

struct Stage {
    carousel: Carousel,
    stage: CardStage,
    presenter: CardPresenter,
    reveals: Vec<CardReveal>,
    expanded: Option<usize>,
    fill: HtmlElement,
    thumb: HtmlElement,
}

impl Stage {
    fn sync(&mut self) {
        let layout = self.carousel.layout();
        self.stage.present(layout, &mut self.presenter);
        let percent = format!("{}%", self.carousel.slider_value());
        dom::set_css(&self.fill, "width", &percent);
        dom::set_css(&self.thumb, "left", &percent);

        let expanded = self.carousel.hovered();
        if expanded != self.expanded {
            for (index, reveal) in self.reveals.iter().enumerate() {
                reveal.show(self.carousel.is_revealed(index));
            }
            self.expanded = expanded;
        }
    }

    fn relayout(&mut self) {
        if self.presenter.measure() {
            self.stage.invalidate();
        }
        self.sync();
    }
}

/// The detail overlay for upcoming projects.
struct Details {
    overlay: HtmlElement,
    title: HtmlElement,
    body: HtmlElement,
    features: HtmlElement,
    technologies: HtmlElement,
}

impl Details {
    fn build(ctx: &Ctx) -> SiteResult<(Self, HtmlElement)> {
        let doc = &ctx.document;
        let overlay = dom::styled(
            doc,
            "div",
            "position: fixed; inset: 0; z-index: 60; display: none; align-items: center; \
             justify-content: center; background: rgba(0, 0, 0, 0.6); padding: 24px;",
            None,
        )?;
        overlay.set_attribute("role", "dialog")?;
        overlay.set_attribute("aria-modal", "true")?;
        let panel = dom::styled(
            doc,
            "div",
            "max-width: 640px; width: 100%; max-height: 85vh; overflow-y: auto; \
             border-radius: 16px; padding: 32px; position: relative;",
            None,
        )?;
        let close = dom::styled(
            doc,
            "button",
            "position: absolute; top: 12px; right: 16px; border: none; background: none; \
             font-size: 1.5rem; cursor: pointer; color: inherit;",
            Some("\u{00d7}"),
        )?;
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Close")?;
        let title = dom::styled(doc, "h3", "font-size: 1.75rem; margin: 0 0 16px;", None)?;
        let body = dom::styled(doc, "p", "line-height: 1.6;", None)?;
        let features_heading = dom::styled(doc, "h4", "margin: 24px 0 8px;", Some("Features"))?;
        let features = dom::styled(doc, "ul", "padding-left: 20px; line-height: 1.8;", None)?;
        let tech_heading = dom::styled(doc, "h4", "margin: 24px 0 8px;", Some("Technologies"))?;
        let technologies = dom::styled(doc, "div", "display: flex; flex-wrap: wrap; gap: 8px;", None)?;
        let soon = dom::styled(
            doc,
            "p",
            "margin-top: 24px; font-weight: 600; opacity: 0.7;",
            Some("Coming soon. Stay tuned!"),
        )?;
        dom::append_all(
            &panel,
            &[&close, &title, &body, &features_heading, &features, &tech_heading, &technologies, &soon],
        )?;
        overlay.append_child(&panel)?;
        Ok((
            Self {
                overlay,
                title,
                body,
                features,
                technologies,
            },
            panel,
        ))
    }

    fn show(&self, doc: &web_sys::Document, project: &Project) -> SiteResult<()> {
        self.title.set_text_content(Some(project.title));
        self.body.set_text_content(Some(project.long_description));
        dom::clear(&self.features);
        for feature in project.features {
            let item = dom::element(doc, "li")?;
            item.set_text_content(Some(feature));
            self.features.append_child(&item)?;
        }
        dom::clear(&self.technologies);
        for tech in project.technologies {
            let chip = dom::chip(doc, tech)?;
            self.technologies.append_child(&chip)?;
        }
        dom::set_css(&self.overlay, "display", "flex");
        Ok(())
    }

    fn hide(&self) {
        dom::set_css(&self.overlay, "display", "none");
    }
}

/// Label and value rows shown in a card's expanded detail.
fn detail_facts(project: &Project) -> [(&'static str, &'static str); 2] {
    [("Role", project.role), ("Timeline", project.duration)]
}

/// The expanded card body: long description, every feature, role and
/// timeline. Hidden until the card is revealed.
fn card_detail(doc: &web_sys::Document, project: &Project) -> SiteResult<HtmlElement> {
    let detail = dom::styled(doc, "div", "display: none;", None)?;
    let long = dom::styled(doc, "p", "margin: 0 0 12px; font-size: 0.9rem; opacity: 0.85;", Some(project.long_description))?;
    let heading = dom::styled(doc, "h4", "margin: 0 0 6px; font-size: 0.85rem;", Some("Key Features"))?;
    let features = dom::styled(doc, "ul", "margin: 0 0 12px; padding-left: 18px; font-size: 0.8rem;", None)?;
    for feature in project.features {
        let item = dom::element(doc, "li")?;
        item.set_text_content(Some(feature));
        features.append_child(&item)?;
    }
    let facts = dom::styled(
        doc,
        "div",
        "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; font-size: 0.8rem;",
        None,
    )?;
    for (label, value) in detail_facts(project) {
        let fact = dom::styled(doc, "div", "", None)?;
        let name = dom::styled(doc, "div", "font-weight: 600;", Some(label))?;
        let text = dom::styled(doc, "div", "opacity: 0.8;", Some(value))?;
        dom::append_all(&fact, &[&name, &text])?;
        facts.append_child(&fact)?;
    }
    dom::append_all(&detail, &[&long, &heading, &features, &facts])?;
    Ok(detail)
}

/// One card: the positioned shell, the inner face that tilts and the
/// summary/detail pair swapped on reveal.
fn card(
    doc: &web_sys::Document,
    project: &Project,
) -> SiteResult<(HtmlElement, HtmlElement, CardReveal)> {
    let shell = dom::styled(doc, "article", "width: min(340px, 80vw); cursor: pointer;", None)?;
    shell.set_attribute("aria-label", project.title)?;
    let face = dom::styled(
        doc,
        "div",
        "border-radius: 20px; overflow: hidden; transition: transform 0.2s ease-out, box-shadow 0.3s; \
         transform-style: preserve-3d;",
        None,
    )?;
    let banner = dom::styled(
        doc,
        "div",
        &format!(
            "height: 160px; background-color: {}; background-image: url(\"{}\"); \
             background-size: cover; background-position: center; position: relative;",
            project.color, project.image_url
        ),
        None,
    )?;
    let badges = dom::styled(
        doc,
        "div",
        "position: absolute; bottom: 12px; left: 12px; display: flex; gap: 8px;",
        None,
    )?;
    for text in [project.role, project.duration] {
        let badge = dom::styled(
            doc,
            "span",
            "font-size: 0.7rem; padding: 3px 8px; border-radius: 6px; \
             background: rgba(0, 0, 0, 0.55); color: #ffffff;",
            Some(text),
        )?;
        badges.append_child(&badge)?;
    }
    banner.append_child(&badges)?;

    let body = dom::styled(doc, "div", "padding: 20px;", None)?;
    let title = dom::styled(doc, "h3", "margin: 0 0 8px; font-size: 1.25rem;", Some(project.title))?;
    let description = dom::styled(doc, "p", "margin: 0 0 12px; font-size: 0.9rem; opacity: 0.8;", Some(project.description))?;
    let features = dom::styled(doc, "ul", "margin: 0 0 12px; padding-left: 18px; font-size: 0.85rem;", None)?;
    for feature in project.highlight_features(CARD_FEATURES) {
        let item = dom::element(doc, "li")?;
        item.set_text_content(Some(feature));
        features.append_child(&item)?;
    }
    let tags = dom::styled(doc, "div", "display: flex; flex-wrap: wrap; gap: 6px;", None)?;
    for tech in project.technologies {
        let chip = dom::chip(doc, tech)?;
        tags.append_child(&chip)?;
    }
    let cta = dom::styled(
        doc,
        "div",
        "margin-top: 16px; font-weight: 600; font-size: 0.9rem;",
        Some(if project.is_published() { "View Case Study \u{2192}" } else { "Coming Soon" }),
    )?;
    let summary = dom::styled(doc, "div", "", None)?;
    dom::append_all(&summary, &[&description, &features])?;
    let detail = card_detail(doc, project)?;
    dom::append_all(&body, &[&title, &summary, &detail, &tags, &cta])?;
    dom::append_all(&face, &[&banner, &body])?;
    shell.append_child(&face)?;
    Ok((shell, face, CardReveal { summary, detail }))
}

fn bounding_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

fn open(ctx: &Ctx, details: &Details, index: usize) {
    let Some(project) = PROJECTS.get(index) else {
        return;
    };
    match project.link() {
        Some(link) => {
            tracing::debug!(link, "opening case study");
            if let Err(err) = ctx.window.location().set_href(link) {
                tracing::warn!(?err, "navigation failed");
            }
        }
        None => {
            if let Err(err) = details.show(&ctx.document, project) {
                tracing::warn!(%err, "could not show project details");
            }
        }
    }
}

fn slider_button(doc: &web_sys::Document, label: &str, glyph: &str) -> SiteResult<HtmlElement> {
    let button = dom::styled(
        doc,
        "button",
        "width: 44px; height: 44px; border-radius: 9999px; border: 1px solid currentColor; \
         background: none; color: inherit; cursor: pointer; font-size: 1.1rem;",
        Some(glyph),
    )?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", label)?;
    Ok(button)
}

/// Builds the projects section.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let root = dom::section(doc, "projects")?;
    let heading = dom::heading(doc, "h2", "Featured Projects")?;
    dom::set_css(&heading, "text-align", "center");
    let subtitle = dom::styled(
        doc,
        "p",
        "text-align: center; max-width: 640px; margin: 0 auto 48px; opacity: 0.8;",
        Some(SUBTITLE),
    )?;

    let ghost = dom::styled(
        doc,
        "div",
        "position: absolute; top: 50%; left: 50%; translate: -50% -50%; white-space: nowrap; \
         font-size: clamp(2rem, 8vw, 6rem); font-weight: 900; opacity: 0.05; pointer-events: none;",
        Some("I like to build cool stuff"),
    )?;
    ghost.set_attribute("aria-hidden", "true")?;
    let arena = dom::styled(
        doc,
        "div",
        "position: relative; height: 620px; perspective: 1200px; overflow: hidden;",
        None,
    )?;
    arena.append_child(&ghost)?;

    let mut shells = Vec::with_capacity(PROJECTS.len());
    let mut faces = Vec::with_capacity(PROJECTS.len());
    let mut reveals = Vec::with_capacity(PROJECTS.len());
    for project in PROJECTS {
        let (shell, face, reveal) = card(doc, project)?;
        arena.append_child(&shell)?;
        shells.push(shell);
        faces.push(face);
        reveals.push(reveal);
    }

    let controls = dom::styled(
        doc,
        "div",
        "display: flex; align-items: center; justify-content: center; gap: 20px; margin-top: 24px;",
        None,
    )?;
    let prev = slider_button(doc, "Previous project", "\u{2190}")?;
    let next = slider_button(doc, "Next project", "\u{2192}")?;
    let track = dom::styled(
        doc,
        "div",
        "position: relative; width: min(360px, 60vw); height: 6px; border-radius: 9999px; \
         background: rgba(128, 128, 128, 0.25); cursor: pointer; touch-action: none;",
        None,
    )?;
    track.set_attribute("role", "slider")?;
    track.set_attribute("aria-label", "Project")?;
    let fill = dom::styled(
        doc,
        "div",
        "position: absolute; left: 0; top: 0; bottom: 0; border-radius: 9999px; \
         background: linear-gradient(90deg, #4f46e5, #9333ea);",
        None,
    )?;
    let thumb = dom::styled(
        doc,
        "div",
        "position: absolute; top: 50%; width: 18px; height: 18px; border-radius: 9999px; \
         translate: -50% -50%; background: #ffffff; box-shadow: 0 1px 6px rgba(0, 0, 0, 0.3);",
        None,
    )?;
    dom::append_all(&track, &[&fill, &thumb])?;
    dom::append_all(&controls, &[&prev, &track, &next])?;

    let (details, panel) = Details::build(ctx)?;
    let panel_face = panel.clone();
    dom::append_all(&root, &[&heading, &subtitle, &arena, &controls, &details.overlay])?;

    let config = CarouselConfig::WEB;
    let stage = Rc::new(RefCell::new(Stage {
        carousel: Carousel::new(PROJECTS.len(), config)?,
        stage: CardStage::new(),
        presenter: CardPresenter::new(arena, shells.clone()),
        reveals,
        expanded: None,
        fill,
        thumb,
    }));
    stage.borrow_mut().sync();
    let details = Rc::new(details);

    let mut mounted = Mounted::new(root);

    for (direction, button) in [(Direction::Previous, &prev), (Direction::Next, &next)] {
        let stage = Rc::clone(&stage);
        mounted.keep(EventListener::new(button, "click", move |_| {
            let mut stage = stage.borrow_mut();
            stage.carousel.rotate(direction, folio_web::now());
            stage.sync();
        }));
    }

    {
        let percent_at = {
            let track = track.clone();
            move |event: &PointerEvent| {
                let rect = track.get_bounding_client_rect();
                Carousel::percent_from_pointer(f64::from(event.client_x()), rect.left(), rect.width())
            }
        };
        let moved = Rc::new(Cell::new(false));

        let down_stage = Rc::clone(&stage);
        let down_track = track.clone();
        let down_moved = Rc::clone(&moved);
        let down_percent = percent_at.clone();
        mounted.keep(EventListener::new(&track, "pointerdown", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let _ = down_track.set_pointer_capture(event.pointer_id());
            down_moved.set(false);
            let mut stage = down_stage.borrow_mut();
            stage.carousel.drag_slider(down_percent(event), folio_web::now());
            stage.sync();
        }));

        let move_stage = Rc::clone(&stage);
        let move_moved = Rc::clone(&moved);
        let move_percent = percent_at.clone();
        mounted.keep(EventListener::new(&track, "pointermove", move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let mut stage = move_stage.borrow_mut();
            if stage.carousel.is_dragging() {
                move_moved.set(true);
                stage.carousel.drag_slider(move_percent(event), folio_web::now());
                stage.sync();
            }
        }));

        for kind in ["pointerup", "pointercancel"] {
            let stage = Rc::clone(&stage);
            let moved = Rc::clone(&moved);
            let percent_at = percent_at.clone();
            mounted.keep(EventListener::new(&track, kind, move |event| {
                let mut stage = stage.borrow_mut();
                if !stage.carousel.is_dragging() {
                    return;
                }
                let now = folio_web::now();
                match event.dyn_ref::<PointerEvent>() {
                    Some(event) if !moved.get() => stage.carousel.click_slider(percent_at(event), now),
                    _ => stage.carousel.release_slider(now),
                }
                stage.sync();
            }));
        }
    }

    for (index, (shell, face)) in shells.iter().zip(&faces).enumerate() {
        {
            let stage = Rc::clone(&stage);
            let ctx = ctx.clone();
            mounted.keep(EventListener::new(shell, "mouseenter", move |_| {
                if !ctx.profile().is_mobile {
                    let mut stage = stage.borrow_mut();
                    stage.carousel.hover(Some(index));
                    stage.sync();
                }
            }));
        }
        {
            let stage = Rc::clone(&stage);
            let face = face.clone();
            mounted.keep(EventListener::new(shell, "mouseleave", move |_| {
                let mut stage = stage.borrow_mut();
                if stage.carousel.hovered() == Some(index) {
                    stage.carousel.hover(None);
                    stage.sync();
                }
                dom::set_css(&face, "transform", "none");
            }));
        }
        {
            let ctx = ctx.clone();
            let face = face.clone();
            let stage = Rc::clone(&stage);
            mounted.keep(EventListener::new(shell, "mousemove", move |event| {
                if !ctx.profile().pointer_effects() || stage.borrow().carousel.active_index() != index {
                    return;
                }
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
                let tilt = motion::tilt(pointer, &bounding_rect(&face));
                let css = format!("perspective(1000px) {}", tilt.transform().to_css());
                dom::set_css(&face, "transform", &css);
            }));
        }
        {
            let ctx = ctx.clone();
            let stage = Rc::clone(&stage);
            let details = Rc::clone(&details);
            mounted.keep(EventListener::new(shell, "click", move |_| {
                let now = folio_web::now();
                let outcome = {
                    let mut stage = stage.borrow_mut();
                    let outcome = if ctx.profile().is_mobile {
                        stage.carousel.tap(index, now, &PROJECTS[index])
                    } else {
                        stage.carousel.select(index, now);
                        match PROJECTS[index].link() {
                            Some(link) => TapOutcome::Navigate(link),
                            None => TapOutcome::ShowDetails,
                        }
                    };
                    stage.sync();
                    outcome
                };
                match outcome {
                    TapOutcome::Navigate(_) | TapOutcome::ShowDetails => open(&ctx, &details, index),
                    TapOutcome::Selected | TapOutcome::Ignored => {}
                }
            }));
        }
    }

    {
        let details = Rc::clone(&details);
        let overlay = details.overlay.clone();
        mounted.keep(EventListener::new(&overlay, "click", move |event| {
            // Clicks inside the panel are not dismissals, except on the close button.
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| panel.contains(Some(&t)) && t.tag_name() != "BUTTON");
            if !inside {
                details.hide();
            }
        }));
    }
    {
        let details = Rc::clone(&details);
        mounted.keep(EventListener::new(&ctx.window, "keydown", move |event| {
            if event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape")
            {
                details.hide();
            }
        }));
    }

    {
        let stage = Rc::clone(&stage);
        mounted.keep(Interval::new(config.auto_advance.as_timer_millis(), move || {
            let mut stage = stage.borrow_mut();
            if stage.carousel.tick(folio_web::now()) {
                stage.sync();
            }
        }));
    }
    {
        let stage = Rc::clone(&stage);
        mounted.keep(EventListener::new(&ctx.window, "resize", move |_| {
            stage.borrow_mut().relayout();
        }));
    }

    let paint = move |mode: ThemeMode| {
        for face in &faces {
            dom::set_css(face, "background-color", mode.surface());
            dom::set_css(face, "color", mode.foreground());
            dom::set_css(face, "border", &format!("1px solid {}", mode.border()));
        }
        dom::set_css(&panel_face, "background-color", mode.background());
        dom::set_css(&panel_face, "color", mode.foreground());
    };
    paint(ctx.mode());
    mounted.keep(ctx.on_theme(paint));

    Ok(mounted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_lists_role_then_timeline() {
        let project = &PROJECTS[0];
        assert_eq!(
            detail_facts(project),
            [("Role", project.role), ("Timeline", project.duration)]
        );
    }
}
