// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case-study pages.
//!
//! Both pages share the reading-progress bar, the scroll parallax on their
//! images and a small set of layout pieces defined here.

mod effects;
mod nexcrow;
mod obsession;

pub(crate) use nexcrow::mount as nexcrow;
pub(crate) use obsession::mount as creation_by_obsession;

use folio_core::theme::ThemeMode;
use web_sys::{Document, HtmlElement};

use super::Mounted;
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;

/// The page body below the fixed header.
fn page(doc: &Document) -> SiteResult<HtmlElement> {
    dom::styled(doc, "main", "padding-top: 96px; overflow-x: hidden;", None)
}

/// A back link to the home page.
fn back_link(doc: &Document, label: &str) -> SiteResult<HtmlElement> {
    let link = dom::styled(
        doc,
        "a",
        "display: inline-block; margin: 0 24px 24px; font-weight: 700; letter-spacing: 0.2em; \
         text-decoration: none; color: inherit;",
        Some(&format!("\u{2190} {label}")),
    )?;
    link.set_attribute("href", "/")?;
    Ok(link)
}

/// A titled content block.
fn block(doc: &Document, title: &str) -> SiteResult<HtmlElement> {
    let section = dom::styled(
        doc,
        "section",
        "max-width: 1100px; margin: 0 auto; padding: 64px 24px;",
        None,
    )?;
    let heading = dom::heading(doc, "h2", title)?;
    section.append_child(&heading)?;
    Ok(section)
}

fn paragraph(doc: &Document, text: &str) -> SiteResult<HtmlElement> {
    dom::styled(doc, "p", "font-size: 1.125rem; line-height: 1.75; opacity: 0.85;", Some(text))
}

fn bullets(doc: &Document, items: &[&str]) -> SiteResult<HtmlElement> {
    let list = dom::styled(doc, "ul", "padding-left: 20px; line-height: 1.8; opacity: 0.85;", None)?;
    for item in items {
        let li = dom::element(doc, "li")?;
        li.set_text_content(Some(item));
        list.append_child(&li)?;
    }
    Ok(list)
}

/// A bordered card with a title and its content.
fn card(doc: &Document, title: &str, children: &[&HtmlElement]) -> SiteResult<HtmlElement> {
    let card = dom::styled(
        doc,
        "div",
        "padding: 24px; border-radius: 16px; background: rgba(128, 128, 128, 0.08); \
         border: 1px solid rgba(128, 128, 128, 0.2);",
        None,
    )?;
    let heading = dom::styled(doc, "h3", "font-size: 1.25rem; font-weight: 700; margin: 0 0 12px;", Some(title))?;
    card.append_child(&heading)?;
    for child in children {
        card.append_child(child)?;
    }
    Ok(card)
}

fn grid(doc: &Document, min_px: u32) -> SiteResult<HtmlElement> {
    dom::styled(
        doc,
        "div",
        &format!(
            "display: grid; grid-template-columns: repeat(auto-fit, minmax({min_px}px, 1fr)); gap: 24px; margin-top: 32px;"
        ),
        None,
    )
}

fn chips(doc: &Document, items: &[&str]) -> SiteResult<HtmlElement> {
    let row = dom::styled(doc, "div", "display: flex; flex-wrap: wrap; gap: 10px; margin-top: 24px;", None)?;
    for item in items {
        let chip = dom::chip(doc, item)?;
        row.append_child(&chip)?;
    }
    Ok(row)
}

/// Adds the progress bar and theme-following text color to a finished page.
fn finish(ctx: &Ctx, root: HtmlElement, mut mounted: Mounted) -> SiteResult<Mounted> {
    let bar = effects::progress_bar(ctx)?;
    root.prepend_with_node_1(&bar.root)?;
    mounted.absorb(bar);

    let paint = move |mode: ThemeMode| dom::set_css(&root, "color", mode.foreground());
    paint(ctx.mode());
    mounted.keep(ctx.on_theme(paint));
    Ok(mounted)
}
