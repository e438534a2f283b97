// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM-building helpers.

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{SiteError, SiteResult};

/// Creates `<tag>` as an `HtmlElement`.
pub(crate) fn element(doc: &Document, tag: &str) -> SiteResult<HtmlElement> {
    Ok(doc.create_element(tag)?.unchecked_into())
}

/// Creates `<tag>` with inline `css` and optional text.
pub(crate) fn styled(doc: &Document, tag: &str, css: &str, text: Option<&str>) -> SiteResult<HtmlElement> {
    let el = element(doc, tag)?;
    style(&el, css)?;
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

/// Replaces the element's inline style.
pub(crate) fn style(el: &Element, css: &str) -> SiteResult<()> {
    el.set_attribute("style", css)?;
    Ok(())
}

/// Appends `children` to `parent` in order.
pub(crate) fn append_all(parent: &Element, children: &[&Element]) -> SiteResult<()> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}

/// Removes every child of `el`.
pub(crate) fn clear(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}

/// Sets one style property, ignoring failures. For decorative updates.
pub(crate) fn set_css(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// A `<section>` with an anchor id and standard padding.
pub(crate) fn section(doc: &Document, id: &str) -> SiteResult<HtmlElement> {
    let el = styled(
        doc,
        "section",
        "position: relative; padding: 96px 24px; max-width: 1200px; margin: 0 auto;",
        None,
    )?;
    el.set_id(id);
    Ok(el)
}

/// A gradient section heading.
pub(crate) fn heading(doc: &Document, tag: &str, text: &str) -> SiteResult<HtmlElement> {
    styled(
        doc,
        tag,
        "font-size: 2.5rem; font-weight: 700; margin: 0 0 24px; \
         background: linear-gradient(90deg, #4f46e5, #9333ea, #db2777); \
         -webkit-background-clip: text; background-clip: text; color: transparent;",
        Some(text),
    )
}

/// A rounded label, for technology tags and skills.
pub(crate) fn chip(doc: &Document, text: &str) -> SiteResult<HtmlElement> {
    styled(
        doc,
        "span",
        "font-size: 0.75rem; padding: 4px 10px; border-radius: 9999px; \
         background: rgba(99, 102, 241, 0.12); color: #6366f1;",
        Some(text),
    )
}

/// `window.innerHeight`, or zero if unavailable.
pub(crate) fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

const KEYFRAMES: &str = "\
@keyframes folio-pulse { 0%, 100% { opacity: 0.5; } 50% { opacity: 0.2; } }
@keyframes folio-float { 0%, 100% { translate: 0 0; } 50% { translate: 0 -12px; } }
@keyframes folio-sway { 0%, 100% { rotate: -2deg; } 50% { rotate: 2deg; } }
html { scroll-behavior: smooth; }
body { margin: 0; font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; }
";

/// Adds the page-wide stylesheet to `<head>`.
pub(crate) fn install_styles(doc: &Document) -> SiteResult<()> {
    let style = doc.create_element("style")?;
    style.set_text_content(Some(KEYFRAMES));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => doc
            .document_element()
            .ok_or(SiteError::MissingElement("html"))?
            .append_child(&style)?,
    };
    Ok(())
}
