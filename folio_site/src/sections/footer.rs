// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Footer with social links and the copyright line.

use folio_core::theme::ThemeMode;

use super::Mounted;
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;

const SOCIAL: [(&str, &str); 3] = [
    ("LinkedIn", "https://linkedin.com/in/jamesbzetsu"),
    ("Twitter", "https://twitter.com/jamesbzetsu"),
    ("Book a call", "https://calendly.com/jamesbzetsu/30min"),
];

fn copyright(year: u32) -> String {
    format!("\u{00a9} {year} James Zetsu. All Rights Reserved.")
}

/// Builds the page footer.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let root = dom::styled(doc, "footer", "padding: 32px 24px; text-align: center; border-top: 1px solid;", None)?;
    let links = dom::styled(doc, "div", "display: flex; justify-content: center; gap: 24px;", None)?;
    let mut anchors = Vec::with_capacity(SOCIAL.len());
    for (label, href) in SOCIAL {
        let a = dom::styled(doc, "a", "text-decoration: none; font-weight: 500;", Some(label))?;
        a.set_attribute("href", href)?;
        a.set_attribute("target", "_blank")?;
        a.set_attribute("rel", "noopener noreferrer")?;
        links.append_child(&a)?;
        anchors.push(a);
    }
    let year = js_sys::Date::new_0().get_full_year();
    let line = dom::styled(doc, "p", "margin-top: 16px;", Some(&copyright(year)))?;
    dom::append_all(&root, &[&links, &line])?;

    let paint = {
        let root = root.clone();
        move |mode: ThemeMode| {
            dom::set_css(&root, "color", mode.muted());
            dom::set_css(&root, "border-color", mode.border());
            for a in &anchors {
                dom::set_css(a, "color", mode.foreground());
            }
        }
    };
    paint(ctx.mode());
    let mut mounted = Mounted::new(root);
    mounted.keep(ctx.on_theme(paint));
    Ok(mounted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(copyright(2026), "\u{00a9} 2026 James Zetsu. All Rights Reserved.");
    }
}
