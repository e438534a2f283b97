// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Creation by Obsession: the Space Monk visual narrative.
//!
//! Images come from the shared case-study pool. Each phase, the exploration
//! strip and the closing gallery draw distinct URLs, so no image repeats on
//! the page.

use folio_core::gallery::{CaseStudyPlan, case_study_pool};
use web_sys::{Document, HtmlElement};

use super::effects::{Parallax, figure, hover_emphasis};
use super::{block, chips, finish, grid, page, paragraph};
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;
use crate::sections::{Mounted, reveal};

const TECHNOLOGIES: [&str; 5] = [
    "3D Modeling",
    "Unreal Engine",
    "Photoshop",
    "After Effects",
    "Premiere Pro",
];

const INTRO: [&str; 3] = [
    "In the beginning, there was stillness.",
    "Then came a whisper \u{2014} a pulse \u{2014} a call from the void.",
    "The Primordial Space Monk heard it.",
];

const MONK: [&str; 2] = [
    "He was not born to conquer galaxies or wield power. He was born to feel \u{2014} to listen \
     \u{2014} to drift through the fabric of existence, seeking nothing but truth.",
    "This is a story of a monk who does not fight, but dissolves. Who does not arrive, but \
     becomes.",
];

const PHASES: [(&str, [&str; 4]); 4] = [
    (
        "The Doubt",
        [
            "Alone in the dark, the Monk questions his own presence.",
            "Each star a memory. Each silence a mirror.",
            "Doubt is his first companion. He wonders if the path was ever real \u{2014} or if he \
             invented it to avoid the fall.",
            "But even in stillness, he listens. The void is not empty. It speaks \u{2014} in \
             fragments, in feelings, in frequencies older than time.",
        ],
    ),
    (
        "The Search",
        [
            "He begins to move. Not forward, but inward.",
            "Across ruins of forgotten systems, echoes of past selves, broken orbits.",
            "He watches, studies, breaks, and rebuilds. With every cycle, he lets go of what he \
             thought he was.",
            "His form flickers. His essence shifts. He becomes less solid \u{2014} more spirit.",
        ],
    ),
    (
        "The Obsession",
        [
            "Then he finds it \u{2014} the pulse.",
            "A hidden rhythm beneath chaos. Not a destination, but a frequency of becoming.",
            "It consumes him. He dives in. Repeats rituals. Experiments. Destroys. Rebuilds.",
            "He disappears into the process. He forgets who he was. But he never stops.",
        ],
    ),
    (
        "The Becoming",
        [
            "The Monk does not transcend. He does not escape. He returns \u{2014} changed.",
            "There is no final form. Only awareness.",
            "He walks the same path \u{2014} but now he feels it breathing under his feet.",
            "He no longer fears the void. He has become part of it.",
        ],
    ),
];

const CLOSING: [&str; 2] = [
    "A story told in matter, motion, and meditation. Rendered through space, silence, and \
     sound. An exploration of identity, surrender, and evolution.",
    "Not a tale of victory \u{2014} but of transformation through obsession.",
];

fn image_alt(phase: usize, image: usize) -> String {
    format!("Space Monk - Phase {} - Image {}", phase + 1, image + 1)
}

/// Idle animation for gallery image `index`, if any.
fn gallery_animation(index: usize) -> Option<&'static str> {
    if index % 3 == 0 {
        Some("folio-float 6s ease-in-out infinite")
    } else if index % 4 == 1 {
        Some("folio-sway 8s ease-in-out infinite")
    } else {
        None
    }
}

fn hero(doc: &Document) -> SiteResult<HtmlElement> {
    let hero = dom::styled(
        doc,
        "header",
        "min-height: 80vh; display: flex; flex-direction: column; justify-content: center; \
         align-items: center; text-align: center; padding: 48px 24px;",
        None,
    )?;
    let title = dom::styled(
        doc,
        "h1",
        "font-size: clamp(3rem, 8vw, 6rem); font-weight: 800; margin: 0 0 16px; \
         background: linear-gradient(90deg, #6366f1, #a855f7, #ec4899); \
         -webkit-background-clip: text; background-clip: text; color: transparent;",
        Some("Creation by Obsession"),
    )?;
    let tagline = dom::styled(
        doc,
        "p",
        "font-size: 1.25rem; letter-spacing: 0.1em; opacity: 0.7; margin: 0 0 40px;",
        Some("A visual narrative of evolution and surrender"),
    )?;
    dom::append_all(&hero, &[&title, &tagline])?;
    for line in INTRO {
        let p = dom::styled(doc, "p", "font-size: 1.125rem; font-style: italic; margin: 4px 0;", Some(line))?;
        hero.append_child(&p)?;
    }
    let tags = chips(doc, &TECHNOLOGIES)?;
    dom::set_css(&tags, "justify-content", "center");
    hero.append_child(&tags)?;
    Ok(hero)
}

fn phase(
    doc: &Document,
    index: usize,
    (title, lines): &(&str, [&str; 4]),
    images: &[&str],
    parallax: &mut Parallax,
) -> SiteResult<HtmlElement> {
    let section = dom::styled(doc, "article", "margin-top: 64px;", None)?;
    let heading = dom::styled(
        doc,
        "h3",
        "font-size: 1.75rem; font-weight: 700; margin: 0 0 16px;",
        Some(&format!("Phase {}: {title}", index + 1)),
    )?;
    section.append_child(&heading)?;
    for line in lines {
        let text = paragraph(doc, line)?;
        section.append_child(&text)?;
    }
    let row = grid(doc, 260)?;
    for (i, src) in images.iter().enumerate() {
        let image = parallax.image(doc, src, &image_alt(index, i), index + i)?;
        row.append_child(&image)?;
    }
    section.append_child(&row)?;
    Ok(section)
}

/// Builds the Creation by Obsession case-study page.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let pool = case_study_pool()?;
    let plan = CaseStudyPlan::build(&pool);
    let root = page(doc)?;
    let mut parallax = Parallax::default();
    let mut mounted = Mounted::new(root.clone());

    let hero = hero(doc)?;

    let monk = block(doc, "The Primordial Space Monk")?;
    for text in MONK {
        let p = paragraph(doc, text)?;
        monk.append_child(&p)?;
    }

    let journey = block(doc, "The Journey")?;
    for (index, (copy, images)) in PHASES.iter().zip(&plan.phases).enumerate() {
        let article = phase(doc, index, copy, images, &mut parallax)?;
        journey.append_child(&article)?;
    }

    let explorations = block(doc, "Additional Explorations")?;
    let strip = grid(doc, 280)?;
    for (i, src) in plan.explorations.iter().enumerate() {
        let alt = format!("Space Monk - Exploration {}", i + 1);
        let image = parallax.image(doc, src, &alt, i)?;
        strip.append_child(&image)?;
    }
    explorations.append_child(&strip)?;

    let gallery = block(doc, "Gallery")?;
    let wall = grid(doc, 220)?;
    for (i, src) in plan.gallery.iter().enumerate() {
        let frame = figure(doc, src, &format!("Space Monk - Gallery {}", i + 1))?;
        if let Some(animation) = gallery_animation(i) {
            dom::set_css(&frame, "animation", animation);
        }
        hover_emphasis(&frame, i, &mut mounted);
        wall.append_child(&frame)?;
    }
    gallery.append_child(&wall)?;

    let closing = block(doc, "Creation by Obsession")?;
    dom::set_css(&closing, "text-align", "center");
    for text in CLOSING {
        let p = paragraph(doc, text)?;
        closing.append_child(&p)?;
    }

    let sections = [monk, journey, explorations, gallery, closing];
    root.append_child(&hero)?;
    for section in &sections {
        root.append_child(section)?;
        mounted.keep(reveal(section, "translateY(30px)")?);
    }
    parallax.attach(ctx, &mut mounted);
    finish(ctx, root, mounted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_text_counts_from_one() {
        assert_eq!(image_alt(0, 2), "Space Monk - Phase 1 - Image 3");
    }

    #[test]
    fn gallery_animations_alternate() {
        assert!(gallery_animation(0).is_some_and(|a| a.starts_with("folio-float")));
        assert!(gallery_animation(1).is_some_and(|a| a.starts_with("folio-sway")));
        assert_eq!(gallery_animation(2), None);
        assert!(gallery_animation(3).is_some_and(|a| a.starts_with("folio-float")));
        assert!(gallery_animation(5).is_some_and(|a| a.starts_with("folio-sway")));
    }
}
