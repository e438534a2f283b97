// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! About: bio and skill groups.

use folio_core::theme::ThemeMode;
use web_sys::HtmlElement;

use super::{Mounted, reveal};
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;

struct SkillGroup {
    name: &'static str,
    skills: &'static [&'static str],
    accent: &'static str,
}

const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        name: "3D Development",
        skills: &["Three.js", "WebGL", "GLSL", "Spline", "Blender", "React Three Fiber"],
        accent: "linear-gradient(90deg, #3b82f6, #22d3ee)",
    },
    SkillGroup {
        name: "Frontend",
        skills: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion", "GSAP"],
        accent: "linear-gradient(90deg, #8b5cf6, #d946ef)",
    },
    SkillGroup {
        name: "Creative Coding",
        skills: &["p5.js", "WebGL Shaders", "Canvas API", "SVG Animation", "Generative Art"],
        accent: "linear-gradient(90deg, #f59e0b, #f43f5e)",
    },
    SkillGroup {
        name: "Tools & Other",
        skills: &[
            "Figma",
            "Git",
            "VS Code",
            "WebXR",
            "Progressive Web Apps",
            "Performance Optimization",
        ],
        accent: "linear-gradient(90deg, #22c55e, #10b981)",
    },
];

const BIO: [&str; 3] = [
    "I'm a developer specializing in creating cutting-edge 3D web experiences that push the \
     boundaries of what's possible on the web. With expertise in Three.js, WebGL, and modern \
     front-end technologies, I bring creative visions to life.",
    "My background in both design and development allows me to bridge the gap between \
     aesthetics and functionality, creating experiences that are not only visually stunning \
     but also performant and accessible.",
    "I'm constantly exploring new technologies and techniques to create more immersive and \
     interactive digital experiences. When I'm not coding, you can find me experimenting with \
     generative art, 3D modeling, or exploring the latest in WebXR.",
];

/// Builds the about section.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let root = dom::section(doc, "about")?;
    let heading = dom::heading(doc, "h2", "About Me")?;
    let grid = dom::styled(
        doc,
        "div",
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); \
         gap: 48px; align-items: center;",
        None,
    )?;

    let text = dom::element(doc, "div")?;
    let subheading = dom::styled(
        doc,
        "h3",
        "font-size: 1.5rem; font-weight: 700; margin: 0 0 24px;",
        Some("Creative Developer with a Passion for Immersive Experiences"),
    )?;
    text.append_child(&subheading)?;
    let mut paragraphs = Vec::with_capacity(BIO.len());
    for copy in BIO {
        let p = dom::styled(doc, "p", "line-height: 1.7; margin: 0 0 16px;", Some(copy))?;
        text.append_child(&p)?;
        paragraphs.push(p);
    }

    let skills = dom::styled(doc, "div", "display: flex; flex-direction: column; gap: 32px;", None)?;
    let mut chips: Vec<HtmlElement> = Vec::new();
    let mut titles = vec![subheading];
    for group in &SKILLS {
        let block = dom::element(doc, "div")?;
        let bar = dom::styled(
            doc,
            "div",
            &format!("height: 4px; width: 80px; margin-bottom: 12px; border-radius: 9999px; background: {};", group.accent),
            None,
        )?;
        let title = dom::styled(doc, "h4", "font-size: 1.25rem; font-weight: 600; margin: 0 0 12px;", Some(group.name))?;
        let row = dom::styled(doc, "div", "display: flex; flex-wrap: wrap; gap: 8px;", None)?;
        for skill in group.skills {
            let chip = dom::styled(
                doc,
                "span",
                "padding: 4px 12px; border-radius: 9999px; font-size: 0.875rem;",
                Some(skill),
            )?;
            row.append_child(&chip)?;
            chips.push(chip);
        }
        dom::append_all(&block, &[&bar, &title, &row])?;
        skills.append_child(&block)?;
        titles.push(title);
    }

    dom::append_all(&grid, &[&text, &skills])?;
    dom::append_all(&root, &[&heading, &grid])?;

    let paint = move |mode: ThemeMode| {
        for title in &titles {
            dom::set_css(title, "color", mode.foreground());
        }
        for p in &paragraphs {
            dom::set_css(p, "color", mode.muted());
        }
        for chip in &chips {
            dom::set_css(chip, "background-color", mode.surface());
            dom::set_css(chip, "color", mode.foreground());
        }
    };
    paint(ctx.mode());

    let mut mounted = Mounted::new(root);
    mounted.keep(reveal(&heading, "translateY(20px)")?);
    mounted.keep(reveal(&text, "translateX(-30px)")?);
    mounted.keep(reveal(&skills, "translateX(30px)")?);
    mounted.keep(ctx.on_theme(paint));
    Ok(mounted)
}
