// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nexcrow by Nexus: the escrow platform write-up.

use web_sys::{Document, HtmlElement};

use super::effects::Parallax;
use super::{back_link, block, bullets, card, chips, finish, grid, page, paragraph};
use crate::context::Ctx;
use crate::dom;
use crate::error::SiteResult;
use crate::sections::{Mounted, reveal};

const TECHNOLOGIES: [&str; 4] = ["React", "TypeScript", "Solana", "Next.js"];

struct Feature {
    title: &'static str,
    text: &'static str,
    points: [&'static str; 3],
    impact: [&'static str; 3],
}

const FEATURES: [Feature; 2] = [
    Feature {
        title: "1. Nexcrow Blinks (Blockchain Links)",
        text: "We created a revolutionary approach to contract creation and sharing through unique \
               blockchain links. This innovation allows freelancers and clients to engage with \
               contracts directly from Twitter DMs, providing unprecedented access for \
               social-first Web3 communities.",
        points: [
            "Seamless contract creation through social platforms",
            "Instant sharing via Twitter DMs",
            "Reduced onboarding friction for new users",
        ],
        impact: [
            "Dramatically simplified the contract creation process",
            "Increased platform adoption in Web3 social communities",
            "Reduced contract setup time from hours to minutes",
        ],
    },
    Feature {
        title: "2. Direct Contracts",
        text: "We developed a contract Linktree system for freelancers to create and share their \
               services with minimal friction. This innovation streamlines the contract creation \
               and sharing process, allowing freelancers to quickly establish professional \
               relationships.",
        points: [
            "Custom contract creation templates",
            "Shareable contract links for instant client onboarding",
            "Automated payment milestone tracking",
        ],
        impact: [
            "Quick setup for recurring service offerings",
            "Professional presentation of freelancer services",
            "Streamlined client acquisition process",
        ],
    },
];

const ADVANCED: [(&str, [&str; 2]); 2] = [
    (
        "AI-Driven Dispute Resolution",
        [
            "Our AI system ensures transparent conflict resolution between clients and freelancers",
            "Disputes are resolved through objective analysis of contract terms and deliverables",
        ],
    ),
    (
        "Blockchain Transparency & Records",
        [
            "Every transaction is verifiable and permanently recorded on Solana",
            "Automated checks and balances prevent under-delivery or non-payment issues",
        ],
    ),
];

const ADVANTAGES: [(&str, &str, [&str; 3]); 2] = [
    (
        "Payment Security",
        "Nexcrow eliminates the risk of unpaid work or under-delivered services.",
        [
            "Guaranteed payment security through escrow",
            "Milestone-based releases protect both parties",
            "Clear contract terms with transparent conditions",
        ],
    ),
    (
        "Social Platform Integration",
        "Seamless Web3 onboarding through existing social media channels.",
        [
            "Twitter-based contract creation and sharing",
            "Leveraging existing social networks for rapid adoption",
            "Reduced friction for Web3 newcomers",
        ],
    ),
];

const VISION: [(&str, &str); 3] = [
    (
        "Expanding Features",
        "Building more integrated tools for seamless freelancer-client collaboration",
    ),
    (
        "Community Growth",
        "Creating dedicated solutions for Web3 communities and DAOs",
    ),
    (
        "Technology Innovation",
        "Advancing our AI systems for even more transparent dispute resolution",
    ),
];

fn header(doc: &Document, parallax: &mut Parallax) -> SiteResult<HtmlElement> {
    let header = dom::styled(doc, "header", "max-width: 1100px; margin: 0 auto; padding: 32px 24px;", None)?;
    let label = dom::styled(
        doc,
        "p",
        "font-size: 0.75rem; letter-spacing: 0.3em; opacity: 0.6; margin: 0 0 12px;",
        Some("FEATURED PROJECT CASE STUDY"),
    )?;
    let title = dom::styled(
        doc,
        "h1",
        "font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 800; margin: 0 0 16px; \
         background: linear-gradient(90deg, #4f46e5, #9333ea); \
         -webkit-background-clip: text; background-clip: text; color: transparent;",
        Some("Nexcrow by Nexus"),
    )?;
    let subtitle = paragraph(
        doc,
        "Building a Solana-backed escrow platform that ensures secure payments for freelancers \
         and Web3 businesses",
    )?;
    let tags = chips(doc, &TECHNOLOGIES)?;
    let hero = parallax.image(doc, "/images/nexus-dashboard.jpg", "Nexcrow dashboard", 0)?;
    dom::set_css(&hero, "margin-top", "48px");
    dom::append_all(&header, &[&label, &title, &subtitle, &tags, &hero])?;
    Ok(header)
}

fn challenge(doc: &Document, parallax: &mut Parallax) -> SiteResult<HtmlElement> {
    let section = block(doc, "The Challenge We Solved")?;
    let lead = paragraph(
        doc,
        "In the rapidly growing Web3 space, we identified a critical problem: freelancers and \
         businesses lacked a secure, transparent, and reliable payment system designed \
         specifically for their unique needs.",
    )?;
    let facts = grid(doc, 240)?;
    for (title, text) in [
        (
            "The Problem",
            "Freelancers were getting scammed, and clients received subpar work with no recourse",
        ),
        (
            "My Role",
            "CEO and Lead Designer overseeing platform development and strategic direction",
        ),
        (
            "Launch",
            "Officially launched March 2025 with support from Solana Foundation and Superteam NG",
        ),
    ] {
        let body = paragraph(doc, text)?;
        let fact = card(doc, title, &[&body])?;
        facts.append_child(&fact)?;
    }
    let mockup = parallax.image(doc, "/images/nexcrow-ui-mockup.png", "Nexcrow interface mockup", 1)?;
    dom::set_css(&mockup, "margin-top", "48px");
    dom::append_all(&section, &[&lead, &facts, &mockup])?;
    Ok(section)
}

fn features(doc: &Document) -> SiteResult<HtmlElement> {
    let section = block(doc, "Key Features & Innovations")?;
    for feature in &FEATURES {
        let body = paragraph(doc, feature.text)?;
        let points = bullets(doc, &feature.points)?;
        let impact_title = dom::styled(doc, "h4", "margin: 16px 0 8px; font-weight: 600;", Some("Impact"))?;
        let impact = bullets(doc, &feature.impact)?;
        let item = card(doc, feature.title, &[&body, &points, &impact_title, &impact])?;
        dom::set_css(&item, "margin-top", "32px");
        section.append_child(&item)?;
    }
    Ok(section)
}

fn advanced(doc: &Document, parallax: &mut Parallax) -> SiteResult<HtmlElement> {
    let section = block(doc, "Advanced Features")?;
    let lead = paragraph(
        doc,
        "Nexcrow goes beyond basic escrow functionality with innovative features designed to \
         create the most secure and transparent freelancing experience on Web3.",
    )?;
    let cards = grid(doc, 320)?;
    for (title, items) in &ADVANCED {
        let list = bullets(doc, items)?;
        let item = card(doc, title, &[&list])?;
        cards.append_child(&item)?;
    }
    let image = parallax.image(doc, "/images/nexcrow-escrow.jpg", "Nexcrow escrow flow", 2)?;
    dom::set_css(&image, "margin-top", "48px");
    dom::append_all(&section, &[&lead, &cards, &image])?;
    Ok(section)
}

fn advantages(doc: &Document) -> SiteResult<HtmlElement> {
    let section = block(doc, "Competitive Advantages")?;
    let cards = grid(doc, 320)?;
    for (title, summary, items) in &ADVANTAGES {
        let lead = paragraph(doc, summary)?;
        let list = bullets(doc, items)?;
        let item = card(doc, title, &[&lead, &list])?;
        cards.append_child(&item)?;
    }
    section.append_child(&cards)?;
    Ok(section)
}

fn vision(doc: &Document) -> SiteResult<HtmlElement> {
    let section = block(doc, "Future Vision")?;
    let lead = paragraph(
        doc,
        "Our vision for Nexcrow extends beyond just secure payments. We're building a \
         comprehensive ecosystem of tools to facilitate trust and efficiency in the freelance \
         economy, with a particular focus on Web3 communities and their unique needs.",
    )?;
    let cards = grid(doc, 240)?;
    for (title, text) in VISION {
        let body = paragraph(doc, text)?;
        let item = card(doc, title, &[&body])?;
        cards.append_child(&item)?;
    }
    let actions = dom::styled(doc, "div", "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 40px;", None)?;
    for (label, href, css) in [
        (
            "View on GitHub",
            "https://github.com",
            "background: #111827; color: #ffffff;",
        ),
        (
            "Live Demo",
            "#",
            "background: linear-gradient(90deg, #4f46e5, #9333ea); color: #ffffff;",
        ),
    ] {
        let button = dom::styled(
            doc,
            "a",
            &format!("padding: 12px 24px; border-radius: 8px; text-decoration: none; font-weight: 500; {css}"),
            Some(label),
        )?;
        button.set_attribute("href", href)?;
        if href.starts_with("http") {
            button.set_attribute("target", "_blank")?;
            button.set_attribute("rel", "noopener noreferrer")?;
        }
        actions.append_child(&button)?;
    }
    dom::append_all(&section, &[&lead, &cards, &actions])?;
    Ok(section)
}

/// Builds the Nexcrow case-study page.
pub(crate) fn mount(ctx: &Ctx) -> SiteResult<Mounted> {
    let doc = &ctx.document;
    let root = page(doc)?;
    let mut parallax = Parallax::default();

    let back = back_link(doc, "JAMES")?;
    let header = header(doc, &mut parallax)?;
    let sections = [
        challenge(doc, &mut parallax)?,
        features(doc)?,
        advanced(doc, &mut parallax)?,
        advantages(doc)?,
        vision(doc)?,
    ];
    dom::append_all(&root, &[&back, &header])?;
    for section in &sections {
        root.append_child(section)?;
    }

    let mut mounted = Mounted::new(root.clone());
    for section in &sections {
        mounted.keep(reveal(section, "translateY(30px)")?);
    }
    parallax.attach(ctx, &mut mounted);
    finish(ctx, root, mounted)
}
