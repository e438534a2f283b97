// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The folio portfolio site.
//!
//! The wasm entry point reads the path, builds the matching page from
//! sections and keeps every section's listeners and timers alive in one
//! [`App`] value. Dropping it (on a non-persisted `pagehide`) cancels all of
//! them.
//!
//! State machines live in `folio_core`; this crate only turns their output
//! into DOM and their inputs into events.

mod context;
mod dom;
mod error;
mod logging;
mod routing;
mod sections;

pub use error::{SiteError, SiteResult};
pub use routing::Route;

use std::cell::RefCell;

use gloo::events::EventListener;
use tracing::Level;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use context::{Ctx, DeviceMonitor};
use sections::{Mounted, case_study};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// A built page and everything keeping it live.
#[derive(Debug)]
pub struct App {
    route: Route,
    _monitor: DeviceMonitor,
    sections: Vec<Mounted>,
}

impl App {
    /// Builds `route` into `document`'s body.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no body or a DOM call throws.
    pub fn build(window: Window, document: Document, route: Route) -> SiteResult<Self> {
        let body = document.body().ok_or(SiteError::MissingElement("body"))?;
        let ctx = Ctx::new(window, document);
        ctx.document.set_title(route.title());

        let mut mounted = vec![sections::nav::mount(&ctx, route)?];
        match sections::trail::mount(&ctx) {
            Ok(trail) => mounted.push(trail),
            Err(err) => tracing::warn!(%err, "cursor trail unavailable"),
        }
        mounted.extend(page(&ctx, route)?);
        mounted.push(sections::footer::mount(&ctx)?);

        for section in &mounted {
            body.append_child(&section.root)?;
        }
        let monitor = DeviceMonitor::start(&ctx);
        tracing::debug!(?ctx, sections = mounted.len(), "page built");
        Ok(Self {
            route,
            _monitor: monitor,
            sections: mounted,
        })
    }

    /// The page this app shows.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Removes the page's elements. Listeners and timers stop when `self`
    /// drops.
    pub fn unmount(self) {
        for section in &self.sections {
            section.root.remove();
        }
    }
}

fn page(ctx: &Ctx, route: Route) -> SiteResult<Vec<Mounted>> {
    Ok(match route {
        Route::Home => vec![
            sections::hero::mount(ctx)?,
            sections::projects::mount(ctx)?,
            sections::about::mount(ctx)?,
            sections::contact::mount(ctx)?,
        ],
        Route::Nexcrow => vec![case_study::nexcrow(ctx)?],
        Route::CreationByObsession => vec![case_study::creation_by_obsession(ctx)?],
        Route::NotFound => vec![not_found(&ctx.document)?],
    })
}

fn not_found(doc: &Document) -> SiteResult<Mounted> {
    let root = dom::styled(
        doc,
        "main",
        "min-height: 70vh; display: flex; flex-direction: column; align-items: center; \
         justify-content: center; text-align: center; padding: 96px 24px;",
        None,
    )?;
    let heading = dom::heading(doc, "h1", "Page not found")?;
    let note = dom::styled(
        doc,
        "p",
        "opacity: 0.7;",
        Some("The page you were looking for doesn't exist."),
    )?;
    let home: HtmlElement = dom::styled(doc, "a", "margin-top: 24px; color: #6366f1;", Some("Back to home"))?;
    home.set_attribute("href", Route::Home.path())?;
    dom::append_all(&root, &[&heading, &note, &home])?;
    Ok(Mounted::new(root))
}

/// Drops the app when the page is discarded. A page entering the
/// back/forward cache keeps it.
fn release_on_pagehide(window: &Window) {
    EventListener::new(window, "pagehide", |event| {
        let persisted = js_sys::Reflect::get(event, &JsValue::from_str("persisted"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if persisted {
            return;
        }
        let app = APP.with(|app| app.borrow_mut().take());
        if let Some(app) = app {
            tracing::debug!(route = ?app.route(), "releasing page");
            app.unmount();
        }
    })
    .forget();
}

/// Entry point.
///
/// # Errors
///
/// Returns the page build error, after logging it.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    logging::init(Level::INFO);
    let window = web_sys::window().expect("no global `window`");
    let document = window.document().expect("window has no document");
    dom::install_styles(&document)?;

    let path = window.location().pathname().unwrap_or_default();
    let route = Route::parse(&path);
    let app = App::build(window.clone(), document, route).inspect_err(|err| {
        tracing::error!(%err, %path, "page build failed");
    })?;
    release_on_pagehide(&window);
    tracing::info!(?route, "page booted");
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}
