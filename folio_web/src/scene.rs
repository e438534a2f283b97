// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic import of the 3D scene runtime.
//!
//! [`load_scene`] is the async half of
//! [`SceneLoader`](folio_core::loader::SceneLoader): it imports the runtime
//! module, constructs its application on a canvas and asks it to load the
//! scene. Every rejection along the way becomes a typed
//! [`LoadFailure`]; nothing escapes as a thrown JS error.

use alloc::format;
use alloc::string::String;

use folio_core::loader::{LoadFailure, LoadOutcome, SceneConfig};
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> Result<Promise, JsValue>;
}

/// A live scene application. It renders into the canvas it was loaded on.
#[derive(Debug)]
pub struct SceneHandle {
    app: JsValue,
}

impl SceneHandle {
    /// Releases the runtime's resources, if it exposes `dispose()`.
    pub fn dispose(self) {
        let dispose = Reflect::get(&self.app, &JsValue::from_str("dispose"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        if let Some(dispose) = dispose
            && let Err(err) = dispose.call0(&self.app)
        {
            tracing::warn!(error = %describe(&err), "scene dispose failed");
        }
    }
}

/// Imports the runtime named by `config` and loads its scene onto `canvas`.
pub async fn load_scene(config: &SceneConfig, canvas: HtmlCanvasElement) -> LoadOutcome<SceneHandle> {
    let import = import_module(config.runtime_url)
        .map_err(|err| LoadFailure::ImportRejected(describe(&err)))?;
    let module = JsFuture::from(import)
        .await
        .map_err(|err| LoadFailure::ImportRejected(describe(&err)))?;

    let ctor = Reflect::get(&module, &JsValue::from_str(config.export_name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(LoadFailure::MissingExport(config.export_name))?;

    let app = Reflect::construct(&ctor, &Array::of1(&canvas))
        .map_err(|err| LoadFailure::SceneRejected(describe(&err)))?;

    let load = Reflect::get(&app, &JsValue::from_str("load"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(LoadFailure::MissingExport("load"))?;
    let pending = load
        .call1(&app, &JsValue::from_str(config.scene_url))
        .map_err(|err| LoadFailure::SceneRejected(describe(&err)))?;
    if let Ok(promise) = pending.dyn_into::<Promise>() {
        JsFuture::from(promise)
            .await
            .map_err(|err| LoadFailure::SceneRejected(describe(&err)))?;
    }

    Ok(SceneHandle { app })
}

/// Best-effort message for a thrown JS value.
fn describe(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
