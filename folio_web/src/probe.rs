// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device signal probe.

use folio_core::device::DeviceSignals;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Reads a [`DeviceSignals`] snapshot from `window` and `navigator`.
///
/// Any API the browser lacks reads as `None` or `false`; nothing here throws.
#[must_use]
pub fn probe_signals(window: &Window) -> DeviceSignals {
    let navigator = window.navigator();
    let has_touch_events =
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());

    DeviceSignals {
        viewport_width: viewport_width(window),
        has_touch_events,
        max_touch_points: u32::try_from(navigator.max_touch_points()).ok(),
        user_agent: navigator.user_agent().ok(),
        device_memory_gb,
        hardware_concurrency: whole_count(navigator.hardware_concurrency()),
    }
}

/// `window.innerWidth` in CSS pixels.
#[must_use]
pub fn viewport_width(window: &Window) -> Option<f64> {
    window.inner_width().ok().and_then(|v| v.as_f64())
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "checked to be a small positive finite count first"
)]
fn whole_count(n: f64) -> Option<u32> {
    (n.is_finite() && n >= 1.0 && n <= f64::from(u32::MAX)).then(|| n as u32)
}
