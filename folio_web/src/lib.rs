// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser glue for folio.
//!
//! This crate provides the browser halves of the `folio_core` contracts:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`LocalStorage`] and [`DocumentSurface`]: theme persistence and the
//!   document the theme is painted on
//! - [`probe_signals`]: reads [`DeviceSignals`] from `window` and `navigator`
//! - [`load_scene`]: dynamic import of the 3D runtime, resolving to a
//!   [`LoadOutcome`]
//! - [`VisibilityObserver`]: `IntersectionObserver` wrapper
//! - [`CardPresenter`]: carousel card elements
//!
//! [`DeviceSignals`]: folio_core::device::DeviceSignals
//! [`LoadOutcome`]: folio_core::loader::LoadOutcome

#![no_std]

extern crate alloc;

mod presenter;
mod probe;
mod raf;
mod scene;
mod theme;
mod visibility;

pub use folio_core::backend::Presenter;
pub use presenter::CardPresenter;
pub use probe::{probe_signals, viewport_width};
pub use raf::{KeepRunning, RafLoop};
pub use scene::{SceneHandle, load_scene};
pub use theme::{DocumentSurface, LocalStorage};
pub use visibility::VisibilityObserver;

use folio_core::time::Timestamp;

/// Returns the current page time from `performance.now()`.
#[must_use]
pub fn now() -> Timestamp {
    Timestamp::from_millis_f64(raf::performance_now())
}
