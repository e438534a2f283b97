// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles shared by every section.
//!
//! The theme store has one writer (the nav toggle); everything else reads
//! `mode()` or subscribes. The device profile is computed once at boot,
//! re-derived on resize, and demoted if frame pacing degrades.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::device::{DeviceProfile, DeviceThresholds, FrameSampler, FrameVerdict};
use folio_core::theme::{ThemeMode, ThemeStore};
use folio_web::{DocumentSurface, LocalStorage, RafLoop};
use gloo::events::EventListener;
use web_sys::{Document, Window};

use crate::sections::Cleanup;

/// The page's theme store.
pub(crate) type Theme = ThemeStore<LocalStorage, DocumentSurface>;

type ProfileListener = (u32, Box<dyn FnMut(DeviceProfile)>);

/// Cheap-to-clone page context.
#[derive(Clone)]
pub(crate) struct Ctx {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) theme: Rc<RefCell<Theme>>,
    profile: Rc<Cell<DeviceProfile>>,
    profile_listeners: Rc<RefCell<Vec<ProfileListener>>>,
    next_listener: Rc<Cell<u32>>,
}

impl core::fmt::Debug for Ctx {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ctx")
            .field("profile", &self.profile.get())
            .field("theme", &self.theme.borrow().mode())
            .finish_non_exhaustive()
    }
}

impl Ctx {
    /// Reads the theme and device profile for `window`.
    pub(crate) fn new(window: Window, document: Document) -> Self {
        let storage = LocalStorage::new(&window);
        let surface = DocumentSurface::new(window.clone(), document.clone());
        let theme = ThemeStore::init(storage, surface);
        let signals = folio_web::probe_signals(&window);
        let profile = DeviceProfile::detect(&signals, &DeviceThresholds::WEB);
        Self {
            window,
            document,
            theme: Rc::new(RefCell::new(theme)),
            profile: Rc::new(Cell::new(profile)),
            profile_listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener: Rc::new(Cell::new(0)),
        }
    }

    /// The current device profile.
    pub(crate) fn profile(&self) -> DeviceProfile {
        self.profile.get()
    }

    /// The current theme mode.
    pub(crate) fn mode(&self) -> ThemeMode {
        self.theme.borrow().mode()
    }

    /// Calls `listener` whenever the profile changes, until the returned
    /// guard is dropped.
    pub(crate) fn on_profile(&self, listener: impl FnMut(DeviceProfile) + 'static) -> Cleanup {
        let id = self.next_listener.get();
        self.next_listener.set(id.wrapping_add(1));
        self.profile_listeners
            .borrow_mut()
            .push((id, Box::new(listener)));
        let listeners = Rc::downgrade(&self.profile_listeners);
        Cleanup::new(move || {
            if let Some(listeners) = listeners.upgrade()
                && let Ok(mut listeners) = listeners.try_borrow_mut()
            {
                listeners.retain(|(other, _)| *other != id);
            }
        })
    }

    /// Calls `listener` after every theme toggle, until the returned guard
    /// is dropped.
    ///
    /// Listeners run while the store is mutably borrowed; they must use the
    /// mode they are given rather than read the store.
    pub(crate) fn on_theme(&self, listener: impl FnMut(ThemeMode) + 'static) -> Cleanup {
        let id = self.theme.borrow_mut().subscribe(listener);
        let theme = Rc::downgrade(&self.theme);
        Cleanup::new(move || {
            if let Some(theme) = theme.upgrade()
                && let Ok(mut theme) = theme.try_borrow_mut()
            {
                theme.unsubscribe(id);
            }
        })
    }

    fn set_profile(&self, profile: DeviceProfile) {
        if self.profile.replace(profile) == profile {
            return;
        }
        tracing::debug!(?profile, "device profile changed");
        for (_, listener) in self.profile_listeners.borrow_mut().iter_mut() {
            listener(profile);
        }
    }
}

/// Keeps the profile current: frame sampling and viewport resizes.
///
/// Dropping the monitor cancels both.
pub(crate) struct DeviceMonitor {
    _sampler: Option<RafLoop>,
    _resize: EventListener,
}

impl core::fmt::Debug for DeviceMonitor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeviceMonitor").finish_non_exhaustive()
    }
}

impl DeviceMonitor {
    /// Starts monitoring for `ctx`.
    pub(crate) fn start(ctx: &Ctx) -> Self {
        let sampler = (!ctx.profile().is_low_performance).then(|| {
            let ctx = ctx.clone();
            let mut frames = FrameSampler::new(DeviceThresholds::WEB.max_mean_frame_ms);
            let raf = RafLoop::new(move |now| match frames.observe(now) {
                FrameVerdict::Degraded => {
                    tracing::info!(mean_ms = frames.mean_ms(), "switching to low-performance mode");
                    ctx.set_profile(ctx.profile().degrade_low_performance());
                    false
                }
                FrameVerdict::Warming | FrameVerdict::Healthy => !ctx.profile().is_low_performance,
            });
            raf.start();
            raf
        });

        let resize_ctx = ctx.clone();
        let resize = EventListener::new(&ctx.window, "resize", move |_| {
            let signals = folio_web::probe_signals(&resize_ctx.window);
            let next = resize_ctx
                .profile()
                .with_viewport(&signals, &DeviceThresholds::WEB);
            resize_ctx.set_profile(next);
        });

        Self {
            _sampler: sampler,
            _resize: resize,
        }
    }
}
