// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progressive-fallback loading of the hero's 3D scene.
//!
//! The scene runtime is large, optional, and browser-only. [`SceneGate`]
//! decides whether to try at all (mobile devices go straight to the static
//! image, everything else waits until the container scrolls into view).
//! [`SceneLoader`] then tracks one load attempt per mount:
//!
//! ```text
//!  NotMounted --mount(client)--> Loading --Ok--> Loaded
//!                                   |
//!                                   +---Err---> Errored (terminal)
//! ```
//!
//! Whatever state the loader is in, [`SceneLoader::view`] names something to
//! draw. An errored load falls back to a [`FallbackImage`], which has its own
//! second layer: if the image itself fails, a short text notice replaces it.
//!
//! Failed loads are never retried within a mount.

use alloc::string::String;
use core::fmt;

use crate::device::DeviceProfile;

/// Where the hero scene comes from and what to show instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    /// Opaque scene identifier passed to the runtime's `load`.
    pub scene_url: &'static str,
    /// ES module exporting the scene runtime.
    pub runtime_url: &'static str,
    /// Name of the runtime's application constructor export.
    pub export_name: &'static str,
    /// Static image shown when the scene is bypassed or fails.
    pub fallback_src: &'static str,
    /// Alt text for the static image.
    pub fallback_alt: &'static str,
    /// Text shown while the scene is pending.
    pub placeholder: &'static str,
    /// Text shown when even the static image fails.
    pub failure_notice: &'static str,
    /// Fraction of the container that must be visible before loading.
    pub visibility_threshold: f64,
}

impl SceneConfig {
    /// The home page hero robot.
    pub const HERO: Self = Self {
        scene_url: "https://prod.spline.design/1WM5NpYvXC5G168Z/scene.splinecode",
        runtime_url: "https://unpkg.com/@splinetool/runtime/build/runtime.js",
        export_name: "Application",
        fallback_src: "/NEXBOT - robot character concept - Copy@1-1536x695.png",
        fallback_alt: "3D scene fallback: NEXBOT robot character concept",
        placeholder: "Loading 3D scene...",
        failure_notice: "Could not load 3D scene",
        visibility_threshold: 0.1,
    };
}

/// Why a scene load failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadFailure {
    /// The dynamic module import rejected.
    #[error("scene runtime import rejected: {0}")]
    ImportRejected(String),
    /// The module loaded but lacks the expected export.
    #[error("scene runtime has no usable `{0}` export")]
    MissingExport(&'static str),
    /// The runtime loaded but refused the scene.
    #[error("scene rejected by runtime: {0}")]
    SceneRejected(String),
    /// The owning component went away before the load finished.
    #[error("scene container unmounted during load")]
    Unmounted,
}

/// What an async scene load produces.
pub type LoadOutcome<H> = Result<H, LoadFailure>;

/// Gate decision taken before any load is attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Container not yet visible; show the placeholder.
    Wait,
    /// Constrained device; show the static image and never load.
    Static,
    /// Start loading.
    Load,
}

/// Visibility latch and device policy in front of the loader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneGate {
    threshold: f64,
    seen: bool,
}

impl SceneGate {
    /// Creates a gate that opens once `threshold` of the container is seen.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            seen: false,
        }
    }

    /// Pure policy: mobile devices bypass the scene, others wait for
    /// visibility.
    #[must_use]
    pub fn decide(profile: &DeviceProfile, visible: bool) -> GateDecision {
        if profile.is_mobile {
            GateDecision::Static
        } else if visible {
            GateDecision::Load
        } else {
            GateDecision::Wait
        }
    }

    /// Feeds an intersection ratio. Returns `true` the first time the
    /// container crosses the threshold; visibility is latched after that.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.seen || ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.seen = true;
        true
    }

    /// Whether the container has been seen.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.seen
    }

    /// [`SceneGate::decide`] with the latched visibility.
    #[must_use]
    pub fn decision(&self, profile: &DeviceProfile) -> GateDecision {
        Self::decide(profile, self.seen)
    }
}

/// What the scene box should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneView {
    /// Pending text.
    Placeholder(&'static str),
    /// The live scene owns the box.
    Live,
    /// The static fallback image.
    StaticImage {
        /// Image URL.
        src: &'static str,
        /// Alt text.
        alt: &'static str,
    },
    /// The fallback image failed too.
    Notice(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FallbackState {
    Showing,
    Broken,
}

/// The static image layer with its own failure handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackImage {
    config: SceneConfig,
    state: FallbackState,
}

impl FallbackImage {
    /// A fallback that starts out showing its image.
    #[must_use]
    pub const fn new(config: SceneConfig) -> Self {
        Self {
            config,
            state: FallbackState::Showing,
        }
    }

    /// The image's error event fired. Idempotent.
    pub fn image_failed(&mut self) {
        if self.state == FallbackState::Showing {
            tracing::warn!(src = self.config.fallback_src, "fallback image failed");
            self.state = FallbackState::Broken;
        }
    }

    /// Whether the image failed.
    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.state == FallbackState::Broken
    }

    /// The image, or the notice once the image has failed.
    #[must_use]
    pub fn view(&self) -> SceneView {
        match self.state {
            FallbackState::Showing => SceneView::StaticImage {
                src: self.config.fallback_src,
                alt: self.config.fallback_alt,
            },
            FallbackState::Broken => SceneView::Notice(self.config.failure_notice),
        }
    }
}

/// Returned by [`SceneLoader::mount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountAction {
    /// Begin the async import now.
    StartImport,
    /// Nothing to do.
    None,
}

/// Lifecycle of a single load attempt.
#[derive(Clone, PartialEq, Eq)]
pub enum LoaderState<H> {
    /// Not yet rendered on a client.
    NotMounted,
    /// Import in flight.
    Loading,
    /// The scene is live.
    Loaded(H),
    /// Terminal failure for this mount.
    Errored(LoadFailure),
    /// The owning component is gone.
    Detached,
}

impl<H> fmt::Debug for LoaderState<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMounted => f.write_str("NotMounted"),
            Self::Loading => f.write_str("Loading"),
            Self::Loaded(_) => f.write_str("Loaded(..)"),
            Self::Errored(err) => f.debug_tuple("Errored").field(err).finish(),
            Self::Detached => f.write_str("Detached"),
        }
    }
}

/// Per-mount scene load state machine, generic over the live scene handle.
pub struct SceneLoader<H> {
    state: LoaderState<H>,
    fallback: FallbackImage,
    config: SceneConfig,
}

impl<H> SceneLoader<H> {
    /// A loader that has not been mounted.
    #[must_use]
    pub const fn new(config: SceneConfig) -> Self {
        Self {
            state: LoaderState::NotMounted,
            fallback: FallbackImage::new(config),
            config,
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &LoaderState<H> {
        &self.state
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Called on each render pass. `client` is `false` until a DOM exists.
    ///
    /// Only the first client-side mount starts an import.
    pub fn mount(&mut self, client: bool) -> MountAction {
        if !client || !matches!(self.state, LoaderState::NotMounted) {
            return MountAction::None;
        }
        tracing::debug!(scene = self.config.scene_url, "scene import started");
        self.state = LoaderState::Loading;
        MountAction::StartImport
    }

    /// Delivers the result of the import started by [`SceneLoader::mount`].
    ///
    /// Outcomes that arrive in any state but `Loading` are stale and dropped
    /// (along with any handle they carry). Returns whether the outcome was
    /// applied.
    pub fn resolve(&mut self, outcome: LoadOutcome<H>) -> bool {
        if !matches!(self.state, LoaderState::Loading) {
            tracing::debug!(state = ?self.state, ok = outcome.is_ok(), "stale scene outcome ignored");
            return false;
        }
        self.state = match outcome {
            Ok(handle) => {
                tracing::debug!("scene loaded");
                LoaderState::Loaded(handle)
            }
            Err(err) => {
                tracing::warn!(%err, "scene load failed, showing fallback");
                LoaderState::Errored(err)
            }
        };
        true
    }

    /// Forwards a fallback image error.
    pub fn fallback_failed(&mut self) {
        self.fallback.image_failed();
    }

    /// Detaches the loader. Returns the live handle, if any, so the caller
    /// can dispose of it.
    pub fn unmount(&mut self) -> Option<H> {
        match core::mem::replace(&mut self.state, LoaderState::Detached) {
            LoaderState::Loaded(handle) => Some(handle),
            _ => None,
        }
    }

    /// Whether the load failed.
    #[must_use]
    pub fn is_errored(&self) -> bool {
        matches!(self.state, LoaderState::Errored(_))
    }

    /// The live handle, if loaded.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        match &self.state {
            LoaderState::Loaded(handle) => Some(handle),
            _ => None,
        }
    }

    /// What to draw right now.
    #[must_use]
    pub fn view(&self) -> SceneView {
        match self.state {
            LoaderState::NotMounted | LoaderState::Loading | LoaderState::Detached => {
                SceneView::Placeholder(self.config.placeholder)
            }
            LoaderState::Loaded(_) => SceneView::Live,
            LoaderState::Errored(_) => self.fallback.view(),
        }
    }
}

impl<H> fmt::Debug for SceneLoader<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneLoader")
            .field("state", &self.state)
            .field("fallback", &self.fallback.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Loader = SceneLoader<u32>;

    #[test]
    fn server_render_never_loads() {
        let mut loader = Loader::new(SceneConfig::HERO);
        assert_eq!(loader.mount(false), MountAction::None);
        assert!(matches!(loader.state(), LoaderState::NotMounted));
        assert_eq!(loader.view(), SceneView::Placeholder("Loading 3D scene..."));
    }

    #[test]
    fn first_client_mount_starts_once() {
        let mut loader = Loader::new(SceneConfig::HERO);
        assert_eq!(loader.mount(true), MountAction::StartImport);
        assert_eq!(loader.mount(true), MountAction::None);
        assert!(loader.resolve(Ok(7)));
        assert_eq!(loader.view(), SceneView::Live);
        assert_eq!(loader.handle(), Some(&7));
    }

    #[test]
    fn rejected_import_is_terminal_fallback() {
        let mut loader = Loader::new(SceneConfig::HERO);
        loader.mount(true);
        assert!(loader.resolve(Err(LoadFailure::ImportRejected(String::from("404")))));
        assert!(loader.is_errored());
        assert_eq!(
            loader.view(),
            SceneView::StaticImage {
                src: SceneConfig::HERO.fallback_src,
                alt: SceneConfig::HERO.fallback_alt,
            }
        );
        // No retry, no late success.
        assert_eq!(loader.mount(true), MountAction::None);
        assert!(!loader.resolve(Ok(1)));
        assert!(loader.is_errored());
    }

    #[test]
    fn broken_fallback_shows_notice() {
        let mut loader = Loader::new(SceneConfig::HERO);
        loader.mount(true);
        loader.resolve(Err(LoadFailure::MissingExport("Application")));
        loader.fallback_failed();
        assert_eq!(loader.view(), SceneView::Notice("Could not load 3D scene"));
    }

    #[test]
    fn late_result_after_unmount_is_dropped() {
        let mut loader = Loader::new(SceneConfig::HERO);
        loader.mount(true);
        assert_eq!(loader.unmount(), None);
        assert!(!loader.resolve(Ok(3)));
        assert!(matches!(loader.state(), LoaderState::Detached));
    }

    #[test]
    fn unmount_hands_back_live_scene() {
        let mut loader = Loader::new(SceneConfig::HERO);
        loader.mount(true);
        loader.resolve(Ok(9));
        assert_eq!(loader.unmount(), Some(9));
    }

    #[test]
    fn gate_policy() {
        let desktop = DeviceProfile::DESKTOP;
        let phone = DeviceProfile {
            is_mobile: true,
            is_low_performance: true,
        };
        assert_eq!(SceneGate::decide(&desktop, false), GateDecision::Wait);
        assert_eq!(SceneGate::decide(&desktop, true), GateDecision::Load);
        assert_eq!(SceneGate::decide(&phone, true), GateDecision::Static);
        assert_eq!(SceneGate::decide(&phone, false), GateDecision::Static);
    }

    #[test]
    fn gate_latches_visibility() {
        let mut gate = SceneGate::new(SceneConfig::HERO.visibility_threshold);
        assert!(!gate.observe(0.05));
        assert!(gate.observe(0.1));
        assert!(!gate.observe(0.9));
        assert!(!gate.observe(f64::NAN));
        assert!(gate.visible());
        assert_eq!(gate.decision(&DeviceProfile::DESKTOP), GateDecision::Load);
    }

    #[test]
    fn fallback_layer_alone() {
        let mut fallback = FallbackImage::new(SceneConfig::HERO);
        assert!(matches!(fallback.view(), SceneView::StaticImage { .. }));
        fallback.image_failed();
        fallback.image_failed();
        assert!(fallback.is_broken());
    }
}
