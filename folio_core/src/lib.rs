// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machines, layout math and static data for the folio portfolio site.
//!
//! `folio_core` holds everything about the site that can be decided without a
//! browser. It is `no_std` compatible (with `alloc`), never reads a clock
//! (every time-dependent operation takes a [`Timestamp`](time::Timestamp)),
//! and is fully testable on the host.
//!
//! # Architecture
//!
//! Platform glue feeds signals and time in; views read state out:
//!
//! ```text
//!   DeviceSignals ──► DeviceProfile::detect() ──► DeviceProfile
//!                                                     │
//!             ┌───────────────────────────────────────┤
//!             ▼                                       ▼
//!   SceneGate::decide() ──► SceneLoader         RoleTicker, CursorTrail
//!
//!   Timer / pointer ──► Carousel ──► layout() ──► CardStage ──► Presenter::apply()
//!
//!   Toggle ──► ThemeStore ──► ThemeSurface::apply(), ThemeStorage::save(), subscribers
//! ```
//!
//! **[`theme`]**: Single-writer light/dark store with pluggable storage and
//! document surface.
//!
//! **[`device`]**: Capability heuristics turned into an injectable
//! [`DeviceProfile`](device::DeviceProfile), plus the frame-time sampler that
//! can demote it at runtime.
//!
//! **[`loader`]**: Visibility gate and progressive-fallback state machine for
//! the hero's 3D scene.
//!
//! **[`gallery`]**: Deterministic, duplicate-free image allocation over a
//! grouped pool.
//!
//! **[`carousel`]**: Semicircular arc layout with a synchronized slider,
//! auto-advance and tap handling.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait and the
//! diffing [`CardStage`](backend::CardStage).
//!
//! **[`catalog`]**: The static project list.
//!
//! **[`motion`]**: Role ticker, cursor trail, card tilt, scroll parallax and
//! the progress spring.
//!
//! **[`contact`]**: The client-only contact form.
//!
//! **[`transform`]**: 3D transform type with CSS serialization.
//!
//! **[`time`]**: Millisecond timestamps and durations.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod device;
pub mod gallery;
pub mod loader;
pub mod motion;
pub mod theme;
pub mod time;
pub mod transform;
