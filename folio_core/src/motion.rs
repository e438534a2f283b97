// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative motion: hero role ticker, cursor trail, card tilt, scroll
//! parallax and the reading-progress spring.
//!
//! None of this carries an invariant beyond "looks right"; it lives in core so
//! the numbers are pinned by tests instead of scattered through view code.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;

use crate::device::DeviceProfile;
use crate::theme::ThemeMode;
use crate::time::{Duration, Timestamp};
use crate::transform::Transform3d;

// ---------------------------------------------------------------------------
// Role ticker
// ---------------------------------------------------------------------------

/// Text shown before roles that carry the prefix.
pub const ROLE_PREFIX: &str = "I am a ";

/// One line of the hero heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Role {
    /// The rotating part.
    pub text: &'static str,
    /// Whether [`ROLE_PREFIX`] is shown before it.
    pub show_prefix: bool,
}

impl Role {
    /// The full heading line.
    #[must_use]
    pub fn heading(&self) -> String {
        if self.show_prefix {
            format!("{ROLE_PREFIX}{}", self.text)
        } else {
            String::from(self.text)
        }
    }
}

/// Hero heading lines, in display order.
pub const ROLES: [Role; 7] = [
    Role {
        text: "Designer",
        show_prefix: true,
    },
    Role {
        text: "Fullstack Developer",
        show_prefix: true,
    },
    Role {
        text: "Manager",
        show_prefix: true,
    },
    Role {
        text: "Founder",
        show_prefix: true,
    },
    Role {
        text: "I am James",
        show_prefix: false,
    },
    Role {
        text: "You can call me Zetsu",
        show_prefix: false,
    },
    Role {
        text: "Nice to meet you",
        show_prefix: false,
    },
];

/// Role interval on capable devices.
pub const ROLE_INTERVAL: Duration = Duration::from_millis(3000);

/// Role interval in low-performance mode.
pub const ROLE_INTERVAL_LOW_PERFORMANCE: Duration = Duration::from_millis(4000);

/// Cycles through [`ROLES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleTicker {
    index: usize,
    interval: Duration,
}

impl RoleTicker {
    /// Starts at the first role with the interval for `profile`.
    #[must_use]
    pub fn new(profile: &DeviceProfile) -> Self {
        Self {
            index: 0,
            interval: Self::interval_for(profile),
        }
    }

    fn interval_for(profile: &DeviceProfile) -> Duration {
        if profile.is_low_performance {
            ROLE_INTERVAL_LOW_PERFORMANCE
        } else {
            ROLE_INTERVAL
        }
    }

    /// The role currently shown.
    #[must_use]
    pub fn current(&self) -> Role {
        ROLES[self.index]
    }

    /// Index into [`ROLES`].
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Time between role changes.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Moves to the next role, wrapping around.
    pub fn advance(&mut self) -> Role {
        self.index = (self.index + 1) % ROLES.len();
        self.current()
    }

    /// Re-derives the interval after a profile change. Returns `true` when
    /// the caller must reschedule its timer.
    pub fn update_profile(&mut self, profile: &DeviceProfile) -> bool {
        let interval = Self::interval_for(profile);
        let changed = interval != self.interval;
        self.interval = interval;
        changed
    }
}

// ---------------------------------------------------------------------------
// Cursor trail
// ---------------------------------------------------------------------------

/// Cursor trail tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    /// Number of dots.
    pub length: usize,
    /// Minimum time between trail updates.
    pub update_every: Duration,
    /// Scale lost per dot.
    pub scale_step: f64,
    /// Opacity lost per dot.
    pub opacity_step: f64,
    /// Dots that get the glow treatment.
    pub glow_dots: usize,
    /// Half the dot size, in px.
    pub dot_radius: f64,
}

impl TrailConfig {
    /// The site's trail.
    pub const DEFAULT: Self = Self {
        length: 8,
        update_every: Duration::from_millis(16),
        scale_step: 0.08,
        opacity_step: 0.09,
        glow_dots: 3,
        dot_radius: 4.0,
    };
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Box-shadow parameters for the leading dots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Shadow spread, px.
    pub size: f64,
    /// Shadow blur, px.
    pub blur: f64,
    /// Shadow alpha.
    pub intensity: f64,
    /// CSS `blur()` filter radius on the dot itself, px.
    pub filter_blur: f64,
}

impl Glow {
    /// CSS `box-shadow` value in the accent color of `mode`.
    #[must_use]
    pub fn box_shadow(&self, mode: ThemeMode) -> String {
        let rgb = match mode {
            ThemeMode::Dark => "129, 140, 248",
            ThemeMode::Light => "99, 102, 241",
        };
        format!(
            "0 0 {}px {}px rgba({rgb}, {})",
            self.size, self.blur, self.intensity
        )
    }
}

/// One rendered trail dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
    /// Top-left x, px.
    pub x: f64,
    /// Top-left y, px.
    pub y: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity.
    pub opacity: f64,
    /// Glow for the leading dots.
    pub glow: Option<Glow>,
}

/// Recent pointer positions, newest first.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    config: TrailConfig,
    pointer: (f64, f64),
    points: VecDeque<(f64, f64)>,
    last_update: Option<Timestamp>,
}

impl CursorTrail {
    /// An empty trail; all dots start at the origin.
    #[must_use]
    pub fn new(config: TrailConfig) -> Self {
        let mut points = VecDeque::with_capacity(config.length);
        points.resize(config.length, (0.0, 0.0));
        Self {
            config,
            pointer: (0.0, 0.0),
            points,
            last_update: None,
        }
    }

    /// Whether the trail runs at all on this device.
    #[must_use]
    pub const fn enabled_for(profile: &DeviceProfile) -> bool {
        profile.pointer_effects()
    }

    /// Records the latest pointer position.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Latest pointer position, for the main cursor dot.
    #[must_use]
    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Animation frame hook. Shifts the trail once more than
    /// [`TrailConfig::update_every`] has passed; returns whether it did.
    pub fn frame(&mut self, now: Timestamp) -> bool {
        let Some(last) = self.last_update else {
            self.last_update = Some(now);
            return false;
        };
        if now - last <= self.config.update_every {
            return false;
        }
        self.last_update = Some(now);
        self.points.push_front(self.pointer);
        self.points.truncate(self.config.length);
        true
    }

    /// Dot `i` of the trail (0 is newest).
    #[must_use]
    pub fn dot(&self, i: usize) -> Option<TrailDot> {
        let &(x, y) = self.points.get(i)?;
        let cfg = &self.config;
        let step = i as f64;
        let glow = (i < cfg.glow_dots).then(|| Glow {
            size: 8.0 - step,
            blur: step,
            intensity: 0.6 - step * 0.05,
            filter_blur: step * 0.3,
        });
        Some(TrailDot {
            x: x - cfg.dot_radius,
            y: y - cfg.dot_radius,
            scale: 1.0 - step * cfg.scale_step,
            opacity: 1.0 - step * cfg.opacity_step,
            glow,
        })
    }

    /// All dots, newest first.
    pub fn dots(&self) -> impl Iterator<Item = TrailDot> + '_ {
        (0..self.points.len()).filter_map(|i| self.dot(i))
    }
}

// ---------------------------------------------------------------------------
// Card tilt
// ---------------------------------------------------------------------------

/// A client-space rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge, px.
    pub left: f64,
    /// Top edge, px.
    pub top: f64,
    /// Width, px.
    pub width: f64,
    /// Height, px.
    pub height: f64,
}

/// Largest tilt applied at a card edge.
pub const MAX_TILT_DEG: f64 = 10.0;

/// Pointer-following card rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    /// Rotation about the horizontal axis.
    pub rotate_x_deg: f64,
    /// Rotation about the vertical axis.
    pub rotate_y_deg: f64,
}

impl Tilt {
    /// No rotation.
    pub const FLAT: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    /// The rotation as a transform (perspective is left to CSS).
    #[must_use]
    pub fn transform(&self) -> Transform3d {
        Transform3d::from_rotation_x_deg(self.rotate_x_deg)
            * Transform3d::from_rotation_y_deg(self.rotate_y_deg)
    }
}

/// Tilts a card toward the pointer: the edge under the pointer dips away by
/// up to [`MAX_TILT_DEG`]. Degenerate rectangles stay flat.
#[must_use]
pub fn tilt(pointer: (f64, f64), rect: &Rect) -> Tilt {
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return Tilt::FLAT;
    }
    let dx = ((pointer.0 - (rect.left + half_w)) / half_w).clamp(-1.0, 1.0);
    let dy = ((pointer.1 - (rect.top + half_h)) / half_h).clamp(-1.0, 1.0);
    Tilt {
        rotate_x_deg: -dy * MAX_TILT_DEG,
        rotate_y_deg: dx * MAX_TILT_DEG,
    }
}

// ---------------------------------------------------------------------------
// Parallax
// ---------------------------------------------------------------------------

/// Clamped piecewise-linear interpolation of `progress` over `stops`.
///
/// `stops` must be ascending. Extra entries in the longer slice are ignored;
/// empty input yields `0.0`.
#[must_use]
pub fn interpolate(progress: f64, stops: &[f64], values: &[f64]) -> f64 {
    let n = stops.len().min(values.len());
    if n == 0 {
        return 0.0;
    }
    if progress.is_nan() || progress <= stops[0] {
        return values[0];
    }
    for i in 1..n {
        if progress <= stops[i] {
            let span = stops[i] - stops[i - 1];
            if span <= 0.0 {
                return values[i];
            }
            let t = (progress - stops[i - 1]) / span;
            return values[i - 1] + (values[i] - values[i - 1]) * t;
        }
    }
    values[n - 1]
}

/// Scroll progress of an element through the viewport: 0 when its top edge
/// touches the viewport bottom, 1 when its bottom edge leaves the top.
#[must_use]
pub fn scroll_progress(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + element_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - element_top) / travel).clamp(0.0, 1.0)
}

/// Progress through the whole document, for the reading bar.
#[must_use]
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let travel = scroll_height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    (scroll_y / travel).clamp(0.0, 1.0)
}

/// Scroll-linked styling of a case-study image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    /// Vertical drift, px.
    pub y: f64,
    /// Tilt about the horizontal axis.
    pub rotate_x_deg: f64,
    /// Turn about the vertical axis.
    pub rotate_y_deg: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity.
    pub opacity: f64,
    /// CSS brightness factor.
    pub brightness: f64,
}

impl ParallaxFrame {
    /// Styling for image `index` at scroll `progress`. The index varies the
    /// drift and rotation so neighboring images do not move in lockstep.
    #[must_use]
    pub fn at(progress: f64, index: usize) -> Self {
        let m2 = (index % 2) as f64;
        let m3 = (index % 3) as f64;
        Self {
            y: interpolate(progress, &[0.0, 1.0], &[0.0, -50.0 + m3 * 10.0]),
            rotate_y_deg: interpolate(
                progress,
                &[0.0, 0.5, 1.0],
                &[-5.0 - m2 * 10.0, 0.0, 5.0 + m2 * 10.0],
            ),
            rotate_x_deg: interpolate(progress, &[0.0, 0.5, 1.0], &[2.0 + m3, 0.0, -2.0 - m3]),
            scale: interpolate(progress, &[0.0, 0.5, 1.0], &[0.95, 1.0, 0.95]),
            opacity: interpolate(progress, &[0.0, 0.3, 0.7, 1.0], &[0.6, 1.0, 1.0, 0.6]),
            brightness: interpolate(progress, &[0.0, 0.5, 1.0], &[0.8, 1.0, 0.8]),
        }
    }

    /// The frame as a transform.
    #[must_use]
    pub fn transform(&self) -> Transform3d {
        Transform3d::from_translation(0.0, self.y, 0.0)
            * Transform3d::from_rotation_x_deg(self.rotate_x_deg)
            * Transform3d::from_rotation_y_deg(self.rotate_y_deg)
            * Transform3d::from_scale(self.scale)
    }

    /// CSS `filter` value.
    #[must_use]
    pub fn filter(&self) -> String {
        format!("brightness({})", self.brightness)
    }
}

/// Hover emphasis for gallery images, picked by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverStyle {
    /// Scale while hovered.
    pub scale: f64,
    /// Turn about the vertical axis while hovered.
    pub rotate_y_deg: f64,
    /// Tilt while hovered.
    pub rotate_x_deg: f64,
    /// CSS brightness factor while hovered.
    pub brightness: f64,
}

impl HoverStyle {
    /// Every fifth image swings, every fourth zooms, the rest lift slightly.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 5 == 0 {
            Self {
                scale: 1.08,
                rotate_y_deg: 15.0,
                rotate_x_deg: -5.0,
                brightness: 1.2,
            }
        } else if index % 4 == 0 {
            Self {
                scale: 1.1,
                rotate_y_deg: 0.0,
                rotate_x_deg: 0.0,
                brightness: 1.15,
            }
        } else {
            Self {
                scale: 1.05,
                rotate_y_deg: 0.0,
                rotate_x_deg: 0.0,
                brightness: 1.1,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Spring
// ---------------------------------------------------------------------------

/// A damped spring chasing a target value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Spring constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Mass.
    pub mass: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

/// Longest integration substep, seconds.
const MAX_SUBSTEP: f64 = 1.0 / 120.0;

/// Distance and speed under which a spring snaps to its target.
const REST_EPSILON: f64 = 1e-4;

impl Spring {
    /// The reading-progress bar spring, at rest at zero.
    pub const PROGRESS: Self = Self::new(100.0, 30.0, 1.0);

    /// A spring at rest at zero.
    #[must_use]
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the value being chased.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Whether the spring has come to rest on its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances by `dt` and returns the new value.
    ///
    /// Long frames are split into substeps so a stalled tab does not make
    /// the integration blow up.
    pub fn step(&mut self, dt: Duration) -> f64 {
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if libm::fabs(self.value - self.target) < REST_EPSILON && libm::fabs(self.velocity) < REST_EPSILON
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::PROGRESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn roles_cycle_with_profile_interval() {
        let mut ticker = RoleTicker::new(&DeviceProfile::DESKTOP);
        assert_eq!(ticker.interval(), ROLE_INTERVAL);
        assert_eq!(ticker.current().heading(), "I am a Designer");
        for _ in 0..4 {
            ticker.advance();
        }
        assert_eq!(ticker.current().heading(), "I am James");
        ticker.advance();
        ticker.advance();
        assert_eq!(ticker.advance(), ROLES[0]);

        assert!(ticker.update_profile(&DeviceProfile::DESKTOP.degrade_low_performance()));
        assert_eq!(ticker.interval(), ROLE_INTERVAL_LOW_PERFORMANCE);
        assert!(!ticker.update_profile(&DeviceProfile::DESKTOP.degrade_low_performance()));
    }

    #[test]
    fn trail_throttles_and_fades() {
        let mut trail = CursorTrail::new(TrailConfig::DEFAULT);
        assert!(!trail.frame(Timestamp(0)));
        trail.pointer_moved(100.0, 50.0);
        assert!(!trail.frame(Timestamp(16)));
        assert!(trail.frame(Timestamp(17)));

        let dots: alloc::vec::Vec<_> = trail.dots().collect();
        assert_eq!(dots.len(), 8);
        assert_eq!((dots[0].x, dots[0].y), (96.0, 46.0));
        assert!((dots[7].scale - 0.44).abs() < EPS);
        assert!((dots[7].opacity - 0.37).abs() < EPS);
        assert!(dots[2].glow.is_some());
        assert!(dots[3].glow.is_none());
    }

    #[test]
    fn trail_is_desktop_only() {
        let phone = DeviceProfile {
            is_mobile: true,
            is_low_performance: false,
        };
        assert!(!CursorTrail::enabled_for(&phone));
        assert!(CursorTrail::enabled_for(&DeviceProfile::DESKTOP));
    }

    #[test]
    fn glow_uses_theme_accent() {
        let glow = CursorTrail::new(TrailConfig::DEFAULT).dot(0).unwrap().glow.unwrap();
        assert_eq!(
            glow.box_shadow(ThemeMode::Dark),
            "0 0 8px 0px rgba(129, 140, 248, 0.6)"
        );
    }

    #[test]
    fn tilt_peaks_at_edges() {
        let rect = Rect {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(tilt((100.0, 50.0), &rect), Tilt::FLAT);
        let corner = tilt((200.0, 0.0), &rect);
        assert_eq!(corner.rotate_y_deg, 10.0);
        assert_eq!(corner.rotate_x_deg, 10.0);
        let outside = tilt((900.0, 50.0), &rect);
        assert_eq!(outside.rotate_y_deg, 10.0);
        assert_eq!(tilt((5.0, 5.0), &Rect::default()), Tilt::FLAT);
    }

    #[test]
    fn interpolate_clamps_and_blends() {
        let stops = [0.0, 0.3, 0.7, 1.0];
        let values = [0.6, 1.0, 1.0, 0.6];
        assert_eq!(interpolate(-1.0, &stops, &values), 0.6);
        assert_eq!(interpolate(2.0, &stops, &values), 0.6);
        assert!((interpolate(0.15, &stops, &values) - 0.8).abs() < EPS);
        assert_eq!(interpolate(0.5, &stops, &values), 1.0);
        assert_eq!(interpolate(0.5, &[], &[]), 0.0);
    }

    #[test]
    fn parallax_midpoint_is_neutral() {
        let mid = ParallaxFrame::at(0.5, 3);
        assert_eq!((mid.rotate_x_deg, mid.rotate_y_deg), (0.0, 0.0));
        assert_eq!((mid.scale, mid.opacity, mid.brightness), (1.0, 1.0, 1.0));
        let end = ParallaxFrame::at(1.0, 2);
        assert_eq!(end.y, -30.0);
        assert_eq!(end.filter(), "brightness(0.8)");
    }

    #[test]
    fn scroll_progress_spans_entry_to_exit() {
        assert_eq!(scroll_progress(800.0, 200.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-200.0, 200.0, 800.0), 1.0);
        assert_eq!(scroll_progress(300.0, 200.0, 800.0), 0.5);
        assert_eq!(page_progress(500.0, 1500.0, 500.0), 0.5);
        assert_eq!(page_progress(10.0, 400.0, 500.0), 0.0);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::PROGRESS;
        spring.set_target(1.0);
        let first = spring.step(Duration::from_millis(16));
        assert!(first > 0.0 && first < 1.0);
        for _ in 0..300 {
            spring.step(Duration::from_millis(16));
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn hover_styles_by_index() {
        assert_eq!(HoverStyle::for_index(10).rotate_y_deg, 15.0);
        assert_eq!(HoverStyle::for_index(8).scale, 1.1);
        assert_eq!(HoverStyle::for_index(7).scale, 1.05);
    }
}
