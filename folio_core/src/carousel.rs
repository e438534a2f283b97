// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semicircular project carousel.
//!
//! The carousel holds a discrete active index over `N` cards and a
//! continuous slider value in `[0, 100]`. Every explicit index change resyncs
//! the slider to `active * 100 / (N - 1)`; while the slider is being dragged
//! it follows the pointer and the index is derived from it instead.
//!
//! Each card is placed on a circle of radius [`CarouselConfig::radius`]
//! (percent of the container) with the active card at the apex:
//!
//! ```text
//!                 active (r = 0)
//!            r = -1     ·     r = +1
//!        r = -2    ·         ·    r = +2
//!   ------- ·  margin (y = -30)  · -------
//!            hidden below the margin
//! ```
//!
//! Cards below the margin stay in the layout with zero scale and opacity so
//! they can animate back in.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use crate::catalog::Project;
use crate::time::{Duration, Timestamp};
use crate::transform::Transform3d;

/// Tunables for placement and auto-advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Arc radius, in percent of the container.
    pub radius: f64,
    /// Vertical offset below which a card is hidden.
    pub visibility_margin: f64,
    /// Scale of a card at the margin.
    pub scale_min: f64,
    /// Scale of the active card.
    pub scale_max: f64,
    /// Opacity of a card at the margin.
    pub opacity_min: f64,
    /// Opacity of the active card.
    pub opacity_max: f64,
    /// Backward tilt (degrees) of a card at the margin.
    pub tilt_max_deg: f64,
    /// Fraction of the angular step applied as in-plane rotation.
    pub twist: f64,
    /// Period of the auto-advance timer.
    pub auto_advance: Duration,
    /// Quiet time after an interaction before auto-advance resumes.
    pub idle: Duration,
}

impl CarouselConfig {
    /// Settings used on the home page.
    pub const WEB: Self = Self {
        radius: 70.0,
        visibility_margin: -30.0,
        scale_min: 0.7,
        scale_max: 1.0,
        opacity_min: 0.4,
        opacity_max: 1.0,
        tilt_max_deg: 20.0,
        twist: 0.15,
        auto_advance: Duration::from_millis(6000),
        idle: Duration::from_millis(5000),
    };
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::WEB
    }
}

/// Errors from [`Carousel::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// A carousel needs at least one card.
    #[error("carousel has no cards")]
    Empty,
}

/// A single rotation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Increments the active index, wrapping to 0 after the last card.
    Next,
    /// Decrements the active index, wrapping to the last card before 0.
    Previous,
}

impl Direction {
    /// `+1` for [`Direction::Next`], `-1` for [`Direction::Previous`].
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Result of a tap on a card (touch input has no hover).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// First tap: the card became active and hovered.
    Selected,
    /// Second tap on a published card.
    Navigate(&'static str),
    /// Second tap on an upcoming card.
    ShowDetails,
    /// The index did not name a card.
    Ignored,
}

/// Where and how to draw one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    /// Card index.
    pub index: usize,
    /// Horizontal offset from the arc center, percent of container width.
    pub offset_x: f64,
    /// Vertical offset from the arc center (up is positive), percent of
    /// container height.
    pub offset_y: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// In-plane rotation.
    pub rotate_z_deg: f64,
    /// Backward tilt.
    pub rotate_x_deg: f64,
    /// Stacking order, higher is nearer.
    pub z_index: i32,
    /// Whether the card is above the visibility margin.
    pub visible: bool,
}

impl CardPlacement {
    /// Builds the CSS transform for a container of the given pixel size.
    #[must_use]
    pub fn transform(&self, width: f64, height: f64) -> Transform3d {
        let x = self.offset_x / 100.0 * width;
        let y = -self.offset_y / 100.0 * height;
        Transform3d::from_translation(x, y, 0.0)
            * Transform3d::from_rotation_z_deg(self.rotate_z_deg)
            * Transform3d::from_rotation_x_deg(self.rotate_x_deg)
            * Transform3d::from_scale(self.scale)
    }
}

/// Carousel state: active index, slider, hover and interaction clock.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    config: CarouselConfig,
    active: usize,
    slider: f64,
    direction: i8,
    hovered: Option<usize>,
    tap_hover: bool,
    dragging: bool,
    last_interaction: Option<Timestamp>,
}

impl Carousel {
    /// Creates a carousel over `len` cards, starting at card 0.
    pub fn new(len: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            config,
            active: 0,
            slider: 0.0,
            direction: 0,
            hovered: None,
            tap_hover: false,
            dragging: false,
            last_interaction: None,
        })
    }

    /// Number of cards.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; construction rejects empty carousels.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The active card.
    #[inline]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Slider position in `[0, 100]`.
    #[inline]
    #[must_use]
    pub fn slider_value(&self) -> f64 {
        self.slider
    }

    /// Sign of the last index change: `-1`, `0` or `+1`.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> i8 {
        self.direction
    }

    /// The hovered card, if any.
    #[inline]
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Whether card `index` shows its expanded detail. Hovering a card, or
    /// a first tap on it, reveals it.
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Whether a slider drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The configuration in use.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Slider value that corresponds to `index`.
    #[must_use]
    pub fn slider_for(&self, index: usize) -> f64 {
        if self.len < 2 {
            return 0.0;
        }
        index as f64 * self.step()
    }

    /// Moves one card in `direction`.
    pub fn rotate(&mut self, direction: Direction, now: Timestamp) {
        self.step_active(direction);
        self.touch(now);
    }

    /// Makes `index` active. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now: Timestamp) -> bool {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring out-of-range select");
            return false;
        }
        self.set_active(index);
        self.slider = self.slider_for(index);
        self.touch(now);
        true
    }

    /// Moves the slider under the pointer and derives the index from it.
    pub fn drag_slider(&mut self, percent: f64, now: Timestamp) {
        self.dragging = true;
        self.touch(now);
        if self.len < 2 {
            self.slider = 0.0;
            return;
        }
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.slider = percent;
        self.set_active(self.index_for(percent));
    }

    /// Ends a drag and snaps the slider onto the active card.
    pub fn release_slider(&mut self, now: Timestamp) {
        self.dragging = false;
        self.slider = self.slider_for(self.active);
        self.touch(now);
    }

    /// A click on the slider track: drag to `percent`, then release.
    pub fn click_slider(&mut self, percent: f64, now: Timestamp) {
        self.drag_slider(percent, now);
        self.release_slider(now);
    }

    /// Converts a pointer x coordinate to a slider percentage over a track
    /// starting at `left` with the given `width`.
    #[must_use]
    pub fn percent_from_pointer(x: f64, left: f64, width: f64) -> f64 {
        if width <= 0.0 || !width.is_finite() {
            return 0.0;
        }
        let percent = (x - left) / width * 100.0;
        if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Sets or clears the hovered card. Hovering suspends auto-advance.
    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.len);
        self.tap_hover = false;
    }

    /// Auto-advance check, called every [`CarouselConfig::auto_advance`].
    ///
    /// Advances by one card unless a card is hovered, the slider is held,
    /// or the user interacted within [`CarouselConfig::idle`]. Returns whether
    /// the index moved.
    ///
    /// Touch devices send no reliable `mouseleave`, so a hover set by [`tap`]
    /// lapses once the idle window has passed.
    ///
    /// [`tap`]: Self::tap
    pub fn tick(&mut self, now: Timestamp) -> bool {
        if self.tap_hover && !self.within_idle(now) {
            tracing::trace!(card = ?self.hovered, "tap hover lapsed");
            self.hovered = None;
            self.tap_hover = false;
        }
        if self.hovered.is_some() || self.dragging {
            return false;
        }
        if self.within_idle(now) {
            return false;
        }
        self.step_active(Direction::Next);
        true
    }

    fn within_idle(&self, now: Timestamp) -> bool {
        self.last_interaction
            .is_some_and(|at| now - at < self.config.idle)
    }

    /// Touch activation: the first tap selects and reveals the card, a second
    /// tap on the same card opens it.
    pub fn tap(&mut self, index: usize, now: Timestamp, project: &Project) -> TapOutcome {
        if index >= self.len {
            return TapOutcome::Ignored;
        }
        if self.active == index && self.hovered == Some(index) {
            self.touch(now);
            return match project.link() {
                Some(link) => TapOutcome::Navigate(link),
                None => TapOutcome::ShowDetails,
            };
        }
        self.select(index, now);
        self.hovered = Some(index);
        self.tap_hover = true;
        TapOutcome::Selected
    }

    /// Placement of card `index` relative to the active card.
    #[must_use]
    pub fn placement(&self, index: usize) -> CardPlacement {
        let cfg = &self.config;
        let r = self.relative_offset(index) as f64;
        let n = self.len as f64;

        let angle = r * TAU / n + FRAC_PI_2;
        let offset_x = libm::cos(angle) * cfg.radius;
        let offset_y = libm::sin(angle) * cfg.radius;
        let visible = offset_y >= cfg.visibility_margin;

        let (scale, opacity, rotate_x_deg) = if visible {
            let p = ((offset_y - cfg.visibility_margin) / (cfg.radius - cfg.visibility_margin))
                .clamp(0.0, 1.0);
            (
                lerp(cfg.scale_min, cfg.scale_max, p),
                lerp(cfg.opacity_min, cfg.opacity_max, p),
                (1.0 - p) * cfg.tilt_max_deg,
            )
        } else {
            (0.0, 0.0, cfg.tilt_max_deg)
        };

        CardPlacement {
            index,
            offset_x,
            offset_y,
            scale,
            opacity,
            rotate_z_deg: -r * (360.0 / n) * cfg.twist,
            rotate_x_deg,
            z_index: z_index_for(opacity),
            visible,
        }
    }

    /// Placements for every card, in index order.
    #[must_use]
    pub fn layout(&self) -> Vec<CardPlacement> {
        (0..self.len).map(|i| self.placement(i)).collect()
    }

    fn step(&self) -> f64 {
        100.0 / (self.len - 1) as f64
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "percent is clamped to [0, 100] so the quotient is a small non-negative integer"
    )]
    fn index_for(&self, percent: f64) -> usize {
        let index = libm::round(percent / self.step()) as usize;
        index.min(self.len - 1)
    }

    /// Signed distance from the active card, normalized into `(-N/2, N/2]`.
    fn relative_offset(&self, index: usize) -> isize {
        let n = self.len as isize;
        let mut r = (index as isize - self.active as isize).rem_euclid(n);
        if 2 * r > n {
            r -= n;
        }
        r
    }

    fn step_active(&mut self, direction: Direction) {
        let next = match direction {
            Direction::Next => (self.active + 1) % self.len,
            Direction::Previous => (self.active + self.len - 1) % self.len,
        };
        self.active = next;
        self.direction = direction.sign();
        self.slider = self.slider_for(next);
        tracing::debug!(active = next, ?direction, "carousel rotated");
    }

    fn set_active(&mut self, index: usize) {
        self.direction = match index.cmp(&self.active) {
            core::cmp::Ordering::Greater => 1,
            core::cmp::Ordering::Less => -1,
            core::cmp::Ordering::Equal => self.direction,
        };
        self.active = index;
    }

    fn touch(&mut self, now: Timestamp) {
        self.last_interaction = Some(now);
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "opacity is within [0, 1] so the result fits in i32"
)]
fn z_index_for(opacity: f64) -> i32 {
    libm::round(opacity * 100.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROJECTS;

    const EPS: f64 = 1e-9;

    fn carousel(n: usize) -> Carousel {
        Carousel::new(n, CarouselConfig::WEB).unwrap()
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            Carousel::new(0, CarouselConfig::WEB).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn next_from_two_of_five() {
        let mut c = carousel(5);
        c.select(2, Timestamp(0));
        c.rotate(Direction::Next, Timestamp(10));
        assert_eq!(c.active_index(), 3);
        assert!((c.slider_value() - 75.0).abs() < EPS);
        assert_eq!(c.direction(), 1);
    }

    #[test]
    fn rotation_wraps_both_ways() {
        let mut c = carousel(4);
        c.rotate(Direction::Previous, Timestamp(0));
        assert_eq!(c.active_index(), 3);
        assert!((c.slider_value() - 100.0).abs() < EPS);
        c.rotate(Direction::Next, Timestamp(1));
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.slider_value(), 0.0);
    }

    #[test]
    fn drag_follows_pointer_and_release_snaps() {
        let mut c = carousel(5);
        c.drag_slider(60.0, Timestamp(0));
        assert!(c.is_dragging());
        assert_eq!(c.slider_value(), 60.0);
        assert_eq!(c.active_index(), 2);
        c.release_slider(Timestamp(5));
        assert!(!c.is_dragging());
        assert!((c.slider_value() - 50.0).abs() < EPS);
    }

    #[test]
    fn click_clamps_out_of_track() {
        let mut c = carousel(3);
        c.click_slider(250.0, Timestamp(0));
        assert_eq!(c.active_index(), 2);
        assert!((c.slider_value() - 100.0).abs() < EPS);
        c.click_slider(f64::NAN, Timestamp(1));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn pointer_percentages() {
        assert_eq!(Carousel::percent_from_pointer(150.0, 100.0, 200.0), 25.0);
        assert_eq!(Carousel::percent_from_pointer(50.0, 100.0, 200.0), 0.0);
        assert_eq!(Carousel::percent_from_pointer(900.0, 100.0, 200.0), 100.0);
        assert_eq!(Carousel::percent_from_pointer(150.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn single_card_is_pinned() {
        let mut c = carousel(1);
        c.rotate(Direction::Next, Timestamp(0));
        c.click_slider(80.0, Timestamp(1));
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.slider_value(), 0.0);
        let p = c.placement(0);
        assert_eq!((p.scale, p.opacity), (1.0, 1.0));
    }

    #[test]
    fn active_card_is_most_prominent() {
        let mut c = carousel(8);
        c.select(5, Timestamp(0));
        let layout = c.layout();
        let active = layout[5];
        assert_eq!((active.scale, active.opacity), (1.0, 1.0));
        assert!(active.visible);
        for p in layout.iter().filter(|p| p.index != 5) {
            assert!(p.scale < active.scale && p.opacity < active.opacity);
            assert!(p.z_index < active.z_index);
        }
    }

    #[test]
    fn far_cards_are_hidden_not_removed() {
        let c = carousel(8);
        let layout = c.layout();
        assert_eq!(layout.len(), 8);
        let opposite = layout[4];
        assert!(!opposite.visible);
        assert_eq!((opposite.scale, opposite.opacity, opposite.z_index), (0.0, 0.0, 0));
    }

    #[test]
    fn neighbours_mirror_each_other() {
        let c = carousel(8);
        let left = c.placement(7);
        let right = c.placement(1);
        assert!((left.offset_x + right.offset_x).abs() < EPS);
        assert!((left.offset_y - right.offset_y).abs() < EPS);
        assert!((left.rotate_z_deg + right.rotate_z_deg).abs() < EPS);
    }

    #[test]
    fn auto_advance_respects_idle_and_hover() {
        let mut c = carousel(4);
        assert!(c.tick(Timestamp(6000)));
        assert_eq!(c.active_index(), 1);

        c.select(3, Timestamp(7000));
        assert!(!c.tick(Timestamp(11_999)));
        assert!(c.tick(Timestamp(12_000)));
        assert_eq!(c.active_index(), 0);

        c.hover(Some(2));
        assert!(!c.tick(Timestamp(60_000)));
        c.hover(None);
        assert!(c.tick(Timestamp(60_000)));
    }

    #[test]
    fn tap_twice_to_open() {
        let mut c = carousel(PROJECTS.len());
        let published = &PROJECTS[1];
        assert_eq!(c.tap(1, Timestamp(0), published), TapOutcome::Selected);
        assert_eq!(c.hovered(), Some(1));
        assert_eq!(
            c.tap(1, Timestamp(100), published),
            TapOutcome::Navigate("/case-studies/creation-by-obsession")
        );

        let upcoming = &PROJECTS[4];
        assert_eq!(c.tap(4, Timestamp(200), upcoming), TapOutcome::Selected);
        assert_eq!(c.tap(4, Timestamp(300), upcoming), TapOutcome::ShowDetails);
        assert_eq!(c.tap(99, Timestamp(400), upcoming), TapOutcome::Ignored);
    }

    #[test]
    fn hover_and_first_tap_reveal_one_card() {
        let mut c = carousel(PROJECTS.len());
        c.hover(Some(2));
        assert!(c.is_revealed(2));
        assert!(!c.is_revealed(1));
        c.hover(None);
        assert!((0..c.len()).all(|i| !c.is_revealed(i)));

        c.tap(3, Timestamp(0), &PROJECTS[3]);
        assert!(c.is_revealed(3));
        c.tap(1, Timestamp(50), &PROJECTS[1]);
        assert!(c.is_revealed(1));
        assert!(!c.is_revealed(3));
    }

    #[test]
    fn tap_hover_lapses_after_idle() {
        let mut c = carousel(PROJECTS.len());
        assert_eq!(c.tap(2, Timestamp(0), &PROJECTS[2]), TapOutcome::Selected);
        assert!(!c.tick(Timestamp(4_999)));
        assert_eq!(c.hovered(), Some(2));

        assert!(c.tick(Timestamp(10_000_000)));
        assert_eq!(c.hovered(), None);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn mouse_hover_does_not_lapse() {
        let mut c = carousel(4);
        c.tap(1, Timestamp(0), &PROJECTS[1]);
        c.hover(Some(1));
        assert!(!c.tick(Timestamp(10_000_000)));
        assert_eq!(c.hovered(), Some(1));
    }

    #[test]
    fn transform_lifts_active_card() {
        let c = carousel(5);
        let t = c.placement(0).transform(1000.0, 400.0);
        let [x, y, z, w] = t.col(3);
        assert!(x.abs() < 1e-6);
        assert!((y + 280.0).abs() < 1e-6);
        assert_eq!((z, w), (0.0, 1.0));
    }
}
