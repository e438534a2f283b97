// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-clock timestamps and durations.
//!
//! [`Timestamp`] is a point on the page's monotonic clock in whole
//! milliseconds (in the browser, `performance.now()` truncated). [`Duration`]
//! is a span in the same unit.
//!
//! Core state machines never read a clock themselves; callers pass `now` in,
//! which keeps every timer-driven behavior deterministic under test.

use core::fmt;
use core::ops::{Add, Sub};

/// A point in time on the page clock, in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The page clock origin.
    pub const ZERO: Self = Self(0);

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Creates a timestamp from a fractional millisecond reading such as a
    /// `DOMHighResTimeStamp`. Negative and non-finite inputs map to zero.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "page clock readings are small positive f64 values"
    )]
    pub fn from_millis_f64(ms: f64) -> Self {
        if ms.is_finite() && ms > 0.0 {
            Self(ms as u64)
        } else {
            Self(0)
        }
    }

    /// Returns the time elapsed since `earlier`, or zero if `earlier` is
    /// after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Checked addition of a duration.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, duration: Duration) -> Option<Self> {
        match self.0.checked_add(duration.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}ms)", self.0)
    }
}

/// A span of page-clock time, in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as fractional seconds.
    #[inline]
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Narrows to the `u32` millisecond count used by browser timer APIs,
    /// saturating at `u32::MAX`.
    #[inline]
    #[must_use]
    pub fn as_timer_millis(self) -> u32 {
        u32::try_from(self.0).unwrap_or(u32::MAX)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}ms)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_saturates() {
        let early = Timestamp(100);
        let late = Timestamp(350);
        assert_eq!(late - early, Duration(250));
        assert_eq!(early - late, Duration::ZERO);
    }

    #[test]
    fn from_millis_f64_clamps_bad_readings() {
        assert_eq!(Timestamp::from_millis_f64(16.9), Timestamp(16));
        assert_eq!(Timestamp::from_millis_f64(-3.0), Timestamp::ZERO);
        assert_eq!(Timestamp::from_millis_f64(f64::NAN), Timestamp::ZERO);
    }

    #[test]
    fn timer_millis_saturate() {
        assert_eq!(Duration::from_millis(6000).as_timer_millis(), 6000);
        assert_eq!(Duration(u64::MAX).as_timer_millis(), u32::MAX);
    }
}
