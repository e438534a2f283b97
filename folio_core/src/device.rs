// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device capability profile.
//!
//! A [`DeviceProfile`] is computed once from a [`DeviceSignals`] snapshot (the
//! web backend probes the browser; tests build one by hand) and then passed
//! to the views that branch on it. Every signal is optional: an API the
//! browser does not expose reads as "unsupported" and never trips a flag on
//! its own.
//!
//! Frame pacing is sampled separately by [`FrameSampler`], which can demote a
//! profile to low-performance after startup.

use alloc::string::String;

use crate::time::Timestamp;

/// Breakpoints and floors used to derive a [`DeviceProfile`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceThresholds {
    /// Viewports narrower than this (CSS px) are treated as mobile.
    pub mobile_max_width: f64,
    /// Devices reporting less memory than this (GiB) are low-performance.
    pub min_memory_gb: f64,
    /// Devices reporting fewer logical cores than this are low-performance.
    pub min_cores: u32,
    /// Mean frame time (ms) above which a device is demoted.
    pub max_mean_frame_ms: f64,
}

impl DeviceThresholds {
    /// Defaults for the public site.
    pub const WEB: Self = Self {
        mobile_max_width: 768.0,
        min_memory_gb: 4.0,
        min_cores: 4,
        max_mean_frame_ms: 30.0,
    };
}

impl Default for DeviceThresholds {
    fn default() -> Self {
        Self::WEB
    }
}

/// Raw capability readings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    /// `window.innerWidth`.
    pub viewport_width: Option<f64>,
    /// Whether `ontouchstart` exists on the window.
    pub has_touch_events: bool,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: Option<u32>,
    /// `navigator.userAgent`.
    pub user_agent: Option<String>,
    /// `navigator.deviceMemory` (Chromium only).
    pub device_memory_gb: Option<f64>,
    /// `navigator.hardwareConcurrency`.
    pub hardware_concurrency: Option<u32>,
}

const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

const HANDHELD_AGENTS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

impl DeviceSignals {
    /// Touch input is available by either detection route.
    #[must_use]
    pub fn has_touch(&self) -> bool {
        self.has_touch_events || self.max_touch_points.is_some_and(|n| n > 0)
    }

    fn agent_matches(&self, needles: &[&str]) -> bool {
        let Some(agent) = self.user_agent.as_deref() else {
            return false;
        };
        let agent = agent.to_ascii_lowercase();
        needles.iter().any(|needle| agent.contains(needle))
    }
}

/// Derived capability flags consumed by views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Narrow viewport, or a touch device with a mobile user agent.
    pub is_mobile: bool,
    /// Animations should be simplified or disabled.
    pub is_low_performance: bool,
}

impl DeviceProfile {
    /// A desktop-class profile with every effect enabled.
    pub const DESKTOP: Self = Self {
        is_mobile: false,
        is_low_performance: false,
    };

    /// Derives the profile from a signal snapshot.
    #[must_use]
    pub fn detect(signals: &DeviceSignals, thresholds: &DeviceThresholds) -> Self {
        let narrow = signals
            .viewport_width
            .is_some_and(|w| w < thresholds.mobile_max_width);
        let is_mobile = narrow || (signals.has_touch() && signals.agent_matches(&MOBILE_AGENTS));

        let low_memory = signals
            .device_memory_gb
            .is_some_and(|gb| gb < thresholds.min_memory_gb);
        let low_cpu = signals
            .hardware_concurrency
            .is_some_and(|n| n < thresholds.min_cores);
        let is_low_performance = signals.agent_matches(&HANDHELD_AGENTS) || low_memory || low_cpu;

        let profile = Self {
            is_mobile,
            is_low_performance,
        };
        tracing::debug!(?profile, "device profile detected");
        profile
    }

    /// Re-evaluates only the viewport-dependent mobile flag, e.g. after a
    /// resize. The low-performance flag never flips back once set.
    #[must_use]
    pub fn with_viewport(self, signals: &DeviceSignals, thresholds: &DeviceThresholds) -> Self {
        let detected = Self::detect(signals, thresholds);
        Self {
            is_mobile: detected.is_mobile,
            is_low_performance: self.is_low_performance || detected.is_low_performance,
        }
    }

    /// Returns the profile with the low-performance flag set.
    #[must_use]
    pub const fn degrade_low_performance(self) -> Self {
        Self {
            is_mobile: self.is_mobile,
            is_low_performance: true,
        }
    }

    /// Whether pointer-driven decorations (cursor trail, card tilt) run.
    #[must_use]
    pub const fn pointer_effects(self) -> bool {
        !self.is_mobile
    }
}

/// Number of frame deltas averaged by [`FrameSampler`].
pub const FRAME_WINDOW: usize = 10;

/// Result of feeding one frame to a [`FrameSampler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameVerdict {
    /// Not enough samples yet, keep sampling.
    Warming,
    /// The window is full and pacing is fine, keep sampling.
    Healthy,
    /// Mean frame time exceeded the ceiling; sampling can stop.
    Degraded,
}

/// Rolling frame-time monitor with a fixed window.
#[derive(Debug)]
pub struct FrameSampler {
    deltas_ms: [f64; FRAME_WINDOW],
    cursor: usize,
    filled: usize,
    last: Option<Timestamp>,
    ceiling_ms: f64,
    degraded: bool,
}

impl FrameSampler {
    /// Creates a sampler that trips when the mean exceeds `ceiling_ms`.
    #[must_use]
    pub const fn new(ceiling_ms: f64) -> Self {
        Self {
            deltas_ms: [0.0; FRAME_WINDOW],
            cursor: 0,
            filled: 0,
            last: None,
            ceiling_ms,
            degraded: false,
        }
    }

    /// Feeds the timestamp of an animation frame.
    ///
    /// The first frame only establishes a baseline. Once degraded, the
    /// verdict is sticky.
    pub fn observe(&mut self, now: Timestamp) -> FrameVerdict {
        if self.degraded {
            return FrameVerdict::Degraded;
        }
        let Some(last) = self.last.replace(now) else {
            return FrameVerdict::Warming;
        };
        let delta = (now - last).millis() as f64;
        self.deltas_ms[self.cursor] = delta;
        self.cursor = (self.cursor + 1) % FRAME_WINDOW;
        self.filled = (self.filled + 1).min(FRAME_WINDOW);

        if self.filled < FRAME_WINDOW {
            return FrameVerdict::Warming;
        }
        if self.mean_ms() > self.ceiling_ms {
            tracing::debug!(mean_ms = self.mean_ms(), "frame pacing degraded");
            self.degraded = true;
            FrameVerdict::Degraded
        } else {
            FrameVerdict::Healthy
        }
    }

    /// Mean of the recorded deltas (zero before any delta).
    #[must_use]
    pub fn mean_ms(&self) -> f64 {
        if self.filled == 0 {
            return 0.0;
        }
        let sum: f64 = self.deltas_ms[..self.filled].iter().sum();
        let n = self.filled as f64;
        sum / n
    }
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new(DeviceThresholds::WEB.max_mean_frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> DeviceSignals {
        DeviceSignals {
            viewport_width: Some(1440.0),
            has_touch_events: false,
            max_touch_points: Some(0),
            user_agent: Some(String::from(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0",
            )),
            device_memory_gb: Some(8.0),
            hardware_concurrency: Some(8),
        }
    }

    #[test]
    fn desktop_gets_full_effects() {
        let profile = DeviceProfile::detect(&desktop(), &DeviceThresholds::WEB);
        assert_eq!(profile, DeviceProfile::DESKTOP);
        assert!(profile.pointer_effects());
    }

    #[test]
    fn narrow_viewport_is_mobile() {
        let signals = DeviceSignals {
            viewport_width: Some(600.0),
            ..desktop()
        };
        assert!(DeviceProfile::detect(&signals, &DeviceThresholds::WEB).is_mobile);
    }

    #[test]
    fn touch_alone_is_not_mobile() {
        let signals = DeviceSignals {
            has_touch_events: true,
            ..desktop()
        };
        assert!(!DeviceProfile::detect(&signals, &DeviceThresholds::WEB).is_mobile);
    }

    #[test]
    fn wide_tablet_with_touch_is_mobile_and_low_performance() {
        let signals = DeviceSignals {
            viewport_width: Some(1024.0),
            max_touch_points: Some(5),
            user_agent: Some(String::from("Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)")),
            ..desktop()
        };
        let profile = DeviceProfile::detect(&signals, &DeviceThresholds::WEB);
        assert!(profile.is_mobile);
        assert!(profile.is_low_performance);
    }

    #[test]
    fn missing_apis_never_trip_flags() {
        let profile = DeviceProfile::detect(&DeviceSignals::default(), &DeviceThresholds::WEB);
        assert_eq!(profile, DeviceProfile::DESKTOP);
    }

    #[test]
    fn low_memory_or_cores_is_low_performance() {
        let memory = DeviceSignals {
            device_memory_gb: Some(2.0),
            ..desktop()
        };
        let cores = DeviceSignals {
            hardware_concurrency: Some(2),
            ..desktop()
        };
        assert!(DeviceProfile::detect(&memory, &DeviceThresholds::WEB).is_low_performance);
        assert!(DeviceProfile::detect(&cores, &DeviceThresholds::WEB).is_low_performance);
    }

    #[test]
    fn resize_keeps_degradation() {
        let profile = DeviceProfile::DESKTOP.degrade_low_performance();
        let wide = profile.with_viewport(&desktop(), &DeviceThresholds::WEB);
        assert!(wide.is_low_performance);
        assert!(!wide.is_mobile);
    }

    #[test]
    fn sampler_warms_then_judges() {
        let mut sampler = FrameSampler::default();
        assert_eq!(sampler.observe(Timestamp(0)), FrameVerdict::Warming);
        for i in 1..FRAME_WINDOW as u64 {
            assert_eq!(sampler.observe(Timestamp(i * 16)), FrameVerdict::Warming);
        }
        assert_eq!(
            sampler.observe(Timestamp(FRAME_WINDOW as u64 * 16)),
            FrameVerdict::Healthy
        );
        assert!((sampler.mean_ms() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn slow_frames_degrade_stickily() {
        let mut sampler = FrameSampler::default();
        let mut t = 0;
        let mut verdict = sampler.observe(Timestamp(t));
        for _ in 0..FRAME_WINDOW {
            t += 45;
            verdict = sampler.observe(Timestamp(t));
        }
        assert_eq!(verdict, FrameVerdict::Degraded);
        // Fast frames afterwards do not recover.
        assert_eq!(sampler.observe(Timestamp(t + 1)), FrameVerdict::Degraded);
    }
}
