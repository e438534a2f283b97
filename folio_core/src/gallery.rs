// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disjoint image allocation across page sections.
//!
//! An [`ImagePool`] is an ordered list of unique URLs, split into contiguous
//! groups of `group_size` entries. Each render opens one
//! [`AllocationSession`] and hands out images from it; a URL is returned at
//! most once per session, so no two sections of a page ever show the same
//! picture.
//!
//! ```
//! use folio_core::gallery::ImagePool;
//!
//! let pool = ImagePool::new(["a", "b", "c", "d"], 2).unwrap();
//! let mut session = pool.session();
//! assert_eq!(session.allocate(1, Some(1)), ["c"]);
//! assert_eq!(session.allocate(9, None), ["a", "b", "d"]);
//! assert!(session.allocate(1, None).is_empty());
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use hashbrown::HashSet;

/// Errors from [`ImagePool::new`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// The same URL appears twice in the manifest.
    #[error("duplicate image url {0:?}")]
    DuplicateUrl(String),
    /// Groups must hold at least one entry.
    #[error("group size must be non-zero")]
    ZeroGroupSize,
}

/// An ordered, duplicate-free list of image URLs partitioned into groups.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePool {
    urls: Vec<String>,
    group_size: usize,
}

impl ImagePool {
    /// Builds a pool, rejecting duplicate URLs.
    pub fn new<I>(urls: I, group_size: usize) -> Result<Self, PoolError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if group_size == 0 {
            return Err(PoolError::ZeroGroupSize);
        }
        let urls: Vec<String> = urls.into_iter().map(Into::into).collect();
        {
            let mut seen = HashSet::with_capacity(urls.len());
            for url in &urls {
                if !seen.insert(url.as_str()) {
                    return Err(PoolError::DuplicateUrl(url.clone()));
                }
            }
        }
        Ok(Self { urls, group_size })
    }

    /// Number of URLs in the pool.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the pool holds no URLs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Entries per group.
    #[inline]
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Number of groups, counting a trailing partial group.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.urls.len().div_ceil(self.group_size)
    }

    /// Pool index range covered by group `g`, or `None` past the last group.
    #[must_use]
    pub fn group(&self, g: usize) -> Option<Range<usize>> {
        let start = g.checked_mul(self.group_size)?;
        if start >= self.urls.len() {
            return None;
        }
        let end = start.saturating_add(self.group_size).min(self.urls.len());
        Some(start..end)
    }

    /// URL at pool index `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&str> {
        self.urls.get(i).map(String::as_str)
    }

    /// Opens a fresh allocation session.
    #[must_use]
    pub fn session(&self) -> AllocationSession<'_> {
        AllocationSession {
            pool: self,
            used: HashSet::with_capacity(self.urls.len()),
        }
    }
}

impl fmt::Debug for ImagePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePool")
            .field("len", &self.urls.len())
            .field("group_size", &self.group_size)
            .finish()
    }
}

/// Render-scoped allocation state over an [`ImagePool`].
///
/// Dropping the session forgets every allocation.
pub struct AllocationSession<'a> {
    pool: &'a ImagePool,
    used: HashSet<&'a str>,
}

impl<'a> AllocationSession<'a> {
    /// Hands out up to `count` unused URLs.
    ///
    /// With a `preferred_group`, that group's unused entries are taken first
    /// in pool order, then the rest of the pool in order. A group index past
    /// the end is treated as no preference. Returns fewer than `count` URLs
    /// when the pool runs dry.
    pub fn allocate(&mut self, count: usize, preferred_group: Option<usize>) -> Vec<&'a str> {
        let pool = self.pool;
        let preferred = preferred_group.and_then(|g| pool.group(g)).unwrap_or(0..0);

        let head = preferred.clone();
        let tail = (0..pool.len()).filter(|i| !preferred.contains(i));

        let mut out = Vec::with_capacity(count.min(self.remaining()));
        for i in head.chain(tail) {
            if out.len() == count {
                break;
            }
            let url = pool.urls[i].as_str();
            if self.used.insert(url) {
                out.push(url);
            }
        }
        tracing::debug!(
            requested = count,
            granted = out.len(),
            ?preferred_group,
            "images allocated"
        );
        out
    }

    /// URLs not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len() - self.used.len()
    }

    /// Whether `url` has been handed out in this session.
    #[must_use]
    pub fn is_used(&self, url: &str) -> bool {
        self.used.contains(url)
    }
}

impl fmt::Debug for AllocationSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocationSession")
            .field("pool", &self.pool)
            .field("used", &self.used.len())
            .finish()
    }
}

/// Entries per thematic group in [`CASE_STUDY_IMAGES`].
pub const CASE_STUDY_GROUP_SIZE: usize = 6;

/// Images shown beside each narrative phase.
pub const PHASE_IMAGES: usize = 3;

/// Images in the "additional explorations" strip.
pub const EXPLORATION_IMAGES: usize = 6;

/// Group holding the exploration images.
pub const EXPLORATION_GROUP: usize = 4;

/// Number of narrative phases on the case-study page.
pub const PHASES: usize = 4;

/// Asset manifest for the visual-narrative case study.
///
/// Groups 0 to 3 follow the four narrative phases, group 4 holds the
/// exploration strip, and everything after is gallery material.
pub const CASE_STUDY_IMAGES: [&str; 51] = [
    // Doubt
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.35_97e7f62a.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.35_b3a33378.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.36_3dd48d70.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.34_6316bf0a.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.34_63365279.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.33_55ddf517.jpg",
    // Search
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.37_a3af147d.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.38_59dfcee4.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.39_84ca4c4a.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.38_29aa0415.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.37_88f1b050.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.36_99825900.jpg",
    // Obsession
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.01_dc9d4940.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.00_d1143bbf.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.16_df403158.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.09_92735b77.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.11_57aa64b2.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.04_403eee64.jpg",
    // Becoming
    "/Space Monk/WhatsApp Image 2025-04-05 at 18.17.16_b4f61367.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.18_62986eb5.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 18.17.16_f8444486.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 18.17.16_72f8a44e.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.18_8030be67.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.18_9656b75a.jpg",
    // Explorations
    "/Space Monk/WhatsApp Image 2025-04-05 at 18.17.16_96c3256b.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.15_b831e11e.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.13_79b5543f.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.14_754937fe.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.30_f6207d3b.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.31_054043f8.jpg",
    // Gallery
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.32_40b8d9e0.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.31_d00959f1.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.39_616065db.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.39_c74d7958.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.05_d75e568f.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.07_4a5fb9dd.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.01.57_5b089301.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.02.15_873bcc98.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.01.56_9049c102.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.01.52_d52026d9.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.01.52_dfa33126.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.01.53_2b568cf0.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.01.53_68d6caa8.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 15.01.55_ff5b5e22.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.38_c22598a9.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.37_2785ed96.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.36_fc231867.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.36_d14521c4.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.37_9928e667.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.35_17de8739.jpg",
    "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.35_25b9a180.jpg",
];

/// Per-section image lists for the case-study page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseStudyPlan<'a> {
    /// Images beside each phase, indexed by phase.
    pub phases: [Vec<&'a str>; PHASES],
    /// The exploration strip.
    pub explorations: Vec<&'a str>,
    /// Everything left over.
    pub gallery: Vec<&'a str>,
}

impl<'a> CaseStudyPlan<'a> {
    /// Fills every section from one session, phases first.
    #[must_use]
    pub fn build(pool: &'a ImagePool) -> Self {
        let mut session = pool.session();
        let phases = core::array::from_fn(|phase| session.allocate(PHASE_IMAGES, Some(phase)));
        let explorations = session.allocate(EXPLORATION_IMAGES, Some(EXPLORATION_GROUP));
        let gallery = session.allocate(session.remaining(), None);
        Self {
            phases,
            explorations,
            gallery,
        }
    }
}

/// The case-study pool built from [`CASE_STUDY_IMAGES`].
pub fn case_study_pool() -> Result<ImagePool, PoolError> {
    ImagePool::new(CASE_STUDY_IMAGES, CASE_STUDY_GROUP_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    fn twelve() -> ImagePool {
        ImagePool::new((0..12).map(|i| format!("img{i}")), 3).unwrap()
    }

    #[test]
    fn rejects_duplicates_and_zero_groups() {
        assert_eq!(
            ImagePool::new(["a", "b", "a"], 2),
            Err(PoolError::DuplicateUrl(String::from("a")))
        );
        assert_eq!(ImagePool::new(["a"], 0), Err(PoolError::ZeroGroupSize));
    }

    #[test]
    fn owned_urls_keep_manifest_order() {
        let urls = vec![String::from("x.jpg"), String::from("y.jpg")];
        let pool = ImagePool::new(urls, 1).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0), Some("x.jpg"));
        assert_eq!(pool.get(1), Some("y.jpg"));
        assert_eq!(pool.get(2), None);
    }

    #[test]
    fn groups_cover_the_pool() {
        let pool = ImagePool::new(["a", "b", "c", "d", "e"], 2).unwrap();
        assert_eq!(pool.group_count(), 3);
        assert_eq!(pool.group(0), Some(0..2));
        assert_eq!(pool.group(2), Some(4..5));
        assert_eq!(pool.group(3), None);
    }

    #[test]
    fn grouped_requests_then_remainder() {
        let pool = twelve();
        let mut session = pool.session();
        assert_eq!(session.allocate(3, Some(0)), ["img0", "img1", "img2"]);
        assert_eq!(session.allocate(3, Some(1)), ["img3", "img4", "img5"]);
        assert_eq!(
            session.allocate(6, None),
            ["img6", "img7", "img8", "img9", "img10", "img11"]
        );
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn preferred_group_spills_into_pool_order() {
        let pool = twelve();
        let mut session = pool.session();
        assert_eq!(
            session.allocate(5, Some(2)),
            ["img6", "img7", "img8", "img0", "img1"]
        );
        assert!(session.is_used("img7"));
        assert!(!session.is_used("img2"));
    }

    #[test]
    fn out_of_range_group_means_no_preference() {
        let pool = twelve();
        let mut session = pool.session();
        assert_eq!(session.allocate(2, Some(99)), ["img0", "img1"]);
    }

    #[test]
    fn exhausted_pool_returns_partial_results() {
        let pool = twelve();
        let mut session = pool.session();
        assert_eq!(session.allocate(10, None).len(), 10);
        assert_eq!(session.allocate(10, Some(0)), ["img10", "img11"]);
        assert!(session.allocate(1, None).is_empty());
    }

    #[test]
    fn fresh_session_starts_clean() {
        let pool = twelve();
        let first = pool.session().allocate(4, Some(1));
        let second = pool.session().allocate(4, Some(1));
        assert_eq!(first, second);
    }

    #[test]
    fn case_study_plan_is_disjoint_and_complete() {
        let pool = case_study_pool().unwrap();
        let plan = CaseStudyPlan::build(&pool);
        for (phase, images) in plan.phases.iter().enumerate() {
            assert_eq!(images.len(), PHASE_IMAGES);
            let group = pool.group(phase).unwrap();
            assert!(
                images.iter().all(|url| pool.urls[group.clone()].iter().any(|u| u.as_str() == *url)),
                "phase {phase} drew outside its group"
            );
        }
        assert_eq!(plan.explorations.len(), EXPLORATION_IMAGES);

        let mut all: Vec<&str> = plan.phases.iter().flatten().copied().collect();
        all.extend(&plan.explorations);
        all.extend(&plan.gallery);
        assert_eq!(all.len(), CASE_STUDY_IMAGES.len());
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }
}
