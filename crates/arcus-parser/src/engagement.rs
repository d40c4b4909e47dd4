//! Illustrative engagement numbers for social post cards.
//!
//! Real metrics come from `Likes:`/`Comments:`/`Shares:` fields. When a post
//! has none, an [`EngagementEstimator`] may synthesize numbers in a
//! platform-typical range. Synthesized values are always flagged with
//! `estimated = true`.

use std::ops::Range;

use arcus_core::{AppConfig, Engagement, EngagementMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::normalize::Platform;

pub trait EngagementEstimator: Send + Sync {
    /// `position` is the zero-based index of the post within its document.
    fn estimate(&self, platform: &str, position: usize) -> Option<Engagement>;
}

/// Never produces numbers. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEngagement;

impl EngagementEstimator for NoEngagement {
    fn estimate(&self, _platform: &str, _position: usize) -> Option<Engagement> {
        None
    }
}

/// Deterministic per `(seed, position, platform)`.
#[derive(Debug, Clone, Copy)]
pub struct SeededEngagement {
    seed: u64,
}

impl SeededEngagement {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl EngagementEstimator for SeededEngagement {
    fn estimate(&self, platform: &str, position: usize) -> Option<Engagement> {
        let position = u64::try_from(position).unwrap_or(u64::MAX);
        let mut rng = StdRng::seed_from_u64(self.seed ^ position.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Some(EngagementRanges::for_platform(platform).sample(&mut rng))
    }
}

/// Fresh numbers from the thread RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngagement;

impl EngagementEstimator for RandomEngagement {
    fn estimate(&self, platform: &str, _position: usize) -> Option<Engagement> {
        Some(EngagementRanges::for_platform(platform).sample(&mut rand::rng()))
    }
}

/// Builds the estimator selected by `ARCUS_ENGAGEMENT`.
#[must_use]
pub fn estimator_from_config(config: &AppConfig) -> Box<dyn EngagementEstimator> {
    match config.engagement {
        EngagementMode::Off => Box::new(NoEngagement),
        EngagementMode::Seeded => Box::new(SeededEngagement::new(config.engagement_seed)),
        EngagementMode::Random => Box::new(RandomEngagement),
    }
}

/// Half-open sampling ranges for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementRanges {
    pub likes: Range<u32>,
    pub comments: Range<u32>,
    pub shares: Range<u32>,
}

impl EngagementRanges {
    #[must_use]
    pub fn for_platform(platform: &str) -> Self {
        let (likes, comments, shares) = match Platform::from_name(platform) {
            Some(Platform::Instagram) => (2000..5000, 100..500, 50..200),
            Some(Platform::Facebook) => (1000..3000, 50..300, 100..400),
            Some(Platform::Twitter) => (500..2000, 20..150, 100..600),
            Some(Platform::LinkedIn) => (300..1200, 20..120, 10..80),
            Some(Platform::TikTok) => (5000..20_000, 200..1000, 300..1500),
            _ => (200..1000, 10..100, 5..50),
        };
        Self {
            likes,
            comments,
            shares,
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Engagement {
        Engagement {
            likes: rng.random_range(self.likes.clone()),
            comments: rng.random_range(self.comments.clone()),
            shares: rng.random_range(self.shares.clone()),
            estimated: true,
        }
    }
}
