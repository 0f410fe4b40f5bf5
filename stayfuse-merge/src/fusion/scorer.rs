//! Relevance Scoring Engine
//!
//! Computes a deterministic integer score from canonical record content. The
//! higher the score, the better a candidate's chance of being selected as the
//! authoritative record for its identity.
//!
//! # Formula
//! - For each keyword in the fixed marketing/amenity list: +1 if it appears
//!   (case-insensitive substring) in the description, and +1 again if it
//!   appears in the name. Presence in both fields counts twice.
//! - Amenity count (general + room) at or above 5: add the raw count.
//! - Room image count at or above 2: add the raw count.
//! - Amenity image count at or above 2: add a flat +1 bonus.
//! - No images at all in any category: subtract 1.
//!
//! Scores may be negative; there is no upper bound.

use stayfuse_common::Hotel;
use tracing::debug;

/// Marketing and amenity keywords counted against name and description
pub const KEYWORDS: &[&str] = &[
    "hotels near me",
    "motel",
    "cheap hotels",
    "cheap hotels near me",
    "hotel booking",
    "hotel deals",
    "luxury",
    "spa",
    "deals",
    "best",
    "scenic",
    "beauty",
    "beach",
    "butler service",
    "water front",
    "waterfront",
    "garden",
    "resort",
];

/// Relevance Scorer
///
/// Pure function of record content; thresholds are fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer {
    /// Minimum combined amenity count before the count itself is awarded
    amenity_count_threshold: usize,
    /// Minimum room image count before the count itself is awarded
    room_image_threshold: usize,
    /// Minimum amenity image count before the flat bonus is awarded
    amenity_image_threshold: usize,
}

impl RelevanceScorer {
    pub fn new() -> Self {
        Self {
            amenity_count_threshold: 5,
            room_image_threshold: 2,
            amenity_image_threshold: 2,
        }
    }

    /// Score one canonical record
    pub fn score(&self, hotel: &Hotel) -> i64 {
        let mut score = 0i64;

        let description = hotel.description.to_lowercase();
        let name = hotel.name.to_lowercase();
        for keyword in KEYWORDS {
            if description.contains(keyword) {
                score += 1;
            }
            if name.contains(keyword) {
                score += 1;
            }
        }

        let amenity_count = hotel.amenities.total();
        if amenity_count >= self.amenity_count_threshold {
            score += amenity_count as i64;
        }

        if hotel.images.is_empty() {
            // No visual content at all
            score -= 1;
        } else {
            let room_images = hotel.images.rooms.len();
            if room_images >= self.room_image_threshold {
                score += room_images as i64;
            }
            if hotel.images.amenities.len() >= self.amenity_image_threshold {
                score += 1;
            }
        }

        debug!(id = %hotel.id, score, "Candidate scored");
        score
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}
