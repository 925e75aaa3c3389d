//! Per-session user ratings, keyed by movie id. Never fetched or persisted.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::{CatalogError, Result};
use super::types::MovieId;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

const LABELS: [&str; MAX_RATING as usize] = ["Terrible", "Bad", "Ok", "Good", "Excellent"];

/// Caption shown next to a star count
pub fn rating_label(value: u8) -> Option<&'static str> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Some(LABELS[(value - MIN_RATING) as usize])
    } else {
        None
    }
}

#[derive(Clone, Default)]
pub struct RatingTracker {
    ratings: Arc<RwLock<HashMap<MovieId, u8>>>,
}

impl RatingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the rating for `id`. Values outside 1..=5 leave
    /// the map untouched.
    pub async fn rate(&self, id: MovieId, value: i64) -> Result<()> {
        let rating = u8::try_from(value)
            .ok()
            .filter(|v| (MIN_RATING..=MAX_RATING).contains(v))
            .ok_or(CatalogError::InvalidRating { value })?;

        self.ratings.write().await.insert(id, rating);
        tracing::info!(id, rating, "Movie rated");
        Ok(())
    }

    pub async fn get_rating(&self, id: MovieId) -> Option<u8> {
        self.ratings.read().await.get(&id).copied()
    }

    pub async fn len(&self) -> usize {
        self.ratings.read().await.len()
    }
}
