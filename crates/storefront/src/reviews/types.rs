//! Wire types for the reviews API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use harlow_core::{ProductId, ReviewId};

use super::ReviewError;

/// A published review, as returned by the reviews API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review ID.
    pub id: ReviewId,
    /// Product the review belongs to.
    pub product_id: ProductId,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review headline.
    pub title: String,
    /// Review body text.
    pub body: String,
    /// Display name of the reviewer.
    pub author: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
}

/// A review submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review headline.
    pub title: String,
    /// Review body text.
    pub body: String,
    /// Display name of the reviewer.
    pub author: String,
}

impl NewReview {
    /// Validate the submission before it goes on the wire.
    ///
    /// # Errors
    ///
    /// [`ReviewError::InvalidReview`] when the rating is outside 1-5 or the
    /// body/author are blank.
    pub fn validate(&self) -> Result<(), ReviewError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ReviewError::InvalidReview(format!(
                "rating must be 1-5, got {}",
                self.rating
            )));
        }
        if self.body.trim().is_empty() {
            return Err(ReviewError::InvalidReview("body is empty".to_owned()));
        }
        if self.author.trim().is_empty() {
            return Err(ReviewError::InvalidReview("author is empty".to_owned()));
        }
        Ok(())
    }
}
