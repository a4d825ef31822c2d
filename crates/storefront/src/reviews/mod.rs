//! Reviews API client.
//!
//! Simple request/response over `reqwest`: one `GET` to list a product's
//! reviews and one `POST` to submit a new one. Deliberately fire-and-forget
//! - no retry, no backoff, no cancellation. A failed call surfaces as a
//! [`ReviewError`] for the view layer to toast; prior state is never
//! touched. Fetches are cached with `moka` so re-opening the same product
//! page hits memory.

pub mod types;

pub use types::{NewReview, Review};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;

use harlow_core::ProductId;

use crate::config::ReviewsConfig;

/// Errors from the reviews API.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The submission failed local validation and never went on the wire.
    #[error("invalid review: {0}")]
    InvalidReview(String),

    /// HTTP request failed (connect error, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("reviews API returned HTTP {0}")]
    Status(u16),

    /// The response body did not parse.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the reviews API.
///
/// Cheaply cloneable; fetches for a product are cached until the TTL
/// expires or a submission for that product invalidates them.
#[derive(Clone)]
pub struct ReviewClient {
    inner: Arc<ReviewClientInner>,
}

struct ReviewClientInner {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    cache: Cache<ProductId, Arc<Vec<Review>>>,
}

impl std::fmt::Debug for ReviewClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl ReviewClient {
    /// Create a new reviews client.
    #[must_use]
    pub fn new(config: &ReviewsConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(500)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(ReviewClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                timeout: config.timeout,
                cache,
            }),
        }
    }

    /// The endpoint for a product's reviews.
    fn reviews_url(&self, product_id: &ProductId) -> String {
        format!("{}/products/{}/reviews", self.inner.base_url, product_id)
    }

    /// Fetch the reviews for a product.
    ///
    /// Served from cache when a fresh fetch for the same product exists.
    ///
    /// # Errors
    ///
    /// [`ReviewError::Http`] / [`ReviewError::Status`] /
    /// [`ReviewError::Parse`] on request failure. Errors are not cached;
    /// the next call retries the network.
    pub async fn fetch_reviews(
        &self,
        product_id: &ProductId,
    ) -> Result<Arc<Vec<Review>>, ReviewError> {
        if let Some(hit) = self.inner.cache.get(product_id).await {
            return Ok(hit);
        }

        let response = self
            .inner
            .client
            .get(self.reviews_url(product_id))
            .timeout(self.inner.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(product_id = %product_id, status = %status, "Review fetch failed");
            return Err(ReviewError::Status(status.as_u16()));
        }

        let reviews: Vec<Review> = serde_json::from_str(&response.text().await?)?;
        let reviews = Arc::new(reviews);
        self.inner
            .cache
            .insert(product_id.clone(), Arc::clone(&reviews))
            .await;
        Ok(reviews)
    }

    /// Submit a review for a product.
    ///
    /// Validates locally first, then posts once - no retry. On success the
    /// cached fetch for that product is invalidated so the new review shows
    /// up on the next read.
    ///
    /// # Errors
    ///
    /// [`ReviewError::InvalidReview`] when local validation fails (nothing
    /// is sent), or the same wire errors as
    /// [`fetch_reviews`](Self::fetch_reviews).
    pub async fn submit_review(
        &self,
        product_id: &ProductId,
        review: &NewReview,
    ) -> Result<Review, ReviewError> {
        review.validate()?;

        let response = self
            .inner
            .client
            .post(self.reviews_url(product_id))
            .timeout(self.inner.timeout)
            .json(review)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(product_id = %product_id, status = %status, "Review submission failed");
            return Err(ReviewError::Status(status.as_u16()));
        }

        let created: Review = serde_json::from_str(&response.text().await?)?;
        self.inner.cache.invalidate(product_id).await;
        Ok(created)
    }
}
