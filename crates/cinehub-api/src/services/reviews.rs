//! Review endpoints.
#![allow(clippy::future_not_send)]

use serde::Serialize;
use serde::de::IgnoredAny;
use tracing::instrument;

use super::query::push_opt;
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Paginated, Review};

/// Filters for `GET reviews`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    /// Reviews of one movie.
    pub movie_id: Option<Id>,
    /// Reviews of one series.
    pub serie_id: Option<Id>,
    /// Reviews written by one user.
    pub user_id: Option<Id>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl ReviewFilter {
    pub(crate) fn to_pairs(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "movieId", self.movie_id);
        push_opt(&mut pairs, "serieId", self.serie_id);
        push_opt(&mut pairs, "userId", self.user_id);
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Body of `POST reviews`. Exactly one target id is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    /// Reviewed movie.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<Id>,
    /// Reviewed series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serie_id: Option<Id>,
    /// Reviewed actor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<Id>,
    /// Reviewed crew member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_id: Option<Id>,
    /// Rating.
    pub rating: u8,
    /// Headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body.
    pub content: String,
}

/// Body of `PUT reviews/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewUpdate {
    /// New rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// New headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Review API trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ReviewApi: Send)]
pub trait LocalReviewApi {
    /// Lists reviews matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn reviews(&self, filter: ReviewFilter) -> Result<Paginated<Review>, ApiError>;

    /// Fetches one review.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn review(&self, id: Id) -> Result<Review, ApiError>;

    /// Publishes a review. Requires a signed-in session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError>;

    /// Edits an own review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn update_review(&self, id: Id, update: &ReviewUpdate) -> Result<Review, ApiError>;

    /// Deletes an own review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn delete_review(&self, id: Id) -> Result<(), ApiError>;
}

impl LocalReviewApi for ApiClient {
    #[instrument(skip_all)]
    async fn reviews(&self, filter: ReviewFilter) -> Result<Paginated<Review>, ApiError> {
        let options = RequestOptions::with_query(filter.to_pairs());
        self.call(&Route::Reviews, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn review(&self, id: Id) -> Result<Review, ApiError> {
        self.call(&Route::Review { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.call(&Route::CreateReview, Some(review), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn update_review(&self, id: Id, update: &ReviewUpdate) -> Result<Review, ApiError> {
        self.call(
            &Route::UpdateReview { id },
            Some(update),
            &RequestOptions::new(),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn delete_review(&self, id: Id) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .call(&Route::DeleteReview { id }, NO_BODY, &RequestOptions::new())
            .await?;
        Ok(())
    }
}
