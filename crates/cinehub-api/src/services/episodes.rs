//! Episode endpoints.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use super::query::{BrowseQuery, SearchQuery};
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Episode, Paginated};

/// Episode API trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(EpisodeApi: Send)]
pub trait LocalEpisodeApi {
    /// Lists episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn episodes(&self, query: &BrowseQuery) -> Result<Paginated<Episode>, ApiError>;

    /// Fetches one episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn episode(&self, id: Id) -> Result<Episode, ApiError>;

    /// Searches episodes by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_episodes(&self, query: &SearchQuery)
    -> Result<Paginated<Episode>, ApiError>;
}

impl LocalEpisodeApi for ApiClient {
    #[instrument(skip_all)]
    async fn episodes(&self, query: &BrowseQuery) -> Result<Paginated<Episode>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Episodes, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn episode(&self, id: Id) -> Result<Episode, ApiError> {
        self.call(&Route::Episode { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn search_episodes(
        &self,
        query: &SearchQuery,
    ) -> Result<Paginated<Episode>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs("title"));
        self.call(&Route::SearchEpisodes, NO_BODY, &options).await
    }
}
