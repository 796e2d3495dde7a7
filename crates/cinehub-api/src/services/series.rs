//! Series catalog endpoints.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use super::query::{BrowseQuery, Pagination, SearchQuery};
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Paginated, Season, Serie};

/// Series API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(SerieApi: Send)]
pub trait LocalSerieApi {
    /// Lists series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn series_list(&self, query: &BrowseQuery) -> Result<Paginated<Serie>, ApiError>;

    /// Fetches one series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn serie(&self, id: Id) -> Result<Serie, ApiError>;

    /// Fetches the most recently aired series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn latest_series(&self) -> Result<Vec<Serie>, ApiError>;

    /// Searches series by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_series(&self, query: &SearchQuery) -> Result<Paginated<Serie>, ApiError>;

    /// Fetches series related to `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn related_series(
        &self,
        id: Id,
        pagination: Pagination,
    ) -> Result<Paginated<Serie>, ApiError>;

    /// Lists the seasons of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn serie_seasons(&self, id: Id) -> Result<Vec<Season>, ApiError>;
}

impl LocalSerieApi for ApiClient {
    #[instrument(skip_all)]
    async fn series_list(&self, query: &BrowseQuery) -> Result<Paginated<Serie>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Series, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn serie(&self, id: Id) -> Result<Serie, ApiError> {
        self.call(&Route::Serie { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn latest_series(&self) -> Result<Vec<Serie>, ApiError> {
        self.call(&Route::LatestSeries, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn search_series(&self, query: &SearchQuery) -> Result<Paginated<Serie>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs("title"));
        self.call(&Route::SearchSeries, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn related_series(
        &self,
        id: Id,
        pagination: Pagination,
    ) -> Result<Paginated<Serie>, ApiError> {
        let options = RequestOptions::with_query(pagination.to_pairs());
        self.call(&Route::RelatedSeries { id }, NO_BODY, &options)
            .await
    }

    #[instrument(skip_all)]
    async fn serie_seasons(&self, id: Id) -> Result<Vec<Season>, ApiError> {
        self.call(&Route::SerieSeasons { id }, NO_BODY, &RequestOptions::new())
            .await
    }
}
