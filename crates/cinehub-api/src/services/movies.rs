//! Movie catalog endpoints.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use super::query::{BrowseQuery, Pagination, SearchQuery};
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Count, Movie, Paginated};

/// Movie API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Lists movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movies(&self, query: &BrowseQuery) -> Result<Paginated<Movie>, ApiError>;

    /// Fetches one movie, including embedded reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie(&self, id: Id) -> Result<Movie, ApiError>;

    /// Fetches the most recently released movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn latest_movies(&self) -> Result<Vec<Movie>, ApiError>;

    /// Searches movies by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_movies(&self, query: &SearchQuery) -> Result<Paginated<Movie>, ApiError>;

    /// Fetches movies related to `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn related_movies(
        &self,
        id: Id,
        pagination: Pagination,
    ) -> Result<Paginated<Movie>, ApiError>;

    /// Counts all movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_count(&self) -> Result<Count, ApiError>;
}

impl LocalMovieApi for ApiClient {
    #[instrument(skip_all)]
    async fn movies(&self, query: &BrowseQuery) -> Result<Paginated<Movie>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Movies, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn movie(&self, id: Id) -> Result<Movie, ApiError> {
        self.call(&Route::Movie { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn latest_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.call(&Route::LatestMovies, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, query: &SearchQuery) -> Result<Paginated<Movie>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs("title"));
        self.call(&Route::SearchMovies, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn related_movies(
        &self,
        id: Id,
        pagination: Pagination,
    ) -> Result<Paginated<Movie>, ApiError> {
        let options = RequestOptions::with_query(pagination.to_pairs());
        self.call(&Route::RelatedMovies { id }, NO_BODY, &options)
            .await
    }

    #[instrument(skip_all)]
    async fn movie_count(&self) -> Result<Count, ApiError> {
        self.call(&Route::MovieCount, NO_BODY, &RequestOptions::new())
            .await
    }
}
