//! Season endpoints.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use super::query::{BrowseQuery, SearchQuery};
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Episode, Paginated, Season};

/// Season API trait.
///
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(SeasonApi: Send)]
pub trait LocalSeasonApi {
    /// Lists seasons.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn seasons(&self, query: &BrowseQuery) -> Result<Paginated<Season>, ApiError>;

    /// Fetches one season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn season(&self, id: Id) -> Result<Season, ApiError>;

    /// Searches seasons by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_seasons(&self, query: &SearchQuery) -> Result<Paginated<Season>, ApiError>;

    /// Lists the episodes of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn season_episodes(&self, id: Id) -> Result<Vec<Episode>, ApiError>;
}

impl LocalSeasonApi for ApiClient {
    #[instrument(skip_all)]
    async fn seasons(&self, query: &BrowseQuery) -> Result<Paginated<Season>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Seasons, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn season(&self, id: Id) -> Result<Season, ApiError> {
        self.call(&Route::Season { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn search_seasons(&self, query: &SearchQuery) -> Result<Paginated<Season>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs("title"));
        self.call(&Route::SearchSeasons, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn season_episodes(&self, id: Id) -> Result<Vec<Episode>, ApiError> {
        self.call(
            &Route::SeasonEpisodes { id },
            NO_BODY,
            &RequestOptions::new(),
        )
        .await
    }
}
