//! Genre endpoints.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::Genre;

/// Genre API trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(GenreApi: Send)]
pub trait LocalGenreApi {
    /// Lists all genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn genres(&self) -> Result<Vec<Genre>, ApiError>;

    /// Fetches one genre.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn genre(&self, id: Id) -> Result<Genre, ApiError>;
}

impl LocalGenreApi for ApiClient {
    #[instrument(skip_all)]
    async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.call(&Route::Genres, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn genre(&self, id: Id) -> Result<Genre, ApiError> {
        self.call(&Route::Genre { id }, NO_BODY, &RequestOptions::new())
            .await
    }
}
