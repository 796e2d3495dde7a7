//! Crew endpoints.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use super::query::{BrowseQuery, SearchQuery};
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Paginated, Person};

/// Crew API trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CrewApi: Send)]
pub trait LocalCrewApi {
    /// Lists crew members.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn crew_members(&self, query: &BrowseQuery) -> Result<Paginated<Person>, ApiError>;

    /// Fetches one crew member.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn crew(&self, id: Id) -> Result<Person, ApiError>;

    /// Searches crew members by full name.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_crew(&self, query: &SearchQuery) -> Result<Paginated<Person>, ApiError>;
}

impl LocalCrewApi for ApiClient {
    #[instrument(skip_all)]
    async fn crew_members(&self, query: &BrowseQuery) -> Result<Paginated<Person>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Crews, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn crew(&self, id: Id) -> Result<Person, ApiError> {
        self.call(&Route::Crew { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn search_crew(&self, query: &SearchQuery) -> Result<Paginated<Person>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs("fullname"));
        self.call(&Route::SearchCrew, NO_BODY, &options).await
    }
}
