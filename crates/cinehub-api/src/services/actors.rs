//! Actor endpoints.
#![allow(clippy::future_not_send)]

use tracing::instrument;

use super::query::{BrowseQuery, SearchQuery};
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Paginated, Person};

/// Actor API trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ActorApi: Send)]
pub trait LocalActorApi {
    /// Lists actors.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn actors(&self, query: &BrowseQuery) -> Result<Paginated<Person>, ApiError>;

    /// Fetches one actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn actor(&self, id: Id) -> Result<Person, ApiError>;

    /// Searches actors by full name.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_actors(&self, query: &SearchQuery) -> Result<Paginated<Person>, ApiError>;
}

impl LocalActorApi for ApiClient {
    #[instrument(skip_all)]
    async fn actors(&self, query: &BrowseQuery) -> Result<Paginated<Person>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Actors, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn actor(&self, id: Id) -> Result<Person, ApiError> {
        self.call(&Route::Actor { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn search_actors(&self, query: &SearchQuery) -> Result<Paginated<Person>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs("fullname"));
        self.call(&Route::SearchActors, NO_BODY, &options).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::testing::anonymous_client;

    #[tokio::test]
    async fn test_search_actors_by_fullname() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/api/actors_search.json");
        Mock::given(method("GET"))
            .and(path("/actors/search"))
            .and(query_param("fullname", "pacino"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;
        let client = anonymous_client(&server);

        // Act
        let found = client
            .search_actors(&SearchQuery::new("pacino"))
            .await
            .unwrap();

        // Assert
        assert_eq!(found.data[0].fullname, "Al Pacino");
        let average = found.data[0].ratings.unwrap().average_rating;
        assert!((average - 4.8).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_actor_and_listing() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/api/actors_search.json");
        Mock::given(method("GET"))
            .and(path("/actors"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/actors/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 5,
                "fullname": "Al Pacino",
                "isBookmarked": true
            })))
            .mount(&server)
            .await;
        let client = anonymous_client(&server);

        // Act
        let listed = client.actors(&BrowseQuery::new()).await.unwrap();
        let actor = client.actor(5).await.unwrap();

        // Assert
        assert_eq!(listed.meta.total, 1);
        assert!(actor.is_bookmarked);
        assert!(actor.description.is_none());
    }
}
