//! Account-scoped endpoints: profile, favorites, own reviews, watchlist.
#![allow(clippy::future_not_send)]

use serde::Serialize;
use serde::de::IgnoredAny;
use serde_json::json;
use tracing::instrument;

use super::query::push_opt;
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{Favorite, ItemKind, Paginated, User, UserReview};

/// Body of `PUT users/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// New biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Filters for `GET users/favorites`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteQuery {
    /// Restrict to one item kind.
    pub kind: Option<ItemKind>,
    /// Title search.
    pub search: Option<String>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl FavoriteQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "type", self.kind);
        push_opt(&mut pairs, "search", self.search.as_deref());
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Filters for `GET users/reviews`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserReviewQuery {
    /// Restrict to one item kind.
    pub item_type: Option<ItemKind>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl UserReviewQuery {
    pub(crate) fn to_pairs(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "itemType", self.item_type);
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Rating and text of an own review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    /// Body.
    pub content: String,
    /// Rating.
    pub rating: u8,
}

impl ReviewInput {
    /// Creates a review body.
    #[must_use]
    pub fn new(content: impl Into<String>, rating: u8) -> Self {
        Self {
            content: content.into(),
            rating,
        }
    }
}

/// User API trait.
///
/// Every operation here requires a signed-in session.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(UserApi: Send)]
pub trait LocalUserApi {
    /// Fetches a user profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn profile(&self, id: Id) -> Result<User, ApiError>;

    /// Edits a user profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn update_profile(&self, id: Id, update: &ProfileUpdate) -> Result<User, ApiError>;

    /// Lists the current user's favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn favorites(&self, query: &FavoriteQuery) -> Result<Paginated<Favorite>, ApiError>;

    /// Bookmarks an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn add_favorite(&self, item_id: Id, kind: ItemKind) -> Result<Favorite, ApiError>;

    /// Removes a bookmark.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn remove_favorite(&self, item_id: Id, kind: ItemKind) -> Result<(), ApiError>;

    /// Lists the current user's reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn my_reviews(&self, query: UserReviewQuery)
    -> Result<Paginated<UserReview>, ApiError>;

    /// Reviews an item of any kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn add_review(
        &self,
        item_id: Id,
        kind: ItemKind,
        input: &ReviewInput,
    ) -> Result<UserReview, ApiError>;

    /// Edits the current user's review of an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn update_my_review(
        &self,
        item_id: Id,
        kind: ItemKind,
        input: &ReviewInput,
    ) -> Result<UserReview, ApiError>;

    /// Deletes the current user's review of an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn delete_my_review(&self, item_id: Id, kind: ItemKind) -> Result<(), ApiError>;

    /// Lists a user's watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn watchlist(&self, user_id: Id) -> Result<Vec<Favorite>, ApiError>;

    /// Adds an item to a user's watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn add_to_watchlist(
        &self,
        user_id: Id,
        item_id: Id,
        kind: ItemKind,
    ) -> Result<Favorite, ApiError>;

    /// Removes an item from a user's watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn remove_from_watchlist(&self, user_id: Id, item_id: Id) -> Result<(), ApiError>;
}

impl LocalUserApi for ApiClient {
    #[instrument(skip_all)]
    async fn profile(&self, id: Id) -> Result<User, ApiError> {
        self.call(&Route::Profile { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn update_profile(&self, id: Id, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.call(
            &Route::UpdateProfile { id },
            Some(update),
            &RequestOptions::new(),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn favorites(&self, query: &FavoriteQuery) -> Result<Paginated<Favorite>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Favorites, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn add_favorite(&self, item_id: Id, kind: ItemKind) -> Result<Favorite, ApiError> {
        let body = json!({ "itemId": item_id, "type": kind });
        self.call(&Route::AddFavorite, Some(&body), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn remove_favorite(&self, item_id: Id, kind: ItemKind) -> Result<(), ApiError> {
        let options = RequestOptions::new().body(&json!({ "itemId": item_id, "type": kind }))?;
        let _: IgnoredAny = self.call(&Route::RemoveFavorite, NO_BODY, &options).await?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn my_reviews(
        &self,
        query: UserReviewQuery,
    ) -> Result<Paginated<UserReview>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::MyReviews, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn add_review(
        &self,
        item_id: Id,
        kind: ItemKind,
        input: &ReviewInput,
    ) -> Result<UserReview, ApiError> {
        let body = json!({
            "itemId": item_id,
            "itemType": kind,
            "content": input.content,
            "rating": input.rating,
        });
        self.call(&Route::AddUserReview, Some(&body), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn update_my_review(
        &self,
        item_id: Id,
        kind: ItemKind,
        input: &ReviewInput,
    ) -> Result<UserReview, ApiError> {
        let body = json!({
            "itemType": kind,
            "content": input.content,
            "rating": input.rating,
        });
        self.call(
            &Route::UpdateUserReview { item_id },
            Some(&body),
            &RequestOptions::new(),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn delete_my_review(&self, item_id: Id, kind: ItemKind) -> Result<(), ApiError> {
        let options = RequestOptions::new().body(&json!({ "itemType": kind }))?;
        let _: IgnoredAny = self
            .call(&Route::DeleteUserReview { item_id }, NO_BODY, &options)
            .await?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn watchlist(&self, user_id: Id) -> Result<Vec<Favorite>, ApiError> {
        self.call(
            &Route::Watchlist { id: user_id },
            NO_BODY,
            &RequestOptions::new(),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn add_to_watchlist(
        &self,
        user_id: Id,
        item_id: Id,
        kind: ItemKind,
    ) -> Result<Favorite, ApiError> {
        let body = json!({ "itemId": item_id, "type": kind });
        self.call(
            &Route::AddToWatchlist { id: user_id },
            Some(&body),
            &RequestOptions::new(),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn remove_from_watchlist(&self, user_id: Id, item_id: Id) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .call(
                &Route::RemoveFromWatchlist {
                    id: user_id,
                    item_id,
                },
                NO_BODY,
                &RequestOptions::new(),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::testing::signed_in_client;

    fn user_review_json() -> serde_json::Value {
        json!({
            "id": 31,
            "itemId": 12,
            "itemType": "season",
            "rating": 5,
            "content": "The docks season holds up.",
            "itemTitle": "Season 2"
        })
    }

    #[tokio::test]
    async fn test_favorites_via_http() {
        // Arrange
        let server = MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/api/favorites_page_1.json");
        Mock::given(method("GET"))
            .and(path("/users/favorites"))
            .and(header("Authorization", "Bearer test-token"))
            .and(query_param("type", "serie"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&server)
            .await;
        let client = signed_in_client(&server);
        let query = FavoriteQuery {
            kind: Some(ItemKind::Serie),
            ..FavoriteQuery::default()
        };

        // Act
        let page = client.favorites(&query).await.unwrap();

        // Assert
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].kind, ItemKind::Serie);
        assert_eq!(page.data[1].title.as_deref(), Some("The Wire"));
    }

    #[tokio::test]
    async fn test_add_and_remove_favorite_bodies() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/favorites"))
            .and(body_json(json!({"itemId": 7, "type": "movie"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": 1, "itemId": 7, "type": "movie"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/favorites"))
            .and(body_json(json!({"itemId": 7, "type": "movie"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        let client = signed_in_client(&server);

        // Act
        let added = client.add_favorite(7, ItemKind::Movie).await.unwrap();
        client.remove_favorite(7, ItemKind::Movie).await.unwrap();

        // Assert
        assert_eq!(added.item_id, 7);
    }

    #[tokio::test]
    async fn test_own_review_lifecycle() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/reviews"))
            .and(query_param("itemType", "season"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [user_review_json()],
                "meta": {"total": 1, "page": 1, "perPage": 20, "totalPages": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/reviews"))
            .and(body_json(json!({
                "itemId": 12,
                "itemType": "season",
                "content": "The docks season holds up.",
                "rating": 5
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(user_review_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/reviews/12"))
            .and(body_json(json!({
                "itemType": "season",
                "content": "Still holds up.",
                "rating": 4
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_review_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/reviews/12"))
            .and(body_json(json!({"itemType": "season"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
        let client = signed_in_client(&server);
        let query = UserReviewQuery {
            item_type: Some(ItemKind::Season),
            ..UserReviewQuery::default()
        };

        // Act
        let mine = client.my_reviews(query).await.unwrap();
        let added = client
            .add_review(
                12,
                ItemKind::Season,
                &ReviewInput::new("The docks season holds up.", 5),
            )
            .await
            .unwrap();
        client
            .update_my_review(12, ItemKind::Season, &ReviewInput::new("Still holds up.", 4))
            .await
            .unwrap();
        client
            .delete_my_review(12, ItemKind::Season)
            .await
            .unwrap();

        // Assert
        assert_eq!(mine.data[0].item_type, ItemKind::Season);
        assert_eq!(added.item_title.as_deref(), Some("Season 2"));
    }

    #[tokio::test]
    async fn test_profile_and_watchlist() {
        // Arrange
        let server = MockServer::start().await;
        let user = json!({
            "id": 7,
            "email": "neil@example.com",
            "username": "neil",
            "bio": "Thief"
        });
        Mock::given(method("GET"))
            .and(path("/users/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&user))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/7"))
            .and(body_json(json!({"bio": "Thief"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(&user))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/7/watchlist"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": 5, "itemId": 3, "type": "serie"}])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/7/watchlist"))
            .and(body_json(json!({"itemId": 3, "type": "serie"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": 5, "itemId": 3, "type": "serie"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/7/watchlist/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        let client = signed_in_client(&server);
        let update = ProfileUpdate {
            bio: Some(String::from("Thief")),
            ..ProfileUpdate::default()
        };

        // Act
        let profile = client.profile(7).await.unwrap();
        let updated = client.update_profile(7, &update).await.unwrap();
        let watchlist = client.watchlist(7).await.unwrap();
        let added = client
            .add_to_watchlist(7, 3, ItemKind::Serie)
            .await
            .unwrap();
        client.remove_from_watchlist(7, 3).await.unwrap();

        // Assert
        assert_eq!(profile.username, "neil");
        assert_eq!(updated.bio.as_deref(), Some("Thief"));
        assert_eq!(watchlist[0].item_id, 3);
        assert_eq!(added.kind, ItemKind::Serie);
    }
}
