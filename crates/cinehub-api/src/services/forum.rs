//! Forum endpoints: threads and replies.
#![allow(clippy::future_not_send)]

use serde::Serialize;
use serde::de::IgnoredAny;
use serde_json::json;
use tracing::instrument;

use super::query::push_opt;
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{ForumReply, ForumThread, Paginated};

/// Filters for `GET forum/threads`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadQuery {
    /// Threads of one category.
    pub category_id: Option<Id>,
    /// Threads carrying a tag slug.
    pub tag: Option<String>,
    /// Title search.
    pub search: Option<String>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl ThreadQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "categoryId", self.category_id);
        push_opt(&mut pairs, "tag", self.tag.as_deref());
        push_opt(&mut pairs, "search", self.search.as_deref());
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Body of `POST forum/threads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThread {
    /// Title.
    pub title: String,
    /// Opening post.
    pub content: String,
    /// Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Id>,
    /// Tag ids.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<Id>,
}

/// Body of `PUT forum/threads/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New opening post.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Pin or unpin (moderators).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    /// Lock or unlock (moderators).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
}

/// Forum API trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ForumApi: Send)]
pub trait LocalForumApi {
    /// Lists threads.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn threads(&self, query: &ThreadQuery) -> Result<Paginated<ForumThread>, ApiError>;

    /// Fetches one thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn thread(&self, id: Id) -> Result<ForumThread, ApiError>;

    /// Opens a thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn create_thread(&self, thread: &NewThread) -> Result<ForumThread, ApiError>;

    /// Edits a thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn update_thread(&self, id: Id, update: &ThreadUpdate)
    -> Result<ForumThread, ApiError>;

    /// Deletes a thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn delete_thread(&self, id: Id) -> Result<(), ApiError>;

    /// Posts a reply. Locked threads reject replies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn reply_to_thread(&self, id: Id, content: &str) -> Result<ForumReply, ApiError>;
}

impl LocalForumApi for ApiClient {
    #[instrument(skip_all)]
    async fn threads(&self, query: &ThreadQuery) -> Result<Paginated<ForumThread>, ApiError> {
        let options = RequestOptions::with_query(query.to_pairs());
        self.call(&Route::Threads, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn thread(&self, id: Id) -> Result<ForumThread, ApiError> {
        self.call(&Route::Thread { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn create_thread(&self, thread: &NewThread) -> Result<ForumThread, ApiError> {
        self.call(&Route::CreateThread, Some(thread), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn update_thread(
        &self,
        id: Id,
        update: &ThreadUpdate,
    ) -> Result<ForumThread, ApiError> {
        self.call(
            &Route::UpdateThread { id },
            Some(update),
            &RequestOptions::new(),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn delete_thread(&self, id: Id) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .call(&Route::DeleteThread { id }, NO_BODY, &RequestOptions::new())
            .await?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn reply_to_thread(&self, id: Id, content: &str) -> Result<ForumReply, ApiError> {
        let body = json!({ "content": content });
        self.call(&Route::CreateReply { id }, Some(&body), &RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::testing::{anonymous_client, signed_in_client};

    fn thread_json() -> serde_json::Value {
        json!({
            "id": 9,
            "userId": 7,
            "title": "Best heist movie?",
            "content": "Heat, obviously.",
            "isPinned": false,
            "isLocked": false,
            "viewCount": 120,
            "replyCount": 3,
            "category": {"id": 1, "name": "Movies", "slug": "movies"},
            "tags": [{"id": 2, "name": "Heist", "slug": "heist"}]
        })
    }

    #[tokio::test]
    async fn test_threads_query() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forum/threads"))
            .and(query_param("categoryId", "1"))
            .and(query_param("tag", "heist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [thread_json()],
                "meta": {"total": 1, "page": 1, "perPage": 20, "totalPages": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = anonymous_client(&server);
        let query = ThreadQuery {
            category_id: Some(1),
            tag: Some(String::from("heist")),
            ..ThreadQuery::default()
        };

        // Act
        let page = client.threads(&query).await.unwrap();

        // Assert
        let thread = &page.data[0];
        assert_eq!(thread.reply_count, 3);
        assert_eq!(thread.category.as_ref().unwrap().slug, "movies");
        assert_eq!(thread.tags[0].name, "Heist");
    }

    #[tokio::test]
    async fn test_thread_lifecycle() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/forum/threads"))
            .and(body_json(json!({
                "title": "Best heist movie?",
                "content": "Heat, obviously.",
                "categoryId": 1
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(thread_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/forum/threads/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(thread_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/forum/threads/9"))
            .and(body_json(json!({"isLocked": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(thread_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/forum/threads/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Deleted"})))
            .expect(1)
            .mount(&server)
            .await;
        let client = signed_in_client(&server);
        let new_thread = NewThread {
            title: String::from("Best heist movie?"),
            content: String::from("Heat, obviously."),
            category_id: Some(1),
            tag_ids: Vec::new(),
        };
        let lock = ThreadUpdate {
            is_locked: Some(true),
            ..ThreadUpdate::default()
        };

        // Act
        let created = client.create_thread(&new_thread).await.unwrap();
        let fetched = client.thread(created.id).await.unwrap();
        client.update_thread(9, &lock).await.unwrap();
        client.delete_thread(9).await.unwrap();

        // Assert
        assert_eq!(fetched.title, "Best heist movie?");
    }

    #[tokio::test]
    async fn test_reply_to_locked_thread() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/forum/threads/9/replies"))
            .and(body_json(json!({"content": "Agreed"})))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "statusCode": 403,
                "message": "Thread is locked",
                "error": "Forbidden"
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = signed_in_client(&server);

        // Act
        let result = client.reply_to_thread(9, "Agreed").await;

        // Assert
        let err = result.unwrap_err();
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Thread is locked");
    }

    #[tokio::test]
    async fn test_reply_to_thread() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/forum/threads/9/replies"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 90,
                "threadId": 9,
                "userId": 7,
                "content": "Agreed"
            })))
            .mount(&server)
            .await;
        let client = signed_in_client(&server);

        // Act
        let reply = client.reply_to_thread(9, "Agreed").await.unwrap();

        // Assert
        assert_eq!(reply.thread_id, 9);
        assert_eq!(reply.content, "Agreed");
    }
}
