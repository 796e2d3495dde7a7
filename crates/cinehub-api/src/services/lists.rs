//! User-curated list endpoints.
#![allow(clippy::future_not_send)]

use serde::Serialize;
use serde::de::IgnoredAny;
use tracing::instrument;

use super::query::push_opt;
use crate::client::{ApiClient, ApiError, NO_BODY, RequestOptions};
use crate::routes::{Id, Route};
use crate::types::{List, ListItem, Paginated};

/// Filters for `GET lists`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Lists owned by one user.
    pub user_id: Option<Id>,
    /// Only public lists.
    pub is_public: Option<bool>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl ListFilter {
    pub(crate) fn to_pairs(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "userId", self.user_id);
        push_opt(&mut pairs, "isPublic", self.is_public);
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Body of `POST lists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewList {
    /// Name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Visible to other users.
    pub is_public: bool,
}

/// Body of `PUT lists/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Body of `POST lists/{id}/items`: a movie or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NewListItem {
    /// Add a movie.
    #[serde(rename = "movieId")]
    Movie(Id),
    /// Add a series.
    #[serde(rename = "serieId")]
    Serie(Id),
}

/// List API trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ListApi: Send)]
pub trait LocalListApi {
    /// Lists lists matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn lists(&self, filter: ListFilter) -> Result<Paginated<List>, ApiError>;

    /// Fetches one list with its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn list(&self, id: Id) -> Result<List, ApiError>;

    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn create_list(&self, list: &NewList) -> Result<List, ApiError>;

    /// Edits a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn update_list(&self, id: Id, update: &ListUpdate) -> Result<List, ApiError>;

    /// Deletes a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn delete_list(&self, id: Id) -> Result<(), ApiError>;

    /// Appends an item to a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn add_list_item(&self, id: Id, item: NewListItem) -> Result<ListItem, ApiError>;

    /// Removes an item from a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    async fn remove_list_item(&self, id: Id, item_id: Id) -> Result<(), ApiError>;
}

impl LocalListApi for ApiClient {
    #[instrument(skip_all)]
    async fn lists(&self, filter: ListFilter) -> Result<Paginated<List>, ApiError> {
        let options = RequestOptions::with_query(filter.to_pairs());
        self.call(&Route::Lists, NO_BODY, &options).await
    }

    #[instrument(skip_all)]
    async fn list(&self, id: Id) -> Result<List, ApiError> {
        self.call(&Route::List { id }, NO_BODY, &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn create_list(&self, list: &NewList) -> Result<List, ApiError> {
        self.call(&Route::CreateList, Some(list), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn update_list(&self, id: Id, update: &ListUpdate) -> Result<List, ApiError> {
        self.call(&Route::UpdateList { id }, Some(update), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn delete_list(&self, id: Id) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .call(&Route::DeleteList { id }, NO_BODY, &RequestOptions::new())
            .await?;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn add_list_item(&self, id: Id, item: NewListItem) -> Result<ListItem, ApiError> {
        self.call(&Route::AddListItem { id }, Some(&item), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn remove_list_item(&self, id: Id, item_id: Id) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .call(
                &Route::RemoveListItem { id, item_id },
                NO_BODY,
                &RequestOptions::new(),
            )
            .await?;
        Ok(())
    }
}
