//! Per-call request options.

use std::fmt::Display;

use serde::Serialize;

use super::error::ApiError;

/// Query parameters and optional body attached to a single call.
///
/// The body here is only consulted when the call itself was given none,
/// which is how `delete` carries a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options from prepared query pairs.
    #[must_use]
    pub const fn with_query(query: Vec<(String, String)>) -> Self {
        Self { query, body: None }
    }

    /// Appends one query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be serialized.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Query parameters in insertion order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Attached body, if any.
    #[must_use]
    pub const fn body_value(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}
