//! Helpers shared by the service tests.
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use wiremock::MockServer;

use crate::client::{ApiClient, CredentialSource};

/// Credential source that always returns the same token.
#[derive(Debug)]
pub struct StaticToken(pub &'static str);

impl CredentialSource for StaticToken {
    fn access_token(&self) -> Option<String> {
        Some(String::from(self.0))
    }
}

/// Client pointed at `server`, without credentials.
pub fn anonymous_client(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .base_url(server.uri().parse().unwrap())
        .build()
        .unwrap()
}

/// Client pointed at `server`, sending `Bearer test-token`.
pub fn signed_in_client(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .base_url(server.uri().parse().unwrap())
        .credentials(Arc::new(StaticToken("test-token")))
        .build()
        .unwrap()
}
