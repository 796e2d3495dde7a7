//! API client library for cinehub.
//!
//! Provides the authenticated REST client, the typed routing table,
//! one service trait per catalog resource, and the session that owns
//! the persisted credential.

/// Authenticated HTTP client.
pub mod client;

/// Typed routing table.
pub mod routes;

/// Resource services (movies, series, reviews, ...).
pub mod services;

/// Credential lifecycle.
pub mod session;

/// Wire records shared by the services.
pub mod types;

pub use client::{
    ApiClient, ApiClientBuilder, ApiError, ClientEvent, ClientEventListener, CredentialSource,
    RequestOptions,
};
pub use routes::Route;
pub use session::{AuthState, Session};
