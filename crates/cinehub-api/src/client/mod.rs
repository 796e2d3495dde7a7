//! Authenticated API client module.
//!
//! Every outbound call goes through `ApiClient::send`, which attaches
//! the bearer token supplied by a `CredentialSource`, normalizes error
//! bodies into `ApiError`, and reports rejected credentials to a
//! `ClientEventListener`.

#[allow(clippy::module_inception)]
mod client;
mod error;
mod events;
mod options;

#[allow(clippy::module_name_repetitions)]
pub use client::{
    ApiClient, ApiClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, NO_BODY,
};
pub use error::ApiError;
#[allow(clippy::module_name_repetitions)]
pub use events::{ClientEvent, ClientEventListener, CredentialSource};
pub use options::RequestOptions;
