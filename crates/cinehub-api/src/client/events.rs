//! Seams between the client and whoever owns the credential.

use std::fmt::Debug;

/// Supplies the bearer token for outbound requests.
///
/// Read once per call, right before the request is built.
pub trait CredentialSource: Send + Sync + Debug {
    /// Current access token, or `None` to send the call unauthenticated.
    fn access_token(&self) -> Option<String>;
}

/// Events emitted by `ApiClient` while settling a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ClientEvent {
    /// The server answered 401: the presented credential is missing or invalid.
    CredentialRejected,
}

/// Receives `ClientEvent`s.
///
/// Called before the failing call returns to its caller.
pub trait ClientEventListener: Send + Sync + Debug {
    /// Handles one event.
    fn on_event(&self, event: ClientEvent);
}
