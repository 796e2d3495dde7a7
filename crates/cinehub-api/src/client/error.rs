//! `ApiError` and error body normalization.

use reqwest::StatusCode;
use serde_json::Value;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ApiError {
    /// No usable response: connection failure, timeout, TLS error.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// Displays as the normalized message only.
    #[error("{message}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// Message extracted from the error body.
        message: String,
    },

    /// The success body did not match the expected shape.
    #[error("failed to decode JSON response: {path}")]
    Decode {
        /// Request path.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    /// The path could not be joined onto the base URL.
    #[error("invalid request path: {path}")]
    InvalidPath {
        /// Request path.
        path: String,
        /// Underlying URL error.
        #[source]
        source: url::ParseError,
    },

    /// Persisting or clearing session state failed.
    #[error("session storage failed: {0}")]
    Store(#[source] anyhow::Error),
}

impl ApiError {
    /// HTTP status of the response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Normalized server message for status errors.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => Some(message),
            _ => None,
        }
    }

    /// `true` when the server rejected the presented credential (401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// `true` when the call hit the client's overall timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

/// Builds a human-readable message from an error response body.
///
/// Looks at `message` first, then `error`. Arrays are joined with `", "`.
/// Falls back to the raw body, then to the status' canonical reason.
pub(crate) fn normalize_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(message) =
            message_field(value.get("message")).or_else(|| message_field(value.get("error")))
    {
        return message;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return String::from(trimmed);
    }

    status
        .canonical_reason()
        .map_or_else(|| status.to_string(), String::from)
}

fn message_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map_or_else(|| item.to_string(), String::from)
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}
