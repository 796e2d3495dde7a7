//! `ApiClient` - authenticated REST client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::error::{ApiError, normalize_message};
use super::events::{ClientEvent, ClientEventListener, CredentialSource};
use super::options::RequestOptions;
use crate::routes::Route;
use crate::session::Session;

/// Default base URL of the catalog API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default overall request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("cinehub/", env!("CARGO_PKG_VERSION"));

/// Placeholder for calls that send no body.
pub const NO_BODY: Option<&()> = None;

/// Authenticated client for the catalog REST API.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ApiClient {
    /// HTTP client (JSON content type, fixed timeout).
    http_client: Client,
    /// Base URL, always ending in `/`.
    base_url: Url,
    /// Bearer token supplier.
    credentials: Option<Arc<dyn CredentialSource>>,
    /// Receiver of `ClientEvent`s.
    listener: Option<Arc<dyn ClientEventListener>>,
}

/// Builder for `ApiClient`.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct ApiClientBuilder {
    base_url: Option<Url>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    credentials: Option<Arc<dyn CredentialSource>>,
    listener: Option<Arc<dyn ClientEventListener>>,
}

impl ApiClientBuilder {
    /// Overrides the base URL (default: `http://localhost:3000`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the overall per-call timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent (default: `cinehub/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the bearer token supplier.
    #[must_use]
    pub fn credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the receiver of client events.
    #[must_use]
    pub fn listener(mut self, listener: Arc<dyn ClientEventListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Uses `session` both as credential source and event listener.
    #[must_use]
    pub fn session(self, session: &Arc<Session>) -> Self {
        let credentials: Arc<dyn CredentialSource> = session.clone();
        let listener: Arc<dyn ClientEventListener> = session.clone();
        self.credentials(credentials).listener(listener)
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - The default base URL cannot be parsed.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|source| ApiError::InvalidPath {
                path: String::from(DEFAULT_BASE_URL),
                source,
            })?,
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .gzip(true)
            .build()?;

        Ok(ApiClient {
            http_client,
            base_url: with_trailing_slash(base_url),
            credentials: self.credentials,
            listener: self.listener,
        })
    }
}

/// Makes `Url::join` append to the base path instead of replacing its last segment.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl ApiClient {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a GET request and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        self.send(Method::GET, path, NO_BODY, options).await
    }

    /// Sends a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, path, body, options).await
    }

    /// Sends a PUT request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        self.send(Method::PUT, path, body, options).await
    }

    /// Sends a PATCH request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        self.send(Method::PATCH, path, body, options).await
    }

    /// Sends a DELETE request. A body, if needed, travels in `options`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        self.send(Method::DELETE, path, NO_BODY, options).await
    }

    /// Sends the request described by `route`, using its method and path.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn call<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        route: &Route,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        self.send(route.method(), &route.path(), body, options)
            .await
    }

    /// Sends one request.
    ///
    /// Attaches `Authorization: Bearer <token>` when the credential source
    /// has a token. A 401 response is reported as
    /// `ClientEvent::CredentialRejected` before the error is returned.
    ///
    /// # Errors
    ///
    /// - `ApiError::InvalidPath` if `path` cannot be joined onto the base URL.
    /// - `ApiError::Transport` on connection failure or timeout.
    /// - `ApiError::Status` for any non-success status.
    /// - `ApiError::Decode` if the success body is not a valid `T`.
    #[instrument(skip_all, fields(%method, path))]
    pub async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidPath {
                path: String::from(path),
                source,
            })?;

        let mut builder = self.http_client.request(method, url);
        if !options.query_pairs().is_empty() {
            builder = builder.query(options.query_pairs());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        } else if let Some(body) = options.body_value() {
            builder = builder.json(body);
        }

        let token = self
            .credentials
            .as_ref()
            .and_then(|credentials| credentials.access_token());
        let authenticated = token.is_some();
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let request = builder.build()?;
        tracing::debug!(url = %request.url(), authenticated, "API request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, authenticated, "API rejected credential (401)");
            self.emit(ClientEvent::CredentialRejected);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = normalize_message(status, &body);
            tracing::debug!(%status, %message, "API error response");
            return Err(ApiError::Status { status, message });
        }

        let bytes = response.bytes().await?;
        decode_body(path, &bytes)
    }

    fn emit(&self, event: ClientEvent) {
        if let Some(listener) = &self.listener {
            listener.on_event(event);
        }
    }
}

/// Decodes a success body. Empty bodies decode as JSON `null`.
fn decode_body<T: DeserializeOwned>(path: &str, bytes: &[u8]) -> Result<T, ApiError> {
    let result = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    result.map_err(|source| ApiError::Decode {
        path: String::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::sync::Mutex;

    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;

    #[derive(Debug)]
    struct FixedToken(Option<&'static str>);

    impl CredentialSource for FixedToken {
        fn access_token(&self) -> Option<String> {
            self.0.map(String::from)
        }
    }

    #[derive(Debug, Default)]
    struct RecordingListener(Mutex<Vec<ClientEvent>>);

    impl ClientEventListener for RecordingListener {
        fn on_event(&self, event: ClientEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Movie {
        id: u64,
        title: String,
    }

    fn client_for(server: &MockServer, token: Option<&'static str>) -> ApiClient {
        ApiClient::builder()
            .base_url(server.uri().parse().unwrap())
            .credentials(Arc::new(FixedToken(token)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        // Arrange & Act
        let client = ApiClient::builder().build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_builder_appends_trailing_slash() {
        // Arrange
        let url = Url::parse("http://api.example.com/v1").unwrap();

        // Act
        let client = ApiClient::builder().base_url(url).build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://api.example.com/v1/");
    }

    #[test]
    fn test_decode_empty_body_as_unit() {
        // Arrange & Act
        let result: Result<(), ApiError> = decode_body("reviews/1", b"");

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_decode_invalid_body_reports_path() {
        // Arrange & Act
        let result: Result<Movie, ApiError> = decode_body("movies/7", b"<html>");

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "movies/7"));
    }

    #[tokio::test]
    async fn test_default_user_agent_is_sent() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies/7"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 7, "title": "Heat"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, None);

        // Act
        let movie: Movie = client.get("movies/7", &RequestOptions::new()).await.unwrap();

        // Assert
        assert_eq!(movie.id, 7);
        assert!(DEFAULT_USER_AGENT.starts_with("cinehub/"));
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies/7"))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 7, "title": "Heat"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, Some("T1"));

        // Act
        let movie: Movie = client
            .get("/movies/7", &RequestOptions::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(
            movie,
            Movie {
                id: 7,
                title: String::from("Heat")
            }
        );
    }

    #[tokio::test]
    async fn test_missing_token_omits_header_and_still_sends() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, None);

        // Act
        let movies: Vec<Movie> = client
            .get("movies/latest", &RequestOptions::new())
            .await
            .unwrap();

        // Assert
        assert!(movies.is_empty());
        let requests: Vec<Request> = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_json_content_type_is_default() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, None);

        // Act & Assert (mock expect(1) verifies the header)
        let _: Vec<Movie> = client.get("genres", &RequestOptions::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_parameters_are_sent() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies/search"))
            .and(query_param("title", "heat"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, None);
        let options = RequestOptions::new().query("title", "heat").query("page", 2);

        // Act & Assert
        let _: Vec<Movie> = client.get("movies/search", &options).await.unwrap();
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/lists"))
            .and(body_json(json!({"name": "Noir", "isPublic": true})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "title": "x"})))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, Some("T1"));

        // Act
        let created: Movie = client
            .post(
                "lists",
                Some(&json!({"name": "Noir", "isPublic": true})),
                &RequestOptions::new(),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_delete_carries_body_from_options() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/favorites"))
            .and(body_json(json!({"itemId": 7, "type": "movie"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, Some("T1"));
        let options = RequestOptions::new()
            .body(&json!({"itemId": 7, "type": "movie"}))
            .unwrap();

        // Act
        let result: Result<(), ApiError> = client.delete("users/favorites", &options).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_patch_and_put_use_their_methods() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/users/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, Some("T1"));
        let body = json!({"bio": "hi"});

        // Act
        let patched: Result<(), ApiError> = client
            .patch("users/7", Some(&body), &RequestOptions::new())
            .await;
        let put: Result<(), ApiError> = client
            .put("users/7", Some(&body), &RequestOptions::new())
            .await;

        // Assert
        assert!(patched.is_ok());
        assert!(put.is_ok());
    }

    #[tokio::test]
    async fn test_error_message_array_is_joined() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "statusCode": 400,
                "message": ["a", "b"],
                "error": "Bad Request"
            })))
            .mount(&server)
            .await;
        let client = client_for(&server, None);

        // Act
        let result: Result<(), ApiError> = client
            .post("auth/signup", Some(&json!({})), &RequestOptions::new())
            .await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.message(), Some("a, b"));
        assert_eq!(err.to_string(), "a, b");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_error_message_string_is_kept() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"message": "single"})),
            )
            .mount(&server)
            .await;
        let client = client_for(&server, None);

        // Act
        let result: Result<(), ApiError> = client
            .post("auth/signup", Some(&json!({})), &RequestOptions::new())
            .await;

        // Assert
        assert_eq!(result.unwrap_err().message(), Some("single"));
    }

    #[tokio::test]
    async fn test_malformed_path_yields_not_found() {
        // Arrange
        let server = MockServer::start().await;
        let client = client_for(&server, None);

        // Act
        let result: Result<Movie, ApiError> = client
            .get("movies/:id", &RequestOptions::new())
            .await;

        // Assert
        assert_eq!(result.unwrap_err().status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_401_emits_credential_rejected() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})),
            )
            .mount(&server)
            .await;
        let listener = Arc::new(RecordingListener::default());
        let client = ApiClient::builder()
            .base_url(server.uri().parse().unwrap())
            .credentials(Arc::new(FixedToken(Some("expired"))))
            .listener(Arc::clone(&listener) as Arc<dyn ClientEventListener>)
            .build()
            .unwrap();

        // Act
        let result: Result<Movie, ApiError> = client
            .get("users/7/watchlist", &RequestOptions::new())
            .await;

        // Assert
        assert!(result.unwrap_err().is_unauthorized());
        assert_eq!(
            *listener.0.lock().unwrap(),
            vec![ClientEvent::CredentialRejected]
        );
    }

    #[tokio::test]
    async fn test_other_errors_emit_nothing() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        let listener = Arc::new(RecordingListener::default());
        let client = ApiClient::builder()
            .base_url(server.uri().parse().unwrap())
            .listener(Arc::clone(&listener) as Arc<dyn ClientEventListener>)
            .build()
            .unwrap();

        // Act
        let result: Result<Movie, ApiError> =
            client.get("lists/1", &RequestOptions::new()).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.message(), Some("Forbidden"));
        assert!(listener.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_reported_as_transport_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;
        let client = ApiClient::builder()
            .base_url(server.uri().parse().unwrap())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        // Act
        let result: Result<Vec<Movie>, ApiError> =
            client.get("movies", &RequestOptions::new()).await;

        // Assert
        let err = result.unwrap_err();
        assert!(err.is_timeout());
        assert!(err.status().is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_propagates_transport_error() {
        // Arrange
        let client = ApiClient::builder()
            .base_url("http://127.0.0.1:9/".parse().unwrap())
            .build()
            .unwrap();

        // Act
        let result: Result<Vec<Movie>, ApiError> =
            client.get("movies", &RequestOptions::new()).await;

        // Assert
        assert!(matches!(result.unwrap_err(), ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_call_uses_route_method_and_path() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/lists/3/items/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server, Some("T1"));

        // Act
        let result: Result<(), ApiError> = client
            .call(
                &Route::RemoveListItem { id: 3, item_id: 9 },
                NO_BODY,
                &RequestOptions::new(),
            )
            .await;

        // Assert
        assert!(result.is_ok());
    }
}
