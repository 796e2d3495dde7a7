//! Account endpoints: sign-in, sign-up, activation, password reset.
#![allow(clippy::future_not_send)]

use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use crate::client::{ApiClient, ApiError, RequestOptions};
use crate::routes::Route;
use crate::types::{MessageResponse, SignInResponse};

/// Sign-in credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInData {
    /// Email address or username.
    pub email_or_username: String,
    /// Password.
    pub password: String,
}

impl SignInData {
    /// Creates sign-in credentials.
    #[must_use]
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_or_username: login.into(),
            password: password.into(),
        }
    }
}

/// Registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Desired handle.
    pub user_name: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Account API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    /// Exchanges credentials for a user profile and tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are refused.
    async fn sign_in(&self, data: &SignInData) -> Result<SignInResponse, ApiError>;

    /// Registers an account. The account must be activated before sign-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the form is rejected.
    async fn sign_up(&self, data: &SignUpData) -> Result<MessageResponse, ApiError>;

    /// Activates an account with the token sent by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is invalid.
    async fn activate_account(&self, token: &str) -> Result<MessageResponse, ApiError>;

    /// Requests a password reset email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError>;

    /// Sets a new password using a reset token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is invalid.
    async fn reset_password(&self, token: &str, password: &str)
    -> Result<MessageResponse, ApiError>;
}

impl LocalAuthApi for ApiClient {
    #[instrument(skip_all)]
    async fn sign_in(&self, data: &SignInData) -> Result<SignInResponse, ApiError> {
        self.call(&Route::SignIn, Some(data), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn sign_up(&self, data: &SignUpData) -> Result<MessageResponse, ApiError> {
        self.call(&Route::SignUp, Some(data), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn activate_account(&self, token: &str) -> Result<MessageResponse, ApiError> {
        let body = json!({ "token": token });
        self.call(&Route::Activate, Some(&body), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let body = json!({ "email": email });
        self.call(&Route::ForgotPassword, Some(&body), &RequestOptions::new())
            .await
    }

    #[instrument(skip_all)]
    async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = json!({ "token": token, "password": password });
        self.call(&Route::ResetPassword, Some(&body), &RequestOptions::new())
            .await
    }
}
