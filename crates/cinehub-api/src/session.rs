//! Credential lifecycle.
//!
//! `Session` owns the persisted bearer token and cached profile, and
//! publishes `AuthState` changes through a `tokio::sync::watch` channel.
//! Wired into `ApiClient` it supplies the token for each call and drops
//! the credential as soon as the server rejects it.
#![allow(clippy::future_not_send)]

use std::sync::Arc;

use anyhow::{Context, Result};
use cinehub_store::{ACCESS_TOKEN_KEY, KeyValueStore, USER_KEY};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::client::{ApiError, ClientEvent, ClientEventListener, CredentialSource};
use crate::services::{LocalAuthApi, SignInData, SignUpData};
use crate::types::{AuthTokens, MessageResponse, User};

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    /// Signed-in user.
    pub user: Option<User>,
    /// Credential of the signed-in user.
    pub tokens: Option<AuthTokens>,
    /// `true` until `Session::init` has read the store.
    pub is_loading: bool,
    /// Whether a credential and profile are both held.
    pub is_authenticated: bool,
}

impl AuthState {
    const fn loading() -> Self {
        Self {
            user: None,
            tokens: None,
            is_loading: true,
            is_authenticated: false,
        }
    }

    const fn signed_out() -> Self {
        Self {
            user: None,
            tokens: None,
            is_loading: false,
            is_authenticated: false,
        }
    }

    const fn signed_in(user: User, tokens: AuthTokens) -> Self {
        Self {
            user: Some(user),
            tokens: Some(tokens),
            is_loading: false,
            is_authenticated: true,
        }
    }
}

/// Authentication session backed by a `KeyValueStore`.
#[derive(Debug)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    state: watch::Sender<AuthState>,
}

impl Session {
    /// Creates a session in the loading state. Call [`Session::init`] next.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: watch::Sender::new(AuthState::loading()),
        }
    }

    /// Restores the session from the store.
    ///
    /// The session is authenticated only when both the token and a
    /// parseable profile are present. Store failures are logged and
    /// leave the session signed out.
    #[instrument(skip_all)]
    pub fn init(&self) {
        let next = match self.load() {
            Ok(Some((user, tokens))) => {
                debug!(user_id = user.id, "restored session");
                AuthState::signed_in(user, tokens)
            }
            Ok(None) => AuthState::signed_out(),
            Err(e) => {
                warn!("failed to restore session: {e:#}");
                AuthState::signed_out()
            }
        };
        self.state.send_replace(next);
    }

    fn load(&self) -> Result<Option<(User, AuthTokens)>> {
        let token = self.store.get(ACCESS_TOKEN_KEY)?;
        let profile = self.store.get(USER_KEY)?;
        let (Some(access_token), Some(profile)) = (token, profile) else {
            return Ok(None);
        };
        if access_token.is_empty() {
            return Ok(None);
        }
        let user: User = serde_json::from_str(&profile).context("cached profile is corrupt")?;
        Ok(Some((
            user,
            AuthTokens {
                access_token,
                refresh_token: None,
            },
        )))
    }

    /// Signs in and persists the credential.
    ///
    /// The token is written before the profile and removed again if the
    /// profile cannot be stored. On failure the state is left as it was.
    ///
    /// # Errors
    ///
    /// - The API call fails or the credentials are refused.
    /// - The store cannot persist the credential.
    #[instrument(skip_all)]
    pub async fn sign_in<A: LocalAuthApi>(
        &self,
        api: &A,
        data: &SignInData,
    ) -> Result<User, ApiError> {
        let response = api.sign_in(data).await?;
        self.persist(&response.user, &response.tokens.access_token)
            .map_err(ApiError::Store)?;
        info!(user_id = response.user.id, "signed in");
        self.state
            .send_replace(AuthState::signed_in(response.user.clone(), response.tokens));
        Ok(response.user)
    }

    /// Registers an account. The session state does not change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the form is rejected.
    #[instrument(skip_all)]
    pub async fn sign_up<A: LocalAuthApi>(
        &self,
        api: &A,
        data: &SignUpData,
    ) -> Result<MessageResponse, ApiError> {
        api.sign_up(data).await
    }

    /// Deletes the credential and profile, then signs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot delete a key. The state is
    /// signed out regardless.
    #[instrument(skip_all)]
    pub fn sign_out(&self) -> Result<()> {
        let result = self.clear();
        self.state.send_replace(AuthState::signed_out());
        info!("signed out");
        result
    }

    /// Replaces the cached profile, keeping the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be serialized or stored.
    #[instrument(skip_all)]
    pub fn update_user(&self, user: User) -> Result<()> {
        let profile = serde_json::to_string(&user).context("failed to encode profile")?;
        self.store.set(USER_KEY, &profile)?;
        self.state.send_modify(|state| state.user = Some(user));
        Ok(())
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Whether a credential and profile are held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    /// Signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    fn persist(&self, user: &User, access_token: &str) -> Result<()> {
        let profile = serde_json::to_string(user).context("failed to encode profile")?;
        self.store.set(ACCESS_TOKEN_KEY, access_token)?;
        if let Err(e) = self.store.set(USER_KEY, &profile) {
            // A token without a profile must not outlive a failed sign-in.
            if let Err(rollback) = self.store.delete(ACCESS_TOKEN_KEY) {
                warn!("failed to roll back access token: {rollback:#}");
            }
            return Err(e.context("failed to store profile"));
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let token = self.store.delete(ACCESS_TOKEN_KEY);
        let profile = self.store.delete(USER_KEY);
        token.and(profile)
    }
}

impl CredentialSource for Session {
    fn access_token(&self) -> Option<String> {
        match self.store.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("failed to read access token: {e:#}");
                None
            }
        }
    }
}

impl ClientEventListener for Session {
    fn on_event(&self, event: ClientEvent) {
        match event {
            ClientEvent::CredentialRejected => {
                if let Err(e) = self.clear() {
                    warn!("failed to clear rejected credential: {e:#}");
                }
                self.state.send_replace(AuthState::signed_out());
                warn!("credential rejected, signed out");
            }
        }
    }
}
