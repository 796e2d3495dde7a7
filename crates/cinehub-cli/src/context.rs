//! Wiring shared by every subcommand: config, credential store, session, client.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use cinehub_api::types::User;
use cinehub_api::{ApiClient, Session};
use cinehub_store::{KeyValueStore, SqliteStore};

use crate::config::AppConfig;

/// Client and session built from the config and the persisted store.
#[derive(Debug)]
pub struct AppContext {
    /// Authenticated API client.
    pub client: ApiClient,
    /// Session backing the client's credential.
    pub session: Arc<Session>,
}

impl AppContext {
    /// Loads config, opens the credential store, and restores the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded, the store cannot be
    /// opened, or the client fails to build.
    pub fn load(dir: Option<&PathBuf>, api_url: Option<&str>) -> Result<Self> {
        let config_path = AppConfig::path(dir).context("failed to resolve config path")?;
        let config = AppConfig::load(&config_path).context("failed to load config")?;
        let base_url = config.api.resolve_base_url(api_url)?;

        let store = SqliteStore::open(dir).context("failed to open credential store")?;
        let store: Arc<dyn KeyValueStore> = Arc::new(store);
        let session = Arc::new(Session::new(store));
        session.init();

        let client = ApiClient::builder()
            .base_url(base_url)
            .timeout(config.api.timeout())
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .session(&session)
            .build()
            .context("failed to build API client")?;

        Ok(Self { client, session })
    }

    /// Signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is held.
    pub fn require_user(&self) -> Result<User> {
        self.session
            .user()
            .context("not signed in, run `cinehub auth signin` first")
    }
}
