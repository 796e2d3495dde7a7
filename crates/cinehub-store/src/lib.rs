//! Key-value storage for session secrets.
//!
//! Holds the bearer token and the cached user profile between runs.
//! `SqliteStore` persists to a private `SQLite` file; `MemoryStore`
//! keeps everything in process memory.

mod connection;
mod dirs;
mod kv;
mod memory;
mod migrations;

#[allow(clippy::module_name_repetitions)]
pub use connection::{open_db, resolve_db_path};
pub use dirs::app_dir;
pub use kv::{ACCESS_TOKEN_KEY, KeyValueStore, SqliteStore, USER_KEY};
#[allow(clippy::module_name_repetitions)]
pub use memory::MemoryStore;
