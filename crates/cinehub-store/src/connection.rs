//! Database connection management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::dirs::app_dir;
use super::migrations::run_migrations;

/// Database file name inside the data directory.
const DB_FILE_NAME: &str = "cinehub.db";

/// Opens (or creates) the database and runs migrations.
///
/// The file is restricted to the owning user on unix, since it holds
/// the bearer token.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, its permissions
/// cannot be tightened, or migrations fail.
pub fn open_db(dir: Option<&PathBuf>) -> Result<Connection> {
    let db_path = resolve_db_path(dir)?;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(&db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    restrict_permissions(&db_path)?;
    run_migrations(&conn).context("database migration failed")?;

    tracing::debug!(path = %db_path.display(), "credential store opened");
    Ok(conn)
}

/// Resolves the database file path.
///
/// - If `dir` is `Some`, returns `{dir}/cinehub.db`.
/// - Otherwise returns `$XDG_DATA_HOME/cinehub/cinehub.db`, falling back
///   to `~/.local/share/cinehub/cinehub.db`.
///
/// # Errors
///
/// Returns an error if no data directory can be determined (when `dir` is `None`).
pub fn resolve_db_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(DB_FILE_NAME));
    }
    Ok(app_dir("XDG_DATA_HOME", ".local/share")?.join(DB_FILE_NAME))
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .with_context(|| format!("failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
