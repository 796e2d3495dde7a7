//! Per-user application directories.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory name used under the XDG base directories.
const APP_DIR_NAME: &str = "cinehub";

/// Resolves the `cinehub` directory under an XDG base directory.
///
/// Uses `$<xdg_var>` when it holds an absolute path, otherwise
/// `$HOME/<home_fallback>`.
///
/// # Errors
///
/// Returns an error if neither variable yields a usable base directory.
pub fn app_dir(xdg_var: &str, home_fallback: &str) -> Result<PathBuf> {
    app_dir_from(
        std::env::var_os(xdg_var),
        std::env::var_os("HOME"),
        Path::new(home_fallback),
    )
    .with_context(|| format!("cannot resolve directory from {xdg_var} or HOME"))
}

fn app_dir_from(
    xdg_base: Option<OsString>,
    home: Option<OsString>,
    home_fallback: &Path,
) -> Result<PathBuf> {
    // Relative XDG values are invalid and ignored.
    let base = match xdg_base.map(PathBuf::from).filter(|p| p.is_absolute()) {
        Some(base) => base,
        None => {
            let home = home
                .filter(|h| !h.is_empty())
                .context("HOME environment variable is not set")?;
            PathBuf::from(home).join(home_fallback)
        }
    };
    Ok(base.join(APP_DIR_NAME))
}
