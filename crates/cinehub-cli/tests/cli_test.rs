#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_top_level_help_lists_resources() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinehub");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movies"))
        .stdout(predicate::str::contains("favorites"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_auth_signin_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinehub");
    cmd.args(["auth", "signin", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--login"));
}

#[test]
fn test_auth_signin_missing_login() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinehub");
    cmd.args(["auth", "signin", "--password", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--login"));
}

#[test]
fn test_movies_show_requires_numeric_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinehub");
    cmd.args(["movies", "show", "heat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_reviews_add_rejects_out_of_range_rating() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinehub");
    cmd.args([
        "reviews", "add", "movie", "7", "--rating", "9", "--content", "great",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--rating"));
}

#[test]
fn test_favorites_add_rejects_unknown_kind() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinehub");
    cmd.args(["favorites", "add", "book", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("book"));
}

#[test]
fn test_lists_add_item_requires_target() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinehub");
    cmd.args(["lists", "add-item", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--movie"));
}

#[test]
fn test_config_init_then_show() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    // Act & Assert
    cargo_bin_cmd!("cinehub")
        .args(["--dir", dir_arg, "config", "init"])
        .env_remove("CINEHUB_API_URL")
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    cargo_bin_cmd!("cinehub")
        .args(["--dir", dir_arg, "config", "init"])
        .env_remove("CINEHUB_API_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cargo_bin_cmd!("cinehub")
        .args(["--dir", dir_arg, "config", "show"])
        .env("CINEHUB_API_URL", "https://staging.cinehub.example")
        .env("RUST_LOG", "info")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://staging.cinehub.example"));
}

#[test]
fn test_whoami_without_session() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    cargo_bin_cmd!("cinehub")
        .args(["--dir", dir.path().to_str().unwrap(), "auth", "whoami"])
        .env("RUST_LOG", "info")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_signout_without_session_succeeds() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    cargo_bin_cmd!("cinehub")
        .args(["--dir", dir.path().to_str().unwrap(), "auth", "signout"])
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .assert()
        .success();
    assert!(dir.path().join("cinehub.db").exists());
}
