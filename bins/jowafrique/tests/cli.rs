//! End-to-end tests of the command line surface

use assert_cmd::Command;
use predicates::prelude::*;
use std::net::TcpListener;

/// A local URL nothing listens on
fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn jowafrique(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jowafrique").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("JOWAFRIQUE_API_URL")
        .env_remove("JOWAFRIQUE_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    jowafrique(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plans"))
        .stdout(predicate::str::contains("favorites"))
        .stdout(predicate::str::contains("shopping"));
}

#[test]
fn test_rating_out_of_range_rejected() {
    let dir = tempfile::tempdir().unwrap();
    jowafrique(&dir)
        .args(["meals", "rate", "1", "9"])
        .assert()
        .failure();
}

#[test]
fn test_budget_requires_optimize() {
    let dir = tempfile::tempdir().unwrap();
    jowafrique(&dir)
        .args(["shopping", "1", "--budget", "50"])
        .assert()
        .failure();
}

#[test]
fn test_unreachable_backend_reports_connectivity() {
    let dir = tempfile::tempdir().unwrap();
    jowafrique(&dir)
        .args(["--api-url", &closed_url(), "plans", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serveur non disponible"));
}

#[test]
fn test_unreachable_backend_json_envelope() {
    let dir = tempfile::tempdir().unwrap();
    jowafrique(&dir)
        .args(["--format", "json", "--api-url", &closed_url(), "stats"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("Serveur non disponible"));
}

#[test]
fn test_env_url_used_when_no_flag() {
    let dir = tempfile::tempdir().unwrap();
    jowafrique(&dir)
        .env("JOWAFRIQUE_API_URL", closed_url())
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serveur non disponible"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    jowafrique(&dir)
        .args(["--config", "absent.toml", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_config_file_url_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("jowafrique.toml"),
        format!("[api]\nbase_url = \"{}\"\n", closed_url()),
    )
    .unwrap();

    jowafrique(&dir)
        .args(["favorites", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serveur non disponible"));
}
