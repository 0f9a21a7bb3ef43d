use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn graft_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("graft"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    graft_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL gateway"));
}

#[test]
fn test_version() {
    graft_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graft"));
}

#[test]
fn test_unknown_subcommand() {
    graft_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_missing_config_file_error() {
    graft_cmd()
        .args(["--config", "/nonexistent/graft.yml", "sdl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_sdl_lists_schema_types() {
    graft_cmd()
        .arg("sdl")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("type User")
                .and(predicate::str::contains("type Company"))
                .and(predicate::str::contains("addUser"))
                .and(predicate::str::contains("deleteUser"))
                .and(predicate::str::contains("editUser")),
        );
}

// =============================================================================
// One-shot queries
// =============================================================================

#[test]
fn test_query_unreachable_backend_prints_error_envelope() {
    // Nothing listens on this port; the envelope must carry the failure
    // instead of the process crashing.
    graft_cmd()
        .args(["--backend-url", "http://127.0.0.1:9"])
        .args(["query", "{ user { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_query_invalid_document_prints_error_envelope() {
    graft_cmd()
        .args(["query", "{ user {"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_config_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("graft.yml");
    std::fs::write(&config_path, "server:\n  port: 5050\n").unwrap();

    graft_cmd()
        .args(["--config", config_path.to_str().unwrap(), "sdl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"));
}

#[test]
fn test_invalid_config_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("graft.yml");
    std::fs::write(&config_path, "server: [not, a, mapping\n").unwrap();

    graft_cmd()
        .args(["--config", config_path.to_str().unwrap(), "sdl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
