//
//  ynab-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tests of the `ynab` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `ynab` command isolated from the user's environment and config file.
fn ynab(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ynab").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("YNAB_ACCESS_TOKEN")
        .env_remove("YNAB_BUDGET")
        .env_remove("YNAB_BASE_URL")
        .env_remove("YNAB_DEBUG");
    cmd
}

#[test]
fn prints_version() {
    let home = TempDir::new().unwrap();
    ynab(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ynab version "));
}

#[test]
fn help_lists_resources() {
    let home = TempDir::new().unwrap();
    ynab(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("transaction"))
        .stdout(predicate::str::contains("category"));
}

#[test]
fn missing_token_is_reported() {
    let home = TempDir::new().unwrap();
    ynab(&home)
        .arg("user")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No access token"));
}

#[test]
fn prints_data_from_the_api() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/budgets/b1/accounts")
        .match_header("authorization", "Bearer t0ken")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"accounts": [{"id": "a1"}], "server_knowledge": 5}}"#)
        .create();

    ynab(&home)
        .args(["account", "list", "--json", "--budget", "b1", "--token", "t0ken"])
        .args(["--base-url", &format!("{}/v1", server.url())])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""server_knowledge":5"#));

    mock.assert();
}

#[test]
fn not_found_sets_exit_code() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/budgets/last-used/transactions/nope")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"id": "404.2", "name": "resource_not_found", "detail": "Resource not found"}}"#)
        .create();

    ynab(&home)
        .args(["transaction", "view", "nope", "--token", "t0ken"])
        .args(["--base-url", &format!("{}/v1", server.url())])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("404 - Resource not found"));
}

#[test]
fn config_round_trip() {
    let home = TempDir::new().unwrap();

    ynab(&home)
        .args(["config", "set", "default_budget", "b42"])
        .assert()
        .success();

    ynab(&home)
        .args(["config", "get", "default_budget"])
        .assert()
        .success()
        .stdout("b42\n");

    ynab(&home)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn configured_budget_is_used() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/budgets/b42/settings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"settings": {}}}"#)
        .create();

    ynab(&home)
        .args(["config", "set", "default_budget", "b42"])
        .assert()
        .success();

    ynab(&home)
        .args(["budget", "settings", "--token", "t0ken"])
        .args(["--base-url", &format!("{}/v1", server.url())])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn single_update_rejects_an_array_without_sending() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("changes.json");
    std::fs::write(&input, r#"[{"memo": "a"}, {"memo": "b"}]"#).unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/v1/budgets/b1/transactions/t1")
        .expect(0)
        .create();

    ynab(&home)
        .args(["transaction", "update", "t1", "--budget", "b1", "--token", "t0ken"])
        .args(["--input", input.to_str().unwrap()])
        .args(["--base-url", &format!("{}/v1", server.url())])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON object"));

    mock.assert();
}
