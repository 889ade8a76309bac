//! CLI surface smoke tests. No network, no config.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_every_resource() {
    Command::cargo_bin("pdk")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("orders")
                .and(predicate::str::contains("zones"))
                .and(predicate::str::contains("stores"))
                .and(predicate::str::contains("notifications"))
                .and(predicate::str::contains("consumers"))
                .and(predicate::str::contains("users"))
                .and(predicate::str::contains("config-hash")),
        );
}

#[test]
fn orders_advance_requires_an_id() {
    Command::cargo_bin("pdk")
        .unwrap()
        .args(["orders", "advance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("pdk")
        .unwrap()
        .arg("reticulate")
        .assert()
        .failure();
}
