//! Tests for command-line flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_shows_flags_and_version() {
    let t = Test::new();

    t.bare_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--key <ENV_NAME>"))
        .stdout(predicate::str::contains("--key-id <ENV_NAME>"))
        .stdout(predicate::str::contains("GH_KEY_ID"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.bare_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghsecret"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_custom_key_var_names() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .env("REPO_KEY", t.public_key_b64())
        .env("REPO_KEY_ID", &t.key_id)
        .args(["--key", "REPO_KEY", "--key-id", "REPO_KEY_ID"])
        .write_stdin("hello")
        .output()
        .unwrap();

    assert_roundtrip(&t, &output, b"hello");
}

#[test]
fn test_custom_key_var_ignores_default() {
    let t = Test::new();

    // GH_KEY is set, but --key points somewhere else.
    let output = t
        .cmd()
        .args(["--key", "OTHER_KEY"])
        .write_stdin("hello")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "\"OTHER_KEY\"");
}

#[test]
fn test_flags_with_value_var() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .env("K", t.public_key_b64())
        .env("KID", &t.key_id)
        .env("PASSWORD", "hunter2")
        .args(["--key", "K", "--key-id", "KID", "PASSWORD"])
        .output()
        .unwrap();

    assert_roundtrip(&t, &output, b"hunter2");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.bare_cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghsecret"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_completions_do_not_need_config() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .args(["--completions", "fish"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("complete -c ghsecret"));
}

#[test]
fn test_completions_unknown_shell() {
    let t = Test::new();

    t.bare_cmd()
        .args(["--completions", "tcsh"])
        .assert()
        .failure();
}
