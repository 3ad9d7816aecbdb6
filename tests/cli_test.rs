//! Runs the compiled binary and checks stdout and exit codes.

use std::process::Output;

use tokio::process::Command;

mod common;
use common::{report, row};

async fn run_plugin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check_haproxy"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn test_missing_hostname() {
    let output = run_plugin(&["-p", "8080"]).await;
    assert_eq!(output.status.code(), Some(3));

    let out = stdout(&output);
    assert!(out.starts_with("UNKNOWN: Missing required parameter hostname\n"));
    assert!(out.contains("--hostname"));
}

#[tokio::test]
async fn test_missing_port() {
    let output = run_plugin(&["-H", "127.0.0.1"]).await;
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).starts_with("UNKNOWN: Missing required parameter port\n"));
}

#[tokio::test]
async fn test_unknown_flag_is_unknown_not_critical() {
    let output = run_plugin(&["-H", "lb1", "-p", "80", "--bogus"]).await;
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).starts_with("UNKNOWN: "));
}

#[tokio::test]
async fn test_critical_exit_code() {
    let body = report(&[row("web", "srv1", "UP 3/3"), row("web", "srv2", "DOWN")]);
    let addr = common::start_mock_haproxy(body).await;
    let port = addr.port().to_string();

    let output = run_plugin(&["-H", "127.0.0.1", "-p", &port]).await;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "HAPROXY CRITICAL - web (Active: 1/2) \n");
}

#[tokio::test]
async fn test_ok_exit_code() {
    let body = report(&[row("api", "FRONTEND", "OPEN"), row("api", "BACKEND", "OPEN")]);
    let addr = common::start_mock_haproxy(body).await;
    let port = addr.port().to_string();

    let output = run_plugin(&["--hostname", "127.0.0.1", "--port", &port, "--uri", "stats"]).await;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "HAPROXY OK - api (Active: 0/0) \n");
}

#[tokio::test]
async fn test_connection_refused_exit_code() {
    let addr = common::closed_port().await;
    let port = addr.port().to_string();

    let output = run_plugin(&["-H", "127.0.0.1", "-p", &port]).await;
    assert_eq!(output.status.code(), Some(3));

    let out = stdout(&output);
    assert!(out.starts_with("HAPROXY UNKNOWN ERROR: "));
    assert_eq!(out.lines().count(), 1);
}

#[tokio::test]
async fn test_config_file_supplies_target() {
    let body = report(&[row("web", "srv1", "UP")]);
    let addr = common::start_mock_haproxy(body).await;

    let path = std::env::temp_dir().join(format!("check_haproxy_{}.toml", addr.port()));
    std::fs::write(
        &path,
        format!("[target]\nhostname = \"127.0.0.1\"\nport = {}\n\n[http]\ntimeout_secs = 5\n", addr.port()),
    )
    .unwrap();

    let output = run_plugin(&["-c", path.to_str().unwrap()]).await;
    let _ = std::fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "HAPROXY OK - web (Active: 1/1) \n");
}

#[tokio::test]
async fn test_unreadable_config_file() {
    let output = run_plugin(&["-c", "/nonexistent/check_haproxy.toml", "-H", "lb1", "-p", "80"]).await;
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).starts_with("UNKNOWN: cannot read config file"));
}
