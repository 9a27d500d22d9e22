//! Behavioural tests for the `task-detail` binary.

use eyre::{Result, ensure, eyre};
use serde_json::{Value, json};
use std::process::{Command, Output};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const ALLOCATION_ID: &str = "0d4e7a21-6f3b-4c85-a9d2-3e1f5b7c9a04";

async fn run_cli(args: &[&str]) -> Result<Output> {
    let args: Vec<String> = args.iter().map(|arg| (*arg).to_owned()).collect();
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_task-detail"))
            .args(&args)
            .env_remove("TASK_DETAIL_BACKEND_URL")
            .env_remove("TASK_DETAIL_TIMEOUT_SECS")
            .env_remove("RUST_LOG")
            .output()
    })
    .await
    .map_err(|err| eyre!(err))?
    .map_err(|err| eyre!(err))
}

fn exit_code(output: &Output) -> Result<i32> {
    output
        .status
        .code()
        .ok_or_else(|| eyre!("task-detail terminated without an exit code"))
}

async fn backend_with_allocation() -> MockServer {
    let server = MockServer::start().await;
    let body = json!({
        "ID": ALLOCATION_ID,
        "NodeID": "node-3",
        "Node": { "ID": "node-3", "Name": "client-3", "HTTPAddr": "10.1.2.3:4646" },
        "TaskStates": {
            "api": {
                "State": "running",
                "Events": [
                    {
                        "Type": "Started",
                        "Time": 1_700_000_000_000_000_000_i64,
                        "DisplayMessage": "Task started by client"
                    }
                ]
            }
        },
        "TaskResources": {
            "api": {
                "Networks": [{ "ReservedPorts": [{ "Label": "http", "Value": 8080 }] }]
            }
        }
    });
    Mock::given(method("GET"))
        .and(path(format!("/v1/allocation/{ALLOCATION_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/allocation/not-a-real-allocation"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn resolved_task_renders_html_and_exits_zero() -> Result<()> {
    let server = backend_with_allocation().await;
    let route = format!("/allocations/{ALLOCATION_ID}/api");

    let output = run_cli(&["--backend", &server.uri(), &route]).await?;

    ensure!(exit_code(&output)? == 0, "expected exit status 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(
        stdout.contains("data-test-title"),
        "expected the task title in the rendered page"
    );
    ensure!(
        stdout.contains("data-test-task-addresses"),
        "expected the address table in the rendered page"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn resolved_task_emits_view_model_as_json() -> Result<()> {
    let server = backend_with_allocation().await;
    let route = format!("/allocations/{ALLOCATION_ID}/api");

    let output = run_cli(&["--backend", &server.uri(), "--format", "json", &route]).await?;

    ensure!(exit_code(&output)? == 0, "expected exit status 0");
    let value: Value = serde_json::from_slice(&output.stdout)?;
    ensure!(
        value.pointer("/task/name") == Some(&json!("api")),
        "expected the task name in the view-model, found {value}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_allocation_renders_not_found_and_exits_one() -> Result<()> {
    let server = backend_with_allocation().await;

    let output = run_cli(&[
        "--backend",
        &server.uri(),
        "/allocations/not-a-real-allocation/web",
    ])
    .await?;

    ensure!(exit_code(&output)? == 1, "expected exit status 1");
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(
        stdout.contains("data-test-error-title>Not Found"),
        "expected a Not Found error page, found {stdout}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_allocation_emits_error_object_as_json() -> Result<()> {
    let server = backend_with_allocation().await;

    let output = run_cli(&[
        "--backend",
        &server.uri(),
        "--format",
        "json",
        "/allocations/not-a-real-allocation/web",
    ])
    .await?;

    ensure!(exit_code(&output)? == 1, "expected exit status 1");
    let value: Value = serde_json::from_slice(&output.stdout)?;
    let error = value
        .get("error")
        .ok_or_else(|| eyre!("expected an error object, found {value}"))?;
    ensure!(error.get("title") == Some(&json!("Not Found")), "unexpected title");
    ensure!(error.get("lookup") == Some(&json!("allocation")), "unexpected lookup");
    ensure!(
        error.get("url") == Some(&json!("/allocations/not-a-real-allocation/web")),
        "unexpected url"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_route_exits_two() -> Result<()> {
    let server = backend_with_allocation().await;

    let output = run_cli(&["--backend", &server.uri(), "/jobs/example"]).await?;

    ensure!(exit_code(&output)? == 2, "expected exit status 2");
    ensure!(output.stdout.is_empty(), "expected no page output");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_timeout_exits_two() -> Result<()> {
    let output = run_cli(&[
        "--backend",
        "http://127.0.0.1:9",
        "--timeout",
        "0",
        "/allocations/alloc-1/web",
    ])
    .await?;

    ensure!(exit_code(&output)? == 2, "expected exit status 2");
    Ok(())
}
