//! Fetches one task detail page from a live backend.
//!
//! Usage:
//!
//! ```text
//! task-detail [--backend URL] [--timeout SECS] [--format html|json] <route>
//! ```
//!
//! `route` is a dashboard path such as `/allocations/{allocation_id}/{task_name}`.
//! The rendered page (HTML) or the view-model (JSON) is written to stdout.
//! Lookup failures still render the error page; the process then exits with
//! status 1.

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use task_detail::{
    allocation::{
        adapters::{
            html::{PageRenderer, RenderError},
            http::HttpAllocationSource,
        },
        domain::{AllocationDomainError, TaskRoute},
        ports::AllocationSourceError,
        services::{TaskDetailService, TaskDetailSession, ViewState},
    },
    config::{BACKEND_URL_ENV, BackendConfig, ConfigError, TIMEOUT_SECS_ENV},
    telemetry,
};
use thiserror::Error;
use tokio::runtime::Builder;

/// Output format for the fetched page.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Rendered HTML fragment.
    Html,
    /// View-model as JSON.
    Json,
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "task-detail", version, about = "Render a task detail page")]
struct Cli {
    /// Dashboard route, e.g. `/allocations/<id>/<task>`.
    route: String,

    /// Backend base URL.
    #[arg(long, env = BACKEND_URL_ENV)]
    backend: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = TIMEOUT_SECS_ENV)]
    timeout: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Enable debug logging for this crate.
    #[arg(short, long)]
    verbose: bool,
}

/// Errors that stop the command before a page is produced.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Route(#[from] AllocationDomainError),
    #[error(transparent)]
    Source(#[from] AllocationSourceError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to serialize view-model: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "task-detail failed");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the page resolved successfully.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let config = BackendConfig::from_values(cli.backend.as_deref(), cli.timeout.as_deref())?;
    let route = TaskRoute::parse(&cli.route)?;
    let source = HttpAllocationSource::new(&config)?;
    let mut session = TaskDetailSession::new(TaskDetailService::new(Arc::new(source)));

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    let state = runtime.block_on(session.visit(route));

    let output = match cli.format {
        OutputFormat::Html => PageRenderer::new()?.render(state)?,
        OutputFormat::Json => json_output(state)?,
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").map_err(CliError::Output)?;

    Ok(state.view().is_some())
}

fn json_output(state: &ViewState) -> Result<String, CliError> {
    let value = match state {
        ViewState::Ready { view, .. } => serde_json::to_value(view.as_ref())?,
        ViewState::Error { route, error } => serde_json::json!({
            "error": {
                "title": error.title(),
                "lookup": error.lookup(),
                "message": error.to_string(),
                "url": route.path(),
            }
        }),
        ViewState::Idle | ViewState::Loading { .. } => serde_json::Value::Null,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
