//! CLI entrypoint for Imaging Copilot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use imaging_application::{
    BuildImpactInput, BuildImpactUseCase, BuildSummaryInput, BuildSummaryUseCase,
    InspectServerUseCase, NoProgress, RenderReportUseCase, SessionProvider, WorkflowProgress,
};
use imaging_domain::ReportPrompt;
use imaging_infrastructure::{
    AnthropicGateway, ConfigLoader, FileConfig, FileLoggingConfig, McpSessionProvider,
};
use imaging_presentation::{AppState, Cli, Command, ConsoleFormatter, ProgressReporter, serve};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let _log_guard = init_tracing(cli.verbose, &config.logging)?;

    info!("Starting Imaging Copilot");

    match cli.command.clone() {
        Command::ShowConfig => show_config(&cli, &config),
        Command::Tools => list_tools(&cli, &config).await,
        Command::Summary { question, app } => summarize(&cli, &config, question, app).await,
        Command::Impact {
            object,
            question,
            app,
        } => assess_impact(&cli, &config, question, object, app).await,
        Command::Serve { host, port } => run_server(&cli, &config, host, port).await,
    }
}

/// Initialize logging: `-v` count wins, then `RUST_LOG`, then `[logging] level`.
///
/// The returned guard flushes the log file on drop.
fn init_tracing(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(logging.level.as_deref().unwrap_or("warn")))
            .context("Invalid log filter")?,
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

// === Dependency Injection ===

fn session_provider(config: &FileConfig) -> Result<Arc<McpSessionProvider>> {
    let endpoint = config
        .imaging
        .resolve_endpoint()
        .context("Failed to resolve Imaging endpoint")?;
    info!("Imaging endpoint: {:?}", endpoint);
    Ok(Arc::new(McpSessionProvider::new(&endpoint)?))
}

fn build_renderer(config: &FileConfig) -> Result<RenderReportUseCase<AnthropicGateway>> {
    let gateway = AnthropicGateway::from_config(&config.anthropic)
        .context("Failed to configure the Anthropic renderer (use --no-render to skip it)")?;
    Ok(RenderReportUseCase::new(Arc::new(gateway)).with_params(config.anthropic.render_params()))
}

fn progress(cli: &Cli) -> Box<dyn WorkflowProgress> {
    if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    }
}

// === Commands ===

async fn summarize(
    cli: &Cli,
    config: &FileConfig,
    question: String,
    app: Option<String>,
) -> Result<()> {
    let provider = session_provider(config)?;
    let renderer = cli.wants_render().then(|| build_renderer(config)).transpose()?;
    let progress = progress(cli);

    let use_case = BuildSummaryUseCase::new(provider).with_params(config.workflow.to_params());
    let input = BuildSummaryInput::new(question).with_application_hint(app);
    let payload = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let Some(renderer) = renderer else {
        println!("{}", ConsoleFormatter::format_json(&payload));
        return Ok(());
    };

    let report = renderer
        .render(ReportPrompt::summary(&payload), progress.as_ref())
        .await?;
    println!("{}", ConsoleFormatter::format_summary(&payload, &report));
    Ok(())
}

async fn assess_impact(
    cli: &Cli,
    config: &FileConfig,
    question: String,
    object: String,
    app: Option<String>,
) -> Result<()> {
    let provider = session_provider(config)?;
    let renderer = cli.wants_render().then(|| build_renderer(config)).transpose()?;
    let progress = progress(cli);

    let use_case = BuildImpactUseCase::new(provider).with_params(config.workflow.to_params());
    let input = BuildImpactInput::new(question, object).with_application_hint(app);
    let payload = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let Some(renderer) = renderer else {
        println!("{}", ConsoleFormatter::format_json(&payload));
        return Ok(());
    };

    let report = renderer
        .render(ReportPrompt::impact(&payload), progress.as_ref())
        .await?;
    println!("{}", ConsoleFormatter::format_impact(&payload, &report));
    Ok(())
}

async fn list_tools(cli: &Cli, config: &FileConfig) -> Result<()> {
    let provider = session_provider(config)?;
    let progress = progress(cli);

    let inventory = InspectServerUseCase::new(provider)
        .execute_with_progress(progress.as_ref())
        .await?;

    println!("{}", ConsoleFormatter::format_inventory(&inventory));
    Ok(())
}

async fn run_server(
    cli: &Cli,
    config: &FileConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let provider: Arc<dyn SessionProvider> = session_provider(config)?;
    let mut state = AppState::new(provider).with_workflow_params(config.workflow.to_params());

    if cli.no_render {
        warn!("Rendering disabled; responses carry the raw payload");
    } else {
        let gateway = AnthropicGateway::from_config(&config.anthropic)
            .context("Failed to configure the Anthropic renderer (use --no-render to skip it)")?;
        state = state.with_renderer(Arc::new(gateway), config.anthropic.render_params());
    }

    let addr = format!(
        "{}:{}",
        host.unwrap_or_else(|| config.server.host.clone()),
        port.unwrap_or(config.server.port)
    );

    serve(Arc::new(state), &addr)
        .await
        .with_context(|| format!("HTTP server on {} failed", addr))
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    println!("Configuration sources:");
    for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
        println!("  {}", line);
    }

    println!();
    match config.imaging.resolve_endpoint() {
        Ok(endpoint) => {
            println!("Imaging endpoint: {}", endpoint.url);
            for (name, value) in endpoint.redacted_headers() {
                println!("  {}: {}", name, value);
            }
        }
        Err(e) => println!("Imaging endpoint: unresolved ({})", e),
    }

    println!();
    println!("Resolved configuration:");
    println!("{}", config.to_redacted_toml()?);
    Ok(())
}
