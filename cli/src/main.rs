//! CLI entrypoint for Agent Playground
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use playground_application::{
    AgentCatalog, CompletionClient, ConversationLogger, DialogStore, EchoAgent,
    NoConversationLogger, SimpleChatAgent, SupporterAgent,
};
use playground_infrastructure::{
    ConfigLoader, FileConfig, ForexDesk, JsonDialogStore, JsonlConversationLogger, OpenAiTransport,
    WeatherDesk,
};
use playground_presentation::{
    ChatRepl, ChatSession, Cli, ConsoleFormatter, ProgressReporter, ReplConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Variables already set in the environment take precedence over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref());

    info!("Starting Agent Playground");

    for issue in config.validate() {
        warn!("Config issue: {}", issue);
        eprintln!("warning: {}", issue);
    }

    // === Dependency Injection ===
    let conversation_logger = conversation_logger(&config);
    let catalog = build_catalog(&config, conversation_logger)?;
    let store = open_store(&config);

    let agent_name = cli
        .agent
        .as_deref()
        .unwrap_or(&config.repl.default_agent);
    let agent = match catalog.get(agent_name) {
        Some(agent) => agent,
        None => bail!(
            "Unknown agent '{}'. Available: {}",
            agent_name,
            catalog.names().join(", ")
        ),
    };

    let mut session = match &cli.dialog {
        Some(id) => {
            let store = store
                .as_ref()
                .context("Dialog storage is not available")?;
            let conversation = store
                .load(id)?
                .with_context(|| format!("No dialog named {}", id))?;
            ChatSession::resume(agent, id.as_str(), conversation)
        }
        None => ChatSession::new(agent),
    };

    // Single question mode
    if let Some(question) = cli.question {
        let progress = ProgressReporter::start_if(!cli.quiet, session.agent().name());
        match session.ask(&question).await {
            Ok(reply) => {
                progress.finish();
                println!("{}", ConsoleFormatter::format_reply(reply));
            }
            Err(e) => {
                progress.fail();
                return Err(e.into());
            }
        }

        if config.dialogs.autosave
            && let Some(store) = &store
            && let Some(id) = session.save(store.as_ref())?
            && !cli.quiet
        {
            eprintln!("Saved as dialog {}", id);
        }
        return Ok(());
    }

    // Chat mode
    let repl_config = ReplConfig {
        show_progress: !cli.quiet,
        autosave: config.dialogs.autosave,
        history_file: config.repl.history_file.as_ref().map(PathBuf::from),
    };
    let mut repl = ChatRepl::new(catalog, session).with_config(repl_config);
    if let Some(store) = store {
        repl = repl.with_store(store);
    }
    repl.run().await?;

    Ok(())
}

/// Install the stderr subscriber and, when configured, a file writer.
///
/// The returned guard flushes the file writer on drop.
fn init_tracing(verbose: u8, log_file: Option<&str>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file.map(Path::new).map(open_log_file) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            eprintln!("warning: {:#}; logging to stderr only", e);
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Open `path` for the diagnostic log, creating its directory.
fn open_log_file(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "agent-playground.log".to_string());

    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .logging
        .conversation_log
        .as_deref()
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Writing conversation log to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

fn build_catalog(
    config: &FileConfig,
    logger: Arc<dyn ConversationLogger>,
) -> Result<AgentCatalog> {
    let transport = Arc::new(OpenAiTransport::new(config.openai.to_transport_settings())?);
    let client = Arc::new(
        CompletionClient::new(transport, config.openai.to_completion_settings())
            .with_conversation_logger(logger.clone()),
    );

    let supporter = SupporterAgent::new(
        client.clone(),
        Arc::new(WeatherDesk::new()),
        Arc::new(ForexDesk::new()),
    )
    .with_conversation_logger(logger.clone());
    let chat = SimpleChatAgent::new(client).with_conversation_logger(logger.clone());
    let echo = EchoAgent::new().with_conversation_logger(logger);

    Ok(AgentCatalog::new()
        .register(Arc::new(supporter))
        .register(Arc::new(chat))
        .register(Arc::new(echo)))
}

fn open_store(config: &FileConfig) -> Option<Arc<dyn DialogStore>> {
    match JsonDialogStore::new(&config.dialogs.directory) {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            warn!(
                "Dialog storage unavailable at {}: {}",
                config.dialogs.directory, e
            );
            None
        }
    }
}
