//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for agent-playground
#[derive(Parser, Debug)]
#[command(name = "agent-playground")]
#[command(author, version, about = "Chat with a function-routing assistant backed by an OpenAI-compatible model")]
#[command(long_about = r#"
Agent Playground lets you chat with small agents over an OpenAI-compatible
chat completions endpoint.

Agents:
  supporter  Routes each message: direct answer, weather desk, or forex desk
  chat       Plain chat completion with the whole conversation
  echo       Repeats your last message (no network)

Without a question the interactive REPL starts; with one, a single
exchange is run and printed.

Configuration files are loaded from (in priority order):
1. PLAYGROUND_* and OPENAI_MODEL / OPENAI_TEMPERATURE / OPENAI_MAX_TOKENS
2. --config <path>     Explicit config file
3. ./playground.toml   Project-level config
4. ~/.config/agent-playground/config.toml   Global config

Example:
  agent-playground "What's the weather in Tokyo?"
  agent-playground --agent chat "Tell me a joke"
  agent-playground --dialog 20250101_120000
"#)]
pub struct Cli {
    /// Question for a single exchange (omit to start the REPL)
    pub question: Option<String>,

    /// Agent to talk to (supporter, chat, echo)
    #[arg(short, long, value_name = "NAME")]
    pub agent: Option<String>,

    /// Continue a saved dialog
    #[arg(short, long, value_name = "ID")]
    pub dialog: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
