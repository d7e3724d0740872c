//! Console output formatter for agent replies and dialog listings

use colored::Colorize;
use playground_application::{AgentCatalog, DialogSummary};
use playground_domain::{Role, Turn};
use std::error::Error;

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an agent reply, labelled with the agent that produced it
    pub fn format_reply(turn: &Turn) -> String {
        let label = turn.origin_agent.as_deref().unwrap_or(turn.role.as_str());
        let label = match turn.role {
            Role::User => format!("[{}]", label).cyan().bold(),
            _ => format!("[{}]", label).yellow().bold(),
        };
        format!("{}\n{}\n", label, Self::indent(&turn.text, "  "))
    }

    /// Format the agent list, marking the active agent
    pub fn format_agents(catalog: &AgentCatalog, current: &str) -> String {
        let mut output = format!("{}\n", "Agents:".cyan().bold());
        for agent in catalog.iter() {
            let marker = if agent.name().eq_ignore_ascii_case(current) {
                "*".green().bold().to_string()
            } else {
                " ".to_string()
            };
            output.push_str(&format!(
                "  {} {:<10} {}\n",
                marker,
                agent.name(),
                agent.description().dimmed()
            ));
        }
        output
    }

    /// Format saved dialogs, newest first
    pub fn format_dialogs(dialogs: &[DialogSummary]) -> String {
        if dialogs.is_empty() {
            return format!("{}\n", "No saved dialogs.".dimmed());
        }

        let mut output = format!("{}\n", "Saved dialogs:".cyan().bold());
        for dialog in dialogs {
            output.push_str(&format!(
                "  {:<20} {:>3} turns  {}\n",
                dialog.dialog_id,
                dialog.turn_count,
                Self::created(dialog).dimmed()
            ));
        }
        output
    }

    /// Format a single dialog's metadata
    pub fn format_summary(summary: &DialogSummary) -> String {
        format!(
            "{} {}\n{} {}\n{} {}\n{} {}\n",
            "Dialog:".cyan().bold(),
            summary.dialog_id,
            "Created:".cyan().bold(),
            Self::created(summary),
            "Turns:".cyan().bold(),
            summary.turn_count,
            "File:".cyan().bold(),
            summary.location
        )
    }

    /// Format an error with its source chain
    pub fn format_error(err: &dyn Error) -> String {
        let mut output = format!("{} {}", "Error:".red().bold(), err);
        let mut source = err.source();
        while let Some(cause) = source {
            output.push_str(&format!("\n  {} {}", "caused by:".red(), cause));
            source = cause.source();
        }
        output
    }

    /// Welcome banner for the REPL
    pub fn welcome(agent: &str, dialog_id: Option<&str>) -> String {
        let line = "─".repeat(45);
        let mut output = format!(
            "\n{}\n{:^45}\n{}\n\n{} {}\n",
            line.cyan(),
            "Agent Playground - Chat Mode".bold(),
            line.cyan(),
            "Agent:".cyan().bold(),
            agent
        );
        if let Some(id) = dialog_id {
            output.push_str(&format!("{} {}\n", "Dialog:".cyan().bold(), id));
        }
        output.push_str(&format!("\nType {} for commands.\n", "/help".bold()));
        output
    }

    fn created(summary: &DialogSummary) -> String {
        summary
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
