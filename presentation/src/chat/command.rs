//! Slash commands understood by the REPL

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// List the available agents
    Agents,
    /// Switch agent; `None` shows the current one
    Agent(Option<String>),
    /// Save the current dialog and start a fresh one
    New,
    Dialogs,
    Load(String),
    Delete(String),
    /// Show metadata for the current dialog
    Info,
    Quit,
    /// A command that needs an argument was given none
    MissingArgument(&'static str),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary chat input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };
        let arg = arg.map(str::to_string);

        let command = match name.to_lowercase().as_str() {
            "help" | "h" | "?" => Self::Help,
            "agents" => Self::Agents,
            "agent" => Self::Agent(arg),
            "new" => Self::New,
            "dialogs" => Self::Dialogs,
            "load" => arg.map_or(Self::MissingArgument("/load <id>"), Self::Load),
            "delete" => arg.map_or(Self::MissingArgument("/delete <id>"), Self::Delete),
            "info" => Self::Info,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        };
        Some(command)
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /help, /h, /?      - Show this help
  /agents            - List available agents
  /agent [name]      - Show or switch the current agent
  /new               - Save this dialog and start a new one
  /dialogs           - List saved dialogs
  /load <id>         - Load a saved dialog
  /delete <id>       - Delete a saved dialog
  /info              - Show details of the current dialog
  /quit, /exit, /q   - Exit chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(ReplCommand::parse("what's the weather?"), None);
        assert_eq!(ReplCommand::parse(""), None);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/?"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/agents"), Some(ReplCommand::Agents));
        assert_eq!(ReplCommand::parse("/NEW"), Some(ReplCommand::New));
        assert_eq!(ReplCommand::parse(" /dialogs "), Some(ReplCommand::Dialogs));
        assert_eq!(ReplCommand::parse("/info"), Some(ReplCommand::Info));
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
    }

    #[test]
    fn test_agent_argument_is_optional() {
        assert_eq!(ReplCommand::parse("/agent"), Some(ReplCommand::Agent(None)));
        assert_eq!(
            ReplCommand::parse("/agent  chat "),
            Some(ReplCommand::Agent(Some("chat".to_string())))
        );
    }

    #[test]
    fn test_dialog_arguments() {
        assert_eq!(
            ReplCommand::parse("/load 20250101_120000"),
            Some(ReplCommand::Load("20250101_120000".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/delete trip"),
            Some(ReplCommand::Delete("trip".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/load"),
            Some(ReplCommand::MissingArgument("/load <id>"))
        );
        assert_eq!(
            ReplCommand::parse("/delete   "),
            Some(ReplCommand::MissingArgument("/delete <id>"))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/models"),
            Some(ReplCommand::Unknown("/models".to_string()))
        );
    }
}
