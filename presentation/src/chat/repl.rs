//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use super::session::ChatSession;
use crate::{ConsoleFormatter, ProgressReporter, ReplConfig};
use playground_application::{AgentCatalog, DialogStore};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::warn;

/// Interactive chat REPL
pub struct ChatRepl {
    catalog: AgentCatalog,
    session: ChatSession,
    store: Option<Arc<dyn DialogStore>>,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl around an existing session
    pub fn new(catalog: AgentCatalog, session: ChatSession) -> Self {
        Self {
            catalog,
            session,
            store: None,
            config: ReplConfig::default(),
        }
    }

    /// Enable the dialog commands and autosave
    pub fn with_store(mut self, store: Arc<dyn DialogStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!(
            "{}",
            ConsoleFormatter::welcome(self.session.agent().name(), self.session.dialog_id())
        );

        loop {
            let prompt = format!("{}> ", self.session.agent().name());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => println!("\n{}\n", ReplCommand::help_text()),
            ReplCommand::Agents => {
                println!(
                    "\n{}",
                    ConsoleFormatter::format_agents(&self.catalog, self.session.agent().name())
                );
            }
            ReplCommand::Agent(None) => println!("Current agent: {}", self.session.agent().name()),
            ReplCommand::Agent(Some(name)) => match self.catalog.get(&name) {
                Some(agent) => {
                    self.session.set_agent(agent);
                    println!("Switched to {}", self.session.agent().name());
                }
                None => println!(
                    "Unknown agent: {} (available: {})",
                    name,
                    self.catalog.names().join(", ")
                ),
            },
            ReplCommand::New => {
                self.save_session();
                self.session.reset();
                println!("Started a new dialog.");
            }
            ReplCommand::Dialogs => self.with_dialogs(|store| {
                store
                    .list()
                    .map(|dialogs| print!("{}", ConsoleFormatter::format_dialogs(&dialogs)))
            }),
            ReplCommand::Load(id) => self.load(&id),
            ReplCommand::Delete(id) => self.with_dialogs(|store| {
                store.delete(&id).map(|deleted| {
                    if deleted {
                        println!("Deleted {}", id);
                    } else {
                        println!("No dialog named {}", id);
                    }
                })
            }),
            ReplCommand::Info => self.info(),
            ReplCommand::MissingArgument(usage) => println!("Usage: {}", usage),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn with_dialogs(
        &self,
        action: impl FnOnce(&dyn DialogStore) -> Result<(), playground_application::DialogError>,
    ) {
        match &self.store {
            Some(store) => {
                if let Err(e) = action(store.as_ref()) {
                    eprintln!("{}", ConsoleFormatter::format_error(&e));
                }
            }
            None => println!("Dialog storage is not available."),
        }
    }

    fn load(&mut self, id: &str) {
        let Some(store) = self.store.clone() else {
            println!("Dialog storage is not available.");
            return;
        };
        match store.load(id) {
            Ok(Some(conversation)) => {
                let turns = conversation.len();
                let agent = Arc::clone(self.session.agent());
                self.session = ChatSession::resume(agent, id, conversation);
                println!("Loaded {} ({} turns)", id, turns);
                for turn in self.session.conversation().turns() {
                    print!("{}", ConsoleFormatter::format_reply(turn));
                }
            }
            Ok(None) => println!("No dialog named {}", id),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
        }
    }

    fn info(&self) {
        match self.session.dialog_id() {
            Some(id) => self.with_dialogs(|store| {
                store.info(id).map(|summary| match summary {
                    Some(summary) => print!("{}", ConsoleFormatter::format_summary(&summary)),
                    None => println!(
                        "Dialog {} is not saved yet ({} turns in memory)",
                        id,
                        self.session.conversation().len()
                    ),
                })
            }),
            None => println!(
                "Unsaved dialog with {} turns",
                self.session.conversation().len()
            ),
        }
    }

    fn save_session(&mut self) {
        let Some(store) = self.store.clone() else {
            return;
        };
        match self.session.save(store.as_ref()) {
            Ok(Some(id)) => println!("Saved dialog {}", id),
            Ok(None) => {}
            Err(e) => {
                warn!("Failed to save dialog: {}", e);
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
    }

    async fn process_message(&mut self, message: &str) {
        println!();

        let progress =
            ProgressReporter::start_if(self.config.show_progress, self.session.agent().name());
        match self.session.ask(message).await {
            Ok(reply) => {
                progress.finish();
                println!("{}", ConsoleFormatter::format_reply(reply));
                if self.config.autosave
                    && let Some(store) = self.store.clone()
                    && let Err(e) = self.session.save(store.as_ref())
                {
                    warn!("Autosave failed: {}", e);
                }
            }
            Err(e) => {
                progress.fail();
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
        println!();
    }
}
