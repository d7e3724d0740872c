//! Registry of the agents a front end can switch between.

use super::Agent;
use std::sync::Arc;

/// Ordered set of agents. The first registered agent is the default.
#[derive(Clone, Default)]
pub struct AgentCatalog {
    agents: Vec<Arc<dyn Agent>>,
}

impl AgentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent. A later agent with the same name replaces the earlier one.
    pub fn register(mut self, agent: Arc<dyn Agent>) -> Self {
        match self
            .agents
            .iter()
            .position(|a| a.name().eq_ignore_ascii_case(agent.name()))
        {
            Some(index) => self.agents[index] = agent,
            None => self.agents.push(agent),
        }
        self
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Agent>> {
        self.agents
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
            .cloned()
    }

    pub fn default_agent(&self) -> Option<Arc<dyn Agent>> {
        self.agents.first().cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Agent>> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::echo::EchoAgent;
    use crate::use_cases::complete::CompletionError;
    use async_trait::async_trait;
    use playground_domain::Conversation;

    struct Named(&'static str);

    #[async_trait]
    impl Agent for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test agent"
        }

        async fn chat(&self, conversation: Conversation) -> Result<Conversation, CompletionError> {
            Ok(conversation)
        }
    }

    #[test]
    fn test_first_registered_is_default() {
        let catalog = AgentCatalog::new()
            .register(Arc::new(Named("supporter")))
            .register(Arc::new(EchoAgent::new()));

        assert_eq!(catalog.default_agent().unwrap().name(), "supporter");
        assert_eq!(catalog.names(), vec!["supporter", "echo"]);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = AgentCatalog::new().register(Arc::new(EchoAgent::new()));
        assert!(catalog.get("ECHO").is_some());
        assert!(catalog.get(" echo ").is_some());
        assert!(catalog.get("weather").is_none());
    }

    #[test]
    fn test_same_name_replaces() {
        let catalog = AgentCatalog::new()
            .register(Arc::new(Named("echo")))
            .register(Arc::new(EchoAgent::new()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("echo").unwrap().description(), EchoAgent::new().description());
    }

    #[test]
    fn test_empty_catalog_has_no_default() {
        assert!(AgentCatalog::new().default_agent().is_none());
        assert!(AgentCatalog::new().is_empty());
    }
}
