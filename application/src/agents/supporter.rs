//! Supporter agent: function-call routing to weather and forex sub-handlers.
//!
//! One `chat()` call runs through these phases:
//!
//! 1. Build a request from the routing system prompt and the user turns only,
//!    declaring `get_weather` and `get_forex` with policy `auto`.
//! 2. Complete it. Upstream and malformed-response errors propagate.
//! 3. [`decide`] what to do with the result:
//!    - text becomes the reply directly
//!    - a weather or forex call is dispatched to its sub-handler with a
//!      synthesized query; only the sub-handler's reply is appended
//!    - unparseable arguments or an unknown function re-ask the question as a
//!      general one, without function declarations

use super::Agent;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::sub_handler::SubHandler;
use crate::use_cases::complete::{CompletionClient, CompletionError};
use async_trait::async_trait;
use playground_domain::{
    CompletionResult, Conversation, DispatchTarget, FunctionPolicy, PromptTemplate, RoutingPhase,
    Turn, decide, supporter_functions,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct SupporterAgent {
    client: Arc<CompletionClient>,
    weather: Arc<dyn SubHandler>,
    forex: Arc<dyn SubHandler>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SupporterAgent {
    pub const NAME: &'static str = "supporter";

    pub fn new(
        client: Arc<CompletionClient>,
        weather: Arc<dyn SubHandler>,
        forex: Arc<dyn SubHandler>,
    ) -> Self {
        Self {
            client,
            weather,
            forex,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    fn enter(&self, phase: RoutingPhase) {
        debug!(agent = Self::NAME, %phase, "routing phase");
    }

    /// System prompt followed by the user turns; other roles are dropped.
    fn prompt_turns(system_prompt: &str, conversation: &Conversation) -> Vec<Turn> {
        std::iter::once(Turn::system(system_prompt))
            .chain(conversation.user_turns().cloned())
            .collect()
    }

    async fn answer_general(&self, conversation: &Conversation) -> Result<Turn, CompletionError> {
        let request = self.client.request(Self::prompt_turns(
            PromptTemplate::general_system(),
            conversation,
        ));
        match self.client.complete(request).await? {
            CompletionResult::Text(text) => Ok(Turn::assistant(text).from_agent(Self::NAME)),
            CompletionResult::FunctionCall(call) => {
                warn!("General request returned function call '{}'", call.name);
                Err(CompletionError::MalformedResponse)
            }
        }
    }

    fn dispatch(&self, handler: &dyn SubHandler, query: String) -> Turn {
        let synthetic = Turn::user(query).from_agent(Self::NAME);
        let reply = handler.respond(&synthetic);
        info!("Sub-handler '{}' answered", handler.name());
        self.conversation_logger.log(ConversationEvent::new(
            "sub_handler_reply",
            json!({
                "handler": handler.name(),
                "query": synthetic.text,
                "reply": reply.text,
            }),
        ));
        reply
    }
}

#[async_trait]
impl Agent for SupporterAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Routes weather and currency questions to specialist helpers"
    }

    async fn chat(&self, conversation: Conversation) -> Result<Conversation, CompletionError> {
        info!(
            "Supporter request with {} turns ({} from user)",
            conversation.len(),
            conversation.user_turns().count()
        );

        self.enter(RoutingPhase::BuildingRequest);
        let request = self
            .client
            .request(Self::prompt_turns(
                PromptTemplate::routing_system(),
                &conversation,
            ))
            .with_functions(supporter_functions(), FunctionPolicy::Auto);

        self.enter(RoutingPhase::AwaitingCompletion);
        let result = self.client.complete(request).await?;

        if result.function_call().is_some() {
            self.enter(RoutingPhase::Correcting);
        }
        let decision = decide(&result, conversation.last_user_text());
        self.conversation_logger.log(ConversationEvent::new(
            "routing_decision",
            json!({
                "agent": Self::NAME,
                "model_function": result.function_call().map(|c| c.name.as_str()),
                "target": decision.target_name(),
                "parameters": decision.parameters(),
                "corrected": decision.corrected,
            }),
        ));
        if decision.corrected {
            info!("Overriding get_weather to get_forex for currency question");
            self.conversation_logger.log(ConversationEvent::new(
                "routing_corrected",
                json!({
                    "from": "get_weather",
                    "to": decision.target_name(),
                    "parameters": decision.parameters(),
                }),
            ));
        }

        let reply = match decision.target {
            DispatchTarget::DirectAnswer(text) => {
                self.enter(RoutingPhase::DirectAnswer);
                Turn::assistant(text).from_agent(Self::NAME)
            }
            DispatchTarget::Weather(params) => {
                self.enter(RoutingPhase::Dispatching);
                self.dispatch(self.weather.as_ref(), params.to_query())
            }
            DispatchTarget::Forex(params) => {
                self.enter(RoutingPhase::Dispatching);
                self.dispatch(self.forex.as_ref(), params.to_query())
            }
            DispatchTarget::FallbackGeneral(reason) => {
                warn!("Falling back to general answer: {}", reason);
                self.enter(RoutingPhase::DirectAnswer);
                self.answer_general(&conversation).await?
            }
        };
        self.enter(RoutingPhase::Done);

        self.conversation_logger.log(ConversationEvent::new(
            "assistant_turn",
            json!({
                "agent": Self::NAME,
                "origin_agent": reply.origin_agent,
                "text": reply.text,
            }),
        ));
        Ok(conversation.with_turn(reply))
    }
}
