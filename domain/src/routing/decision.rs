//! Dispatch decision for a single supporter exchange

use super::error::RoutingError;
use super::functions::{FOREX_FUNCTION, WEATHER_FUNCTION};
use super::heuristic::{extract_forex_params, looks_like_forex};
use super::params::{ForexParams, WeatherParams};
use crate::completion::response::CompletionResult;
use serde_json::{Value, json};

/// Where a completion result should be sent
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchTarget {
    /// The model answered directly; the text becomes the reply.
    DirectAnswer(String),
    Weather(WeatherParams),
    Forex(ForexParams),
    /// The function call could not be used; re-ask as a general question.
    FallbackGeneral(RoutingError),
}

/// Outcome of routing one completion result
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchDecision {
    pub target: DispatchTarget,
    /// True when the forex correction overrode a `get_weather` call.
    pub corrected: bool,
}

impl DispatchDecision {
    fn new(target: DispatchTarget) -> Self {
        Self {
            target,
            corrected: false,
        }
    }

    pub fn target_name(&self) -> &'static str {
        match &self.target {
            DispatchTarget::DirectAnswer(_) => "direct_answer",
            DispatchTarget::Weather(_) => WEATHER_FUNCTION,
            DispatchTarget::Forex(_) => FOREX_FUNCTION,
            DispatchTarget::FallbackGeneral(_) => "fallback_general",
        }
    }

    /// Resolved parameters as JSON, for logging.
    pub fn parameters(&self) -> Value {
        match &self.target {
            DispatchTarget::DirectAnswer(_) => json!({}),
            DispatchTarget::Weather(p) => json!({
                "location": p.location,
                "query_type": p.query.as_str(),
            }),
            DispatchTarget::Forex(p) => json!({
                "action": p.action.as_str(),
                "from_currency": p.from_currency,
                "to_currency": p.to_currency,
                "amount": p.amount,
            }),
            DispatchTarget::FallbackGeneral(err) => json!({ "reason": err.to_string() }),
        }
    }
}

/// Route a completion result.
///
/// Arguments are resolved first; a `get_weather` call whose arguments resolve
/// is then overridden to forex when `last_user_text` looks like a currency
/// question and names two currencies. Forex calls are never redirected.
pub fn decide(result: &CompletionResult, last_user_text: Option<&str>) -> DispatchDecision {
    let call = match result {
        CompletionResult::Text(text) => {
            return DispatchDecision::new(DispatchTarget::DirectAnswer(text.clone()));
        }
        CompletionResult::FunctionCall(call) => call,
    };

    let args = match call.arguments.resolve() {
        Ok(args) => args,
        Err(e) => {
            return DispatchDecision::new(DispatchTarget::FallbackGeneral(
                RoutingError::ArgumentParse {
                    function: call.name.clone(),
                    message: e.to_string(),
                },
            ));
        }
    };

    match call.name.as_str() {
        WEATHER_FUNCTION => {
            if let Some(text) = last_user_text
                && looks_like_forex(text)
                && let Some(params) = extract_forex_params(text)
            {
                return DispatchDecision {
                    target: DispatchTarget::Forex(params),
                    corrected: true,
                };
            }
            DispatchDecision::new(DispatchTarget::Weather(WeatherParams::from_arguments(&args)))
        }
        FOREX_FUNCTION => {
            DispatchDecision::new(DispatchTarget::Forex(ForexParams::from_arguments(&args)))
        }
        other => DispatchDecision::new(DispatchTarget::FallbackGeneral(
            RoutingError::UnknownFunction(other.to_string()),
        )),
    }
}
