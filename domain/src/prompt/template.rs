//! Prompt templates for the supporter flow

/// Templates for the system prompts sent with each completion request
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the routing request.
    ///
    /// Describes both declared functions and the routing rules the model is
    /// expected to follow. The forex rules are stated first and repeated in
    /// the examples because the model tends to pick `get_weather` for short
    /// currency questions.
    pub fn routing_system() -> &'static str {
        r#"You are a helpful personal assistant that can help with any question.
You have access to specialized functions for weather and forex information.

CRITICAL RULES:
1. ANY mention of currency codes (USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY, RUB, etc.) → use get_forex
2. ANY mention of "rate", "convert", "exchange", "currency" → use get_forex
3. ANY mention of weather, temperature, forecast → use get_weather
4. For all other questions, respond directly as a helpful assistant.

Available functions:
- get_weather: For weather queries (current weather or forecasts)
- get_forex: For currency conversion and exchange rates (including questions about euros, dollars, pounds, etc.)

Examples:
- "100 euros in usd" → use get_forex
- "convert 50 dollars to euros" → use get_forex
- "exchange rate for USD to EUR" → use get_forex
- "rub to eur rate" → use get_forex
- "usd to gbp" → use get_forex
- "weather in London" → use get_weather
- "temperature in Tokyo" → use get_weather

If the user's query doesn't clearly match weather or forex, respond as a general assistant."#
    }

    /// System prompt for the general-question path (no functions declared).
    pub fn general_system() -> &'static str {
        r#"You are a helpful personal assistant that can help with any question.
You can provide information, answer questions, and help with various tasks.
Be friendly, informative, and helpful in your responses."#
    }
}
