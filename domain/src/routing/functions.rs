//! Function declarations offered to the model by the supporter agent

use crate::completion::request::FunctionSpec;
use serde_json::json;

/// Name of the weather function
pub const WEATHER_FUNCTION: &str = "get_weather";

/// Name of the forex function
pub const FOREX_FUNCTION: &str = "get_forex";

/// Declaration of `get_weather`.
pub fn weather_function() -> FunctionSpec {
    FunctionSpec::new(
        WEATHER_FUNCTION,
        "Get current weather information or forecast for a specific location",
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The city or location to get weather for"
                },
                "query_type": {
                    "type": "string",
                    "enum": ["current", "forecast"],
                    "description": "Whether to get current weather or forecast"
                }
            },
            "required": ["location"]
        }),
    )
}

/// Declaration of `get_forex`.
pub fn forex_function() -> FunctionSpec {
    FunctionSpec::new(
        FOREX_FUNCTION,
        "Get currency exchange rates or convert between currencies. Use this for ANY \
         currency-related queries including USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY, RUB, etc.",
        json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["convert", "rate"],
                    "description": "Whether to convert currency or get exchange rate"
                },
                "from_currency": {
                    "type": "string",
                    "description": "Source currency code (USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY, RUB, etc.)"
                },
                "to_currency": {
                    "type": "string",
                    "description": "Target currency code (USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY, RUB, etc.)"
                },
                "amount": {
                    "type": "number",
                    "description": "Amount to convert (required for conversion)"
                }
            },
            "required": ["action", "from_currency", "to_currency"]
        }),
    )
}

/// All functions the supporter declares, in declaration order.
pub fn supporter_functions() -> Vec<FunctionSpec> {
    vec![weather_function(), forex_function()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supporter_functions_order() {
        let names: Vec<_> = supporter_functions().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["get_weather", "get_forex"]);
    }

    #[test]
    fn test_forex_schema_requires_currencies() {
        let spec = forex_function();
        let required = spec.parameter_schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        assert!(required.iter().any(|v| v == "from_currency"));
    }
}
