//! Typed sub-handler parameters.
//!
//! Function-call arguments are resolved once at the routing boundary into
//! one of these records, with documented defaults for missing fields. The
//! records then synthesize the natural-language query handed to the
//! sub-handler; the sub-handler only ever sees that text.

use serde_json::{Map, Value};

/// Location used when the model did not supply one
pub const DEFAULT_LOCATION: &str = "new york";

/// Currency pair used when the model did not supply one
pub const DEFAULT_FROM_CURRENCY: &str = "USD";
pub const DEFAULT_TO_CURRENCY: &str = "EUR";

/// Current conditions or multi-day forecast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeatherQuery {
    #[default]
    Current,
    Forecast,
}

impl WeatherQuery {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherQuery::Current => "current",
            WeatherQuery::Forecast => "forecast",
        }
    }

    /// Parse a `query_type` argument; anything but "forecast" means current.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("forecast") {
            WeatherQuery::Forecast
        } else {
            WeatherQuery::Current
        }
    }
}

/// Parameters for the weather sub-handler
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherParams {
    pub location: String,
    pub query: WeatherQuery,
}

impl WeatherParams {
    pub fn new(location: impl Into<String>, query: WeatherQuery) -> Self {
        Self {
            location: location.into(),
            query,
        }
    }

    /// Build from resolved `get_weather` arguments, filling defaults.
    pub fn from_arguments(args: &Map<String, Value>) -> Self {
        let location = string_arg(args, "location").unwrap_or(DEFAULT_LOCATION);
        let query = string_arg(args, "query_type")
            .map(WeatherQuery::parse)
            .unwrap_or_default();
        Self::new(location, query)
    }

    /// Natural-language query for the weather sub-handler.
    pub fn to_query(&self) -> String {
        format!(
            "What's the {} weather in {}?",
            self.query.as_str(),
            self.location
        )
    }
}

/// Convert an amount, or just quote the rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForexAction {
    Convert,
    #[default]
    Rate,
}

impl ForexAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForexAction::Convert => "convert",
            ForexAction::Rate => "rate",
        }
    }

    /// Parse an `action` argument; anything but "convert" means rate.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("convert") {
            ForexAction::Convert
        } else {
            ForexAction::Rate
        }
    }
}

/// Parameters for the forex sub-handler
#[derive(Debug, Clone, PartialEq)]
pub struct ForexParams {
    pub action: ForexAction,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: Option<f64>,
}

impl ForexParams {
    pub fn new(
        action: ForexAction,
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        amount: Option<f64>,
    ) -> Self {
        Self {
            action,
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            amount,
        }
    }

    /// Build from resolved `get_forex` arguments, filling defaults.
    ///
    /// `amount` is accepted as a JSON number or a numeric string.
    pub fn from_arguments(args: &Map<String, Value>) -> Self {
        let action = string_arg(args, "action")
            .map(ForexAction::parse)
            .unwrap_or_default();
        let from_currency = string_arg(args, "from_currency").unwrap_or(DEFAULT_FROM_CURRENCY);
        let to_currency = string_arg(args, "to_currency").unwrap_or(DEFAULT_TO_CURRENCY);
        let amount = args.get("amount").and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });
        Self::new(action, from_currency, to_currency, amount)
    }

    /// Natural-language query for the forex sub-handler.
    ///
    /// A conversion needs a non-zero amount; otherwise the rate is asked for.
    pub fn to_query(&self) -> String {
        match (self.action, self.amount) {
            (ForexAction::Convert, Some(amount)) if amount != 0.0 => format!(
                "Convert {} {} to {}",
                amount, self.from_currency, self.to_currency
            ),
            _ => format!(
                "What's the {} to {} rate?",
                self.from_currency, self.to_currency
            ),
        }
    }
}

fn string_arg<'a>(args: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn weather_defaults_fill_missing_fields() {
        let params = WeatherParams::from_arguments(&Map::new());
        assert_eq!(params.location, "new york");
        assert_eq!(params.query, WeatherQuery::Current);
        assert_eq!(params.to_query(), "What's the current weather in new york?");
    }

    #[test]
    fn weather_forecast_query() {
        let params =
            WeatherParams::from_arguments(&args(json!({"location": "London", "query_type": "forecast"})));
        assert_eq!(params.to_query(), "What's the forecast weather in London?");
    }

    #[test]
    fn forex_rate_defaults_currencies() {
        let params = ForexParams::from_arguments(&args(json!({"action": "rate"})));
        assert_eq!(params.action, ForexAction::Rate);
        assert_eq!(params.from_currency, "USD");
        assert_eq!(params.to_currency, "EUR");
        assert_eq!(params.amount, None);
        assert_eq!(params.to_query(), "What's the USD to EUR rate?");
    }

    #[test]
    fn forex_convert_query_formats_whole_amounts_without_fraction() {
        let params = ForexParams::from_arguments(&args(json!({
            "action": "convert",
            "from_currency": "GBP",
            "to_currency": "JPY",
            "amount": 100
        })));
        assert_eq!(params.amount, Some(100.0));
        assert_eq!(params.to_query(), "Convert 100 GBP to JPY");

        let fractional = ForexParams::new(ForexAction::Convert, "USD", "EUR", Some(12.5));
        assert_eq!(fractional.to_query(), "Convert 12.5 USD to EUR");
    }

    #[test]
    fn forex_convert_without_amount_asks_for_rate() {
        let params = ForexParams::from_arguments(&args(json!({
            "action": "convert",
            "from_currency": "USD",
            "to_currency": "CHF"
        })));
        assert_eq!(params.to_query(), "What's the USD to CHF rate?");

        let zero = ForexParams::new(ForexAction::Convert, "USD", "CHF", Some(0.0));
        assert_eq!(zero.to_query(), "What's the USD to CHF rate?");
    }

    #[test]
    fn forex_amount_accepts_numeric_strings() {
        let params = ForexParams::from_arguments(&args(json!({"action": "convert", "amount": "42.5"})));
        assert_eq!(params.amount, Some(42.5));
    }
}
