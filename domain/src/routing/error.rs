//! Routing anomalies that are recovered locally

use thiserror::Error;

/// Reasons a function call could not be dispatched to a sub-handler.
///
/// Neither variant fails the exchange: the supporter falls back to the
/// general-question path instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Could not parse arguments for {function}: {message}")]
    ArgumentParse { function: String, message: String },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = RoutingError::ArgumentParse {
            function: "get_weather".to_string(),
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Could not parse arguments for get_weather: EOF while parsing"
        );
        assert_eq!(
            RoutingError::UnknownFunction("get_stocks".to_string()).to_string(),
            "Unknown function: get_stocks"
        );
    }
}
