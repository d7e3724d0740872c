//! Keyword classifier for forex questions.
//!
//! The model occasionally routes currency questions to `get_weather`. These
//! helpers recognize such text and re-derive forex parameters from it. All
//! matching is case-insensitive substring matching.

use super::params::{ForexAction, ForexParams};
use regex::Regex;
use std::sync::LazyLock;

const CURRENCY_CODES: &[&str] = &[
    "usd", "eur", "gbp", "jpy", "cad", "aud", "chf", "cny", "rub",
];

const FOREX_KEYWORDS: &[&str] = &[
    "rate", "convert", "exchange", "currency", "dollar", "euro", "pound", "yen", "franc", "yuan",
    "ruble",
];

/// Currency terms and the code each one stands for
const CURRENCY_TERMS: &[(&str, &[&str])] = &[
    ("USD", &["usd", "dollar", "dollars"]),
    ("EUR", &["eur", "euro", "euros"]),
    ("GBP", &["gbp", "pound", "pounds"]),
    ("JPY", &["jpy", "yen"]),
    ("CAD", &["cad", "canadian"]),
    ("AUD", &["aud", "australian"]),
    ("CHF", &["chf", "franc", "swiss"]),
    ("CNY", &["cny", "yuan", "chinese"]),
    ("RUB", &["rub", "ruble", "russian"]),
];

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("amount pattern is valid"));

/// True if the text mentions a currency code or a forex keyword.
pub fn looks_like_forex(text: &str) -> bool {
    let lower = text.to_lowercase();
    CURRENCY_CODES
        .iter()
        .chain(FOREX_KEYWORDS)
        .any(|term| lower.contains(term))
}

/// Currency codes mentioned in the text, ordered by first appearance.
///
/// Each code appears once, positioned by the earliest of its terms.
pub fn scan_currencies(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut found: Vec<(usize, &'static str)> = CURRENCY_TERMS
        .iter()
        .filter_map(|(code, terms)| {
            terms
                .iter()
                .filter_map(|term| lower.find(term))
                .min()
                .map(|pos| (pos, *code))
        })
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, code)| code).collect()
}

/// First decimal number in the text.
pub fn extract_amount(text: &str) -> Option<f64> {
    AMOUNT_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Re-derive forex parameters from free text.
///
/// Returns `None` unless at least two distinct currencies are mentioned.
pub fn extract_forex_params(text: &str) -> Option<ForexParams> {
    let currencies = scan_currencies(text);
    let [from, to, ..] = currencies.as_slice() else {
        return None;
    };

    let amount = extract_amount(text);
    let action = if text.to_lowercase().contains("convert") || amount.is_some() {
        ForexAction::Convert
    } else {
        ForexAction::Rate
    };

    Some(ForexParams::new(action, *from, *to, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_forex() {
        assert!(looks_like_forex("convert 100 usd to eur"));
        assert!(looks_like_forex("What is the EXCHANGE rate?"));
        assert!(looks_like_forex("how many Yen for a pound"));
        assert!(!looks_like_forex("weather in Tokyo"));
        assert!(!looks_like_forex(""));
    }

    #[test]
    fn test_scan_orders_by_first_appearance() {
        assert_eq!(scan_currencies("convert 100 usd to eur"), vec!["USD", "EUR"]);
        assert_eq!(scan_currencies("100 euros in usd"), vec!["EUR", "USD"]);
        assert_eq!(scan_currencies("swiss francs to dollars"), vec!["CHF", "USD"]);
    }

    #[test]
    fn test_scan_counts_each_code_once() {
        assert_eq!(scan_currencies("euro, euros, EUR"), vec!["EUR"]);
    }

    #[test]
    fn test_extract_convert_params() {
        let params = extract_forex_params("convert 100 usd to eur").unwrap();
        assert_eq!(params.action, ForexAction::Convert);
        assert_eq!(params.from_currency, "USD");
        assert_eq!(params.to_currency, "EUR");
        assert_eq!(params.amount, Some(100.0));
    }

    #[test]
    fn test_extraction_is_order_sensitive_not_phrase_sensitive() {
        for text in ["100 euros in usd", "convert 100 eur to usd"] {
            let params = extract_forex_params(text).unwrap();
            assert_eq!(params.from_currency, "EUR", "{text}");
            assert_eq!(params.to_currency, "USD", "{text}");
            assert_eq!(params.amount, Some(100.0), "{text}");
            assert_eq!(params.action, ForexAction::Convert, "{text}");
        }
    }

    #[test]
    fn test_rate_without_amount() {
        let params = extract_forex_params("gbp to jpy rate please").unwrap();
        assert_eq!(params.action, ForexAction::Rate);
        assert_eq!(params.amount, None);
    }

    #[test]
    fn test_decimal_amount() {
        assert_eq!(extract_amount("send 12.75 dollars"), Some(12.75));
        assert_eq!(extract_amount("no numbers here"), None);
    }

    #[test]
    fn test_single_currency_is_not_enough() {
        assert!(extract_forex_params("what is the dollar rate").is_none());
        assert!(extract_forex_params("weather in Tokyo").is_none());
    }
}
