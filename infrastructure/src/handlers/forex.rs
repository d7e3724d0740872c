use super::MOCK_NOTICE;
use playground_application::SubHandler;
use playground_domain::{Turn, extract_amount, scan_currencies};
use tracing::debug;

type RateRow = (&'static str, &'static [(&'static str, f64)]);

/// Direct rates by base currency.
const RATE_TABLE: &[RateRow] = &[
    (
        "USD",
        &[
            ("EUR", 0.85),
            ("GBP", 0.73),
            ("JPY", 110.5),
            ("CAD", 1.25),
            ("AUD", 1.35),
            ("CHF", 0.92),
            ("CNY", 6.45),
            ("RUB", 75.2),
        ],
    ),
    (
        "EUR",
        &[
            ("USD", 1.18),
            ("GBP", 0.86),
            ("JPY", 130.0),
            ("CAD", 1.47),
            ("AUD", 1.59),
            ("CHF", 1.08),
            ("CNY", 7.59),
            ("RUB", 88.5),
        ],
    ),
    (
        "GBP",
        &[
            ("USD", 1.37),
            ("EUR", 1.16),
            ("JPY", 151.4),
            ("CAD", 1.71),
            ("AUD", 1.85),
            ("CHF", 1.26),
            ("CNY", 8.82),
            ("RUB", 103.0),
        ],
    ),
    (
        "JPY",
        &[
            ("USD", 0.009),
            ("EUR", 0.0077),
            ("GBP", 0.0066),
            ("CAD", 0.0113),
            ("AUD", 0.0122),
            ("CHF", 0.0083),
            ("CNY", 0.058),
            ("RUB", 0.68),
        ],
    ),
];

const SUPPORTED: &str = "USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY, RUB";

fn direct_rate(from: &str, to: &str) -> Option<f64> {
    RATE_TABLE
        .iter()
        .find(|(base, _)| *base == from)
        .and_then(|(_, quotes)| quotes.iter().find(|(code, _)| *code == to))
        .map(|(_, rate)| *rate)
}

/// Direct rate, else the inverse of the opposite direction, else 1.0.
pub(crate) fn exchange_rate(from: &str, to: &str) -> f64 {
    let from = from.to_uppercase();
    let to = to.to_uppercase();
    direct_rate(&from, &to)
        .or_else(|| direct_rate(&to, &from).map(|r| 1.0 / r))
        .unwrap_or(1.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Forex sub-handler over a fixed rate table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForexDesk;

impl ForexDesk {
    pub const NAME: &'static str = "forex";

    pub fn new() -> Self {
        Self
    }

    fn conversion(text: &str) -> String {
        let currencies = scan_currencies(text);
        match (extract_amount(text), currencies.as_slice()) {
            (Some(amount), [from, to, ..]) if amount != 0.0 => {
                let rate = exchange_rate(from, to);
                format!(
                    "💱 Currency Conversion:\n\n\
                     💰 {amount} {from} = {} {to}\n\n\
                     📊 Exchange Rate: 1 {from} = {rate} {to}\n\n\
                     {MOCK_NOTICE}",
                    round2(amount * rate),
                )
            }
            _ => "I couldn't understand the conversion request. Please specify an amount and \
                  two currencies (e.g., 'convert 100 USD to EUR')."
                .to_string(),
        }
    }

    fn rate(text: &str) -> String {
        match scan_currencies(text).as_slice() {
            [from, to, ..] => format!(
                "📈 Exchange Rate:\n\n💱 {from} to {to}: {}\n\n{MOCK_NOTICE}",
                exchange_rate(from, to)
            ),
            _ => "Please specify two currencies to get the exchange rate (e.g., 'USD to EUR rate')."
                .to_string(),
        }
    }

    fn help() -> String {
        format!(
            "💱 Forex Information:\n\n\
             I can help you with:\n\
             • Currency conversion (e.g., \"convert 100 USD to EUR\")\n\
             • Exchange rates (e.g., \"USD to EUR rate\")\n\
             • Currency information\n\n\
             Available currencies: {SUPPORTED}\n\n\
             {MOCK_NOTICE}"
        )
    }
}

impl SubHandler for ForexDesk {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn respond(&self, query: &Turn) -> Turn {
        let text = &query.text;
        let lower = text.to_lowercase();

        let reply = if lower.contains("convert") || text.chars().any(|c| c.is_ascii_digit()) {
            debug!("Forex conversion query");
            Self::conversion(text)
        } else if lower.contains("rate") {
            debug!("Forex rate query");
            Self::rate(text)
        } else {
            Self::help()
        };
        Turn::assistant(reply).from_agent(Self::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_domain::Role;

    fn ask(text: &str) -> String {
        let reply = ForexDesk::new().respond(&Turn::user(text).from_agent("supporter"));
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.origin_agent.as_deref(), Some("forex"));
        reply.text
    }

    #[test]
    fn test_rate_lookup() {
        assert_eq!(exchange_rate("USD", "EUR"), 0.85);
        assert_eq!(exchange_rate("gbp", "jpy"), 151.4);
    }

    #[test]
    fn test_inverse_rate() {
        // no CAD row, so USD->CAD is inverted
        assert_eq!(exchange_rate("CAD", "USD"), 1.0 / 1.25);
    }

    #[test]
    fn test_unknown_pair_is_parity() {
        assert_eq!(exchange_rate("CAD", "AUD"), 1.0);
        assert_eq!(exchange_rate("XYZ", "USD"), 1.0);
    }

    #[test]
    fn test_conversion_reply() {
        let text = ask("Convert 100 USD to EUR");
        assert!(text.contains("💰 100 USD = 85 EUR"));
        assert!(text.contains("📊 Exchange Rate: 1 USD = 0.85 EUR"));
        assert!(text.ends_with(MOCK_NOTICE));
    }

    #[test]
    fn test_conversion_rounds_to_cents() {
        let text = ask("Convert 10 JPY to EUR");
        assert!(text.contains("10 JPY = 0.08 EUR"));
    }

    #[test]
    fn test_conversion_without_pair_explains() {
        let text = ask("convert 100 dollars");
        assert!(text.starts_with("I couldn't understand the conversion request"));
    }

    #[test]
    fn test_rate_reply() {
        let text = ask("What's the GBP to USD rate?");
        assert!(text.contains("💱 GBP to USD: 1.37"));
    }

    #[test]
    fn test_rate_without_pair() {
        let text = ask("what's the rate?");
        assert!(text.starts_with("Please specify two currencies"));
    }

    #[test]
    fn test_help_for_other_queries() {
        let text = ask("tell me about money");
        assert!(text.contains("Available currencies: USD, EUR"));
    }
}
