//! Mock sub-handlers backed by static lookup tables.
//!
//! Each desk reads the synthesized free-text query on its own; the supporter
//! and the desks share nothing but that string.

mod forex;
mod weather;

pub use forex::ForexDesk;
pub use weather::WeatherDesk;

const MOCK_NOTICE: &str = "This is mock data for demonstration purposes.";

/// Capitalize the first letter of every word, lowercase the rest.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
