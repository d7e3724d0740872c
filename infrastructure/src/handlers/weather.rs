use super::{MOCK_NOTICE, title_case};
use playground_application::SubHandler;
use playground_domain::{Turn, routing::params::DEFAULT_LOCATION};
use tracing::debug;

/// Cities recognized in free text, checked in this order.
const KNOWN_CITIES: &[&str] = &[
    "new york", "london", "tokyo", "sydney", "paris", "berlin", "moscow",
];

struct CityWeather {
    city: &'static str,
    temperature: i32,
    condition: &'static str,
    humidity: u32,
    wind_speed: u32,
    forecast: [&'static str; 5],
}

const WEATHER_TABLE: &[CityWeather] = &[
    CityWeather {
        city: "new york",
        temperature: 22,
        condition: "partly cloudy",
        humidity: 65,
        wind_speed: 12,
        forecast: ["sunny", "cloudy", "rain", "sunny", "partly cloudy"],
    },
    CityWeather {
        city: "london",
        temperature: 15,
        condition: "rainy",
        humidity: 80,
        wind_speed: 18,
        forecast: ["rainy", "cloudy", "sunny", "rainy", "cloudy"],
    },
    CityWeather {
        city: "tokyo",
        temperature: 28,
        condition: "sunny",
        humidity: 70,
        wind_speed: 8,
        forecast: ["sunny", "sunny", "cloudy", "rain", "sunny"],
    },
    CityWeather {
        city: "sydney",
        temperature: 25,
        condition: "sunny",
        humidity: 60,
        wind_speed: 15,
        forecast: ["sunny", "partly cloudy", "sunny", "cloudy", "sunny"],
    },
];

const UNKNOWN: CityWeather = CityWeather {
    city: "",
    temperature: 20,
    condition: "unknown",
    humidity: 50,
    wind_speed: 10,
    forecast: ["unknown"; 5],
};

/// Weather sub-handler over a fixed four-city table.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherDesk;

impl WeatherDesk {
    pub const NAME: &'static str = "weather";

    pub fn new() -> Self {
        Self
    }

    /// Known city, else the phrase after the last " in ", else the default.
    fn extract_location(text: &str) -> String {
        let lower = text.to_lowercase();
        if let Some(city) = KNOWN_CITIES.iter().find(|c| lower.contains(*c)) {
            return (*city).to_string();
        }

        lower
            .rsplit_once(" in ")
            .map(|(_, rest)| rest.trim().trim_end_matches(['?', '.', '!']).trim())
            .filter(|place| !place.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string())
    }

    /// Table entry and display name for a location; partial matches count.
    fn lookup(location: &str) -> (&'static CityWeather, String) {
        WEATHER_TABLE
            .iter()
            .find(|w| location.contains(w.city) || w.city.contains(location))
            .map(|w| (w, title_case(w.city)))
            .unwrap_or_else(|| (&UNKNOWN, title_case(location)))
    }

    fn current(location: &str) -> String {
        let (w, name) = Self::lookup(location);
        format!(
            "🌤️ Current Weather for {name}:\n\n\
             🌡️ Temperature: {}°C\n\
             ☁️ Condition: {}\n\
             💧 Humidity: {}%\n\
             💨 Wind Speed: {} km/h\n\n\
             {MOCK_NOTICE}",
            w.temperature,
            title_case(w.condition),
            w.humidity,
            w.wind_speed,
        )
    }

    fn forecast(location: &str) -> String {
        let (w, name) = Self::lookup(location);
        let days = w
            .forecast
            .iter()
            .map(|day| format!("  • {}", title_case(day)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("📅 5-Day Forecast for {name}:\n\n{days}\n\n{MOCK_NOTICE}")
    }
}

impl SubHandler for WeatherDesk {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn respond(&self, query: &Turn) -> Turn {
        let location = Self::extract_location(&query.text);
        let is_forecast = query.text.to_lowercase().contains("forecast");
        debug!("Weather query: location={}, forecast={}", location, is_forecast);

        let text = if is_forecast {
            Self::forecast(&location)
        } else {
            Self::current(&location)
        };
        Turn::assistant(text).from_agent(Self::NAME)
    }
}
