//! Weather snapshots and the per-city demo table.

use serde::{Deserialize, Serialize};

/// A weather snapshot for one city, replaced wholesale on every fetch.
///
/// The backend sends `city`, `temperature`, `description` and `humidity`; the
/// demo table additionally fills wind and perceived temperature. Alternate
/// key spellings from older payloads are accepted on input.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Air temperature in degrees Celsius.
    #[serde(default, alias = "temp")]
    pub temperature: f64,
    /// Human-readable conditions, in Spanish ("Parcialmente nublado").
    #[serde(default, alias = "desc")]
    pub description: String,
    /// Relative humidity as a percentage.
    #[serde(default)]
    pub humidity: i64,
    /// Wind speed in km/h, when reported.
    #[serde(
        default,
        rename = "windSpeed",
        alias = "wind_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_speed: Option<f64>,
    /// Perceived temperature in degrees Celsius, when reported.
    #[serde(default, alias = "feels", skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
}

impl WeatherSnapshot {
    /// The fixed demo snapshot for a city display name. Unknown cities get
    /// the San José entry.
    pub fn demo_for_city(city: &str) -> WeatherSnapshot {
        let (temperature, description, humidity, wind, feels) = match city {
            "San José" => (24.0, "Parcialmente nublado", 73, 8.0, 26.0),
            "Alajuela" => (27.0, "Soleado y despejado", 68, 12.0, 30.0),
            "Cartago" => (20.0, "Fresco y nublado", 82, 6.0, 18.0),
            "Heredia" => (22.0, "Templado y agradable", 78, 10.0, 24.0),
            "Liberia" => (32.0, "Caluroso y seco", 55, 15.0, 35.0),
            "Puntarenas" => (29.0, "Húmedo y cálido", 85, 14.0, 33.0),
            "Puerto Limón" => (28.0, "Tropical húmedo", 88, 11.0, 32.0),
            _ => return WeatherSnapshot::demo_for_city("San José"),
        };
        WeatherSnapshot {
            city: Some(city.to_string()),
            temperature,
            description: description.to_string(),
            humidity,
            wind_speed: Some(wind),
            feels_like: Some(feels),
        }
    }

    /// Wind speed with the widget's default of 10 km/h when unreported.
    pub fn wind_kmh(&self) -> f64 {
        self.wind_speed.unwrap_or(10.0)
    }

    /// Perceived temperature; temperature plus two degrees when unreported.
    pub fn feels_c(&self) -> f64 {
        self.feels_like.unwrap_or(self.temperature + 2.0)
    }

    /// Display icon matching this snapshot's description.
    pub fn icon(&self) -> &'static str {
        weather_icon(&self.description)
    }
}

/// Maps a weather description to a display icon by keyword. Both Spanish and
/// English keywords are recognized; anything else gets the sun-and-cloud
/// icon.
pub fn weather_icon(description: &str) -> &'static str {
    let desc = description.to_lowercase();
    if desc.contains("sol") || desc.contains("despejado") || desc.contains("clear") {
        "☀️"
    } else if desc.contains("nub") || desc.contains("cloud") {
        "⛅"
    } else if desc.contains("lluv") || desc.contains("rain") {
        "🌧️"
    } else if desc.contains("tormenta") || desc.contains("storm") {
        "⛈️"
    } else if desc.contains("nieve") || desc.contains("snow") {
        "❄️"
    } else if desc.contains("niebla") || desc.contains("fog") {
        "🌫️"
    } else {
        "🌤️"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn icon_keywords_match_in_priority_order() {
        assert_eq!(weather_icon("Soleado y despejado"), "☀️");
        assert_eq!(weather_icon("Parcialmente nublado"), "⛅");
        assert_eq!(weather_icon("Lluvia ligera"), "🌧️");
        assert_eq!(weather_icon("Tormenta eléctrica"), "⛈️");
        assert_eq!(weather_icon("Nieve"), "❄️");
        assert_eq!(weather_icon("Niebla matinal"), "🌫️");
        assert_eq!(weather_icon("Caluroso y seco"), "🌤️");
        assert_eq!(weather_icon("light rain"), "🌧️");
    }

    #[test]
    fn demo_table_falls_back_to_san_jose() {
        let known = WeatherSnapshot::demo_for_city("Liberia");
        assert_eq!(known.temperature, 32.0);
        assert_eq!(known.description, "Caluroso y seco");

        let unknown = WeatherSnapshot::demo_for_city("Monteverde");
        assert_eq!(unknown.temperature, 24.0);
        assert_eq!(unknown.city.as_deref(), Some("San José"));
    }

    #[test]
    fn accepts_alternate_key_spellings() {
        let snapshot: WeatherSnapshot = serde_json::from_str(
            r#"{"temp": 21.5, "desc": "Nublado", "humidity": 80, "wind_speed": 9.0}"#,
        )
        .unwrap();
        assert_eq!(snapshot.temperature, 21.5);
        assert_eq!(snapshot.description, "Nublado");
        assert_eq!(snapshot.wind_speed, Some(9.0));
    }

    #[test]
    fn derived_fields_have_defaults() {
        let snapshot: WeatherSnapshot =
            serde_json::from_str(r#"{"city": "San José", "temperature": 24.0}"#).unwrap();
        assert_eq!(snapshot.wind_kmh(), 10.0);
        assert_eq!(snapshot.feels_c(), 26.0);
    }
}
