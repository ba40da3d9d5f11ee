//! The weather and province widget.
//!
//! The widget shows one province at a time: a title line, a highlights card,
//! and four weather cards for the province's representative city. Weather
//! comes from the backend when it answers and from the fixed demo table when
//! it does not, so the widget always paints something.

use crate::api::client::ApiClient;
use crate::render::sink::{targets, RenderSink};
use crate::types::province::Province;
use crate::types::weather::WeatherSnapshot;
use bon::bon;
use log::{info, warn};
use std::time::Duration;
use tokio::time::sleep;

/// How often the widget reloads weather for the selected province.
pub const WEATHER_REFRESH_INTERVAL: Duration = Duration::from_secs(600);

/// Placeholder painted into the weather cards while a fetch is in flight.
const LOADING_PLACEHOLDER: &str = "Cargando...";

/// The weather and province widget.
pub struct WeatherPanel<S> {
    api: ApiClient,
    sink: S,
    province: Province,
}

#[bon]
impl<S: RenderSink> WeatherPanel<S> {
    /// Creates a widget.
    ///
    /// # Arguments
    ///
    /// * `.api(...)`: Backend client used for weather fetches.
    /// * `.sink(...)`: Display surface the widget paints on.
    /// * `.province(...)`: Initially selected province. Optional, defaults
    ///   to San José.
    #[builder]
    pub fn new(api: ApiClient, sink: S, province: Option<Province>) -> WeatherPanel<S> {
        WeatherPanel {
            api,
            sink,
            province: province.unwrap_or(Province::SanJose),
        }
    }

    /// The currently selected province.
    pub fn province(&self) -> Province {
        self.province
    }

    /// Consumes the widget, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Switches the widget to `province`: updates the title line and the
    /// highlights card, then loads weather for the province's city.
    pub async fn change_province(&mut self, province: Province) {
        self.province = province;
        info!("Weather panel switched to {}", province);

        let info = province.info();
        self.sink.set_value(
            targets::PROVINCE_TITLE,
            &format!("Provincia: {} — Ciudad: {}", province.name(), info.city),
        );

        let highlights = province.highlights();
        let mut card = format!("{} {}", highlights.icon, highlights.title);
        for line in highlights.lines {
            card.push('\n');
            card.push_str(line);
        }
        self.sink.set_value(targets::PROVINCE_BENEFITS, &card);

        self.load_weather_for_city(info.city).await;
    }

    /// Reloads weather for the currently selected province.
    pub async fn refresh(&mut self) {
        let city = self.province.info().city;
        self.load_weather_for_city(city).await;
    }

    /// Shows the initial province, then reloads its weather every
    /// [`WEATHER_REFRESH_INTERVAL`] for the lifetime of the process.
    pub async fn run(&mut self) {
        self.change_province(self.province).await;
        loop {
            sleep(WEATHER_REFRESH_INTERVAL).await;
            self.refresh().await;
        }
    }

    async fn load_weather_for_city(&mut self, city: &str) {
        for target in targets::WEATHER_CARDS {
            self.sink.set_value(target, LOADING_PLACEHOLDER);
        }
        let snapshot = match self.api.weather(city).await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!("Weather fetch for {} failed, using demo data: {}", city, error);
                WeatherSnapshot::demo_for_city(city)
            }
        };
        self.render_cards(&snapshot);
    }

    fn render_cards(&mut self, snapshot: &WeatherSnapshot) {
        let description = if snapshot.description.is_empty() {
            "—"
        } else {
            &snapshot.description
        };
        let cards = [
            format!(
                "Temperatura: {}°C {} ({})",
                snapshot.temperature.round() as i64,
                snapshot.icon(),
                description
            ),
            format!("Humedad: {}% 💧 (Nivel de humedad)", snapshot.humidity),
            format!(
                "Viento: {} km/h 🌬️ (Velocidad del viento)",
                snapshot.wind_kmh()
            ),
            format!(
                "Sensación: {}°C 🌡️ (Sensación térmica)",
                snapshot.feels_c().round() as i64
            ),
        ];
        for (target, card) in targets::WEATHER_CARDS.iter().zip(cards) {
            self.sink.set_value(target, &card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::memory::MemorySink;
    use pretty_assertions::assert_eq;

    fn unreachable_api() -> ApiClient {
        ApiClient::builder()
            .base_url("http://127.0.0.1:9".to_string())
            .build()
    }

    #[tokio::test]
    async fn unreachable_backend_renders_the_demo_entry() {
        let mut panel = WeatherPanel::builder()
            .api(unreachable_api())
            .sink(MemorySink::new())
            .province(Province::Guanacaste)
            .build();
        panel.change_province(Province::Guanacaste).await;

        let sink = panel.into_sink();
        assert_eq!(
            sink.values["currentProvinceTitle"],
            "Provincia: Guanacaste — Ciudad: Liberia"
        );
        assert_eq!(
            sink.values["weather1"],
            "Temperatura: 32°C 🌤️ (Caluroso y seco)"
        );
        assert_eq!(sink.values["weather2"], "Humedad: 55% 💧 (Nivel de humedad)");
        assert_eq!(
            sink.values["weather3"],
            "Viento: 15 km/h 🌬️ (Velocidad del viento)"
        );
        assert_eq!(
            sink.values["weather4"],
            "Sensación: 35°C 🌡️ (Sensación térmica)"
        );
    }

    #[tokio::test]
    async fn highlights_card_lists_the_province_lines() {
        let mut panel = WeatherPanel::builder()
            .api(unreachable_api())
            .sink(MemorySink::new())
            .build();
        assert_eq!(panel.province(), Province::SanJose);

        panel.change_province(Province::Limon).await;
        let sink = panel.into_sink();
        let card = &sink.values["provinceBenefits"];
        assert!(card.starts_with("🌴 Puerto Limón"));
        assert_eq!(card.lines().count(), 5);
    }

    #[tokio::test]
    async fn widget_restricted_to_weather_targets_still_works() {
        let sink = MemorySink::with_targets(["weather1", "weather2", "weather3", "weather4"]);
        let mut panel = WeatherPanel::builder()
            .api(unreachable_api())
            .sink(sink)
            .province(Province::Cartago)
            .build();
        panel.change_province(Province::Cartago).await;

        let sink = panel.into_sink();
        assert!(!sink.values.contains_key("currentProvinceTitle"));
        assert_eq!(
            sink.values["weather1"],
            "Temperatura: 20°C ⛅ (Fresco y nublado)"
        );
    }
}
