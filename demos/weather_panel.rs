//! Walks the weather widget through every province.

use costabella::{ApiClient, ConsoleSink, Province, WeatherPanel};

#[tokio::main]
async fn main() {
    let mut panel = WeatherPanel::builder()
        .api(ApiClient::from_env())
        .sink(ConsoleSink::new())
        .build();

    for province in Province::ALL {
        println!("\n--- {} ---", province);
        panel.change_province(province).await;
    }
}
