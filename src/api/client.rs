//! HTTP adapter for the Hotel Costa Bella backend.
//!
//! One client instance wraps a [`reqwest::Client`] and a base URL, and exposes
//! a typed method per endpoint. GET endpoints report non-success statuses as
//! [`ApiError::HttpStatus`]; POST endpoints read the server's error body and
//! report [`ApiError::Rejected`] so callers can surface the `detail` message.

use crate::api::error::ApiError;
use crate::types::contact::ContactRequest;
use crate::types::health::HealthStatus;
use crate::types::reservation::{Reservation, ReservationAck, ReservationRequest};
use crate::types::stats::StatsSnapshot;
use crate::types::weather::WeatherSnapshot;
use bon::bon;
use log::{debug, info, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;

/// Default backend address, matching a local development server.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable read by [`ApiClient::from_env`] for the backend address.
pub const API_BASE_ENV: &str = "COSTABELLA_API_URL";

/// Typed client for the backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

#[bon]
impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Arguments
    ///
    /// * `.base_url(...)`: Backend address. Optional, defaults to
    ///   [`DEFAULT_API_BASE`]. A trailing slash is stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use costabella::ApiClient;
    ///
    /// let api = ApiClient::builder()
    ///     .base_url("https://booking.hotelcostabella.example".to_string())
    ///     .build();
    /// assert_eq!(api.base_url(), "https://booking.hotelcostabella.example");
    /// ```
    #[builder]
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Creates a client from the environment, reading [`API_BASE_ENV`] and
    /// falling back to [`DEFAULT_API_BASE`] when it is unset.
    pub fn from_env() -> Self {
        match env::var(API_BASE_ENV) {
            Ok(base_url) => {
                info!("Using backend address from {}: {}", API_BASE_ENV, base_url);
                Self::builder().base_url(base_url).build()
            }
            Err(_) => Self::builder().build(),
        }
    }

    /// The backend address this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes `GET /health`. Any failure means the backend is unusable.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(format!("{}/health", self.base_url)).await
    }

    /// Convenience wrapper around [`ApiClient::health`] for callers that only
    /// need a yes or no.
    pub async fn backend_healthy(&self) -> bool {
        match self.health().await {
            Ok(status) => {
                debug!("Backend reports status '{}'", status.status);
                true
            }
            Err(error) => {
                warn!("Backend health check failed: {}", error);
                false
            }
        }
    }

    /// Fetches the aggregate reservation statistics from `GET /api/stats/reservations`.
    pub async fn reservation_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get_json(format!("{}/api/stats/reservations", self.base_url))
            .await
    }

    /// Fetches the full reservation list from `GET /reservations`.
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get_json(format!("{}/reservations", self.base_url)).await
    }

    /// Fetches current weather for a city from `GET /api/weather/{city}`.
    ///
    /// The city is a display name ("San José", "Puerto Limón") and is
    /// percent-encoded into the path.
    pub async fn weather(&self, city: &str) -> Result<WeatherSnapshot, ApiError> {
        let url = self.weather_url(city)?;
        self.get_json(url).await
    }

    /// Creates a reservation via `POST /reservations`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend refuses the payload
    /// (for example a guest count outside 1 through 10), with the server's
    /// `detail` message attached when one was sent.
    pub async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationAck, ApiError> {
        let url = format!("{}/reservations", self.base_url);
        let response = self.post_json(&url, request).await?;
        response
            .json::<ReservationAck>()
            .await
            .map_err(|e| ApiError::ResponseDecode {
                url,
                source: e,
            })
    }

    /// Sends a contact message via `POST /contact`.
    ///
    /// Acceptance is communicated by the HTTP status alone, so the success
    /// body is not parsed.
    pub async fn send_contact(&self, message: &ContactRequest) -> Result<(), ApiError> {
        let url = format!("{}/contact", self.base_url);
        self.post_json(&url, message).await?;
        Ok(())
    }

    fn weather_url(&self, city: &str) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "weather", city]);
        Ok(url.into())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!("HTTP error response for {}: {}", url, e);
                return Err(if let Some(status) = e.status() {
                    ApiError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ApiError::NetworkRequest(url, e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::ResponseDecode { url, source: e })
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<Response, ApiError> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = extract_detail(response).await;
            warn!("Submission to {} rejected with status {}", url, status);
            return Err(ApiError::Rejected {
                url: url.to_string(),
                status,
                detail,
            });
        }
        Ok(response)
    }
}

/// Pulls the `detail` field out of an error body. FastAPI-style backends send
/// either a plain string or a structured validation list; non-string values
/// are kept as their JSON rendering.
async fn extract_detail(response: Response) -> Option<String> {
    let body = response.json::<serde_json::Value>().await.ok()?;
    match body.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let api = ApiClient::builder()
            .base_url("http://localhost:8000/".to_string())
            .build();
        assert_eq!(api.base_url(), "http://localhost:8000");
    }

    #[test]
    fn weather_url_percent_encodes_the_city() {
        let api = ApiClient::builder().build();
        let url = api.weather_url("San José").unwrap();
        assert_eq!(url, "http://localhost:8000/api/weather/San%20Jos%C3%A9");
    }

    #[test]
    fn weather_url_rejects_an_unparseable_base() {
        let api = ApiClient::builder()
            .base_url("not a url".to_string())
            .build();
        assert!(matches!(
            api.weather_url("Liberia"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
