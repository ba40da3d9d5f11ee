use reqwest::StatusCode;
use thiserror::Error;

/// Errors from talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused, DNS
    /// failure, timeout, malformed URL).
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    /// A GET endpoint answered with a non-success status.
    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    /// A POST endpoint refused the submission; `detail` carries the server's
    /// explanation when the error body had one.
    #[error("Request rejected for {url} with status {status}")]
    Rejected {
        url: String,
        status: StatusCode,
        detail: Option<String>,
    },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("Failed to decode response from {url}")]
    ResponseDecode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
