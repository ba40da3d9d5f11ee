//! Liveness response from the backend health probe.

use serde::{Deserialize, Serialize};

/// Payload of `GET /health`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    /// Reported service state; a healthy backend sends `"healthy"`.
    #[serde(default)]
    pub status: String,
    /// Server-side timestamp of the probe, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Free-text status message, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
