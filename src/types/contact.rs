//! Contact message payload.

use serde::Serialize;

/// Payload of `POST /contact`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub message: String,
}
