//! Aggregate reservation statistics.

use serde::{Deserialize, Serialize};

/// KPI aggregates from `GET /api/stats/reservations`.
///
/// Every field is optional on purpose: the dashboard applies a per-field
/// fallback for anything the backend omits, so a partial snapshot still
/// drives a full set of tiles.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    /// Revenue for the current month, in whole dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<u64>,
    /// Total reservations on record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reservations: Option<u64>,
    /// Occupancy rate as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy_rate: Option<f64>,
    /// Average guest rating on a five-point scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
}
