//! KPI derivation for the four dashboard tiles.
//!
//! Three sources, in order of preference: the live statistics snapshot,
//! an estimate from raw reservation records, and simulated values drawn
//! from fixed ranges. All three produce a complete [`KpiSet`].

use crate::transform::demo::{
    FALLBACK_AVG_RATING, FALLBACK_MONTHLY_REVENUE, FALLBACK_OCCUPANCY_RATE,
    FALLBACK_TOTAL_RESERVATIONS, REVENUE_PER_MONTHLY_RESERVATION,
};
use crate::types::reservation::Reservation;
use crate::types::stats::StatsSnapshot;
use crate::utils::group_thousands;
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// One complete set of dashboard KPI values.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSet {
    /// Monthly revenue in whole dollars.
    pub revenue: u64,
    /// Reservation count.
    pub bookings: u64,
    /// Occupancy percentage.
    pub occupancy: f64,
    /// Average guest rating on a five-point scale.
    pub satisfaction: f64,
}

impl KpiSet {
    /// KPIs from a statistics snapshot, with a fixed fallback for every
    /// field the snapshot omits. A zero-valued field counts as omitted.
    pub fn from_stats(stats: &StatsSnapshot) -> KpiSet {
        KpiSet {
            revenue: stats
                .monthly_revenue
                .filter(|&revenue| revenue != 0)
                .unwrap_or(FALLBACK_MONTHLY_REVENUE),
            bookings: stats
                .total_reservations
                .filter(|&bookings| bookings != 0)
                .unwrap_or(FALLBACK_TOTAL_RESERVATIONS),
            occupancy: stats
                .occupancy_rate
                .filter(|&occupancy| occupancy != 0.0)
                .unwrap_or(FALLBACK_OCCUPANCY_RATE),
            satisfaction: stats
                .avg_rating
                .filter(|&satisfaction| satisfaction != 0.0)
                .unwrap_or(FALLBACK_AVG_RATING),
        }
    }

    /// KPIs estimated from raw reservation records: revenue is a fixed amount
    /// per reservation checking in during `today`'s month, bookings is the
    /// record count, and the remaining tiles show their fallback values.
    pub fn from_reservations(reservations: &[Reservation], today: NaiveDate) -> KpiSet {
        let current_month = reservations
            .iter()
            .filter(|reservation| {
                reservation.checkin().is_some_and(|checkin| {
                    checkin.month() == today.month() && checkin.year() == today.year()
                })
            })
            .count() as u64;
        KpiSet {
            revenue: current_month * REVENUE_PER_MONTHLY_RESERVATION,
            bookings: reservations.len() as u64,
            occupancy: FALLBACK_OCCUPANCY_RATE,
            satisfaction: FALLBACK_AVG_RATING,
        }
    }

    /// Simulated KPIs, drawn fresh from fixed plausible ranges on every call.
    pub fn simulated() -> KpiSet {
        let mut rng = rand::thread_rng();
        KpiSet {
            revenue: rng.gen_range(40_000..50_000),
            bookings: rng.gen_range(120..170),
            occupancy: rng.gen_range(65..95) as f64,
            satisfaction: rng.gen_range(4.0..5.5),
        }
    }

    /// Formats the set for the four tiles.
    pub fn display(&self) -> KpiDisplay {
        KpiDisplay {
            revenue: format!("${}", group_thousands(self.revenue)),
            bookings: self.bookings.to_string(),
            occupancy: format!("{}%", self.occupancy),
            satisfaction: format!("{:.1}", self.satisfaction),
        }
    }
}

/// The formatted strings shown on the KPI tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiDisplay {
    pub revenue: String,
    pub bookings: String,
    pub occupancy: String,
    pub satisfaction: String,
}

impl Default for KpiDisplay {
    /// Pre-render placeholders, as exported when nothing has been painted.
    fn default() -> Self {
        KpiDisplay {
            revenue: "N/A".to_string(),
            bookings: "N/A".to_string(),
            occupancy: "N/A".to_string(),
            satisfaction: "N/A".to_string(),
        }
    }
}
