//! Chart series derived from reservation records.
//!
//! Every function here is total: any slice of reservations, however sparse
//! or malformed, produces a well-formed series. Rows whose dates or room
//! types cannot be read are skipped or bucketed to defaults rather than
//! reported as errors, and an empty slice yields the fixed demo series.

use crate::transform::demo::{
    DEFAULT_ORIGIN_COUNTRY, DEMO_MONTHLY_REVENUE, DEMO_ORIGIN_LABELS, DEMO_ORIGIN_PERCENTAGES,
    DEMO_ROOM_TYPE_PERCENTAGES, DEMO_WEEKLY_OCCUPANCY, MONTH_LABELS_SHORT, WEEKDAY_LABELS_SHORT,
};
use crate::types::chart::ChartSeries;
use crate::types::reservation::Reservation;
use crate::types::room_type::RoomType;
use chrono::Datelike;

/// Number of months the revenue chart shows, January onward.
const CHARTED_MONTHS: usize = 8;

/// Number of slices the origin chart shows.
const ORIGIN_CHART_SLICES: usize = 6;

/// Monthly revenue estimate: reservations are bucketed by check-in month and
/// each contributes its room type's nightly rate. Only the first
/// [`CHARTED_MONTHS`] months are charted; rows without a readable check-in
/// date are skipped.
pub fn monthly_revenue(reservations: &[Reservation]) -> ChartSeries {
    if reservations.is_empty() {
        return ChartSeries::new(&MONTH_LABELS_SHORT, DEMO_MONTHLY_REVENUE.to_vec());
    }
    let mut buckets = [0u32; 12];
    for reservation in reservations {
        if let Some(checkin) = reservation.checkin() {
            buckets[checkin.month0() as usize] += RoomType::rate_for_label(&reservation.room_type);
        }
    }
    ChartSeries::new(&MONTH_LABELS_SHORT, buckets[..CHARTED_MONTHS].to_vec())
}

/// Distribution of reservations across the room catalogue, as integer
/// percentages of the recognized rows. Unrecognized room types are left out
/// entirely; when nothing is recognized every slice is zero.
///
/// Percentages are rounded per entry and not renormalized, so they may not
/// sum to exactly 100.
pub fn room_type_distribution(reservations: &[Reservation]) -> ChartSeries {
    let labels = RoomType::labels();
    if reservations.is_empty() {
        return ChartSeries::new(&labels, DEMO_ROOM_TYPE_PERCENTAGES.to_vec());
    }
    let mut counts = [0u32; 5];
    for reservation in reservations {
        if let Some(index) = RoomType::ALL
            .iter()
            .position(|room| room.label() == reservation.room_type)
        {
            counts[index] += 1;
        }
    }
    let total: u32 = counts.iter().sum();
    let values = counts
        .iter()
        .map(|&count| if total > 0 { percentage(count, total) } else { 0 })
        .collect();
    ChartSeries::new(&labels, values)
}

/// Weekday occupancy percentages synthesized from the reservation volume:
/// a base level of five points per reservation, clamped to 30 through 90,
/// shaped over the week with a weekend bump, then clamped to 0 through 100.
pub fn weekly_occupancy(reservations: &[Reservation]) -> ChartSeries {
    if reservations.is_empty() {
        return ChartSeries::new(&WEEKDAY_LABELS_SHORT, DEMO_WEEKLY_OCCUPANCY.to_vec());
    }
    let base = (reservations.len() as i64 * 5).clamp(30, 90);
    let values = [
        base - 10,
        base - 5,
        base - 8,
        base,
        base + 10,
        base + 20,
        base + 15,
    ]
    .into_iter()
    .map(|value| value.clamp(0, 100) as u32)
    .collect();
    ChartSeries::new(&WEEKDAY_LABELS_SHORT, values)
}

/// Guest origin distribution: reservations grouped by country, the top
/// [`ORIGIN_CHART_SLICES`] countries by count, as integer percentages of all
/// reservations. Rows without a country count as [`DEFAULT_ORIGIN_COUNTRY`].
///
/// Countries are accumulated in first-seen order, so ties keep a stable
/// order under the sort.
pub fn guest_origin(reservations: &[Reservation]) -> ChartSeries {
    if reservations.is_empty() {
        return ChartSeries::new(&DEMO_ORIGIN_LABELS, DEMO_ORIGIN_PERCENTAGES.to_vec());
    }
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for reservation in reservations {
        let country = reservation
            .country
            .as_deref()
            .unwrap_or(DEFAULT_ORIGIN_COUNTRY);
        match counts.iter_mut().find(|(name, _)| *name == country) {
            Some((_, count)) => *count += 1,
            None => counts.push((country, 1)),
        }
    }
    let total: u32 = counts.iter().map(|(_, count)| count).sum();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(ORIGIN_CHART_SLICES);

    let labels: Vec<&str> = counts.iter().map(|(name, _)| *name).collect();
    let values = counts
        .iter()
        .map(|&(_, count)| percentage(count, total))
        .collect();
    ChartSeries::new(&labels, values)
}

/// Integer percentage of `part` in `total`, rounded half up.
fn percentage(part: u32, total: u32) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}
