//! Reservation records and the payload used to create them.

use crate::types::room_type::RoomType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A reservation row from `GET /reservations`.
///
/// Rows are tolerated in whatever shape the backend stores them: every field
/// is optional or defaulted, and the dates stay as raw strings so a single
/// malformed row never sinks the whole list. Series derivation parses dates
/// through [`Reservation::checkin`] and skips rows it cannot read.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Guest's country of origin; missing values count as Costa Rica in the
    /// origin chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Check-in date as stored; parse with [`Reservation::checkin`].
    #[serde(default)]
    pub checkin_date: String,
    #[serde(default)]
    pub checkout_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    /// Room type display name; unrecognized names fall back to the default
    /// nightly rate.
    #[serde(default)]
    pub room_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Reservation {
    /// Parses the check-in date, accepting both date-only and datetime
    /// strings. `None` when the field is absent or unreadable.
    pub fn checkin(&self) -> Option<NaiveDate> {
        parse_lenient_date(&self.checkin_date)
    }
}

fn parse_lenient_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|datetime| datetime.date())
}

/// Payload of `POST /reservations`.
///
/// Unlike [`Reservation`], the outbound payload is strictly typed: real
/// dates, a catalogued room type, and a guest count the backend will accept
/// or reject as a whole.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ReservationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    /// Party size; the backend accepts 1 through 10.
    pub guests: u32,
    pub room_type: RoomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Acknowledgement of a created reservation.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ReservationAck {
    #[serde(default)]
    pub ok: bool,
    pub reservation_id: i64,
}
