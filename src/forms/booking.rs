//! The booking flow: availability search, room selection, reservation
//! submission.
//!
//! A guest fills the search form, picks a room from the availability table,
//! completes the personal section the pick reveals, and submits. Validation
//! failures and submission outcomes are surfaced through the sink's alert.

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::forms::error::FormError;
use crate::render::sink::RenderSink;
use crate::types::reservation::ReservationRequest;
use crate::types::room_type::RoomType;
use chrono::NaiveDate;
use log::{info, warn};

/// Connection-failure alert shared by the booking and contact forms.
pub(crate) const CONNECTION_ALERT: &str = "No se pudo conectar con el servidor";

/// The availability search: a date pair and a party size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
    pub guests: u32,
}

impl SearchCriteria {
    /// Checks the date pair: both dates present and check-out strictly after
    /// check-in. Returns the validated pair.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), FormError> {
        let (checkin, checkout) = match (self.checkin, self.checkout) {
            (Some(checkin), Some(checkout)) => (checkin, checkout),
            _ => return Err(FormError::MissingDates),
        };
        if checkout <= checkin {
            return Err(FormError::CheckoutNotAfterCheckin);
        }
        Ok((checkin, checkout))
    }
}

/// A row of the availability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomOffer {
    pub room_type: RoomType,
    /// Price per night in dollars.
    pub nightly_rate: u32,
}

/// The availability table revealed by a successful search. Every catalogue
/// room is always offered.
pub fn available_rooms() -> Vec<RoomOffer> {
    RoomType::ALL
        .iter()
        .map(|&room_type| RoomOffer {
            room_type,
            nightly_rate: room_type.nightly_rate(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RoomSelection {
    room_type: RoomType,
    checkin: NaiveDate,
    checkout: NaiveDate,
    guests: u32,
}

/// State of the reservation form.
///
/// Public fields hold the personal section's inputs; the room selection and
/// the section's visibility are managed through [`BookingForm::select_room`]
/// and [`BookingForm::submit`].
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub comments: String,
    selection: Option<RoomSelection>,
    personal_section_visible: bool,
}

impl BookingForm {
    pub fn new() -> BookingForm {
        BookingForm::default()
    }

    /// Whether the personal section is currently revealed.
    pub fn personal_section_visible(&self) -> bool {
        self.personal_section_visible
    }

    /// The chosen room, once one has been selected.
    pub fn selected_room(&self) -> Option<RoomType> {
        self.selection.map(|selection| selection.room_type)
    }

    /// Picks a room: copies the validated search dates and party size into
    /// the form and reveals the personal section.
    pub fn select_room(
        &mut self,
        room_type: RoomType,
        search: &SearchCriteria,
    ) -> Result<(), FormError> {
        let (checkin, checkout) = search.validate()?;
        self.selection = Some(RoomSelection {
            room_type,
            checkin,
            checkout,
            guests: search.guests,
        });
        self.personal_section_visible = true;
        info!("Room selected: {}", room_type);
        Ok(())
    }

    /// Submits the reservation.
    ///
    /// A created reservation alerts the new id and resets the form, hiding
    /// the personal section again. A rejection alerts the server's detail
    /// message and leaves the form populated for correction; a transport
    /// failure alerts the connection message.
    ///
    /// Returns the reservation id when one was created.
    pub async fn submit<S: RenderSink>(&mut self, api: &ApiClient, sink: &mut S) -> Option<i64> {
        let request = match self.request() {
            Some(request) => request,
            None => {
                sink.alert(&FormError::NoRoomSelected.to_string());
                return None;
            }
        };
        match api.create_reservation(&request).await {
            Ok(ack) => {
                info!("Reservation created with id {}", ack.reservation_id);
                sink.alert(&format!("Reserva guardada (ID: {})", ack.reservation_id));
                self.reset();
                Some(ack.reservation_id)
            }
            Err(ApiError::Rejected { detail, .. }) => {
                sink.alert(&format!(
                    "Error al crear reserva: {}",
                    detail.as_deref().unwrap_or("desconocido")
                ));
                None
            }
            Err(error) => {
                warn!("Reservation submission failed: {}", error);
                sink.alert(CONNECTION_ALERT);
                None
            }
        }
    }

    /// Clears every field, drops the room selection and hides the personal
    /// section.
    pub fn reset(&mut self) {
        *self = BookingForm::default();
    }

    fn request(&self) -> Option<ReservationRequest> {
        let selection = self.selection?;
        Some(ReservationRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            country: optional_field(&self.country),
            city: optional_field(&self.city),
            checkin_date: selection.checkin,
            checkout_date: selection.checkout,
            guests: selection.guests,
            room_type: selection.room_type,
            comments: optional_field(&self.comments),
        })
    }
}

fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
