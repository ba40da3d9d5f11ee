//! Runs the booking flow end to end: search, pick a room, submit.

use chrono::NaiveDate;
use costabella::{
    available_rooms, ApiClient, BookingForm, ConsoleSink, CostaBellaError, RoomType, SearchCriteria,
};

#[tokio::main]
async fn main() -> Result<(), CostaBellaError> {
    let api = ApiClient::from_env();
    let mut sink = ConsoleSink::new();

    // --- Availability search ---
    let search = SearchCriteria {
        checkin: NaiveDate::from_ymd_opt(2026, 9, 1),
        checkout: NaiveDate::from_ymd_opt(2026, 9, 5),
        guests: 2,
    };
    search.validate()?;
    for offer in available_rooms() {
        println!("{}: ${}/noche", offer.room_type, offer.nightly_rate);
    }

    // --- Pick a room and fill the personal section ---
    let mut form = BookingForm::new();
    form.select_room(RoomType::SuiteVistaAlMar, &search)?;
    form.first_name = "María".to_string();
    form.last_name = "González".to_string();
    form.email = "maria@example.com".to_string();
    form.phone = "+506 8888 1234".to_string();
    form.country = "Costa Rica".to_string();
    form.city = "San José".to_string();

    // --- Submit ---
    match form.submit(&api, &mut sink).await {
        Some(id) => println!("Created reservation {id}"),
        None => println!("Reservation was not created"),
    }

    Ok(())
}
