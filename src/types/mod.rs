pub mod chart;
pub mod contact;
pub mod health;
pub mod notice;
pub mod province;
pub mod reservation;
pub mod room_type;
pub mod stats;
pub mod weather;
