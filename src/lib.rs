mod api;
mod dashboard;
mod error;
mod export;
mod forms;
mod render;
mod transform;
mod types;
mod utils;
mod weather;

pub use error::CostaBellaError;
pub use dashboard::*;

pub use api::client::*;
pub use api::error::ApiError;

pub use render::console::*;
pub use render::memory::*;
pub use render::sink::*;

pub use forms::booking::{available_rooms, BookingForm, RoomOffer, SearchCriteria};
pub use forms::contact::ContactForm;
pub use forms::error::FormError;

pub use transform::demo;
pub use transform::kpis::*;
pub use transform::series;

pub use types::chart::*;
pub use types::contact::ContactRequest;
pub use types::health::HealthStatus;
pub use types::notice::NoticeLevel;
pub use types::province::*;
pub use types::reservation::*;
pub use types::room_type::*;
pub use types::stats::StatsSnapshot;
pub use types::weather::*;

pub use export::*;

pub use weather::archive::*;
pub use weather::error::WeatherArchiveError;
pub use weather::panel::*;
