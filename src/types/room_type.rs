//! The fixed room catalogue of the hotel.

use serde::{Serialize, Serializer};
use std::fmt;

/// Nightly rate applied to reservations whose room type is not in the
/// catalogue.
pub const DEFAULT_NIGHTLY_RATE: u32 = 150;

/// The room types offered on the booking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    SuiteVistaAlMar,
    VillaPrivada,
    HabitacionDeluxe,
    HabitacionEstandar,
    HabitacionDobleDeluxe,
}

impl RoomType {
    /// All room types, in display order.
    pub const ALL: [RoomType; 5] = [
        RoomType::SuiteVistaAlMar,
        RoomType::VillaPrivada,
        RoomType::HabitacionDeluxe,
        RoomType::HabitacionEstandar,
        RoomType::HabitacionDobleDeluxe,
    ];

    /// Display names of all room types, in display order.
    pub fn labels() -> [&'static str; 5] {
        [
            RoomType::SuiteVistaAlMar.label(),
            RoomType::VillaPrivada.label(),
            RoomType::HabitacionDeluxe.label(),
            RoomType::HabitacionEstandar.label(),
            RoomType::HabitacionDobleDeluxe.label(),
        ]
    }

    /// The Spanish display name, which is also the wire encoding.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::SuiteVistaAlMar => "Suite Vista al Mar",
            RoomType::VillaPrivada => "Villa Privada",
            RoomType::HabitacionDeluxe => "Habitación Deluxe",
            RoomType::HabitacionEstandar => "Habitación Estándar",
            RoomType::HabitacionDobleDeluxe => "Habitación Doble Deluxe",
        }
    }

    /// Estimated revenue per reserved night, used by the revenue series.
    pub fn nightly_rate(&self) -> u32 {
        match self {
            RoomType::SuiteVistaAlMar => 200,
            RoomType::VillaPrivada => 350,
            RoomType::HabitacionDeluxe => 150,
            RoomType::HabitacionEstandar => 100,
            RoomType::HabitacionDobleDeluxe => 150,
        }
    }

    /// Looks a room type up by its display name.
    pub fn from_label(label: &str) -> Option<RoomType> {
        RoomType::ALL
            .iter()
            .copied()
            .find(|room| room.label() == label)
    }

    /// Rate for an arbitrary room-type string; unknown types get
    /// [`DEFAULT_NIGHTLY_RATE`].
    pub fn rate_for_label(label: &str) -> u32 {
        RoomType::from_label(label).map_or(DEFAULT_NIGHTLY_RATE, |room| room.nightly_rate())
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RoomType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
