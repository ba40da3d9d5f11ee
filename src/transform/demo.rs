//! Fixed demo values substituted when live data is absent.
//!
//! The dashboard never shows an empty tile or chart: every derivation in
//! [`crate::transform`] falls back to the constants here, so a dead backend
//! still produces a fully painted page.

/// Short month labels for the charted January through August window.
pub const MONTH_LABELS_SHORT: [&str; 8] = ["Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago"];

/// Full month labels used by the demo revenue chart.
pub const MONTH_LABELS_FULL: [&str; 8] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
];

/// Short weekday labels for derived occupancy series.
pub const WEEKDAY_LABELS_SHORT: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// Full weekday labels used by the demo occupancy chart.
pub const WEEKDAY_LABELS_FULL: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// Demo monthly revenue in dollars, one value per month label.
pub const DEMO_MONTHLY_REVENUE: [u32; 8] = [
    38500, 41200, 39800, 42300, 44100, 45280, 47500, 49200,
];

/// Demo room-type distribution percentages, one per catalogue room type.
pub const DEMO_ROOM_TYPE_PERCENTAGES: [u32; 5] = [35, 25, 20, 15, 5];

/// Demo weekday occupancy percentages, Monday through Sunday.
pub const DEMO_WEEKLY_OCCUPANCY: [u32; 7] = [65, 72, 68, 75, 85, 95, 88];

/// Demo guest-origin labels.
pub const DEMO_ORIGIN_LABELS: [&str; 6] = [
    "Costa Rica",
    "Estados Unidos",
    "Canadá",
    "España",
    "México",
    "Otros",
];

/// Demo guest-origin percentages, aligned with [`DEMO_ORIGIN_LABELS`].
pub const DEMO_ORIGIN_PERCENTAGES: [u32; 6] = [40, 25, 15, 10, 6, 4];

/// Country assumed for reservations without one.
pub const DEFAULT_ORIGIN_COUNTRY: &str = "Costa Rica";

/// KPI fallbacks applied per field when the statistics snapshot omits one.
pub const FALLBACK_MONTHLY_REVENUE: u64 = 45280;
pub const FALLBACK_TOTAL_RESERVATIONS: u64 = 156;
pub const FALLBACK_OCCUPANCY_RATE: f64 = 78.0;
pub const FALLBACK_AVG_RATING: f64 = 4.7;

/// Revenue attributed to each current-month reservation when estimating KPIs
/// from raw records.
pub const REVENUE_PER_MONTHLY_RESERVATION: u64 = 200;
