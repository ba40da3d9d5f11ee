//! The render seam between transformed data and a display surface.

use crate::types::chart::ChartSpec;
use crate::types::notice::NoticeLevel;

/// Well-known display target ids, shared by the dashboard and the weather
/// widget.
pub mod targets {
    /// KPI tiles.
    pub const REVENUE_VALUE: &str = "revenue-value";
    pub const BOOKINGS_VALUE: &str = "bookings-value";
    pub const OCCUPANCY_VALUE: &str = "occupancy-value";
    pub const SATISFACTION_VALUE: &str = "satisfaction-value";

    /// Chart surfaces.
    pub const REVENUE_CHART: &str = "revenueChart";
    pub const ROOM_TYPE_CHART: &str = "roomTypeChart";
    pub const OCCUPANCY_CHART: &str = "occupancyChart";
    pub const ORIGIN_CHART: &str = "originChart";

    /// Weather cards, temperature through perceived temperature.
    pub const WEATHER_CARDS: [&str; 4] = ["weather1", "weather2", "weather3", "weather4"];

    /// Province panel.
    pub const PROVINCE_TITLE: &str = "currentProvinceTitle";
    pub const PROVINCE_BENEFITS: &str = "provinceBenefits";
}

/// A display surface for charts, labeled values, notifications and alerts.
///
/// Implementations decide what a target id means on their surface. A target
/// the surface does not carry must be treated as a logged no-op, never an
/// error: pages legitimately embed only a subset of the widgets.
pub trait RenderSink {
    /// Draws `spec` at `target`, fully replacing whatever chart the target
    /// held before.
    fn render_chart(&mut self, target: &str, spec: ChartSpec);

    /// Updates a labeled value display (KPI tile, weather card, panel text).
    fn set_value(&mut self, target: &str, value: &str);

    /// Shows a transient, auto-dismissing notification.
    fn notify(&mut self, level: NoticeLevel, message: &str);

    /// Shows a blocking alert; used for form outcomes.
    fn alert(&mut self, message: &str);
}
