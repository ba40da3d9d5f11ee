//! The executive dashboard pipeline: fetch, transform, render, refresh,
//! export.
//!
//! The dashboard never fails to paint. A reachable backend produces live
//! KPIs and derived charts; anything less degrades stepwise through
//! per-endpoint skips down to simulated KPIs and the demo chart set. All
//! state is replaced wholesale on refresh, so the newest fetch always wins.

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::export::{DashboardExport, ExportError};
use crate::render::sink::{targets, RenderSink};
use crate::transform::demo::{
    DEMO_MONTHLY_REVENUE, DEMO_ORIGIN_LABELS, DEMO_ORIGIN_PERCENTAGES,
    DEMO_ROOM_TYPE_PERCENTAGES, DEMO_WEEKLY_OCCUPANCY, MONTH_LABELS_FULL, WEEKDAY_LABELS_FULL,
};
use crate::transform::kpis::{KpiDisplay, KpiSet};
use crate::transform::series;
use crate::types::chart::{ChartKind, ChartSeries, ChartSpec};
use crate::types::notice::NoticeLevel;
use crate::types::reservation::Reservation;
use crate::types::room_type::RoomType;
use crate::types::stats::StatsSnapshot;
use crate::types::weather::WeatherSnapshot;
use bon::bon;
use chrono::Local;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;

/// How often the dashboard refreshes its KPIs and charts.
pub const DASHBOARD_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// City whose weather the dashboard header shows.
const DASHBOARD_WEATHER_CITY: &str = "San José";

const REVENUE_DATASET_LABEL: &str = "Ingresos ($)";
const OCCUPANCY_DATASET_LABEL: &str = "Ocupación (%)";

/// The latest fetched data, replaced wholesale by each load.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub reservations: Vec<Reservation>,
    pub stats: Option<StatsSnapshot>,
    pub weather: Option<WeatherSnapshot>,
}

/// The executive dashboard.
///
/// # Examples
///
/// ```no_run
/// use costabella::{ConsoleSink, Dashboard};
///
/// # async fn run() {
/// let mut dashboard = Dashboard::builder().sink(ConsoleSink::new()).build();
/// dashboard.initialize().await;
/// # }
/// ```
pub struct Dashboard<S> {
    api: ApiClient,
    sink: S,
    data: DashboardData,
    kpis: KpiDisplay,
}

#[bon]
impl<S: RenderSink> Dashboard<S> {
    /// Creates a dashboard.
    ///
    /// # Arguments
    ///
    /// * `.api(...)`: Backend client. Optional, defaults to
    ///   [`ApiClient::from_env`].
    /// * `.sink(...)`: Display surface the dashboard paints on.
    #[builder]
    pub fn new(api: Option<ApiClient>, sink: S) -> Dashboard<S> {
        Dashboard {
            api: api.unwrap_or_else(ApiClient::from_env),
            sink,
            data: DashboardData::default(),
            kpis: KpiDisplay::default(),
        }
    }

    /// The latest fetched data.
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    /// KPI tile texts as last rendered.
    pub fn kpi_display(&self) -> &KpiDisplay {
        &self.kpis
    }

    /// Consumes the dashboard, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// First paint. A successful live load notifies success; any failure
    /// notifies the error and falls back to simulated KPIs and the demo
    /// chart set. Either way the page ends up fully painted.
    pub async fn initialize(&mut self) {
        info!("Initializing dashboard against {}", self.api.base_url());
        match self.load_live_data().await {
            Ok(()) => {
                self.sink
                    .notify(NoticeLevel::Success, "Dashboard cargado con datos reales");
            }
            Err(error) => {
                warn!("Live data load failed: {}", error);
                self.sink.notify(
                    NoticeLevel::Error,
                    &format!("Error cargando dashboard: {error}"),
                );
                self.update_kpis();
                self.create_all_charts();
            }
        }
    }

    /// Loads health, statistics, reservations and weather, then renders the
    /// KPIs and charts the snapshot supports.
    ///
    /// The health probe gates the rest: any failure there abandons the load.
    /// On the three data fetches a non-success status skips just that piece,
    /// while transport and decode failures abandon the load.
    pub async fn load_live_data(&mut self) -> Result<(), ApiError> {
        self.api.health().await?;

        self.data.stats = skip_on_status(self.api.reservation_stats().await)?;
        if self.data.stats.is_some() {
            info!("Live statistics loaded");
        }

        self.data.reservations =
            skip_on_status(self.api.list_reservations().await)?.unwrap_or_default();
        info!("{} reservations loaded", self.data.reservations.len());

        self.data.weather = skip_on_status(self.api.weather(DASHBOARD_WEATHER_CITY).await)?;

        self.update_kpis_from_data();
        self.create_charts_from_data();
        Ok(())
    }

    /// Renders simulated KPIs drawn from fixed ranges.
    pub fn update_kpis(&mut self) {
        self.render_kpis(KpiSet::simulated());
    }

    /// Renders the fixed demo chart set.
    pub fn create_all_charts(&mut self) {
        self.sink.render_chart(
            targets::REVENUE_CHART,
            ChartSpec {
                kind: ChartKind::Line,
                dataset_label: Some(REVENUE_DATASET_LABEL),
                series: ChartSeries::new(&MONTH_LABELS_FULL, DEMO_MONTHLY_REVENUE.to_vec()),
            },
        );
        self.sink.render_chart(
            targets::ROOM_TYPE_CHART,
            ChartSpec {
                kind: ChartKind::Doughnut,
                dataset_label: None,
                series: ChartSeries::new(
                    &RoomType::labels(),
                    DEMO_ROOM_TYPE_PERCENTAGES.to_vec(),
                ),
            },
        );
        self.sink.render_chart(
            targets::OCCUPANCY_CHART,
            ChartSpec {
                kind: ChartKind::Bar,
                dataset_label: Some(OCCUPANCY_DATASET_LABEL),
                series: ChartSeries::new(&WEEKDAY_LABELS_FULL, DEMO_WEEKLY_OCCUPANCY.to_vec()),
            },
        );
        self.sink.render_chart(
            targets::ORIGIN_CHART,
            ChartSpec {
                kind: ChartKind::Pie,
                dataset_label: None,
                series: ChartSeries::new(&DEMO_ORIGIN_LABELS, DEMO_ORIGIN_PERCENTAGES.to_vec()),
            },
        );
    }

    /// One scheduled refresh: refetch the statistics, rerender the KPIs
    /// (live when the fetch succeeds, simulated otherwise) and redraw the
    /// charts from the current snapshot.
    pub async fn refresh_tick(&mut self) {
        match self.api.reservation_stats().await {
            Ok(stats) => {
                self.data.stats = Some(stats);
                self.update_kpis_from_data();
                self.sink
                    .notify(NoticeLevel::Info, "Datos actualizados desde base de datos");
            }
            Err(ApiError::HttpStatus { .. }) => {
                self.update_kpis();
                self.sink
                    .notify(NoticeLevel::Info, "Datos simulados actualizados");
            }
            Err(error) => {
                warn!("Statistics refresh failed: {}", error);
                self.update_kpis();
                self.sink.notify(NoticeLevel::Warning, "Usando datos simulados");
            }
        }
        self.create_charts_from_data();
    }

    /// Paints once, then refreshes every [`DASHBOARD_REFRESH_INTERVAL`] for
    /// the lifetime of the process. Refreshes run strictly one after
    /// another; no handle to cancel the loop is exposed.
    pub async fn run(&mut self) {
        self.initialize().await;
        loop {
            sleep(DASHBOARD_REFRESH_INTERVAL).await;
            self.refresh_tick().await;
        }
    }

    /// Writes the JSON export of the current state into `dir` (default: the
    /// platform download directory) and notifies on success. Returns the
    /// written path.
    pub fn export_data(&mut self, dir: Option<&Path>) -> Result<PathBuf, ExportError> {
        let export = DashboardExport::assemble(
            &self.kpis,
            self.data.stats.as_ref(),
            &self.data.reservations,
            self.data.weather.as_ref(),
        );
        let path = export.write_to(dir)?;
        self.sink
            .notify(NoticeLevel::Success, "Datos exportados exitosamente");
        Ok(path)
    }

    fn update_kpis_from_data(&mut self) {
        let kpis = match &self.data.stats {
            Some(stats) => KpiSet::from_stats(stats),
            None => KpiSet::from_reservations(&self.data.reservations, Local::now().date_naive()),
        };
        self.render_kpis(kpis);
    }

    fn render_kpis(&mut self, kpis: KpiSet) {
        let display = kpis.display();
        self.sink.set_value(targets::REVENUE_VALUE, &display.revenue);
        self.sink.set_value(targets::BOOKINGS_VALUE, &display.bookings);
        self.sink.set_value(targets::OCCUPANCY_VALUE, &display.occupancy);
        self.sink
            .set_value(targets::SATISFACTION_VALUE, &display.satisfaction);
        self.kpis = display;
    }

    fn create_charts_from_data(&mut self) {
        self.sink.render_chart(
            targets::REVENUE_CHART,
            ChartSpec {
                kind: ChartKind::Line,
                dataset_label: Some(REVENUE_DATASET_LABEL),
                series: series::monthly_revenue(&self.data.reservations),
            },
        );
        self.sink.render_chart(
            targets::ROOM_TYPE_CHART,
            ChartSpec {
                kind: ChartKind::Doughnut,
                dataset_label: None,
                series: series::room_type_distribution(&self.data.reservations),
            },
        );
        self.sink.render_chart(
            targets::OCCUPANCY_CHART,
            ChartSpec {
                kind: ChartKind::Bar,
                dataset_label: Some(OCCUPANCY_DATASET_LABEL),
                series: series::weekly_occupancy(&self.data.reservations),
            },
        );
        self.sink.render_chart(
            targets::ORIGIN_CHART,
            ChartSpec {
                kind: ChartKind::Pie,
                dataset_label: None,
                series: series::guest_origin(&self.data.reservations),
            },
        );
    }
}

/// Collapses a fetch result so that a non-success HTTP status means "no
/// data" while every other failure stays an error.
fn skip_on_status<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::HttpStatus { url, status, .. }) => {
            warn!("Skipping {} (status {})", url, status);
            Ok(None)
        }
        Err(error) => Err(error),
    }
}
