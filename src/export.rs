//! JSON export of the dashboard state.
//!
//! The export is a single pretty-printed document named after the current
//! UTC date, written atomically through a temp file in the destination
//! directory.

use crate::transform::kpis::KpiDisplay;
use crate::types::reservation::Reservation;
use crate::types::stats::StatsSnapshot;
use crate::types::weather::WeatherSnapshot;
use crate::utils::default_export_dir;
use chrono::{SecondsFormat, Utc};
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Data source label when live reservations back the dashboard.
pub const SOURCE_LIVE: &str = "Base de datos real";

/// Data source label when the dashboard runs on simulated data.
pub const SOURCE_SIMULATED: &str = "Datos simulados";

const HOTEL_NAME: &str = "Hotel Costa Bella";
const EXPORT_FILE_PREFIX: &str = "hotel-costa-bella-dashboard-";

/// How many reservation rows the export includes as a sample.
const EXPORT_SAMPLE_SIZE: usize = 10;

/// Failures while writing a dashboard export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to determine a download directory for the export")]
    DownloadDirResolution,

    #[error("Failed to encode the dashboard export")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write the export in '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to persist the export at '{0}'")]
    Persist(PathBuf, #[source] tempfile::PersistError),
}

/// One full snapshot of the dashboard, as written to disk.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport {
    /// When the export was taken, as an RFC 3339 timestamp.
    pub timestamp: String,
    pub hotel: String,
    /// [`SOURCE_LIVE`] or [`SOURCE_SIMULATED`].
    pub data_source: String,
    /// KPI tile texts as last rendered; "N/A" before the first paint.
    pub kpis: ExportedKpis,
    pub real_data_stats: Option<StatsSnapshot>,
    pub total_reservations: usize,
    pub weather_data: Option<WeatherSnapshot>,
    pub weekly_stats: Vec<WeeklyStat>,
    pub reservations_data: Vec<Reservation>,
}

/// KPI tile texts included in the export.
#[derive(Debug, Serialize, Clone)]
pub struct ExportedKpis {
    pub revenue: String,
    pub bookings: String,
    pub occupancy: String,
    pub satisfaction: String,
}

/// One row of the fixed weekly summary table.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct WeeklyStat {
    pub period: &'static str,
    pub rooms: &'static str,
    pub revenue: &'static str,
    pub rating: &'static str,
    pub status: &'static str,
}

/// The fixed weekly summary rows included in every export.
pub fn weekly_stats() -> Vec<WeeklyStat> {
    vec![
        WeeklyStat {
            period: "Semana 1 (Ago 1-7)",
            rooms: "45/60",
            revenue: "$12,500",
            rating: "4.8",
            status: "Completado",
        },
        WeeklyStat {
            period: "Semana 2 (Ago 8-14)",
            rooms: "52/60",
            revenue: "$14,200",
            rating: "4.6",
            status: "Activo",
        },
        WeeklyStat {
            period: "Semana 3 (Ago 15-21)",
            rooms: "38/60",
            revenue: "$10,800",
            rating: "4.7",
            status: "Pendiente",
        },
        WeeklyStat {
            period: "Semana 4 (Ago 22-28)",
            rooms: "41/60",
            revenue: "$11,600",
            rating: "4.9",
            status: "Pendiente",
        },
    ]
}

impl DashboardExport {
    /// Assembles an export from the dashboard's current state. The data
    /// source label follows the reservation list: live when any rows were
    /// loaded, simulated otherwise.
    pub fn assemble(
        kpis: &KpiDisplay,
        stats: Option<&StatsSnapshot>,
        reservations: &[Reservation],
        weather: Option<&WeatherSnapshot>,
    ) -> DashboardExport {
        let data_source = if reservations.is_empty() {
            SOURCE_SIMULATED
        } else {
            SOURCE_LIVE
        };
        DashboardExport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            hotel: HOTEL_NAME.to_string(),
            data_source: data_source.to_string(),
            kpis: ExportedKpis {
                revenue: kpis.revenue.clone(),
                bookings: kpis.bookings.clone(),
                occupancy: kpis.occupancy.clone(),
                satisfaction: kpis.satisfaction.clone(),
            },
            real_data_stats: stats.cloned(),
            total_reservations: reservations.len(),
            weather_data: weather.cloned(),
            weekly_stats: weekly_stats(),
            reservations_data: reservations.iter().take(EXPORT_SAMPLE_SIZE).cloned().collect(),
        }
    }

    /// File name for an export taken now:
    /// `hotel-costa-bella-dashboard-YYYY-MM-DD.json`, dated in UTC.
    pub fn file_name() -> String {
        format!("{}{}.json", EXPORT_FILE_PREFIX, Utc::now().format("%Y-%m-%d"))
    }

    /// Writes the export pretty-printed into `dir`, defaulting to the
    /// platform download directory. The file appears atomically under
    /// [`DashboardExport::file_name`]; an export already taken today is
    /// replaced. Returns the final path.
    pub fn write_to(&self, dir: Option<&Path>) -> Result<PathBuf, ExportError> {
        let dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => default_export_dir().ok_or(ExportError::DownloadDirResolution)?,
        };
        let encoded = serde_json::to_vec_pretty(self).map_err(ExportError::Encode)?;

        let path = dir.join(Self::file_name());
        let mut staged =
            NamedTempFile::new_in(&dir).map_err(|e| ExportError::Write(dir.clone(), e))?;
        staged
            .write_all(&encoded)
            .map_err(|e| ExportError::Write(dir.clone(), e))?;
        staged
            .persist(&path)
            .map_err(|e| ExportError::Persist(path.clone(), e))?;
        info!("Dashboard export written: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_reservations(count: usize) -> Vec<Reservation> {
        (0..count)
            .map(|index| Reservation {
                id: Some(index as i64),
                first_name: format!("Guest {index}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn data_source_label_follows_the_reservation_list() {
        let kpis = KpiDisplay::default();
        let empty = DashboardExport::assemble(&kpis, None, &[], None);
        assert_eq!(empty.data_source, SOURCE_SIMULATED);

        let rows = sample_reservations(3);
        let live = DashboardExport::assemble(&kpis, None, &rows, None);
        assert_eq!(live.data_source, SOURCE_LIVE);
        assert_eq!(live.total_reservations, 3);
    }

    #[test]
    fn export_samples_at_most_ten_reservations() {
        let rows = sample_reservations(14);
        let export = DashboardExport::assemble(&KpiDisplay::default(), None, &rows, None);
        assert_eq!(export.total_reservations, 14);
        assert_eq!(export.reservations_data.len(), 10);
        assert_eq!(export.reservations_data[0].first_name, "Guest 0");
    }

    #[test]
    fn written_file_is_dated_camel_cased_json() {
        let dir = TempDir::new().unwrap();
        let stats = StatsSnapshot {
            monthly_revenue: Some(52_000),
            ..Default::default()
        };
        let export = DashboardExport::assemble(
            &KpiDisplay::default(),
            Some(&stats),
            &sample_reservations(1),
            Some(&WeatherSnapshot::demo_for_city("San José")),
        );

        let path = export.write_to(Some(dir.path())).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(EXPORT_FILE_PREFIX));
        assert!(name.ends_with(".json"));

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["hotel"], "Hotel Costa Bella");
        assert_eq!(written["dataSource"], SOURCE_LIVE);
        assert_eq!(written["kpis"]["revenue"], "N/A");
        assert_eq!(written["realDataStats"]["monthly_revenue"], 52_000);
        assert_eq!(written["weeklyStats"].as_array().unwrap().len(), 4);
        assert_eq!(written["weeklyStats"][0]["period"], "Semana 1 (Ago 1-7)");
        assert_eq!(written["weatherData"]["temperature"], 24.0);
    }

    #[test]
    fn rewriting_today_replaces_the_file() {
        let dir = TempDir::new().unwrap();
        let export = DashboardExport::assemble(&KpiDisplay::default(), None, &[], None);
        let first = export.write_to(Some(dir.path())).unwrap();
        let second = export.write_to(Some(dir.path())).unwrap();
        assert_eq!(first, second);

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }
}
