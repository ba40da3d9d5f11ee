//! Hourly weather backups.
//!
//! The archiver periodically fetches weather for one city, writes each
//! snapshot to a timestamped JSON file, and prunes the directory down to the
//! most recent [`BACKUP_RETENTION`] files so the archive never grows without
//! bound.

use crate::api::client::ApiClient;
use crate::types::weather::WeatherSnapshot;
use crate::utils::default_backup_dir;
use crate::weather::error::WeatherArchiveError;
use bon::bon;
use chrono::{Local, SecondsFormat, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;

/// Time between successful archive cycles.
pub const ARCHIVE_INTERVAL: Duration = Duration::from_secs(3600);

/// Wait before retrying after a failed cycle.
pub const ARCHIVE_RETRY_DELAY: Duration = Duration::from_secs(300);

/// Number of backup files kept after pruning.
pub const BACKUP_RETENTION: usize = 48;

const BACKUP_PREFIX: &str = "weather_backup_";
const DEFAULT_CITY: &str = "San José";

/// One archived weather observation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherBackup {
    /// When the backup was taken, as an RFC 3339 timestamp.
    pub timestamp: String,
    pub city: String,
    /// Where the observation came from.
    pub source: String,
    pub weather_data: WeatherSnapshot,
}

/// Periodic weather archiver for one city.
pub struct WeatherArchiver {
    api: ApiClient,
    backup_dir: PathBuf,
    city: String,
}

#[bon]
impl WeatherArchiver {
    /// Creates an archiver and its backup directory.
    ///
    /// # Arguments
    ///
    /// * `.api(...)`: Backend client used for weather fetches.
    /// * `.backup_dir(...)`: Where backup files go. Optional, defaults to
    ///   `costabella/weather-backups` in the platform cache directory.
    /// * `.city(...)`: City to archive. Optional, defaults to San José.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherArchiveError::BackupDirResolution`] when no directory
    /// was given and the platform reports no cache directory, and
    /// [`WeatherArchiveError::BackupDirCreation`] when the directory cannot
    /// be created.
    #[builder]
    pub fn new(
        api: ApiClient,
        backup_dir: Option<PathBuf>,
        city: Option<String>,
    ) -> Result<WeatherArchiver, WeatherArchiveError> {
        let backup_dir = match backup_dir {
            Some(dir) => dir,
            None => default_backup_dir().ok_or(WeatherArchiveError::BackupDirResolution)?,
        };
        fs::create_dir_all(&backup_dir)
            .map_err(|e| WeatherArchiveError::BackupDirCreation(backup_dir.clone(), e))?;
        Ok(WeatherArchiver {
            api,
            backup_dir,
            city: city.unwrap_or_else(|| DEFAULT_CITY.to_string()),
        })
    }

    /// The directory backups are written to.
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// One archive cycle: fetch, write a timestamped backup, prune. Returns
    /// the path of the new backup file.
    pub async fn update(&self) -> Result<PathBuf, WeatherArchiveError> {
        info!("Archiving weather for {}", self.city);
        let snapshot = self.api.weather(&self.city).await?;
        let path = self.save_backup(&snapshot)?;
        self.cleanup_old_backups()?;
        Ok(path)
    }

    /// Runs archive cycles for the lifetime of the process: an immediate
    /// cycle, then one per [`ARCHIVE_INTERVAL`], waiting only
    /// [`ARCHIVE_RETRY_DELAY`] after a failed cycle.
    pub async fn run(&self) {
        loop {
            match self.update().await {
                Ok(path) => {
                    info!("Weather archive cycle done: {}", path.display());
                    sleep(ARCHIVE_INTERVAL).await;
                }
                Err(error) => {
                    warn!("Weather archive cycle failed: {}", error);
                    sleep(ARCHIVE_RETRY_DELAY).await;
                }
            }
        }
    }

    fn save_backup(&self, snapshot: &WeatherSnapshot) -> Result<PathBuf, WeatherArchiveError> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.backup_dir.join(format!("{BACKUP_PREFIX}{stamp}.json"));
        let backup = WeatherBackup {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            city: snapshot.city.clone().unwrap_or_else(|| self.city.clone()),
            source: "Hotel Costa Bella API".to_string(),
            weather_data: snapshot.clone(),
        };
        let encoded = serde_json::to_vec_pretty(&backup)
            .map_err(|e| WeatherArchiveError::BackupEncode(path.clone(), e))?;
        fs::write(&path, encoded).map_err(|e| WeatherArchiveError::BackupWrite(path.clone(), e))?;
        info!("Weather backup written: {}", path.display());
        Ok(path)
    }

    /// Deletes the oldest backups beyond [`BACKUP_RETENTION`]. Backup file
    /// names embed their timestamp, so lexical order is chronological order.
    fn cleanup_old_backups(&self) -> Result<usize, WeatherArchiveError> {
        let entries = fs::read_dir(&self.backup_dir)
            .map_err(|e| WeatherArchiveError::BackupScan(self.backup_dir.clone(), e))?;
        let mut backups: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| WeatherArchiveError::BackupScan(self.backup_dir.clone(), e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(BACKUP_PREFIX) && name.ends_with(".json") {
                backups.push(entry.path());
            }
        }
        backups.sort();

        let excess = backups.len().saturating_sub(BACKUP_RETENTION);
        for path in backups.drain(..excess) {
            fs::remove_file(&path)
                .map_err(|e| WeatherArchiveError::BackupDeletion(path.clone(), e))?;
            info!("Old weather backup removed: {}", path.display());
        }
        Ok(excess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn archiver_in(dir: &TempDir) -> WeatherArchiver {
        WeatherArchiver::builder()
            .api(ApiClient::builder().build())
            .backup_dir(dir.path().to_path_buf())
            .build()
            .unwrap()
    }

    #[test]
    fn backup_file_round_trips_the_snapshot() {
        let dir = TempDir::new().unwrap();
        let archiver = archiver_in(&dir);
        let snapshot = WeatherSnapshot::demo_for_city("Puntarenas");

        let path = archiver.save_backup(&snapshot).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(BACKUP_PREFIX));

        let written = fs::read(&path).unwrap();
        let backup: WeatherBackup = serde_json::from_slice(&written).unwrap();
        assert_eq!(backup.city, "Puntarenas");
        assert_eq!(backup.source, "Hotel Costa Bella API");
        assert_eq!(backup.weather_data, snapshot);
    }

    #[test]
    fn prunes_down_to_the_retention_count() {
        let dir = TempDir::new().unwrap();
        let archiver = archiver_in(&dir);
        for hour in 0..24 {
            for minute in [0, 30, 45] {
                let name = format!("{BACKUP_PREFIX}20250801_{hour:02}{minute:02}00.json");
                fs::write(dir.path().join(name), b"{}").unwrap();
            }
        }
        fs::write(dir.path().join("notes.txt"), b"keep me").unwrap();

        let removed = archiver.cleanup_old_backups().unwrap();
        assert_eq!(removed, 72 - BACKUP_RETENTION);

        let remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(remaining.len(), BACKUP_RETENTION + 1);
        assert!(remaining.contains(&"notes.txt".to_string()));
        // The oldest backups are the ones that went.
        assert!(!remaining.contains(&format!("{BACKUP_PREFIX}20250801_000000.json")));
        assert!(remaining.contains(&format!("{BACKUP_PREFIX}20250801_233000.json")));
    }

    #[test]
    fn cleanup_below_retention_removes_nothing() {
        let dir = TempDir::new().unwrap();
        let archiver = archiver_in(&dir);
        fs::write(dir.path().join(format!("{BACKUP_PREFIX}20250801_120000.json")), b"{}").unwrap();

        assert_eq!(archiver.cleanup_old_backups().unwrap(), 0);
    }
}
