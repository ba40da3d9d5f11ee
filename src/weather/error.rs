use crate::api::error::ApiError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures in the weather backup archiver.
#[derive(Debug, Error)]
pub enum WeatherArchiveError {
    #[error("Failed to determine a backup directory")]
    BackupDirResolution,

    #[error("Failed to create backup directory '{0}'")]
    BackupDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode weather backup '{0}'")]
    BackupEncode(PathBuf, #[source] serde_json::Error),

    #[error("Failed to write weather backup '{0}'")]
    BackupWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to scan backup directory '{0}'")]
    BackupScan(PathBuf, #[source] std::io::Error),

    #[error("Failed to delete old weather backup '{0}'")]
    BackupDeletion(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Fetch(#[from] ApiError),
}
