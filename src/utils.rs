use std::path::PathBuf;

const BACKUP_SUBDIR: &str = "costabella/weather-backups";

/// Directory where dashboard exports land by default: the platform download
/// directory, or `~/Downloads` when the platform does not report one.
pub(crate) fn default_export_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
}

/// Default directory for weather backups, inside the platform cache directory.
pub(crate) fn default_backup_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|cache| cache.join(BACKUP_SUBDIR))
}

/// Groups an integer's digits with commas: 45280 becomes "45,280".
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
