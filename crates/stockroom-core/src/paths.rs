//! Path resolution for stockroom data locations.
//!
//! - Database file
//! - Uploads directory
//!
//! Both live under a single data root, overridable with `STOCKROOM_DATA_DIR`.
//! No interactive/terminal I/O here - adapters handle user prompts.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "STOCKROOM_DATA_DIR";

/// Path resolution failures.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}

/// The root directory for all persisted state.
///
/// `STOCKROOM_DATA_DIR` wins when set and non-empty; otherwise the
/// platform data directory (e.g. `~/.local/share/stockroom`).
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join("stockroom"))
        .ok_or(PathError::NoDataDir)
}

/// Path to the SQLite database file.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("stockroom.db"))
}

/// Directory uploaded image files are written to, served under `/uploads`.
pub fn uploads_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("uploads"))
}
