use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::StoreError;

const DEFAULT_DIR_NAME: &str = ".subtrack";
const ROSTER_FILE: &str = "roster.json";

/// Returns the application-specific data directory, defaulting to
/// `~/.subtrack`. Overridable with `SUBTRACK_HOME`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SUBTRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the persisted roster inside a data directory.
pub fn roster_file_in(base: &Path) -> PathBuf {
    base.join(ROSTER_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
