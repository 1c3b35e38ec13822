use chrono::{DateTime, Utc};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{app_data_dir, ensure_dir, roster_file_in},
    subscription::Roster,
};

use super::Result;

const TMP_SUFFIX: &str = "tmp";
const CORRUPT_SUFFIX: &str = "corrupt";

/// JSON-file persistence for the roster.
///
/// A missing file means "never saved"; a file that fails to read or parse is
/// moved aside and treated the same way. Loading never brings the process
/// down over bad data.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    roster_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let roster_file = roster_file_in(&root);
        Ok(Self { root, roster_file })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_file
    }

    /// Loads the persisted roster, or `None` when absent or unreadable.
    pub fn load(&self) -> Result<Option<Roster>> {
        if !self.roster_file.exists() {
            return Ok(None);
        }
        let data = match fs::read_to_string(&self.roster_file) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("failed to read roster file: {err}");
                self.quarantine();
                return Ok(None);
            }
        };
        match serde_json::from_str(&data) {
            Ok(roster) => Ok(Some(roster)),
            Err(err) => {
                tracing::warn!("failed to parse roster file: {err}");
                self.quarantine();
                Ok(None)
            }
        }
    }

    /// Loads the roster, seeding the default dataset when nothing usable is
    /// on disk.
    pub fn load_or_default(&self, now: DateTime<Utc>) -> Result<Roster> {
        Ok(self.load()?.unwrap_or_else(|| Roster::default_dataset(now)))
    }

    /// Writes the roster atomically by staging to a temporary file.
    pub fn save(&self, roster: &Roster) -> Result<()> {
        let json = serde_json::to_string_pretty(roster)?;
        let tmp = suffixed(&self.roster_file, TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.roster_file)?;
        Ok(())
    }

    /// Removes the persisted roster so the next load reseeds the defaults.
    pub fn clear(&self) -> Result<()> {
        if self.roster_file.exists() {
            fs::remove_file(&self.roster_file)?;
        }
        Ok(())
    }

    fn quarantine(&self) {
        let aside = suffixed(&self.roster_file, CORRUPT_SUFFIX);
        if let Err(err) = fs::rename(&self.roster_file, &aside) {
            tracing::warn!("failed to move corrupt roster aside: {err}");
        }
    }
}

fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{suffix}"),
        None => suffix.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
