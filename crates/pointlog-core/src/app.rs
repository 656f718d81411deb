//! Application context: owned handles to the ledger and settings.
//!
//! One context is constructed at process start and passed where needed;
//! dropping it closes the database connection. Nothing in this crate keeps
//! process-wide state.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::storage::{self, Ledger, Settings};

/// Owned application state for one process.
pub struct AppContext {
    pub ledger: Ledger,
    pub settings: Settings,
    data_dir: PathBuf,
}

impl AppContext {
    /// Open the ledger and settings under the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory or ledger cannot be opened.
    pub fn init() -> Result<Self, CoreError> {
        Self::init_at(storage::data_dir()?)
    }

    /// Open the ledger and settings under an explicit directory.
    ///
    /// Unparseable settings fall back to defaults; a broken preferences
    /// file never blocks startup.
    ///
    /// # Errors
    /// Returns an error if the directory or ledger cannot be opened.
    pub fn init_at(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        let ledger = Ledger::open_at(dir.join("pointlog.db"))?;
        let settings = Settings::load_from(&dir.join("config.toml")).unwrap_or_default();
        Ok(Self {
            ledger,
            settings,
            data_dir: dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Direction;

    #[test]
    fn init_at_creates_store_and_settings() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::init_at(dir.path()).unwrap();
        assert_eq!(ctx.settings, Settings::default());
        assert_eq!(ctx.data_dir(), dir.path());
        ctx.ledger.upsert("2024-05-06", 3, Direction::Add).unwrap();
        assert!(dir.path().join("pointlog.db").exists());
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    fn broken_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "theme = 12").unwrap();
        let ctx = AppContext::init_at(dir.path()).unwrap();
        assert_eq!(ctx.settings, Settings::default());
    }
}
