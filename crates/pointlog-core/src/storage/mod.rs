pub mod ledger;
mod settings;

pub use ledger::{parse_amount, parse_date, Direction, IntegrityReport, Ledger, LedgerUpdate};
pub use settings::{Settings, Theme};

use std::path::PathBuf;

/// Returns `~/.config/pointlog[-dev]/` based on POINTLOG_ENV.
///
/// Set POINTLOG_DATA_DIR to an absolute path to override the location
/// entirely, or POINTLOG_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = std::env::var("POINTLOG_DATA_DIR") {
        let dir = PathBuf::from(path);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("POINTLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pointlog-dev")
    } else {
        base_dir.join("pointlog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
