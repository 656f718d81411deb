//! SQLite-backed daily points ledger.
//!
//! One row per calendar day: `(date TEXT PRIMARY KEY, points INTEGER)`.
//! A day with no row has zero points; totals never drop to zero or below
//! while a row exists -- a removal that would do so deletes the row instead.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::{debug, warn};

use crate::error::{CoreError, LedgerError};

use super::data_dir;

/// Whether an upsert credits points to or debits points from a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Remove,
}

/// Outcome of a ledger upsert, for caller feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerUpdate {
    /// The day's record now holds this total.
    Total(u32),
    /// The removal dropped the total to zero or below; the record is gone.
    Cleared,
    /// Removal on a day with no record; the store is unchanged.
    NothingToRemove,
}

/// Result of a diagnostic integrity check.
#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub ok: bool,
    pub reason: String,
}

impl IntegrityReport {
    fn pass(reason: impl Into<String>) -> Self {
        Self {
            ok: true,
            reason: reason.into(),
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: reason.into(),
        }
    }
}

/// Validate a `YYYY-MM-DD` date string into a typed date.
///
/// # Errors
/// Returns `InvalidDate` for anything that is not a zero-padded, valid
/// calendar date ("2024-02-30" fails despite the plausible format).
pub fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))?;
    // parse_from_str accepts unpadded fields; the stored key is canonical
    if parsed.format("%Y-%m-%d").to_string() != raw {
        return Err(LedgerError::InvalidDate(raw.to_string()));
    }
    Ok(parsed)
}

/// Validate a points magnitude string into a non-negative integer.
///
/// # Errors
/// Returns `InvalidAmount` for non-numeric or negative input.
pub fn parse_amount(raw: &str) -> Result<u32, LedgerError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))
}

/// SQLite store for per-day point totals.
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    /// Open the ledger at `<data_dir>/pointlog.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("pointlog.db");
        Ok(Self::open_at(path)?)
    }

    /// Open the ledger at an explicit path, creating file and schema if
    /// absent.
    ///
    /// # Errors
    /// Returns `OpenFailed` if the database cannot be opened, or `Storage`
    /// if schema creation fails.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| LedgerError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let ledger = Self { conn };
        ledger.initialize()?;
        Ok(ledger)
    }

    /// Open an in-memory ledger (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, LedgerError> {
        let conn = Connection::open_in_memory()?;
        let ledger = Self { conn };
        ledger.initialize()?;
        Ok(ledger)
    }

    /// Create the schema if absent. Idempotent; never touches existing rows.
    ///
    /// # Errors
    /// Returns an error if the statement fails.
    pub fn initialize(&self) -> Result<(), LedgerError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS points (
                date   TEXT PRIMARY KEY,
                points INTEGER NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Apply a signed points change to one day's record.
    ///
    /// Reads the current total (zero when absent), then either stores the
    /// new total or deletes the record when a removal drops it to zero or
    /// below. At most one write statement executes per call, so a failure
    /// leaves the prior state intact.
    ///
    /// # Errors
    /// `InvalidDate` for a malformed or impossible date, `Storage` for
    /// SQLite failures.
    pub fn upsert(
        &self,
        date: &str,
        delta: u32,
        direction: Direction,
    ) -> Result<LedgerUpdate, LedgerError> {
        let day = parse_date(date)?;
        let key = day.format("%Y-%m-%d").to_string();
        let current = self.points_for_key(&key)?;

        match direction {
            Direction::Add => {
                let total = current.saturating_add(delta);
                if total == 0 {
                    // adding zero to an absent day stores nothing
                    return Ok(LedgerUpdate::Total(0));
                }
                self.conn.execute(
                    "INSERT OR REPLACE INTO points (date, points) VALUES (?1, ?2)",
                    params![key, total],
                )?;
                debug!(date = %key, total, "points added");
                Ok(LedgerUpdate::Total(total))
            }
            Direction::Remove => {
                if current == 0 {
                    return Ok(LedgerUpdate::NothingToRemove);
                }
                if delta >= current {
                    self.conn
                        .execute("DELETE FROM points WHERE date = ?1", params![key])?;
                    debug!(date = %key, "points record cleared");
                    Ok(LedgerUpdate::Cleared)
                } else {
                    let total = current - delta;
                    self.conn.execute(
                        "UPDATE points SET points = ?2 WHERE date = ?1",
                        params![key, total],
                    )?;
                    debug!(date = %key, total, "points removed");
                    Ok(LedgerUpdate::Total(total))
                }
            }
        }
    }

    /// Points recorded for one day; absent days read as zero.
    ///
    /// # Errors
    /// `InvalidDate` for a malformed date, `Storage` for SQLite failures.
    pub fn points_on(&self, date: &str) -> Result<u32, LedgerError> {
        let day = parse_date(date)?;
        self.points_for_key(&day.format("%Y-%m-%d").to_string())
    }

    /// Full date→points mapping.
    ///
    /// Rows whose date column no longer parses are skipped with a warning
    /// rather than failing the whole read.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn all_points(&self) -> Result<BTreeMap<NaiveDate, u32>, LedgerError> {
        let mut stmt = self.conn.prepare("SELECT date, points FROM points")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?))
        })?;

        let mut map = BTreeMap::new();
        for row in rows {
            let (date, points) = row?;
            match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
                Ok(day) => {
                    map.insert(day, points);
                }
                Err(_) => warn!(date = %date, "skipping ledger row with malformed date"),
            }
        }
        Ok(map)
    }

    /// Diagnostic check: table present, expected columns, at least one row.
    ///
    /// Not part of the add/remove path.
    ///
    /// # Errors
    /// Returns an error only when the inspection queries themselves fail.
    pub fn check_integrity(&self) -> Result<IntegrityReport, LedgerError> {
        let tables: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'points'",
            [],
            |row| row.get(0),
        )?;
        if tables == 0 {
            return Ok(IntegrityReport::fail("points table is missing"));
        }

        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info('points')")?;
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<_, _>>()?;
        for expected in ["date", "points"] {
            if !columns.iter().any(|c| c == expected) {
                return Ok(IntegrityReport::fail(format!(
                    "points table lacks the '{expected}' column"
                )));
            }
        }

        let rows: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM points", [], |row| row.get(0))?;
        if rows == 0 {
            return Ok(IntegrityReport::fail("points table is empty"));
        }

        Ok(IntegrityReport::pass(format!("{rows} day record(s)")))
    }

    fn points_for_key(&self, key: &str) -> Result<u32, LedgerError> {
        let mut stmt = self
            .conn
            .prepare("SELECT points FROM points WHERE date = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, u32>(0));
        match result {
            Ok(v) => Ok(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}
