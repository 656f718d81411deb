//! # pointlog core library
//!
//! Core business logic for pointlog, a single-user tracker that records a
//! points total per calendar day and visualizes the recent week as a
//! color-coded heatmap. All operations are available via a standalone CLI
//! binary; a desktop shell would be a thin GUI layer over this same
//! library.
//!
//! ## Architecture
//!
//! - **Ledger store**: one SQLite row per calendar day, with validated
//!   add/remove operations and delete-at-zero semantics (no row means
//!   zero points)
//! - **Weekly heatmap view model**: a pure snapshot → 7-cell
//!   transformation with goal-normalized color intensity, centered-row
//!   geometry hit-testing, and a caller-ticked hover fade
//! - **Settings**: TOML-based user preferences (theme, daily goal, font)
//!
//! ## Key Components
//!
//! - [`Ledger`]: per-day point totals persistence
//! - [`WeekHeatmap`]: renderable weekly cells
//! - [`Settings`]: user preferences management
//! - [`AppContext`]: owned handles for one process

pub mod app;
pub mod error;
pub mod heatmap;
pub mod storage;

pub use app::AppContext;
pub use error::{CoreError, LedgerError, SettingsError};
pub use heatmap::{
    intensity, week_anchor, DayCell, HoverFade, HoverState, RowLayout, WeekHeatmap,
    DAYS_PER_WEEK, MAX_INTENSITY,
};
pub use storage::{Direction, IntegrityReport, Ledger, LedgerUpdate, Settings, Theme};
