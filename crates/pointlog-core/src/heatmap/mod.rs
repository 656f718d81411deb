//! Weekly points heatmap view model.
//!
//! Pure transformation of a date→points snapshot into 7 renderable day
//! cells. The store is never touched from here; callers hydrate the
//! snapshot with `set_data` after each mutation and re-request cells.

mod hover;
mod layout;

pub use hover::{HoverFade, HoverState};
pub use layout::{RowLayout, DAYS_PER_WEEK};

use std::collections::HashMap;

use chrono::{Datelike, Days, Duration, NaiveDate};
use serde::Serialize;

/// Largest value the overlay intensity channel can take.
pub const MAX_INTENSITY: u32 = 155;

/// One renderable day in the weekly heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub points: u32,
    /// Additive color overlay strength, 0..=155. Zero renders the
    /// unmodified base color.
    pub intensity: u32,
}

/// The Monday on or before `date`.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Overlay intensity for a day's total against the goal.
///
/// Truncating integer scale: `min(155, points * 155 / goal)`. A zero goal
/// disables normalization and pins the intensity at zero.
pub fn intensity(points: u32, goal: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    let scaled = u64::from(points) * u64::from(MAX_INTENSITY) / u64::from(goal);
    scaled.min(u64::from(MAX_INTENSITY)) as u32
}

/// Weekly heatmap view model: snapshot + window anchor + daily goal.
#[derive(Debug, Clone)]
pub struct WeekHeatmap {
    points: HashMap<NaiveDate, u32>,
    anchor: NaiveDate,
    daily_goal: u32,
}

impl WeekHeatmap {
    /// View over the week starting at `anchor` with the given daily goal.
    ///
    /// The anchor is taken as given; use [`week_anchor`] to snap "today" to
    /// its Monday first.
    pub fn new(anchor: NaiveDate, daily_goal: u32) -> Self {
        Self {
            points: HashMap::new(),
            anchor,
            daily_goal,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    /// Points recorded for one day; absent days read as zero.
    pub fn points_on(&self, date: NaiveDate) -> u32 {
        self.points.get(&date).copied().unwrap_or(0)
    }

    /// The 7 cells from anchor to anchor + 6 days, in order.
    pub fn cells(&self) -> [DayCell; 7] {
        std::array::from_fn(|offset| {
            let date = self.anchor + Days::new(offset as u64);
            let points = self.points_on(date);
            DayCell {
                date,
                points,
                intensity: intensity(points, self.daily_goal),
            }
        })
    }

    // ── Updates ──────────────────────────────────────────────────────

    /// Replace the working snapshot.
    pub fn set_data(&mut self, points_by_date: HashMap<NaiveDate, u32>) {
        self.points = points_by_date;
    }

    /// Set the normalization target. Zero disables normalization.
    pub fn set_goal(&mut self, daily_goal: u32) {
        self.daily_goal = daily_goal;
    }

    /// Move the window to the week starting at `anchor`, as given -- the
    /// anchor is never re-snapped to a weekday.
    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
    }

    /// Shift the window by whole weeks; negative values go back.
    pub fn shift_week(&mut self, weeks: i64) {
        self.anchor += Duration::weeks(weeks);
    }
}
