//! Integration tests for the store → view model flow.
//!
//! This test file verifies:
//! - Hydrating the weekly view from a persisted ledger
//! - Intensity normalization against the stored daily goal
//! - Week navigation over real data
//! - Pointer hit-test feeding the hover fade

use std::collections::HashMap;

use chrono::NaiveDate;
use pointlog_core::{
    week_anchor, Direction, HoverState, Ledger, RowLayout, Settings, WeekHeatmap, MAX_INTENSITY,
};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hydrate(ledger: &Ledger, view: &mut WeekHeatmap) {
    let snapshot: HashMap<_, _> = ledger.all_points().unwrap().into_iter().collect();
    view.set_data(snapshot);
}

#[test]
fn week_cells_reflect_persisted_points() {
    let dir = TempDir::new().unwrap();
    let ledger = Ledger::open_at(dir.path().join("pointlog.db")).unwrap();

    // week of Monday 2024-05-06
    ledger.upsert("2024-05-06", 5, Direction::Add).unwrap();
    ledger.upsert("2024-05-08", 10, Direction::Add).unwrap();
    ledger.upsert("2024-05-12", 20, Direction::Add).unwrap();
    // outside the window
    ledger.upsert("2024-05-13", 99, Direction::Add).unwrap();

    let mut view = WeekHeatmap::new(week_anchor(date(2024, 5, 9)), 10);
    hydrate(&ledger, &mut view);

    let cells = view.cells();
    assert_eq!(cells[0].date, date(2024, 5, 6));
    assert_eq!(cells[0].points, 5);
    assert_eq!(cells[0].intensity, 77);
    assert_eq!(cells[2].intensity, MAX_INTENSITY);
    assert_eq!(cells[6].points, 20);
    assert_eq!(cells[6].intensity, MAX_INTENSITY);
    assert_eq!(cells[1].points, 0);
}

#[test]
fn mutation_then_rehydration_updates_cells() {
    let dir = TempDir::new().unwrap();
    let ledger = Ledger::open_at(dir.path().join("pointlog.db")).unwrap();
    let mut view = WeekHeatmap::new(date(2024, 5, 6), 10);

    ledger.upsert("2024-05-06", 5, Direction::Add).unwrap();
    hydrate(&ledger, &mut view);
    assert_eq!(view.cells()[0].points, 5);

    ledger.upsert("2024-05-06", 5, Direction::Remove).unwrap();
    hydrate(&ledger, &mut view);
    assert_eq!(view.cells()[0].points, 0);
    assert_eq!(view.cells()[0].intensity, 0);
}

#[test]
fn navigation_moves_the_window_over_data() {
    let dir = TempDir::new().unwrap();
    let ledger = Ledger::open_at(dir.path().join("pointlog.db")).unwrap();
    ledger.upsert("2024-05-13", 8, Direction::Add).unwrap();

    let mut view = WeekHeatmap::new(date(2024, 5, 6), 10);
    hydrate(&ledger, &mut view);
    assert_eq!(view.cells()[0].points, 0);

    view.shift_week(1);
    assert_eq!(view.cells()[0].points, 8);

    view.shift_week(-1);
    assert_eq!(view.anchor(), date(2024, 5, 6));
}

#[test]
fn stored_goal_drives_normalization() {
    let dir = TempDir::new().unwrap();
    let ledger = Ledger::open_at(dir.path().join("pointlog.db")).unwrap();
    ledger.upsert("2024-05-06", 5, Direction::Add).unwrap();

    let settings = Settings::default();
    let mut view = WeekHeatmap::new(date(2024, 5, 6), settings.points_per_day);
    hydrate(&ledger, &mut view);
    assert_eq!(view.cells()[0].intensity, 77);

    view.set_goal(0);
    assert_eq!(view.cells()[0].intensity, 0);
}

#[test]
fn pointer_drives_hover_fade_over_cells() {
    let layout = RowLayout {
        area_width: 350.0,
        cell_size: 40.0,
        spacing: 5.0,
        top: 10.0,
    };
    let mut fade = pointlog_core::HoverFade::with_limits(0.5, 1.0);

    // pointer over cell 2
    fade.point_to(layout.hit_test(layout.cell_x(2) + 20.0, 30.0));
    assert_eq!(fade.state(), HoverState::FadingIn { day: 2 });
    fade.tick();
    fade.tick();
    assert_eq!(fade.state(), HoverState::Hovering { day: 2 });

    // pointer leaves the band
    fade.point_to(layout.hit_test(layout.cell_x(2) + 20.0, 100.0));
    assert_eq!(fade.state(), HoverState::Idle);
}
