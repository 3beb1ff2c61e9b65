//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use daily_planner::Item;
use daily_planner::validation::local_now;
use tempfile::TempDir;

/// Create a temporary directory and a task file path inside it
///
/// The file itself is not created; keep the `TempDir` alive for the test.
pub fn temp_task_file() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.json");
    (temp_dir, path)
}

/// Create a test task with no description or due date
pub fn create_test_task(title: &str) -> Item {
    Item::new(title, "", None).unwrap()
}

/// Create a test task due `days` days from now (negative for the past)
pub fn create_task_due_in_days(title: &str, days: i64) -> Item {
    Item::new(title, "", Some(local_now() + Duration::days(days))).unwrap()
}

/// Fixed timestamp helper
pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}
