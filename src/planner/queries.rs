//! Filtering queries for Tracker
//!
//! Every query borrows the tracker, keeps insertion order and leaves the
//! collection untouched.

use super::item::Item;
use super::tracker::Tracker;
use crate::validation::local_now;
use chrono::NaiveDateTime;

impl Tracker {
    /// Get tasks marked as completed
    pub fn get_completed_tasks(&self) -> Vec<&Item> {
        self.tasks.iter().filter(|t| t.is_completed()).collect()
    }

    /// Get tasks not yet completed
    pub fn get_uncompleted_tasks(&self) -> Vec<&Item> {
        self.tasks.iter().filter(|t| !t.is_completed()).collect()
    }

    /// Get tasks whose due date has passed, relative to the current local time
    pub fn get_overdue_tasks(&self) -> Vec<&Item> {
        self.overdue_tasks_at(local_now())
    }

    /// Get tasks whose due date is strictly before `now`
    pub fn overdue_tasks_at(&self, now: NaiveDateTime) -> Vec<&Item> {
        self.tasks.iter().filter(|t| t.is_overdue_at(now)).collect()
    }
}
