//! Planner domain models
//!
//! This module contains the task entity and the tracker that holds tasks:
//! - `item`: A single task with its validation and completion state
//! - `tracker`: Ordered collection of tasks with add/remove/clear
//! - `queries`: Completed/uncompleted/overdue views over a tracker

mod item;
mod queries;
mod tracker;

pub use item::{COMPLETED_MARK, Item, UNCOMPLETED_MARK};
pub use tracker::Tracker;
