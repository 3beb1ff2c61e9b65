//! Daily Planner Library
//!
//! A personal task tracker: tasks with a title, description, optional due
//! date and completion flag, collected in an ordered [`Tracker`] that can be
//! filtered by completion and overdue state, and saved to a JSON file.
//!
//! # Architecture
//!
//! - **Domain Layer**: `planner` module - [`Item`] and [`Tracker`]
//! - **Persistence Layer**: `storage` module - JSON file storage
//! - **Helpers**: `validation` (date parsing, title rules) and `formatting`
//!
//! # Example
//!
//! ```no_run
//! use daily_planner::{Item, Storage, Tracker};
//!
//! fn main() -> daily_planner::Result<()> {
//!     let storage = Storage::new("tasks.json");
//!     let mut tracker = Tracker::from(storage.load()?);
//!
//!     tracker.add_task(Item::with_due_text("Pay rent", "", "2025-06-01")?);
//!     for task in tracker.get_overdue_tasks() {
//!         println!("{}", task);
//!     }
//!
//!     storage.save(tracker.tasks())?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
pub mod planner;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use planner::{Item, Tracker};
pub use storage::{ItemRecord, Storage, load_tasks_from_file, save_tasks_to_file};
