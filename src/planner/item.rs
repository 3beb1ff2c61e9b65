use crate::error::ValidationError;
use crate::validation::{is_title_length_valid, local_now, parse_iso_datetime};
use chrono::NaiveDateTime;
use std::fmt;

/// Marker rendered for completed items
pub const COMPLETED_MARK: char = '✓';

/// Marker rendered for items still to do
pub const UNCOMPLETED_MARK: char = '✗';

/// A single task in the planner
///
/// The title is guaranteed non-empty (after trimming) and `created_at` is
/// fixed at construction, so fields are only reachable through accessors.
/// The completion flag changes only via [`Item::mark_completed`] and
/// [`Item::mark_uncompleted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    description: String,
    due_date: Option<NaiveDateTime>,
    completed: bool,
    created_at: NaiveDateTime,
}

impl Item {
    /// Create a new item with an optional, already-parsed due date
    ///
    /// # Arguments
    /// * `title` - Task title, trimmed before storing
    /// * `description` - Free-form description, trimmed before storing
    /// * `due_date` - Optional deadline
    ///
    /// # Returns
    /// The new item, or `ValidationError::EmptyTitle` if the trimmed title is empty
    pub fn new(
        title: &str,
        description: &str,
        due_date: Option<NaiveDateTime>,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            due_date,
            completed: false,
            created_at: local_now(),
        })
    }

    /// Create a new item whose due date is given as ISO-8601 text
    ///
    /// The title is checked before the date, so an empty title is reported
    /// even when the date is malformed too.
    pub fn with_due_text(
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let due_date = parse_iso_datetime(due_date)?;
        Self::new(title, description, Some(due_date))
    }

    /// Restore the creation time of an item rebuilt from storage
    ///
    /// Only the storage layer calls this, while turning a record back into an
    /// item and before the item is handed out. It carries the original
    /// construction time across a save/load round trip; once an item is in a
    /// caller's hands its `created_at` never changes.
    pub(crate) fn restore_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<NaiveDateTime> {
        self.due_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Check the title against the 2..=20 character rule
    ///
    /// Not applied by the constructors; callers that want the stricter rule
    /// must ask for it.
    pub fn is_title_valid(&self) -> bool {
        is_title_length_valid(&self.title)
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn mark_uncompleted(&mut self) {
        self.completed = false;
    }

    /// Check if the due date has passed, relative to the current local time
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(local_now())
    }

    /// Check if the due date is strictly before `now`
    ///
    /// Items without a due date are never overdue; an item due exactly at
    /// `now` is not overdue yet.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        self.due_date.is_some_and(|due| now > due)
    }
}

impl fmt::Display for Item {
    /// Renders as `[✓] Title (YYYY-MM-DD)` using the creation date
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed {
            COMPLETED_MARK
        } else {
            UNCOMPLETED_MARK
        };
        write!(
            f,
            "[{}] {} ({})",
            mark,
            self.title,
            self.created_at.format("%Y-%m-%d")
        )
    }
}
