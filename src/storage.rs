//! JSON file persistence for tasks
//!
//! A task file is a pretty-printed JSON array with one [`ItemRecord`] per
//! task. Items are rebuilt through the normal constructors on load, so a
//! file can never smuggle in an item that breaks the title rules.

use crate::error::{Error, Result};
use crate::planner::Item;
use crate::validation::{format_iso_datetime, parse_iso_datetime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serialized form of one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title().to_string(),
            description: item.description().to_string(),
            due_date: item.due_date().as_ref().map(format_iso_datetime),
            completed: item.is_completed(),
            created_at: Some(format_iso_datetime(&item.created_at())),
        }
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = Error;

    fn try_from(record: ItemRecord) -> Result<Self> {
        let due_date = record
            .due_date
            .as_deref()
            .map(parse_iso_datetime)
            .transpose()?;
        let mut item = Item::new(&record.title, &record.description, due_date)?;

        if let Some(ref created_at) = record.created_at {
            item = item.restore_created_at(parse_iso_datetime(created_at)?);
        }
        if record.completed {
            item.mark_completed();
        }
        Ok(item)
    }
}

/// Serialize tasks to a pretty-printed JSON document
pub fn tasks_to_json(tasks: &[Item]) -> Result<String> {
    let records: Vec<ItemRecord> = tasks.iter().map(ItemRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse a JSON document into tasks
///
/// Fails on the first invalid record; no partial list is returned.
pub fn tasks_from_json(content: &str) -> Result<Vec<Item>> {
    let records: Vec<ItemRecord> = serde_json::from_str(content)?;
    records.into_iter().map(Item::try_from).collect()
}

/// Write tasks to `path`, overwriting any existing file
pub fn save_tasks_to_file(tasks: &[Item], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content = tasks_to_json(tasks)?;
    fs::write(path, content)?;
    info!(path = %path.display(), count = tasks.len(), "Saved tasks");
    Ok(())
}

/// Read tasks from `path`
///
/// A missing file is an I/O error; see [`Storage::load`] for the lenient variant.
pub fn load_tasks_from_file(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let tasks = tasks_from_json(&content)?;
    info!(path = %path.display(), count = tasks.len(), "Loaded tasks");
    Ok(tasks)
}

/// A task file at a fixed path
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load tasks, treating a missing file as an empty list
    pub fn load(&self) -> Result<Vec<Item>> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "Task file does not exist yet");
            return Ok(Vec::new());
        }

        load_tasks_from_file(&self.file_path)
    }

    pub fn save(&self, tasks: &[Item]) -> Result<()> {
        save_tasks_to_file(tasks, &self.file_path)
    }
}
