use crate::error::{Error, Result};
use crate::planner::item::Item;
use tracing::debug;

/// In-memory, ordered collection of tasks
///
/// Items keep their insertion order and duplicates are allowed. The tracker
/// owns the items it holds; callers reach them through [`Tracker::get_mut`]
/// to change their completion state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    pub(crate) tasks: Vec<Item>,
}

impl Tracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Item] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.tasks.get_mut(index)
    }

    /// Append a task to the end of the collection
    pub fn add_task(&mut self, task: Item) {
        debug!(title = task.title(), "Adding task");
        self.tasks.push(task);
    }

    /// Remove the first task equal to `task`
    ///
    /// # Returns
    /// The removed task, or `Error::NotFound` (leaving the collection
    /// untouched) when no equal task is held
    pub fn remove_task(&mut self, task: &Item) -> Result<Item> {
        match self.tasks.iter().position(|t| t == task) {
            Some(pos) => {
                debug!(title = task.title(), position = pos, "Removing task");
                Ok(self.tasks.remove(pos))
            }
            None => Err(Error::NotFound(task.title().to_string())),
        }
    }

    /// Remove the task at `index` (0-based)
    pub fn remove_at(&mut self, index: usize) -> Result<Item> {
        if index >= self.tasks.len() {
            return Err(Error::NotFound(format!(
                "no task at position {} ({} task(s) held)",
                index + 1,
                self.tasks.len()
            )));
        }
        let task = self.tasks.remove(index);
        debug!(title = task.title(), position = index, "Removing task");
        Ok(task)
    }

    /// Remove every task; a no-op on an empty tracker
    pub fn clear_all(&mut self) {
        debug!(count = self.tasks.len(), "Clearing all tasks");
        self.tasks.clear();
    }

    /// Consume the tracker and return its tasks in order
    pub fn into_tasks(self) -> Vec<Item> {
        self.tasks
    }
}

impl From<Vec<Item>> for Tracker {
    fn from(tasks: Vec<Item>) -> Self {
        Self { tasks }
    }
}
