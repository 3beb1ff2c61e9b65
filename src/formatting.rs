//! Formatting helper functions for task listings
//!
//! This module renders tasks for the command line front end.

use crate::planner::Item;

/// Format numbered tasks into a display string
///
/// # Arguments
/// * `tasks` - `(position, task)` pairs; positions are shown 1-based
/// * `show_details` - Whether to include description and due date lines
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[(usize, &Item)], show_details: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for (index, task) in tasks {
        result.push_str(&format!("{:>3}. {}", index + 1, task));
        if task.is_overdue() {
            result.push_str(" OVERDUE");
        }
        result.push('\n');

        if show_details {
            if !task.description().is_empty() {
                result.push_str(&format!("     Description: {}\n", task.description()));
            }
            if let Some(due) = task.due_date() {
                result.push_str(&format!("     Due: {}\n", due.format("%Y-%m-%d %H:%M")));
            }
        }
    }

    result
}

/// Pair each task with its position in the full list
pub fn numbered<'a>(all: &'a [Item], selected: &[&'a Item]) -> Vec<(usize, &'a Item)> {
    all.iter()
        .enumerate()
        .filter(|(_, task)| selected.iter().any(|s| std::ptr::eq(*s, *task)))
        .collect()
}
