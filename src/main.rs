//! Daily Planner - Main Entry Point
//!
//! Command line front end over a JSON task file.
//! The actual implementation is in the `daily_planner` library.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use daily_planner::formatting::{format_tasks, numbered};
use daily_planner::{Item, Storage, Tracker};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Daily Planner - personal task tracking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file
    #[arg(long, short, env = "DAILY_PLANNER_FILE", default_value = "tasks.json")]
    file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Optional description
        #[arg(long, short, default_value = "")]
        description: String,
        /// Optional due date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Only completed tasks
        #[arg(long, group = "filter")]
        completed: bool,
        /// Only uncompleted tasks
        #[arg(long, group = "filter")]
        uncompleted: bool,
        /// Only overdue tasks
        #[arg(long, group = "filter")]
        overdue: bool,
        /// Hide descriptions and due dates
        #[arg(long)]
        brief: bool,
    },
    /// Mark a task as completed
    Done {
        /// Position shown by `list` (1-based)
        number: usize,
    },
    /// Mark a task as not completed
    Undone {
        /// Position shown by `list` (1-based)
        number: usize,
    },
    /// Remove a task
    Remove {
        /// Position shown by `list` (1-based)
        number: usize,
    },
    /// Remove all tasks
    Clear,
    /// Check whether a task title is between 2 and 20 characters
    CheckTitle {
        /// Position shown by `list` (1-based)
        number: usize,
    },
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let storage = Storage::new(&args.file);
    let mut tracker = Tracker::from(
        storage
            .load()
            .with_context(|| format!("Failed to load tasks from {}", args.file))?,
    );
    debug!(file = %args.file, count = tracker.len(), "Task file loaded");

    let changed = run(args.command, &mut tracker)?;

    if changed {
        storage
            .save(tracker.tasks())
            .with_context(|| format!("Failed to save tasks to {}", args.file))?;
    }
    Ok(())
}

/// Execute one command; returns whether the task list needs saving
fn run(command: Command, tracker: &mut Tracker) -> Result<bool> {
    match command {
        Command::Add {
            title,
            description,
            due,
        } => {
            let item = match due {
                Some(ref due) => Item::with_due_text(&title, &description, due)?,
                None => Item::new(&title, &description, None)?,
            };
            println!("Added: {}", item);
            tracker.add_task(item);
            Ok(true)
        }
        Command::List {
            completed,
            uncompleted,
            overdue,
            brief,
        } => {
            let selected = if completed {
                tracker.get_completed_tasks()
            } else if uncompleted {
                tracker.get_uncompleted_tasks()
            } else if overdue {
                tracker.get_overdue_tasks()
            } else {
                tracker.tasks().iter().collect()
            };
            let rows = numbered(tracker.tasks(), &selected);
            print!("{}", format_tasks(&rows, !brief));
            if rows.is_empty() {
                println!();
            }
            Ok(false)
        }
        Command::Done { number } => {
            let task = task_mut(tracker, number)?;
            task.mark_completed();
            println!("Completed: {}", task);
            Ok(true)
        }
        Command::Undone { number } => {
            let task = task_mut(tracker, number)?;
            task.mark_uncompleted();
            println!("Reopened: {}", task);
            Ok(true)
        }
        Command::Remove { number } => {
            let index = position(number)?;
            let removed = tracker.remove_at(index)?;
            println!("Removed: {}", removed);
            Ok(true)
        }
        Command::Clear => {
            let count = tracker.len();
            tracker.clear_all();
            println!("Removed {} task(s)", count);
            Ok(true)
        }
        Command::CheckTitle { number } => {
            let task = tracker
                .get(position(number)?)
                .with_context(|| format!("No task at position {}", number))?;
            if task.is_title_valid() {
                println!("Title '{}' is valid", task.title());
            } else {
                println!("Title '{}' should be 2-20 characters long", task.title());
            }
            Ok(false)
        }
    }
}

fn position(number: usize) -> Result<usize> {
    if number == 0 {
        bail!("Task numbers start at 1");
    }
    Ok(number - 1)
}

fn task_mut(tracker: &mut Tracker, number: usize) -> Result<&mut Item> {
    let index = position(number)?;
    tracker
        .get_mut(index)
        .with_context(|| format!("No task at position {}", number))
}

/// Initializes the logging subsystem.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
