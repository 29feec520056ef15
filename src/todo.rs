// todo.rs

use crate::error::ValidationError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Display format of `Task::created_at` (minute precision).
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: usize,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    pub fn new(id: usize, text: String, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// How new task ids are chosen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Monotonic per-store counter; ids are never reused.
    #[default]
    Counter,
    /// Current list length at insertion time. Ids can repeat once tasks
    /// have been deleted.
    ListLength,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Pending, FilterMode::Completed];

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Pending => "Pending only",
            FilterMode::Completed => "Completed only",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Pending => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    pub fn index(self) -> usize {
        match self {
            FilterMode::All => 0,
            FilterMode::Pending => 1,
            FilterMode::Completed => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Ordered, in-memory list of tasks for one session.
#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    tasks: Vec<Task>,
    id_policy: IdPolicy,
    next_id: usize,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_policy(id_policy: IdPolicy) -> Self {
        Self {
            id_policy,
            ..Self::default()
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First task with `id`, in insertion order.
    pub fn get(&self, id: usize) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, text: &str) -> Result<&Task, ValidationError> {
        self.add_at(text, Local::now())
    }

    /// Appends a task stamped with `now`. The stored text is trimmed.
    pub fn add_at(&mut self, text: &str, now: DateTime<Local>) -> Result<&Task, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            trace!("rejected empty task text");
            return Err(ValidationError::EmptyText);
        }

        let id = self.allocate_id();
        self.tasks.push(Task::new(id, text.to_string(), now));
        debug!(id, total = self.tasks.len(), "task added");
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    fn allocate_id(&mut self) -> usize {
        match self.id_policy {
            IdPolicy::ListLength => self.tasks.len(),
            IdPolicy::Counter => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        }
    }

    /// Flips the first task with `id`. Returns the new flag, or `None` when
    /// nothing matched.
    pub fn toggle(&mut self, id: usize) -> Option<bool> {
        let todo = self.tasks.iter_mut().find(|t| t.id == id)?;
        todo.completed = !todo.completed;
        debug!(id, completed = todo.completed, "task toggled");
        Some(todo.completed)
    }

    /// Removes every task with `id` and returns how many went.
    pub fn delete(&mut self, id: usize) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = before - self.tasks.len();
        debug!(id, removed, "task deleted");
        removed
    }

    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        debug!(removed, "completed tasks deleted");
        removed
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        debug!(removed, "all tasks cleared");
        removed
    }

    pub fn count_all(&self) -> usize {
        self.tasks.len()
    }

    pub fn count_completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn count_pending(&self) -> usize {
        self.count_all() - self.count_completed()
    }

    pub fn counts(&self) -> Counts {
        let total = self.count_all();
        let completed = self.count_completed();
        Counts {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn filter(&self, mode: FilterMode) -> Vec<&Task> {
        self.tasks.iter().filter(|t| mode.matches(t)).collect()
    }
}
