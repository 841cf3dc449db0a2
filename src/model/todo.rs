use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Longest accepted task text, measured after trimming.
pub const MAX_TEXT_LEN: usize = 100;

/// A single task entry in the todo list.
///
/// `id` and `created_at` are fixed at creation; only `completed` changes
/// afterward. `created_at` is stored raw and formatted at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Unique, monotonically increasing (milliseconds at creation)
    pub id: u64,
    /// Trimmed task text, 1..=100 characters
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Local>,
}

impl TodoRecord {
    pub fn new(id: u64, text: String, created_at: DateTime<Local>) -> Self {
        TodoRecord {
            id,
            text,
            completed: false,
            created_at,
        }
    }
}

/// Derived counts over the todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
}

impl TodoStats {
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}
