use super::types::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// The `id` is a session-scoped handle assigned by the list when the task is
/// created or loaded; it is never written to disk. The persisted record is
/// exactly `text`, `completed`, `deadline`, `priority`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip)]
    pub id: u64,

    pub text: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            deadline: None,
            priority: Priority::default(),
        }
    }

    pub fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// A task is overdue when its deadline is strictly before `today`.
    /// Display-only state, never persisted; completed tasks can be overdue too.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline.is_some_and(|d| d < today)
    }
}
