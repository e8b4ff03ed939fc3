//! Study tasks
//!
//! Tasks reference their owning subject by id. They are created standalone or
//! in batches during onboarding, mutated only by completion, and removed only
//! by the subject-deletion cascade.

use serde::{Deserialize, Serialize};

use super::ItemDifficulty;

/// What kind of work a task represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    #[default]
    Reading,
    Practice,
    Quiz,
    Project,
}

/// Scheduling priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A single unit of planned study work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTask {
    /// Unique identifier
    pub id: String,
    /// Owning subject id
    pub subject_id: String,
    /// Display title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Planned duration in minutes
    pub duration_minutes: u32,
    /// Whether the task has been completed
    pub completed: bool,
    /// Unix timestamp of completion, set by the store
    pub completed_at: Option<i64>,
    /// Unix timestamp of the due date
    pub due_date: i64,
    /// Per-item difficulty
    pub difficulty: ItemDifficulty,
    /// Kind of work
    pub kind: TaskKind,
    /// Scheduling priority
    pub priority: TaskPriority,
    /// Free-form tags
    pub tags: Vec<String>,
}

impl StudyTask {
    /// Create an open task due at `due_date`
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        title: impl Into<String>,
        due_date: i64,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            title: title.into(),
            description: String::new(),
            duration_minutes: 30,
            completed: false,
            completed_at: None,
            due_date,
            difficulty: ItemDifficulty::default(),
            kind: TaskKind::default(),
            priority: TaskPriority::default(),
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_open() {
        let task = StudyTask::new("t1", "s1", "Read chapter 3", 1_700_000_000);
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }
}
