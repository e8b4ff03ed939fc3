//! Subjects and their derived progress counters

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// A course or topic of study
///
/// `progress`, `total_tasks` and `completed_tasks` are derived from the task
/// collection and recomputed by the store whenever a task under this subject
/// changes completion state. They are never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display colour (hex, e.g. "#FF6B6B")
    pub color: String,
    /// Completion percentage (0-100), derived
    pub progress: f32,
    /// Total tasks under this subject, derived
    pub total_tasks: u32,
    /// Completed tasks under this subject, derived
    pub completed_tasks: u32,
    /// Unix timestamp of the exam date, if scheduled
    pub exam_date: Option<i64>,
    /// Description or summary
    pub description: Option<String>,
    /// Course-level difficulty
    pub difficulty: Difficulty,
    /// Estimated hours to completion
    pub estimated_hours: u32,
    /// Free-form tags
    pub tags: Vec<String>,
    /// User id of the creator
    pub created_by: String,
    /// Visible to other users
    pub is_public: bool,
    /// Average rating (0-5)
    pub rating: f32,
    /// Number of enrolled students
    pub enrolled_students: u32,
}

impl Subject {
    /// Create a subject with empty derived counters
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            progress: 0.0,
            total_tasks: 0,
            completed_tasks: 0,
            exam_date: None,
            description: None,
            difficulty: Difficulty::default(),
            estimated_hours: 0,
            tags: Vec::new(),
            created_by: String::new(),
            is_public: false,
            rating: 0.0,
            enrolled_students: 0,
        }
    }
}

/// A partial update to a subject
///
/// Only the fields that are `Some` are merged; derived counters cannot be
/// patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub exam_date: Option<i64>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub estimated_hours: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
    pub rating: Option<f32>,
}

impl SubjectPatch {
    /// Merge this patch into a subject, leaving unset fields unchanged
    pub fn apply(self, subject: &mut Subject) {
        if let Some(name) = self.name {
            subject.name = name;
        }
        if let Some(color) = self.color {
            subject.color = color;
        }
        if let Some(exam_date) = self.exam_date {
            subject.exam_date = Some(exam_date);
        }
        if let Some(description) = self.description {
            subject.description = Some(description);
        }
        if let Some(difficulty) = self.difficulty {
            subject.difficulty = difficulty;
        }
        if let Some(estimated_hours) = self.estimated_hours {
            subject.estimated_hours = estimated_hours;
        }
        if let Some(tags) = self.tags {
            subject.tags = tags;
        }
        if let Some(is_public) = self.is_public {
            subject.is_public = is_public;
        }
        if let Some(rating) = self.rating {
            subject.rating = rating;
        }
    }
}
