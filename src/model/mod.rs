//! Domain model for the study planner
//!
//! All records are plain serde structs owned by the [`StudyStore`](crate::store::StudyStore).
//! Timestamps are Unix seconds; durations are minutes.

pub mod admin;
pub mod book;
pub mod flashcard;
pub mod quiz;
pub mod session;
pub mod subject;
pub mod task;
pub mod user;

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

pub use admin::{AdminStats, SystemHealth};
pub use book::{Book, BookHighlight, BookNote, BookPage};
pub use flashcard::{CardKind, Flashcard};
pub use quiz::{Quiz, QuizAttempt, QuizQuestion};
pub use session::{SessionKind, StudySession};
pub use subject::{Subject, SubjectPatch};
pub use task::{StudyTask, TaskKind, TaskPriority};
pub use user::{Achievement, Rarity, Role, User, UserPreferences, UserStatistics};

/// Course-level difficulty (subjects, books)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

/// Per-item difficulty (tasks, flashcards, quiz questions)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Current wall-clock time as Unix seconds
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() as i64)
}
