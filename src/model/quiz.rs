//! Quizzes and quiz attempts
//!
//! Quizzes live only in memory; they are rebuilt from seed data and are not
//! part of the persisted snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{CardKind, ItemDifficulty};

/// A scored set of questions for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub subject_id: String,
    pub questions: Vec<QuizQuestion>,
    /// Time limit in minutes, if any
    pub time_limit_minutes: Option<u32>,
    /// Minimum score (0-100) to pass
    pub passing_score: u32,
    pub attempts: Vec<QuizAttempt>,
    pub created_by: String,
    pub is_public: bool,
    pub difficulty: ItemDifficulty,
}

/// A single quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub kind: CardKind,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub points: u32,
    pub difficulty: ItemDifficulty,
}

/// One user's run through a quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    /// Answers keyed by question id
    pub answers: HashMap<String, String>,
    /// Score achieved (0-100)
    pub score: u32,
    /// Time spent in minutes
    pub time_spent_minutes: u32,
    pub completed_at: i64,
    pub passed: bool,
}

impl Quiz {
    /// Total points across all questions
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    /// Best score across attempts, if any
    pub fn best_score(&self) -> Option<u32> {
        self.attempts.iter().map(|a| a.score).max()
    }
}
