//! Flashcards with spaced-repetition metadata
//!
//! The SM-2 style fields (easiness, interval, repetitions) are initialized and
//! carried through persistence, but no scheduling algorithm advances them yet:
//! a review stamps the card and pushes the next review out by the current
//! fixed interval.

use serde::{Deserialize, Serialize};

use super::ItemDifficulty;

/// Default SM-2 easiness factor for a fresh card
pub const INITIAL_EASINESS: f32 = 2.5;

/// Default review interval in days for a fresh card
pub const INITIAL_INTERVAL_DAYS: u32 = 1;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// The answer format of a flashcard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Multiple choice with a single correct option
    MultipleChoice,
    /// Free-text answer
    #[default]
    ShortAnswer,
    /// True/false statement
    TrueFalse,
    /// Fill in the blank
    FillBlank,
}

/// A single question/answer study unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Unique identifier
    pub id: String,
    /// Owning subject id
    pub subject_id: String,
    /// Question text
    pub question: String,
    /// Expected answer
    pub answer: String,
    /// Answer format
    pub kind: CardKind,
    /// Choices for multiple-choice cards (empty otherwise)
    pub options: Vec<String>,
    /// Index into `options` for multiple-choice cards
    pub correct_option: Option<usize>,
    /// Why the answer is correct
    pub explanation: Option<String>,
    /// Per-item difficulty
    pub difficulty: ItemDifficulty,
    /// Unix timestamp of the last review
    pub last_reviewed: Option<i64>,
    /// Unix timestamp of the next scheduled review
    pub next_review: Option<i64>,
    /// SM-2 easiness factor
    pub easiness: f32,
    /// Current review interval in days
    pub interval_days: u32,
    /// Number of successful repetitions
    pub repetitions: u32,
    /// Free-form tags
    pub tags: Vec<String>,
    /// User id of the creator
    pub created_by: String,
    /// Visible to other users
    pub is_public: bool,
    /// Historical answer success rate (0-100)
    pub success_rate: f32,
}

impl Flashcard {
    /// Create a short-answer card with fresh scheduling fields
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            question: question.into(),
            answer: answer.into(),
            kind: CardKind::default(),
            options: Vec::new(),
            correct_option: None,
            explanation: None,
            difficulty: ItemDifficulty::default(),
            last_reviewed: None,
            next_review: None,
            easiness: INITIAL_EASINESS,
            interval_days: INITIAL_INTERVAL_DAYS,
            repetitions: 0,
            tags: Vec::new(),
            created_by: String::new(),
            is_public: false,
            success_rate: 0.0,
        }
    }

    /// Record a review at `now`
    ///
    /// Stamps `last_reviewed`, bumps the repetition count, and schedules the
    /// next review one interval out. Easiness and interval are left unchanged.
    pub fn mark_reviewed(&mut self, now: i64) {
        self.last_reviewed = Some(now);
        self.repetitions += 1;
        self.next_review = Some(now + self.interval_days as i64 * SECONDS_PER_DAY);
    }

    /// Whether the card is due for review at `now`
    pub fn is_due(&self, now: i64) -> bool {
        self.next_review.is_none_or(|next| next <= now)
    }
}
