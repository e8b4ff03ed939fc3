//! Timed study sessions
//!
//! A session is a timed interval of study against one subject. The store
//! keeps at most one active session; finished sessions are appended to
//! history.

use serde::{Deserialize, Serialize};

/// How the session time was spent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    #[default]
    Focused,
    Review,
    Practice,
    Mixed,
}

/// A timed interval of study activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    /// Unique identifier
    pub id: String,
    /// User running the session
    pub user_id: String,
    /// Subject being studied
    pub subject_id: String,
    /// Unix timestamp when the session started
    pub start_time: i64,
    /// Unix timestamp when the session ended; `None` while active
    pub end_time: Option<i64>,
    /// Duration in minutes, computed when the session ends
    pub duration_minutes: u32,
    /// Tasks completed during the session
    pub tasks_completed: u32,
    /// Flashcards reviewed during the session
    pub flashcards_reviewed: u32,
    /// Book pages read during the session
    pub pages_read: u32,
    /// Focus score (0-100)
    pub focus_score: u8,
    /// Breaks taken during the session
    pub breaks_taken: u32,
    /// How the time was spent
    pub kind: SessionKind,
}

impl StudySession {
    /// Start a new session at `now`
    pub fn begin(
        id: impl Into<String>,
        user_id: impl Into<String>,
        subject_id: impl Into<String>,
        now: i64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            subject_id: subject_id.into(),
            start_time: now,
            end_time: None,
            duration_minutes: 0,
            tasks_completed: 0,
            flashcards_reviewed: 0,
            pages_read: 0,
            focus_score: 100,
            breaks_taken: 0,
            kind: SessionKind::default(),
        }
    }

    /// End the session at `now`, computing its duration
    pub fn finish(&mut self, now: i64) {
        self.end_time = Some(now);
        self.duration_minutes = minutes_between(self.start_time, now);
    }

    /// Whether the session is still running
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed minutes at `now`, for the ticking session display
    pub fn elapsed_minutes(&self, now: i64) -> u32 {
        minutes_between(self.start_time, self.end_time.unwrap_or(now))
    }
}

/// Minutes between two timestamps, rounded to the nearest minute
fn minutes_between(start: i64, end: i64) -> u32 {
    let seconds = (end - start).max(0);
    ((seconds as f64) / 60.0).round() as u32
}
