//! The central application store
//!
//! [`StudyStore`] is the single source of truth for all domain collections and
//! UI selection state. Operations are synchronous and run to completion; any
//! derived field (subject progress, task counters) is recomputed within the
//! same call that invalidates it, so readers never observe an inconsistent
//! pair. A subset of the store survives restarts via [`persist`].

pub mod persist;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog;
use crate::model::{
    AdminStats, Book, Flashcard, Quiz, Role, StudySession, StudyTask, Subject, SubjectPatch, User,
    unix_now,
};

/// Which screen the UI is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum View {
    #[default]
    Landing,
    Onboarding,
    Hub,
    Dashboard,
    Flashcards,
    Generator,
    Settings,
    Admin,
    Library,
    Quiz,
    Profile,
}

impl View {
    /// All view tokens, in display order
    pub const ALL: &'static [View] = &[
        View::Landing,
        View::Onboarding,
        View::Hub,
        View::Dashboard,
        View::Flashcards,
        View::Generator,
        View::Settings,
        View::Admin,
        View::Library,
        View::Quiz,
        View::Profile,
    ];

    /// The lowercase token used on the wire and the CLI
    pub fn token(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Onboarding => "onboarding",
            View::Hub => "hub",
            View::Dashboard => "dashboard",
            View::Flashcards => "flashcards",
            View::Generator => "generator",
            View::Settings => "settings",
            View::Admin => "admin",
            View::Library => "library",
            View::Quiz => "quiz",
            View::Profile => "profile",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for View {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .iter()
            .copied()
            .find(|v| v.token() == s)
            .ok_or_else(|| StoreError::UnknownView(s.to_string()))
    }
}

/// Precondition failures for store operations
///
/// Pure appends are infallible; only operations that resolve a foreign key or
/// require a signed-in user can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    #[error("unknown task: {0}")]
    UnknownTask(String),

    #[error("unknown achievement: {0}")]
    UnknownAchievement(String),

    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("no user is signed in")]
    NotSignedIn,
}

/// The single source of truth for domain data and UI state
///
/// Views hold no copies of this data; they read projections and call the
/// mutation operations below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyStore {
    /// The signed-in user, if any
    pub user: Option<User>,
    pub is_authenticated: bool,

    // Study data
    pub subjects: Vec<Subject>,
    pub tasks: Vec<StudyTask>,
    pub flashcards: Vec<Flashcard>,
    pub books: Vec<Book>,
    pub quizzes: Vec<Quiz>,
    /// Finished sessions, in completion order
    pub study_sessions: Vec<StudySession>,

    // UI state
    pub current_view: View,
    pub selected_subject: Option<String>,
    pub selected_book: Option<String>,
    /// The one session currently running, if any
    pub active_session: Option<StudySession>,

    // Admin state
    pub admin_stats: Option<AdminStats>,
    pub all_users: Vec<User>,
}

impl StudyStore {
    /// Sign a user in
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Sign the current user out
    pub fn sign_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.current_view = View::Landing;
    }

    /// Switch the current view, returning the view actually applied
    ///
    /// The admin view requires an admin role; anyone else is routed to the
    /// dashboard instead.
    pub fn set_current_view(&mut self, view: View) -> View {
        let is_admin = self.user.as_ref().is_some_and(|u| u.role == Role::Admin);
        let applied = if view == View::Admin && !is_admin { View::Dashboard } else { view };
        self.current_view = applied;
        applied
    }

    // --- Subjects ---

    /// Append a subject; insertion order is preserved
    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Look up a subject by id
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Merge a partial update into a subject; untouched fields keep their values
    pub fn update_subject(&mut self, id: &str, patch: SubjectPatch) -> Result<(), StoreError> {
        let subject = self
            .subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::UnknownSubject(id.to_string()))?;
        patch.apply(subject);
        Ok(())
    }

    /// Remove a subject and cascade its tasks and flashcards
    ///
    /// Books keep their subject reference. Returns whether a subject was
    /// removed.
    pub fn delete_subject(&mut self, id: &str) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != id);
        if self.subjects.len() == before {
            return false;
        }
        self.tasks.retain(|t| t.subject_id != id);
        self.flashcards.retain(|c| c.subject_id != id);
        tracing::debug!(subject = id, "deleted subject with task/flashcard cascade");
        true
    }

    // --- Tasks ---

    /// Append a task and refresh its subject's counters
    pub fn add_task(&mut self, task: StudyTask) -> Result<(), StoreError> {
        if self.subject(&task.subject_id).is_none() {
            return Err(StoreError::UnknownSubject(task.subject_id));
        }
        let subject_id = task.subject_id.clone();
        self.tasks.push(task);
        self.recompute_subject_counters(&subject_id);
        Ok(())
    }

    /// Mark a task completed and recompute the owning subject's progress
    ///
    /// Completing an already-completed task is a no-op; the completion
    /// timestamp and subject counters are not touched again.
    pub fn complete_task(&mut self, task_id: &str) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| StoreError::UnknownTask(task_id.to_string()))?;

        if task.completed {
            return Ok(());
        }

        task.completed = true;
        task.completed_at = Some(unix_now());
        let subject_id = task.subject_id.clone();
        self.recompute_subject_counters(&subject_id);
        Ok(())
    }

    /// Rederive a subject's task counters and progress from the task collection
    ///
    /// All three derived fields are written in the same call so a reader never
    /// sees a stale pair.
    fn recompute_subject_counters(&mut self, subject_id: &str) {
        let total = self.tasks.iter().filter(|t| t.subject_id == subject_id).count() as u32;
        let completed = self
            .tasks
            .iter()
            .filter(|t| t.subject_id == subject_id && t.completed)
            .count() as u32;

        if let Some(subject) = self.subjects.iter_mut().find(|s| s.id == subject_id) {
            subject.total_tasks = total;
            subject.completed_tasks = completed;
            subject.progress =
                if total > 0 { completed as f32 / total as f32 * 100.0 } else { 0.0 };
        }
    }

    // --- Flashcards ---

    /// Append a flashcard
    pub fn add_flashcard(&mut self, flashcard: Flashcard) {
        self.flashcards.push(flashcard);
    }

    /// Synthesize `count` flashcards for a subject from its template table
    ///
    /// Templates are cycled in order; each full pass bumps the variation
    /// number appended to the question text. Returns the number of cards
    /// added, which is always exactly `count`.
    pub fn generate_bulk_flashcards(
        &mut self,
        subject_id: &str,
        count: u32,
    ) -> Result<u32, StoreError> {
        let subject = self
            .subject(subject_id)
            .ok_or_else(|| StoreError::UnknownSubject(subject_id.to_string()))?;
        let subject_name = subject.name.clone();
        let subject_tag = subject_name.to_lowercase();
        let templates = catalog::templates_for(&subject_name);
        let created_by =
            self.user.as_ref().map_or_else(|| "system".to_string(), |u| u.id.clone());
        let now = unix_now();

        let existing =
            self.flashcards.iter().filter(|c| c.subject_id == subject_id).count() as u32;

        for i in 0..count {
            let template = &templates[(i as usize) % templates.len()];
            let variation = i / templates.len() as u32 + 1;

            let mut card = template.instantiate(
                format!("card-{subject_id}-{}", existing + i),
                subject_id,
                variation,
            );
            card.next_review = Some(now + 24 * 60 * 60);
            card.tags = vec![subject_tag.clone()];
            card.created_by = created_by.clone();
            card.is_public = true;
            self.flashcards.push(card);
        }

        tracing::debug!(subject = subject_id, count, "generated flashcards");
        Ok(count)
    }

    // --- Books ---

    /// Append a book
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Mutable access to a book for reading-state updates
    pub fn book_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    // --- Quizzes ---

    /// Append a quiz
    pub fn add_quiz(&mut self, quiz: Quiz) {
        self.quizzes.push(quiz);
    }

    // --- Study sessions ---

    /// Start a study session against a subject
    ///
    /// Requires a signed-in user and an existing subject. If a session is
    /// already active it is ended and recorded first, so no session is ever
    /// silently discarded.
    pub fn start_study_session(&mut self, subject_id: &str) -> Result<&StudySession, StoreError> {
        let user_id = self.user.as_ref().ok_or(StoreError::NotSignedIn)?.id.clone();
        if self.subject(subject_id).is_none() {
            return Err(StoreError::UnknownSubject(subject_id.to_string()));
        }

        let now = unix_now();
        if let Some(mut previous) = self.active_session.take() {
            tracing::warn!(session = %previous.id, "ending still-active session before starting a new one");
            previous.finish(now);
            self.study_sessions.push(previous);
        }

        let id = format!("session-{now}-{}", self.study_sessions.len());
        let session = StudySession::begin(id, user_id, subject_id, now);
        Ok(self.active_session.insert(session))
    }

    /// End the active session, appending it to history
    ///
    /// No-op returning `None` if no session is active.
    pub fn end_study_session(&mut self) -> Option<&StudySession> {
        let mut session = self.active_session.take()?;
        session.finish(unix_now());
        self.study_sessions.push(session);
        self.study_sessions.last()
    }

    /// Elapsed minutes of the active session at `now`, if one is running
    ///
    /// This is the poll the ticking session display makes against the wall
    /// clock.
    pub fn active_session_elapsed(&self, now: i64) -> Option<u32> {
        self.active_session.as_ref().map(|s| s.elapsed_minutes(now))
    }

    // --- Achievements ---

    /// Unlock an achievement for the signed-in user
    ///
    /// Idempotent per achievement id: a repeated unlock returns `Ok(false)`
    /// and grants no additional experience.
    pub fn unlock_achievement(&mut self, achievement_id: &str) -> Result<bool, StoreError> {
        let spec = catalog::achievement(achievement_id)
            .ok_or_else(|| StoreError::UnknownAchievement(achievement_id.to_string()))?;
        let user = self.user.as_mut().ok_or(StoreError::NotSignedIn)?;

        if user.has_achievement(achievement_id) {
            return Ok(false);
        }

        user.grant(spec.unlock_at(unix_now()), spec.xp);
        tracing::info!(achievement = achievement_id, xp = spec.xp, "achievement unlocked");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::model::ItemDifficulty;

    fn signed_in_store() -> StudyStore {
        let mut store = StudyStore::default();
        store.sign_in(User::new("user-1", "Alex Chen", "alex@example.com"));
        store
    }

    fn math_store() -> StudyStore {
        let mut store = signed_in_store();
        store.add_subject(Subject::new("math-id", "Advanced Mathematics", "#FF6B6B"));
        store
    }

    fn add_tasks(store: &mut StudyStore, subject_id: &str, count: u32) {
        for i in 0..count {
            store
                .add_task(StudyTask::new(format!("task-{i}"), subject_id, format!("Task {i}"), 0))
                .unwrap();
        }
    }

    #[test]
    fn add_subject_preserves_insertion_order() {
        let mut store = StudyStore::default();
        store.add_subject(Subject::new("a", "Algebra", "#111111"));
        store.add_subject(Subject::new("b", "Biology", "#222222"));
        store.add_subject(Subject::new("c", "Chemistry", "#333333"));

        let ids: Vec<_> = store.subjects.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn update_subject_merges_partial_fields() {
        let mut store = math_store();
        store
            .update_subject(
                "math-id",
                SubjectPatch { rating: Some(4.8), ..Default::default() },
            )
            .unwrap();

        let subject = store.subject("math-id").unwrap();
        assert_eq!(subject.rating, 4.8);
        assert_eq!(subject.name, "Advanced Mathematics");
    }

    #[test]
    fn update_unknown_subject_is_an_error() {
        let mut store = StudyStore::default();
        let err = store.update_subject("nope", SubjectPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::UnknownSubject("nope".into()));
    }

    #[test]
    fn delete_subject_cascades_tasks_and_flashcards() {
        let mut store = math_store();
        store.add_subject(Subject::new("bio-id", "Molecular Biology", "#83C5BE"));
        add_tasks(&mut store, "math-id", 3);
        store.generate_bulk_flashcards("math-id", 8).unwrap();
        store.generate_bulk_flashcards("bio-id", 2).unwrap();

        assert!(store.delete_subject("math-id"));

        assert!(store.subject("math-id").is_none());
        assert!(store.tasks.iter().all(|t| t.subject_id != "math-id"));
        assert!(store.flashcards.iter().all(|c| c.subject_id != "math-id"));
        // Other subjects keep their data
        assert_eq!(store.flashcards.len(), 2);
    }

    #[test]
    fn delete_subject_leaves_books_alone() {
        let mut store = math_store();
        store.add_book(Book::new("book-1", "Calculus Guide", "math-id"));

        store.delete_subject("math-id");
        assert_eq!(store.books.len(), 1);
    }

    #[test]
    fn delete_unknown_subject_returns_false() {
        let mut store = StudyStore::default();
        assert!(!store.delete_subject("nope"));
    }

    #[test]
    fn add_task_requires_existing_subject() {
        let mut store = StudyStore::default();
        let err = store.add_task(StudyTask::new("t1", "nope", "Orphan", 0)).unwrap_err();
        assert_eq!(err, StoreError::UnknownSubject("nope".into()));
    }

    #[test]
    fn progress_tracks_completion_ratio() {
        let mut store = math_store();
        add_tasks(&mut store, "math-id", 4);
        store.complete_task("task-0").unwrap();

        let subject = store.subject("math-id").unwrap();
        assert_eq!(subject.total_tasks, 4);
        assert_eq!(subject.completed_tasks, 1);
        assert_eq!(subject.progress, 25.0);

        // Completing a second task: 2 of 4 done
        store.complete_task("task-1").unwrap();
        let subject = store.subject("math-id").unwrap();
        assert_eq!(subject.completed_tasks, 2);
        assert_eq!(subject.progress, 50.0);
    }

    #[test]
    fn progress_invariant_holds_after_every_completion() {
        let mut store = math_store();
        add_tasks(&mut store, "math-id", 7);

        for i in 0..7 {
            store.complete_task(&format!("task-{i}")).unwrap();
            let subject = store.subject("math-id").unwrap();
            assert!(subject.total_tasks > 0);
            assert_eq!(
                subject.progress,
                subject.completed_tasks as f32 / subject.total_tasks as f32 * 100.0
            );
        }
    }

    #[test]
    fn complete_task_stamps_completion_time() {
        let mut store = math_store();
        add_tasks(&mut store, "math-id", 1);
        store.complete_task("task-0").unwrap();

        let task = &store.tasks[0];
        assert!(task.completed);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn completing_twice_is_a_noop() {
        let mut store = math_store();
        add_tasks(&mut store, "math-id", 2);
        store.complete_task("task-0").unwrap();
        let stamp = store.tasks[0].completed_at;

        store.complete_task("task-0").unwrap();

        assert_eq!(store.tasks[0].completed_at, stamp);
        let subject = store.subject("math-id").unwrap();
        assert_eq!(subject.completed_tasks, 1);
        assert_eq!(subject.progress, 50.0);
    }

    #[test]
    fn complete_unknown_task_is_an_error() {
        let mut store = StudyStore::default();
        let err = store.complete_task("nope").unwrap_err();
        assert_eq!(err, StoreError::UnknownTask("nope".into()));
    }

    #[test]
    fn generate_bulk_adds_exactly_count_cards() {
        let mut store = math_store();
        let added = store.generate_bulk_flashcards("math-id", 10).unwrap();
        assert_eq!(added, 10);
        assert_eq!(store.flashcards.len(), 10);
    }

    #[test]
    fn generate_bulk_zero_is_allowed() {
        let mut store = math_store();
        store.generate_bulk_flashcards("math-id", 0).unwrap();
        assert!(store.flashcards.is_empty());
    }

    #[test]
    fn generate_bulk_for_unknown_subject_is_an_error() {
        let mut store = StudyStore::default();
        let err = store.generate_bulk_flashcards("nope", 5).unwrap_err();
        assert_eq!(err, StoreError::UnknownSubject("nope".into()));
    }

    #[test]
    fn generate_bulk_cycles_templates_with_variation_suffix() {
        let mut store = math_store();
        store.generate_bulk_flashcards("math-id", 10).unwrap();

        // First pass through the 4-entry table: untouched questions
        for i in 0..4 {
            assert!(!store.flashcards[i].question.contains("(Variation"));
        }
        // Second pass repeats the table with a variation marker
        for i in 4..8 {
            let question = &store.flashcards[i].question;
            let base = &store.flashcards[i - 4].question;
            assert_eq!(question, &format!("{base} (Variation 2)"));
        }
        // Third pass begins at index 8
        assert!(store.flashcards[8].question.ends_with("(Variation 3)"));
    }

    #[test]
    fn generated_cards_are_tagged_and_attributed() {
        let mut store = math_store();
        store.generate_bulk_flashcards("math-id", 1).unwrap();

        let card = &store.flashcards[0];
        assert_eq!(card.subject_id, "math-id");
        assert_eq!(card.tags, vec!["advanced mathematics".to_string()]);
        assert_eq!(card.created_by, "user-1");
        assert!(card.is_public);
        assert!(card.next_review.is_some());
    }

    #[test]
    fn generated_card_ids_stay_unique_across_calls() {
        let mut store = math_store();
        store.generate_bulk_flashcards("math-id", 3).unwrap();
        store.generate_bulk_flashcards("math-id", 3).unwrap();

        let mut ids: Vec<_> = store.flashcards.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn session_lifecycle_records_duration_and_clears_slot() {
        let mut store = math_store();
        store.start_study_session("math-id").unwrap();
        assert!(store.active_session.is_some());

        let session = store.end_study_session().unwrap();
        assert!(session.end_time.is_some());
        let expected =
            ((session.end_time.unwrap() - session.start_time) as f64 / 60.0).round() as u32;
        assert_eq!(session.duration_minutes, expected);

        assert!(store.active_session.is_none());
        assert_eq!(store.study_sessions.len(), 1);
    }

    #[test]
    fn start_session_requires_user() {
        let mut store = StudyStore::default();
        store.add_subject(Subject::new("math-id", "Advanced Mathematics", "#FF6B6B"));
        let err = store.start_study_session("math-id").unwrap_err();
        assert_eq!(err, StoreError::NotSignedIn);
    }

    #[test]
    fn start_session_requires_subject() {
        let mut store = signed_in_store();
        let err = store.start_study_session("nope").unwrap_err();
        assert_eq!(err, StoreError::UnknownSubject("nope".into()));
    }

    #[test]
    fn double_start_records_the_first_session() {
        let mut store = math_store();
        store.add_subject(Subject::new("bio-id", "Molecular Biology", "#83C5BE"));

        let first_id = store.start_study_session("math-id").unwrap().id.clone();
        let second_id = store.start_study_session("bio-id").unwrap().id.clone();

        assert_ne!(first_id, second_id);
        assert_eq!(store.study_sessions.len(), 1);
        assert_eq!(store.study_sessions[0].id, first_id);
        assert!(store.study_sessions[0].end_time.is_some());
        assert_eq!(store.active_session.as_ref().unwrap().subject_id, "bio-id");
    }

    #[test]
    fn end_session_without_active_is_a_noop() {
        let mut store = StudyStore::default();
        assert!(store.end_study_session().is_none());
        assert!(store.study_sessions.is_empty());
    }

    #[test]
    fn active_session_elapsed_polls_the_clock() {
        let mut store = math_store();
        assert!(store.active_session_elapsed(0).is_none());

        store.start_study_session("math-id").unwrap();
        let start = store.active_session.as_ref().unwrap().start_time;
        assert_eq!(store.active_session_elapsed(start + 600), Some(10));
    }

    #[test]
    fn unlock_week_streak_grants_rare_achievement_and_500_xp() {
        let mut store = signed_in_store();
        let unlocked = store.unlock_achievement("week-streak").unwrap();
        assert!(unlocked);

        let user = store.user.as_ref().unwrap();
        assert_eq!(user.achievements.len(), 1);
        assert_eq!(user.achievements[0].rarity, crate::model::Rarity::Rare);
        assert_eq!(user.experience, 500);
    }

    #[test]
    fn duplicate_unlock_grants_nothing() {
        let mut store = signed_in_store();
        store.unlock_achievement("week-streak").unwrap();
        let unlocked_again = store.unlock_achievement("week-streak").unwrap();
        assert!(!unlocked_again);

        let user = store.user.as_ref().unwrap();
        assert_eq!(user.achievements.len(), 1);
        assert_eq!(user.experience, 500);
    }

    #[test]
    fn unlock_requires_user_and_known_id() {
        let mut store = StudyStore::default();
        assert_eq!(store.unlock_achievement("week-streak").unwrap_err(), StoreError::NotSignedIn);

        let mut store = signed_in_store();
        assert_eq!(
            store.unlock_achievement("nope").unwrap_err(),
            StoreError::UnknownAchievement("nope".into())
        );
    }

    #[test]
    fn admin_view_falls_back_to_dashboard_for_students() {
        let mut store = signed_in_store();
        assert_eq!(store.set_current_view(View::Admin), View::Dashboard);
        assert_eq!(store.current_view, View::Dashboard);
    }

    #[test]
    fn admin_view_is_allowed_for_admins() {
        let mut store = StudyStore::default();
        let mut admin = User::new("admin-1", "Dr. Sarah Johnson", "admin@example.com");
        admin.role = Role::Admin;
        store.sign_in(admin);

        assert_eq!(store.set_current_view(View::Admin), View::Admin);
    }

    #[test]
    fn set_view_does_not_touch_domain_data() {
        let mut store = math_store();
        store.generate_bulk_flashcards("math-id", 2).unwrap();
        let subjects = store.subjects.clone();
        let flashcards = store.flashcards.clone();

        store.set_current_view(View::Library);

        assert_eq!(store.subjects, subjects);
        assert_eq!(store.flashcards, flashcards);
    }

    #[test]
    fn view_tokens_round_trip() {
        for view in View::ALL {
            assert_eq!(view.token().parse::<View>().unwrap(), *view);
        }
        assert!("kitchen".parse::<View>().is_err());
    }

    #[test]
    fn sign_out_clears_user_and_returns_to_landing() {
        let mut store = signed_in_store();
        store.set_current_view(View::Hub);
        store.sign_out();

        assert!(store.user.is_none());
        assert!(!store.is_authenticated);
        assert_eq!(store.current_view, View::Landing);
    }

    #[test]
    fn generated_cards_without_user_are_attributed_to_system() {
        let mut store = StudyStore::default();
        store.add_subject(Subject::new("math-id", "Advanced Mathematics", "#FF6B6B"));
        store.generate_bulk_flashcards("math-id", 1).unwrap();
        assert_eq!(store.flashcards[0].created_by, "system");
    }

    #[test]
    fn generated_card_difficulty_comes_from_template() {
        let mut store = math_store();
        store.generate_bulk_flashcards("math-id", 4).unwrap();
        assert_eq!(store.flashcards[2].difficulty, ItemDifficulty::Hard);
    }

    proptest! {
        #[test]
        fn generate_bulk_adds_exactly_n(n in 0u32..200) {
            let mut store = math_store();
            let before = store.flashcards.len();
            let added = store.generate_bulk_flashcards("math-id", n).unwrap();
            prop_assert_eq!(added, n);
            prop_assert_eq!(store.flashcards.len(), before + n as usize);
        }

        #[test]
        fn variation_suffix_follows_table_cycles(n in 1u32..64) {
            let mut store = math_store();
            store.generate_bulk_flashcards("math-id", n).unwrap();
            let table_len = 4u32;
            for (i, card) in store.flashcards.iter().enumerate() {
                let variation = i as u32 / table_len + 1;
                if variation == 1 {
                    prop_assert!(!card.question.contains("(Variation"));
                } else {
                    let suffix = format!("(Variation {variation})");
                    prop_assert!(card.question.ends_with(&suffix));
                }
            }
        }
    }
}
