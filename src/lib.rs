//! Studyhub - a study-planning core
//!
//! Studyhub tracks subjects, tasks, flashcards, books and timed study
//! sessions behind a single application store with derived progress
//! tracking and a persisted JSON snapshot.

pub mod catalog;
pub mod model;
pub mod seed;
pub mod store;

pub use store::{StoreError, StudyStore, View};
