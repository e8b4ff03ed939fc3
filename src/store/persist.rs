//! Persisted-subset snapshots
//!
//! Only {user, is_authenticated, subjects, flashcards, books} survive a
//! restart. Tasks, quizzes, sessions (including the active one), admin stats
//! and UI selections are deliberately excluded and reset to their defaults on
//! load. The projection is a pure mapping in both directions so it can be
//! tested independently of the mutation operations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::StudyStore;
use crate::model::{Book, Flashcard, Subject, User};

/// The durable subset of store state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub subjects: Vec<Subject>,
    pub flashcards: Vec<Flashcard>,
    pub books: Vec<Book>,
}

impl PersistedState {
    /// Project the durable subset out of a store
    pub fn snapshot(store: &StudyStore) -> Self {
        Self {
            user: store.user.clone(),
            is_authenticated: store.is_authenticated,
            subjects: store.subjects.clone(),
            flashcards: store.flashcards.clone(),
            books: store.books.clone(),
        }
    }

    /// Rebuild a store from the durable subset
    ///
    /// Everything outside the subset starts from its default.
    pub fn restore(self) -> StudyStore {
        StudyStore {
            user: self.user,
            is_authenticated: self.is_authenticated,
            subjects: self.subjects,
            flashcards: self.flashcards,
            books: self.books,
            ..StudyStore::default()
        }
    }

    /// Load a snapshot from disk, or default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read state from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse state.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save a snapshot to disk
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize state")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write state to {:?}", path))?;

        Ok(())
    }
}

/// Path of the snapshot file in the platform data directory
pub fn state_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("", "", "studyhub").context("Failed to determine data directory")?;
    Ok(proj_dirs.data_dir().join("state.json"))
}

impl StudyStore {
    /// Rehydrate the store from the default snapshot location
    pub fn load() -> Result<Self> {
        Ok(PersistedState::load_from(&state_path()?)?.restore())
    }

    /// Write the durable subset to the default snapshot location
    pub fn save(&self) -> Result<()> {
        PersistedState::snapshot(self).save_to(&state_path()?)
    }
}
