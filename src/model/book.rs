//! Books, pages, bookmarks, notes and highlights
//!
//! Books reference a subject by id but are not cascaded when the subject is
//! deleted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// A readable book tied to a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Author name
    pub author: String,
    /// Subject this book belongs to
    pub subject_id: String,
    /// Description or summary
    pub description: String,
    /// Cover colour (hex)
    pub cover_color: String,
    /// Pages in order
    pub pages: Vec<BookPage>,
    /// Total page count
    pub total_pages: u32,
    /// Reading completion percentage (0-100), derived from `last_read_page`
    pub reading_progress: f32,
    /// Zero-based index of the last page read
    pub last_read_page: usize,
    /// Bookmarked page indices
    pub bookmarks: BTreeSet<usize>,
    /// Notes, keyed by page number
    pub notes: Vec<BookNote>,
    /// Highlights, keyed by page number
    pub highlights: Vec<BookHighlight>,
    /// User id of the creator
    pub created_by: String,
    /// Visible to other users
    pub is_public: bool,
    /// Average rating (0-5)
    pub rating: f32,
    /// Language code (e.g. "en")
    pub language: String,
    /// Course-level difficulty
    pub difficulty: Difficulty,
    /// Estimated time to read, in minutes
    pub estimated_read_minutes: u32,
}

/// A single page of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPage {
    /// Unique identifier within the book
    pub id: String,
    /// 1-indexed page number
    pub page_number: u32,
    /// Page title
    pub title: String,
    /// Rendered content (markdown)
    pub content: String,
    /// Plain text for search
    pub plain_text: String,
    /// Word count
    pub word_count: u32,
    /// Estimated reading time in minutes
    pub reading_time_minutes: u32,
    /// Unix timestamp of the last modification
    pub last_modified: i64,
}

/// A note attached to a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookNote {
    pub id: String,
    pub page_number: u32,
    pub content: String,
    pub created_at: i64,
    pub user_id: String,
}

/// A highlighted span of page text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookHighlight {
    pub id: String,
    pub page_number: u32,
    pub text: String,
    pub color: String,
    pub created_at: i64,
    pub user_id: String,
}

impl Book {
    /// Create an empty book
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: String::new(),
            subject_id: subject_id.into(),
            description: String::new(),
            cover_color: "#FFFFFF".into(),
            pages: Vec::new(),
            total_pages: 0,
            reading_progress: 0.0,
            last_read_page: 0,
            bookmarks: BTreeSet::new(),
            notes: Vec::new(),
            highlights: Vec::new(),
            created_by: String::new(),
            is_public: false,
            rating: 0.0,
            language: "en".into(),
            difficulty: Difficulty::default(),
            estimated_read_minutes: 0,
        }
    }

    /// Toggle a bookmark on a page index, returning whether it is now set
    pub fn toggle_bookmark(&mut self, page: usize) -> bool {
        if self.bookmarks.remove(&page) { false } else { self.bookmarks.insert(page) }
    }

    /// Move to a page and recompute reading progress
    ///
    /// Out-of-range pages are clamped to the last page.
    pub fn turn_to_page(&mut self, page: usize) {
        if self.pages.is_empty() {
            return;
        }
        self.last_read_page = page.min(self.pages.len() - 1);
        self.reading_progress = (self.last_read_page + 1) as f32 / self.pages.len() as f32 * 100.0;
    }

    /// Attach a note to a page
    pub fn add_note(&mut self, note: BookNote) {
        self.notes.push(note);
    }

    /// Attach a highlight to a page
    pub fn add_highlight(&mut self, highlight: BookHighlight) {
        self.highlights.push(highlight);
    }

    /// Notes for a specific page
    pub fn notes_for_page(&self, page_number: u32) -> impl Iterator<Item = &BookNote> {
        self.notes.iter().filter(move |n| n.page_number == page_number)
    }
}
