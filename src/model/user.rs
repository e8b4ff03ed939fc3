//! Users, achievements and preferences

use serde::{Deserialize, Serialize};

use super::ItemDifficulty;

/// Access role for a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Student,
    Admin,
    Creator,
}

/// How rare an achievement is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// A milestone reward granted to a user
///
/// The achievement list on a user is append-only; the store guarantees at
/// most one entry per achievement id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Unix timestamp of the unlock
    pub unlocked_at: i64,
    pub rarity: Rarity,
}

/// An account in the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Lifetime study time in minutes
    pub total_study_time: u32,
    pub level: u32,
    /// Experience points; achievement unlocks add to this
    pub experience: u32,
    /// Unlocked achievements, in unlock order
    pub achievements: Vec<Achievement>,
    pub streak_days: u32,
    pub preferences: UserPreferences,
    pub enrolled_subjects: Vec<String>,
    pub created_subjects: Vec<String>,
    pub statistics: UserStatistics,
}

impl User {
    /// Create a student account with default preferences
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: Role::default(),
            total_study_time: 0,
            level: 1,
            experience: 0,
            achievements: Vec::new(),
            streak_days: 0,
            preferences: UserPreferences::default(),
            enrolled_subjects: Vec::new(),
            created_subjects: Vec::new(),
            statistics: UserStatistics::default(),
        }
    }

    /// Whether the achievement id has already been unlocked
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }

    /// Append an achievement and credit its experience points
    pub fn grant(&mut self, achievement: Achievement, xp: u32) {
        self.achievements.push(achievement);
        self.experience += xp;
    }
}

/// Nested user configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theme: String,
    pub language: String,
    pub notifications: NotificationPrefs,
    pub study_settings: StudySettings,
    pub accessibility: AccessibilityPrefs,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "light".into(),
            language: "en".into(),
            notifications: NotificationPrefs::default(),
            study_settings: StudySettings::default(),
            accessibility: AccessibilityPrefs::default(),
        }
    }
}

/// Which notifications the user wants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub study_reminders: bool,
    pub achievement_alerts: bool,
    pub weekly_reports: bool,
    pub flashcard_reviews: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            study_reminders: true,
            achievement_alerts: true,
            weekly_reports: false,
            flashcard_reviews: true,
        }
    }
}

/// Preferred difficulty for generated study material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredDifficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Adaptive,
}

impl From<ItemDifficulty> for PreferredDifficulty {
    fn from(d: ItemDifficulty) -> Self {
        match d {
            ItemDifficulty::Easy => PreferredDifficulty::Easy,
            ItemDifficulty::Medium => PreferredDifficulty::Medium,
            ItemDifficulty::Hard => PreferredDifficulty::Hard,
        }
    }
}

/// Session and goal defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySettings {
    /// Default session length in minutes
    pub session_duration: u32,
    /// Default break length in minutes
    pub break_duration: u32,
    /// Daily study goal in minutes
    pub daily_goal: u32,
    pub preferred_difficulty: PreferredDifficulty,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            session_duration: 45,
            break_duration: 15,
            daily_goal: 120,
            preferred_difficulty: PreferredDifficulty::default(),
        }
    }
}

/// Accessibility options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityPrefs {
    pub font_size: String,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub screen_reader: bool,
}

impl Default for AccessibilityPrefs {
    fn default() -> Self {
        Self {
            font_size: "medium".into(),
            high_contrast: false,
            reduced_motion: false,
            screen_reader: false,
        }
    }
}

/// Aggregate activity counters for a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub total_books_read: u32,
    pub total_flashcards_reviewed: u32,
    pub average_session_minutes: u32,
    pub strongest_subjects: Vec<String>,
    pub weakest_subjects: Vec<String>,
    pub study_streak: u32,
    pub weekly_goal_completion: u32,
    pub monthly_progress: u32,
}
