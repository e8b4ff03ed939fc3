//! The static achievement catalog
//!
//! Title, icon, rarity and XP award for each unlockable achievement id.
//! Unlocking an id not present here is an error rather than a generic
//! fallback reward.

use crate::model::{Achievement, Rarity};

/// A catalog entry describing an unlockable achievement
#[derive(Debug, Clone, Copy)]
pub struct AchievementSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    /// Experience points awarded on unlock
    pub xp: u32,
}

impl AchievementSpec {
    /// Materialize an achievement record unlocked at `now`
    pub fn unlock_at(&self, now: i64) -> Achievement {
        Achievement {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            unlocked_at: now,
            rarity: self.rarity,
        }
    }
}

/// All unlockable achievements
pub const CATALOG: &[AchievementSpec] = &[
    AchievementSpec {
        id: "first-session",
        title: "First Study Session",
        description: "Completed your first study session",
        icon: "🎯",
        rarity: Rarity::Common,
        xp: 100,
    },
    AchievementSpec {
        id: "week-streak",
        title: "Week Streak",
        description: "Studied for 7 consecutive days",
        icon: "🔥",
        rarity: Rarity::Rare,
        xp: 500,
    },
    AchievementSpec {
        id: "flashcard-master",
        title: "Flashcard Master",
        description: "Reviewed 100 flashcards",
        icon: "🧠",
        rarity: Rarity::Epic,
        xp: 1000,
    },
    AchievementSpec {
        id: "book-worm",
        title: "Book Worm",
        description: "Read 10 complete books",
        icon: "📚",
        rarity: Rarity::Epic,
        xp: 1500,
    },
    AchievementSpec {
        id: "quiz-champion",
        title: "Quiz Champion",
        description: "Scored 90% or higher on 5 quizzes",
        icon: "🏆",
        rarity: Rarity::Legendary,
        xp: 2000,
    },
];

/// Look up an achievement by id
pub fn achievement(id: &str) -> Option<&'static AchievementSpec> {
    CATALOG.iter().find(|spec| spec.id == id)
}
