//! Static catalogs: achievement definitions and flashcard templates

pub mod achievements;
pub mod templates;

pub use achievements::{AchievementSpec, achievement};
pub use templates::{CardTemplate, templates_for};
