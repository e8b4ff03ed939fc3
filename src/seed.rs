//! Deterministic demo and admin seed data
//!
//! Everything here is synthetic but reproducible: the same seed calls always
//! produce the same subjects, cards, books and users, which keeps the demo
//! content diffable and the tests exact.

use crate::catalog;
use crate::model::{
    Achievement, AdminStats, Book, BookPage, Difficulty, Flashcard, Rarity, Role, Subject,
    SystemHealth, User, unix_now,
};
use crate::store::StudyStore;

/// How many flashcards the demo corpus aims for across all subjects
const FLASHCARD_TARGET: u32 = 500;

/// Pages generated per demo book
const PAGES_PER_BOOK: u32 = 25;

/// Populate a store with the student demo corpus
///
/// Signs in the demo student and fills the persisted collections: six
/// subjects, roughly 550 flashcards and one generated book per subject.
pub fn seed_demo(store: &mut StudyStore) {
    let subjects = demo_subjects();

    store.flashcards = demo_flashcards(&subjects);
    store.books = subjects.iter().map(demo_book).collect();
    store.subjects = subjects;
    store.sign_in(demo_user());

    tracing::info!(
        subjects = store.subjects.len(),
        flashcards = store.flashcards.len(),
        books = store.books.len(),
        "seeded demo data"
    );
}

/// Populate a store with the admin demo data
///
/// Signs in the demo administrator and fills the admin-only collections.
/// Popular subjects are taken from whatever subjects the store already holds.
pub fn seed_admin(store: &mut StudyStore) {
    let admin = admin_user();

    store.admin_stats = Some(AdminStats {
        total_users: 15_420,
        total_subjects: 156,
        total_books: 890,
        total_flashcards: 12_500,
        active_users: 3_240,
        popular_subjects: store.subjects.iter().take(5).cloned().collect(),
        system_health: SystemHealth { uptime: 99.8, memory_usage: 65.0, active_connections: 1_250 },
    });

    let mut all_users = vec![admin.clone()];
    all_users.extend(mock_users(50));
    store.all_users = all_users;

    store.sign_in(admin);
    tracing::info!(users = store.all_users.len(), "seeded admin data");
}

fn demo_user() -> User {
    let mut user = User::new("user-1", "Alex Chen", "alex@example.com");
    user.total_study_time = 2_450;
    user.level = 8;
    user.experience = 3_200;
    user.streak_days = 12;
    user.enrolled_subjects = vec!["1".into(), "2".into(), "3".into(), "4".into()];
    user.statistics.total_books_read = 12;
    user.statistics.total_flashcards_reviewed = 450;
    user.statistics.average_session_minutes = 38;
    user.statistics.strongest_subjects = vec!["Chemistry".into(), "Biology".into()];
    user.statistics.weakest_subjects = vec!["Physics".into()];
    user.statistics.study_streak = 12;
    user.statistics.weekly_goal_completion = 85;
    user.statistics.monthly_progress = 78;

    // Already-earned milestones, so the profile view has something to show
    user.achievements = vec![
        Achievement {
            id: "first-session".into(),
            title: "First Study Session".into(),
            description: "Completed your first study session".into(),
            icon: "🎯".into(),
            unlocked_at: 1_736_503_200,
            rarity: Rarity::Common,
        },
        Achievement {
            id: "week-streak".into(),
            title: "Week Streak".into(),
            description: "Studied for 7 consecutive days".into(),
            icon: "🔥".into(),
            unlocked_at: 1_736_695_800,
            rarity: Rarity::Rare,
        },
    ];
    user
}

fn admin_user() -> User {
    let mut user = User::new("admin-1", "Dr. Sarah Johnson", "admin@studyplanner.com");
    user.role = Role::Admin;
    user.level = 50;
    user.experience = 50_000;
    user.preferences.notifications.study_reminders = false;
    user.preferences.notifications.achievement_alerts = false;
    user.preferences.notifications.weekly_reports = true;
    user.preferences.notifications.flashcard_reviews = false;
    user.preferences.study_settings.session_duration = 60;
    user.preferences.study_settings.daily_goal = 0;
    user.created_subjects = (1..=6).map(|i| i.to_string()).collect();
    user
}

struct SubjectSeed {
    id: &'static str,
    name: &'static str,
    color: &'static str,
    total_tasks: u32,
    completed_tasks: u32,
    exam_date: i64,
    description: &'static str,
    difficulty: Difficulty,
    estimated_hours: u32,
    tags: &'static [&'static str],
    rating: f32,
    enrolled_students: u32,
}

const SUBJECT_SEEDS: &[SubjectSeed] = &[
    SubjectSeed {
        id: "1",
        name: "Advanced Mathematics",
        color: "#FF6B6B",
        total_tasks: 20,
        completed_tasks: 15,
        exam_date: 1_739_577_600,
        description: "Comprehensive calculus and linear algebra course",
        difficulty: Difficulty::Advanced,
        estimated_hours: 120,
        tags: &["calculus", "algebra", "mathematics"],
        rating: 4.8,
        enrolled_students: 1_250,
    },
    SubjectSeed {
        id: "2",
        name: "Quantum Physics",
        color: "#006D77",
        total_tasks: 16,
        completed_tasks: 7,
        exam_date: 1_740_009_600,
        description: "Introduction to quantum mechanics and modern physics",
        difficulty: Difficulty::Advanced,
        estimated_hours: 100,
        tags: &["quantum", "physics", "mechanics"],
        rating: 4.6,
        enrolled_students: 890,
    },
    SubjectSeed {
        id: "3",
        name: "Organic Chemistry",
        color: "#FFD166",
        total_tasks: 12,
        completed_tasks: 11,
        exam_date: 1_739_145_600,
        description: "Comprehensive organic chemistry with lab work",
        difficulty: Difficulty::Intermediate,
        estimated_hours: 80,
        tags: &["chemistry", "organic", "lab"],
        rating: 4.9,
        enrolled_students: 1_100,
    },
    SubjectSeed {
        id: "4",
        name: "Molecular Biology",
        color: "#83C5BE",
        total_tasks: 18,
        completed_tasks: 5,
        exam_date: 1_740_441_600,
        description: "Advanced molecular biology and genetics",
        difficulty: Difficulty::Advanced,
        estimated_hours: 110,
        tags: &["biology", "molecular", "genetics"],
        rating: 4.7,
        enrolled_students: 750,
    },
    SubjectSeed {
        id: "5",
        name: "Data Structures",
        color: "#A8E6CF",
        total_tasks: 14,
        completed_tasks: 8,
        exam_date: 1_740_787_200,
        description: "Computer science fundamentals and algorithms",
        difficulty: Difficulty::Intermediate,
        estimated_hours: 90,
        tags: &["computer-science", "algorithms", "programming"],
        rating: 4.5,
        enrolled_students: 2_100,
    },
    SubjectSeed {
        id: "6",
        name: "World History",
        color: "#FFB3BA",
        total_tasks: 22,
        completed_tasks: 4,
        exam_date: 1_741_132_800,
        description: "Comprehensive world history from ancient to modern times",
        difficulty: Difficulty::Beginner,
        estimated_hours: 70,
        tags: &["history", "world", "civilization"],
        rating: 4.3,
        enrolled_students: 1_800,
    },
];

fn demo_subjects() -> Vec<Subject> {
    SUBJECT_SEEDS
        .iter()
        .map(|seed| {
            let mut subject = Subject::new(seed.id, seed.name, seed.color);
            subject.total_tasks = seed.total_tasks;
            subject.completed_tasks = seed.completed_tasks;
            subject.progress =
                seed.completed_tasks as f32 / seed.total_tasks as f32 * 100.0;
            subject.exam_date = Some(seed.exam_date);
            subject.description = Some(seed.description.to_string());
            subject.difficulty = seed.difficulty;
            subject.estimated_hours = seed.estimated_hours;
            subject.tags = seed.tags.iter().map(|t| t.to_string()).collect();
            subject.created_by = "admin".into();
            subject.is_public = true;
            subject.rating = seed.rating;
            subject.enrolled_students = seed.enrolled_students;
            subject
        })
        .collect()
}

fn demo_flashcards(subjects: &[Subject]) -> Vec<Flashcard> {
    let now = unix_now();
    let mut cards = Vec::new();

    for subject in subjects {
        let templates = catalog::templates_for(&subject.name);
        // Mathematics gets an extra helping so the generator view has depth
        let per_subject = FLASHCARD_TARGET / subjects.len() as u32
            + if subject.name == "Advanced Mathematics" { 50 } else { 0 };

        for i in 0..per_subject {
            let template = &templates[(i as usize) % templates.len()];
            let variation = i / templates.len() as u32 + 1;

            let mut card =
                template.instantiate(format!("card-{}-{i}", subject.id), &subject.id, variation);
            // Spread reviews over the coming week, deterministically
            card.next_review = Some(now + (i as i64 % 7 + 1) * 24 * 60 * 60);
            card.tags = vec![subject.name.to_lowercase()];
            card.created_by = "system".into();
            card.is_public = true;
            card.success_rate = (i * 13 % 100) as f32;
            cards.push(card);
        }
    }

    cards
}

fn demo_book(subject: &Subject) -> Book {
    let mut book = Book::new(
        format!("book-{}", subject.id),
        format!("{} - Complete Guide", subject.name),
        &subject.id,
    );
    book.author = "AI Generated".into();
    book.description = format!("Comprehensive guide covering all aspects of {}", subject.name);
    book.cover_color = subject.color.clone();
    book.pages = book_pages(&subject.name, PAGES_PER_BOOK);
    book.total_pages = PAGES_PER_BOOK;
    book.bookmarks = [1, 5, 12].into();
    book.created_by = "system".into();
    book.is_public = true;
    book.rating = subject.rating;
    book.difficulty = subject.difficulty;
    book.estimated_read_minutes = 180 + subject.estimated_hours;
    book.turn_to_page((subject.enrolled_students % PAGES_PER_BOOK) as usize);
    book
}

fn book_pages(subject_name: &str, count: u32) -> Vec<BookPage> {
    let now = unix_now();
    (0..count)
        .map(|i| {
            let content = page_content(subject_name, i);
            let plain_text = strip_markdown(&content);
            let word_count = plain_text.split_whitespace().count() as u32;
            BookPage {
                id: format!("page-{i}"),
                page_number: i + 1,
                title: format!("Chapter {}: {} Fundamentals", i / 3 + 1, subject_name),
                content,
                plain_text,
                word_count,
                reading_time_minutes: (word_count / 200).max(1),
                last_modified: now,
            }
        })
        .collect()
}

const MATH_PAGES: &[&str] = &[
    "## Introduction to Calculus\n\nCalculus is the mathematical study of continuous change, \
     comprising differential and integral calculus. It provides tools for analyzing rates of \
     change and accumulation.\n\n### Key Concepts\n\n- Limits and continuity\n- Derivatives and \
     differentiation\n- Integrals and integration\n- Applications in physics and engineering",
    "## Derivatives and Rates of Change\n\nA derivative represents the instantaneous rate of \
     change of a function. The derivative of f(x) at point x is defined as the limit of \
     [f(x+h) - f(x)]/h as h approaches 0.\n\n### Common Derivatives\n\n- d/dx(x²) = 2x\n- \
     d/dx(sin x) = cos x\n- d/dx(e^x) = e^x\n- d/dx(ln x) = 1/x",
    "## Integration Techniques\n\nIntegration is the reverse process of differentiation. The \
     integral of a function f(x) over an interval [a,b] represents the area under the \
     curve.\n\n### Integration Methods\n\n- Substitution method\n- Integration by parts\n- \
     Partial fractions\n- Trigonometric substitution",
];

const PHYSICS_PAGES: &[&str] = &[
    "## Wave-Particle Duality\n\nLight and matter exhibit both wave and particle properties. \
     This fundamental concept revolutionized our understanding of the microscopic \
     world.\n\n### Key Experiments\n\n- Double-slit experiment\n- Photoelectric effect\n- \
     Compton scattering\n- Electron diffraction",
    "## Heisenberg Uncertainty Principle\n\nYou cannot simultaneously know both the position \
     and momentum of a particle with perfect accuracy. This is not a limitation of measurement \
     but a fundamental property of nature.\n\n### Mathematical Expression\n\nΔx × Δp ≥ ℏ/2",
    "## Quantum Entanglement\n\nWhen particles become entangled, measuring one instantly \
     affects the other, regardless of distance. This \"spooky action at a distance\" puzzled \
     Einstein.\n\n### Applications\n\n- Quantum computing\n- Quantum cryptography\n- Quantum \
     teleportation\n- Quantum sensors",
];

const DEFAULT_PAGE: &str = "## Study Material\n\nThis page contains important information about \
     the subject. Review carefully and take notes as needed.\n\n### Learning Objectives\n\n- \
     Understand key concepts\n- Apply knowledge practically\n- Prepare for assessments";

fn page_content(subject_name: &str, page_index: u32) -> String {
    let pool = match subject_name {
        "Advanced Mathematics" => MATH_PAGES,
        "Quantum Physics" => PHYSICS_PAGES,
        _ => return DEFAULT_PAGE.to_string(),
    };
    pool[(page_index as usize) % pool.len()].to_string()
}

/// Reduce markdown to plain text for search indexing
fn strip_markdown(content: &str) -> String {
    content
        .lines()
        .map(|line| line.trim_start_matches(['#', '-', ' ']))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const MOCK_NAMES: &[&str] = &["John Doe", "Jane Smith", "Mike Johnson", "Emily Davis", "Chris Wilson"];

fn mock_users(count: u32) -> Vec<User> {
    (0..count)
        .map(|i| {
            let mut user = User::new(
                format!("user-{}", i + 2),
                format!("{} {}", MOCK_NAMES[(i as usize) % MOCK_NAMES.len()], i + 1),
                format!("user{}@example.com", i + 1),
            );
            user.total_study_time = i * 97 % 5_000;
            user.level = i % 20 + 1;
            user.experience = i * 199 % 10_000;
            user.streak_days = i % 30;
            user.statistics.total_books_read = i % 50;
            user.statistics.total_flashcards_reviewed = i * 19 % 1_000;
            user.statistics.average_session_minutes = 20 + i % 60;
            user.statistics.study_streak = i % 15;
            user.statistics.weekly_goal_completion = i * 7 % 100;
            user.statistics.monthly_progress = i * 11 % 100;
            user
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::View;

    #[test]
    fn demo_seeds_six_subjects_and_signs_in() {
        let mut store = StudyStore::default();
        seed_demo(&mut store);

        assert_eq!(store.subjects.len(), 6);
        assert!(store.is_authenticated);
        assert_eq!(store.user.as_ref().unwrap().id, "user-1");
    }

    #[test]
    fn demo_flashcard_corpus_has_expected_size() {
        let mut store = StudyStore::default();
        seed_demo(&mut store);

        // 500/6 per subject plus 50 extra for mathematics
        let per_subject = 500 / 6;
        assert_eq!(store.flashcards.len(), per_subject * 6 + 50);
    }

    #[test]
    fn demo_books_have_pages_and_bookmarks() {
        let mut store = StudyStore::default();
        seed_demo(&mut store);

        assert_eq!(store.books.len(), 6);
        for book in &store.books {
            assert_eq!(book.pages.len(), 25);
            assert!(book.bookmarks.contains(&5));
            assert!(book.reading_progress > 0.0);
        }
    }

    #[test]
    fn demo_seed_is_deterministic() {
        let mut a = StudyStore::default();
        let mut b = StudyStore::default();
        seed_demo(&mut a);
        seed_demo(&mut b);

        assert_eq!(a.subjects, b.subjects);
        assert_eq!(a.books.len(), b.books.len());
        for (x, y) in a.flashcards.iter().zip(&b.flashcards) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.question, y.question);
        }
    }

    #[test]
    fn demo_subjects_satisfy_the_progress_invariant() {
        let mut store = StudyStore::default();
        seed_demo(&mut store);

        for subject in &store.subjects {
            assert!(subject.total_tasks > 0);
            assert_eq!(
                subject.progress,
                subject.completed_tasks as f32 / subject.total_tasks as f32 * 100.0
            );
        }
    }

    #[test]
    fn admin_seed_grants_the_admin_view() {
        let mut store = StudyStore::default();
        seed_demo(&mut store);
        seed_admin(&mut store);

        assert_eq!(store.user.as_ref().unwrap().role, Role::Admin);
        assert_eq!(store.set_current_view(View::Admin), View::Admin);
    }

    #[test]
    fn admin_stats_rank_existing_subjects() {
        let mut store = StudyStore::default();
        seed_demo(&mut store);
        seed_admin(&mut store);

        let stats = store.admin_stats.as_ref().unwrap();
        assert_eq!(stats.popular_subjects.len(), 5);
        assert_eq!(stats.popular_subjects[0].id, "1");
        assert_eq!(store.all_users.len(), 51);
    }

    #[test]
    fn page_plain_text_has_no_markdown_markers() {
        let pages = book_pages("Advanced Mathematics", 3);
        for page in &pages {
            assert!(!page.plain_text.contains('#'));
            assert!(page.word_count > 0);
        }
    }
}
