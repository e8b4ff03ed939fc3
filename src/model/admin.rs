//! Admin dashboard aggregates
//!
//! These are display-only figures for the admin panel. They are rebuilt from
//! seed data and never persisted.

use serde::{Deserialize, Serialize};

use super::Subject;

/// Platform-wide totals shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: u32,
    pub total_subjects: u32,
    pub total_books: u32,
    pub total_flashcards: u32,
    pub active_users: u32,
    /// Most popular subjects, in rank order
    pub popular_subjects: Vec<Subject>,
    pub system_health: SystemHealth,
}

/// Synthetic system health readout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    /// Uptime percentage
    pub uptime: f32,
    /// Memory usage percentage
    pub memory_usage: f32,
    pub active_connections: u32,
}
