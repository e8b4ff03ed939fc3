use anyhow::Result;
use clap::{Parser, Subcommand};
use studyhub::model::unix_now;
use studyhub::{StudyStore, View, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "studyhub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate the store with demo data
    Seed {
        /// Seed the admin account and dashboard instead of the student demo
        #[arg(long)]
        admin: bool,
    },
    /// List subjects with their progress
    Subjects,
    /// Generate flashcards for a subject
    Generate {
        /// Subject id
        subject: String,
        /// Number of cards to generate
        count: u32,
    },
    /// Mark a task as completed
    Complete {
        /// Task id
        task: String,
    },
    /// Manage the active study session
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Unlock an achievement for the signed-in user
    Unlock {
        /// Achievement id (e.g. week-streak)
        id: String,
    },
    /// Switch the current view
    View {
        /// View name (landing, hub, dashboard, admin, ...)
        name: String,
    },
    /// Show store totals and user standing
    Stats,
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Start a session against a subject
    Start {
        /// Subject id
        subject: String,
    },
    /// End the active session
    End,
    /// Show elapsed time of the active session
    Status,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyhub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let mut store = StudyStore::load()?;

    match cli.command {
        Commands::Seed { admin } => {
            seed::seed_demo(&mut store);
            if admin {
                seed::seed_admin(&mut store);
            }
            println!(
                "Seeded {} subjects, {} flashcards, {} books",
                store.subjects.len(),
                store.flashcards.len(),
                store.books.len()
            );
            save(&store);
        }
        Commands::Subjects => {
            if store.subjects.is_empty() {
                println!("No subjects yet. Run `studyhub seed` to load the demo corpus.");
            }
            for subject in &store.subjects {
                println!(
                    "{:<4} {:<24} {:>5.1}%  ({}/{} tasks)",
                    subject.id,
                    subject.name,
                    subject.progress,
                    subject.completed_tasks,
                    subject.total_tasks
                );
            }
        }
        Commands::Generate { subject, count } => {
            let added = store.generate_bulk_flashcards(&subject, count)?;
            println!("Generated {added} flashcards for subject {subject}");
            save(&store);
        }
        Commands::Complete { task } => {
            store.complete_task(&task)?;
            println!("Task {task} completed");
            save(&store);
        }
        Commands::Session { command } => match command {
            SessionCommands::Start { subject } => {
                let session_id = store.start_study_session(&subject)?.id.clone();
                println!("Started session {session_id} for subject {subject}");
                println!("Note: sessions live in memory only and end with the process.");
                save(&store);
            }
            SessionCommands::End => {
                let ended = store.end_study_session().map(|s| (s.id.clone(), s.duration_minutes));
                match ended {
                    Some((id, minutes)) => {
                        println!("Recorded session {id} ({minutes} min)");
                        save(&store);
                    }
                    None => println!("No active session"),
                }
            }
            SessionCommands::Status => match store.active_session_elapsed(unix_now()) {
                Some(minutes) => println!("Active session running for {minutes} min"),
                None => println!("No active session"),
            },
        },
        Commands::Unlock { id } => {
            if store.unlock_achievement(&id)? {
                let experience = store.user.as_ref().map_or(0, |u| u.experience);
                println!("Unlocked {id}; experience is now {experience}");
            } else {
                println!("{id} was already unlocked");
            }
            save(&store);
        }
        Commands::View { name } => {
            let requested: View = name.parse()?;
            let applied = store.set_current_view(requested);
            if applied == requested {
                println!("Now showing {applied}");
            } else {
                println!("{requested} requires an admin account; showing {applied} instead");
            }
            save(&store);
        }
        Commands::Stats => {
            println!("Subjects:    {}", store.subjects.len());
            println!("Tasks:       {}", store.tasks.len());
            println!("Flashcards:  {}", store.flashcards.len());
            println!("Books:       {}", store.books.len());
            println!("Sessions:    {}", store.study_sessions.len());
            match &store.user {
                Some(user) => println!(
                    "User:        {} (level {}, {} XP, {} achievements)",
                    user.name,
                    user.level,
                    user.experience,
                    user.achievements.len()
                ),
                None => println!("User:        not signed in"),
            }
            if let Some(stats) = &store.admin_stats {
                println!(
                    "Platform:    {} users, {} active",
                    stats.total_users, stats.active_users
                );
            }
        }
    }

    Ok(())
}

/// Best-effort snapshot write; storage failures are logged, not fatal
fn save(store: &StudyStore) {
    if let Err(e) = store.save() {
        tracing::warn!("failed to persist state: {e:#}");
    }
}
