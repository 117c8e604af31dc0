use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use levelup::domain::ActivityKind;
use levelup::store::Store;

mod cli;

#[derive(Parser)]
#[command(name = "levelup")]
#[command(about = "LevelUp - XP, streaks, quests and badges for your note taking")]
#[command(version)]
struct Cli {
    /// Path to the save file (defaults to ~/.levelup/data.json)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP and streak
    Status,

    /// Render the dashboard: profile, heatmap, trend, badges and quests
    Dashboard {
        /// Number of days shown in the heatmap (1-366)
        #[arg(long, default_value_t = 84, value_parser = clap::value_parser!(u16).range(1..=366))]
        days: u16,
    },

    /// Evaluate today's streak and generate daily quests
    CheckIn,

    /// Record one activity (note-created, note-deleted, links, chars, reading)
    Record {
        /// Activity kind
        kind: ActivityKind,

        /// Link or character delta (ignored for other kinds)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        amount: i64,

        /// Vault-relative path of the note
        #[arg(long, default_value = "")]
        path: String,
    },

    /// List earned badges
    Badges {
        /// Include locked badges with their progress
        #[arg(long)]
        all: bool,
    },

    /// Show current quests
    Quests,

    /// Exclude a folder prefix from tracking, or list excluded folders
    Exclude {
        /// Folder prefix, e.g. "Templates/"
        prefix: Option<String>,
    },

    /// Delete all progress
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let store = match cli.data {
        Some(path) => Store::new(path),
        None => Store::open_default(),
    };

    match cli.command {
        Some(Commands::Status) | None => {
            cli::status::status_command(&store)?;
        }
        Some(Commands::Dashboard { days }) => {
            cli::dashboard::dashboard_command(&store, days.into())?;
        }
        Some(Commands::CheckIn) => {
            cli::check_in::check_in_command(&store)?;
        }
        Some(Commands::Record { kind, amount, path }) => {
            cli::record::record_command(&store, kind, amount, &path)?;
        }
        Some(Commands::Badges { all }) => {
            cli::badges::badges_command(&store, all)?;
        }
        Some(Commands::Quests) => {
            cli::quests::quests_command(&store)?;
        }
        Some(Commands::Exclude { prefix }) => {
            cli::exclude::exclude_command(&store, prefix)?;
        }
        Some(Commands::Reset { yes }) => {
            cli::reset::reset_command(&store, yes)?;
        }
    }

    Ok(())
}
