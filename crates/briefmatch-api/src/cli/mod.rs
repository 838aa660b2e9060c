//! CLI command definitions and dispatch for the `bmatch` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod check;
pub mod feedback;
pub mod matching;
pub mod talent;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Match creative briefs to talent profiles.
#[derive(Parser)]
#[command(name = "bmatch", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans through OpenTelemetry to stdout.
    #[arg(long, global = true, env = "BRIEFMATCH_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (default from config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Rank talents for a brief.
    Match {
        /// Free-text brief.
        text: String,

        /// Desired city.
        #[arg(short, long)]
        location: String,

        /// Budget for the shoot.
        #[arg(short, long)]
        budget: f64,

        /// Desired style tags, comma separated.
        #[arg(short, long, value_delimiter = ',', required = true)]
        tags: Vec<String>,

        /// Rank without storing the brief.
        #[arg(long)]
        dry_run: bool,
    },

    /// Populate an empty catalogue with sample talents.
    Seed {
        /// Embed profiles with the local hashed embedder instead of the provider.
        #[arg(long)]
        offline: bool,
    },

    /// Manage the talent catalogue.
    Talents {
        #[command(subcommand)]
        action: TalentCommand,
    },

    /// Record or list client feedback.
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommand,
    },

    /// Probe the talent store and the embedding provider.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TalentCommand {
    /// List all talents.
    #[command(alias = "ls")]
    List,

    /// Add a talent profile.
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        budget_min: f64,

        #[arg(long)]
        budget_max: f64,

        /// Style tags, comma separated.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Profile description used for the embedding.
        #[arg(long)]
        profile: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum FeedbackCommand {
    /// Rate a talent proposed for a brief.
    Add {
        brief_id: String,

        talent_id: String,

        /// Rating from 1 to 5.
        #[arg(short, long)]
        rating: u8,

        #[arg(short, long)]
        comment: Option<String>,
    },

    /// List feedback for a brief.
    #[command(alias = "ls")]
    List { brief_id: String },
}
