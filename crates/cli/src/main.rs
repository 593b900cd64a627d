use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use agora_feed::FeedService;
use agora_scoring::{EngineProfile, ScoringService};
use agora_store::MemoryStore;

#[derive(Parser)]
#[command(name = "agora")]
#[command(about = "Opinion scoring and feed ranking for group deliberation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Snapshot file: a JSON map of discussion id to statements/reactions
    #[arg(long, global = true, default_value = "agora-snapshot.json")]
    snapshot: PathBuf,

    /// Engine profile overrides as a JSON file
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute published statement scores for a discussion
    Scores(ScoresArgs),

    /// Compute a user's personalization uniqueness weights
    Uniqueness(UserArgs),

    /// Compute a user's personalized feed ordering
    Feed(UserArgs),
}

#[derive(clap::Args)]
struct ScoresArgs {
    /// Discussion to score
    #[arg(long)]
    discussion: String,
}

#[derive(clap::Args)]
struct UserArgs {
    /// Discussion to rank
    #[arg(long)]
    discussion: String,

    /// Requesting user
    #[arg(long)]
    user: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let profile = load_profile(cli.profile.as_deref())?;
    let store = MemoryStore::load(&cli.snapshot)
        .await
        .with_context(|| format!("Failed to load snapshot {:?}", cli.snapshot))?;
    log::debug!("Snapshot holds {} discussions", store.len());

    match cli.command {
        Commands::Scores(args) => {
            let service = ScoringService::with_profile(store, profile);
            let scores = service.argument_scores(&args.discussion).await?;
            print_json(&scores)
        }
        Commands::Uniqueness(args) => {
            let service = ScoringService::with_profile(store, profile);
            let weights = service.user_uniqueness(&args.discussion, &args.user).await?;
            print_json(&weights)
        }
        Commands::Feed(args) => {
            let service = FeedService::with_profile(store.clone(), store, profile);
            let feed = service.feed_priority(&args.discussion, &args.user).await?;
            print_json(&feed)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_profile(path: Option<&Path>) -> Result<EngineProfile> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read profile {path:?}"))?;
            EngineProfile::from_bytes(&bytes)
        }
        None => Ok(EngineProfile::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
