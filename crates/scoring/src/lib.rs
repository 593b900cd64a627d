//! # Agora Scoring
//!
//! Turns one discussion's reaction snapshot into published statement
//! scores and per-user personalization weights.
//!
//! ## Scores
//!
//! - **Consensus** — how often a voter's position unexpectedly matches the
//!   peers who usually disagree with them (the out-group).
//! - **Fragmentation** — how often a voter's position diverges from the
//!   peers who usually agree with them (the in-group).
//! - **Clarity** — the inverse of the uniqueness-weighted unclear-flag
//!   rate.
//!
//! All three are uniqueness-weighted aggregates over a statement's voters
//! and lie in [0, 1]. Statements with fewer than two qualifying voters are
//! omitted from the published mapping rather than zero-filled.
//!
//! ## Example
//!
//! ```no_run
//! use agora_protocol::RawReaction;
//! use agora_scoring::{compute_argument_scores, EngineProfile};
//!
//! fn main() -> anyhow::Result<()> {
//!     let snapshot: Vec<RawReaction> = vec![/* fetched by a collaborator */];
//!     let scores = compute_argument_scores(&snapshot, &EngineProfile::default())?;
//!     for (statement, score) in &scores {
//!         println!("{statement}: consensus {:.3}", score.consensus_score);
//!     }
//!     Ok(())
//! }
//! ```

mod aggregate;
mod error;
mod per_user;
mod pipeline;
mod profile;
mod service;
mod uniqueness;

pub use aggregate::aggregate_scores;
pub use error::{Result, ScoringError};
pub use per_user::{score_voters, VoterScore};
pub use pipeline::{compute_argument_scores, compute_user_uniqueness};
pub use profile::EngineProfile;
pub use service::ScoringService;
pub use uniqueness::user_uniqueness;
