//! # Agora Feed
//!
//! Personalized priority ordering of a discussion's statements: combines
//! the published statement scores with the requesting user's own
//! uniqueness weights and reaction history into one descending ranking.

mod error;
mod ranker;
mod service;

pub use error::{FeedError, Result};
pub use ranker::{
    FeedRanker, DEFAULT_CLARITY, DEFAULT_PRIORITY_FOR_UNSCORED, DEFAULT_UNIQUENESS,
};
pub use service::FeedService;
