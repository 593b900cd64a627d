use crate::error::Result;
use agora_protocol::{RawReaction, StatementId};
use async_trait::async_trait;

/// Snapshot access to the reactions of one discussion.
///
/// Implementations must return a consistent snapshot per call: the engine
/// never re-reads mid-computation, so read-skew between two calls is the
/// caller's concern, not the store's.
#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// The reaction snapshot used for published statement scores. A
    /// production store may exclude moderated rows here.
    async fn fetch_for_discussion(&self, discussion_id: &str) -> Result<Vec<RawReaction>>;

    /// The full reaction snapshot, used by the personalization uniqueness
    /// computation so every participant gets a weight even below the
    /// scoring quorum.
    async fn fetch_unfiltered_for_discussion(&self, discussion_id: &str)
        -> Result<Vec<RawReaction>>;
}

/// Access to the statement list of a discussion, used to seed default feed
/// priorities for statements nobody has reacted to yet.
#[async_trait]
pub trait StatementStore: Send + Sync {
    async fn ids_for_discussion(&self, discussion_id: &str) -> Result<Vec<StatementId>>;
}
