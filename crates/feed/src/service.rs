use crate::error::Result;
use crate::ranker::FeedRanker;
use agora_protocol::{ArgumentPriority, StatementId};
use agora_scoring::{compute_argument_scores, compute_user_uniqueness, EngineProfile};
use agora_store::{ReactionStore, StatementStore};
use std::collections::HashSet;

/// Async facade producing one user's feed for one discussion.
///
/// Fetches the scoring snapshot, the unfiltered snapshot and the statement
/// list, then runs the pure pipeline end to end. Both snapshots may differ
/// if reactions change between the fetches; that read-skew is accepted for
/// this use case.
pub struct FeedService<R, S> {
    reactions: R,
    statements: S,
    profile: EngineProfile,
    ranker: FeedRanker,
}

impl<R: ReactionStore, S: StatementStore> FeedService<R, S> {
    pub fn new(reactions: R, statements: S) -> Self {
        Self::with_profile(reactions, statements, EngineProfile::default())
    }

    pub fn with_profile(reactions: R, statements: S, profile: EngineProfile) -> Self {
        let ranker = FeedRanker::from_profile(&profile);
        Self {
            reactions,
            statements,
            profile,
            ranker,
        }
    }

    /// The feed for `user_id`, descending by priority.
    pub async fn feed_priority(
        &self,
        discussion_id: &str,
        user_id: &str,
    ) -> Result<Vec<ArgumentPriority>> {
        let scored_raw = self.reactions.fetch_for_discussion(discussion_id).await?;
        let scores = compute_argument_scores(&scored_raw, &self.profile)?;

        let unfiltered = self
            .reactions
            .fetch_unfiltered_for_discussion(discussion_id)
            .await?;
        let uniqueness = compute_user_uniqueness(&unfiltered, user_id)?;
        let reacted: HashSet<StatementId> = unfiltered
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.statement_id.clone())
            .collect();

        let statement_ids = self.statements.ids_for_discussion(discussion_id).await?;
        log::info!(
            "Feed for user {} in discussion {}: {} statements, {} scored, {} already seen",
            user_id,
            discussion_id,
            statement_ids.len(),
            scores.len(),
            reacted.len()
        );
        Ok(self
            .ranker
            .rank(&statement_ids, &scores, &uniqueness, &reacted))
    }
}
