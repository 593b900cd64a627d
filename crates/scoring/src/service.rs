use crate::error::Result;
use crate::pipeline::{compute_argument_scores, compute_user_uniqueness};
use crate::profile::EngineProfile;
use agora_protocol::{ArgumentScore, StatementId};
use agora_store::ReactionStore;
use std::collections::BTreeMap;

/// Async facade that fetches a snapshot from a [`ReactionStore`] and runs
/// the pure pipeline over it. The store owns consistency and caching; the
/// service never re-reads mid-computation.
pub struct ScoringService<S> {
    store: S,
    profile: EngineProfile,
}

impl<S: ReactionStore> ScoringService<S> {
    pub fn new(store: S) -> Self {
        Self::with_profile(store, EngineProfile::default())
    }

    pub fn with_profile(store: S, profile: EngineProfile) -> Self {
        Self { store, profile }
    }

    pub fn profile(&self) -> &EngineProfile {
        &self.profile
    }

    /// Published statement scores for one discussion.
    pub async fn argument_scores(
        &self,
        discussion_id: &str,
    ) -> Result<BTreeMap<StatementId, ArgumentScore>> {
        let raw = self.store.fetch_for_discussion(discussion_id).await?;
        log::debug!(
            "Scoring discussion {} from {} reactions",
            discussion_id,
            raw.len()
        );
        compute_argument_scores(&raw, &self.profile)
    }

    /// Personalization uniqueness weights for one user in one discussion.
    pub async fn user_uniqueness(
        &self,
        discussion_id: &str,
        user_id: &str,
    ) -> Result<BTreeMap<StatementId, f32>> {
        let raw = self
            .store
            .fetch_unfiltered_for_discussion(discussion_id)
            .await?;
        compute_user_uniqueness(&raw, user_id)
    }
}
