use crate::error::{Result, StoreError};
use crate::store::{ReactionStore, StatementStore};
use agora_protocol::{RawReaction, StatementId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One discussion's statements and reactions as held by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscussionSnapshot {
    #[serde(default)]
    pub statements: Vec<StatementId>,
    #[serde(default)]
    pub reactions: Vec<RawReaction>,
}

/// In-memory store keyed by discussion id, with JSON persistence.
///
/// Serves the same rows for the filtered and unfiltered fetch; a production
/// store would hide moderated rows from the filtered one.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    discussions: HashMap<String, DiscussionSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_discussion(&mut self, discussion_id: impl Into<String>, snapshot: DiscussionSnapshot) {
        self.discussions.insert(discussion_id.into(), snapshot);
    }

    pub fn add_reaction(&mut self, discussion_id: impl Into<String>, reaction: RawReaction) {
        self.discussions
            .entry(discussion_id.into())
            .or_default()
            .reactions
            .push(reaction);
    }

    pub fn set_statements(&mut self, discussion_id: impl Into<String>, statements: Vec<StatementId>) {
        self.discussions
            .entry(discussion_id.into())
            .or_default()
            .statements = statements;
    }

    pub fn len(&self) -> usize {
        self.discussions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discussions.is_empty()
    }

    /// Load a snapshot file: a JSON map of discussion id to snapshot.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        log::info!("Loading snapshot from {:?}", path.as_ref());
        let data = tokio::fs::read_to_string(&path).await?;
        let discussions: HashMap<String, DiscussionSnapshot> = serde_json::from_str(&data)?;
        log::info!("Loaded {} discussions", discussions.len());
        Ok(Self { discussions })
    }

    /// Save the store back to a snapshot file.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        log::info!("Saving snapshot to {:?}", path.as_ref());
        let data = serde_json::to_string_pretty(&self.discussions)?;
        tokio::fs::write(&path, data).await?;
        Ok(())
    }

    fn snapshot(&self, discussion_id: &str) -> Result<&DiscussionSnapshot> {
        self.discussions
            .get(discussion_id)
            .ok_or_else(|| StoreError::NotFound(discussion_id.to_string()))
    }
}

#[async_trait]
impl ReactionStore for MemoryStore {
    async fn fetch_for_discussion(&self, discussion_id: &str) -> Result<Vec<RawReaction>> {
        Ok(self.snapshot(discussion_id)?.reactions.clone())
    }

    async fn fetch_unfiltered_for_discussion(
        &self,
        discussion_id: &str,
    ) -> Result<Vec<RawReaction>> {
        Ok(self.snapshot(discussion_id)?.reactions.clone())
    }
}

#[async_trait]
impl StatementStore for MemoryStore {
    async fn ids_for_discussion(&self, discussion_id: &str) -> Result<Vec<StatementId>> {
        Ok(self.snapshot(discussion_id)?.statements.clone())
    }
}
