//! Shared domain types for the agora opinion engine.
//!
//! Everything here is a plain structured value: the engine computes them,
//! callers serialize them. No wire format is owned by this crate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type DiscussionId = String;
pub type UserId = String;
pub type StatementId = String;

/// How a participant reacted to a statement.
///
/// Agree and disagree are mutually exclusive per (user, statement) at
/// storage time; unclear is an independent flag and may co-occur with a
/// vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Agree,
    Disagree,
    Unclear,
}

impl ReactionKind {
    /// Parse a storage-layer kind string. Returns `None` for anything
    /// outside the three recognized values; callers decide how fatal that
    /// is.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "agree" => Some(Self::Agree),
            "disagree" => Some(Self::Disagree),
            "unclear" => Some(Self::Unclear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agree => "agree",
            Self::Disagree => "disagree",
            Self::Unclear => "unclear",
        }
    }

    /// Whether this reaction counts as a vote (agree/disagree). Unclear
    /// flags never count toward engagement thresholds.
    pub fn is_vote(&self) -> bool {
        matches!(self, Self::Agree | Self::Disagree)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reaction row exactly as a reaction store delivers it. The kind is an
/// unvalidated string; converting to [`Reaction`] is where corrupt rows
/// surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawReaction {
    pub user_id: UserId,
    pub statement_id: StatementId,
    pub kind: String,
}

impl RawReaction {
    pub fn new(
        user_id: impl Into<UserId>,
        statement_id: impl Into<StatementId>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            statement_id: statement_id.into(),
            kind: kind.into(),
        }
    }
}

/// A validated reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reaction {
    pub user_id: UserId,
    pub statement_id: StatementId,
    pub kind: ReactionKind,
}

impl Reaction {
    pub fn new(
        user_id: impl Into<UserId>,
        statement_id: impl Into<StatementId>,
        kind: ReactionKind,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            statement_id: statement_id.into(),
            kind,
        }
    }

    pub fn is_vote(&self) -> bool {
        self.kind.is_vote()
    }
}

/// Published scores for one statement. Each value lies in [0, 1]; a
/// statement only gets scores once it has at least two qualifying voters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArgumentScore {
    pub statement_id: StatementId,
    pub consensus_score: f32,
    pub fragmentation_score: f32,
    pub clarity_score: f32,
}

/// A per-user feed entry: non-negative, used purely for ordering. Zero for
/// statements the user already reacted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArgumentPriority {
    pub statement_id: StatementId,
    pub priority: f32,
}
