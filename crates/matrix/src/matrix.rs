use crate::index::ReactionIndex;
use agora_protocol::{Reaction, ReactionKind};
use ndarray::Array2;

/// Dense voting and unclear-flag matrices for one reaction set, rows =
/// users, columns = statements.
///
/// Votes are -1 (disagree), 0 (no vote), +1 (agree); unclear entries are 0
/// or 1. Stored as f32 so similarity and group sums are plain matrix
/// products.
#[derive(Debug, Clone)]
pub struct VoteMatrices {
    pub votes: Array2<f32>,
    pub unclear: Array2<f32>,
}

impl VoteMatrices {
    pub fn build(index: &ReactionIndex, reactions: &[Reaction]) -> Self {
        let shape = (index.users.len(), index.statements.len());
        let mut votes = Array2::zeros(shape);
        let mut unclear = Array2::zeros(shape);

        for reaction in reactions {
            let (Some(i), Some(a)) = (
                index.users.position(&reaction.user_id),
                index.statements.position(&reaction.statement_id),
            ) else {
                // Reactions outside the index were filtered out upstream.
                continue;
            };
            match reaction.kind {
                ReactionKind::Agree => votes[[i, a]] = 1.0,
                ReactionKind::Disagree => votes[[i, a]] = -1.0,
                ReactionKind::Unclear => unclear[[i, a]] = 1.0,
            }
        }

        log::debug!(
            "Built {}x{} vote matrix from {} reactions",
            shape.0,
            shape.1,
            reactions.len()
        );
        Self { votes, unclear }
    }

    pub fn n_users(&self) -> usize {
        self.votes.nrows()
    }

    pub fn n_statements(&self) -> usize {
        self.votes.ncols()
    }

    /// Number of users with a non-zero vote, per statement.
    pub fn voter_counts(&self) -> Vec<usize> {
        (0..self.n_statements())
            .map(|a| {
                self.votes
                    .column(a)
                    .iter()
                    .filter(|&&v| v != 0.0)
                    .count()
            })
            .collect()
    }
}
