use agora_protocol::Reaction;
use std::collections::HashMap;

/// A user needs at least this many agree/disagree votes to be scored.
pub const MIN_VOTES_PER_USER: usize = 3;

/// A statement needs at least this many agree/disagree votes to be scored.
pub const MIN_VOTES_PER_STATEMENT: usize = 2;

/// Minimum-engagement filter over one discussion's reactions.
///
/// Produces the maximal subset in which every user and every statement
/// meets its vote threshold, counted within the subset itself. Unclear
/// flags never count toward the thresholds but ride along with whichever
/// (user, statement) pairs survive.
#[derive(Debug, Clone)]
pub struct EngagementFilter {
    min_votes_per_user: usize,
    min_votes_per_statement: usize,
}

impl Default for EngagementFilter {
    fn default() -> Self {
        Self::new(MIN_VOTES_PER_USER, MIN_VOTES_PER_STATEMENT)
    }
}

impl EngagementFilter {
    pub fn new(min_votes_per_user: usize, min_votes_per_statement: usize) -> Self {
        Self {
            min_votes_per_user,
            min_votes_per_statement,
        }
    }

    /// Filter to a fixed point. A single pass is not enough: dropping an
    /// under-voted statement can push a user below threshold, which in
    /// turn can push another statement below threshold.
    pub fn filter(&self, reactions: &[Reaction]) -> Vec<Reaction> {
        let mut current: Vec<Reaction> = reactions.to_vec();
        let mut passes = 0usize;

        loop {
            let mut user_votes: HashMap<&str, usize> = HashMap::new();
            let mut statement_votes: HashMap<&str, usize> = HashMap::new();
            for reaction in current.iter().filter(|r| r.is_vote()) {
                *user_votes.entry(reaction.user_id.as_str()).or_insert(0) += 1;
                *statement_votes
                    .entry(reaction.statement_id.as_str())
                    .or_insert(0) += 1;
            }

            let retained: Vec<Reaction> = current
                .iter()
                .filter(|r| {
                    user_votes.get(r.user_id.as_str()).copied().unwrap_or(0)
                        >= self.min_votes_per_user
                        && statement_votes
                            .get(r.statement_id.as_str())
                            .copied()
                            .unwrap_or(0)
                            >= self.min_votes_per_statement
                })
                .cloned()
                .collect();

            passes += 1;
            if retained.len() == current.len() {
                log::debug!(
                    "Engagement filter converged after {} passes: {} of {} reactions kept",
                    passes,
                    retained.len(),
                    reactions.len()
                );
                return retained;
            }
            current = retained;
        }
    }
}
