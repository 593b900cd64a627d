use agora_matrix::{cosine_similarity, rescale_off_diagonal, GroupSums, ReactionIndex, VoteMatrices};
use agora_protocol::{Reaction, StatementId};
use std::collections::BTreeMap;

/// Personalization uniqueness weights for one user.
///
/// Same shape as the scoring pipeline's uniqueness but tuned for feed
/// ranking: it runs over the *unfiltered* reaction set (every participant
/// gets a weight, even below the scoring quorum), uses the min/max
/// rescaled similarity matrix, and covers every statement with positive
/// in-group mass for the user — including statements the user has not
/// voted on, where the mass has no self-contribution and the weight can
/// exceed 1.
///
/// Statements with zero in-group mass are absent; a user missing from the
/// snapshot yields an empty mapping.
pub fn user_uniqueness(reactions: &[Reaction], user_id: &str) -> BTreeMap<StatementId, f32> {
    let mut weights = BTreeMap::new();
    if reactions.is_empty() {
        return weights;
    }

    let index = ReactionIndex::build(reactions);
    let Some(user) = index.users.position(user_id) else {
        log::debug!("User {user_id} not represented in the reaction snapshot");
        return weights;
    };

    let matrices = VoteMatrices::build(&index, reactions);
    let mut similarity = cosine_similarity(&matrices.votes);
    rescale_off_diagonal(&mut similarity);
    let sums = GroupSums::compute(&similarity, &matrices.votes);

    for (statement, statement_id) in index.statements.ids().iter().enumerate() {
        let mass = sums.in_group_mass(user, statement);
        if mass > 0.0 {
            weights.insert(statement_id.clone(), 1.0 / mass);
        }
    }
    weights
}
