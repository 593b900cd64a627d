use crate::aggregate::aggregate_scores;
use crate::error::Result;
use crate::per_user::score_voters;
use crate::profile::EngineProfile;
use crate::uniqueness::user_uniqueness;
use agora_matrix::{cosine_similarity, parse_reactions, GroupSums, ReactionIndex, VoteMatrices};
use agora_protocol::{ArgumentScore, RawReaction, StatementId};
use std::collections::BTreeMap;

/// Full scoring pipeline over one reaction snapshot.
///
/// Pure and deterministic: the same snapshot always yields the same
/// mapping. A corrupt reaction kind aborts the whole computation; an
/// empty or fully under-engaged discussion yields an empty mapping.
pub fn compute_argument_scores(
    raw: &[RawReaction],
    profile: &EngineProfile,
) -> Result<BTreeMap<StatementId, ArgumentScore>> {
    let reactions = parse_reactions(raw)?;
    let filtered = profile.engagement_filter().filter(&reactions);
    if filtered.is_empty() {
        log::debug!("No reactions survive the engagement filter");
        return Ok(BTreeMap::new());
    }

    let index = ReactionIndex::build(&filtered);
    let matrices = VoteMatrices::build(&index, &filtered);
    let similarity = cosine_similarity(&matrices.votes);
    let sums = GroupSums::compute(&similarity, &matrices.votes);
    let voters = score_voters(&matrices, &sums, profile.min_voters_per_statement());

    log::info!(
        "Scored {} voter/statement pairs across {} users and {} statements",
        voters.len(),
        index.users.len(),
        index.statements.len()
    );
    Ok(aggregate_scores(
        &index,
        &voters,
        profile.min_voters_per_statement(),
    ))
}

/// Personalization uniqueness over the unfiltered snapshot; see
/// [`user_uniqueness`] for the exact policy.
pub fn compute_user_uniqueness(
    raw: &[RawReaction],
    user_id: &str,
) -> Result<BTreeMap<StatementId, f32>> {
    let reactions = parse_reactions(raw)?;
    Ok(user_uniqueness(&reactions, user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoringError;

    #[test]
    fn empty_snapshot_scores_nothing() {
        let scores = compute_argument_scores(&[], &EngineProfile::default()).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn corrupt_kind_is_fatal_for_both_entry_points() {
        let raw = vec![RawReaction::new("u1", "s1", "maybe")];

        let err = compute_argument_scores(&raw, &EngineProfile::default()).unwrap_err();
        assert!(matches!(err, ScoringError::Matrix(_)));

        let err = compute_user_uniqueness(&raw, "u1").unwrap_err();
        assert!(matches!(err, ScoringError::Matrix(_)));
    }
}
