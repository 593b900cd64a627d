use crate::per_user::VoterScore;
use agora_matrix::ReactionIndex;
use agora_protocol::{ArgumentScore, StatementId};
use std::collections::BTreeMap;

/// Rescale applied to the aggregated fragmentation, whose natural maximum
/// is 0.5.
const FRAGMENTATION_RESCALE: f32 = 2.0;

/// Aggregate per-voter signals into published statement scores, weighting
/// each voter by their uniqueness so redundant voices do not dominate.
///
/// Statements with fewer than `min_voters` scored voters are omitted
/// entirely, not zero-filled. All published values are clamped to [0, 1].
pub fn aggregate_scores(
    index: &ReactionIndex,
    voters: &[VoterScore],
    min_voters: usize,
) -> BTreeMap<StatementId, ArgumentScore> {
    let mut by_statement: BTreeMap<usize, Vec<&VoterScore>> = BTreeMap::new();
    for score in voters {
        by_statement.entry(score.statement).or_default().push(score);
    }

    let mut published = BTreeMap::new();
    for (statement, scores) in by_statement {
        if scores.len() < min_voters {
            continue;
        }
        let Some(statement_id) = index.statements.id(statement) else {
            continue;
        };

        // Uniqueness is strictly positive, so the weight total is too.
        let total_weight: f32 = scores.iter().map(|s| s.uniqueness).sum();
        let weighted = |value: fn(&VoterScore) -> f32| -> f32 {
            scores.iter().map(|s| value(s) * s.uniqueness).sum::<f32>() / total_weight
        };

        let consensus = weighted(|s| s.consensus).clamp(0.0, 1.0);
        let fragmentation =
            (FRAGMENTATION_RESCALE * weighted(|s| s.fragmentation)).clamp(0.0, 1.0);
        let clarity = (1.0 - weighted(|s| s.unclear)).clamp(0.0, 1.0);

        published.insert(
            statement_id.to_string(),
            ArgumentScore {
                statement_id: statement_id.to_string(),
                consensus_score: consensus,
                fragmentation_score: fragmentation,
                clarity_score: clarity,
            },
        );
    }

    log::debug!(
        "Published scores for {} of {} statements",
        published.len(),
        index.statements.len()
    );
    published
}
