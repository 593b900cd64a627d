use agora_matrix::{GroupSums, VoteMatrices};

/// Per-voter signals for one statement, in matrix coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct VoterScore {
    pub user: usize,
    pub statement: usize,
    /// How much of the voter's out-group voted the same way, in [0, 1].
    pub consensus: f32,
    /// How much of the voter's in-group voted the other way, in [0, 0.5].
    pub fragmentation: f32,
    /// Inverse of the voter's in-group mass, in (0, 1].
    pub uniqueness: f32,
    /// Whether this voter flagged the statement unclear (0 or 1).
    pub unclear: f32,
}

/// Score every (voter, statement) pair on statements with at least
/// `min_voters` voters.
///
/// The expectation being measured: a voter should match their in-group
/// and differ from their out-group. Consensus is the out-group's aligned
/// share (violated expectation of difference); fragmentation is the
/// in-group's misaligned share (violated expectation of agreement).
pub fn score_voters(
    matrices: &VoteMatrices,
    sums: &GroupSums,
    min_voters: usize,
) -> Vec<VoterScore> {
    let voter_counts = matrices.voter_counts();
    let mut scores = Vec::new();

    for a in 0..matrices.n_statements() {
        if voter_counts[a] < min_voters {
            continue;
        }
        for i in 0..matrices.n_users() {
            let vote = matrices.votes[[i, a]];
            if vote == 0.0 {
                continue;
            }

            let out_agree = sums.out_group_agree[[i, a]];
            let out_disagree = sums.out_group_disagree[[i, a]];
            let out_mass = out_agree + out_disagree;
            let aligned_out = if vote > 0.0 { out_agree } else { out_disagree };
            let consensus = if out_mass > 0.0 {
                aligned_out / out_mass
            } else {
                0.0
            };

            // The similarity diagonal is pinned to 1 for voters, so the
            // voter's own vote puts at least weight 1 on the aligned
            // in-group side; the denominator cannot be zero here.
            let in_agree = sums.in_group_agree[[i, a]];
            let in_disagree = sums.in_group_disagree[[i, a]];
            let in_mass = in_agree + in_disagree;
            debug_assert!(in_mass >= 1.0);
            let misaligned_in = if vote > 0.0 { in_disagree } else { in_agree };

            scores.push(VoterScore {
                user: i,
                statement: a,
                consensus,
                fragmentation: misaligned_in / in_mass,
                uniqueness: 1.0 / in_mass,
                unclear: matrices.unclear[[i, a]],
            });
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_matrix::{cosine_similarity, GroupSums, ReactionIndex, VoteMatrices};
    use agora_protocol::Reaction;
    use agora_protocol::ReactionKind::{Agree, Disagree, Unclear};

    const EPS: f32 = 1e-5;

    fn pipeline(reactions: &[Reaction]) -> (ReactionIndex, VoteMatrices, GroupSums) {
        let index = ReactionIndex::build(reactions);
        let matrices = VoteMatrices::build(&index, reactions);
        let similarity = cosine_similarity(&matrices.votes);
        let sums = GroupSums::compute(&similarity, &matrices.votes);
        (index, matrices, sums)
    }

    fn find(scores: &[VoterScore], user: usize, statement: usize) -> &VoterScore {
        scores
            .iter()
            .find(|s| s.user == user && s.statement == statement)
            .unwrap()
    }

    #[test]
    fn unanimous_blocs_have_zero_consensus_and_fragmentation() {
        // U1, U2 always together; U3 always opposite.
        let reactions = vec![
            Reaction::new("u1", "s1", Agree),
            Reaction::new("u1", "s2", Agree),
            Reaction::new("u2", "s1", Agree),
            Reaction::new("u2", "s2", Agree),
            Reaction::new("u3", "s1", Disagree),
            Reaction::new("u3", "s2", Disagree),
        ];
        let (index, matrices, sums) = pipeline(&reactions);
        let scores = score_voters(&matrices, &sums, 2);

        let u1 = index.users.position("u1").unwrap();
        let u3 = index.users.position("u3").unwrap();
        let s1 = index.statements.position("s1").unwrap();

        let u1_s1 = find(&scores, u1, s1);
        // Out-group (U3) disagreed while U1 agreed: expectation held.
        assert!(u1_s1.consensus.abs() < EPS);
        // In-group (self + U2) all agreed: no fragmentation.
        assert!(u1_s1.fragmentation.abs() < EPS);
        // In-group mass 2 (self + U2).
        assert!((u1_s1.uniqueness - 0.5).abs() < EPS);

        let u3_s1 = find(&scores, u3, s1);
        assert!(u3_s1.consensus.abs() < EPS);
        assert!(u3_s1.fragmentation.abs() < EPS);
        // U3's in-group is only itself.
        assert!((u3_s1.uniqueness - 1.0).abs() < EPS);
    }

    #[test]
    fn crossover_vote_raises_consensus_and_fragmentation() {
        // Polarized blocs {U1, U2} vs {U3, U4} on s1..s3; on s4 the blocs
        // split internally: U1 and U3 agree, U2 and U4 disagree.
        let reactions = vec![
            Reaction::new("u1", "s1", Agree),
            Reaction::new("u1", "s2", Agree),
            Reaction::new("u1", "s3", Agree),
            Reaction::new("u1", "s4", Agree),
            Reaction::new("u2", "s1", Agree),
            Reaction::new("u2", "s2", Agree),
            Reaction::new("u2", "s3", Agree),
            Reaction::new("u2", "s4", Disagree),
            Reaction::new("u3", "s1", Disagree),
            Reaction::new("u3", "s2", Disagree),
            Reaction::new("u3", "s3", Disagree),
            Reaction::new("u3", "s4", Agree),
            Reaction::new("u4", "s1", Disagree),
            Reaction::new("u4", "s2", Disagree),
            Reaction::new("u4", "s3", Disagree),
            Reaction::new("u4", "s4", Disagree),
        ];
        let (index, matrices, sums) = pipeline(&reactions);
        let scores = score_voters(&matrices, &sums, 2);

        let u1 = index.users.position("u1").unwrap();
        let s1 = index.statements.position("s1").unwrap();
        let s4 = index.statements.position("s4").unwrap();

        // Bloc statement: everyone's out-group voted against them.
        assert!(find(&scores, u1, s1).consensus.abs() < EPS);

        // Crossover statement. U1's out-group is U3 (|sim| 0.5, agreed)
        // and U4 (|sim| 1, disagreed): aligned share 0.5 / 1.5.
        let u1_s4 = find(&scores, u1, s4);
        assert!((u1_s4.consensus - 1.0 / 3.0).abs() < EPS);
        // U1's in-group is itself (1, agree) and U2 (0.5, disagree).
        assert!((u1_s4.fragmentation - 1.0 / 3.0).abs() < EPS);
        assert!((u1_s4.uniqueness - 1.0 / 1.5).abs() < EPS);
    }

    #[test]
    fn statements_below_the_voter_quorum_are_skipped() {
        let reactions = vec![
            Reaction::new("u1", "s1", Agree),
            Reaction::new("u2", "s1", Disagree),
            Reaction::new("u1", "s2", Agree),
        ];
        let (index, matrices, sums) = pipeline(&reactions);
        let scores = score_voters(&matrices, &sums, 2);

        let s2 = index.statements.position("s2").unwrap();
        assert!(scores.iter().all(|s| s.statement != s2));
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn unclear_flag_is_carried_through() {
        let reactions = vec![
            Reaction::new("u1", "s1", Agree),
            Reaction::new("u1", "s1", Unclear),
            Reaction::new("u2", "s1", Disagree),
        ];
        let (index, matrices, sums) = pipeline(&reactions);
        let scores = score_voters(&matrices, &sums, 2);

        let u1 = index.users.position("u1").unwrap();
        let u2 = index.users.position("u2").unwrap();
        let s1 = index.statements.position("s1").unwrap();
        assert_eq!(find(&scores, u1, s1).unclear, 1.0);
        assert_eq!(find(&scores, u2, s1).unclear, 0.0);
    }
}
