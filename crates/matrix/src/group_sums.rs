use ndarray::Array2;

/// Similarity mass behind each (user, statement) cell, split by the sign
/// of the similarity (in-group / out-group) and the peer's vote
/// (agree / disagree).
///
/// `in_group_agree[[i, a]]` is the summed positive similarity from peers
/// of user i who agreed with statement a, and so on for the other three.
/// Peers who did not vote on a statement contribute nothing. The diagonal
/// of the similarity matrix is included, so a voter always adds weight 1
/// to the in-group side matching their own vote.
#[derive(Debug, Clone)]
pub struct GroupSums {
    pub in_group_agree: Array2<f32>,
    pub in_group_disagree: Array2<f32>,
    pub out_group_agree: Array2<f32>,
    pub out_group_disagree: Array2<f32>,
}

impl GroupSums {
    /// Compute all four matrices as masked matrix products: split the
    /// similarity matrix into positive and absolute-negative parts, split
    /// the votes into agree/disagree indicators, multiply. This is the
    /// vectorized production path; the tests pin it against a naive
    /// per-cell sum.
    pub fn compute(similarity: &Array2<f32>, votes: &Array2<f32>) -> Self {
        let positive = similarity.mapv(|s| s.max(0.0));
        let negative = similarity.mapv(|s| (-s).max(0.0));
        let agree = votes.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 });
        let disagree = votes.mapv(|v| if v < 0.0 { 1.0 } else { 0.0 });

        Self {
            in_group_agree: positive.dot(&agree),
            in_group_disagree: positive.dot(&disagree),
            out_group_agree: negative.dot(&agree),
            out_group_disagree: negative.dot(&disagree),
        }
    }

    /// Total in-group similarity mass behind (user, statement).
    pub fn in_group_mass(&self, user: usize, statement: usize) -> f32 {
        self.in_group_agree[[user, statement]] + self.in_group_disagree[[user, statement]]
    }

    /// Total out-group similarity mass behind (user, statement).
    pub fn out_group_mass(&self, user: usize, statement: usize) -> f32 {
        self.out_group_agree[[user, statement]] + self.out_group_disagree[[user, statement]]
    }
}
