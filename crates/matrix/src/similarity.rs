use ndarray::Array2;

/// Pairwise cosine similarity between user vote rows.
///
/// Rows with zero norm (a user with no votes, which the engagement filter
/// should have removed but the math must not trust) get similarity 0 to
/// every peer and a 0 diagonal. All other diagonal entries are set to
/// exactly 1: a voter is always in their own in-group with weight 1, and
/// downstream denominators rely on that.
pub fn cosine_similarity(votes: &Array2<f32>) -> Array2<f32> {
    let n_users = votes.nrows();
    let norms: Vec<f32> = votes
        .rows()
        .into_iter()
        .map(|row| row.dot(&row).sqrt())
        .collect();

    let mut normalized = votes.clone();
    for (i, mut row) in normalized.rows_mut().into_iter().enumerate() {
        if norms[i] > 0.0 {
            row /= norms[i];
        }
    }

    let mut similarity = normalized.dot(&normalized.t());
    for i in 0..n_users {
        similarity[[i, i]] = if norms[i] > 0.0 { 1.0 } else { 0.0 };
    }
    similarity
}

/// Linearly rescale the off-diagonal similarities onto [-1, 1] using the
/// observed min/max; a degenerate spread (min == max) collapses them to 0.
/// The diagonal is left alone so the self-in-group weight survives.
///
/// Used only by the personalization uniqueness computation, never by the
/// published statement scores.
pub fn rescale_off_diagonal(similarity: &mut Array2<f32>) {
    let n = similarity.nrows();
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                min = min.min(similarity[[i, j]]);
                max = max.max(similarity[[i, j]]);
            }
        }
    }
    if min > max {
        // No off-diagonal entries at all (fewer than two users).
        return;
    }

    let spread = max - min;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                similarity[[i, j]] = if spread > 0.0 {
                    2.0 * (similarity[[i, j]] - min) / spread - 1.0
                } else {
                    0.0
                };
            }
        }
    }
}
