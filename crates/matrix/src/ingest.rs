use crate::error::{MatrixError, Result};
use agora_protocol::{RawReaction, Reaction, ReactionKind};

/// Validate storage rows into typed reactions.
///
/// A kind outside agree/disagree/unclear signals upstream data corruption
/// and aborts the whole computation; no partial result is produced.
pub fn parse_reactions(raw: &[RawReaction]) -> Result<Vec<Reaction>> {
    let mut reactions = Vec::with_capacity(raw.len());
    for row in raw {
        let kind = ReactionKind::parse(&row.kind).ok_or_else(|| {
            MatrixError::InvalidReactionKind {
                kind: row.kind.clone(),
                user_id: row.user_id.clone(),
                statement_id: row.statement_id.clone(),
            }
        })?;
        reactions.push(Reaction::new(row.user_id.clone(), row.statement_id.clone(), kind));
    }
    Ok(reactions)
}
