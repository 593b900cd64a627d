use agora_protocol::Reaction;
use std::collections::HashMap;

/// Bijection between entity ids and dense positions in [0, N), assigned in
/// first-seen order. Built once per computation and never reused across
/// discussions.
#[derive(Debug, Clone, Default)]
pub struct IndexMap {
    positions: HashMap<String, usize>,
    ids: Vec<String>,
}

impl IndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the position for an id, assigning the next free one on first
    /// sight.
    pub fn insert(&mut self, id: &str) -> usize {
        if let Some(&position) = self.positions.get(id) {
            return position;
        }
        let position = self.ids.len();
        self.positions.insert(id.to_string(), position);
        self.ids.push(id.to_string());
        position
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn id(&self, position: usize) -> Option<&str> {
        self.ids.get(position).map(String::as_str)
    }

    /// All ids in position order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Index maps for the users and statements of one reaction set.
#[derive(Debug, Clone, Default)]
pub struct ReactionIndex {
    pub users: IndexMap,
    pub statements: IndexMap,
}

impl ReactionIndex {
    pub fn build(reactions: &[Reaction]) -> Self {
        let mut users = IndexMap::new();
        let mut statements = IndexMap::new();
        for reaction in reactions {
            users.insert(&reaction.user_id);
            statements.insert(&reaction.statement_id);
        }
        Self { users, statements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_protocol::ReactionKind::{Agree, Disagree};
    use pretty_assertions::assert_eq;

    #[test]
    fn positions_follow_first_seen_order() {
        let reactions = vec![
            Reaction::new("carol", "s9", Agree),
            Reaction::new("alice", "s2", Disagree),
            Reaction::new("carol", "s2", Agree),
            Reaction::new("bob", "s9", Agree),
        ];

        let index = ReactionIndex::build(&reactions);
        assert_eq!(index.users.position("carol"), Some(0));
        assert_eq!(index.users.position("alice"), Some(1));
        assert_eq!(index.users.position("bob"), Some(2));
        assert_eq!(index.statements.position("s9"), Some(0));
        assert_eq!(index.statements.position("s2"), Some(1));
        assert_eq!(index.users.len(), 3);
        assert_eq!(index.statements.len(), 2);
    }

    #[test]
    fn insert_is_stable_for_repeated_ids() {
        let mut map = IndexMap::new();
        assert_eq!(map.insert("x"), 0);
        assert_eq!(map.insert("y"), 1);
        assert_eq!(map.insert("x"), 0);
        assert_eq!(map.ids(), ["x".to_string(), "y".to_string()]);
        assert_eq!(map.id(1), Some("y"));
        assert_eq!(map.id(2), None);
    }
}
