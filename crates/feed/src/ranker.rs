use agora_protocol::{ArgumentPriority, ArgumentScore, StatementId};
use agora_scoring::EngineProfile;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Uniqueness weight assumed when the user has none for a statement.
pub const DEFAULT_UNIQUENESS: f32 = 1.0;

/// Clarity assumed for statements without published scores.
pub const DEFAULT_CLARITY: f32 = 1.0;

/// What the priority formula yields for a statement with no scores and no
/// uniqueness weight: (1 + 0 + 0) · 1² · 1². Statements nobody reacted to
/// enter the feed at exactly this value.
pub const DEFAULT_PRIORITY_FOR_UNSCORED: f32 = 1.0;

/// Combines statement scores and per-user uniqueness into a feed order.
#[derive(Debug, Clone)]
pub struct FeedRanker {
    consensus_weight: f32,
    fragmentation_weight: f32,
}

impl Default for FeedRanker {
    fn default() -> Self {
        Self::from_profile(&EngineProfile::default())
    }
}

impl FeedRanker {
    pub fn new(consensus_weight: f32, fragmentation_weight: f32) -> Self {
        Self {
            consensus_weight,
            fragmentation_weight,
        }
    }

    pub fn from_profile(profile: &EngineProfile) -> Self {
        Self::new(profile.consensus_weight(), profile.fragmentation_weight())
    }

    /// Rank every statement for one user, descending by priority with ties
    /// broken by statement id so the order is reproducible.
    ///
    /// `statements` seeds the candidate set (statements with no reactions
    /// at all get the default priority); scored statements outside the
    /// list are ranked too. Statements the user already reacted to are
    /// forced to priority 0.
    pub fn rank(
        &self,
        statements: &[StatementId],
        scores: &BTreeMap<StatementId, ArgumentScore>,
        uniqueness: &BTreeMap<StatementId, f32>,
        reacted: &HashSet<StatementId>,
    ) -> Vec<ArgumentPriority> {
        let candidates: BTreeSet<&StatementId> =
            statements.iter().chain(scores.keys()).collect();

        let mut ranked: Vec<ArgumentPriority> = candidates
            .into_iter()
            .map(|statement_id| {
                let priority = if reacted.contains(statement_id) {
                    0.0
                } else {
                    self.priority(scores.get(statement_id), uniqueness.get(statement_id))
                };
                ArgumentPriority {
                    statement_id: statement_id.clone(),
                    priority,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.priority
                .partial_cmp(&a.priority)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.statement_id.cmp(&b.statement_id))
        });

        log::debug!("Ranked {} statements", ranked.len());
        ranked
    }

    fn priority(&self, score: Option<&ArgumentScore>, uniqueness: Option<&f32>) -> f32 {
        let (consensus, fragmentation, clarity) = match score {
            Some(s) => (s.consensus_score, s.fragmentation_score, s.clarity_score),
            None => (0.0, 0.0, DEFAULT_CLARITY),
        };
        let uniqueness = uniqueness.copied().unwrap_or(DEFAULT_UNIQUENESS);

        (1.0 + self.consensus_weight * consensus + self.fragmentation_weight * fragmentation)
            * clarity.powi(2)
            * uniqueness.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn score(statement: &str, consensus: f32, fragmentation: f32, clarity: f32) -> ArgumentScore {
        ArgumentScore {
            statement_id: statement.to_string(),
            consensus_score: consensus,
            fragmentation_score: fragmentation,
            clarity_score: clarity,
        }
    }

    fn ids(ranked: &[ArgumentPriority]) -> Vec<&str> {
        ranked.iter().map(|p| p.statement_id.as_str()).collect()
    }

    #[test]
    fn higher_uniqueness_sorts_first_on_equal_scores() {
        let statements = vec!["s1".to_string(), "s2".to_string()];
        let scores: BTreeMap<_, _> = [
            ("s1".to_string(), score("s1", 0.3, 0.2, 0.9)),
            ("s2".to_string(), score("s2", 0.3, 0.2, 0.9)),
        ]
        .into();
        let uniqueness: BTreeMap<_, _> =
            [("s1".to_string(), 0.5), ("s2".to_string(), 2.0)].into();

        let ranked =
            FeedRanker::default().rank(&statements, &scores, &uniqueness, &HashSet::new());
        assert_eq!(ids(&ranked), ["s2", "s1"]);
        // uniqueness² scales the otherwise identical base priority by 16x.
        assert!((ranked[0].priority / ranked[1].priority - 16.0).abs() < 1e-3);
    }

    #[test]
    fn reacted_statements_are_forced_to_zero() {
        let statements = vec!["s1".to_string(), "s2".to_string()];
        let scores: BTreeMap<_, _> =
            [("s1".to_string(), score("s1", 0.9, 0.9, 1.0))].into();
        let reacted: HashSet<_> = [("s1".to_string())].into();

        let ranked = FeedRanker::default().rank(&statements, &scores, &BTreeMap::new(), &reacted);
        assert_eq!(ids(&ranked), ["s2", "s1"]);
        assert_eq!(ranked[1].priority, 0.0);
    }

    #[test]
    fn unscored_statements_get_the_default_priority() {
        let statements = vec!["fresh".to_string()];

        let ranked = FeedRanker::default().rank(
            &statements,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &HashSet::new(),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].priority, DEFAULT_PRIORITY_FOR_UNSCORED);
    }

    #[test]
    fn consensus_and_fragmentation_raise_priority_and_cloudiness_lowers_it() {
        let statements: Vec<StatementId> =
            ["plain", "hot", "murky"].iter().map(|s| s.to_string()).collect();
        let scores: BTreeMap<_, _> = [
            ("plain".to_string(), score("plain", 0.0, 0.0, 1.0)),
            ("hot".to_string(), score("hot", 0.5, 0.5, 1.0)),
            ("murky".to_string(), score("murky", 0.5, 0.5, 0.1)),
        ]
        .into();

        let ranked =
            FeedRanker::default().rank(&statements, &scores, &BTreeMap::new(), &HashSet::new());
        // Clarity enters squared, so the murky statement drops below even
        // the unremarkable one: 51 · 0.1² = 0.51 < 1.
        assert_eq!(ids(&ranked), ["hot", "plain", "murky"]);

        // (1 + 50·0.5 + 50·0.5) · 1² · 1² = 51 for the hot statement.
        assert!((ranked[0].priority - 51.0).abs() < 1e-4);
        assert!((ranked[2].priority - 0.51).abs() < 1e-4);
    }

    #[test]
    fn ties_break_by_statement_id() {
        let statements: Vec<StatementId> =
            ["sb", "sa", "sc"].iter().map(|s| s.to_string()).collect();

        let ranked = FeedRanker::default().rank(
            &statements,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &HashSet::new(),
        );
        assert_eq!(ids(&ranked), ["sa", "sb", "sc"]);
    }

    #[test]
    fn scored_statements_missing_from_the_list_are_still_ranked() {
        let statements = vec!["listed".to_string()];
        let scores: BTreeMap<_, _> =
            [("orphan".to_string(), score("orphan", 0.2, 0.0, 1.0))].into();

        let ranked =
            FeedRanker::default().rank(&statements, &scores, &BTreeMap::new(), &HashSet::new());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ids(&ranked)[0], "orphan");
    }
}
