use agora_matrix::{EngagementFilter, MIN_VOTES_PER_STATEMENT, MIN_VOTES_PER_USER};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Minimum qualifying voters a statement needs before scores are
/// published for it.
pub const MIN_VOTERS_PER_STATEMENT: usize = 2;

/// Feed weight applied to the consensus score.
pub const CONSENSUS_WEIGHT: f32 = 50.0;

/// Feed weight applied to the fragmentation score.
pub const FRAGMENTATION_WEIGHT: f32 = 50.0;

/// Tunable thresholds and weights for one scoring run.
///
/// Loaded from JSON with every field optional; missing fields take the
/// canonical defaults. Validation rejects profiles the pipeline cannot
/// honor.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineProfile {
    min_votes_per_user: usize,
    min_votes_per_statement: usize,
    min_voters_per_statement: usize,
    consensus_weight: f32,
    fragmentation_weight: f32,
}

impl Default for EngineProfile {
    fn default() -> Self {
        Self {
            min_votes_per_user: MIN_VOTES_PER_USER,
            min_votes_per_statement: MIN_VOTES_PER_STATEMENT,
            min_voters_per_statement: MIN_VOTERS_PER_STATEMENT,
            consensus_weight: CONSENSUS_WEIGHT,
            fragmentation_weight: FRAGMENTATION_WEIGHT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawEngineProfile {
    min_votes_per_user: Option<usize>,
    min_votes_per_statement: Option<usize>,
    min_voters_per_statement: Option<usize>,
    consensus_weight: Option<f32>,
    fragmentation_weight: Option<f32>,
}

impl EngineProfile {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawEngineProfile =
            serde_json::from_slice(bytes).context("Failed to parse engine profile JSON")?;
        let defaults = Self::default();

        let profile = Self {
            min_votes_per_user: raw.min_votes_per_user.unwrap_or(defaults.min_votes_per_user),
            min_votes_per_statement: raw
                .min_votes_per_statement
                .unwrap_or(defaults.min_votes_per_statement),
            min_voters_per_statement: raw
                .min_voters_per_statement
                .unwrap_or(defaults.min_voters_per_statement),
            consensus_weight: raw.consensus_weight.unwrap_or(defaults.consensus_weight),
            fragmentation_weight: raw
                .fragmentation_weight
                .unwrap_or(defaults.fragmentation_weight),
        };
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<()> {
        if self.min_votes_per_user == 0 {
            return Err(anyhow!("min_votes_per_user must be at least 1"));
        }
        if self.min_votes_per_statement == 0 {
            return Err(anyhow!("min_votes_per_statement must be at least 1"));
        }
        if self.min_voters_per_statement == 0 {
            return Err(anyhow!("min_voters_per_statement must be at least 1"));
        }
        for (name, weight) in [
            ("consensus_weight", self.consensus_weight),
            ("fragmentation_weight", self.fragmentation_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(anyhow!("{name} must be a non-negative finite number"));
            }
        }
        Ok(())
    }

    pub fn min_votes_per_user(&self) -> usize {
        self.min_votes_per_user
    }

    pub fn min_votes_per_statement(&self) -> usize {
        self.min_votes_per_statement
    }

    pub fn min_voters_per_statement(&self) -> usize {
        self.min_voters_per_statement
    }

    pub fn consensus_weight(&self) -> f32 {
        self.consensus_weight
    }

    pub fn fragmentation_weight(&self) -> f32 {
        self.fragmentation_weight
    }

    /// The engagement filter this profile prescribes.
    pub fn engagement_filter(&self) -> EngagementFilter {
        EngagementFilter::new(self.min_votes_per_user, self.min_votes_per_statement)
    }
}
