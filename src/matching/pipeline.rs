//! Aggregator: configuration, batch scoring, ranking, and the gap report.

use std::cmp::Ordering;

use tracing::{info, warn};

use super::experience::ExperienceConfig;
use super::growth::{AdjacencyPolicy, SkillFamilyPolicy};
use super::scoring::{score_pair, MatchResult};
use super::weights::Weights;
use crate::canonical::{CanonicalPosting, CanonicalProfile};
use crate::error::{ConfigError, ValidationError};
use crate::{run_id, Posting, Profile};

/// Engine configuration. An explicit record passed at construction time;
/// the engine holds no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Results scoring strictly below this are dropped after scoring.
    pub min_score: f64,
    pub weights: Weights,
    pub experience: ExperienceConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            weights: Weights::default(),
            experience: ExperienceConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }

    /// Apply one `key=value` option from a loosely-typed source (config file,
    /// CLI flag). Unrecognized keys are an error, not silently ignored.
    pub fn apply_option(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "min_score" => self.min_score = parse(key, value)?,
            "weights.skills" => self.weights.skills = parse(key, value)?,
            "weights.experience" => self.weights.experience = parse(key, value)?,
            "weights.domain" => self.weights.domain = parse(key, value)?,
            "weights.preferences" => self.weights.preferences = parse(key, value)?,
            "weights.growth" => self.weights.growth = parse(key, value)?,
            "experience.overqualification_tolerance" => {
                self.experience.overqualification_tolerance = parse(key, value)?
            }
            "experience.decay_window" => self.experience.decay_window = parse(key, value)?,
            _ => {
                return Err(ConfigError::UnknownOption {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// A posting excluded from a batch, reported individually.
#[derive(Debug, Clone, PartialEq)]
pub struct PostingFailure {
    pub posting_id: String,
    pub error: ValidationError,
}

/// Outcome of one batch: ranked results, per-posting failures, and postings
/// whose scoring never started before a deadline. A non-empty `skipped` list
/// is a partial result, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchOutcome {
    pub results: Vec<MatchResult>,
    pub failures: Vec<PostingFailure>,
    pub skipped: Vec<String>,
}

pub struct MatchEngine {
    config: MatchConfig,
    policy: Box<dyn AdjacencyPolicy>,
}

impl MatchEngine {
    /// Engine with the default skill-family adjacency policy.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::with_policy(config, Box::new(SkillFamilyPolicy::default()))
    }

    /// Engine with a caller-supplied growth-adjacency policy.
    pub fn with_policy(
        config: MatchConfig,
        policy: Box<dyn AdjacencyPolicy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score one canonical pair. Pure; identical inputs produce a
    /// bit-identical result.
    pub fn score_pair(&self, profile: &CanonicalProfile, posting: &CanonicalPosting) -> MatchResult {
        score_pair(
            profile,
            posting,
            &self.config.weights,
            &self.config.experience,
            &*self.policy,
        )
    }

    /// Score a batch of postings against one profile, serially.
    ///
    /// A profile validation error is fatal; a posting validation error only
    /// excludes that posting and is reported in the outcome's `failures`.
    pub fn rank(&self, profile: &Profile, postings: &[Posting]) -> Result<MatchOutcome, ValidationError> {
        let profile_c = CanonicalProfile::from_profile(profile)?;
        let batch_id = run_id::generate();

        let mut results = Vec::with_capacity(postings.len());
        let mut failures = Vec::new();
        for posting in postings {
            match CanonicalPosting::from_posting(posting) {
                Ok(posting_c) => results.push(self.score_pair(&profile_c, &posting_c)),
                Err(error) => {
                    warn!(posting_id = %posting.id, %error, "posting excluded from batch");
                    failures.push(PostingFailure {
                        posting_id: posting.id.clone(),
                        error,
                    });
                }
            }
        }

        let scored = results.len();
        let results = self.finalize(results);
        info!(
            run_id = run_id::get(),
            batch_id = %batch_id,
            total = postings.len(),
            scored,
            kept = results.len(),
            failed = failures.len(),
            "ranked postings"
        );

        Ok(MatchOutcome {
            results,
            failures,
            skipped: Vec::new(),
        })
    }

    /// Drop results below `min_score`, then order by overall score descending
    /// with ties broken by title ascending.
    pub(crate) fn finalize(&self, mut results: Vec<MatchResult>) -> Vec<MatchResult> {
        results.retain(|r| r.overall >= self.config.min_score);
        results.sort_by(|a, b| {
            match b.overall.partial_cmp(&a.overall).unwrap_or(Ordering::Equal) {
                Ordering::Equal => a.title.cmp(&b.title),
                other => other,
            }
        });
        results
    }
}
