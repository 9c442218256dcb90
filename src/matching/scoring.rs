//! Core scoring types and the per-pair evaluation entry point.

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::{
    domain::score_domain,
    experience::{score_experience, ExperienceConfig},
    growth::{score_growth, AdjacencyPolicy},
    preferences::score_preferences,
    skills::score_skills,
    weights::Weights,
};
use crate::canonical::{CanonicalPosting, CanonicalProfile};

/// The five fixed scoring axes. Every [`MatchResult`] carries exactly one
/// [`DimensionScore`] per dimension, in [`Dimension::ALL`] order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Dimension {
    Skills,
    Experience,
    Domain,
    Preferences,
    Growth,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Skills,
        Dimension::Experience,
        Dimension::Domain,
        Dimension::Preferences,
        Dimension::Growth,
    ];
}

/// One dimension's verdict: a bounded value plus the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// In [0, 100].
    pub value: f64,
    /// Matched and missing items, sorted by criterion name within each group
    /// (missing required skills keep posting order instead).
    pub evidence: Vec<String>,
    /// Requirements the profile leaves unmet. Surfaced, never fatal.
    pub gaps: Vec<String>,
}

impl DimensionScore {
    pub fn new(dimension: Dimension, value: f64) -> Self {
        Self {
            dimension,
            value: value.clamp(0.0, 100.0),
            evidence: Vec::new(),
            gaps: Vec::new(),
        }
    }
}

/// Final per-posting output: overall score, dimension breakdown, gap report.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub posting_id: String,
    pub title: String,
    pub company: String,
    /// Weighted sum of dimension values, in [0, 100].
    pub overall: f64,
    pub dimensions: Vec<DimensionScore>,
    /// Gap evidence concatenated across dimensions in dimension order.
    /// Deliberately not deduplicated: a missing skill and a missing domain
    /// are distinct concerns even when textually similar.
    pub gaps: Vec<String>,
}

/// Run all five scorers on one canonical pair and fold the weighted total.
pub fn score_pair(
    profile: &CanonicalProfile,
    posting: &CanonicalPosting,
    weights: &Weights,
    experience: &ExperienceConfig,
    policy: &dyn AdjacencyPolicy,
) -> MatchResult {
    let dimensions = vec![
        score_skills(profile, posting),
        score_experience(profile, posting, experience),
        score_domain(profile, posting),
        score_preferences(profile, posting),
        score_growth(profile, posting, policy),
    ];

    let overall = dimensions
        .iter()
        .map(|d| d.value * f64::from(weights.for_dimension(d.dimension)))
        .sum::<f64>()
        / 100.0;

    let gaps = dimensions.iter().flat_map(|d| d.gaps.clone()).collect();

    MatchResult {
        posting_id: posting.id.clone(),
        title: posting.title.clone(),
        company: posting.company.clone(),
        overall,
        dimensions,
        gaps,
    }
}
