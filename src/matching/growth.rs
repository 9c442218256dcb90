//! Growth-potential scorer.
//!
//! The one inherently subjective dimension: of the posting's skills and
//! domains the profile lacks, how many are plausibly learnable? The adjacency
//! judgment is an injectable policy so callers can plug in anything from a
//! static family table to an external classifier, while the scorer itself
//! stays deterministic for a fixed policy.

use std::collections::HashMap;

use super::scoring::{Dimension, DimensionScore};
use crate::canonical::{CanonicalPosting, CanonicalProfile};

/// Caller-suppliable adjacency judgment. Implementations must be pure for a
/// given input; both the profile's skills and domains are available.
pub trait AdjacencyPolicy: Send + Sync {
    /// Whether `item` (a canonical skill or domain absent from the profile)
    /// is plausibly learnable given the profile's existing background.
    fn is_learnable(&self, item: &str, profile: &CanonicalProfile) -> bool;
}

/// Default policy: a skill -> family mapping; an absent item is learnable
/// when it shares a family with something the profile already has.
pub struct SkillFamilyPolicy {
    families: HashMap<String, String>,
}

impl SkillFamilyPolicy {
    /// Build from a caller-supplied mapping of canonical skill name to
    /// family label.
    pub fn new(families: HashMap<String, String>) -> Self {
        Self { families }
    }

    fn family_of(&self, item: &str) -> Option<&str> {
        self.families.get(item).map(String::as_str)
    }
}

impl Default for SkillFamilyPolicy {
    fn default() -> Self {
        let table: &[(&str, &[&str])] = &[
            (
                "frontend",
                &["javascript", "typescript", "react", "vue", "angular", "nextjs", "css", "sass", "tailwind"],
            ),
            (
                "backend",
                &["python", "golang", "rust", "ruby", "nodejs", "django", "flask", "spring", "rails", "fastapi", "graphql", "rest", "csharp", "cplusplus"],
            ),
            (
                "data",
                &["sql", "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "sqlite", "pandas", "spark", "kafka"],
            ),
            (
                "ml",
                &["machinelearning", "tensorflow", "pytorch", "pandas"],
            ),
            (
                "infra",
                &["aws", "gcp", "azure", "docker", "kubernetes", "terraform", "cicd", "linux"],
            ),
        ];

        let mut families = HashMap::new();
        for (family, members) in table {
            for member in *members {
                families.insert((*member).to_string(), (*family).to_string());
            }
        }
        Self { families }
    }
}

impl AdjacencyPolicy for SkillFamilyPolicy {
    fn is_learnable(&self, item: &str, profile: &CanonicalProfile) -> bool {
        let Some(target_family) = self.family_of(item) else {
            return false;
        };

        profile
            .skills
            .keys()
            .map(String::as_str)
            .chain(profile.domains.iter().map(String::as_str))
            .any(|have| self.family_of(have) == Some(target_family))
    }
}

/// Fraction of absent posting skills/domains the policy deems learnable.
/// A posting that introduces nothing new scores 100.
pub fn score_growth(
    profile: &CanonicalProfile,
    posting: &CanonicalPosting,
    policy: &dyn AdjacencyPolicy,
) -> DimensionScore {
    let mut score = DimensionScore::new(Dimension::Growth, 100.0);

    // Sorted set: evidence ordering is by item name.
    let missing: std::collections::BTreeSet<&str> = posting
        .required_skills
        .iter()
        .chain(posting.nice_to_have.iter())
        .map(String::as_str)
        .filter(|s| !profile.has_skill(s))
        .chain(
            posting
                .domains
                .iter()
                .map(String::as_str)
                .filter(|d| !profile.domains.contains(*d)),
        )
        .collect();

    if missing.is_empty() {
        score
            .evidence
            .push("posting introduces no skills outside the profile".into());
        return score;
    }

    let mut learnable = 0usize;
    for item in &missing {
        if policy.is_learnable(item, profile) {
            learnable += 1;
            score
                .evidence
                .push(format!("learnable via adjacent experience: {item}"));
        } else {
            score.evidence.push(format!("no adjacent grounding: {item}"));
        }
    }

    score.value = 100.0 * learnable as f64 / missing.len() as f64;
    score
}
