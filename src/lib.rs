pub mod canonical;
pub mod error;
pub mod logging;
pub mod matching;
pub mod run_id;
pub mod skill_normalizer;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Work arrangement advertised by a posting or accepted by a candidate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkType {
    Remote,
    Hybrid,
    Onsite,
}

/// Self-reported proficiency attached to a profile skill. Carried through
/// canonicalization for downstream display; not a scoring input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub proficiency: Option<Proficiency>,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proficiency: None,
        }
    }

    pub fn with_proficiency(name: impl Into<String>, proficiency: Proficiency) -> Self {
        Self {
            name: name.into(),
            proficiency: Some(proficiency),
        }
    }
}

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<SkillEntry>,
    pub years_experience: f64,
    pub domains: Vec<String>,
    pub target_roles: Vec<String>,
    pub target_locations: Vec<String>,
    pub salary_min: Option<u32>,
    pub work_types: Vec<WorkType>,
    pub needs_visa_sponsorship: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: Option<String>,
    pub source: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub work_type: Option<WorkType>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub domains: Vec<String>,
    pub visa_sponsorship: Option<bool>,
    pub posted_at: Option<DateTime<Utc>>,
}
