//! Canonical forms of [`Profile`] and [`Posting`].
//!
//! Scorers only ever see canonical records: skill names alias-normalized and
//! deduplicated, tags lower-cased, absent fields as explicit `Option`/enum
//! states. Normalization is pure and idempotent.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ValidationError;
use crate::skill_normalizer::{normalize_skill, normalize_tag};
use crate::{Posting, Proficiency, Profile, WorkType};

#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalProfile {
    pub name: String,
    /// Canonical skill name -> proficiency. First occurrence wins on
    /// duplicates; `BTreeMap` keeps iteration deterministic.
    pub skills: BTreeMap<String, Option<Proficiency>>,
    pub years_experience: f64,
    pub domains: BTreeSet<String>,
    pub preferences: CanonicalPreferences,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalPreferences {
    pub roles: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub salary_min: Option<u32>,
    pub work_types: BTreeSet<WorkType>,
    pub needs_visa_sponsorship: bool,
}

/// Posting salary with an unspecified state distinguishable from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Salary {
    Unspecified,
    /// At least one bound is present; `min <= max` when both are.
    Range { min: Option<u32>, max: Option<u32> },
}

impl Salary {
    fn from_bounds(min: Option<u32>, max: Option<u32>) -> Self {
        match (min, max) {
            (None, None) => Salary::Unspecified,
            (Some(lo), Some(hi)) if lo > hi => Salary::Range {
                min: Some(hi),
                max: Some(lo),
            },
            (min, max) => Salary::Range { min, max },
        }
    }

    /// The most a posting is known to pay: the upper bound, or the lower
    /// bound when only that is stated.
    pub fn upper_bound(&self) -> Option<u32> {
        match self {
            Salary::Unspecified => None,
            Salary::Range { min, max } => max.or(*min),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceRange {
    pub min: f64,
    /// `None` means unbounded above.
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Posting order preserved; gap reporting depends on it.
    pub required_skills: Vec<String>,
    /// Nice-to-have skills, disjoint from `required_skills`.
    pub nice_to_have: Vec<String>,
    pub domains: BTreeSet<String>,
    pub experience: ExperienceRange,
    pub salary: Salary,
    pub work_type: Option<WorkType>,
    pub visa_sponsorship: Option<bool>,
}

impl CanonicalProfile {
    pub fn from_profile(profile: &Profile) -> Result<Self, ValidationError> {
        let name = profile.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let mut skills: BTreeMap<String, Option<Proficiency>> = BTreeMap::new();
        for entry in &profile.skills {
            let canonical = normalize_skill(&entry.name);
            if canonical.is_empty() {
                continue;
            }
            skills.entry(canonical).or_insert(entry.proficiency);
        }
        if skills.is_empty() {
            return Err(ValidationError::NoSkills);
        }

        Ok(Self {
            name,
            skills,
            years_experience: profile.years_experience.max(0.0),
            domains: normalize_tags(&profile.domains),
            preferences: CanonicalPreferences {
                roles: normalize_tags(&profile.target_roles),
                locations: normalize_tags(&profile.target_locations),
                salary_min: profile.salary_min,
                work_types: profile.work_types.iter().copied().collect(),
                needs_visa_sponsorship: profile.needs_visa_sponsorship,
            },
        })
    }

    pub fn has_skill(&self, canonical_name: &str) -> bool {
        self.skills.contains_key(canonical_name)
    }
}

impl CanonicalPosting {
    pub fn from_posting(posting: &Posting) -> Result<Self, ValidationError> {
        let title = posting.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle {
                id: posting.id.clone(),
            });
        }
        let company = posting.company.trim().to_string();
        if company.is_empty() {
            return Err(ValidationError::EmptyCompany {
                id: posting.id.clone(),
            });
        }

        let required_skills = dedup_skills_in_order(&posting.required_skills, &BTreeSet::new());
        // A skill listed both required and nice-to-have only counts as required.
        let required_set: BTreeSet<String> = required_skills.iter().cloned().collect();
        let nice_to_have = dedup_skills_in_order(&posting.preferred_skills, &required_set);

        let min = posting.experience_min.unwrap_or(0.0).max(0.0);
        let experience = match posting.experience_max {
            Some(max) if max < min => ExperienceRange {
                min: max.max(0.0),
                max: Some(min),
            },
            max => ExperienceRange { min, max },
        };

        Ok(Self {
            id: posting.id.clone(),
            title,
            company,
            location: normalize_tag(&posting.location),
            required_skills,
            nice_to_have,
            domains: normalize_tags(&posting.domains),
            experience,
            salary: Salary::from_bounds(posting.salary_min, posting.salary_max),
            work_type: posting.work_type,
            visa_sponsorship: posting.visa_sponsorship,
        })
    }
}

fn normalize_tags(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect()
}

fn dedup_skills_in_order(skills: &[String], exclude: &BTreeSet<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut result = Vec::with_capacity(skills.len());
    for skill in skills {
        let canonical = normalize_skill(skill);
        if canonical.is_empty() || exclude.contains(&canonical) {
            continue;
        }
        if seen.insert(canonical.clone()) {
            result.push(canonical);
        }
    }
    result
}
