use super::scoring::{Dimension, DimensionScore};
use crate::canonical::{CanonicalPosting, CanonicalProfile, Salary};
use crate::WorkType;

/// Four equal sub-checks, 25 points each: location, salary floor, visa
/// sponsorship, work-type overlap. Unknown posting data earns half credit
/// rather than failing; a needed-but-not-offered visa is a hard gap but does
/// not zero the whole dimension.
pub fn score_preferences(profile: &CanonicalProfile, posting: &CanonicalPosting) -> DimensionScore {
    let mut score = DimensionScore::new(Dimension::Preferences, 0.0);
    let prefs = &profile.preferences;
    let mut credit = 0.0;

    // Sub-checks evaluated in criterion-name order so evidence stays sorted.

    // location
    if prefs.locations.is_empty() {
        credit += 1.0;
        score.evidence.push("location: no preference".into());
    } else if prefs.locations.contains(&posting.location) {
        credit += 1.0;
        score
            .evidence
            .push(format!("location: {} is a target location", posting.location));
    } else if is_remote_friendly(posting) && accepts_remote(profile) {
        credit += 1.0;
        score.evidence.push("location: remote posting accepted".into());
    } else {
        score.evidence.push(format!(
            "location: {} not among target locations",
            posting.location
        ));
        score.gaps.push(format!(
            "location {} not among target locations",
            posting.location
        ));
    }

    // salary
    match (prefs.salary_min, posting.salary) {
        (None, _) => {
            credit += 1.0;
            score.evidence.push("salary: no minimum stated".into());
        }
        (Some(_), Salary::Unspecified) => {
            credit += 0.5;
            score
                .evidence
                .push("salary: posting does not state a range".into());
        }
        (Some(floor), salary) => {
            // upper_bound is Some for any specified range
            let ceiling = salary.upper_bound().unwrap_or(0);
            if ceiling >= floor {
                credit += 1.0;
                score
                    .evidence
                    .push(format!("salary: ceiling {ceiling} meets minimum {floor}"));
            } else {
                score
                    .evidence
                    .push(format!("salary: ceiling {ceiling} below minimum {floor}"));
                score.gaps.push(format!(
                    "posting salary ceiling {ceiling} below desired minimum {floor}"
                ));
            }
        }
    }

    // visa sponsorship
    if !prefs.needs_visa_sponsorship {
        credit += 1.0;
        score.evidence.push("visa sponsorship: not required".into());
    } else {
        match posting.visa_sponsorship {
            Some(true) => {
                credit += 1.0;
                score.evidence.push("visa sponsorship: offered".into());
            }
            Some(false) => {
                score
                    .evidence
                    .push("visa sponsorship: required but not offered".into());
                score
                    .gaps
                    .push("visa sponsorship required but not offered".into());
            }
            None => {
                credit += 0.5;
                score
                    .evidence
                    .push("visa sponsorship: required, posting does not say".into());
                score
                    .gaps
                    .push("visa sponsorship required but posting does not state availability".into());
            }
        }
    }

    // work type
    if prefs.work_types.is_empty() {
        credit += 1.0;
        score.evidence.push("work type: no preference".into());
    } else {
        match posting.work_type {
            Some(work_type) if prefs.work_types.contains(&work_type) => {
                credit += 1.0;
                score
                    .evidence
                    .push(format!("work type: {} accepted", work_type.as_ref()));
            }
            Some(work_type) => {
                score
                    .evidence
                    .push(format!("work type: {} not accepted", work_type.as_ref()));
                score
                    .gaps
                    .push(format!("work type {} not accepted", work_type.as_ref()));
            }
            None => {
                credit += 0.5;
                score
                    .evidence
                    .push("work type: posting does not state one".into());
            }
        }
    }

    score.value = credit * 25.0;
    score
}

fn is_remote_friendly(posting: &CanonicalPosting) -> bool {
    posting.work_type == Some(WorkType::Remote) || posting.location.contains("remote")
}

fn accepts_remote(profile: &CanonicalProfile) -> bool {
    let work_types = &profile.preferences.work_types;
    work_types.is_empty() || work_types.contains(&WorkType::Remote)
}
