use super::scoring::{Dimension, DimensionScore};
use crate::canonical::{CanonicalPosting, CanonicalProfile};

/// Nice-to-have skills add at most this many points on top of the required
/// fraction. A default policy value, not a derived rule.
pub const NICE_TO_HAVE_BONUS_CAP: f64 = 10.0;

/// Required-skill coverage plus a capped nice-to-have bonus.
///
/// `100 * matched_required / required_total`, then up to
/// [`NICE_TO_HAVE_BONUS_CAP`] extra points pro-rated over the nice-to-have
/// list, total capped at 100. A posting with no required skills has no unmet
/// requirement and scores 100.
pub fn score_skills(profile: &CanonicalProfile, posting: &CanonicalPosting) -> DimensionScore {
    let mut score = DimensionScore::new(Dimension::Skills, 100.0);

    if posting.required_skills.is_empty() && posting.nice_to_have.is_empty() {
        score
            .evidence
            .push("posting lists no explicit skill requirements".into());
        return score;
    }

    let mut matched: Vec<&str> = Vec::new();
    let mut missing: Vec<&str> = Vec::new();
    for skill in &posting.required_skills {
        if profile.has_skill(skill) {
            matched.push(skill);
        } else {
            missing.push(skill);
        }
    }

    let base = if posting.required_skills.is_empty() {
        score
            .evidence
            .push("posting lists no required skills".into());
        100.0
    } else {
        100.0 * matched.len() as f64 / posting.required_skills.len() as f64
    };

    let mut bonus_matched: Vec<&str> = Vec::new();
    let bonus = if posting.nice_to_have.is_empty() {
        0.0
    } else {
        bonus_matched = posting
            .nice_to_have
            .iter()
            .filter(|s| profile.has_skill(s))
            .map(String::as_str)
            .collect();
        NICE_TO_HAVE_BONUS_CAP * bonus_matched.len() as f64 / posting.nice_to_have.len() as f64
    };

    score.value = (base + bonus).min(100.0);

    matched.sort_unstable();
    for skill in matched {
        match profile.skills.get(skill).copied().flatten() {
            Some(level) => score
                .evidence
                .push(format!("required skill met: {skill} ({})", level.as_ref())),
            None => score.evidence.push(format!("required skill met: {skill}")),
        }
    }
    bonus_matched.sort_unstable();
    for skill in bonus_matched {
        score.evidence.push(format!("nice-to-have met: {skill}"));
    }
    // Missing required skills keep posting order in both evidence and gaps.
    for skill in missing {
        score
            .evidence
            .push(format!("missing required skill: {skill}"));
        score.gaps.push(format!("missing required skill: {skill}"));
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Posting, Proficiency, Profile, SkillEntry};

    fn profile(skills: &[&str]) -> CanonicalProfile {
        CanonicalProfile::from_profile(&Profile {
            name: "Ada".into(),
            skills: skills.iter().map(|s| SkillEntry::new(*s)).collect(),
            ..Profile::default()
        })
        .unwrap()
    }

    fn posting(required: &[&str], preferred: &[&str]) -> CanonicalPosting {
        CanonicalPosting::from_posting(&Posting {
            id: "p".into(),
            title: "Engineer".into(),
            company: "Acme".into(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            ..Posting::default()
        })
        .unwrap()
    }

    #[test]
    fn two_of_three_required_is_two_thirds() {
        let score = score_skills(
            &profile(&["python", "docker"]),
            &posting(&["python", "docker", "kubernetes"], &[]),
        );
        assert!((score.value - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(score.gaps, vec!["missing required skill: kubernetes"]);
    }

    #[test]
    fn no_requirements_scores_full_with_note() {
        let score = score_skills(&profile(&["python"]), &posting(&[], &[]));
        assert_eq!(score.value, 100.0);
        assert_eq!(
            score.evidence,
            vec!["posting lists no explicit skill requirements"]
        );
        assert!(score.gaps.is_empty());
    }

    #[test]
    fn nice_to_have_bonus_is_capped() {
        let full = score_skills(
            &profile(&["python", "terraform", "redis"]),
            &posting(&["python"], &["terraform", "redis"]),
        );
        // base 100 + bonus would exceed the scale; capped at 100
        assert_eq!(full.value, 100.0);

        let partial = score_skills(
            &profile(&["python", "terraform"]),
            &posting(&["python", "docker"], &["terraform", "redis"]),
        );
        // base 50 + bonus 10 * 1/2
        assert!((partial.value - 55.0).abs() < 1e-9);
    }

    #[test]
    fn adding_a_missing_skill_never_lowers_the_score() {
        let posting = posting(&["python", "docker", "kubernetes"], &["redis"]);
        let before = score_skills(&profile(&["python"]), &posting).value;
        let after = score_skills(&profile(&["python", "kubernetes"]), &posting).value;
        assert!(after >= before);
    }

    #[test]
    fn missing_skills_keep_posting_order() {
        let score = score_skills(
            &profile(&["docker"]),
            &posting(&["zookeeper", "docker", "ansible"], &[]),
        );
        assert_eq!(
            score.gaps,
            vec![
                "missing required skill: zookeeper",
                "missing required skill: ansible"
            ]
        );
    }

    #[test]
    fn evidence_mentions_proficiency_when_known() {
        let canonical = CanonicalProfile::from_profile(&Profile {
            name: "Ada".into(),
            skills: vec![SkillEntry::with_proficiency("python", Proficiency::Expert)],
            ..Profile::default()
        })
        .unwrap();
        let score = score_skills(&canonical, &posting(&["python"], &[]));
        assert_eq!(score.evidence, vec!["required skill met: python (expert)"]);
    }
}
