use super::scoring::{Dimension, DimensionScore};
use crate::canonical::{CanonicalPosting, CanonicalProfile};

/// Decay policy for the experience scorer. Defaults are a policy choice, not
/// a derived rule; callers tuning them get the same linear shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceConfig {
    /// Years above the posting's stated max before overqualification starts
    /// to count against the score.
    pub overqualification_tolerance: f64,
    /// Years of overshoot past the tolerance that take the score from 100
    /// down to 0.
    pub decay_window: f64,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            overqualification_tolerance: 5.0,
            decay_window: 5.0,
        }
    }
}

/// 100 inside the required range (max + tolerance treated as the ceiling,
/// unbounded when the posting states no max); linear decay to 0 on either
/// side, floored at 0.
pub fn score_experience(
    profile: &CanonicalProfile,
    posting: &CanonicalPosting,
    config: &ExperienceConfig,
) -> DimensionScore {
    let mut score = DimensionScore::new(Dimension::Experience, 100.0);
    let years = profile.years_experience;
    let min = posting.experience.min;

    if years < min {
        // min > 0 here, since years >= 0
        score.value = (100.0 * years / min).max(0.0);
        score.evidence.push(format!(
            "experience below minimum: {years:.1} < {min:.1} years"
        ));
        score.gaps.push(format!(
            "experience below required minimum ({years:.1} of {min:.1} years)"
        ));
        return score;
    }

    let Some(max) = posting.experience.max else {
        score.evidence.push(format!(
            "experience meets minimum: {years:.1} >= {min:.1} years"
        ));
        return score;
    };

    let ceiling = max + config.overqualification_tolerance;
    if years <= ceiling {
        score.evidence.push(format!(
            "experience within range: {years:.1} in [{min:.1}, {max:.1}] years"
        ));
        return score;
    }

    let overshoot = years - ceiling;
    score.value = (100.0 * (1.0 - overshoot / config.decay_window)).max(0.0);
    score.evidence.push(format!(
        "overqualified: {years:.1} years exceeds {ceiling:.1} year ceiling"
    ));
    score
}
