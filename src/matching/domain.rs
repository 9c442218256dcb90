use super::scoring::{Dimension, DimensionScore};
use crate::canonical::{CanonicalPosting, CanonicalProfile};

/// Fraction of the posting's domain tags the profile covers. A posting with
/// no domain tags imposes no constraint and scores 100.
pub fn score_domain(profile: &CanonicalProfile, posting: &CanonicalPosting) -> DimensionScore {
    let mut score = DimensionScore::new(Dimension::Domain, 100.0);

    if posting.domains.is_empty() {
        score.evidence.push("posting lists no domain tags".into());
        return score;
    }

    let mut overlap = 0usize;
    // BTreeSet iteration keeps evidence sorted by domain name.
    for domain in &posting.domains {
        if profile.domains.contains(domain) {
            overlap += 1;
            score.evidence.push(format!("domain match: {domain}"));
        } else {
            score.evidence.push(format!("missing domain: {domain}"));
            score.gaps.push(format!("missing domain: {domain}"));
        }
    }

    score.value = 100.0 * overlap as f64 / posting.domains.len() as f64;
    score
}
