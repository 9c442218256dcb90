//! Parallel batch scoring with a caller-supplied time budget.
//!
//! Each (profile, posting) pair is independent and read-only over shared
//! input, so a batch is a parallel map: a bounded pool of workers claims
//! posting indexes off an atomic counter and reports over a channel. Workers
//! check the deadline before claiming; postings never claimed are reported as
//! skipped, and everything already finished is still returned.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tracing::info;

use super::pipeline::{MatchEngine, MatchOutcome, PostingFailure};
use crate::canonical::{CanonicalPosting, CanonicalProfile};
use crate::error::ValidationError;
use crate::matching::scoring::MatchResult;
use crate::{run_id, Posting, Profile};

const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Upper bound on worker threads; clamped to the posting count.
    pub workers: usize,
    /// Optional time budget. Postings not yet claimed when it expires are
    /// skipped, not failed.
    pub deadline: Option<Instant>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            deadline: None,
        }
    }
}

enum WorkerReport {
    Scored(MatchResult),
    Failed(PostingFailure),
}

impl MatchEngine {
    /// Parallel counterpart of [`MatchEngine::rank`]. Same semantics for
    /// validation and ordering; the final filter/sort runs single-threaded
    /// after all workers have finished.
    pub fn rank_with_budget(
        &self,
        profile: &Profile,
        postings: &[Posting],
        options: &BatchOptions,
    ) -> Result<MatchOutcome, ValidationError> {
        let profile_c = CanonicalProfile::from_profile(profile)?;
        let batch_id = run_id::generate();

        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel::<(usize, WorkerReport)>();
        let workers = options.workers.max(1).min(postings.len().max(1));

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let next = &next;
                let profile_c = &profile_c;
                scope.spawn(move || loop {
                    if options.deadline.is_some_and(|d| Instant::now() >= d) {
                        break;
                    }
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    if index >= postings.len() {
                        break;
                    }

                    let posting = &postings[index];
                    let report = match CanonicalPosting::from_posting(posting) {
                        Ok(posting_c) => {
                            WorkerReport::Scored(self.score_pair(profile_c, &posting_c))
                        }
                        Err(error) => WorkerReport::Failed(PostingFailure {
                            posting_id: posting.id.clone(),
                            error,
                        }),
                    };
                    let _ = tx.send((index, report));
                });
            }
        });
        drop(tx);

        let mut claimed = vec![false; postings.len()];
        let mut results = Vec::with_capacity(postings.len());
        let mut failures = Vec::new();
        for (index, report) in rx {
            claimed[index] = true;
            match report {
                WorkerReport::Scored(result) => results.push(result),
                WorkerReport::Failed(failure) => failures.push(failure),
            }
        }

        let skipped: Vec<String> = postings
            .iter()
            .zip(&claimed)
            .filter(|(_, done)| !**done)
            .map(|(posting, _)| posting.id.clone())
            .collect();

        // Failures arrive in worker completion order; restore input order.
        failures.sort_by_key(|f| postings.iter().position(|p| p.id == f.posting_id));

        let scored = results.len();
        let results = self.finalize(results);
        info!(
            run_id = run_id::get(),
            batch_id = %batch_id,
            total = postings.len(),
            workers,
            scored,
            kept = results.len(),
            failed = failures.len(),
            skipped = skipped.len(),
            "ranked postings in parallel"
        );

        Ok(MatchOutcome {
            results,
            failures,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::growth::AdjacencyPolicy;
    use crate::matching::pipeline::MatchConfig;
    use crate::SkillEntry;
    use std::time::Duration;

    fn profile() -> Profile {
        Profile {
            name: "Ada".into(),
            skills: vec![SkillEntry::new("python"), SkillEntry::new("docker")],
            years_experience: 4.0,
            ..Profile::default()
        }
    }

    fn postings(n: usize) -> Vec<Posting> {
        (0..n)
            .map(|i| Posting {
                id: format!("job-{i}"),
                title: format!("Engineer {i:03}"),
                company: "Acme".into(),
                required_skills: vec!["python".into(), "docker".into()],
                experience_min: Some(2.0),
                ..Posting::default()
            })
            .collect()
    }

    #[test]
    fn parallel_matches_serial_output() {
        let engine = MatchEngine::new(MatchConfig::default()).unwrap();
        let postings = postings(24);
        let serial = engine.rank(&profile(), &postings).unwrap();
        let parallel = engine
            .rank_with_budget(&profile(), &postings, &BatchOptions::default())
            .unwrap();
        assert_eq!(serial.results, parallel.results);
        assert!(parallel.skipped.is_empty());
    }

    #[test]
    fn expired_deadline_skips_unstarted_postings() {
        let engine = MatchEngine::new(MatchConfig::default()).unwrap();
        let postings = postings(8);
        let options = BatchOptions {
            workers: 2,
            deadline: Some(Instant::now() - Duration::from_millis(1)),
        };
        let outcome = engine
            .rank_with_budget(&profile(), &postings, &options)
            .unwrap();
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped.len(), 8);
        assert_eq!(outcome.skipped[0], "job-0");
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn mid_batch_deadline_keeps_finished_results() {
        // Slow adjacency judgments make per-posting timing controllable; the
        // policy runs once per posting because each one has a missing skill.
        struct SlowPolicy;
        impl AdjacencyPolicy for SlowPolicy {
            fn is_learnable(&self, _: &str, _: &CanonicalProfile) -> bool {
                thread::sleep(Duration::from_millis(80));
                true
            }
        }

        let engine =
            MatchEngine::with_policy(MatchConfig::default(), Box::new(SlowPolicy)).unwrap();
        let mut postings = postings(4);
        for posting in &mut postings {
            posting.required_skills.push("kubernetes".into());
        }
        let options = BatchOptions {
            workers: 1,
            deadline: Some(Instant::now() + Duration::from_millis(40)),
        };

        let outcome = engine
            .rank_with_budget(&profile(), &postings, &options)
            .unwrap();

        // The single worker claims job-0 before the deadline, finishes it,
        // then stops; the finished result still comes back.
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].posting_id, "job-0");
        assert_eq!(outcome.skipped, vec!["job-1", "job-2", "job-3"]);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn bad_postings_are_reported_not_fatal() {
        let engine = MatchEngine::new(MatchConfig::default()).unwrap();
        let mut postings = postings(4);
        postings[2].company = "".into();
        let outcome = engine
            .rank_with_budget(&profile(), &postings, &BatchOptions::default())
            .unwrap();
        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].posting_id, "job-2");
    }

    #[test]
    fn single_worker_still_completes() {
        let engine = MatchEngine::new(MatchConfig::default()).unwrap();
        let postings = postings(3);
        let options = BatchOptions {
            workers: 1,
            deadline: None,
        };
        let outcome = engine
            .rank_with_budget(&profile(), &postings, &options)
            .unwrap();
        assert_eq!(outcome.results.len(), 3);
    }

    #[test]
    fn empty_batch_is_an_empty_outcome() {
        let engine = MatchEngine::new(MatchConfig::default()).unwrap();
        let outcome = engine
            .rank_with_budget(&profile(), &[], &BatchOptions::default())
            .unwrap();
        assert_eq!(outcome, MatchOutcome::default());
    }
}
