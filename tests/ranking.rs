//! End-to-end ranking behavior over realistic profiles and postings.

use jobmatch::matching::{
    BatchOptions, Dimension, MatchConfig, MatchEngine, Weights,
};
use jobmatch::{Posting, Profile, Proficiency, SkillEntry, WorkType};

fn candidate() -> Profile {
    Profile {
        name: "Jordan Meyer".into(),
        email: Some("jordan@example.org".into()),
        location: Some("Berlin".into()),
        skills: vec![
            SkillEntry::with_proficiency("Python", Proficiency::Advanced),
            SkillEntry::with_proficiency("Docker", Proficiency::Intermediate),
            SkillEntry::new("PostgreSQL"),
            SkillEntry::new("FastAPI"),
        ],
        years_experience: 4.5,
        domains: vec!["fintech".into()],
        target_roles: vec!["Backend Engineer".into()],
        target_locations: vec!["Berlin".into()],
        salary_min: Some(70_000),
        work_types: vec![WorkType::Remote, WorkType::Hybrid],
        needs_visa_sponsorship: false,
    }
}

fn backend_posting() -> Posting {
    Posting {
        id: "acme-backend-7".into(),
        title: "Senior Backend Engineer".into(),
        company: "Acme Payments".into(),
        location: "Berlin".into(),
        description: "Build payment rails.".into(),
        salary_min: Some(75_000),
        salary_max: Some(95_000),
        work_type: Some(WorkType::Hybrid),
        experience_min: Some(3.0),
        experience_max: Some(6.0),
        required_skills: vec!["Python".into(), "Docker".into(), "Kubernetes".into()],
        preferred_skills: vec!["Terraform".into()],
        domains: vec!["fintech".into()],
        ..Posting::default()
    }
}

fn embedded_posting() -> Posting {
    Posting {
        id: "gizmo-fw-2".into(),
        title: "Firmware Engineer".into(),
        company: "Gizmo Robotics".into(),
        location: "Munich".into(),
        required_skills: vec!["C++".into(), "RTOS".into(), "CAN bus".into()],
        experience_min: Some(5.0),
        domains: vec!["robotics".into()],
        work_type: Some(WorkType::Onsite),
        ..Posting::default()
    }
}

#[test]
fn close_match_outranks_distant_one() {
    let engine = MatchEngine::new(MatchConfig::default()).unwrap();
    let outcome = engine
        .rank(&candidate(), &[embedded_posting(), backend_posting()])
        .unwrap();

    assert_eq!(outcome.results.len(), 2);
    assert_eq!(outcome.results[0].posting_id, "acme-backend-7");
    assert!(outcome.results[0].overall > outcome.results[1].overall);

    // Gap report surfaces the missing required skill, in posting order.
    assert!(outcome.results[0]
        .gaps
        .contains(&"missing required skill: kubernetes".to_string()));
}

#[test]
fn every_result_carries_all_five_dimensions() {
    let engine = MatchEngine::new(MatchConfig::default()).unwrap();
    let outcome = engine
        .rank(&candidate(), &[embedded_posting(), backend_posting()])
        .unwrap();

    for result in &outcome.results {
        assert!((0.0..=100.0).contains(&result.overall));
        let dims: Vec<Dimension> = result.dimensions.iter().map(|d| d.dimension).collect();
        assert_eq!(dims, Dimension::ALL);
        for dim in &result.dimensions {
            assert!((0.0..=100.0).contains(&dim.value));
        }
    }
}

#[test]
fn min_score_threshold_filters_the_tail() {
    let mut config = MatchConfig::default();
    config.min_score = 70.0;
    let engine = MatchEngine::new(config).unwrap();
    let outcome = engine
        .rank(&candidate(), &[embedded_posting(), backend_posting()])
        .unwrap();

    assert!(outcome.results.iter().all(|r| r.overall >= 70.0));
    assert!(!outcome.results.iter().any(|r| r.posting_id == "gizmo-fw-2"));
    // Filtered postings are absent, not error-marked.
    assert!(outcome.failures.is_empty());
}

#[test]
fn custom_weights_change_the_ranking_emphasis() {
    let mut config = MatchConfig::default();
    config.weights = Weights {
        skills: 80,
        experience: 5,
        domain: 5,
        preferences: 5,
        growth: 5,
    };
    let skill_heavy = MatchEngine::new(config).unwrap();
    let default_engine = MatchEngine::new(MatchConfig::default()).unwrap();

    let postings = [backend_posting()];
    let heavy = skill_heavy.rank(&candidate(), &postings).unwrap();
    let default = default_engine.rank(&candidate(), &postings).unwrap();
    assert_ne!(heavy.results[0].overall, default.results[0].overall);
}

#[test]
fn parallel_batch_agrees_with_serial() {
    let engine = MatchEngine::new(MatchConfig::default()).unwrap();
    let postings = vec![backend_posting(), embedded_posting()];

    let serial = engine.rank(&candidate(), &postings).unwrap();
    let parallel = engine
        .rank_with_budget(&candidate(), &postings, &BatchOptions::default())
        .unwrap();
    assert_eq!(serial.results, parallel.results);
}

#[test]
fn results_serialize_for_downstream_consumers() {
    let engine = MatchEngine::new(MatchConfig::default()).unwrap();
    let outcome = engine.rank(&candidate(), &[backend_posting()]).unwrap();

    let json = serde_json::to_value(&outcome.results[0]).unwrap();
    assert_eq!(json["posting_id"], "acme-backend-7");
    assert_eq!(json["dimensions"][0]["dimension"], "skills");
    assert!(json["overall"].is_f64());
}

#[test]
fn repeated_runs_are_bit_identical() {
    let engine = MatchEngine::new(MatchConfig::default()).unwrap();
    let postings = vec![backend_posting(), embedded_posting()];
    let first = engine.rank(&candidate(), &postings).unwrap();
    let second = engine.rank(&candidate(), &postings).unwrap();
    assert_eq!(first, second);
}
