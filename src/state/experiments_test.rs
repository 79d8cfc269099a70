use super::*;
use crate::net::types::{Metric, Run};

// =============================================================
// Helpers
// =============================================================

fn make_experiment(id: i64, name: &str) -> Experiment {
    Experiment {
        id,
        name: name.to_owned(),
        version: "0.0.1".to_owned(),
        author: "alice".to_owned(),
        created_at: "2020-10-27".to_owned(),
        tags: vec![],
        runs: vec![Run {
            uuid: format!("run-{id}"),
            metrics: vec![Metric { name: "acc".to_owned(), value: serde_json::json!(0.9) }],
            parameters: vec![],
            measurements: vec![],
        }],
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn state_defaults() {
    let s = ExperimentsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert_eq!(s.page, 1);
    assert_eq!(s.total, 0);
    assert!(s.error.is_none());
    assert_eq!(s.last_issued, 0);
}

// =============================================================
// begin_request
// =============================================================

#[test]
fn begin_request_sets_loading_and_bumps_issue() {
    let mut s = ExperimentsState::default();
    let first = s.begin_request();
    assert!(s.loading);
    assert_eq!(first, 1);
    let second = s.begin_request();
    assert_eq!(second, 2);
    assert_eq!(s.last_issued, 2);
}

#[test]
fn begin_request_keeps_loaded_rows_and_clears_error() {
    let mut s = ExperimentsState::default();
    let issue = s.begin_request();
    s.commit_page(issue, 1, vec![make_experiment(1, "one")], 5);
    s.error = Some("stale banner".to_owned());

    s.begin_request();
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.page, 1);
    assert_eq!(s.total, 5);
    assert!(s.error.is_none());
}

// =============================================================
// commit_page
// =============================================================

#[test]
fn commit_page_applies_items_total_page_atomically() {
    let mut s = ExperimentsState::default();
    let issue = s.begin_request();
    let committed = s.commit_page(issue, 3, vec![make_experiment(1, "one"), make_experiment(2, "two")], 21);
    assert!(committed);
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.total, 21);
    assert_eq!(s.page, 3);
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn commit_page_discards_superseded_response() {
    let mut s = ExperimentsState::default();
    let stale = s.begin_request();
    let fresh = s.begin_request();

    // The newer request resolves first.
    assert!(s.commit_page(fresh, 2, vec![make_experiment(2, "two")], 21));

    // The older response arrives late and must not clobber page 2.
    assert!(!s.commit_page(stale, 1, vec![make_experiment(1, "one")], 21));
    assert_eq!(s.page, 2);
    assert_eq!(s.items[0].id, 2);
}

#[test]
fn commit_page_while_newer_request_in_flight_keeps_loading() {
    let mut s = ExperimentsState::default();
    let stale = s.begin_request();
    s.begin_request();

    assert!(!s.commit_page(stale, 1, vec![make_experiment(1, "one")], 21));
    assert!(s.loading);
}

// =============================================================
// fail_request
// =============================================================

#[test]
fn fail_request_preserves_last_committed_data() {
    let mut s = ExperimentsState::default();
    let issue = s.begin_request();
    s.commit_page(issue, 2, vec![make_experiment(1, "one")], 11);

    let failed = s.begin_request();
    assert!(s.fail_request(failed, "experiments request failed: 500".to_owned()));
    assert!(!s.loading);
    assert_eq!(s.error.as_deref(), Some("experiments request failed: 500"));
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.page, 2);
    assert_eq!(s.total, 11);
}

#[test]
fn fail_request_ignores_superseded_failure() {
    let mut s = ExperimentsState::default();
    let stale = s.begin_request();
    let fresh = s.begin_request();

    assert!(!s.fail_request(stale, "old failure".to_owned()));
    assert!(s.loading);
    assert!(s.error.is_none());

    assert!(s.commit_page(fresh, 2, vec![], 0));
    assert!(s.error.is_none());
}
