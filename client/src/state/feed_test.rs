use super::*;
use std::cell::RefCell;
use std::time::Duration;

fn fact(id: i64, category: &str) -> Fact {
    Fact {
        id,
        text: format!("fact {id}"),
        source: "https://example.com".to_owned(),
        category: category.to_owned(),
        vote_interesting: 0,
        vote_mindblowing: 0,
        vote_false: 0,
        created_at: None,
    }
}

fn fixture() -> Vec<Fact> {
    vec![fact(1, "Science"), fact(2, "History"), fact(3, "Science"), fact(4, "Technology")]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn feed_state_defaults() {
    let state = FeedState::default();
    assert_eq!(state.current_category, CategoryFilter::All);
    assert!(state.facts.is_empty());
    assert!(!state.is_loading);
    assert!(!state.show_form);
}

#[test]
fn select_category_reports_change() {
    let mut state = FeedState::default();
    assert!(!state.select_category(CategoryFilter::All));
    assert!(state.select_category(CategoryFilter::Named("Science".to_owned())));
    assert!(!state.select_category(CategoryFilter::Named("Science".to_owned())));
}

#[test]
fn toggle_form_flips_visibility() {
    let mut state = FeedState::default();
    state.toggle_form();
    assert!(state.show_form);
    state.toggle_form();
    assert!(!state.show_form);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn fetch_success_replaces_snapshot_and_clears_loading() {
    let mut state = FeedState { facts: vec![fact(9, "News")], ..FeedState::default() };
    let ticket = state.begin_fetch();
    assert!(state.is_loading);

    let outcome = state.finish_fetch::<()>(ticket, Ok(fixture()));
    assert_eq!(outcome, FetchOutcome::Applied);
    assert!(!state.is_loading);
    assert_eq!(state.facts, fixture());
}

#[test]
fn fetch_failure_keeps_snapshot_and_clears_loading() {
    let mut state = FeedState { facts: fixture(), ..FeedState::default() };
    let ticket = state.begin_fetch();

    let outcome = state.finish_fetch(ticket, Err("boom"));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(!state.is_loading);
    assert_eq!(state.facts, fixture());
}

#[test]
fn older_response_arriving_last_is_dropped() {
    let mut state = FeedState::default();
    let all = state.begin_fetch();
    state.select_category(CategoryFilter::Named("Science".to_owned()));
    let science = state.begin_fetch();

    let science_rows: Vec<Fact> = fixture().into_iter().filter(|f| f.category == "Science").collect();
    assert_eq!(state.finish_fetch::<()>(science, Ok(science_rows.clone())), FetchOutcome::Applied);
    assert_eq!(state.finish_fetch::<()>(all, Ok(fixture())), FetchOutcome::Stale);

    assert_eq!(state.facts, science_rows);
    assert!(!state.is_loading);
}

#[test]
fn stale_response_does_not_clear_loading() {
    let mut state = FeedState::default();
    let first = state.begin_fetch();
    let _second = state.begin_fetch();

    assert_eq!(state.finish_fetch::<()>(first, Ok(fixture())), FetchOutcome::Stale);
    assert!(state.is_loading);
    assert!(state.facts.is_empty());
}

#[test]
fn stale_failure_is_not_reported_as_failure() {
    let mut state = FeedState::default();
    let first = state.begin_fetch();
    let _second = state.begin_fetch();
    assert_eq!(state.finish_fetch(first, Err("timeout")), FetchOutcome::Stale);
}

/// Simulated backend call that resolves after `delay_ms`.
async fn delayed_select(filter: CategoryFilter, delay_ms: u64) -> Result<Vec<Fact>, ()> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    Ok(fixture().into_iter().filter(|f| filter.matches(f)).collect())
}

/// Fetch "all", then switch to "Science" before the first response lands,
/// and apply both responses in the order they resolve.
async fn race(all_delay_ms: u64, science_delay_ms: u64) -> (FeedState, Vec<FetchOutcome>) {
    let mut state = FeedState::default();
    let all_ticket = state.begin_fetch();
    state.select_category(CategoryFilter::Named("Science".to_owned()));
    let science_ticket = state.begin_fetch();

    let arrivals = RefCell::new(Vec::new());
    tokio::join!(
        async {
            let rows = delayed_select(CategoryFilter::All, all_delay_ms).await;
            arrivals.borrow_mut().push((all_ticket, rows));
        },
        async {
            let rows = delayed_select(CategoryFilter::Named("Science".to_owned()), science_delay_ms).await;
            arrivals.borrow_mut().push((science_ticket, rows));
        },
    );

    let outcomes = arrivals
        .into_inner()
        .into_iter()
        .map(|(ticket, rows)| state.finish_fetch(ticket, rows))
        .collect();
    (state, outcomes)
}

#[tokio::test]
async fn latest_request_wins_when_older_response_arrives_last() {
    let (state, outcomes) = race(120, 10).await;
    assert_eq!(outcomes, vec![FetchOutcome::Applied, FetchOutcome::Stale]);
    assert_eq!(state.facts.len(), 2);
    assert!(state.facts.iter().all(|f| f.category == "Science"));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn latest_request_wins_when_it_arrives_last() {
    let (state, outcomes) = race(10, 120).await;
    assert_eq!(outcomes, vec![FetchOutcome::Stale, FetchOutcome::Applied]);
    assert!(state.facts.iter().all(|f| f.category == "Science"));
    assert!(!state.is_loading);
}

// =============================================================
// Local patches
// =============================================================

#[test]
fn prepend_puts_new_fact_first() {
    let mut state = FeedState { facts: fixture(), ..FeedState::default() };
    state.prepend(fact(10, "News"));
    assert_eq!(state.facts[0].id, 10);
    assert_eq!(state.facts.len(), 5);
}

#[test]
fn apply_created_prepends_and_closes_form() {
    let mut state = FeedState { facts: fixture(), show_form: true, ..FeedState::default() };
    state.apply_created(fact(10, "News"));
    assert_eq!(state.facts.first().map(|f| f.id), Some(10));
    assert_eq!(state.facts.len(), fixture().len() + 1);
    assert!(!state.show_form);
}

#[test]
fn only_failed_latest_fetch_alerts() {
    let mut state = FeedState::default();
    let stale = state.begin_fetch();
    let latest = state.begin_fetch();

    let stale_outcome = state.finish_fetch(stale, Err::<Vec<Fact>, _>("timeout"));
    assert!(!stale_outcome.alerts_user());

    let latest_outcome = state.finish_fetch(latest, Err::<Vec<Fact>, _>("timeout"));
    assert_eq!(latest_outcome, FetchOutcome::Failed);
    assert!(latest_outcome.alerts_user());

    assert!(!FetchOutcome::Applied.alerts_user());
}

#[test]
fn replace_swaps_matching_fact_only() {
    let mut state = FeedState { facts: fixture(), ..FeedState::default() };
    let mut voted = fact(3, "Science");
    voted.vote_interesting = 5;

    assert!(state.replace(voted));
    assert_eq!(state.facts[2].vote_interesting, 5);
    assert!(state.facts.iter().filter(|f| f.id != 3).all(|f| f.vote_interesting == 0));
}

#[test]
fn replace_missing_fact_is_noop() {
    let mut state = FeedState { facts: fixture(), ..FeedState::default() };
    assert!(!state.replace(fact(77, "News")));
    assert_eq!(state.facts, fixture());
}
