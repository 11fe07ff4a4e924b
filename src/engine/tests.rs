use super::*;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::metrics::{set_search_metrics, SearchMetrics};

fn engine() -> MatchEngine {
    MatchEngine::new(MatchConfig::default())
}

fn labels(result: &SearchResult<u32>) -> Vec<&str> {
    result.hits.iter().map(|hit| hit.label.as_str()).collect()
}

#[test]
fn empty_candidate_list_is_vacuously_conclusive() {
    let result = engine()
        .search(Vec::<Candidate<u32>>::new(), "anything")
        .expect("empty candidate list is valid");
    assert!(result.is_empty());
    assert!(result.conclusive);
}

#[test]
fn single_candidate_is_conclusive() {
    let result = engine()
        .search(vec![Candidate::new(7u32, "Factorio")], "factory")
        .expect("search");
    assert_eq!(result.len(), 1);
    assert!(result.conclusive);
    assert_eq!(result.best().map(|hit| hit.item), Some(7));
}

#[test]
fn exact_match_dominates_on_overlap() {
    let candidates = vec![
        Candidate::new(1u32, "Minecraft"),
        Candidate::new(2u32, "Terraria"),
    ];
    let result = engine().search(candidates, "minecraft").expect("search");

    assert!(result.conclusive);
    assert_eq!(labels(&result), vec!["Minecraft", "Terraria"]);

    let best = &result.hits[0];
    assert_eq!(best.overlap, 9);
    assert_eq!(best.distance, 0);
    // "Terraria" shares at most a two-character run with "minecraft", so the
    // overlap lead far exceeds the default margin of 1.
    assert!(result.hits[1].overlap <= 2);
    assert!(result.hits[1].distance >= 6);
}

#[test]
fn shared_prefix_stays_inconclusive_under_default_margins() {
    let candidates = vec![
        Candidate::new(1u32, "Counter-Strike"),
        Candidate::new(2u32, "Counter-Strike 2"),
    ];
    let result = engine()
        .search(candidates, "counter strike")
        .expect("search");

    // Sanitization strips the hyphens: the query shares the 7-character run
    // "counter" with both labels and sits 1 resp. 3 edits away. Neither the
    // overlap gap (0) nor the distance gap (2) strictly exceeds its margin.
    assert_eq!(labels(&result), vec!["Counter-Strike", "Counter-Strike 2"]);
    assert_eq!(result.hits[0].overlap, 7);
    assert_eq!(result.hits[0].distance, 1);
    assert_eq!(result.hits[1].overlap, 7);
    assert_eq!(result.hits[1].distance, 3);
    assert!(!result.conclusive);
}

#[test]
fn distance_margin_comparison_is_strict() {
    let candidates = || {
        vec![
            Candidate::new(1u32, "Counter-Strike"),
            Candidate::new(2u32, "Counter-Strike 2"),
        ]
    };

    // Distance gap between the two hits is exactly 2. A margin of 2 is not
    // strictly exceeded; a margin of 1 is.
    let at_margin = MatchEngine::new(MatchConfig {
        distance_margin: 2,
        ..MatchConfig::default()
    });
    let result = at_margin
        .search(candidates(), "counter strike")
        .expect("search");
    assert!(!result.conclusive);

    let below_margin = MatchEngine::new(MatchConfig {
        distance_margin: 1,
        ..MatchConfig::default()
    });
    let result = below_margin
        .search(candidates(), "counter strike")
        .expect("search");
    assert!(result.conclusive);
}

#[test]
fn alias_duplicates_keep_input_order() {
    // Two aliases of the same entity whose labels sanitize identically must
    // not be reordered relative to each other.
    let candidates = vec![
        Candidate::new(1u32, "Dota 2"),
        Candidate::new(1u32, "DOTA 2!"),
    ];
    let result = engine().search(candidates, "dota").expect("search");

    assert_eq!(labels(&result), vec!["Dota 2", "DOTA 2!"]);
    assert_eq!(result.hits[0].overlap, result.hits[1].overlap);
    assert_eq!(result.hits[0].distance, result.hits[1].distance);
    assert!(!result.conclusive);
}

#[test]
fn empty_label_is_rejected() {
    let candidates = vec![
        Candidate::new(1u32, "Rimworld"),
        Candidate::new(2u32, ""),
    ];
    let err = engine()
        .search(candidates, "rimworld")
        .expect_err("empty label violates the candidate contract");
    assert!(matches!(err, MatchError::InvalidInput(_)));
    assert!(err.to_string().contains("candidate 1"));
}

#[test]
fn query_that_sanitizes_to_empty_is_defined() {
    let result = engine()
        .search(vec![Candidate::new(1u32, "Minecraft")], "!?!")
        .expect("empty normalized query is a valid input");
    assert_eq!(result.hits[0].overlap, 0);
    assert_eq!(result.hits[0].distance, 9);
    assert!(result.conclusive);
}

#[test]
fn label_that_sanitizes_to_empty_is_defined() {
    // The raw label is non-empty, so the input contract holds; the empty
    // normalized form scores through the defined base cases.
    let result = engine()
        .search(vec![Candidate::new(1u32, "!!!")], "minecraft")
        .expect("search");
    assert_eq!(result.hits[0].overlap, 0);
    assert_eq!(result.hits[0].distance, 9);
}

#[test]
fn parallel_scoring_matches_serial() {
    let names = [
        "Minecraft",
        "Terraria",
        "Counter-Strike",
        "Counter-Strike 2",
        "Dota 2",
        "Factorio",
        "Stellaris",
        "Rimworld",
    ];
    let candidates: Vec<Candidate<u32>> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| Candidate::new(idx as u32, *name))
        .collect();

    let serial = engine()
        .search(candidates.clone(), "stellaris")
        .expect("serial search");
    let parallel = MatchEngine::new(MatchConfig {
        use_parallel: true,
        ..MatchConfig::default()
    })
    .search(candidates, "stellaris")
    .expect("parallel search");

    assert_eq!(serial, parallel);
}

struct RecordingMetrics {
    events: Arc<RwLock<Vec<(usize, bool)>>>,
}

impl RecordingMetrics {
    fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn snapshot(&self) -> Vec<(usize, bool)> {
        self.events.read().unwrap().clone()
    }
}

impl SearchMetrics for RecordingMetrics {
    fn record_search(&self, _latency: Duration, candidate_count: usize, conclusive: bool) {
        self.events
            .write()
            .unwrap()
            .push((candidate_count, conclusive));
    }
}

#[test]
fn metrics_recorder_observes_searches() {
    let metrics = Arc::new(RecordingMetrics::new());
    set_search_metrics(Some(metrics.clone()));

    let candidates = vec![
        Candidate::new(1u32, "Minecraft"),
        Candidate::new(2u32, "Terraria"),
    ];
    let result = engine().search(candidates, "minecraft").expect("search");
    assert!(result.conclusive);

    let events = metrics.snapshot();
    // Other tests may run concurrently; assert on a lower bound rather than
    // an exact event stream.
    assert!(events.iter().any(|&(count, conclusive)| count == 2 && conclusive));

    set_search_metrics(None);
}
