//! # labelmatch
//!
//! ## Purpose
//!
//! `labelmatch` resolves a free-text query (a name, possibly misspelled or
//! abbreviated) against a catalog of candidate labels. It normalizes every
//! string the same way, scores each candidate with two dynamic-programming
//! metrics, ranks the field deterministically, and classifies the ranking as
//! conclusive or inconclusive so the caller knows whether to act on the top
//! hit or hand the decision to a human.
//!
//! The engine knows nothing about what the labels name. Callers submit
//! `(item, label)` pairs (aliases are extra candidates carrying the same
//! item) and get back the full ranked field plus a verdict. Presenting the
//! top hit, or the top 5 for interactive disambiguation, is the caller's job.
//!
//! ## Core Types
//!
//! - [`Candidate`]: opaque caller item plus display label.
//! - [`ScoredCandidate`]: candidate plus `overlap` (longest common contiguous
//!   substring with the normalized query) and `distance` (Levenshtein).
//! - [`SearchResult`]: ranked hits plus the `conclusive` flag.
//! - [`MatchConfig`]: the overlap and distance margins for the verdict.
//! - [`MatchEngine`]: stateless engine; safe to share across threads.
//!
//! ## Ranking and verdict
//!
//! Hits sort by `overlap` descending, then `distance` ascending; the sort is
//! stable so equal-scoring aliases keep their input order. With two or more
//! hits the result is conclusive only when the winner leads the runner-up
//! strictly beyond a margin on either axis: `best.overlap - second.overlap >
//! overlap_margin` or `second.distance - best.distance > distance_margin`.
//! Fewer than two hits are conclusive trivially. Ambiguity is an ordinary
//! outcome, not an error.
//!
//! ## Example Usage
//!
//! ```
//! use labelmatch::{Candidate, MatchConfig, MatchEngine};
//!
//! let engine = MatchEngine::new(MatchConfig::default());
//! let candidates = vec![
//!     Candidate::new(1, "Minecraft"),
//!     Candidate::new(2, "Terraria"),
//! ];
//!
//! let result = engine.search(candidates, "minecraft").expect("search");
//! assert!(result.conclusive);
//! assert_eq!(result.best().map(|hit| hit.item), Some(1));
//! ```
//!
//! ## Observability
//!
//! The engine emits `tracing` events around every search and never installs
//! a subscriber itself. Install a [`SearchMetrics`] implementation via
//! [`set_search_metrics`] to record per-search latency, candidate counts,
//! and verdicts; this is typically done once during service startup.

pub mod engine;
pub mod metrics;
pub mod sanitize;
pub mod score;
pub mod types;

pub use crate::engine::{search, MatchEngine};
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::sanitize::sanitize;
pub use crate::score::{distance, overlap};
pub use crate::types::{Candidate, MatchConfig, MatchError, ScoredCandidate, SearchResult};
