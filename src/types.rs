use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A caller-supplied item paired with the display label to match against.
///
/// The item is opaque to the engine: an index, a database id, or an owning
/// record reference. Alias handling works by submitting one candidate per
/// alias, each carrying the same backing item. Duplicate labels are scored
/// independently and never deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate<T> {
    /// Opaque backing reference.
    pub item: T,
    /// Display label; must be non-empty.
    pub label: String,
}

impl<T> Candidate<T> {
    pub fn new(item: T, label: impl Into<String>) -> Self {
        Self {
            item,
            label: label.into(),
        }
    }
}

/// A candidate plus the two metrics computed against the normalized query.
///
/// Scores are derived fresh on every search call; nothing is cached between
/// calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate<T> {
    /// Opaque backing reference, carried through from the input candidate.
    pub item: T,
    /// Original (unsanitized) display label.
    pub label: String,
    /// Length of the longest common contiguous substring shared with the
    /// normalized query.
    pub overlap: usize,
    /// Levenshtein distance from the normalized query.
    pub distance: usize,
}

/// Ranked outcome of a single search call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult<T> {
    /// Scored candidates, most-preferred first: `overlap` descending, then
    /// `distance` ascending, input order on full ties.
    pub hits: Vec<ScoredCandidate<T>>,
    /// Whether the top hit is an unambiguous winner under the configured
    /// margins. Vacuously `true` when there is nothing to disambiguate.
    pub conclusive: bool,
}

impl<T> SearchResult<T> {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// The top-ranked hit, if any.
    pub fn best(&self) -> Option<&ScoredCandidate<T>> {
        self.hits.first()
    }

    /// The first `n` ranked hits. Disambiguation flows typically present the
    /// top 5 to a human when the result is inconclusive.
    pub fn top(&self, n: usize) -> &[ScoredCandidate<T>] {
        &self.hits[..self.hits.len().min(n)]
    }
}

/// Margins for the conclusiveness decision, plus scoring knobs.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs; omitted fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Lead in `overlap` the winner must hold over the runner-up, strictly
    /// exceeded, for the result to be conclusive on the overlap axis.
    #[serde(default = "MatchConfig::default_overlap_margin")]
    pub overlap_margin: usize,
    /// Lead in `distance` (runner-up minus winner), strictly exceeded, for
    /// the result to be conclusive on the distance axis.
    #[serde(default = "MatchConfig::default_distance_margin")]
    pub distance_margin: usize,
    /// Score candidates on the rayon pool instead of inline. Ranking is
    /// unaffected: scoring is per-candidate independent and the sort is the
    /// only sync point.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_overlap_margin() -> usize {
        1
    }

    pub(crate) fn default_distance_margin() -> usize {
        3
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            overlap_margin: Self::default_overlap_margin(),
            distance_margin: Self::default_distance_margin(),
            use_parallel: false,
        }
    }
}

/// Errors produced by the matching engine.
///
/// Ambiguity and "nothing matched" are expected outcomes communicated through
/// [`SearchResult`], never through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Malformed request (e.g. a candidate with an empty label). The search
    /// is not attempted; surfaced synchronously to the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
