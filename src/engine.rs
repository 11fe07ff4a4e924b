use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn, Level};

use crate::metrics::metrics_recorder;
use crate::sanitize::sanitize;
use crate::score::{distance, overlap};
use crate::types::{Candidate, MatchConfig, MatchError, ScoredCandidate, SearchResult};

#[cfg(test)]
mod tests;

/// Stateless approximate-matching engine.
///
/// Holds only the configured margins; every search is a pure function of the
/// candidates, the query, and that configuration. There is no interior
/// mutability and no I/O, so one engine can be shared across any number of
/// threads without coordination.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Construct an engine with explicit margins.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The margins this engine decides conclusiveness with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank `candidates` against `query` and classify the outcome.
    ///
    /// Every label and the query are sanitized identically and
    /// independently, then each candidate is scored on its own: `overlap`
    /// (longest common contiguous substring with the normalized query) and
    /// `distance` (Levenshtein). The ranking sorts by `overlap` descending,
    /// then `distance` ascending; the sort is stable so duplicate-labeled
    /// aliases keep their input order.
    ///
    /// An empty candidate list returns an empty result with `conclusive =
    /// true` (there is nothing to disambiguate). A query that sanitizes to
    /// the empty string is valid: every candidate scores `overlap = 0` and
    /// `distance = ` its normalized label length.
    ///
    /// The only error is [`MatchError::InvalidInput`], raised when a
    /// candidate carries an empty label. "Nothing matched" and "ambiguous"
    /// are ordinary results, not errors.
    pub fn search<T: Send>(
        &self,
        candidates: Vec<Candidate<T>>,
        query: &str,
    ) -> Result<SearchResult<T>, MatchError> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::DEBUG,
            "labelmatch.search",
            candidate_count = candidates.len()
        );
        let _guard = span.enter();

        for (idx, candidate) in candidates.iter().enumerate() {
            if candidate.label.is_empty() {
                let err =
                    MatchError::InvalidInput(format!("candidate {idx} carries an empty label"));
                warn!(error = %err, "search_rejected");
                return Err(err);
            }
        }

        let normalized_query = sanitize(query);

        let mut hits: Vec<ScoredCandidate<T>> = if self.config.use_parallel {
            candidates
                .into_par_iter()
                .map(|candidate| score_candidate(&normalized_query, candidate))
                .collect()
        } else {
            candidates
                .into_iter()
                .map(|candidate| score_candidate(&normalized_query, candidate))
                .collect()
        };

        // Stable sort: full ties keep input order, so aliases of the same
        // entity are never reordered relative to each other.
        hits.sort_by(|a, b| b.overlap.cmp(&a.overlap).then(a.distance.cmp(&b.distance)));

        let conclusive = self.is_conclusive(&hits);

        debug!(
            hit_count = hits.len(),
            conclusive,
            elapsed_micros = start.elapsed().as_micros() as u64,
            "search_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_search(start.elapsed(), hits.len(), conclusive);
        }

        Ok(SearchResult { hits, conclusive })
    }

    /// The winner must lead the runner-up strictly beyond a margin on either
    /// axis; an exact margin tie stays ambiguous.
    fn is_conclusive<T>(&self, hits: &[ScoredCandidate<T>]) -> bool {
        match hits {
            [] | [_] => true,
            [best, second, ..] => {
                best.overlap > second.overlap + self.config.overlap_margin
                    || second.distance > best.distance + self.config.distance_margin
            }
        }
    }
}

fn score_candidate<T>(normalized_query: &str, candidate: Candidate<T>) -> ScoredCandidate<T> {
    let normalized = sanitize(&candidate.label);
    ScoredCandidate {
        overlap: overlap(normalized_query, &normalized),
        distance: distance(normalized_query, &normalized),
        item: candidate.item,
        label: candidate.label,
    }
}

/// Search with [`MatchConfig::default`] margins.
pub fn search<T: Send>(
    candidates: Vec<Candidate<T>>,
    query: &str,
) -> Result<SearchResult<T>, MatchError> {
    MatchEngine::default().search(candidates, query)
}
