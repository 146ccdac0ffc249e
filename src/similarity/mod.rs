//! Similarities define how the documents matching a query are scored.
//!
//! At query time, a [`Similarity`] is used in three steps:
//! - [`Similarity::compute_weight`] is called once per query, with the
//!   statistics of the field and of the query terms, and returns an
//!   immutable [`SimWeight`].
//! - For each segment, [`Similarity::sim_scorer`] binds the weight to the
//!   segment and returns a [`SimScorer`].
//! - The scorer is called for every candidate document of the segment.
//!
//! At indexing time, [`Similarity::compute_norm`] computes the norm stored
//! for each (document, field) pair.

mod provider;
mod stats;
mod term_payload;

use std::sync::Arc;

pub use self::provider::{
    similarity_provider, Settings, SimilarityProvider, TermPayloadSimilarityProvider,
    TERM_PAYLOAD_SIMILARITY,
};
pub use self::stats::{CollectionStatistics, FieldInvertState, TermStatistics};
pub use self::term_payload::{
    TermContribution, TermPayloadScorer, TermPayloadSimilarity, TermPayloadWeight,
    DEFAULT_TERM_WEIGHT,
};
pub use crate::query::{SimScorer, SimWeight};
use crate::index::Segment;
use crate::Score;

/// A scoring policy.
pub trait Similarity: Send + Sync + 'static {
    /// Computes the norm of a field of a document, at indexing time.
    fn compute_norm(&self, state: &FieldInvertState) -> u64;

    /// Computes the per-query weight, once per query.
    fn compute_weight(
        &self,
        boost: Score,
        collection_stats: &CollectionStatistics,
        term_stats: &[TermStatistics],
    ) -> Arc<dyn SimWeight>;

    /// Creates the scorer of a segment.
    ///
    /// Opening the segment happens here: if it fails, the error is returned
    /// and the segment cannot be scored. `weight` must have been computed by
    /// the same kind of similarity.
    fn sim_scorer(
        &self,
        weight: Arc<dyn SimWeight>,
        segment: &dyn Segment,
    ) -> crate::Result<Box<dyn SimScorer>>;
}
