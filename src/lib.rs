#![warn(missing_docs)]

//! Payload-weighted term similarity.
//!
//! Instead of scoring documents from term frequencies and collection
//! statistics, [`TermPayloadSimilarity`](similarity::TermPayloadSimilarity)
//! reads a 4-byte weight stored as a payload on the first position of each
//! query term in the document, multiplies it by the query boost, and sums the
//! per-term contributions.
//!
//! ```rust
//! use payload_similarity::index::RamSegmentWriter;
//! use payload_similarity::similarity::{SimScorer, Similarity, TermPayloadSimilarity};
//! use payload_similarity::{CollectionStatistics, Term, TermStatistics};
//! # fn main() -> payload_similarity::Result<()> {
//! let mut writer = RamSegmentWriter::default();
//! let doc = writer.add_document();
//! writer.add_weighted_token(doc, "body", "rust", 0, 3.5)?;
//! let segment = writer.finalize(0);
//!
//! let similarity = TermPayloadSimilarity::default();
//! let weight = similarity.compute_weight(
//!     2.0,
//!     &CollectionStatistics::for_field("body"),
//!     &[TermStatistics::for_term(Term::from_text("rust"))],
//! );
//! let mut scorer = similarity.sim_scorer(weight, &segment)?;
//! assert_eq!(scorer.score(doc, 1.0), 7.0);
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;

mod error;

pub mod diagnostics;
pub mod index;
pub mod postings;
pub mod query;
pub mod schema;
pub mod similarity;

pub use crate::error::{OpenReadError, SimilarityError};
pub use crate::index::{Segment, SegmentReader};
pub use crate::query::Explanation;
pub use crate::schema::Term;
pub use crate::similarity::{
    CollectionStatistics, FieldInvertState, SimScorer, SimWeight, Similarity, TermStatistics,
};

/// Tantivy-style result type for this crate.
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// A `u32` identifying a document within a segment.
///
/// Documents have their `DocId` assigned incrementally,
/// as they are added in the segment.
pub type DocId = u32;

/// A f32 that represents the relevance of the document to the query.
pub type Score = f32;

/// A `u32` identifying a segment within an index.
pub type SegmentOrdinal = u32;

/// Sentinel value returned when a postings list is exhausted.
pub const TERMINATED: DocId = i32::MAX as u32;
