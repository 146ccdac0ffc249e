use std::ops::{Deref, DerefMut};

use downcast_rs::impl_downcast;

use crate::query::Explanation;
use crate::{DocId, Score};

/// Computes the score of the documents of a specific segment.
///
/// A scorer is bound to one segment reader for its whole lifetime, and is
/// used sequentially: `score` and `explain` take `&mut self`, so calls on one
/// scorer cannot overlap. Scorers of different segments share no state and
/// can run on different threads.
pub trait SimScorer: downcast_rs::Downcast + Send + 'static {
    /// Returns the score of `doc`.
    ///
    /// `freq` is the term frequency computed by the query. Implementations
    /// are free to ignore it.
    fn score(&mut self, doc: DocId, freq: Score) -> Score;

    /// Explains the score of `doc`.
    ///
    /// The explanation only describes this call.
    fn explain(&mut self, doc: DocId, freq: Score) -> Explanation;

    /// Computes the amount of a sloppy phrase match, based on an edit distance.
    fn compute_slop_factor(&self, distance: u32) -> Score;

    /// Computes a scoring factor for a phrase match from the payload found
    /// at the matched positions.
    fn compute_payload_factor(&self, doc: DocId, start: u32, end: u32, payload: &[u8]) -> Score;
}

impl_downcast!(SimScorer);

impl SimScorer for Box<dyn SimScorer> {
    fn score(&mut self, doc: DocId, freq: Score) -> Score {
        self.deref_mut().score(doc, freq)
    }

    fn explain(&mut self, doc: DocId, freq: Score) -> Explanation {
        self.deref_mut().explain(doc, freq)
    }

    fn compute_slop_factor(&self, distance: u32) -> Score {
        self.deref().compute_slop_factor(distance)
    }

    fn compute_payload_factor(&self, doc: DocId, start: u32, end: u32, payload: &[u8]) -> Score {
        self.deref().compute_payload_factor(doc, start, end, payload)
    }
}
