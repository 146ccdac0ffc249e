use downcast_rs::impl_downcast;

use super::SimScorer;
use crate::{DocId, Score};

/// Scores every document of `docs` and hands the `(doc, score)` pairs to
/// `callback`.
///
/// `freq` is passed through unchanged for every document.
pub fn for_each_scored<TScorer: SimScorer + ?Sized>(
    scorer: &mut TScorer,
    docs: impl IntoIterator<Item = DocId>,
    freq: Score,
    callback: &mut dyn FnMut(DocId, Score),
) {
    for doc in docs {
        let score = scorer.score(doc, freq);
        callback(doc, score);
    }
}

/// A `SimWeight` holds what a similarity computed once per query,
/// ahead of scoring any segment.
///
/// It is immutable, and shared by the scorers of all of the segments.
/// See [`Similarity`](crate::similarity::Similarity).
pub trait SimWeight: downcast_rs::DowncastSync {
    /// Returns the query boost.
    fn boost(&self) -> Score;

    /// Returns the name of the field being scored.
    fn field(&self) -> &str;
}

impl_downcast!(sync SimWeight);
