use std::fmt;
use std::sync::Arc;

use super::{CollectionStatistics, FieldInvertState, Similarity, TermStatistics};
use crate::diagnostics::{Diagnostics, FallbackReason, LogDiagnostics, PayloadFallback};
use crate::index::{Segment, SegmentReader};
use crate::postings::decode_weight;
use crate::query::{Explanation, ScoreCombiner, SimScorer, SimWeight, SumCombiner};
use crate::schema::Term;
use crate::{DocId, OpenReadError, Score, SegmentOrdinal, SimilarityError};

/// Weight of a term whose payload cannot be read.
pub const DEFAULT_TERM_WEIGHT: Score = 1.0;

/// Scores documents from weights stored in the index as payloads.
///
/// The score of a document is
/// `sum(boost * weight(term))` over the query terms, in which
/// `weight(term)` is the payload attached to the first position of the term
/// in the document's term vector, decoded as a big endian `f32`.
///
/// Term frequencies, document lengths and collection statistics play no part
/// in the score. A term without a readable payload weighs
/// [`DEFAULT_TERM_WEIGHT`]: the lookup never fails the query, it reports the
/// fallback to the [`Diagnostics`] of the similarity instead.
#[derive(Clone)]
pub struct TermPayloadSimilarity {
    diagnostics: Arc<dyn Diagnostics>,
}

impl Default for TermPayloadSimilarity {
    fn default() -> Self {
        TermPayloadSimilarity::with_diagnostics(Arc::new(LogDiagnostics))
    }
}

impl fmt::Debug for TermPayloadSimilarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TermPayloadSimilarity")
    }
}

impl TermPayloadSimilarity {
    /// Creates a similarity reporting lookup fallbacks to `diagnostics`.
    pub fn with_diagnostics(diagnostics: Arc<dyn Diagnostics>) -> TermPayloadSimilarity {
        TermPayloadSimilarity { diagnostics }
    }

    /// Returns the specialized weight.
    ///
    /// While `.compute_weight(...)` returns a shared trait object,
    /// this method returns the specific implementation.
    pub fn weight(
        &self,
        boost: Score,
        collection_stats: &CollectionStatistics,
        term_stats: &[TermStatistics],
    ) -> TermPayloadWeight {
        TermPayloadWeight::new(boost, collection_stats, term_stats)
    }

    /// Returns the specialized scorer, aggregating term contributions with
    /// `combiner`.
    pub fn scorer<TScoreCombiner: ScoreCombiner>(
        &self,
        weight: Arc<TermPayloadWeight>,
        segment: &dyn Segment,
        combiner: TScoreCombiner,
    ) -> crate::Result<TermPayloadScorer<TScoreCombiner>> {
        TermPayloadScorer::open(weight, segment, combiner, self.diagnostics.clone())
    }
}

impl Similarity for TermPayloadSimilarity {
    fn compute_norm(&self, _state: &FieldInvertState) -> u64 {
        1
    }

    fn compute_weight(
        &self,
        boost: Score,
        collection_stats: &CollectionStatistics,
        term_stats: &[TermStatistics],
    ) -> Arc<dyn SimWeight> {
        Arc::new(self.weight(boost, collection_stats, term_stats))
    }

    fn sim_scorer(
        &self,
        weight: Arc<dyn SimWeight>,
        segment: &dyn Segment,
    ) -> crate::Result<Box<dyn SimScorer>> {
        let weight = weight.downcast_arc::<TermPayloadWeight>().map_err(|_| {
            SimilarityError::InvalidArgument(
                "weight was not computed by TermPayloadSimilarity".to_string(),
            )
        })?;
        let scorer = self.scorer(weight, segment, SumCombiner::default())?;
        Ok(Box::new(scorer))
    }
}

/// Per-query scoring context of [`TermPayloadSimilarity`].
#[derive(Clone, Debug)]
pub struct TermPayloadWeight {
    boost: Score,
    field: String,
    term_stats: Vec<TermStatistics>,
}

impl TermPayloadWeight {
    /// Creates the weight. Terms are scored in the order of `term_stats`,
    /// duplicates included.
    pub fn new(
        boost: Score,
        collection_stats: &CollectionStatistics,
        term_stats: &[TermStatistics],
    ) -> TermPayloadWeight {
        TermPayloadWeight {
            boost,
            field: collection_stats.field().to_string(),
            term_stats: term_stats.to_vec(),
        }
    }

    /// Returns the statistics of the query terms.
    pub fn term_stats(&self) -> &[TermStatistics] {
        &self.term_stats
    }
}

impl SimWeight for TermPayloadWeight {
    fn boost(&self) -> Score {
        self.boost
    }

    fn field(&self) -> &str {
        &self.field
    }
}

/// The contribution of one query term to the score of a document.
#[derive(Clone, Debug)]
pub struct TermContribution {
    term: Term,
    boost: Score,
    weight: Score,
    contribution: Score,
    fallback: Option<FallbackReason>,
}

impl TermContribution {
    /// Returns the term.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Returns the query boost.
    pub fn boost(&self) -> Score {
        self.boost
    }

    /// Returns the term weight, either decoded from the payload or the default.
    pub fn weight(&self) -> Score {
        self.weight
    }

    /// Returns `boost * weight`.
    pub fn contribution(&self) -> Score {
        self.contribution
    }

    /// Returns why the default weight was used, if it was.
    pub fn fallback(&self) -> Option<&FallbackReason> {
        self.fallback.as_ref()
    }

    /// Describes the formula of the contribution, e.g. `2*3.5`.
    pub fn func(&self) -> String {
        format!("{}*{}", self.boost, self.weight)
    }

    /// Renders the contribution as an explanation node.
    pub fn to_explanation(&self) -> Explanation {
        let mut explanation = Explanation::new(
            format!(
                "score(term={}, boost={}, termScore={}, termWeight={}, func={})",
                self.term,
                self.boost,
                self.contribution,
                self.weight,
                self.func()
            ),
            self.contribution,
        );
        if let Some(reason) = &self.fallback {
            explanation.add_context(format!("default term weight: {reason}"));
        }
        explanation
    }
}

/// Scorer of [`TermPayloadSimilarity`] for one segment.
///
/// The scorer owns the reader of its segment. The reader is released when
/// the scorer is dropped.
pub struct TermPayloadScorer<TScoreCombiner: ScoreCombiner = SumCombiner> {
    weight: Arc<TermPayloadWeight>,
    reader: Box<dyn SegmentReader>,
    combiner: TScoreCombiner,
    diagnostics: Arc<dyn Diagnostics>,
}

impl<TScoreCombiner: ScoreCombiner> TermPayloadScorer<TScoreCombiner> {
    fn open(
        weight: Arc<TermPayloadWeight>,
        segment: &dyn Segment,
        combiner: TScoreCombiner,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> crate::Result<TermPayloadScorer<TScoreCombiner>> {
        let segment_ordinal = segment.segment_ordinal();
        let reader = segment
            .open_reader()
            .map_err(|io_error| OpenReadError::wrap_io_error(io_error, segment_ordinal))?;
        Ok(TermPayloadScorer {
            weight,
            reader,
            combiner,
            diagnostics,
        })
    }

    /// Returns the weight the scorer was built from.
    pub fn weight(&self) -> &TermPayloadWeight {
        &self.weight
    }

    /// Returns the ordinal of the segment being scored.
    pub fn segment_ordinal(&self) -> SegmentOrdinal {
        self.reader.segment_ordinal()
    }

    /// Scores `doc` and returns the contribution of each query term,
    /// in the order of the query terms.
    ///
    /// The contributions only describe this call.
    pub fn contributions(&self, doc: DocId) -> (Score, Vec<TermContribution>) {
        let mut contributions = Vec::with_capacity(self.weight.term_stats.len());
        let score = self.score_terms(doc, |term, weight, contribution, fallback| {
            contributions.push(TermContribution {
                term: term.clone(),
                boost: self.weight.boost,
                weight,
                contribution,
                fallback,
            });
        });
        (score, contributions)
    }

    fn score_terms(
        &self,
        doc: DocId,
        mut on_term: impl FnMut(&Term, Score, Score, Option<FallbackReason>),
    ) -> Score {
        let mut combiner = self.combiner;
        combiner.clear();
        for term_stats in &self.weight.term_stats {
            let term = term_stats.term();
            let (term_weight, fallback) = match self.term_payload_weight(doc, term) {
                Ok(term_weight) => (term_weight, None),
                Err(reason) => {
                    self.report_fallback(doc, term, &reason);
                    (DEFAULT_TERM_WEIGHT, Some(reason))
                }
            };
            let contribution = self.weight.boost * term_weight;
            combiner.update(contribution);
            on_term(term, term_weight, contribution, fallback);
        }
        combiner.score()
    }

    /// Reads the weight of `term` in `doc` from the payload of its first position.
    fn term_payload_weight(&self, doc: DocId, term: &Term) -> Result<Score, FallbackReason> {
        let mut terms_enum = self
            .reader
            .term_vector(doc, &self.weight.field)?
            .ok_or(FallbackReason::NoTermVector)?;
        if !terms_enum.seek_exact(term.as_slice())? {
            return Err(FallbackReason::TermNotFound);
        }
        let mut postings = terms_enum.postings()?;
        if postings.seek(doc)? != doc {
            return Err(FallbackReason::NoPostings);
        }
        if postings.next_position()?.is_none() {
            return Err(FallbackReason::NoPosition);
        }
        let payload = postings.payload().ok_or(FallbackReason::PayloadMissing)?;
        Ok(decode_weight(payload)?)
    }

    fn report_fallback(&self, doc: DocId, term: &Term, reason: &FallbackReason) {
        self.diagnostics.payload_fallback(&PayloadFallback {
            segment_ordinal: self.reader.segment_ordinal(),
            doc,
            field: &self.weight.field,
            term,
            default_weight: DEFAULT_TERM_WEIGHT,
            reason,
        });
    }
}

impl<TScoreCombiner: ScoreCombiner> SimScorer for TermPayloadScorer<TScoreCombiner> {
    /// `freq` is ignored: the score only depends on the payloads.
    fn score(&mut self, doc: DocId, _freq: Score) -> Score {
        self.score_terms(doc, |_, _, _, _| {})
    }

    fn explain(&mut self, doc: DocId, freq: Score) -> Explanation {
        let (score, contributions) = self.contributions(doc);
        let mut explanation = Explanation::new(
            format!(
                "term payload score(doc={doc}, freq={freq}), {}",
                self.combiner.explanation_label()
            ),
            score,
        );
        for contribution in &contributions {
            explanation.add_detail(contribution.to_explanation());
        }
        explanation
    }

    fn compute_slop_factor(&self, distance: u32) -> Score {
        1.0 / (distance as Score + 1.0)
    }

    fn compute_payload_factor(
        &self,
        _doc: DocId,
        _start: u32,
        _end: u32,
        _payload: &[u8],
    ) -> Score {
        1.0
    }
}
