use std::sync::Arc;

use super::RamSegment;
use crate::postings::{encode_weight, TermVectorWriter};
use crate::schema::Term;
use crate::{DocId, Score, SegmentOrdinal, SimilarityError};

/// A `RamSegmentWriter` is in charge of creating an in-memory segment
/// from a set of documents.
///
/// Documents are registered with [`add_document`](Self::add_document), and
/// receive their `DocId` incrementally. Tokens are then pushed with their
/// field, position and optional payload. The segment is frozen by
/// [`finalize`](Self::finalize).
#[derive(Default)]
pub struct RamSegmentWriter {
    doc_writers: Vec<TermVectorWriter>,
}

impl RamSegmentWriter {
    /// Registers a new document and returns its id.
    pub fn add_document(&mut self) -> DocId {
        let doc = self.max_doc();
        self.doc_writers.push(TermVectorWriter::default());
        doc
    }

    /// Returns one more than the highest document id.
    pub fn max_doc(&self) -> DocId {
        self.doc_writers.len() as DocId
    }

    /// Returns the number of tokens pushed so far.
    pub fn num_tokens(&self) -> usize {
        self.doc_writers
            .iter()
            .map(TermVectorWriter::num_tokens)
            .sum()
    }

    /// Records a term occurrence at `position` in `field` of `doc`.
    pub fn add_term(
        &mut self,
        doc: DocId,
        field: &str,
        term: &Term,
        position: u32,
        payload: Option<&[u8]>,
    ) -> crate::Result<()> {
        let max_doc = self.max_doc();
        let doc_writer = self.doc_writers.get_mut(doc as usize).ok_or_else(|| {
            SimilarityError::InvalidArgument(format!(
                "document {doc} was not added to the segment (max_doc={max_doc})"
            ))
        })?;
        doc_writer.record(field, term.as_slice(), position, payload);
        Ok(())
    }

    /// Records a text token.
    pub fn add_token(
        &mut self,
        doc: DocId,
        field: &str,
        text: &str,
        position: u32,
        payload: Option<&[u8]>,
    ) -> crate::Result<()> {
        self.add_term(doc, field, &Term::from_text(text), position, payload)
    }

    /// Records a text token carrying a weight payload.
    pub fn add_weighted_token(
        &mut self,
        doc: DocId,
        field: &str,
        text: &str,
        position: u32,
        weight: Score,
    ) -> crate::Result<()> {
        let payload = encode_weight(weight);
        self.add_token(doc, field, text, position, Some(&payload[..]))
    }

    /// Freezes the documents into a searchable segment.
    pub fn finalize(self, segment_ordinal: SegmentOrdinal) -> RamSegment {
        debug!(
            "finalize segment {segment_ordinal} ({} docs, {} tokens)",
            self.max_doc(),
            self.num_tokens()
        );
        let docs = self
            .doc_writers
            .into_iter()
            .map(TermVectorWriter::serialize)
            .collect();
        RamSegment::new(segment_ordinal, Arc::new(docs))
    }
}
