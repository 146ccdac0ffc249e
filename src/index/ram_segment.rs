use std::io;
use std::sync::Arc;

use census::{Inventory, TrackedObject};
use rustc_hash::FxHashMap;

use super::{Segment, SegmentReader};
use crate::postings::{TermVector, TermsEnum};
use crate::{DocId, SegmentOrdinal};

type DocTermVectors = Vec<FxHashMap<String, TermVector>>;

/// An in-memory segment holding per-document term vectors.
///
/// `RamSegment` is cheap to clone. Clones share the same documents and the
/// same inventory of open readers.
#[derive(Clone)]
pub struct RamSegment {
    segment_ordinal: SegmentOrdinal,
    docs: Arc<DocTermVectors>,
    reader_inventory: Inventory<SegmentOrdinal>,
    open_error_kind: Option<io::ErrorKind>,
}

impl RamSegment {
    pub(crate) fn new(segment_ordinal: SegmentOrdinal, docs: Arc<DocTermVectors>) -> RamSegment {
        RamSegment {
            segment_ordinal,
            docs,
            reader_inventory: Inventory::default(),
            open_error_kind: None,
        }
    }

    /// Returns one more than the highest document id.
    pub fn max_doc(&self) -> DocId {
        self.docs.len() as DocId
    }

    /// Returns the number of readers currently open on this segment.
    pub fn num_open_readers(&self) -> usize {
        self.reader_inventory.list().len()
    }

    /// Makes every subsequent `open_reader` call fail with an
    /// error of the given kind, as an unreadable segment would.
    #[must_use]
    pub fn fail_on_open(mut self, error_kind: io::ErrorKind) -> RamSegment {
        self.open_error_kind = Some(error_kind);
        self
    }
}

impl Segment for RamSegment {
    fn segment_ordinal(&self) -> SegmentOrdinal {
        self.segment_ordinal
    }

    fn open_reader(&self) -> io::Result<Box<dyn SegmentReader>> {
        if let Some(error_kind) = self.open_error_kind {
            return Err(io::Error::new(
                error_kind,
                format!("segment {} is unreadable", self.segment_ordinal),
            ));
        }
        Ok(Box::new(RamSegmentReader {
            segment_ordinal: self.segment_ordinal,
            docs: self.docs.clone(),
            _tracked: self.reader_inventory.track(self.segment_ordinal),
        }))
    }
}

struct RamSegmentReader {
    segment_ordinal: SegmentOrdinal,
    docs: Arc<DocTermVectors>,
    _tracked: TrackedObject<SegmentOrdinal>,
}

impl SegmentReader for RamSegmentReader {
    fn segment_ordinal(&self) -> SegmentOrdinal {
        self.segment_ordinal
    }

    fn max_doc(&self) -> DocId {
        self.docs.len() as DocId
    }

    fn term_vector(&self, doc: DocId, field: &str) -> io::Result<Option<Box<dyn TermsEnum + '_>>> {
        let Some(term_vectors) = self.docs.get(doc as usize) else {
            return Ok(None);
        };
        Ok(term_vectors
            .get(field)
            .map(|term_vector| Box::new(term_vector.terms_enum(doc)) as Box<dyn TermsEnum + '_>))
    }
}
