//! Index-side collaborators of the scorer.
//!
//! The scorer does not own the index format. It consumes a [`Segment`],
//! which it opens once into a [`SegmentReader`] when the scorer is created,
//! and reads per-document term vectors through it.
//!
//! [`RamSegment`] is an in-memory implementation, built with a
//! [`RamSegmentWriter`].

mod ram_segment;
mod segment_writer;

use std::io;

pub use self::ram_segment::RamSegment;
pub use self::segment_writer::RamSegmentWriter;
use crate::postings::TermsEnum;
use crate::{DocId, SegmentOrdinal};

/// An independently readable partition of the index.
pub trait Segment: Send + Sync {
    /// Returns the ordinal of the segment within the index.
    fn segment_ordinal(&self) -> SegmentOrdinal;

    /// Opens a reader over the segment.
    ///
    /// The reader is released when the returned box is dropped.
    fn open_reader(&self) -> io::Result<Box<dyn SegmentReader>>;
}

/// Read access to the term vectors of a segment.
pub trait SegmentReader: Send {
    /// Returns the ordinal of the segment this reader reads.
    fn segment_ordinal(&self) -> SegmentOrdinal;

    /// Returns one more than the highest document id of the segment.
    fn max_doc(&self) -> DocId;

    /// Returns the term vector of `doc` for the field named `field`.
    ///
    /// Returns `None` if the document has no term vector for this field.
    fn term_vector(&self, doc: DocId, field: &str) -> io::Result<Option<Box<dyn TermsEnum + '_>>>;
}
