//! Postings module (also called inverted index)
//!
//! The traits in this module are the read-side view of a segment's
//! term vectors that a scorer consumes: a [`TermsEnum`] positioned by exact
//! seek, and the [`Postings`] of the term it points to, iterated document by
//! document and position by position, exposing the payload attached at the
//! current position.

mod payload;
mod postings_writer;
mod term_vector;

use std::io;

pub use self::payload::{decode_weight, encode_weight, PayloadDecodeError, PAYLOAD_WEIGHT_NUM_BYTES};
pub(crate) use self::postings_writer::TermVectorWriter;
pub(crate) use self::term_vector::TermVector;
use crate::{DocId, TERMINATED};

/// Postings (also called inverted list)
///
/// For a given term, it is the list of doc ids of the documents
/// containing the term, and for each document the positions at which
/// the term occurs. Each position may carry a payload.
///
/// The postings start before the first document: `doc()` returns
/// [`TERMINATED`] until `advance()` or `seek()` was called.
pub trait Postings {
    /// Returns the current document, or [`TERMINATED`].
    fn doc(&self) -> DocId;

    /// Goes to the next document and returns it.
    ///
    /// Returns [`TERMINATED`] once the postings are exhausted.
    fn advance(&mut self) -> io::Result<DocId>;

    /// Advances to the first document greater or equal to `target`.
    fn seek(&mut self, target: DocId) -> io::Result<DocId> {
        let mut doc = self.doc();
        while doc == TERMINATED || doc < target {
            doc = self.advance()?;
            if doc == TERMINATED {
                break;
            }
        }
        Ok(doc)
    }

    /// Moves to the next position of the current document and returns it.
    ///
    /// Returns `None` once all of the positions of the document have been read.
    fn next_position(&mut self) -> io::Result<Option<u32>>;

    /// Returns the payload attached to the current position, if any.
    fn payload(&self) -> Option<&[u8]>;
}

/// Iterator over the terms of a term vector, sorted by bytes.
pub trait TermsEnum {
    /// Positions the enum on `term`.
    ///
    /// Returns `false` if the term does not exist, in which case the
    /// enum is unpositioned.
    fn seek_exact(&mut self, term: &[u8]) -> io::Result<bool>;

    /// Returns the term the enum is positioned on.
    fn term(&self) -> Option<&[u8]>;

    /// Returns the postings of the current term.
    fn postings(&self) -> io::Result<Box<dyn Postings + '_>>;
}
