use std::io;

use super::{Postings, TermsEnum};
use crate::{DocId, TERMINATED};

/// A position of a term within a document, with its optional payload.
#[derive(Clone, Debug)]
pub(crate) struct TokenPosition {
    pub position: u32,
    pub payload: Option<Box<[u8]>>,
}

/// The positions of a term within a document.
#[derive(Clone, Debug)]
pub(crate) struct TermPostings {
    pub term: Vec<u8>,
    pub positions: Vec<TokenPosition>,
}

/// Terms of a single (document, field) pair, sorted by bytes.
#[derive(Clone, Debug, Default)]
pub(crate) struct TermVector {
    terms: Vec<TermPostings>,
}

impl TermVector {
    pub fn new(terms: Vec<TermPostings>) -> TermVector {
        debug_assert!(terms.windows(2).all(|w| w[0].term < w[1].term));
        TermVector { terms }
    }

    #[cfg(test)]
    pub fn terms(&self) -> &[TermPostings] {
        &self.terms
    }

    pub fn terms_enum(&self, doc: DocId) -> TermVectorTermsEnum<'_> {
        TermVectorTermsEnum {
            doc,
            terms: &self.terms,
            current: None,
        }
    }
}

pub(crate) struct TermVectorTermsEnum<'a> {
    doc: DocId,
    terms: &'a [TermPostings],
    current: Option<usize>,
}

impl TermsEnum for TermVectorTermsEnum<'_> {
    fn seek_exact(&mut self, term: &[u8]) -> io::Result<bool> {
        self.current = self
            .terms
            .binary_search_by(|term_postings| term_postings.term.as_slice().cmp(term))
            .ok();
        Ok(self.current.is_some())
    }

    fn term(&self) -> Option<&[u8]> {
        self.current.map(|ord| self.terms[ord].term.as_slice())
    }

    fn postings(&self) -> io::Result<Box<dyn Postings + '_>> {
        let ord = self.current.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "terms enum is not positioned on a term",
            )
        })?;
        Ok(Box::new(TermVectorPostings::new(
            self.doc,
            &self.terms[ord].positions,
        )))
    }
}

/// Postings of a term within a term vector.
///
/// A term vector describes a single document, so these postings hold
/// exactly one document.
pub(crate) struct TermVectorPostings<'a> {
    target_doc: DocId,
    doc: DocId,
    exhausted: bool,
    positions: &'a [TokenPosition],
    cursor: Option<usize>,
}

impl<'a> TermVectorPostings<'a> {
    fn new(doc: DocId, positions: &'a [TokenPosition]) -> TermVectorPostings<'a> {
        TermVectorPostings {
            target_doc: doc,
            doc: TERMINATED,
            exhausted: false,
            positions,
            cursor: None,
        }
    }
}

impl Postings for TermVectorPostings<'_> {
    fn doc(&self) -> DocId {
        self.doc
    }

    fn advance(&mut self) -> io::Result<DocId> {
        self.cursor = None;
        if self.exhausted {
            self.doc = TERMINATED;
        } else {
            self.exhausted = true;
            self.doc = self.target_doc;
        }
        Ok(self.doc)
    }

    fn next_position(&mut self) -> io::Result<Option<u32>> {
        if self.doc == TERMINATED {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "postings are not positioned on a document",
            ));
        }
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        if next >= self.positions.len() {
            self.cursor = Some(self.positions.len());
            return Ok(None);
        }
        self.cursor = Some(next);
        Ok(Some(self.positions[next].position))
    }

    fn payload(&self) -> Option<&[u8]> {
        self.cursor
            .and_then(|cursor| self.positions.get(cursor))
            .and_then(|token_position| token_position.payload.as_deref())
    }
}
