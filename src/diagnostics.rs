//! Reporting of degraded payload lookups.
//!
//! A payload lookup never fails the scoring of a document: it falls back to a
//! neutral weight instead. Each fallback is reported to the [`Diagnostics`]
//! handed to the similarity, which decides what to do with it.
//! [`LogDiagnostics`] forwards them to the `log` facade.

use std::sync::Arc;
use std::{fmt, io};

use crate::postings::PayloadDecodeError;
use crate::schema::Term;
use crate::{DocId, Score, SegmentOrdinal};

/// Why a payload lookup fell back to the default weight.
#[derive(Clone, Debug)]
pub enum FallbackReason {
    /// The document has no term vector for the field.
    NoTermVector,
    /// The term is not in the term vector of the document.
    TermNotFound,
    /// The postings of the term do not contain the document.
    NoPostings,
    /// The document has no position for the term.
    NoPosition,
    /// The first position of the term carries no payload.
    PayloadMissing,
    /// The payload could not be decoded as a weight.
    PayloadCorrupted(PayloadDecodeError),
    /// Reading the segment failed.
    IoError(Arc<io::Error>),
}

impl FallbackReason {
    /// Returns true if the fallback is an expected consequence of the data,
    /// as opposed to a damaged or unreadable segment.
    pub fn is_expected(&self) -> bool {
        !matches!(
            self,
            FallbackReason::PayloadCorrupted(_) | FallbackReason::IoError(_)
        )
    }
}

impl From<io::Error> for FallbackReason {
    fn from(io_error: io::Error) -> FallbackReason {
        FallbackReason::IoError(Arc::new(io_error))
    }
}

impl From<PayloadDecodeError> for FallbackReason {
    fn from(error: PayloadDecodeError) -> FallbackReason {
        FallbackReason::PayloadCorrupted(error)
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FallbackReason::NoTermVector => write!(f, "no term vector"),
            FallbackReason::TermNotFound => write!(f, "seek exact failed"),
            FallbackReason::NoPostings => write!(f, "document not in postings"),
            FallbackReason::NoPosition => write!(f, "no position"),
            FallbackReason::PayloadMissing => write!(f, "no payload"),
            FallbackReason::PayloadCorrupted(error) => write!(f, "corrupted payload: {error}"),
            FallbackReason::IoError(io_error) => write!(f, "io error: {io_error}"),
        }
    }
}

/// A payload lookup that fell back to the default weight.
#[derive(Debug)]
pub struct PayloadFallback<'a> {
    /// Segment being scored.
    pub segment_ordinal: SegmentOrdinal,
    /// Document being scored.
    pub doc: DocId,
    /// Field being scored.
    pub field: &'a str,
    /// Term whose payload was looked up.
    pub term: &'a Term,
    /// Weight used instead of the payload.
    pub default_weight: Score,
    /// What went wrong.
    pub reason: &'a FallbackReason,
}

/// Receives the events of the scoring hot path.
///
/// Implementations are shared by all of the scorers of a similarity and
/// must be cheap: they are called once per failed lookup.
pub trait Diagnostics: Send + Sync {
    /// Called every time a term weight falls back to the default weight.
    fn payload_fallback(&self, fallback: &PayloadFallback<'_>);
}

/// Forwards diagnostics to the `log` facade.
///
/// Expected fallbacks are logged at debug level, damaged payloads and io
/// errors at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl LogDiagnostics {
    fn level(reason: &FallbackReason) -> log::Level {
        if reason.is_expected() {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

impl Diagnostics for LogDiagnostics {
    fn payload_fallback(&self, fallback: &PayloadFallback<'_>) {
        log!(
            LogDiagnostics::level(fallback.reason),
            "{}, returning default term weight = {} for field = {} (segment={}, doc={}, term={})",
            fallback.reason,
            fallback.default_weight,
            fallback.field,
            fallback.segment_ordinal,
            fallback.doc,
            fallback.term
        );
    }
}
