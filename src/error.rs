use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::SegmentOrdinal;

/// Error that may occur when opening the reader of a segment.
#[derive(Debug, Clone, Error)]
pub enum OpenReadError {
    /// Any kind of IO error that happens when opening the segment.
    #[error("IoError '{io_error:?}' while opening segment {segment_ordinal}.")]
    IoError {
        /// The underlying `io::Error`.
        io_error: Arc<io::Error>,
        /// The segment that could not be opened.
        segment_ordinal: SegmentOrdinal,
    },
}

impl OpenReadError {
    /// Wraps an io error.
    pub fn wrap_io_error(io_error: io::Error, segment_ordinal: SegmentOrdinal) -> Self {
        Self::IoError {
            io_error: Arc::new(io_error),
            segment_ordinal,
        }
    }
}

/// The library's error enum.
#[derive(Debug, Clone, Error)]
pub enum SimilarityError {
    /// Failed to open a segment for reading.
    #[error("Failed to open segment for read: '{0:?}'")]
    OpenReadError(#[from] OpenReadError),
    /// An IO error occurred.
    #[error("An IO error occurred: '{0}'")]
    IoError(Arc<io::Error>),
    /// An invalid argument was passed by the user.
    #[error("An invalid argument was passed: '{0}'")]
    InvalidArgument(String),
    /// No similarity is registered under the requested type.
    #[error("Unknown similarity type: '{0}'")]
    UnknownSimilarity(String),
    /// The settings could not be parsed.
    #[error("Invalid settings: '{0}'")]
    InvalidSettings(String),
}

impl From<io::Error> for SimilarityError {
    fn from(io_err: io::Error) -> SimilarityError {
        SimilarityError::IoError(Arc::new(io_err))
    }
}

impl From<serde_json::Error> for SimilarityError {
    fn from(error: serde_json::Error) -> SimilarityError {
        SimilarityError::InvalidSettings(error.to_string())
    }
}
