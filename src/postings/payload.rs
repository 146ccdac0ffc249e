use thiserror::Error;

use crate::Score;

/// Number of bytes of a weight payload.
pub const PAYLOAD_WEIGHT_NUM_BYTES: usize = 4;

/// Error returned when a payload cannot be read as a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadDecodeError {
    /// The payload holds fewer bytes than a weight.
    #[error("payload of {len} bytes is too short to hold a weight")]
    Truncated {
        /// Length of the payload.
        len: usize,
    },
}

/// Decodes the weight stored at offset 0 of a payload.
///
/// Weights are IEEE-754 single precision floats, big endian. Bytes after the
/// first four are ignored.
pub fn decode_weight(payload: &[u8]) -> Result<Score, PayloadDecodeError> {
    let weight_bytes: [u8; PAYLOAD_WEIGHT_NUM_BYTES] = payload
        .get(..PAYLOAD_WEIGHT_NUM_BYTES)
        .and_then(|bytes| <[u8; PAYLOAD_WEIGHT_NUM_BYTES]>::try_from(bytes).ok())
        .ok_or(PayloadDecodeError::Truncated { len: payload.len() })?;
    Ok(Score::from_be_bytes(weight_bytes))
}

/// Encodes a weight the way the index writer stores it in a payload.
pub fn encode_weight(weight: Score) -> [u8; PAYLOAD_WEIGHT_NUM_BYTES] {
    weight.to_be_bytes()
}
