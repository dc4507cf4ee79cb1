//! Error types for the Starlog core.

use thiserror::Error;

use crate::types::BlockHash;

/// Errors from payload codecs, wallet crypto, and challenge parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("payload does not decode to a genesis marker or claim: {0}")]
    DecodeFailure(String),

    #[error("address is not a valid wallet key: {0}")]
    InvalidAddress(String),

    #[error("signature does not verify against address and message")]
    InvalidSignature,

    #[error("malformed ownership challenge: {0}")]
    MalformedChallenge(String),
}

/// Validation errors for sealed blocks and predecessor links.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("stored hash does not match recomputed digest")]
    HashMismatch,

    #[error("payload cannot be decoded: {0}")]
    PayloadCorrupt(String),

    #[error("previous_hash {got} does not match predecessor hash {expected}")]
    BrokenLink { expected: BlockHash, got: BlockHash },

    #[error("height {got} does not follow predecessor height {prev}")]
    HeightDiscontinuity { prev: u64, got: u64 },

    #[error("genesis block must not carry a predecessor link")]
    UnexpectedPredecessor,

    #[error("non-genesis block is missing its predecessor link")]
    MissingPredecessor,
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        ValidationError::PayloadCorrupt(e.to_string())
    }
}
