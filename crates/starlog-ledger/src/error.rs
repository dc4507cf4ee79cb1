//! Error types for ledger operations.

use starlog_core::CoreError;
use thiserror::Error;

/// Errors from claim admission.
///
/// Lookup misses are not errors; they resolve to `None`. Expiry and bad
/// signatures are distinct kinds so callers can diagnose rejections; the
/// HTTP collaborator is free to collapse them into one status.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The submitted message is not a well-formed ownership challenge.
    #[error("malformed ownership challenge: {0}")]
    ChallengeMalformed(String),

    /// The challenge was minted too long ago.
    #[error("ownership proof expired: {elapsed}s elapsed, window is {window}s")]
    ProofExpired { elapsed: i64, window: i64 },

    /// The signature does not verify against the address and message.
    #[error("ownership signature does not verify")]
    SignatureInvalid,

    /// The address is not a valid wallet key.
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    /// A stored payload failed to decode.
    #[error("payload decode failure: {0}")]
    Decode(String),
}

impl From<CoreError> for LedgerError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::MalformedChallenge(msg) => LedgerError::ChallengeMalformed(msg),
            CoreError::InvalidAddress(msg) => LedgerError::InvalidAddress(msg),
            CoreError::InvalidSignature => LedgerError::SignatureInvalid,
            CoreError::DecodeFailure(msg) => LedgerError::Decode(msg),
        }
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
