//! # Starlog Core
//!
//! Pure primitives for the star-registry ledger: blocks, payload codecs,
//! wallet crypto, ownership challenges, and canonical hashing.
//!
//! This crate contains no I/O and no locking; it is pure computation over
//! the chain's data structures. The `starlog-ledger` crate owns state.
//!
//! ## Key Types
//!
//! - [`Block`] - One sealed, hash-linked unit of the ledger
//! - [`BlockHash`] - Content digest of a block (Blake3, domain-prefixed)
//! - [`BlockPayload`] - The two payload shapes: genesis marker or claim
//! - [`Challenge`] - The string a wallet holder signs to prove ownership
//!
//! ## Canonicalization
//!
//! Block digests cover a deterministic CBOR preimage of every field
//! except the hash itself. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod challenge;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod types;
pub mod validation;

pub use block::{Block, GENESIS_HEIGHT};
pub use challenge::{Challenge, CHALLENGE_SUFFIX};
pub use crypto::{Address, Keypair, WalletSignature};
pub use error::{CoreError, ValidationError};
pub use payload::{
    decode_payload, encode_payload, BlockPayload, StarClaim, StarData, GENESIS_MARKER,
};
pub use types::BlockHash;
pub use validation::{validate_block, validate_link};
