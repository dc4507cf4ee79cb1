//! Block: one sealed, hash-linked unit of the star ledger.
//!
//! A block is immutable once sealed. Only the ledger seals blocks; a
//! later field change is only ever detected, never performed, by the
//! core.

use serde::{Deserialize, Serialize};

use crate::canonical::block_preimage;
use crate::error::CoreError;
use crate::payload::{decode_payload, encode_payload, BlockPayload};
use crate::types::BlockHash;

/// The height assigned to the genesis block.
pub const GENESIS_HEIGHT: u64 = 1;

/// A sealed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain; 1 for genesis, strictly +1 thereafter.
    pub height: u64,

    /// Seal time, seconds since the Unix epoch.
    pub time: i64,

    /// Digest of the predecessor block; `None` only for genesis.
    pub previous_hash: Option<BlockHash>,

    /// Opaque textual payload (hex over a JSON body).
    pub payload: String,

    /// Digest over every other field, assigned at seal time.
    pub hash: BlockHash,
}

impl Block {
    /// Seal a new block: encode the payload and bind the digest.
    pub fn seal(
        height: u64,
        time: i64,
        previous_hash: Option<BlockHash>,
        payload: &BlockPayload,
    ) -> Self {
        let payload = encode_payload(payload);
        let hash = BlockHash::digest(&block_preimage(
            height,
            time,
            previous_hash.as_ref(),
            &payload,
        ));
        Self {
            height,
            time,
            previous_hash,
            payload,
            hash,
        }
    }

    /// Recompute the digest from current field values.
    pub fn recompute_hash(&self) -> BlockHash {
        BlockHash::digest(&block_preimage(
            self.height,
            self.time,
            self.previous_hash.as_ref(),
            &self.payload,
        ))
    }

    /// Decode the stored payload.
    pub fn decode_payload(&self) -> Result<BlockPayload, CoreError> {
        decode_payload(&self.payload)
    }

    /// Tamper check: true iff the payload still decodes and the stored
    /// hash matches the recomputed digest. Never panics.
    pub fn validate(&self) -> bool {
        crate::validation::validate_block(self).is_ok()
    }

    /// Whether this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_none() && self.height == GENESIS_HEIGHT
    }
}
