//! The Ledger: the ordered, append-only sequence of blocks plus its
//! operations.
//!
//! The block sequence and cached height are owned exclusively by one
//! `Ledger` instance and live behind a single `RwLock`. Every mutation
//! funnels through one sealed append path under the write guard, so
//! height assignment and hash linking are atomic with respect to each
//! other; reads observe a consistent snapshot.

use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use starlog_core::{
    Address, Block, BlockHash, BlockPayload, Challenge, StarData, WalletSignature, GENESIS_HEIGHT,
};

use crate::audit::{audit_chain, ChainFault};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};

/// Chain state: the block sequence and the cached tip height.
struct ChainState {
    chain: Vec<Block>,
    height: i64,
}

/// The star-registry ledger.
pub struct Ledger {
    state: RwLock<ChainState>,
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger with default configuration. The genesis block is
    /// sealed immediately.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a ledger with the given configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        let ledger = Self {
            state: RwLock::new(ChainState {
                chain: Vec::new(),
                height: -1,
            }),
            config,
        };
        ledger.initialize();
        ledger
    }

    /// Seal the genesis block if no blocks exist yet. Idempotent: a
    /// no-op on an initialized chain.
    pub fn initialize(&self) {
        let mut state = self.state.write().unwrap();
        if state.height == -1 {
            let genesis = Self::seal_and_append(&mut state, BlockPayload::genesis());
            debug!(hash = %genesis.hash, "sealed genesis block");
        }
    }

    /// Current chain height: the last sealed height, or -1 before
    /// initialization.
    pub fn height(&self) -> i64 {
        self.state.read().unwrap().height
    }

    /// The single path by which blocks enter the chain. Callers must
    /// hold the write guard.
    fn seal_and_append(state: &mut ChainState, payload: BlockPayload) -> Block {
        let (height, previous_hash) = match state.chain.last() {
            Some(tip) => (tip.height + 1, Some(tip.hash)),
            None => (GENESIS_HEIGHT, None),
        };

        let block = Block::seal(height, now_secs(), previous_hash, &payload);
        state.chain.push(block.clone());
        state.height = height as i64;
        block
    }

    /// Mint a fresh ownership challenge for `address`.
    ///
    /// Stateless: nothing is recorded. Any number of challenges may be
    /// outstanding for the same address, each with its own timestamp;
    /// only structural validity matters at submission time.
    pub fn request_ownership_challenge(&self, address: &Address) -> String {
        let challenge = Challenge::new(address.clone(), now_secs());
        debug!(%address, "minted ownership challenge");
        challenge.to_string()
    }

    /// Admit a star claim.
    ///
    /// The embedded challenge timestamp must be inside the proof window
    /// AND `signature` must be a valid signature of `message` by the key
    /// behind `address`. On success the claim is sealed and appended; on
    /// rejection the chain is untouched.
    pub fn submit_claim(
        &self,
        address: &Address,
        message: &str,
        signature: &str,
        star: StarData,
    ) -> Result<Block> {
        let challenge: Challenge = message.parse().map_err(LedgerError::from)?;

        let elapsed = challenge.elapsed(now_secs());
        if elapsed >= self.config.proof_window_secs {
            warn!(%address, elapsed, "rejected claim: ownership proof expired");
            return Err(LedgerError::ProofExpired {
                elapsed,
                window: self.config.proof_window_secs,
            });
        }

        let signature = WalletSignature::from_hex(signature).map_err(LedgerError::from)?;
        if let Err(e) = address.verify(message.as_bytes(), &signature) {
            warn!(%address, "rejected claim: signature does not verify");
            return Err(e.into());
        }

        let mut state = self.state.write().unwrap();
        let block = Self::seal_and_append(&mut state, BlockPayload::claim(address.clone(), star));
        debug!(%address, height = block.height, hash = %block.hash, "sealed star claim");
        Ok(block)
    }

    /// First block whose hash equals `hash`, or `None`.
    pub fn find_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        let state = self.state.read().unwrap();
        state.chain.iter().find(|b| b.hash == *hash).cloned()
    }

    /// First block whose height field equals `height`, or `None`. The
    /// height field, not the array index, is the lookup key.
    pub fn find_by_height(&self, height: u64) -> Option<Block> {
        let state = self.state.read().unwrap();
        state.chain.iter().find(|b| b.height == height).cloned()
    }

    /// All stars claimed by `address`, in ascending height order.
    ///
    /// Genesis is skipped; its payload is not a claim. An undecodable
    /// payload is skipped here and reported by [`Self::validate_chain`].
    pub fn stars_by_owner(&self, address: &Address) -> Vec<StarData> {
        let state = self.state.read().unwrap();
        let mut stars = Vec::new();

        for block in state.chain.iter().skip(1) {
            match block.decode_payload() {
                Ok(BlockPayload::Claim(claim)) if claim.owner == *address => {
                    stars.push(claim.star);
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(height = block.height, error = %e, "skipping undecodable payload");
                }
            }
        }

        stars
    }

    /// Audit every block against its own digest and its predecessor
    /// link, under one consistent snapshot. Always returns the full
    /// report; empty means intact.
    pub fn validate_chain(&self) -> Vec<ChainFault> {
        let state = self.state.read().unwrap();
        let faults = audit_chain(&state.chain);
        if !faults.is_empty() {
            warn!(count = faults.len(), "chain audit found faults");
        }
        faults
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time in seconds since the Unix epoch.
fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}
