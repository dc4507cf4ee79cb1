//! # Starlog Ledger
//!
//! The ledger aggregate for the star registry: an append-only,
//! hash-linked chain of blocks behind a single-writer lock, with
//! ownership-proof gating in front of claim admission.
//!
//! All mutation funnels through one sealed append path under the write
//! guard; reads observe a consistent snapshot. See [`Ledger`].

pub mod audit;
pub mod config;
pub mod error;
pub mod ledger;

pub use audit::{audit_chain, ChainFault, FaultKind};
pub use config::{LedgerConfig, DEFAULT_PROOF_WINDOW_SECS};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
