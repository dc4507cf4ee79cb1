//! Whole-chain tamper audit.
//!
//! The audit is exhaustive reporting, not short-circuiting: every block
//! is checked and every failure becomes an entry. It never errors.

use serde::Serialize;

use starlog_core::{validate_block, validate_link, Block, BlockHash, ValidationError};

/// One fault found during a chain audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainFault {
    /// Height of the offending block.
    pub height: u64,
    /// Stored hash of the offending block.
    pub hash: BlockHash,
    /// What failed.
    pub kind: FaultKind,
}

/// The ways a block can fail the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaultKind {
    /// Self-validation failed: corrupt payload or digest mismatch.
    Tampered,
    /// `previous_hash` does not match the predecessor's stored hash.
    BrokenLink,
    /// Height does not follow the predecessor's height.
    HeightDiscontinuity,
    /// A predecessor link where none belongs, or none where one does.
    MalformedLinkage,
}

impl From<ValidationError> for FaultKind {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::HashMismatch | ValidationError::PayloadCorrupt(_) => {
                FaultKind::Tampered
            }
            ValidationError::BrokenLink { .. } => FaultKind::BrokenLink,
            ValidationError::HeightDiscontinuity { .. } => FaultKind::HeightDiscontinuity,
            ValidationError::MissingPredecessor | ValidationError::UnexpectedPredecessor => {
                FaultKind::MalformedLinkage
            }
        }
    }
}

/// Audit every block in chain order.
///
/// A block that fails self-validation is recorded and its link is not
/// checked further. Blocks that pass are additionally held to the link
/// invariants against their predecessor; genesis (first block) is exempt
/// from link checks but must not carry one. An empty report means the
/// chain is fully intact.
pub fn audit_chain(chain: &[Block]) -> Vec<ChainFault> {
    let mut faults = Vec::new();

    for (i, block) in chain.iter().enumerate() {
        if let Err(e) = validate_block(block) {
            faults.push(ChainFault {
                height: block.height,
                hash: block.hash,
                kind: e.into(),
            });
            continue;
        }

        let link_check = match i {
            0 => {
                if block.previous_hash.is_some() {
                    Err(ValidationError::UnexpectedPredecessor)
                } else {
                    Ok(())
                }
            }
            _ => validate_link(block, &chain[i - 1]),
        };

        if let Err(e) = link_check {
            faults.push(ChainFault {
                height: block.height,
                hash: block.hash,
                kind: e.into(),
            });
        }
    }

    faults
}
