//! Typed tamper and link checks for sealed blocks.

use crate::block::Block;
use crate::error::ValidationError;

/// Validate a block in isolation: the payload must still decode and the
/// stored hash must match the recomputed digest.
pub fn validate_block(block: &Block) -> Result<(), ValidationError> {
    block.decode_payload()?;

    if block.recompute_hash() != block.hash {
        return Err(ValidationError::HashMismatch);
    }

    Ok(())
}

/// Validate the predecessor link of a non-genesis block.
pub fn validate_link(block: &Block, prev: &Block) -> Result<(), ValidationError> {
    match block.previous_hash {
        None => return Err(ValidationError::MissingPredecessor),
        Some(got) if got != prev.hash => {
            return Err(ValidationError::BrokenLink {
                expected: prev.hash,
                got,
            });
        }
        Some(_) => {}
    }

    if block.height != prev.height + 1 {
        return Err(ValidationError::HeightDiscontinuity {
            prev: prev.height,
            got: block.height,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::BlockPayload;
    use crate::types::BlockHash;

    fn genesis() -> Block {
        Block::seal(1, 1736870400, None, &BlockPayload::genesis())
    }

    fn child_of(prev: &Block) -> Block {
        Block::seal(
            prev.height + 1,
            prev.time + 1,
            Some(prev.hash),
            &BlockPayload::genesis(),
        )
    }

    #[test]
    fn test_valid_block_and_link() {
        let g = genesis();
        let b = child_of(&g);
        assert!(validate_block(&g).is_ok());
        assert!(validate_block(&b).is_ok());
        assert!(validate_link(&b, &g).is_ok());
    }

    #[test]
    fn test_hash_mismatch() {
        let mut g = genesis();
        g.time += 1;
        assert!(matches!(
            validate_block(&g),
            Err(ValidationError::HashMismatch)
        ));
    }

    #[test]
    fn test_corrupt_payload() {
        let mut g = genesis();
        g.payload = "zz".into();
        assert!(matches!(
            validate_block(&g),
            Err(ValidationError::PayloadCorrupt(_))
        ));
    }

    #[test]
    fn test_broken_link() {
        let g = genesis();
        let mut b = child_of(&g);
        b.previous_hash = Some(BlockHash::from_bytes([0xff; 32]));
        assert!(matches!(
            validate_link(&b, &g),
            Err(ValidationError::BrokenLink { .. })
        ));
    }

    #[test]
    fn test_missing_predecessor() {
        let g = genesis();
        let mut b = child_of(&g);
        b.previous_hash = None;
        assert!(matches!(
            validate_link(&b, &g),
            Err(ValidationError::MissingPredecessor)
        ));
    }

    #[test]
    fn test_height_discontinuity() {
        let g = genesis();
        let b = Block::seal(5, g.time + 1, Some(g.hash), &BlockPayload::genesis());
        assert!(matches!(
            validate_link(&b, &g),
            Err(ValidationError::HeightDiscontinuity { prev: 1, got: 5 })
        ));
    }
}
