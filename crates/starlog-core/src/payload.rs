//! Block payloads: the genesis marker and star claims.
//!
//! Payloads travel as an opaque textual encoding, lowercase hex over a
//! JSON body. Both shapes round-trip exactly; anything else fails decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crypto::Address;
use crate::error::CoreError;

/// The fixed payload carried by the genesis block.
pub const GENESIS_MARKER: &str = "Genesis Block";

/// Star-observation attributes submitted with a claim.
///
/// Opaque to the ledger: carried, stored, and returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarData(pub Value);

/// A claim binding a star to the wallet address that proved ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarClaim {
    pub owner: Address,
    pub star: StarData,
}

/// The two payload shapes a block can carry.
///
/// A JSON object with `owner` and `star` fields decodes as a claim; a
/// bare JSON string decodes as a genesis marker. Decoding anything else
/// fails with [`CoreError::DecodeFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockPayload {
    Claim(StarClaim),
    Genesis(String),
}

impl BlockPayload {
    /// The payload sealed into the genesis block.
    pub fn genesis() -> Self {
        Self::Genesis(GENESIS_MARKER.to_string())
    }

    /// Build a claim payload.
    pub fn claim(owner: Address, star: StarData) -> Self {
        Self::Claim(StarClaim { owner, star })
    }

    /// The claim carried by this payload, if it is one.
    pub fn as_claim(&self) -> Option<&StarClaim> {
        match self {
            Self::Claim(claim) => Some(claim),
            Self::Genesis(_) => None,
        }
    }
}

/// Encode a payload to its opaque textual form.
pub fn encode_payload(payload: &BlockPayload) -> String {
    let json = serde_json::to_vec(payload).expect("payload serialization is infallible");
    hex::encode(json)
}

/// Decode the opaque textual form back into a payload.
pub fn decode_payload(text: &str) -> Result<BlockPayload, CoreError> {
    let bytes = hex::decode(text).map_err(|e| CoreError::DecodeFailure(format!("hex: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| CoreError::DecodeFailure(format!("body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;
    use proptest::prelude::*;
    use serde_json::json;

    fn claim_payload(star: Value) -> BlockPayload {
        let owner = Keypair::from_seed(&[0x42; 32]).address();
        BlockPayload::claim(owner, StarData(star))
    }

    #[test]
    fn test_genesis_roundtrip() {
        let payload = BlockPayload::genesis();
        let encoded = encode_payload(&payload);
        assert_eq!(decode_payload(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_claim_roundtrip() {
        let payload = claim_payload(json!({
            "ra": "16h 29m 1.0s",
            "dec": "-26° 29' 24.9\"",
            "story": "first light",
        }));
        let encoded = encode_payload(&payload);
        assert_eq!(decode_payload(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(matches!(
            decode_payload("not hex"),
            Err(CoreError::DecodeFailure(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_json_body() {
        let encoded = hex::encode(b"{{{{");
        assert!(matches!(
            decode_payload(&encoded),
            Err(CoreError::DecodeFailure(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_shape() {
        // A bare number is neither a marker string nor a claim object.
        let encoded = hex::encode(b"42");
        assert!(matches!(
            decode_payload(&encoded),
            Err(CoreError::DecodeFailure(_))
        ));
    }

    #[test]
    fn test_decode_rejects_claim_missing_star() {
        let encoded = hex::encode(br#"{"owner":"aa"}"#);
        // Falls through the claim shape; an object is not a string either.
        assert!(decode_payload(&encoded).is_err());
    }

    #[test]
    fn test_as_claim() {
        let payload = claim_payload(json!({"ra": "0h"}));
        assert!(payload.as_claim().is_some());
        assert!(BlockPayload::genesis().as_claim().is_none());
    }

    proptest! {
        #[test]
        fn prop_claim_roundtrip(
            ra in "[ -~]{0,24}",
            dec in "[ -~]{0,24}",
            story in "[ -~]{0,64}",
        ) {
            let payload = claim_payload(json!({"ra": ra, "dec": dec, "story": story}));
            let encoded = encode_payload(&payload);
            prop_assert_eq!(decode_payload(&encoded).unwrap(), payload);
        }

        #[test]
        fn prop_marker_roundtrip(marker in "[ -~]{0,48}") {
            let payload = BlockPayload::Genesis(marker);
            let encoded = encode_payload(&payload);
            prop_assert_eq!(decode_payload(&encoded).unwrap(), payload);
        }
    }
}
