//! Wallet crypto for the star registry.
//!
//! An address is the lowercase hex encoding of a 32-byte Ed25519
//! verifying key; an ownership proof is a 64-byte Ed25519 signature over
//! the exact challenge string, transported as hex. The ledger only ever
//! verifies; signing happens out-of-band in the wallet tooling (and in
//! the testkit).

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// A wallet address: lowercase hex of a 32-byte Ed25519 verifying key.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Parse and normalize an address string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidAddress(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(CoreError::InvalidAddress(format!(
                "expected 32 key bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Derive the address of a verifying key.
    pub fn from_key_bytes(bytes: &[u8; 32]) -> Self {
        Self(hex::encode(bytes))
    }

    /// The address as a string identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify an ownership proof over `message`.
    ///
    /// Fails with [`CoreError::InvalidAddress`] when the address does not
    /// decode to a curve point, [`CoreError::InvalidSignature`] when the
    /// signature does not verify.
    pub fn verify(&self, message: &[u8], signature: &WalletSignature) -> Result<(), CoreError> {
        let key = self.verifying_key()?;
        let sig = Signature::from_bytes(&signature.0);
        key.verify(message, &sig)
            .map_err(|_| CoreError::InvalidSignature)
    }

    fn verifying_key(&self) -> Result<VerifyingKey, CoreError> {
        let bytes = hex::decode(&self.0).map_err(|e| CoreError::InvalidAddress(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::InvalidAddress("expected 32 key bytes".into()))?;
        VerifyingKey::from_bytes(&arr)
            .map_err(|_| CoreError::InvalidAddress("not a valid curve point".into()))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", &self.0[..self.0.len().min(16)])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 64-byte Ed25519 ownership signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WalletSignature(pub [u8; 64]);

impl WalletSignature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to the hex transport form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from the hex transport form.
    ///
    /// Anything that is not 64 hex-encoded bytes cannot be a signature,
    /// so malformed input maps to [`CoreError::InvalidSignature`].
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s).map_err(|_| CoreError::InvalidSignature)?;
        let arr: [u8; 64] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::InvalidSignature)?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for WalletSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletSignature({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for WalletSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A wallet keypair.
///
/// Wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// The address controlled by this keypair.
    pub fn address(&self) -> Address {
        Address::from_key_bytes(&self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> WalletSignature {
        let sig = self.signing_key.sign(message);
        WalletSignature(sig.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.address())
    }
}
