//! Ownership challenges: the string a wallet holder signs to prove
//! control of an address.

use std::fmt;
use std::str::FromStr;

use crate::crypto::Address;
use crate::error::CoreError;

/// Fixed suffix marking a string as a star-registry challenge.
pub const CHALLENGE_SUFFIX: &str = "starRegistry";

/// A minted ownership challenge: `<address>:<epoch-secs>:starRegistry`.
///
/// Challenges are stateless. The ledger mints them without recording
/// anything; the embedded timestamp is the only expiry information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub address: Address,
    pub timestamp: i64,
}

impl Challenge {
    pub fn new(address: Address, timestamp: i64) -> Self {
        Self { address, timestamp }
    }

    /// Seconds elapsed between minting and `now`.
    pub fn elapsed(&self, now: i64) -> i64 {
        now - self.timestamp
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.address, self.timestamp, CHALLENGE_SUFFIX)
    }
}

impl FromStr for Challenge {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let address = parts
            .next()
            .ok_or_else(|| CoreError::MalformedChallenge("missing address field".into()))?;
        let timestamp = parts
            .next()
            .ok_or_else(|| CoreError::MalformedChallenge("missing timestamp field".into()))?;
        let suffix = parts
            .next()
            .ok_or_else(|| CoreError::MalformedChallenge("missing suffix field".into()))?;

        if suffix != CHALLENGE_SUFFIX {
            return Err(CoreError::MalformedChallenge(format!(
                "expected suffix {CHALLENGE_SUFFIX:?}"
            )));
        }

        let address = Address::parse(address)
            .map_err(|e| CoreError::MalformedChallenge(e.to_string()))?;
        let timestamp: i64 = timestamp
            .parse()
            .map_err(|_| CoreError::MalformedChallenge("timestamp is not an integer".into()))?;

        Ok(Self { address, timestamp })
    }
}
