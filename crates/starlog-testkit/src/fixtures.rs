//! Test fixtures and helpers.
//!
//! Common setup code for registry tests: a wallet wired to a fresh
//! ledger, with the out-of-band signing step folded in.

use starlog_core::{Address, Block, Keypair, StarData};
use starlog_ledger::{Ledger, LedgerConfig, Result};

/// A wallet plus a fresh ledger.
pub struct TestFixture {
    pub keypair: Keypair,
    pub ledger: Ledger,
}

impl TestFixture {
    /// Create a fixture with a random wallet and default configuration.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
            ledger: Ledger::new(),
        }
    }

    /// Create with a deterministic wallet from a seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
            ledger: Ledger::new(),
        }
    }

    /// Create with a random wallet and the given ledger configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            keypair: Keypair::generate(),
            ledger: Ledger::with_config(config),
        }
    }

    /// The wallet's address.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// Sign a challenge string the way the offline wallet tooling would,
    /// returning the hex transport form.
    pub fn sign(&self, message: &str) -> String {
        self.keypair.sign(message.as_bytes()).to_hex()
    }

    /// Run the full claim round-trip: mint, sign, submit.
    pub fn submit_star(&self, star: StarData) -> Result<Block> {
        let address = self.address();
        let message = self.ledger.request_ownership_challenge(&address);
        let signature = self.sign(&message);
        self.ledger.submit_claim(&address, &message, &signature, star)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic wallets for multi-owner tests on one ledger.
pub fn wallets(count: usize) -> Vec<Keypair> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = (i + 1) as u8;
            seed[1] = (i >> 8) as u8;
            Keypair::from_seed(&seed)
        })
        .collect()
}

/// A small, realistic star observation.
pub fn sample_star() -> StarData {
    StarData(serde_json::json!({
        "ra": "16h 29m 1.0s",
        "dec": "-26° 29' 24.9\"",
        "story": "Antares, heart of Scorpius",
    }))
}

/// Install a test subscriber once. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
