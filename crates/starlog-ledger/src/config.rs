//! Ledger configuration.

/// Default ownership-proof window, in seconds.
pub const DEFAULT_PROOF_WINDOW_SECS: i64 = 300;

/// Configuration for a [`Ledger`](crate::Ledger).
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// How long a minted challenge stays valid, in seconds. A claim whose
    /// challenge is at least this old is rejected.
    pub proof_window_secs: i64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            proof_window_secs: DEFAULT_PROOF_WINDOW_SECS,
        }
    }
}
