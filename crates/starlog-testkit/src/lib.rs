//! # Starlog Testkit
//!
//! Fixtures and proptest generators for exercising the star registry.

pub mod fixtures;
pub mod generators;

pub use fixtures::{init_tracing, sample_star, wallets, TestFixture};
pub use generators::{arb_claim, arb_seed, arb_star};
