//! Proptest strategies for registry data.

use proptest::prelude::*;
use serde_json::Value;

use starlog_core::{BlockPayload, Keypair, StarData};

/// Printable ASCII text, the kind wallet UIs actually submit.
fn arb_text(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ -~]{{0,{max}}}")).unwrap()
}

/// Arbitrary star observations: RA/DEC plus an optional free-form story.
pub fn arb_star() -> impl Strategy<Value = StarData> {
    (arb_text(24), arb_text(24), proptest::option::of(arb_text(64))).prop_map(
        |(ra, dec, story)| {
            let mut body = serde_json::Map::new();
            body.insert("ra".into(), Value::String(ra));
            body.insert("dec".into(), Value::String(dec));
            if let Some(story) = story {
                body.insert("story".into(), Value::String(story));
            }
            StarData(Value::Object(body))
        },
    )
}

/// Arbitrary wallet seeds.
pub fn arb_seed() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// Arbitrary claim payloads with a syntactically valid owner address.
pub fn arb_claim() -> impl Strategy<Value = BlockPayload> {
    (arb_seed(), arb_star()).prop_map(|(seed, star)| {
        let owner = Keypair::from_seed(&seed).address();
        BlockPayload::claim(owner, star)
    })
}
