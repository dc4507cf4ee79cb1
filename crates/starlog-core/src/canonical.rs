//! Canonical CBOR encoding of the block digest preimage.
//!
//! RFC 8949 Core Deterministic Encoding: integer map keys, smallest valid
//! integer encoding, definite lengths only, keys sorted by encoded byte
//! comparison. Equal field values must produce identical preimage bytes
//! on every platform, or recomputed digests would drift.

use ciborium::value::Value;

use crate::types::BlockHash;

/// Preimage field keys. Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const HEIGHT: u64 = 0;
    pub const TIME: u64 = 1;
    pub const PREVIOUS_HASH: u64 = 2;
    pub const PAYLOAD: u64 = 3;
}

/// Encode the digest preimage of a block: every field except the hash
/// itself, in fixed key order. The absent genesis predecessor encodes as
/// CBOR null.
pub fn block_preimage(
    height: u64,
    time: i64,
    previous_hash: Option<&BlockHash>,
    payload: &str,
) -> Vec<u8> {
    let prev_value = match previous_hash {
        Some(hash) => Value::Bytes(hash.0.to_vec()),
        None => Value::Null,
    };

    let entries = vec![
        (
            Value::Integer(keys::HEIGHT.into()),
            Value::Integer(height.into()),
        ),
        (
            Value::Integer(keys::TIME.into()),
            Value::Integer(time.into()),
        ),
        (Value::Integer(keys::PREVIOUS_HASH.into()), prev_value),
        (
            Value::Integer(keys::PAYLOAD.into()),
            Value::Text(payload.to_string()),
        ),
    ];

    let mut buf = Vec::new();
    write_map_canonical(&mut buf, &entries);
    buf
}

/// Recursively encode a CBOR value.
fn write_value(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => write_integer(buf, *i),
        Value::Bytes(b) => write_byte_string(buf, b),
        Value::Text(s) => write_text(buf, s),
        Value::Map(entries) => write_map_canonical(buf, entries),
        Value::Null => buf.push(0xf6),
        _ => panic!("unsupported CBOR value in preimage"),
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn write_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();
    if n >= 0 {
        write_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        write_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type, smallest form.
fn write_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn write_byte_string(buf: &mut Vec<u8>, bytes: &[u8]) {
    write_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn write_text(buf: &mut Vec<u8>, s: &str) {
    write_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode a map canonically (major type 5), keys sorted by encoded bytes.
fn write_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    let mut pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            write_value(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    write_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        write_value(buf, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preimage_deterministic() {
        let prev = BlockHash::from_bytes([0xab; 32]);
        let b1 = block_preimage(2, 1736870400, Some(&prev), "deadbeef");
        let b2 = block_preimage(2, 1736870400, Some(&prev), "deadbeef");
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_preimage_distinguishes_every_field() {
        let prev = BlockHash::from_bytes([0xab; 32]);
        let base = block_preimage(2, 1736870400, Some(&prev), "deadbeef");

        assert_ne!(base, block_preimage(3, 1736870400, Some(&prev), "deadbeef"));
        assert_ne!(base, block_preimage(2, 1736870401, Some(&prev), "deadbeef"));
        assert_ne!(base, block_preimage(2, 1736870400, None, "deadbeef"));
        assert_ne!(base, block_preimage(2, 1736870400, Some(&prev), "deadbef0"));

        let other_prev = BlockHash::from_bytes([0xac; 32]);
        assert_ne!(
            base,
            block_preimage(2, 1736870400, Some(&other_prev), "deadbeef")
        );
    }

    #[test]
    fn test_genesis_predecessor_encodes_as_null() {
        let bytes = block_preimage(1, 0, None, "");
        // Map of 4 entries, then key 2 followed by null (0xf6).
        assert_eq!(bytes[0], 0xa4);
        let pos = bytes.iter().position(|&b| b == 0xf6).unwrap();
        assert_eq!(bytes[pos - 1], 0x02);
    }

    #[test]
    fn test_smallest_integer_encoding() {
        let mut buf = Vec::new();
        write_uint(&mut buf, 0, 0);
        assert_eq!(buf, vec![0x00]);

        buf.clear();
        write_uint(&mut buf, 0, 23);
        assert_eq!(buf, vec![0x17]);

        buf.clear();
        write_uint(&mut buf, 0, 24);
        assert_eq!(buf, vec![0x18, 24]);

        buf.clear();
        write_uint(&mut buf, 0, 256);
        assert_eq!(buf, vec![0x19, 0x01, 0x00]);

        buf.clear();
        write_uint(&mut buf, 0, 70000);
        assert_eq!(buf, vec![0x1a, 0x00, 0x01, 0x11, 0x70]);
    }

    #[test]
    fn test_negative_integer_encoding() {
        let mut buf = Vec::new();
        write_integer(&mut buf, (-1i64).into());
        assert_eq!(buf, vec![0x20]);

        buf.clear();
        write_integer(&mut buf, (-100i64).into());
        assert_eq!(buf, vec![0x38, 99]);
    }

    #[test]
    fn test_map_keys_sorted() {
        let entries = vec![
            (Value::Integer(3.into()), Value::Integer(30.into())),
            (Value::Integer(0.into()), Value::Integer(0.into())),
            (Value::Integer(1.into()), Value::Integer(10.into())),
        ];
        let mut buf = Vec::new();
        write_map_canonical(&mut buf, &entries);

        assert_eq!(buf[0], 0xa3);
        assert_eq!(buf[1], 0x00); // key 0
        assert_eq!(buf[3], 0x01); // key 1
        assert_eq!(buf[5], 0x03); // key 3
    }
}
