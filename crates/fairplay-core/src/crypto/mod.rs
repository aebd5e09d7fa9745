//! Cryptographic primitives for the commit-reveal protocol.
//!
//! This module provides:
//! - SecretKey, the per-game 256-bit HMAC key
//! - Commitment, HMAC-SHA256(key, move name)

mod commitment;
mod key;

pub use commitment::Commitment;
pub use key::{SecretKey, KEY_LEN};

/// Parse exactly 32 bytes from a hex string (either case).
fn decode_hex32(s: &str) -> std::result::Result<[u8; 32], String> {
    let bytes = hex::decode(s.trim()).map_err(|e| e.to_string())?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| format!("expected 32 bytes, got {}", bytes.len()))
}

/// Serde helper: 32-byte arrays as lowercase hex strings.
mod hex_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_hex32(&hex_str).map_err(serde::de::Error::custom)
    }
}
