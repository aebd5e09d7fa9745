//! Per-game secret key for the commitment HMAC.

use crate::error::{GameError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// 256-bit HMAC key, disclosed only after the human has moved
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(#[serde(with = "super::hex_serde")] [u8; KEY_LEN]);

impl SecretKey {
    /// Generate a fresh key from the operating system CSPRNG
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a key from the given cryptographically secure source.
    ///
    /// A source failure is reported as `EntropyUnavailable`; there is no
    /// fallback to a weaker generator.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| GameError::EntropyUnavailable(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Parse a revealed key from its hex form
    pub fn from_hex(s: &str) -> Result<Self> {
        super::decode_hex32(s)
            .map(Self)
            .map_err(GameError::InvalidKey)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex, two digits per byte
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for SecretKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

// Never print key material through Debug; it ends up in logs.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeadRng;

    impl RngCore for DeadRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy source closed"))
        }
    }

    impl CryptoRng for DeadRng {}

    #[test]
    fn test_key_hex_format() {
        let key = SecretKey::generate().unwrap();
        let hex = key.to_hex();

        assert_eq!(hex.len(), 64);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(hex::decode(&hex).unwrap().len(), KEY_LEN);
    }

    #[test]
    fn test_low_bytes_are_zero_padded() {
        let mut bytes = [0u8; KEY_LEN];
        bytes[0] = 0x0a;
        bytes[31] = 0x01;
        let key = SecretKey::from_bytes(bytes);

        let hex = key.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("0a00"));
        assert!(hex.ends_with("0001"));
    }

    #[test]
    fn test_keys_are_fresh() {
        let key1 = SecretKey::generate().unwrap();
        let key2 = SecretKey::generate().unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_entropy_failure_is_reported() {
        let err = SecretKey::generate_with(&mut DeadRng).unwrap_err();
        assert!(matches!(err, GameError::EntropyUnavailable(_)));
    }

    #[test]
    fn test_parse_revealed_key() {
        let key = SecretKey::generate().unwrap();

        assert_eq!(SecretKey::from_hex(&key.to_hex()).unwrap(), key);
        assert_eq!(
            key.to_hex().to_uppercase().parse::<SecretKey>().unwrap(),
            key
        );
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert!(matches!(
            SecretKey::from_hex("abcd"),
            Err(GameError::InvalidKey(_))
        ));
        assert!(matches!(
            SecretKey::from_hex(&"zz".repeat(32)),
            Err(GameError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SecretKey::generate().unwrap();
        let debug = format!("{:?}", key);

        assert!(!debug.contains(&key.to_hex()[..8]));
    }
}
