//! Commitment = HMAC-SHA256(key, move name)

use super::SecretKey;
use crate::error::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(key: &SecretKey, move_name: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(move_name.as_bytes());
    mac
}

/// Published binding to the machine's move
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(#[serde(with = "super::hex_serde")] [u8; 32]);

impl Commitment {
    /// Commit to a move name under the session key
    pub fn new(move_name: &str, key: &SecretKey) -> Self {
        Self(keyed_mac(key, move_name).finalize().into_bytes().into())
    }

    /// Verify that the revealed move name and key produce this commitment
    pub fn verify(&self, move_name: &str, key: &SecretKey) -> bool {
        keyed_mac(key, move_name).verify_slice(&self.0).is_ok()
    }
}

impl FromStr for Commitment {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::decode_hex32(s)
            .map(Self)
            .map_err(GameError::InvalidCommitment)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip_bit(key: &SecretKey, byte: usize, bit: u8) -> SecretKey {
        let mut bytes = *key.as_bytes();
        bytes[byte] ^= 1 << bit;
        SecretKey::from_bytes(bytes)
    }

    #[test]
    fn test_commitment_verification() {
        let key = SecretKey::generate().unwrap();
        let commitment = Commitment::new("Rock", &key);

        assert!(commitment.verify("Rock", &key));
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let key = SecretKey::generate().unwrap();

        assert_eq!(Commitment::new("Lizard", &key), Commitment::new("Lizard", &key));
    }

    #[test]
    fn test_known_vectors() {
        let zero_key = SecretKey::from_bytes([0u8; 32]);
        assert_eq!(
            Commitment::new("Rock", &zero_key).to_string(),
            "5502586200d94fa0112c7229e501cc9132d4b2d8fb8044d834ef16d346a72731"
        );

        let mut counting = [0u8; 32];
        for (i, b) in counting.iter_mut().enumerate() {
            *b = i as u8;
        }
        let counting_key = SecretKey::from_bytes(counting);
        assert_eq!(
            Commitment::new("Paper", &counting_key).to_string(),
            "daa52d50361f9a481a15843f3c08e69bb3d4c62a0a1ddba253a015e4c9d3fe4b"
        );
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = SecretKey::generate().unwrap();
        let commitment1 = Commitment::new("Rock", &key);
        let commitment2 = Commitment::new("Paper", &key);

        assert_ne!(commitment1, commitment2);
    }

    #[test]
    fn test_one_bit_key_change_changes_commitment() {
        let key = SecretKey::generate().unwrap();
        let commitment = Commitment::new("Rock", &key);

        for (byte, bit) in [(0, 0), (15, 3), (31, 7)] {
            let tampered = flip_bit(&key, byte, bit);
            assert_ne!(Commitment::new("Rock", &tampered), commitment);
            assert!(!commitment.verify("Rock", &tampered));
        }
    }

    #[test]
    fn test_one_bit_name_change_changes_commitment() {
        let key = SecretKey::generate().unwrap();
        let commitment = Commitment::new("Rock", &key);

        // 'R' (0x52) vs 'S' (0x53)
        assert!(!commitment.verify("Sock", &key));
        assert!(!commitment.verify("rock", &key));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = SecretKey::generate().unwrap();
        let key2 = SecretKey::generate().unwrap();
        let commitment = Commitment::new("Rock", &key1);

        assert!(!commitment.verify("Rock", &key2));
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let key = SecretKey::generate().unwrap();
        let commitment = Commitment::new("Spock", &key);

        let parsed: Commitment = commitment.to_string().to_uppercase().parse().unwrap();
        assert_eq!(parsed, commitment);
    }

    #[test]
    fn test_parse_rejects_short_digest() {
        assert!(matches!(
            "deadbeef".parse::<Commitment>(),
            Err(GameError::InvalidCommitment(_))
        ));
    }

    #[test]
    fn test_commitment_serializes_as_hex() {
        let key = SecretKey::generate().unwrap();
        let commitment = Commitment::new("Rock", &key);

        let json = serde_json::to_string(&commitment).unwrap();
        assert_eq!(json, format!("\"{}\"", commitment));

        let back: Commitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commitment);
    }
}
