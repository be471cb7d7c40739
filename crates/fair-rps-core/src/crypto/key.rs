//! SecretKey and the secure key provider.

use crate::error::FairPlayError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Key length used for every round.
pub const DEFAULT_KEY_BITS: usize = 256;

/// HMAC key owned by the house until reveal.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey(#[serde(with = "hex_bytes")] Vec<u8>);

impl SecretKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse a key from hex, as printed after a round
    pub fn from_hex(s: &str) -> Result<Self, FairPlayError> {
        let bytes = hex::decode(s.trim())
            .map_err(|e| FairPlayError::InvalidParameter(format!("key is not valid hex: {e}")))?;
        if bytes.is_empty() {
            return Err(FairPlayError::InvalidKey);
        }
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex without separators, same encoding as `Commitment`
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

// Never print key material through Debug; it ends up in logs.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<{} bytes>)", self.0.len())
    }
}

/// Generate a key of `bit_length` bits from the operating system's CSPRNG.
pub fn generate_key(bit_length: usize) -> Result<SecretKey, FairPlayError> {
    generate_key_with(&mut OsRng, bit_length)
}

/// Generate a key from an explicit cryptographic source.
///
/// The `CryptoRng` bound keeps general-purpose generators out. A failing
/// source is reported as `EntropySourceUnavailable`; there is no fallback.
pub fn generate_key_with<R>(rng: &mut R, bit_length: usize) -> Result<SecretKey, FairPlayError>
where
    R: RngCore + CryptoRng,
{
    if bit_length == 0 || bit_length % 8 != 0 {
        return Err(FairPlayError::InvalidParameter(format!(
            "key length must be a positive multiple of 8 bits, got {bit_length}"
        )));
    }

    let mut bytes = vec![0u8; bit_length / 8];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| FairPlayError::EntropySourceUnavailable(e.to_string()))?;

    debug!(bits = bit_length, "generated secret key");
    Ok(SecretKey(bytes))
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex::decode(&hex_str).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A CSPRNG stand-in whose backing device is gone.
    struct DeadSource;

    impl RngCore for DeadSource {
        fn next_u32(&mut self) -> u32 {
            unreachable!("key generation must use try_fill_bytes")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("key generation must use try_fill_bytes")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("key generation must use try_fill_bytes")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "entropy device missing",
            )))
        }
    }

    impl CryptoRng for DeadSource {}

    #[test]
    fn test_generate_256_bit_key() {
        let key = generate_key(256).unwrap();
        assert_eq!(key.len(), 32);
        assert_eq!(key.to_hex().len(), 64);
    }

    #[test]
    fn test_key_length_follows_bit_length() {
        assert_eq!(generate_key(8).unwrap().len(), 1);
        assert_eq!(generate_key(128).unwrap().len(), 16);
        assert_eq!(generate_key(512).unwrap().len(), 64);
    }

    #[test]
    fn test_rejects_bad_bit_lengths() {
        for bits in [0, 1, 7, 255, 257] {
            assert!(
                matches!(generate_key(bits), Err(FairPlayError::InvalidParameter(_))),
                "bit length {bits} should be rejected"
            );
        }
    }

    #[test]
    fn test_independent_keys_differ() {
        let key1 = generate_key(256).unwrap();
        let key2 = generate_key(256).unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_dead_entropy_source_is_fatal() {
        let result = generate_key_with(&mut DeadSource, 256);
        match result {
            Err(FairPlayError::EntropySourceUnavailable(msg)) => {
                assert!(msg.contains("entropy device missing"))
            }
            other => panic!("expected EntropySourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = generate_key(256).unwrap();
        let parsed = SecretKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            SecretKey::from_hex("not hex"),
            Err(FairPlayError::InvalidParameter(_))
        ));
        assert!(matches!(SecretKey::from_hex(""), Err(FairPlayError::InvalidKey)));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let key = SecretKey::from_bytes(vec![0xab; 32]);
        let debug = format!("{key:?}");
        assert_eq!(debug, "SecretKey(<32 bytes>)");
        assert!(!debug.contains("ab"));
    }
}
