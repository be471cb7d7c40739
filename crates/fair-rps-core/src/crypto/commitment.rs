//! Commitment for the commit-reveal scheme.
//!
//! Commitment = HMAC-SHA256(key, utf8(move label)), shown to the responder
//! as 64 lowercase hex characters before they answer.

use crate::error::FairPlayError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Tag length in bytes
pub const COMMITMENT_LEN: usize = 32;

/// HMAC tag over the house move label
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; COMMITMENT_LEN]);

impl Commitment {
    /// Create a commitment to `message` under `key`
    pub fn new(message: &str, key: &[u8]) -> Result<Self, FairPlayError> {
        let mut mac = keyed_mac(key)?;
        mac.update(message.as_bytes());
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Verify that `message` under `key` produces this commitment.
    ///
    /// The tag comparison is constant-time.
    pub fn verify(&self, message: &str, key: &[u8]) -> Result<bool, FairPlayError> {
        let mut mac = keyed_mac(key)?;
        mac.update(message.as_bytes());
        Ok(mac.verify_slice(&self.0).is_ok())
    }
}

fn keyed_mac(key: &[u8]) -> Result<HmacSha256, FairPlayError> {
    if key.is_empty() {
        return Err(FairPlayError::InvalidKey);
    }
    HmacSha256::new_from_slice(key).map_err(|_| FairPlayError::InvalidKey)
}

/// Commit to `message` under `key`.
pub fn commit(message: &str, key: &[u8]) -> Result<Commitment, FairPlayError> {
    Commitment::new(message, key)
}

/// Recompute the commitment for `message` under `key` and compare it to
/// `claimed` in constant time.
pub fn verify(message: &str, key: &[u8], claimed: &Commitment) -> Result<bool, FairPlayError> {
    claimed.verify(message, key)
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

impl FromStr for Commitment {
    type Err = FairPlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; COMMITMENT_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes).map_err(|e| {
            FairPlayError::InvalidParameter(format!(
                "commitment must be {} hex characters: {e}",
                COMMITMENT_LEN * 2
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}
