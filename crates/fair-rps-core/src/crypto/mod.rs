//! Cryptographic primitives for the fair-choice round.
//!
//! This module provides:
//! - SecretKey and the OS-backed key provider
//! - Commitment, an HMAC-SHA256 tag binding the house move to the key

mod commitment;
mod key;

pub use commitment::{commit, verify, Commitment, COMMITMENT_LEN};
pub use key::{generate_key, generate_key_with, SecretKey, DEFAULT_KEY_BITS};
