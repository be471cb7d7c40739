//! Error taxonomy for the fair-choice core.

use thiserror::Error;

/// Errors from key generation, commitments, rules and the round protocol.
///
/// None of these are transient: they are either caller errors or an
/// unusable entropy source, so nothing in the crate retries on them.
#[derive(Debug, Error)]
pub enum FairPlayError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid move set: {0}")]
    InvalidMoveSet(String),

    #[error("Invalid move: index {index} is outside 0..{size}")]
    InvalidMove { index: usize, size: usize },

    #[error("Invalid key: HMAC key must not be empty")]
    InvalidKey,

    #[error("Entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    #[error("Protocol state error: cannot {operation} while {state}")]
    ProtocolState {
        operation: &'static str,
        state: &'static str,
    },
}
