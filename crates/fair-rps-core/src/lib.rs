//! Fair RPS Core Library
//!
//! Commit-reveal protocol for generalized rock-paper-scissors over any odd,
//! circularly ordered set of moves. The house commits to its move with an
//! HMAC-SHA256 tag before the responder answers, then reveals the key so the
//! tag can be recomputed.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, SecretKey};
pub use error::FairPlayError;
pub use games::{CircularRules, Move, MoveSet, Outcome, OutcomeMatrix};
pub use protocol::{FairRound, RoundId, RoundProof, RoundState};
