//! Round protocol: state machine, ids and the revealed proof.

mod proof;
mod round;
mod types;

pub use proof::{ResponseRecord, RoundProof};
pub use round::FairRound;
pub use types::{RoundId, RoundState};
