//! Revealed round data, enough for anyone to re-check the round.

use super::RoundId;
use crate::crypto::{Commitment, SecretKey};
use crate::error::FairPlayError;
use crate::games::{CircularRules, Move, MoveSet, Outcome};
use serde::{Deserialize, Serialize};

/// The responder's recorded answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub responder_move: Move,
    pub responder_label: String,
    /// From the responder's side
    pub outcome: Outcome,
}

/// Everything disclosed at reveal time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundProof {
    pub round_id: RoundId,
    pub moves: MoveSet,
    pub commitment: Commitment,
    pub house_move: Move,
    pub house_label: String,
    pub key: SecretKey,
    /// `None` when the house revealed before any answer was submitted
    pub response: Option<ResponseRecord>,
}

impl RoundProof {
    /// Check the proof against its own recorded commitment.
    pub fn verify(&self) -> Result<bool, FairPlayError> {
        self.verify_against(&self.commitment)
    }

    /// Check the proof against the commitment the responder was shown
    /// before answering.
    ///
    /// Fails only if the revealed key is empty. A label that does not match
    /// its index, a tag mismatch, or an outcome that does not follow from
    /// the two moves all yield `Ok(false)`.
    pub fn verify_against(&self, disclosed: &Commitment) -> Result<bool, FairPlayError> {
        if self.moves.label(self.house_move) != Some(self.house_label.as_str()) {
            return Ok(false);
        }
        if !disclosed.verify(&self.house_label, self.key.as_bytes())? {
            return Ok(false);
        }

        if let Some(response) = &self.response {
            if self.moves.label(response.responder_move) != Some(response.responder_label.as_str())
            {
                return Ok(false);
            }
            let rules = CircularRules::for_moves(&self.moves);
            if rules.classify(response.responder_move, self.house_move) != response.outcome {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
