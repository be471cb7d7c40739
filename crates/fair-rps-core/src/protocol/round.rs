//! One commit -> respond -> reveal round.

use super::{ResponseRecord, RoundId, RoundProof, RoundState};
use crate::crypto::{commit, generate_key, Commitment, SecretKey, DEFAULT_KEY_BITS};
use crate::error::FairPlayError;
use crate::games::{CircularRules, Move, MoveSet, Outcome};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

enum Phase {
    Idle,
    Committed {
        house_move: Move,
        commitment: Commitment,
        response: Option<ResponseRecord>,
    },
    Revealed {
        house_move: Move,
        commitment: Commitment,
    },
}

/// A single fair-choice round between the house and a responder.
///
/// The house move comes from `R`, a general-purpose generator that can be
/// swapped for a seeded one in tests. The HMAC key always comes from the
/// OS CSPRNG and cannot be injected. Each round owns a fresh key; never
/// reuse a round.
///
/// Calling [`reveal`](Self::reveal) before
/// [`submit_response`](Self::submit_response) is allowed but hands the
/// responder the house move, so callers must respond first.
pub struct FairRound<R = StdRng> {
    id: RoundId,
    moves: MoveSet,
    rules: CircularRules,
    key: SecretKey,
    rng: R,
    phase: Phase,
}

impl FairRound<StdRng> {
    /// Start a round with a house generator seeded from the OS.
    pub fn new(moves: MoveSet) -> Result<Self, FairPlayError> {
        let rng = StdRng::from_rng(OsRng)
            .map_err(|e| FairPlayError::EntropySourceUnavailable(e.to_string()))?;
        Self::with_rng(moves, rng)
    }
}

impl<R: Rng> FairRound<R> {
    /// Start a round with an explicit house-move generator.
    pub fn with_rng(moves: MoveSet, rng: R) -> Result<Self, FairPlayError> {
        let key = generate_key(DEFAULT_KEY_BITS)?;
        let rules = CircularRules::for_moves(&moves);
        Ok(Self {
            id: RoundId::new(),
            moves,
            rules,
            key,
            rng,
            phase: Phase::Idle,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn rules(&self) -> CircularRules {
        self.rules
    }

    pub fn state(&self) -> RoundState {
        match self.phase {
            Phase::Idle => RoundState::Idle,
            Phase::Committed { .. } => RoundState::Committed,
            Phase::Revealed { .. } => RoundState::Revealed,
        }
    }

    /// The commitment, once the house has made one
    pub fn commitment(&self) -> Option<Commitment> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Committed { commitment, .. } | Phase::Revealed { commitment, .. } => {
                Some(*commitment)
            }
        }
    }

    /// The house move label, visible once a response was submitted and
    /// after reveal
    pub fn house_label(&self) -> Option<&str> {
        match &self.phase {
            Phase::Committed {
                house_move,
                response: Some(_),
                ..
            }
            | Phase::Revealed { house_move, .. } => self.moves.label(*house_move),
            _ => None,
        }
    }

    /// Pick the house move and commit to it. Idle -> Committed.
    pub fn choose_and_commit(&mut self) -> Result<Commitment, FairPlayError> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(self.state_error("commit"));
        }

        let house_move = self.rng.gen_range(0..self.moves.len());
        let label = &self.moves.labels()[house_move];
        let commitment = commit(label, self.key.as_bytes())?;

        info!(round = %self.id, %commitment, "house committed");
        self.phase = Phase::Committed {
            house_move,
            commitment,
            response: None,
        };
        Ok(commitment)
    }

    /// Record the responder's move and judge it against the house move.
    ///
    /// The outcome is from the responder's side. Only one response is
    /// accepted per round.
    pub fn submit_response(&mut self, responder_move: Move) -> Result<Outcome, FairPlayError> {
        let state = self.state();
        let Phase::Committed {
            house_move,
            response,
            ..
        } = &mut self.phase
        else {
            return Err(FairPlayError::ProtocolState {
                operation: "submit a response",
                state: state.as_str(),
            });
        };
        if response.is_some() {
            return Err(FairPlayError::ProtocolState {
                operation: "submit a response",
                state: "answered",
            });
        }

        let responder_move = self.moves.check(responder_move)?;
        let outcome = self.rules.classify(responder_move, *house_move);
        *response = Some(ResponseRecord {
            responder_move,
            responder_label: self.moves.labels()[responder_move].clone(),
            outcome,
        });

        info!(round = %self.id, %outcome, "responder answered");
        Ok(outcome)
    }

    /// Disclose the house move and key. Committed -> Revealed.
    pub fn reveal(&mut self) -> Result<RoundProof, FairPlayError> {
        let (house_move, commitment, response) = match &self.phase {
            Phase::Committed {
                house_move,
                commitment,
                response,
            } => (*house_move, *commitment, response.clone()),
            _ => return Err(self.state_error("reveal")),
        };

        if response.is_none() {
            warn!(round = %self.id, "revealing before any response was submitted");
        }
        self.phase = Phase::Revealed {
            house_move,
            commitment,
        };

        let house_label = self.moves.labels()[house_move].clone();
        info!(round = %self.id, house_move = %house_label, "house revealed");

        Ok(RoundProof {
            round_id: self.id,
            moves: self.moves.clone(),
            commitment,
            house_move,
            house_label,
            key: self.key.clone(),
            response,
        })
    }

    fn state_error(&self, operation: &'static str) -> FairPlayError {
        FairPlayError::ProtocolState {
            operation,
            state: self.state().as_str(),
        }
    }
}
