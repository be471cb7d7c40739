//! Ordered, odd-sized move sets.

use crate::error::FairPlayError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Index into a `MoveSet`; the canonical representation of a move.
pub type Move = usize;

/// Smallest playable set size.
pub const MIN_MOVES: usize = 3;

/// Circularly ordered, duplicate-free move labels of odd length >= 3.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and wrap a list of labels. Labels are case-sensitive.
    pub fn new<I, S>(labels: I) -> Result<Self, FairPlayError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(FairPlayError::InvalidMoveSet(format!(
                "need at least {MIN_MOVES} moves, got {}",
                labels.len()
            )));
        }
        if labels.len() % 2 == 0 {
            return Err(FairPlayError::InvalidMoveSet(format!(
                "need an odd number of moves, got {}",
                labels.len()
            )));
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label) {
                return Err(FairPlayError::InvalidMoveSet(format!(
                    "duplicate move '{label}'"
                )));
            }
        }

        Ok(Self(labels))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Label for a move, if the index is in range
    pub fn label(&self, mv: Move) -> Option<&str> {
        self.0.get(mv).map(String::as_str)
    }

    /// Index of a label, if present
    pub fn position(&self, label: &str) -> Option<Move> {
        self.0.iter().position(|l| l == label)
    }

    /// Check that `mv` indexes into this set
    pub fn check(&self, mv: Move) -> Result<Move, FairPlayError> {
        if mv < self.len() {
            Ok(mv)
        } else {
            Err(FairPlayError::InvalidMove {
                index: mv,
                size: self.len(),
            })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = FairPlayError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.0
    }
}
