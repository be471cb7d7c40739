//! Move sets and outcome rules.

mod moves;
mod rules;

pub use moves::{Move, MoveSet, MIN_MOVES};
pub use rules::{build_matrix, classify, CircularRules, Outcome, OutcomeMatrix};
