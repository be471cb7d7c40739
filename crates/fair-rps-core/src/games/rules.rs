//! Circular single-offset outcome rule.
//!
//! For a set of odd size `n` with `half = n / 2`, move `r` wins against
//! exactly one move: the one `half` positions ahead of it, circularly.
//! Every other distinct move beats `r`. For `n = 3` this is the usual
//! rock-paper-scissors cycle; for larger `n` the tournament is not
//! balanced (each move has 1 win and `n - 2` losses).

use super::moves::{Move, MoveSet, MIN_MOVES};
use crate::error::FairPlayError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome from the perspective of the first (reference) move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    Win,
    Lose,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Rule engine for one set size. Holds no state besides the size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircularRules {
    size: usize,
}

impl CircularRules {
    /// Rules for `size` moves; `size` must be odd and at least 3.
    pub fn new(size: usize) -> Result<Self, FairPlayError> {
        if size < MIN_MOVES || size % 2 == 0 {
            return Err(FairPlayError::InvalidMoveSet(format!(
                "set size must be odd and at least {MIN_MOVES}, got {size}"
            )));
        }
        Ok(Self { size })
    }

    /// Rules for an already validated move set
    pub fn for_moves(moves: &MoveSet) -> Self {
        Self { size: moves.len() }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset between a move and the one it beats
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// The only move `reference` beats
    pub fn beaten_by(&self, reference: Move) -> Move {
        (reference + self.half()) % self.size
    }

    /// Classify `other` against `reference`, from `reference`'s side.
    ///
    /// Both indices must be below `size()`.
    pub fn classify(&self, reference: Move, other: Move) -> Outcome {
        debug_assert!(reference < self.size && other < self.size);
        if reference == other {
            Outcome::Draw
        } else if self.beaten_by(reference) == other {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// Full table of `classify(row, col)`
    pub fn matrix(&self) -> OutcomeMatrix {
        let cells = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| self.classify(row, col)))
            .collect();
        OutcomeMatrix {
            size: self.size,
            cells,
        }
    }
}

/// Classify two moves of a set with `set_size` moves.
pub fn classify(reference: Move, other: Move, set_size: usize) -> Result<Outcome, FairPlayError> {
    let rules = CircularRules::new(set_size)?;
    for mv in [reference, other] {
        if mv >= set_size {
            return Err(FairPlayError::InvalidMove {
                index: mv,
                size: set_size,
            });
        }
    }
    Ok(rules.classify(reference, other))
}

/// Outcome table for a move set, used for the help display.
pub fn build_matrix(moves: &MoveSet) -> OutcomeMatrix {
    CircularRules::for_moves(moves).matrix()
}

/// `size` x `size` table; cell `[row][col]` is `classify(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutcomeMatrix {
    size: usize,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: Move, col: Move) -> Option<Outcome> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Outcome]> {
        self.cells.chunks(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn odd_size() -> impl Strategy<Value = usize> {
        (1usize..=40).prop_map(|k| 2 * k + 1)
    }

    #[test]
    fn test_classic_rps_cycle() {
        // ROCK=0, PAPER=1, SCISSORS=2, half=1
        assert_eq!(classify(0, 1, 3).unwrap(), Outcome::Win);
        assert_eq!(classify(1, 2, 3).unwrap(), Outcome::Win);
        assert_eq!(classify(2, 0, 3).unwrap(), Outcome::Win);
        assert_eq!(classify(1, 0, 3).unwrap(), Outcome::Lose);
        assert_eq!(classify(0, 2, 3).unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_responder_paper_vs_house_rock_loses() {
        // (1 + 1) % 3 = 2 != 0, so the reference move loses
        assert_eq!(classify(1, 0, 3).unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_five_move_set() {
        assert_eq!(classify(2, 2, 5).unwrap(), Outcome::Draw);
        assert_eq!(classify(2, 4, 5).unwrap(), Outcome::Win);
        assert_eq!(classify(2, 3, 5).unwrap(), Outcome::Lose);
        assert_eq!(classify(2, 0, 5).unwrap(), Outcome::Lose);
        assert_eq!(classify(2, 1, 5).unwrap(), Outcome::Lose);
        // wraps around
        assert_eq!(classify(4, 1, 5).unwrap(), Outcome::Win);
    }

    #[test]
    fn test_seven_move_half() {
        let rules = CircularRules::new(7).unwrap();
        assert_eq!(rules.half(), 3);
        assert_eq!(rules.beaten_by(5), 1);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        for size in [0, 1, 2, 4, 6] {
            assert!(
                matches!(CircularRules::new(size), Err(FairPlayError::InvalidMoveSet(_))),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn test_classify_rejects_out_of_range() {
        assert!(matches!(
            classify(3, 0, 3),
            Err(FairPlayError::InvalidMove { index: 3, size: 3 })
        ));
        assert!(matches!(
            classify(0, 9, 3),
            Err(FairPlayError::InvalidMove { index: 9, size: 3 })
        ));
    }

    #[test]
    fn test_matrix_for_three_moves() {
        let moves = MoveSet::new(["ROCK", "PAPER", "SCISSORS"]).unwrap();
        let matrix = build_matrix(&moves);

        use Outcome::*;
        let rows: Vec<&[Outcome]> = matrix.rows().collect();
        assert_eq!(
            rows,
            vec![
                &[Draw, Win, Lose][..],
                &[Lose, Draw, Win][..],
                &[Win, Lose, Draw][..],
            ]
        );
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_outcome_display_pads() {
        assert_eq!(format!("{:<6}|", Outcome::Win), "Win   |");
    }

    proptest! {
        #[test]
        fn prop_diagonal_is_draw((size, i) in odd_size().prop_flat_map(|n| (Just(n), 0..n))) {
            prop_assert_eq!(classify(i, i, size).unwrap(), Outcome::Draw);
        }

        #[test]
        fn prop_exactly_one_win_per_move((size, i) in odd_size().prop_flat_map(|n| (Just(n), 0..n))) {
            let wins: Vec<Move> = (0..size)
                .filter(|&j| classify(i, j, size).unwrap() == Outcome::Win)
                .collect();
            prop_assert_eq!(wins, vec![(i + size / 2) % size]);

            let losses = (0..size)
                .filter(|&j| classify(i, j, size).unwrap() == Outcome::Lose)
                .count();
            prop_assert_eq!(losses, size - 2);
        }

        #[test]
        fn prop_matrix_matches_classify(size in odd_size()) {
            let matrix = CircularRules::new(size).unwrap().matrix();
            prop_assert_eq!(matrix.size(), size);
            for row in 0..size {
                for col in 0..size {
                    prop_assert_eq!(matrix.get(row, col), Some(classify(row, col, size).unwrap()));
                }
            }
        }
    }
}
