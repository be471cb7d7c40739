//! Help table: outcome of every user move against every house move.

use fair_rps_core::games::{build_matrix, MoveSet};
use std::io::{self, Write};

const CORNER: &str = "v PC\\User >";

/// Render the outcome table. Row `i`, column `j` is the outcome for the
/// user playing `i` against `j`.
pub fn render<W: Write>(out: &mut W, moves: &MoveSet) -> io::Result<()> {
    let matrix = build_matrix(moves);
    let rule = format!("+{}+", "-".repeat(moves.len() * 11 + 16));

    write!(out, "| {CORNER:<8}")?;
    for label in moves.iter() {
        write!(out, "| {label:<8}")?;
    }
    writeln!(out, "|")?;
    writeln!(out, "{rule}")?;

    for (label, row) in moves.iter().zip(matrix.rows()) {
        write!(out, "| {label:<11}")?;
        for outcome in row {
            write!(out, "| {outcome:<8}")?;
        }
        writeln!(out, "|")?;
        writeln!(out, "{rule}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(labels: &[&str]) -> String {
        let moves = MoveSet::new(labels.iter().copied()).unwrap();
        let mut buf = Vec::new();
        render(&mut buf, &moves).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_classic_table() {
        let table = rendered(&["ROCK", "PAPER", "SCISSORS"]);
        let lines: Vec<&str> = table.lines().collect();
        let rule = format!("+{}+", "-".repeat(49));

        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "| v PC\\User >| ROCK    | PAPER   | SCISSORS|"
        );
        assert_eq!(lines[1], rule);
        assert_eq!(
            lines[2],
            "| ROCK       | Draw    | Win     | Lose    |"
        );
        assert_eq!(
            lines[4],
            "| PAPER      | Lose    | Draw    | Win     |"
        );
        assert_eq!(
            lines[6],
            "| SCISSORS   | Win     | Lose    | Draw    |"
        );
        assert_eq!(lines[7], rule);
    }

    #[test]
    fn test_long_labels_are_not_truncated() {
        let table = rendered(&["ROCK", "PAPER", "SCISSORS", "LIZARD", "SPOCK_THE_VULCAN"]);
        assert!(table.contains("| SPOCK_THE_VULCAN|"));
    }

    #[test]
    fn test_row_count_grows_with_set() {
        let table = rendered(&["A", "B", "C", "D", "E", "F", "G"]);
        // header + rule, then one row and one rule per move
        assert_eq!(table.lines().count(), 2 + 2 * 7);
    }
}
