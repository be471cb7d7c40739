//! Interactive move prompt.

use fair_rps_core::Move;
use std::io::{self, BufRead, Write};

/// What the user typed at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// 0-based move index
    Move(Move),
    Exit,
}

/// Parse a 1-based menu entry; `0` means exit.
pub fn parse_choice(input: &str, size: usize) -> Option<Choice> {
    match input.trim().parse::<usize>().ok()? {
        0 => Some(Choice::Exit),
        n if n <= size => Some(Choice::Move(n - 1)),
        _ => None,
    }
}

/// Prompt until the user enters a valid choice. End of input counts as exit.
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    size: usize,
) -> io::Result<Choice> {
    let mut line = String::new();
    loop {
        write!(out, "Enter your move (1 - {size}, 0 - Exit): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Choice::Exit);
        }
        if let Some(choice) = parse_choice(&line, size) {
            return Ok(choice);
        }
    }
}
