//! Fair RPS command line game
//!
//! Plays one round of N-move rock-paper-scissors against the computer. The
//! computer's HMAC is shown before you choose; its key is shown afterwards so
//! the HMAC can be checked with `fair-rps verify`.

mod prompt;
mod table;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fair_rps_core::{Commitment, FairRound, MoveSet, Outcome, SecretKey};
use prompt::Choice;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_ERROR: &str =
    "Error: Invalid input. Please provide an odd number (>=3) of non-repeating strings.";
const USAGE_EXAMPLE: &str =
    "Example: STONE PAPER SCISSORS or STONE SPOCK PAPER LIZARD SCISSORS";

#[derive(Parser)]
#[command(name = "fair-rps", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Moves in circular order: an odd number (>= 3) of distinct labels.
    /// Labels may start with '-'; put options before the first label.
    #[arg(allow_hyphen_values = true)]
    moves: Vec<String>,

    /// Print the revealed round as JSON after the result
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check a revealed key and move against the HMAC shown before the round
    Verify {
        /// Computer's move label, exactly as shown
        #[arg(long = "move")]
        label: String,

        /// Revealed key, hex
        #[arg(long)]
        key: String,

        /// HMAC shown before the round, hex
        #[arg(long)]
        hmac: String,
    },
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Command::Verify { label, key, hmac }) => verify(&label, &key, &hmac),
        None => play(cli.moves, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn play(labels: Vec<String>, json: bool) -> anyhow::Result<ExitCode> {
    let moves = match MoveSet::new(labels) {
        Ok(moves) => moves,
        Err(e) => {
            debug!("rejected move set: {e}");
            eprintln!("{USAGE_ERROR}");
            eprintln!("{USAGE_EXAMPLE}");
            return Ok(ExitCode::from(2));
        }
    };

    let round = FairRound::new(moves).context("failed to start round")?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_round(round, &mut stdin.lock(), &mut stdout.lock(), json)?;
    Ok(ExitCode::SUCCESS)
}

/// Drive one round against `input`/`out`. Returns false if the user exited
/// before choosing.
fn run_round<R: BufRead, W: Write>(
    mut round: FairRound,
    input: &mut R,
    out: &mut W,
    json: bool,
) -> anyhow::Result<bool> {
    let commitment = round.choose_and_commit()?;
    writeln!(out, "HMAC: {commitment}")?;
    table::render(out, round.moves())?;

    let responder = match prompt::read_choice(input, out, round.moves().len())
        .context("failed to read move")?
    {
        Choice::Move(mv) => mv,
        Choice::Exit => {
            info!(round = %round.id(), "round abandoned before answer");
            return Ok(false);
        }
    };

    let outcome = round.submit_response(responder)?;
    let proof = round.reveal()?;

    writeln!(out, "Computer's move: {}", proof.house_label)?;
    writeln!(out, "Your move: {}", proof.moves.labels()[responder])?;
    writeln!(out, "Result: {}", result_line(outcome))?;
    writeln!(out, "Original Key: {}", proof.key.to_hex())?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&proof)?)?;
    }
    Ok(true)
}

fn result_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "Draw",
        Outcome::Win => "You win!",
        Outcome::Lose => "Computer wins!",
    }
}

fn verify(label: &str, key: &str, hmac: &str) -> anyhow::Result<ExitCode> {
    let key = SecretKey::from_hex(key).context("bad --key")?;
    let commitment: Commitment = hmac.parse().context("bad --hmac")?;

    if commitment.verify(label, key.as_bytes())? {
        println!("valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("invalid");
        Ok(ExitCode::FAILURE)
    }
}
