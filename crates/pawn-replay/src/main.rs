//! pawn-replay - replays games from a PGN file.
//!
//! Reads a plain-text PGN file, then lists its games, prints one as JSON,
//! or replays one up to a given ply and prints the board.

mod config;

use anyhow::{bail, Context};
use clap::Parser;
use config::ReplayConfig;
use pawn_engine::{Board, Replay, Resolver};
use pawn_pgn::{parse_all, PgnRecord};
use std::fmt::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replay chess games stored as PGN.
#[derive(Parser)]
#[command(name = "pawn-replay")]
#[command(about = "Replay chess games stored as PGN")]
struct Cli {
    /// PGN file to read (plain text)
    file: PathBuf,

    /// List the games in the file
    #[arg(short, long)]
    list: bool,

    /// Game to show, counting from 1
    #[arg(short, long, default_value = "1")]
    game: usize,

    /// Stop after this many half-moves (default: the whole game)
    #[arg(short, long)]
    ply: Option<usize>,

    /// Print the game record as JSON instead of replaying it
    #[arg(long)]
    json: bool,

    /// Configuration file (default: pawn.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = ReplayConfig::load(cli.config.as_deref())?;
    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let records = parse_all(&text).with_context(|| format!("in {}", cli.file.display()))?;
    tracing::info!(file = %cli.file.display(), games = records.len(), "loaded PGN");

    if cli.list {
        print!("{}", list_games(&records));
        return Ok(());
    }

    let Some(record) = cli.game.checked_sub(1).and_then(|i| records.get(i)) else {
        bail!(
            "game {} not found; {} contains {} game(s)",
            cli.game,
            cli.file.display(),
            records.len()
        );
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    let mut replay = Replay::with_resolver(
        Board::new(),
        record.turns(),
        Resolver::new(config.resolver),
    );
    let target = cli.ply.unwrap_or(replay.len());
    let stopped = replay.seek(target).err();

    print!("{}", report(record, &replay));
    if let Some(err) = stopped {
        bail!("replay stopped at ply {}: {}", replay.ply() + 1, err);
    }
    Ok(())
}

/// One line per game: "N. White vs Black (result)".
fn list_games(records: &[PgnRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let result = record.outcome.map_or("*", |o| o.as_str());
        let _ = writeln!(out, "{}. {} ({})", i + 1, record.matchup(), result);
    }
    out
}

/// The matchup, the board at the cursor, and the moves played so far.
fn report(record: &PgnRecord, replay: &Replay) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record.matchup());
    for key in ["Event", "Date"] {
        if let Some(value) = record.tag(key) {
            let _ = writeln!(out, "{}: {}", key, value);
        }
    }
    let _ = writeln!(out);
    let _ = write!(out, "{}", replay.board());
    let _ = writeln!(out);

    let played = &replay.tokens()[..replay.ply()];
    let _ = writeln!(out, "{}", numbered(played));
    if replay.is_finished() {
        if let Some(outcome) = record.outcome {
            let _ = writeln!(out, "Result: {}", outcome);
        }
    } else {
        let _ = writeln!(
            out,
            "Ply {}/{}, {} to move",
            replay.ply(),
            replay.len(),
            replay.board().side_to_move()
        );
    }
    out
}

/// Formats half-moves as numbered movetext: "1. e4 e5 2. Nf3".
fn numbered(tokens: &[String]) -> String {
    tokens
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}
