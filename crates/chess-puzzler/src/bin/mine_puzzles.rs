//! Mine tactical puzzles from a movetext database.
//!
//! Usage:
//!   cargo run --bin mine-puzzles -- games.pgn [puzzles.json]
//!
//! Writes the mined puzzle batch as JSON to the output path, or to stdout
//! when no output path is given.

use std::env;
use std::fs;

use anyhow::{bail, Context};
use tracing::info;

use chess_core::pgn;
use chess_puzzler::mine_batch;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(input_path) = args.get(1) else {
        bail!("usage: mine-puzzles <games.pgn> [puzzles.json]");
    };
    let output_path = args.get(2);

    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {input_path}"))?;

    let games = pgn::parse_games(&raw);
    info!(games = games.len(), "Parsed game database");

    let puzzles = mine_batch(&games);
    info!(puzzles = puzzles.len(), "Mining complete");

    let json = serde_json::to_string_pretty(&puzzles)?;
    match output_path {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {path}"))?;
            info!(path = %path, "Puzzle batch written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
