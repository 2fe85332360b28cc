//! Integration tests: raw movetext through the full mining pipeline.

mod common;

use std::collections::HashSet;

use chess_core::{fen, pgn, replay};
use chess_puzzler::mine_batch;

#[test]
fn test_movetext_to_puzzle_batch() {
    let games = pgn::parse_games(common::OPERA_GAME);
    assert_eq!(games.len(), 1);

    let puzzles = mine_batch(&games);
    assert!(!puzzles.is_empty());

    for puzzle in &puzzles {
        assert!((600..=2000).contains(&puzzle.rating));
        assert!(!puzzle.tags.is_empty());
        assert!(!puzzle.solution.is_empty());

        // The serialized position round-trips and agrees with the carried
        // Position value.
        let parsed = fen::parse(&puzzle.fen).expect("puzzle FEN must parse");
        assert_eq!(parsed, puzzle.position);
        assert_eq!(parsed.side_to_move, puzzle.side_to_move);

        // Display metadata comes straight from the game headers.
        assert_eq!(puzzle.white, "Morphy, Paul");
        assert_eq!(puzzle.black, "Duke Karl / Count Isouard");
        assert_eq!(puzzle.date, "1858.11.02");
        assert_eq!(puzzle.event, "Paris Opera");
    }
}

#[test]
fn test_noise_chunks_are_dropped_but_batch_survives() {
    let raw = format!("{}\n\n{}", common::NOISE_CHUNK, common::OPERA_GAME);
    let games = pgn::parse_games(&raw);
    assert_eq!(games.len(), 1, "the 5-move fragment must be discarded");

    let puzzles = mine_batch(&games);
    assert!(!puzzles.is_empty());
}

#[test]
fn test_short_movetext_alone_yields_empty_batch() {
    let games = pgn::parse_games(common::NOISE_CHUNK);
    assert!(games.is_empty());
    assert!(mine_batch(&games).is_empty());
}

#[test]
fn test_shuffled_batch_is_a_permutation() {
    let raw = common::opera_batch(3);
    let games = pgn::parse_games(&raw);
    assert_eq!(games.len(), 3);

    let puzzles = mine_batch(&games);
    let per_game = mine_batch(&games[..1]).len();
    assert_eq!(puzzles.len(), per_game * 3);

    // Order is unconstrained; ids must still be exactly 0..n.
    let ids: HashSet<usize> = puzzles.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), puzzles.len());
    assert_eq!(ids, (0..puzzles.len()).collect::<HashSet<_>>());
}

#[test]
fn test_replay_covers_the_full_game() {
    let games = pgn::parse_games(common::OPERA_GAME);
    let plies = replay::replay(&games[0].moves);
    // 33 tokens all resolve: initial position plus one per ply.
    assert_eq!(plies.len(), 34);

    // The final position is the mate delivered by 17. Rd8#.
    let end = &plies[33].position;
    assert!(chess_core::movegen::is_in_check(
        end,
        chess_core::Color::Black
    ));
    assert_eq!(plies[33].token.as_deref(), Some("Rd8#"));
}

#[test]
fn test_puzzle_batch_serializes_to_json() {
    let games = pgn::parse_games(common::OPERA_GAME);
    let puzzles = mine_batch(&games);

    let json = serde_json::to_string(&puzzles).expect("puzzle batch must serialize");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value.as_array().unwrap()[0];

    assert!(first.get("fen").is_some());
    assert!(first.get("rating").is_some());
    assert!(first["tags"].as_array().is_some());
    // Tag labels use the lower-camel wire form.
    let tags: Vec<&str> = first["tags"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t.as_str())
        .collect();
    for tag in tags {
        assert!(
            ["check", "capture", "promotion", "fork", "combination", "tactic"].contains(&tag)
        );
    }
}
