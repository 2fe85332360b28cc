//! Integration tests: the solving-session surface over a mined puzzle.
//!
//! An interactive consumer asks for reachable squares, plays a move, and
//! validates it against the puzzle solution. No view concerns here, just the
//! three functions the presentation layer is given.

mod common;

use chess_core::movegen::pseudo_legal_moves;
use chess_core::{pgn, san};
use chess_puzzler::mine_batch;

#[test]
fn test_solving_a_mined_puzzle_end_to_end() {
    let games = pgn::parse_games(common::OPERA_GAME);
    let puzzles = mine_batch(&games);
    assert!(!puzzles.is_empty());

    for puzzle in &puzzles {
        let expected = &puzzle.solution[0];
        let mv = san::resolve(&puzzle.position, expected)
            .expect("the recorded solution must resolve in the puzzle position");

        // The solver clicks the source square: the destination must be
        // among the offered squares.
        let destinations = pseudo_legal_moves(&puzzle.position, mv.from);
        assert!(destinations.contains(&mv.to));

        // Playing the move produces the next position and a notation that
        // matches the recorded solution token.
        let (next, notation) = san::play_move(&puzzle.position, mv.from, mv.to, mv.promotion);
        assert_eq!(next.side_to_move, puzzle.side_to_move.opponent());
        assert!(san::matches_solution(
            &notation,
            expected,
            &puzzle.position,
            mv.from,
            mv.to
        ));
    }
}

#[test]
fn test_wrong_move_is_rejected() {
    let games = pgn::parse_games(common::OPERA_GAME);
    let puzzles = mine_batch(&games);
    let puzzle = &puzzles[0];

    let expected = &puzzle.solution[0];
    let mv = san::resolve(&puzzle.position, expected).unwrap();

    // Any other reachable destination from the same square must not match.
    for other in pseudo_legal_moves(&puzzle.position, mv.from) {
        if other == mv.to {
            continue;
        }
        let (_, notation) = san::play_move(&puzzle.position, mv.from, other, None);
        assert!(!san::matches_solution(
            &notation,
            expected,
            &puzzle.position,
            mv.from,
            other
        ));
    }
}
