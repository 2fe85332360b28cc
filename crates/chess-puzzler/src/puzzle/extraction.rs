/// Puzzle extraction: scan replayed games for tactical moments

use chess_core::game_data::Game;
use chess_core::replay::{replay, Ply};
use chess_core::{fen, san};
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::cook::cook;
use super::Puzzle;

/// Minimum replayed positions for a game to yield puzzles
pub const MIN_POSITIONS: usize = 12;

/// First candidate ply index (the 9th position of the replay)
pub const SCAN_START: usize = 8;

/// Material swing over two plies, in pawns, that marks a candidate on its own
pub const MATERIAL_DELTA_THRESHOLD: i32 = 2;

/// Maximum solution length in plies
pub const MAX_SOLUTION_LEN: usize = 3;

/// Extra plies skipped after an accepted candidate, so puzzles drawn from
/// the same game never overlap
pub const OVERLAP_SKIP: usize = 5;

/// Rating bounds
pub const MIN_RATING: i32 = 600;
pub const MAX_RATING: i32 = 2000;

/// Mine a whole game batch and shuffle the result.
///
/// Each game is processed independently; a game whose replay comes up short
/// contributes nothing but never aborts the batch. The returned order is
/// random and carries no guarantee beyond membership.
pub fn mine_batch(games: &[Game]) -> Vec<Puzzle> {
    let mut puzzles = Vec::new();
    for game in games {
        let mined = mine_game(game, puzzles.len());
        puzzles.extend(mined);
    }

    puzzles.shuffle(&mut rand::thread_rng());
    puzzles
}

/// Mine one game, assigning puzzle ids starting at `first_id`.
pub fn mine_game(game: &Game, first_id: usize) -> Vec<Puzzle> {
    let plies = replay(&game.moves);
    if plies.len() < MIN_POSITIONS {
        debug!(
            positions = plies.len(),
            moves = game.moves.len(),
            "Replay too short, skipping game"
        );
        return Vec::new();
    }

    let mut puzzles = Vec::new();
    let mut i = SCAN_START;
    while i < plies.len() - 3 {
        match candidate_at(game, &plies, i) {
            Some(delta) => {
                let Some(puzzle) = build_puzzle(game, &plies, i, delta, first_id + puzzles.len())
                else {
                    // A token the replay accepted failed to re-resolve; the
                    // game contributes no further puzzles.
                    warn!(ply = i, "Candidate move failed to resolve, dropping game tail");
                    break;
                };
                puzzles.push(puzzle);
                i += 1 + OVERLAP_SKIP;
            }
            None => i += 1,
        }
    }

    puzzles
}

/// Candidate test at ply `i`: a two-ply material swing at or above the
/// threshold, or a token carrying a check, capture, or promotion marker.
/// Returns the material delta on acceptance.
fn candidate_at(game: &Game, plies: &[Ply], i: usize) -> Option<i32> {
    let delta = plies[i + 2].position.material() - plies[i].position.material();
    let token = &game.moves[i];
    let marked = token.contains(['+', '#', 'x', '=']);

    if delta.abs() >= MATERIAL_DELTA_THRESHOLD || marked {
        Some(delta)
    } else {
        None
    }
}

fn build_puzzle(game: &Game, plies: &[Ply], i: usize, delta: i32, id: usize) -> Option<Puzzle> {
    let end = (i + MAX_SOLUTION_LEN).min(game.moves.len());
    let solution: Vec<String> = game.moves[i..end].to_vec();
    if solution.is_empty() {
        return None;
    }

    let token = &game.moves[i];
    let pre = &plies[i].position;
    let post = &plies[i + 1].position;
    let mv = san::resolve(pre, token).ok()?;

    let tags = cook(pre, post, &mv, token, &solution);
    let rating = rate(delta, token, solution.len());

    Some(Puzzle {
        id,
        fen: fen::serialize(pre),
        side_to_move: pre.side_to_move,
        solution,
        white: game.header_or_unknown("White").to_string(),
        black: game.header_or_unknown("Black").to_string(),
        date: game.header_or_unknown("Date").to_string(),
        event: game.header_or_unknown("Event").to_string(),
        move_number: i / 2 + 1,
        rating,
        tags,
        position: pre.clone(),
    })
}

/// Difficulty estimate from the material swing, a check on the first
/// solution move, and the line length, snapped to 50-point steps.
fn rate(delta: i32, token: &str, solution_len: usize) -> i32 {
    let has_check = token.contains(['+', '#']);
    let raw = 800
        + 80 * delta.abs()
        + if has_check { 100 } else { 0 }
        + if solution_len > 1 { 200 } else { 0 };
    let snapped = ((raw as f64 / 50.0).round() as i32) * 50;
    snapped.clamp(MIN_RATING, MAX_RATING)
}
