//! PGN parsing utilities — lightweight regex-based parser.
//!
//! Splits a raw movetext blob into per-game records. Comments, variations,
//! and annotation glyphs are discarded, not interpreted.

use std::collections::HashMap;

use regex::Regex;

use crate::game_data::Game;

/// A chunk must yield at least this many valid move tokens to count as a
/// game; shorter chunks are treated as noise and dropped.
const MIN_MOVES_PER_GAME: usize = 10;

/// Parse a text blob of zero or more games into `Game` records.
///
/// Chunks start at each metadata line whose key is `Event`. Chunks with
/// fewer than 10 valid move tokens are silently discarded.
pub fn parse_games(raw: &str) -> Vec<Game> {
    let event_re = Regex::new(r#"(?m)^\[Event\b"#).unwrap();

    let starts: Vec<usize> = event_re.find_iter(raw).map(|m| m.start()).collect();

    let mut games = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(raw.len());
        if let Some(game) = parse_chunk(&raw[start..end]) {
            games.push(game);
        }
    }
    games
}

/// Parse one game chunk; `None` when it does not reach the move minimum.
fn parse_chunk(chunk: &str) -> Option<Game> {
    let header_re = Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).unwrap();

    let mut headers = HashMap::new();
    for cap in header_re.captures_iter(chunk) {
        headers.insert(cap[1].to_string(), cap[2].to_string());
    }

    let moves = extract_moves(chunk);
    if moves.len() < MIN_MOVES_PER_GAME {
        return None;
    }

    Some(Game::new(headers, moves))
}

/// Extract move tokens from a chunk (after removing headers, comments,
/// variations, and annotation glyphs).
fn extract_moves(chunk: &str) -> Vec<String> {
    // Remove header lines.
    let header_re = Regex::new(r"\[[^\]]*\]").unwrap();
    let no_headers = header_re.replace_all(chunk, " ");

    // Remove comments.
    let comment_re = Regex::new(r"\{[^}]*\}").unwrap();
    let no_comments = comment_re.replace_all(&no_headers, " ");

    // Remove variations.
    let variation_re = Regex::new(r"\([^)]*\)").unwrap();
    let no_variations = variation_re.replace_all(&no_comments, " ");

    // Remove numeric annotation glyphs and move numbers, including the
    // elided Black-to-move form "12...".
    let nag_re = Regex::new(r"\$\d+").unwrap();
    let no_nags = nag_re.replace_all(&no_variations, " ");
    let move_number_re = Regex::new(r"\d+\.(\.\.)?").unwrap();
    let cleaned = move_number_re.replace_all(&no_nags, " ");

    let move_re =
        Regex::new(r"^(?:O-O(?:-O)?|[KQRBNP]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?)[+#]?$")
            .unwrap();

    cleaned
        .split_whitespace()
        .filter(|token| !is_result_marker(token) && !is_move_number(token))
        .filter(|token| move_re.is_match(token))
        .map(|token| token.to_string())
        .collect()
}

fn is_result_marker(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn is_move_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
