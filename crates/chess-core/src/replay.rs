//! Replay of a parsed move line into a position sequence.

use crate::board::Position;
use crate::san;

/// One step of a replayed game: the position reached, and the token that
/// produced it (`None` for the initial position).
#[derive(Debug, Clone)]
pub struct Ply {
    pub position: Position,
    pub token: Option<String>,
}

/// Walk a move line from the standard initial position.
///
/// A token that fails resolution ends the walk: the sequence accumulated so
/// far is returned and the tail is dropped. Partial replays are expected
/// output, not an error — downstream stages must tolerate short sequences.
pub fn replay(tokens: &[String]) -> Vec<Ply> {
    let mut plies = vec![Ply {
        position: Position::initial(),
        token: None,
    }];

    for token in tokens {
        let current = &plies[plies.len() - 1].position;
        let Ok(mv) = san::resolve(current, token) else {
            break;
        };
        let next = current.apply(mv.from, mv.to, mv.promotion);
        plies.push(Ply {
            position: next,
            token: Some(token.clone()),
        });
    }

    plies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::fen;

    fn tokens(line: &[&str]) -> Vec<String> {
        line.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replay_produces_one_position_per_token_plus_initial() {
        let line = tokens(&["e4", "e5", "Nf3", "Nc6", "Bb5"]);
        let plies = replay(&line);
        assert_eq!(plies.len(), 6);
        assert_eq!(plies[0].token, None);
        assert_eq!(plies[0].position, Position::initial());
        assert_eq!(plies[1].token.as_deref(), Some("e4"));
        assert_eq!(plies[5].position.side_to_move, Color::Black);
        assert_eq!(plies[5].position.fullmove_number, 3);
    }

    #[test]
    fn test_replay_stops_at_first_unresolvable_token() {
        let line = tokens(&["e4", "e5", "Qxf7", "Nc6"]);
        // Qxf7 is impossible after 1. e4 e5: the walk truncates there.
        let plies = replay(&line);
        assert_eq!(plies.len(), 3);
        assert_eq!(plies.last().unwrap().token.as_deref(), Some("e5"));
    }

    #[test]
    fn test_replay_never_exceeds_token_count_plus_one() {
        let line = tokens(&["e4", "junk", "e5"]);
        assert!(replay(&line).len() <= line.len() + 1);
    }

    #[test]
    fn test_castling_rights_monotonic_over_replay() {
        let line = tokens(&[
            "e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "O-O", "Nf6", "d3", "O-O",
        ]);
        let plies = replay(&line);
        assert_eq!(plies.len(), 11);

        let flags = |p: &Position| {
            [
                p.castling.white_kingside,
                p.castling.white_queenside,
                p.castling.black_kingside,
                p.castling.black_queenside,
            ]
        };
        for window in plies.windows(2) {
            let before = flags(&window[0].position);
            let after = flags(&window[1].position);
            for i in 0..4 {
                assert!(before[i] || !after[i], "castling flag reappeared");
            }
        }
        // Both sides castled: all flags gone at the end.
        assert_eq!(
            flags(&plies[10].position),
            [false, false, false, false]
        );
    }

    #[test]
    fn test_replay_en_passant_line() {
        let line = tokens(&["e4", "Nf6", "e5", "d5", "exd6"]);
        let plies = replay(&line);
        assert_eq!(plies.len(), 6);
        let end = &plies[5].position;
        assert_eq!(
            fen::serialize(end),
            "rnbqkb1r/ppp1pppp/3P1n2/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"
        );
    }
}
