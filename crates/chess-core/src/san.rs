//! Algebraic-notation resolution and rendering.

use thiserror::Error;

use crate::board::{PieceKind, Position, Square};
use crate::movegen::pseudo_legal_moves;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    #[error("'{0}' has no destination square")]
    BadDestination(String),

    #[error("no piece can play '{0}' in this position")]
    Unresolvable(String),
}

/// A notated move resolved to a concrete board transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Map a movetext token to a concrete (from, to, promotion) transition.
///
/// Candidates are scanned row-major from rank 8 / file a and the first piece
/// whose pseudo-legal destinations contain the target wins. That tie-break is
/// deliberate: positions ambiguous beyond standard disambiguation are not
/// expected in well-formed input.
pub fn resolve(pos: &Position, token: &str) -> Result<ResolvedMove, SanError> {
    let stripped = token.trim_end_matches(['+', '#', '!', '?']);

    // Castling maps straight to the king's two-square hop, no search.
    if stripped == "O-O" || stripped == "O-O-O" {
        let home_row = match pos.side_to_move {
            crate::board::Color::White => 7,
            crate::board::Color::Black => 0,
        };
        let to_col = if stripped == "O-O" { 6 } else { 2 };
        return Ok(ResolvedMove {
            from: Square::new(home_row, 4),
            to: Square::new(home_row, to_col),
            promotion: None,
        });
    }

    // Promotion suffix.
    let (body, promotion) = match stripped.split_once('=') {
        Some((body, promo)) => {
            let kind = promo.chars().next().and_then(PieceKind::from_letter);
            (body, kind)
        }
        None => (stripped, None),
    };

    // Leading piece letter; absence implies a pawn move.
    let mut chars: Vec<char> = body.chars().collect();
    let kind = match chars.first().copied().and_then(PieceKind::from_letter) {
        Some(k) => {
            chars.remove(0);
            k
        }
        None => PieceKind::Pawn,
    };

    // The capture marker carries no information the board lacks.
    chars.retain(|&c| c != 'x');

    if chars.len() < 2 {
        return Err(SanError::BadDestination(token.to_string()));
    }
    let dest_str: String = chars[chars.len() - 2..].iter().collect();
    let dest = Square::from_algebraic(&dest_str)
        .ok_or_else(|| SanError::BadDestination(token.to_string()))?;

    // Interior characters are disambiguation hints.
    let hints = &chars[..chars.len() - 2];
    let hint_col = hints
        .iter()
        .find(|c| c.is_ascii_lowercase())
        .map(|&c| c as u8 - b'a');
    let hint_row = hints
        .iter()
        .find(|c| c.is_ascii_digit())
        .map(|&c| 7 - (c as u8 - b'1'));

    for (sq, piece) in pos.pieces() {
        if piece.kind != kind || piece.color != pos.side_to_move {
            continue;
        }
        if hint_col.is_some_and(|c| c != sq.col) || hint_row.is_some_and(|r| r != sq.row) {
            continue;
        }
        if pseudo_legal_moves(pos, sq).contains(&dest) {
            return Ok(ResolvedMove {
                from: sq,
                to: dest,
                promotion,
            });
        }
    }

    Err(SanError::Unresolvable(token.to_string()))
}

/// Render a concrete move in minimal notated form.
///
/// Never emits disambiguation characters for non-pawn pieces; consumers that
/// compare notations fall back to square-level matching (`matches_solution`).
pub fn build(pre: &Position, from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let Some(piece) = pre.piece_at(from) else {
        return String::new();
    };

    if piece.kind == PieceKind::King && (from.col as i8 - to.col as i8).abs() == 2 {
        return if to.col > from.col {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let mut out = String::new();
    let capture = pre.piece_at(to).is_some();

    if piece.kind == PieceKind::Pawn {
        // Diagonal pawn moves are captures, en passant included.
        if from.col != to.col {
            out.push(from.file_char());
            out.push('x');
        }
    } else {
        out.push(piece.kind.letter());
        if capture {
            out.push('x');
        }
    }

    out.push_str(&to.to_algebraic());

    if piece.kind == PieceKind::Pawn && (to.row == 0 || to.row == 7) {
        out.push('=');
        out.push(promotion.unwrap_or(PieceKind::Queen).letter());
    }

    out
}

/// Apply a chosen move and return the successor position together with the
/// notation it corresponds to.
pub fn play_move(
    pos: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> (Position, String) {
    let notation = build(pos, from, to, promotion);
    (pos.apply(from, to, promotion), notation)
}

/// Does the played move satisfy the expected solution token?
///
/// Equal notations (modulo check/mate punctuation and whitespace) match
/// directly; otherwise the expected token is re-resolved against the pre-move
/// position and compared square by square, which tolerates notational
/// variation such as optional disambiguation.
pub fn matches_solution(
    played: &str,
    expected: &str,
    pre: &Position,
    from: Square,
    to: Square,
) -> bool {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != '+' && *c != '#')
            .collect::<String>()
    };
    if normalize(played) == normalize(expected) {
        return true;
    }

    match resolve(pre, expected) {
        Ok(mv) => mv.from == from && mv.to == to,
        Err(_) => false,
    }
}
