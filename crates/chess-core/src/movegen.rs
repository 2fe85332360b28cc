//! Pseudo-legal move generation and check detection.

use crate::board::{Color, PieceKind, Position, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Destination squares the piece on `from` may move to, by piece movement
/// rules and occupancy only.
///
/// Moves that leave the mover's own king in check are NOT filtered out, and
/// castling generation does not test the king's path for attacks. Returns an
/// empty list for an empty source square.
pub fn pseudo_legal_moves(pos: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = pos.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();

    match piece.kind {
        PieceKind::Pawn => pawn_moves(pos, from, piece.color, &mut moves),
        PieceKind::Knight => offset_moves(pos, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => {
            offset_moves(pos, from, piece.color, &KING_OFFSETS, &mut moves);
            castling_moves(pos, from, piece.color, &mut moves);
        }
        PieceKind::Bishop => ray_moves(pos, from, piece.color, &BISHOP_DIRS, &mut moves),
        PieceKind::Rook => ray_moves(pos, from, piece.color, &ROOK_DIRS, &mut moves),
        PieceKind::Queen => {
            ray_moves(pos, from, piece.color, &BISHOP_DIRS, &mut moves);
            ray_moves(pos, from, piece.color, &ROOK_DIRS, &mut moves);
        }
    }

    moves
}

fn pawn_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Square>) {
    let (dir, start_row) = match color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    if let Some(one) = from.offset(dir, 0) {
        if pos.piece_at(one).is_none() {
            moves.push(one);
            if from.row == start_row {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if pos.piece_at(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(target) = from.offset(dir, dc) else {
            continue;
        };
        let enemy = pos
            .piece_at(target)
            .map(|p| p.color != color)
            .unwrap_or(false);
        if enemy || pos.en_passant == Some(target) {
            moves.push(target);
        }
    }
}

fn offset_moves(
    pos: &Position,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        let Some(target) = from.offset(dr, dc) else {
            continue;
        };
        match pos.piece_at(target) {
            Some(p) if p.color == color => {}
            _ => moves.push(target),
        }
    }
}

fn ray_moves(
    pos: &Position,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut current = from;
        while let Some(target) = current.offset(dr, dc) {
            match pos.piece_at(target) {
                None => {
                    moves.push(target);
                    current = target;
                }
                Some(p) => {
                    if p.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
}

/// Castling destinations for a king on its home square: the flag must be
/// set, the squares between king and rook empty, and a rook-shaped occupant
/// present on the corner. Attacks on the transit squares are not checked.
fn castling_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Square>) {
    let home_row = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    if from != Square::new(home_row, 4) {
        return;
    }

    let rook_at = |col: u8| {
        pos.piece_at(Square::new(home_row, col))
            .map(|p| p.kind == PieceKind::Rook)
            .unwrap_or(false)
    };
    let empty = |cols: &[u8]| {
        cols.iter()
            .all(|&c| pos.piece_at(Square::new(home_row, c)).is_none())
    };

    if pos.castling.kingside(color) && empty(&[5, 6]) && rook_at(7) {
        moves.push(Square::new(home_row, 6));
    }
    if pos.castling.queenside(color) && empty(&[1, 2, 3]) && rook_at(0) {
        moves.push(Square::new(home_row, 2));
    }
}

/// Is `color`'s king attacked? A position with no king is never in check.
///
/// Probes with the side to move flipped to the opponent and asks whether any
/// opponent piece pseudo-legally reaches the king's square.
pub fn is_in_check(pos: &Position, color: Color) -> bool {
    let Some(king_sq) = pos.king_square(color) else {
        return false;
    };

    let mut probe = pos.clone();
    probe.side_to_move = color.opponent();

    let in_check = probe
        .pieces()
        .filter(|(_, p)| p.color != color)
        .any(|(sq, _)| pseudo_legal_moves(&probe, sq).contains(&king_sq));
    in_check
}
