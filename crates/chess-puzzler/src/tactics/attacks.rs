/// Attack-based detectors: fork

use chess_core::board::{Color, PieceKind, Position, Square};
use chess_core::movegen::pseudo_legal_moves;

/// Fork: the piece that just landed on `landing` attacks two or more enemy
/// queens, rooks, or kings at once.
///
/// The post-move position has the defender to move, so the probe flips the
/// side back to the mover before reading the landing square's attacks.
pub fn fork(post: &Position, mover: Color, landing: Square) -> bool {
    let mut probe = post.clone();
    probe.side_to_move = mover;

    let targets = pseudo_legal_moves(&probe, landing)
        .into_iter()
        .filter_map(|sq| probe.piece_at(sq))
        .filter(|p| {
            p.color != mover
                && matches!(
                    p.kind,
                    PieceKind::Queen | PieceKind::Rook | PieceKind::King
                )
        })
        .count();

    targets >= 2
}
