/// Simple tactical detectors — token markers and check state

use chess_core::board::Position;
use chess_core::movegen;

/// Does the position leave the side to move in check?
///
/// Called on the position after the solver's move, where the side to move is
/// the defender.
pub fn gives_check(post: &Position) -> bool {
    movegen::is_in_check(post, post.side_to_move)
}

/// Does the token carry the capture marker?
pub fn is_capture(token: &str) -> bool {
    token.contains('x')
}

/// Does the token carry a promotion suffix?
pub fn is_promotion(token: &str) -> bool {
    token.contains('=')
}
