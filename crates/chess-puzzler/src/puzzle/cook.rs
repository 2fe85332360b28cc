/// Cook orchestrator — calls tactical detectors and builds the tag list

use chess_core::board::Position;
use chess_core::san::ResolvedMove;

use super::TagKind;
use crate::tactics;

/// Classify a candidate move and return all applicable tags.
///
/// `pre`/`post` are the positions around the first solution move, `mv` its
/// resolved transition, `token` its notated form, `solution` the full line.
/// Detectors run in a fixed order and each tag appears at most once; a
/// candidate nothing else matches gets the generic `Tactic` tag.
pub fn cook(
    pre: &Position,
    post: &Position,
    mv: &ResolvedMove,
    token: &str,
    solution: &[String],
) -> Vec<TagKind> {
    let mut tags = Vec::new();

    if tactics::simple::gives_check(post) {
        tags.push(TagKind::Check);
    }

    if tactics::simple::is_capture(token) {
        tags.push(TagKind::Capture);
    }

    if tactics::simple::is_promotion(token) {
        tags.push(TagKind::Promotion);
    }

    if tactics::attacks::fork(post, pre.side_to_move, mv.to) {
        tags.push(TagKind::Fork);
    }

    if solution.len() > 1 {
        tags.push(TagKind::Combination);
    }

    if tags.is_empty() {
        tags.push(TagKind::Tactic);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{fen, san};

    fn classify(fen_str: &str, token: &str, solution: &[&str]) -> Vec<TagKind> {
        let pre = fen::parse(fen_str).unwrap();
        let mv = san::resolve(&pre, token).unwrap();
        let post = pre.apply(mv.from, mv.to, mv.promotion);
        let solution: Vec<String> = solution.iter().map(|s| s.to_string()).collect();
        cook(&pre, &post, &mv, token, &solution)
    }

    #[test]
    fn test_check_tag() {
        // Rook slides to e1 and checks the king on e8.
        let tags = classify("4k3/8/8/8/8/8/8/K5R1 w - - 0 1", "Re1+", &["Re1+"]);
        assert_eq!(tags, vec![TagKind::Check]);
    }

    #[test]
    fn test_capture_and_combination_tags() {
        let tags = classify(
            "4k3/8/3p4/4B3/8/8/8/4K3 w - - 0 1",
            "Bxd6",
            &["Bxd6", "Kd7", "Bf4"],
        );
        assert_eq!(tags, vec![TagKind::Capture, TagKind::Combination]);
    }

    #[test]
    fn test_promotion_tag() {
        let tags = classify("8/P7/8/8/8/8/8/k1K5 w - - 0 1", "a8=Q", &["a8=Q"]);
        assert!(tags.contains(&TagKind::Promotion));
    }

    #[test]
    fn test_fork_tag() {
        // Nf7 forks the queen on d8 and the rook on h8.
        let tags = classify("3q3r/8/8/6N1/8/8/8/K7 w - - 0 1", "Nf7", &["Nf7"]);
        assert_eq!(tags, vec![TagKind::Fork]);
    }

    #[test]
    fn test_fork_requires_two_high_value_targets() {
        // Same hop, but only the queen is there: no fork.
        let tags = classify("3q4/8/8/6N1/8/8/8/K7 w - - 0 1", "Nf7", &["Nf7"]);
        assert!(!tags.contains(&TagKind::Fork));
    }

    #[test]
    fn test_fork_counts_the_enemy_king() {
        // Ne5 attacks both the king on d7 and the queen on f7.
        let tags = classify("8/3k1q2/8/8/2N5/8/8/K7 w - - 0 1", "Ne5", &["Ne5"]);
        assert!(tags.contains(&TagKind::Fork));
        assert!(tags.contains(&TagKind::Check));
    }

    #[test]
    fn test_generic_tactic_fallback() {
        let tags = classify("4k3/8/8/8/8/8/8/K5R1 w - - 0 1", "Rg2", &["Rg2"]);
        assert_eq!(tags, vec![TagKind::Tactic]);
    }
}
