//! Shared fixtures for the integration tests.

/// Morphy's Opera game, 1858: 33 plies, well-formed, 1-0.
pub const OPERA_GAME: &str = r#"[Event "Paris Opera"]
[Site "Paris FRA"]
[Date "1858.11.02"]
[White "Morphy, Paul"]
[Black "Duke Karl / Count Isouard"]
[Result "1-0"]

1. e4 e5 2. Nf3 d6 3. d4 Bg4 {This is a weak move
already} 4. dxe5 Bxf3 5. Qxf3 dxe5 6. Bc4 Nf6 7. Qb3 Qe7
8. Nc3 c6 9. Bg5 {Black is in what's like a zugzwang position} b5
10. Nxb5 cxb5 11. Bxb5+ Nbd7 12. O-O-O Rd8 13. Rxd7 Rxd7 14. Rd1 Qe6
15. Bxd7+ Nxd7 16. Qb8+ Nxb8 17. Rd8# 1-0"#;

/// A chunk below the 10-move minimum; the parser must drop it.
pub const NOISE_CHUNK: &str = r#"[Event "Fragment"]
[Result "1-0"]

1. e4 e5 2. Nf3 Nc6 3. Bb5 1-0"#;

/// A batch of `n` copies of the Opera game.
pub fn opera_batch(n: usize) -> String {
    vec![OPERA_GAME; n].join("\n\n")
}
