//! Puzzle mining: scans replayed games for tactical moments, classifies
//! them, and scores difficulty.

pub mod puzzle;
pub mod tactics;

pub use puzzle::extraction::{mine_batch, mine_game};
pub use puzzle::{Puzzle, TagKind};
