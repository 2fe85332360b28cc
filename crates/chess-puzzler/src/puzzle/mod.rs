/// Puzzle data model and tactical theme classification

pub mod cook;
pub mod extraction;

use chess_core::board::{Color, Position};
use serde::{Deserialize, Serialize};

/// All possible puzzle tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagKind {
    Capture,
    Check,
    Combination,
    Fork,
    Promotion,
    /// Fallback when no specific theme applies.
    Tactic,
}

/// A mined training puzzle with its solution line and display metadata.
///
/// Read-only after creation: the miner fills every field once and the
/// presentation layer renders them unmodified.
#[derive(Debug, Clone, Serialize)]
pub struct Puzzle {
    /// Sequence index within the mined batch
    pub id: usize,
    /// Serialized form of the puzzle position
    pub fen: String,
    /// The side the solver plays
    pub side_to_move: Color,
    /// Alternating solver/defender move tokens, first is the solver's
    pub solution: Vec<String>,
    pub white: String,
    pub black: String,
    pub date: String,
    pub event: String,
    /// 1-based move number of the puzzle's first move
    pub move_number: usize,
    pub rating: i32,
    pub tags: Vec<TagKind>,
    /// The puzzle position itself, ready for interactive use
    #[serde(skip)]
    pub position: Position,
}
