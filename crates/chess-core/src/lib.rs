//! Chess rules engine and movetext parsing.
//!
//! The pieces fit together as a pipeline: `pgn` turns raw movetext into
//! `Game` records, `replay` walks each move line into a position sequence
//! via `san` resolution and `Position::apply`, and `movegen`/`fen` serve
//! both the replay and any interactive consumer.

pub mod board;
pub mod fen;
pub mod game_data;
pub mod movegen;
pub mod pgn;
pub mod replay;
pub mod san;

pub use board::{CastlingRights, Color, Piece, PieceKind, Position, Square};
pub use game_data::Game;
