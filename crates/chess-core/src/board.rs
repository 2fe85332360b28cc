//! Board representation: pieces, squares, and the position state machine.
//!
//! `Position` is a plain 8x8 mailbox with row 0 = rank 8. Transitions are
//! value-to-value: `apply` returns a new `Position` and never mutates the
//! source, so successive positions in a replay share no state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN side-to-move letter.
    pub fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opponent()
    }
}

/// Piece type, colour-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase SAN/FEN letter ('P' for pawns).
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Material value in pawns (king counts 0).
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// A coloured piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Case-sensitive FEN letter: uppercase for White.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c.to_ascii_uppercase())?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// A board coordinate. Row 0 is rank 8, column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Construct from possibly out-of-board coordinates.
    pub fn try_new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step by a (row, col) delta, `None` when it leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Parse the two-character algebraic form, e.g. "e4".
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let col = file as u8 - b'a';
        let row = 7 - (rank as u8 - b'1');
        Some(Square { row, col })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + (7 - self.row)) as char
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Castling availability, four independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn all() -> CastlingRights {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> CastlingRights {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    fn clear_side(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drop the flag owned by a corner rook-start square, if `sq` is one.
    fn clear_corner(&mut self, sq: Square) {
        match (sq.row, sq.col) {
            (7, 0) => self.white_queenside = false,
            (7, 7) => self.white_kingside = false,
            (0, 0) => self.black_queenside = false,
            (0, 7) => self.black_kingside = false,
            _ => {}
        }
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A complete game state: piece placement plus the five FEN side fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Position {
    /// A board with no pieces, White to move.
    pub fn empty() -> Position {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position.
    pub fn initial() -> Position {
        let mut pos = Position::empty();
        for col in 0..8u8 {
            pos.set_piece(
                Square::new(0, col),
                Some(Piece::new(Color::Black, BACK_RANK[col as usize])),
            );
            pos.set_piece(
                Square::new(1, col),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
            pos.set_piece(
                Square::new(6, col),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
            pos.set_piece(
                Square::new(7, col),
                Some(Piece::new(Color::White, BACK_RANK[col as usize])),
            );
        }
        pos.castling = CastlingRights::all();
        pos
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize]
    }

    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row as usize][sq.col as usize] = piece;
    }

    /// All occupied squares in scan order: rank 8 to rank 1, file a to h.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|p| (sq, p))
            })
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Material balance in pawns, positive for White.
    pub fn material(&self) -> i32 {
        self.pieces()
            .map(|(_, p)| match p.color {
                Color::White => p.kind.value(),
                Color::Black => -p.kind.value(),
            })
            .sum()
    }

    /// Apply a concrete move and return the successor position.
    ///
    /// Pure and total: legality is the caller's concern. Callers must pass a
    /// pair produced by notation resolution or pseudo-legal generation, so
    /// `from` always holds a piece.
    pub fn apply(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Position {
        let mut next = self.clone();
        let Some(piece) = self.piece_at(from) else {
            return next;
        };

        let mut capture = self.piece_at(to).is_some();

        // Pawn moving diagonally onto an empty square takes en passant:
        // the captured pawn sits on the departure rank at the destination file.
        if piece.kind == PieceKind::Pawn && from.col != to.col && self.piece_at(to).is_none() {
            next.set_piece(Square::new(from.row, to.col), None);
            capture = true;
        }

        // A double push records the skipped square as the en-passant target.
        if piece.kind == PieceKind::Pawn && (from.row as i8 - to.row as i8).abs() == 2 {
            next.en_passant = Some(Square::new((from.row + to.row) / 2, from.col));
        } else {
            next.en_passant = None;
        }

        next.set_piece(from, None);
        let placed = if piece.kind == PieceKind::Pawn && (to.row == 0 || to.row == 7) {
            Piece::new(piece.color, promotion.unwrap_or(PieceKind::Queen))
        } else {
            piece
        };
        next.set_piece(to, Some(placed));

        // A two-file king move is castling: hop the rook over.
        if piece.kind == PieceKind::King && (from.col as i8 - to.col as i8).abs() == 2 {
            let (rook_from, rook_to) = if to.col > from.col {
                (Square::new(from.row, 7), Square::new(from.row, 5))
            } else {
                (Square::new(from.row, 0), Square::new(from.row, 3))
            };
            let rook = next.piece_at(rook_from);
            next.set_piece(rook_from, None);
            next.set_piece(rook_to, rook);
        }

        if piece.kind == PieceKind::King {
            next.castling.clear_side(piece.color);
        }
        next.castling.clear_corner(from);
        next.castling.clear_corner(to);

        if piece.kind == PieceKind::Pawn || capture {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock = self.halfmove_clock + 1;
        }
        if self.side_to_move == Color::Black {
            next.fullmove_number = self.fullmove_number + 1;
        }
        next.side_to_move = !self.side_to_move;

        next
    }
}
