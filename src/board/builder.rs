//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece or from piece-placement text.
//! Movement flags are inferred from where pieces stand: a pawn off its
//! starting row, a king off its home square and a rook off its corner are
//! treated as having moved. Use [`BoardBuilder::moved`] to mark any other
//! piece as moved.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert!(board.piece_at(Square(6, 0)).is_some());
//! ```

use super::error::PlacementError;
use super::{Board, Color, Piece, PieceState, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    moved: Vec<Square>,
    just_advanced_two: Option<Square>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (sq, piece) in Board::new().occupied() {
            builder.pieces.push((sq, piece.color, piece.kind));
        }
        builder
    }

    /// Parse piece-placement text: eight rows separated by `/`, row 0
    /// (rank 8) first, uppercase for White, digits for runs of empty squares.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut builder = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col < 8 {
                    builder
                        .pieces
                        .push((Square(row as i32, col as i32), color, piece));
                }
                col += 1;
            }
            if col != 8 {
                return Err(PlacementError::WrongColumnCount { row, cols: col });
            }
        }
        Ok(builder)
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Mark the piece on `square` as having moved.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        self.moved.push(square);
        self
    }

    /// Mark the pawn on `square` as having just advanced two rows, making it
    /// capturable en passant on the next ply.
    #[must_use]
    pub fn just_advanced_two(mut self, square: Square) -> Self {
        self.just_advanced_two = Some(square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, kind) in self.pieces {
            let mut piece = PieceState::new(kind, color);
            piece.has_moved = !on_home_square(square, color, kind) || self.moved.contains(&square);
            piece.just_advanced_two =
                kind == Piece::Pawn && self.just_advanced_two == Some(square);
            if piece.just_advanced_two {
                piece.has_moved = true;
            }
            board.set_piece(square, piece);
        }

        board
    }
}

/// Whether an unmoved piece of this kind could stand on `square`.
fn on_home_square(square: Square, color: Color, kind: Piece) -> bool {
    match kind {
        Piece::Pawn => square.0 == color.pawn_start_row(),
        Piece::King => square == Square(color.back_row(), 4),
        Piece::Rook => square.0 == color.back_row() && (square.1 == 0 || square.1 == 7),
        Piece::Knight | Piece::Bishop | Piece::Queen => true,
    }
}
