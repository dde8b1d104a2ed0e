//! Error types for board setup and move application.

use std::fmt;

use super::{Color, Square};

/// Reason a requested move was refused.
///
/// The game state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended in checkmate or stalemate
    GameAlreadyOver,
    /// `from` or `to` lies off the 8x8 board
    InvalidSquare { square: Square },
    /// No piece stands on `from`
    NoPieceAtSquare { square: Square },
    /// The piece on `from` belongs to the side not on move
    WrongSideToMove { expected: Color, found: Color },
    /// The piece cannot move that way
    IllegalGeometry { from: Square, to: Square },
    /// King or rook has moved, the rook is missing, or the path is occupied
    CastlingBlocked { from: Square, to: Square },
    /// King is in check, or would cross or land on an attacked square
    CastlingThroughCheck { from: Square, to: Square },
    /// The move would leave the mover's own king attacked
    MoveLeavesKingInCheck { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameAlreadyOver => write!(f, "Game over!"),
            MoveError::InvalidSquare { square } => write!(f, "Invalid position {square}"),
            MoveError::NoPieceAtSquare { square } => write!(f, "No piece at {square}"),
            MoveError::WrongSideToMove { expected, found } => {
                write!(f, "Not your piece: {expected} to move, piece is {found}")
            }
            MoveError::IllegalGeometry { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::CastlingBlocked { from, to } => {
                write!(f, "Castling {from} to {to} is not available")
            }
            MoveError::CastlingThroughCheck { from, to } => {
                write!(
                    f,
                    "Cannot castle {from} to {to} out of, through or into check"
                )
            }
            MoveError::MoveLeavesKingInCheck { from, to } => {
                write!(f, "Move {from} to {to} would leave your king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: i32 },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece-placement text given to the board builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// A row describes more or fewer than 8 columns
    WrongColumnCount { row: usize, cols: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::WrongColumnCount { row, cols } => {
                write!(f, "Row {row} describes {cols} columns, expected 8")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
