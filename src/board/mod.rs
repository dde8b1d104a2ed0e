//! Board representation and move rules.
//!
//! The board is a plain 8x8 grid of optional pieces. Each piece carries the
//! flags the special rules depend on (`has_moved` for castling and the pawn
//! double step, `just_advanced_two` for en passant). Legality is checked by
//! playing a move on the live board and taking it back.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod attacks;
mod builder;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, PlacementError, SquareError};
pub use state::{Board, Snapshot};
pub use types::{CastleSide, Color, Move, Piece, PieceState, SpecialMove, Square};
