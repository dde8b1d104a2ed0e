//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rule engine:
//! - `Piece`, `Color` and `PieceState` - piece kinds, sides and placed pieces
//! - `Square` - (row, col) coordinate with notation support
//! - `Move` and `SpecialMove` - applied moves
//! - `CastleSide` - castling geometry

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastleSide;
pub use moves::{Move, SpecialMove};
pub use piece::{Color, Piece, PieceState};
pub use square::Square;
