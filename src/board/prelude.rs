//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{Board, BoardBuilder, Color, Move, MoveError, Piece, PieceState, SpecialMove, Square};
pub use crate::game::{GameState, Outcome};
