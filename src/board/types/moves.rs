//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceState};
use super::square::Square;

/// Special rule a move invokes, if any.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialMove {
    #[default]
    None,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion(Piece),
}

/// A move as applied to the board.
///
/// `captured` holds the captured piece as it stood before the move, flags
/// included. For en passant that piece was taken from beside `from`, not
/// from `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceState>,
    pub special: SpecialMove,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            special: SpecialMove::None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.special, SpecialMove::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(
            self.special,
            SpecialMove::CastleKingside | SpecialMove::CastleQueenside
        )
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        match self.special {
            SpecialMove::Promotion(piece) => Some(piece),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)?;
        match self.special {
            SpecialMove::None => Ok(()),
            SpecialMove::EnPassant => write!(f, " (en passant)"),
            SpecialMove::CastleKingside => write!(f, " (O-O)"),
            SpecialMove::CastleQueenside => write!(f, " (O-O-O)"),
            SpecialMove::Promotion(piece) => write!(f, " (={piece})"),
        }
    }
}
