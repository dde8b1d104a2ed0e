//! Castling side geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::moves::SpecialMove;
use super::square::Square;

/// Which wing a king castles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Side implied by a two-column king step, or `None` for any other move.
    #[must_use]
    pub const fn of_king_step(from: Square, to: Square) -> Option<CastleSide> {
        if from.0 != to.0 {
            return None;
        }
        match to.1 - from.1 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Column the castling rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_from_col(self) -> i32 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column direction the king travels (+1 kingside, -1 queenside)
    #[inline]
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// Rook origin and destination on `row` for a king landing on `king_to`.
    ///
    /// The rook lands on the square the king skipped over.
    #[must_use]
    pub const fn rook_squares(self, king_to: Square) -> (Square, Square) {
        let row = king_to.0;
        (
            Square(row, self.rook_from_col()),
            Square(row, king_to.1 - self.step()),
        )
    }

    #[must_use]
    pub const fn special(self) -> SpecialMove {
        match self {
            CastleSide::Kingside => SpecialMove::CastleKingside,
            CastleSide::Queenside => SpecialMove::CastleQueenside,
        }
    }
}
