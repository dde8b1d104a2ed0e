use super::rules;
use super::{Board, Color, Square};

impl Board {
    /// Whether any piece of `by` attacks `square`.
    ///
    /// Pawns are judged by their capture diagonals in their own forward
    /// direction, never by their forward step.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|(from, piece)| rules::attacks(&piece, from, square, self))
    }

    /// Whether the king of `color` stands on an attacked square.
    ///
    /// A board without that king reports no check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }
}
