//! Pseudo-legal and legal move enumeration.
//!
//! Legality is decided the simple way: play each candidate on the live
//! board, ask whether the mover's king is attacked, and take it back. Output
//! order is row-major by origin, then row-major by destination.

use super::rules;
use super::{Board, CastleSide, Color, Move, Square};

impl Board {
    /// Destinations the piece on `from` may reach by geometry, excluding
    /// squares held by its own side. Empty when `from` is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        Square::all()
            .filter(|&to| {
                !self
                    .piece_at(to)
                    .is_some_and(|target| target.color == piece.color)
                    && rules::is_valid_move(&piece, from, to, self)
            })
            .collect()
    }

    /// Every legal move for `color`.
    ///
    /// The board is borrowed mutably for the simulations but is always
    /// returned to its exact prior state.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let origins: Vec<Square> = self.pieces(color).map(|(sq, _)| sq).collect();
        let mut moves = Vec::new();
        for from in origins {
            self.push_legal_moves_from(from, &mut moves);
        }
        crate::log_event!(trace, "{} legal moves for {color}", moves.len());
        moves
    }

    /// Legal moves of the piece on `from`, whichever side owns it.
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        self.push_legal_moves_from(from, &mut moves);
        moves
    }

    fn push_legal_moves_from(&mut self, from: Square, moves: &mut Vec<Move>) {
        let Some(piece) = self.piece_at(from) else {
            return;
        };
        for to in self.pseudo_legal_moves(from) {
            let mv = self.classify_move(from, to, None);
            if self.is_legal(&mv, piece.color) {
                moves.push(mv);
            }
        }
    }

    /// Whether a pseudo-legal `mv` keeps the king of `color` safe, including
    /// the castling path rule.
    pub(crate) fn is_legal(&mut self, mv: &Move, color: Color) -> bool {
        if mv.is_castling() && !self.castling_path_safe(mv.from, mv.to) {
            return false;
        }
        self.with_move(mv, |board| !board.is_in_check(color))
            .unwrap_or(false)
    }

    /// Castling king safety: the king is not in check now, and would not be
    /// attacked on any square it crosses, destination included.
    pub(crate) fn castling_path_safe(&mut self, from: Square, to: Square) -> bool {
        let (Some(side), Some(king)) = (CastleSide::of_king_step(from, to), self.piece_at(from))
        else {
            return false;
        };
        if self.is_in_check(king.color) {
            return false;
        }

        let mut square = from;
        while square != to {
            square = square.offset(0, side.step());
            if self.king_attacked_on(from, square) {
                return false;
            }
        }
        true
    }
}
