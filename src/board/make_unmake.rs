use super::rules::en_passant_victim;
use super::{Board, CastleSide, Move, Piece, PieceState, SpecialMove, Square};

/// Everything `unmake_move` needs to put the board back exactly as it was,
/// flags included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) mover: PieceState,
    pub(crate) displaced: Option<PieceState>,
    pub(crate) en_passant_victim: Option<(Square, PieceState)>,
    pub(crate) rook_hop: Option<(Square, Square, PieceState)>,
}

impl Board {
    /// Describe moving the piece on `from` to `to`: the special rule it
    /// invokes and the piece it would capture.
    ///
    /// Assumes the move already passed the geometry check. `promotion` is
    /// resolved with [`Piece::promotion_or_queen`] when the move promotes.
    #[must_use]
    pub fn classify_move(&self, from: Square, to: Square, promotion: Option<Piece>) -> Move {
        let mut mv = Move::new(from, to);
        let Some(piece) = self.piece_at(from) else {
            return mv;
        };

        match piece.kind {
            Piece::King => {
                if let Some(side) = CastleSide::of_king_step(from, to) {
                    mv.special = side.special();
                    return mv;
                }
            }
            Piece::Pawn => {
                if from.1 != to.1 && self.is_empty(to) {
                    if let Some(victim_sq) = en_passant_victim(piece.color, from, to, self) {
                        mv.special = SpecialMove::EnPassant;
                        mv.captured = self.piece_at(victim_sq);
                        return mv;
                    }
                }
                if to.0 == piece.color.promotion_row() {
                    mv.special = SpecialMove::Promotion(Piece::promotion_or_queen(promotion));
                }
            }
            Piece::Rook | Piece::Knight | Piece::Bishop | Piece::Queen => {}
        }

        mv.captured = self.piece_at(to);
        mv
    }

    /// Relocate the mover, remove what it captures and, for castling, hop the
    /// rook over the king. Marks the moved pieces as moved.
    ///
    /// Promotion and en passant flag bookkeeping are left to the caller.
    /// Returns `None`, leaving the board untouched, when `from` is empty.
    pub(crate) fn make_move(&mut self, mv: &Move) -> Option<UnmakeInfo> {
        let mover = self.remove_piece(mv.from)?;

        let en_passant_victim = if mv.is_en_passant() {
            let victim_sq = Square(mv.from.0, mv.to.1);
            self.remove_piece(victim_sq).map(|victim| (victim_sq, victim))
        } else {
            None
        };

        let displaced = self.piece_at(mv.to);
        self.set_piece(
            mv.to,
            PieceState {
                has_moved: true,
                ..mover
            },
        );

        let rook_hop = match mv.special {
            SpecialMove::CastleKingside | SpecialMove::CastleQueenside => {
                CastleSide::of_king_step(mv.from, mv.to).and_then(|side| {
                    let (rook_from, rook_to) = side.rook_squares(mv.to);
                    let rook = self.remove_piece(rook_from)?;
                    self.set_piece(
                        rook_to,
                        PieceState {
                            has_moved: true,
                            ..rook
                        },
                    );
                    Some((rook_from, rook_to, rook))
                })
            }
            _ => None,
        };

        Some(UnmakeInfo {
            mover,
            displaced,
            en_passant_victim,
            rook_hop,
        })
    }

    /// Undo a `make_move`, restoring every touched square to its prior
    /// content.
    pub(crate) fn unmake_move(&mut self, mv: &Move, info: UnmakeInfo) {
        if let Some((rook_from, rook_to, rook)) = info.rook_hop {
            self.remove_piece(rook_to);
            self.set_piece(rook_from, rook);
        }
        self.put(mv.to, info.displaced);
        if let Some((victim_sq, victim)) = info.en_passant_victim {
            self.set_piece(victim_sq, victim);
        }
        self.set_piece(mv.from, info.mover);
    }

    /// Play `mv`, evaluate `probe` on the resulting board, then take the move
    /// back. The board is identical before and after.
    pub(crate) fn with_move<R>(&mut self, mv: &Move, probe: impl FnOnce(&Board) -> R) -> Option<R> {
        let info = self.make_move(mv)?;
        let result = probe(self);
        self.unmake_move(mv, info);
        Some(result)
    }

    /// Whether the piece on `king_from` would be attacked if it stood on
    /// `square` instead, with `king_from` vacated.
    pub(crate) fn king_attacked_on(&mut self, king_from: Square, square: Square) -> bool {
        let Some(king) = self.piece_at(king_from) else {
            return false;
        };
        let hop = Move::new(king_from, square);
        self.with_move(&hop, |board| {
            board.is_square_attacked(square, king.color.opponent())
        })
        .unwrap_or(false)
    }
}
