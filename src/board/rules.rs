//! Per-piece movement geometry.
//!
//! Everything here is pure: the board is only read, and none of these
//! predicates look at whether the mover's own king ends up in check.

use super::{Board, CastleSide, Color, Piece, PieceState, Square};

/// Whether `piece` standing on `from` may move to `to`, by geometry and
/// occupancy alone.
///
/// A destination holding a piece of the mover's color is never valid. A king
/// two columns along its row is judged as a castling attempt, without any
/// check-safety test along the way.
#[must_use]
pub fn is_valid_move(piece: &PieceState, from: Square, to: Square, board: &Board) -> bool {
    if from == to || !from.is_valid() || !to.is_valid() {
        return false;
    }
    if board
        .piece_at(to)
        .is_some_and(|target| target.color == piece.color)
    {
        return false;
    }

    match piece.kind {
        Piece::Pawn => is_valid_pawn_move(piece, from, to, board),
        Piece::Rook | Piece::Knight | Piece::Bishop | Piece::Queen => {
            reaches(piece.kind, from, to, board)
        }
        Piece::King => is_adjacent(from, to) || can_castle(piece, from, to, board),
    }
}

/// Whether `piece` on `from` attacks `target`.
///
/// Pawns attack only the two squares diagonally ahead of them, and a king
/// never attacks through a castling step. The occupant of `target` is not
/// consulted.
#[must_use]
pub fn attacks(piece: &PieceState, from: Square, target: Square, board: &Board) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        Piece::Pawn => {
            target.0 - from.0 == piece.color.pawn_direction() && (target.1 - from.1).abs() == 1
        }
        Piece::Rook | Piece::Knight | Piece::Bishop | Piece::Queen => {
            reaches(piece.kind, from, target, board)
        }
        Piece::King => is_adjacent(from, target),
    }
}

/// Walk from `from` toward `to` one square at a time; false on the first
/// occupied square strictly between them, whatever its color.
///
/// Squares that are not on a shared row, column or diagonal have no path.
#[must_use]
pub fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let d_row = to.0 - from.0;
    let d_col = to.1 - from.1;
    if !(d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs()) {
        return false;
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut current = from.offset(step_row, step_col);
    while current != to {
        if !board.is_empty(current) {
            return false;
        }
        current = current.offset(step_row, step_col);
    }
    true
}

/// Castling geometry: unmoved king on its home square, unmoved same-color
/// rook in the matching corner, and nothing standing between them.
#[must_use]
pub fn can_castle(king: &PieceState, from: Square, to: Square, board: &Board) -> bool {
    if king.kind != Piece::King || king.has_moved {
        return false;
    }
    if from != Square(king.color.back_row(), 4) || !board.is_empty(to) {
        return false;
    }
    let Some(side) = CastleSide::of_king_step(from, to) else {
        return false;
    };

    let rook_sq = Square(from.0, side.rook_from_col());
    let rook_ready = board
        .piece_at(rook_sq)
        .is_some_and(|rook| rook.is(king.color, Piece::Rook) && !rook.has_moved);

    rook_ready && is_path_clear(from, rook_sq, board)
}

/// Square of the pawn a diagonal step from `from` to an empty `to` would
/// capture en passant, if that capture is available.
#[must_use]
pub(crate) fn en_passant_victim(
    color: Color,
    from: Square,
    to: Square,
    board: &Board,
) -> Option<Square> {
    let beside = Square(from.0, to.1);
    board
        .piece_at(beside)
        .filter(|p| p.is(color.opponent(), Piece::Pawn) && p.just_advanced_two)
        .map(|_| beside)
}

fn is_valid_pawn_move(pawn: &PieceState, from: Square, to: Square, board: &Board) -> bool {
    let dir = pawn.color.pawn_direction();
    let d_row = to.0 - from.0;
    let d_col = to.1 - from.1;

    if d_col == 0 {
        if d_row == dir {
            return board.is_empty(to);
        }
        if d_row == 2 * dir && !pawn.has_moved && from.0 == pawn.color.pawn_start_row() {
            return board.is_empty(from.offset(dir, 0)) && board.is_empty(to);
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == dir {
        return match board.piece_at(to) {
            Some(target) => target.color != pawn.color,
            None => en_passant_victim(pawn.color, from, to, board).is_some(),
        };
    }

    false
}

/// Line, diagonal and knight geometry shared by moving and attacking.
fn reaches(kind: Piece, from: Square, to: Square, board: &Board) -> bool {
    let d_row = (to.0 - from.0).abs();
    let d_col = (to.1 - from.1).abs();
    let straight = d_row == 0 || d_col == 0;
    let diagonal = d_row == d_col;

    match kind {
        Piece::Knight => (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1),
        Piece::Rook => straight && is_path_clear(from, to, board),
        Piece::Bishop => diagonal && is_path_clear(from, to, board),
        Piece::Queen => (straight || diagonal) && is_path_clear(from, to, board),
        Piece::Pawn | Piece::King => false,
    }
}

#[inline]
fn is_adjacent(from: Square, to: Square) -> bool {
    (to.0 - from.0).abs() <= 1 && (to.1 - from.1).abs() <= 1
}
