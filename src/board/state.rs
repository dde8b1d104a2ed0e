use once_cell::sync::Lazy;

use super::{Color, Piece, PieceState, Square};

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece) in BACK_ROW.iter().enumerate() {
        let col = col as i32;
        for color in Color::BOTH {
            board.set_piece(Square(color.back_row(), col), PieceState::new(*piece, color));
            board.set_piece(
                Square(color.pawn_start_row(), col),
                PieceState::new(Piece::Pawn, color),
            );
        }
    }
    board
});

/// Piece kind and color per square, row 0 first, for rendering.
pub type Snapshot = [[Option<(Piece, Color)>; 8]; 8];

/// The 8x8 placement grid.
///
/// Every square holds at most one piece. Out-of-range coordinates read as
/// empty and writes to them are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<PieceState>; 8]; 8],
}

impl Board {
    /// Standard initial setup.
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PieceState> {
        if !sq.is_valid() {
            return None;
        }
        self.squares[sq.0 as usize][sq.1 as usize]
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, sq: Square) -> Option<&mut PieceState> {
        if !sq.is_valid() {
            return None;
        }
        self.squares[sq.0 as usize][sq.1 as usize].as_mut()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    pub fn set_piece(&mut self, sq: Square, piece: PieceState) {
        self.put(sq, Some(piece));
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<PieceState> {
        if !sq.is_valid() {
            return None;
        }
        self.squares[sq.0 as usize][sq.1 as usize].take()
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, content: Option<PieceState>) {
        if sq.is_valid() {
            self.squares[sq.0 as usize][sq.1 as usize] = content;
        }
    }

    /// Pieces of `color` with their squares, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, PieceState)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    /// Every occupied square, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceState)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Drop the en passant marker from every pawn on the board.
    pub(crate) fn clear_en_passant_flags(&mut self) {
        for piece in self.squares.iter_mut().flatten().flatten() {
            piece.just_advanced_two = false;
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut grid: Snapshot = [[None; 8]; 8];
        for (sq, p) in self.occupied() {
            grid[sq.0 as usize][sq.1 as usize] = Some((p.kind, p.color));
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
