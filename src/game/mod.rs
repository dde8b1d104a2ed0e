//! Turn sequencing and terminal-state detection.
//!
//! A [`GameState`] is the only thing that mutates a board during play. Each
//! [`GameState::apply_move`] either commits completely or leaves the state
//! exactly as it found it, piece flags included.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::rules;
use crate::board::{Board, CastleSide, Color, Move, MoveError, Piece, Snapshot, Square};

/// How the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A named participant playing one color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

/// Board, side to move, move history and outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    mover: Color,
    history: Vec<Move>,
    outcome: Outcome,
    white: Player,
    black: Player,
}

/// Standard initial setup, White to move.
#[must_use]
pub fn new_game(white_label: &str, black_label: &str) -> GameState {
    GameState::new(white_label, black_label)
}

impl GameState {
    #[must_use]
    pub fn new(white_label: &str, black_label: &str) -> Self {
        GameState::from_board(Board::new(), Color::White).with_players(white_label, black_label)
    }

    /// Start from an arbitrary position with `mover` to play.
    ///
    /// If `mover` has no legal move the game is over from the outset.
    #[must_use]
    pub fn from_board(board: Board, mover: Color) -> Self {
        let mut state = GameState {
            board,
            mover,
            history: Vec::new(),
            outcome: Outcome::InProgress,
            white: Player {
                name: Color::White.to_string(),
                color: Color::White,
            },
            black: Player {
                name: Color::Black.to_string(),
                color: Color::Black,
            },
        };
        state.refresh_outcome();
        state
    }

    #[must_use]
    pub fn with_players(mut self, white_label: &str, black_label: &str) -> Self {
        self.white.name = white_label.to_string();
        self.black.name = black_label.to_string();
        self
    }

    #[inline]
    #[must_use]
    pub fn mover(&self) -> Color {
        self.mover
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.mover)
    }

    /// Whether the side to move is currently in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.mover)
    }

    /// Legal moves for the side to move; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.clone().legal_moves(self.mover)
    }

    /// Squares the piece on `from` may legally move to, whichever side owns
    /// it.
    ///
    /// Empty when `from` is invalid or empty, or the game is over.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> BTreeSet<Square> {
        if self.is_over() {
            return BTreeSet::new();
        }
        self.board
            .clone()
            .legal_moves_from(from)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Apply the move `from` -> `to` for the side on move.
    ///
    /// `promotion` picks the piece a pawn reaching the last row becomes;
    /// absent or unusable choices give a Queen. On error nothing changes.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        let result = self.try_apply_move(from, to, promotion);
        if let Err(err) = &result {
            log_event!(debug, "rejected {from} -> {to}: {err}");
        }
        result
    }

    fn try_apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if let Some(square) = [from, to].into_iter().find(|sq| !sq.is_valid()) {
            return Err(MoveError::InvalidSquare { square });
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;
        if piece.color != self.mover {
            return Err(MoveError::WrongSideToMove {
                expected: self.mover,
                found: piece.color,
            });
        }

        let castling = piece.kind == Piece::King && CastleSide::of_king_step(from, to).is_some();
        if castling {
            if !rules::can_castle(&piece, from, to, &self.board) {
                return Err(MoveError::CastlingBlocked { from, to });
            }
            if !self.board.castling_path_safe(from, to) {
                return Err(MoveError::CastlingThroughCheck { from, to });
            }
        } else if !rules::is_valid_move(&piece, from, to, &self.board) {
            return Err(MoveError::IllegalGeometry { from, to });
        }

        let mv = self.board.classify_move(from, to, promotion);
        let info = self
            .board
            .make_move(&mv)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;
        if self.board.is_in_check(self.mover) {
            self.board.unmake_move(&mv, info);
            return Err(MoveError::MoveLeavesKingInCheck { from, to });
        }

        self.commit(&mv, piece.kind);
        Ok(mv)
    }

    /// Bookkeeping once a move is known to be legal: promotion, en passant
    /// flags, history, turn switch and outcome.
    fn commit(&mut self, mv: &Move, kind: Piece) {
        if let Some(promoted) = mv.promotion() {
            if let Some(pawn) = self.board.piece_at_mut(mv.to) {
                pawn.kind = promoted;
            }
        }

        self.board.clear_en_passant_flags();
        if kind == Piece::Pawn && (mv.to.0 - mv.from.0).abs() == 2 {
            if let Some(pawn) = self.board.piece_at_mut(mv.to) {
                pawn.just_advanced_two = true;
            }
        }

        log_event!(debug, "{} plays {mv}", self.mover);
        self.history.push(*mv);
        self.mover = self.mover.opponent();
        self.refresh_outcome();
    }

    fn refresh_outcome(&mut self) {
        let in_check = self.board.is_in_check(self.mover);
        if !self.board.legal_moves(self.mover).is_empty() {
            self.outcome = Outcome::InProgress;
            if in_check {
                log_event!(info, "{} is in check", self.mover);
            }
            return;
        }

        self.outcome = if in_check {
            Outcome::Checkmate {
                winner: self.mover.opponent(),
            }
        } else {
            Outcome::Stalemate
        };
        log_event!(info, "game over: {:?}", self.outcome);
    }
}

#[cfg(test)]
mod tests;
