//! Two-player chess rule engine.
//!
//! [`GameState`] owns the board and sequences moves: ownership, geometry,
//! castling, en passant and promotion rules, check safety with exact
//! rollback, and checkmate/stalemate detection. The [`cli`] module is a thin
//! text front end over it.

#[cfg(feature = "logging")]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

pub(crate) use log_event;

pub mod board;
pub mod cli;
pub mod game;
pub mod perft;

pub use board::{Board, Color, Move, MoveError, Piece, PieceState, SpecialMove, Square};
pub use game::{new_game, GameState, Outcome, Player};
