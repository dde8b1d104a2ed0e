//! Text rendering of a board with rank and file labels.

use std::fmt;

use crate::board::{Board, Color, Move, Square};

const FILES: &str = "   a  b  c  d  e  f  g  h";
const RULE: &str = " --------------------------";

/// Escape sequences used when drawing squares and pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub light_square: &'static str,
    pub dark_square: &'static str,
    pub last_move: &'static str,
    pub white_piece: &'static str,
    pub black_piece: &'static str,
    pub reset: &'static str,
    pub empty: char,
}

impl RenderStyle {
    #[must_use]
    pub const fn ansi() -> Self {
        RenderStyle {
            light_square: "\x1b[47m",
            dark_square: "\x1b[40m",
            last_move: "\x1b[44m",
            white_piece: "\x1b[97m",
            black_piece: "\x1b[33m",
            reset: "\x1b[0m",
            empty: ' ',
        }
    }

    /// No escape codes; empty squares drawn as dots.
    #[must_use]
    pub const fn plain() -> Self {
        RenderStyle {
            light_square: "",
            dark_square: "",
            last_move: "",
            white_piece: "",
            black_piece: "",
            reset: "",
            empty: '.',
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle::ansi()
    }
}

/// Borrowed board plus styling, drawn through `Display`.
struct BoardView<'a> {
    board: &'a Board,
    last_move: Option<&'a Move>,
    style: &'a RenderStyle,
}

impl BoardView<'_> {
    fn background(&self, sq: Square) -> &'static str {
        if self.last_move.is_some_and(|m| m.from == sq || m.to == sq) {
            self.style.last_move
        } else if (sq.0 + sq.1) % 2 == 0 {
            self.style.light_square
        } else {
            self.style.dark_square
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.style;
        writeln!(f, "{FILES}")?;
        writeln!(f, "{RULE}")?;

        for row in 0..8 {
            let rank = 8 - row;
            write!(f, "{rank} |")?;
            for col in 0..8 {
                let sq = Square(row, col);
                let background = self.background(sq);
                match self.board.piece_at(sq) {
                    Some(piece) => {
                        let fg = match piece.color {
                            Color::White => style.white_piece,
                            Color::Black => style.black_piece,
                        };
                        write!(f, "{background}{fg} {} {}", piece.symbol(), style.reset)?;
                    }
                    None => write!(f, "{background} {} {}", style.empty, style.reset)?,
                }
            }
            writeln!(f, "| {rank}")?;
        }

        writeln!(f, "{RULE}")?;
        writeln!(f, "{FILES}")
    }
}

/// Draw `board` rank 8 first. Squares touched by `last_move` use the
/// highlight background.
#[must_use]
pub fn render_board(board: &Board, last_move: Option<&Move>, style: &RenderStyle) -> String {
    BoardView {
        board,
        last_move,
        style,
    }
    .to_string()
}
