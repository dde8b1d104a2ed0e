//! Line-oriented text front end.
//!
//! Reads one command per line, applies it to a [`GameState`] and writes the
//! response. Generic over the reader and writer so sessions can be scripted.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Square, SquareError};
use crate::game::{GameState, Outcome};

pub mod command;
pub mod options;
pub mod render;

use command::{parse_command, Command};
use options::CliOptions;

pub const HELP: &str = "\
Commands:
  <from> <to> [q|r|b|n]   move a piece, e.g. 'e2 e4' or 'e7 e8 n'
  legal <square>          list legal destinations for the piece on a square
  history                 show the moves played so far
  board                   redraw the board
  help                    show this message
  quit                    leave the game";

/// Error type for front-end input and command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First token is not a known command or square
    Unknown(String),
    /// `legal` given without a square
    MissingSquare,
    /// A square token could not be parsed
    BadSquare(SquareError),
    /// Promotion token is not a piece letter
    BadPromotion(String),
    /// Extra tokens after a complete command
    TrailingInput(String),
    /// Command-line flag not recognised
    UnknownFlag(String),
    /// Command-line flag expects a value
    MissingValue(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(s) => write!(f, "Unknown command '{s}'"),
            CommandError::MissingSquare => write!(f, "Please specify a square (e.g. 'legal e2')"),
            CommandError::BadSquare(e) => write!(f, "{e}"),
            CommandError::BadPromotion(s) => {
                write!(f, "Invalid promotion piece '{s}' (use q, r, b or n)")
            }
            CommandError::TrailingInput(s) => write!(f, "Unexpected input '{s}'"),
            CommandError::UnknownFlag(s) => write!(f, "Unknown option '{s}'"),
            CommandError::MissingValue(s) => write!(f, "Option '{s}' requires a value"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::BadSquare(e)
    }
}

enum Flow {
    Continue,
    Stop,
}

/// Run a session until `quit`, end of input, or the game ends.
pub fn run<R: BufRead, W: Write>(
    game: &mut GameState,
    input: R,
    output: &mut W,
    options: &CliOptions,
) -> io::Result<()> {
    writeln!(output, "Chess game started!")?;
    writeln!(output, "Enter moves like: e2 e4 (type 'help' for commands)")?;
    print_board(game, output, options)?;
    print_status(game, output)?;

    if !game.is_over() {
        prompt(game, output)?;
        for line in input.lines() {
            let line = line?;
            let flow = match parse_command(&line) {
                Ok(Some(cmd)) => handle(game, cmd, output, options)?,
                Ok(None) => Flow::Continue,
                Err(e) => {
                    writeln!(output, "Invalid input: {e}. Type 'help' for commands.")?;
                    Flow::Continue
                }
            };
            if matches!(flow, Flow::Stop) || game.is_over() {
                break;
            }
            prompt(game, output)?;
        }
    }

    if game.is_over() {
        writeln!(output, "Game over!")?;
    }
    output.flush()
}

fn prompt<W: Write>(game: &GameState, output: &mut W) -> io::Result<()> {
    write!(output, "\n{}'s turn: ", game.current_player().name)?;
    output.flush()
}

fn handle<W: Write>(
    game: &mut GameState,
    cmd: Command,
    output: &mut W,
    options: &CliOptions,
) -> io::Result<Flow> {
    match cmd {
        Command::Move {
            from,
            to,
            promotion,
        } => match game.apply_move(from, to, promotion) {
            Ok(mv) => {
                if let Some(piece) = mv.promotion() {
                    writeln!(output, "Pawn promoted to {piece}!")?;
                }
                print_board(game, output, options)?;
                print_status(game, output)?;
            }
            Err(e) => writeln!(output, "Illegal move: {e}")?,
        },
        Command::Legal(square) => print_legal(game, square, output)?,
        Command::History => print_history(game, output)?,
        Command::Board => print_board(game, output, options)?,
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => return Ok(Flow::Stop),
    }
    Ok(Flow::Continue)
}

fn print_board<W: Write>(game: &GameState, output: &mut W, options: &CliOptions) -> io::Result<()> {
    let last = if options.highlight_last_move {
        game.last_move()
    } else {
        None
    };
    write!(output, "{}", render::render_board(game.board(), last, &options.style))
}

fn print_status<W: Write>(game: &GameState, output: &mut W) -> io::Result<()> {
    match game.outcome() {
        Outcome::Checkmate { winner } => writeln!(output, "Checkmate! {winner} wins!"),
        Outcome::Stalemate => writeln!(output, "Stalemate! Draw!"),
        Outcome::InProgress if game.is_in_check() => {
            writeln!(output, "{} is in check!", game.current_player().name)
        }
        Outcome::InProgress => Ok(()),
    }
}

fn print_legal<W: Write>(
    game: &GameState,
    square: Square,
    output: &mut W,
) -> io::Result<()> {
    let Some(piece) = game.board().piece_at(square) else {
        return writeln!(output, "No piece at {square}");
    };
    let dests = game.legal_destinations(square);
    let listed: Vec<String> = dests.iter().map(ToString::to_string).collect();
    writeln!(
        output,
        "Legal moves for {} {} at {square}: {}",
        piece.color,
        piece.kind,
        if listed.is_empty() {
            "None".to_string()
        } else {
            listed.join(" ")
        }
    )
}

fn print_history<W: Write>(game: &GameState, output: &mut W) -> io::Result<()> {
    if game.history().is_empty() {
        return writeln!(output, "No moves yet.");
    }
    writeln!(output, "Move history:")?;
    for (i, mv) in game.history().iter().enumerate() {
        writeln!(output, "{}. {mv}", i + 1)?;
    }
    Ok(())
}
