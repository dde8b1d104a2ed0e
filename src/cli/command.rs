use crate::board::{Piece, Square};

use super::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
    Legal(Square),
    History,
    Board,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };

    let cmd = match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "history" => Command::History,
        "board" => Command::Board,
        "help" | "?" => Command::Help,
        "legal" => {
            let square: Square = parts.get(1).ok_or(CommandError::MissingSquare)?.parse()?;
            Command::Legal(square)
        }
        _ => {
            let from: Square = head
                .parse()
                .map_err(|_| CommandError::Unknown(head.to_string()))?;
            let to: Square = parts.get(1).ok_or(CommandError::MissingSquare)?.parse()?;
            let promotion = parts.get(2).map(|p| parse_promotion(p)).transpose()?;
            Command::Move {
                from,
                to,
                promotion,
            }
        }
    };

    let expected = match cmd {
        Command::Move {
            promotion: Some(_), ..
        } => 3,
        Command::Move { .. } | Command::Legal(_) => 2,
        _ => 1,
    };
    if parts.len() > expected {
        return Err(CommandError::TrailingInput(parts[expected..].join(" ")));
    }

    Ok(Some(cmd))
}

fn parse_promotion(token: &str) -> Result<Piece, CommandError> {
    let mut chars = token.chars();
    match (chars.next().and_then(Piece::from_char), chars.next()) {
        (Some(piece), None) => Ok(piece),
        _ => Err(CommandError::BadPromotion(token.to_string())),
    }
}
