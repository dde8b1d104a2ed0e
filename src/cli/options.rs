use super::render::RenderStyle;
use super::CommandError;

pub const USAGE: &str = "\
Usage: chess_rules [OPTIONS]

Options:
  --white <name>    name shown for the White player (default: White)
  --black <name>    name shown for the Black player (default: Black)
  --plain           draw the board without ANSI colors
  --no-highlight    do not highlight the last move
  -h, --help        print this message";

/// Settings for one front-end session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub white: String,
    pub black: String,
    pub style: RenderStyle,
    pub highlight_last_move: bool,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            white: "White".to_string(),
            black: "Black".to_string(),
            style: RenderStyle::ansi(),
            highlight_last_move: true,
            show_help: false,
        }
    }
}

impl CliOptions {
    /// Parse command-line flags, program name excluded.
    pub fn parse<I, S>(args: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--white" | "--black" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CommandError::MissingValue(arg.to_string()))?;
                    let name = value.as_ref().to_string();
                    if arg == "--white" {
                        options.white = name;
                    } else {
                        options.black = name;
                    }
                }
                "--plain" => options.style = RenderStyle::plain(),
                "--no-highlight" => options.highlight_last_move = false,
                "-h" | "--help" => options.show_help = true,
                _ => return Err(CommandError::UnknownFlag(arg.to_string())),
            }
        }

        Ok(options)
    }
}
