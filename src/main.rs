use std::io;
use std::process::ExitCode;

use chess_rules::cli::{self, options::CliOptions, options::USAGE};
use chess_rules::new_game;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if options.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let mut game = new_game(&options.white, &options.black);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = cli::run(&mut game, stdin.lock(), &mut stdout, &options) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
