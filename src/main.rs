use std::process::ExitCode;

use clap::Parser;
use mirror_chess::cli::{self, Args};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    log::debug!("board {:?}, turn {:?}", args.board, args.turn);

    match cli::run(&args, &mut std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
