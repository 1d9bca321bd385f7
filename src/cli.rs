//! Command-line front end: load a position, play moves, list candidates.
//!
//! Positional tokens are either squares (`a3`) to list candidate moves for or
//! moves (`e2e4`, `a1~h1`) played in order before listing. Without squares,
//! every piece of the side to move is listed.

use std::io::{self, Write};

use clap::Parser;
use shakmaty::{Color, Square};
use thiserror::Error;

use crate::coord::{algebraic, parse_algebraic};
use crate::engine::Game;
use crate::error::ParseError;
use crate::movegen::Move;
use crate::setup::{from_pieces_spec, initial_position, parse_turn};
use crate::state::GameState;

/// Environment variable holding a default board spec.
pub const BOARD_ENV: &str = "MIRROR_CHESS_BOARD";

const STARTPOS: &str = "startpos";

/// Mirror chess move explorer.
#[derive(Debug, Parser)]
#[command(name = "mirror-chess", version, about)]
pub struct Args {
    /// Pieces per side (`w:Ke1,Ra1; b:Ke8`) or `startpos`
    #[arg(short, long, env = BOARD_ENV, default_value = STARTPOS)]
    pub board: String,

    /// Side to move: w, white, b or black
    #[arg(short, long, default_value = "w", value_parser = parse_turn)]
    pub turn: Color,

    /// Moves to play (`e2e4`, `a1~h1`) and squares to list (`a3`)
    #[arg(value_name = "MOVE|SQUARE", value_parser = parse_token)]
    pub tokens: Vec<Token>,
}

/// One positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Play(Move),
    Query(Square),
}

/// Two characters name a square; anything longer is a move.
fn parse_token(s: &str) -> Result<Token, ParseError> {
    if s.len() == 2 {
        parse_algebraic(s).map(Token::Query)
    } else {
        s.parse().map(Token::Play)
    }
}

/// Error type for command-line runs.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("illegal move: {0}")]
    Rejected(Move),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Load the position, play the moves and write the board plus candidate lists.
pub fn run(args: &Args, w: &mut impl Write) -> Result<(), CliError> {
    let state = load(&args.board, args.turn)?;
    let mut game = Game::from_state(state);

    let mut queried = Vec::new();
    for token in &args.tokens {
        match *token {
            Token::Query(square) => queried.push(square),
            Token::Play(mv) => {
                if !game.play(&mv) {
                    return Err(CliError::Rejected(mv));
                }
            }
        }
    }
    if queried.is_empty() {
        let state = game.state();
        queried = state.board.by_color(state.turn).into_iter().collect();
    }

    render(w, &game, &queried)?;
    Ok(())
}

fn load(spec: &str, turn: Color) -> Result<GameState, ParseError> {
    if spec.trim() == STARTPOS {
        let mut state = initial_position();
        state.turn = turn;
        Ok(state)
    } else {
        from_pieces_spec(spec, turn)
    }
}

fn render(w: &mut impl Write, game: &Game, squares: &[Square]) -> io::Result<()> {
    let state = game.state();
    writeln!(w, "{}", state.board)?;
    let turn = match state.turn {
        Color::White => "white",
        Color::Black => "black",
    };
    writeln!(w, "turn: {turn}")?;
    for &square in squares {
        let moves: Vec<String> = game.legal_moves(square).iter().map(Move::to_string).collect();
        writeln!(w, "{}: {}", algebraic(square), moves.join(" "))?;
    }
    w.flush()
}
