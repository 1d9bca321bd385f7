//! Rule engine for mirror chess: orthodox piece movement plus portal moves
//! that tunnel through the a- and h-file walls.
//!
//! The engine is two pure functions over immutable snapshots:
//! [`legal_moves_for`] lists the candidate moves of one piece and
//! [`reduce_move`] applies a move, ignoring anything not on that list.
//! [`Game`] wraps them for callers that want one authoritative state with undo.

pub mod board;
pub mod cli;
pub mod coord;
pub mod engine;
pub mod error;
pub mod hints;
pub mod movegen;
pub mod reducer;
pub mod setup;
pub mod state;

pub use board::Board;
pub use engine::Game;
pub use error::ParseError;
pub use movegen::{Move, Special, legal_moves_for};
pub use reducer::reduce_move;
pub use shakmaty::{Color, Piece, Role, Square};
pub use state::GameState;
