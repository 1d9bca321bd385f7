use shakmaty::{Color, Piece, Square};

use crate::board::Board;
use crate::setup::initial_position;

/// Snapshot of a game between moves.
///
/// States are never edited in place. The reducer consumes one and hands back
/// its successor, so any snapshot a caller keeps stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    /// Side whose pieces may move.
    pub turn: Color,

    /// Informational only: carried through transitions, never computed or enforced.
    pub in_check: bool,
}

impl GameState {
    /// A state with `turn` to move and no check flagged.
    pub const fn new(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            in_check: false,
        }
    }

    /// Shorthand for `self.board.piece_at(square)`.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }
}

/// The orthodox starting position.
impl Default for GameState {
    fn default() -> Self {
        initial_position()
    }
}
