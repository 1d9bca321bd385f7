//! Candidate moves for a selected square.

mod portal;
mod standard;

use std::fmt;
use std::str::FromStr;

use shakmaty::Square;

use crate::coord::{algebraic, parse_algebraic};
use crate::error::ParseError;
use crate::state::GameState;

/// Variant behavior attached to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    /// Produced by the portal rule rather than orthodox movement.
    Mirror,
}

/// A move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub special: Option<Special>,

    /// Square of a captured piece when it is not `to`.
    ///
    /// Reserved for en-passant-like captures; no generator sets it yet.
    pub captures: Option<Square>,
}

impl Move {
    /// An orthodox move.
    pub const fn normal(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            special: None,
            captures: None,
        }
    }

    /// A move through the portal.
    pub const fn mirror(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            special: Some(Special::Mirror),
            captures: None,
        }
    }

    #[inline]
    pub fn is_mirror(&self) -> bool {
        self.special == Some(Special::Mirror)
    }
}

/// `e2e4` for orthodox moves, `a1~h1` for portal moves.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_mirror() { "~" } else { "" };
        write!(f, "{}{}{}", algebraic(self.from), sep, algebraic(self.to))
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to, mirror) = match (s.get(..2), s.get(2..)) {
            (Some(from), Some(rest)) => match rest.strip_prefix('~') {
                Some(to) => (from, to, true),
                None => (from, rest, false),
            },
            _ => return Err(ParseError::MalformedMove(s.to_owned())),
        };
        if to.len() != 2 {
            return Err(ParseError::MalformedMove(s.to_owned()));
        }

        let (from, to) = (parse_algebraic(from)?, parse_algebraic(to)?);
        Ok(if mirror {
            Move::mirror(from, to)
        } else {
            Move::normal(from, to)
        })
    }
}

/// All candidate moves for the piece on `origin`.
///
/// Empty when `origin` is empty or holds a piece of the side not to move.
/// Otherwise the orthodox moves come first, followed by the portal moves of
/// that piece's kind. Moves are pseudo-legal: king safety is not checked.
pub fn legal_moves_for(state: &GameState, origin: Square) -> Vec<Move> {
    let Some(piece) = state.piece_at(origin) else {
        return Vec::new();
    };
    if piece.color != state.turn {
        return Vec::new();
    }

    let board = &state.board;
    let orthodox = standard::destinations(board, origin, piece)
        .into_iter()
        .map(|to| Move::normal(origin, to));
    let portal = portal::destinations(board, origin, piece)
        .into_iter()
        .map(|to| Move::mirror(origin, to));

    orthodox.chain(portal).collect()
}
