use log::debug;
use shakmaty::{Piece, Square};

use crate::movegen::{Move, legal_moves_for};
use crate::reducer::reduce_move;
use crate::setup::initial_position;
use crate::state::GameState;

/// Owner of the authoritative state of one game.
///
/// All changes go through [`Game::play`], which swaps in the reducer's result.
/// Replaced snapshots are kept for [`Game::undo`].
#[derive(Default)]
pub struct Game {
    state: GameState,
    history: Vec<GameState>,
}

impl Game {
    #[inline]
    pub fn new() -> Self {
        Self::from_state(initial_position())
    }

    /// Creates a Game from an existing state, with no history.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    /// Current snapshot.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.piece_at(square)
    }

    /// Candidate moves for the piece on `origin`.
    pub fn legal_moves(&self, origin: Square) -> Vec<Move> {
        legal_moves_for(&self.state, origin)
    }

    /// Play `mv` if it is legal in the current state.
    ///
    /// Returns whether the move was accepted; rejected moves leave the game as is.
    pub fn play(&mut self, mv: &Move) -> bool {
        let next = reduce_move(self.state.clone(), mv);
        if next == self.state {
            return false;
        }
        debug!("played {mv}");
        self.history.push(std::mem::replace(&mut self.state, next));
        true
    }

    /// Restore the state before the last accepted move.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                true
            }
            None => false,
        }
    }

    /// Number of moves played and not undone.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.state.board.to_pieces_spec())
            .field("turn", &self.state.turn)
            .field("in_check", &self.state.in_check)
            .field("ply", &self.ply())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::from_pieces_spec;
    use shakmaty::{Color, Role};

    fn assert_piece(game: &Game, square: Square, role: Role, color: Color) {
        let expected = Piece { role, color };
        assert_eq!(
            game.piece_at(square),
            Some(expected),
            "Expected {:?} at {}, found {:?}",
            expected,
            square,
            game.piece_at(square)
        );
    }

    fn assert_empty(game: &Game, square: Square) {
        assert_eq!(
            game.piece_at(square),
            None,
            "Expected empty at {}, found {:?}",
            square,
            game.piece_at(square)
        );
    }

    fn play_all(game: &mut Game, moves: &str) {
        for text in moves.split_whitespace() {
            let mv: Move = text.parse().expect("test move should parse");
            assert!(game.play(&mv), "{text} should be accepted");
        }
    }

    #[test]
    fn game_sequence() {
        let mut game = Game::new();

        play_all(&mut game, "e2e4 e7e5 g1f3 b8c6");

        assert_piece(&game, Square::E4, Role::Pawn, Color::White);
        assert_piece(&game, Square::E5, Role::Pawn, Color::Black);
        assert_piece(&game, Square::F3, Role::Knight, Color::White);
        assert_piece(&game, Square::C6, Role::Knight, Color::Black);
        assert_eq!(game.state().turn, Color::White);
        assert_eq!(game.ply(), 4);
    }

    #[test]
    fn illegal_move_ignored() {
        let mut game = Game::new();

        assert!(!game.play(&Move::normal(Square::E2, Square::E5)));

        assert_piece(&game, Square::E2, Role::Pawn, Color::White);
        assert_empty(&game, Square::E5);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn portal_move_through_game() {
        let state = from_pieces_spec("w:Ra1,Ke2; b:Ke8,Nh1", Color::White).unwrap();
        let mut game = Game::from_state(state);

        assert!(game.legal_moves(Square::A1).contains(&Move::mirror(Square::A1, Square::H1)));
        assert!(game.play(&Move::mirror(Square::A1, Square::H1)));

        assert_piece(&game, Square::H1, Role::Rook, Color::White);
        assert_empty(&game, Square::A1);
        assert_eq!(game.state().turn, Color::Black);
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut game = Game::new();
        play_all(&mut game, "d2d4 d7d5");

        assert!(game.undo());
        assert_piece(&game, Square::D7, Role::Pawn, Color::Black);
        assert_eq!(game.state().turn, Color::Black);

        assert!(game.undo());
        assert_eq!(game.state(), &initial_position());
        assert!(!game.undo());
    }

    #[test]
    fn debug_shows_spec() {
        let state = from_pieces_spec("w:Ka1; b:Kh8", Color::White).unwrap();
        let text = format!("{:?}", Game::from_state(state));
        assert!(text.contains("w:Ka1; b:Kh8"));
    }
}
