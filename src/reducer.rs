use log::{debug, trace};

use crate::movegen::{Move, legal_moves_for};
use crate::state::GameState;

/// Apply `mv` to `state` if it is one of the candidate moves for `mv.from`.
///
/// A move is accepted when a candidate with the same destination and the same
/// `special` tag exists. An accepted move relocates the piece (overwriting,
/// and so capturing, whatever stood on `to`), clears the candidate's extra
/// capture square if it has one, and passes the turn. `in_check` is carried
/// over untouched.
///
/// Only the generated candidate decides what is captured; `mv.captures` is
/// never trusted. Anything else is ignored: `state` comes back unchanged.
pub fn reduce_move(state: GameState, mv: &Move) -> GameState {
    let Some(candidate) = legal_moves_for(&state, mv.from)
        .into_iter()
        .find(|candidate| candidate.to == mv.to && candidate.special == mv.special)
    else {
        debug!("rejected {mv}: not a candidate for {:?} to move", state.turn);
        return state;
    };

    let mut board = state.board;
    if let Some(piece) = board.remove_piece_at(candidate.from) {
        board.set_piece_at(candidate.to, piece);
    }
    if let Some(captured) = candidate.captures.filter(|&sq| sq != candidate.to) {
        board.remove_piece_at(captured);
    }
    trace!("applied {candidate}");

    GameState {
        board,
        turn: state.turn.other(),
        in_check: state.in_check,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::{from_pieces_spec, initial_position};
    use shakmaty::{Color, Piece, Role, Square};

    fn state(spec: &str, turn: Color) -> GameState {
        from_pieces_spec(spec, turn).expect("test spec should be valid")
    }

    fn assert_piece(state: &GameState, square: Square, role: Role, color: Color) {
        let expected = Piece { role, color };
        assert_eq!(
            state.piece_at(square),
            Some(expected),
            "Expected {:?} at {}, found {:?}",
            expected,
            square,
            state.piece_at(square)
        );
    }

    fn assert_empty(state: &GameState, square: Square) {
        assert_eq!(
            state.piece_at(square),
            None,
            "Expected empty at {}, found {:?}",
            square,
            state.piece_at(square)
        );
    }

    #[test]
    fn simple_pawn_push() {
        let next = reduce_move(initial_position(), &Move::normal(Square::E2, Square::E4));

        assert_empty(&next, Square::E2);
        assert_piece(&next, Square::E4, Role::Pawn, Color::White);
        assert_eq!(next.turn, Color::Black);
    }

    #[test]
    fn illegal_move_returns_state_unchanged() {
        let before = initial_position();
        let after = reduce_move(before.clone(), &Move::normal(Square::E2, Square::E5));
        assert_eq!(after, before);
    }

    #[test]
    fn moving_out_of_turn_is_ignored() {
        let before = initial_position();
        let after = reduce_move(before.clone(), &Move::normal(Square::E7, Square::E5));
        assert_eq!(after, before);
    }

    #[test]
    fn capture_overwrites_destination() {
        let before = state("w:Bc1; b:Pe3,Kh8", Color::White);
        let after = reduce_move(before, &Move::normal(Square::C1, Square::E3));

        assert_piece(&after, Square::E3, Role::Bishop, Color::White);
        assert_empty(&after, Square::C1);
        assert_eq!(after.board.pieces().count(), 2);
    }

    #[test]
    fn portal_tag_must_match() {
        let before = state("w:Na3", Color::White);

        let untagged = reduce_move(before.clone(), &Move::normal(Square::A3, Square::H3));
        assert_eq!(untagged, before);

        let tagged = reduce_move(before, &Move::mirror(Square::A3, Square::H3));
        assert_piece(&tagged, Square::H3, Role::Knight, Color::White);
        assert_empty(&tagged, Square::A3);
    }

    #[test]
    fn orthodox_move_with_portal_tag_is_rejected() {
        let before = state("w:Na3", Color::White);
        let after = reduce_move(before.clone(), &Move::mirror(Square::A3, Square::B5));
        assert_eq!(after, before);
    }

    #[test]
    fn in_check_flag_passes_through() {
        let mut before = state("w:Ke1; b:Ke8", Color::White);
        before.in_check = true;

        let after = reduce_move(before, &Move::normal(Square::E1, Square::E2));

        assert!(after.in_check);
        assert_eq!(after.turn, Color::Black);
    }

    #[test]
    fn caller_supplied_capture_square_is_ignored() {
        let before = state("w:Pa5; b:Pb5,Kh8", Color::White);
        let mv = Move {
            captures: Some(Square::B5),
            ..Move::normal(Square::A5, Square::A6)
        };

        let after = reduce_move(before, &mv);

        assert_piece(&after, Square::A6, Role::Pawn, Color::White);
        assert_empty(&after, Square::A5);
        assert_piece(&after, Square::B5, Role::Pawn, Color::Black);
        assert_piece(&after, Square::H8, Role::King, Color::Black);
    }

    #[test]
    fn capture_square_on_destination_keeps_the_mover() {
        let before = state("w:Pa5; b:Kh8", Color::White);
        let mv = Move {
            captures: Some(Square::A6),
            ..Move::normal(Square::A5, Square::A6)
        };

        let after = reduce_move(before, &mv);

        assert_piece(&after, Square::A6, Role::Pawn, Color::White);
        assert_empty(&after, Square::A5);
        assert_eq!(after.board.to_pieces_spec(), "w:Pa6; b:Kh8");
    }

    #[test]
    fn only_from_and_to_change() {
        let before = initial_position();
        let after = reduce_move(before.clone(), &Move::normal(Square::G1, Square::F3));

        for square in Square::ALL {
            if square != Square::G1 && square != Square::F3 {
                assert_eq!(before.piece_at(square), after.piece_at(square), "{square} changed");
            }
        }
    }

    #[test]
    fn earlier_snapshot_is_untouched() {
        let before = initial_position();
        let kept = before.clone();
        let _after = reduce_move(before, &Move::normal(Square::D2, Square::D4));
        assert_eq!(kept, initial_position());
    }
}
