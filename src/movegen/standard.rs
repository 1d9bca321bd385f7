//! Orthodox pseudo-legal destinations, ignoring the portal rule.
//!
//! Sliders get capture-stops-slide semantics straight from the attack tables:
//! a ray includes the first occupied square it meets, and masking out our own
//! pieces turns that into "stop before a friend, stop on an enemy".

use shakmaty::{Bitboard, Color, Piece, Rank, Role, Square, attacks};

use crate::board::Board;
use crate::coord::offset;

/// Orthodox destinations for `piece` standing on `from`.
///
/// King safety is not considered.
pub fn destinations(board: &Board, from: Square, piece: Piece) -> Bitboard {
    let ours = board.by_color(piece.color);
    let occupied = board.occupied();

    match piece.role {
        Role::Pawn => pawn_destinations(board, from, piece.color),
        Role::Knight => attacks::knight_attacks(from) & !ours,
        Role::Bishop => attacks::bishop_attacks(from, occupied) & !ours,
        Role::Rook => attacks::rook_attacks(from, occupied) & !ours,
        Role::Queen => attacks::queen_attacks(from, occupied) & !ours,
        Role::King => attacks::king_attacks(from) & !ours,
    }
}

/// Single and double pushes onto empty squares plus diagonal captures.
///
/// No en passant.
fn pawn_destinations(board: &Board, from: Square, color: Color) -> Bitboard {
    let (forward, home) = match color {
        Color::White => (1, Rank::Second),
        Color::Black => (-1, Rank::Seventh),
    };
    let is_empty = |square: &Square| board.piece_at(*square).is_none();

    let single = offset(from, 0, forward).filter(is_empty);
    let double = single
        .filter(|_| from.rank() == home)
        .and_then(|square| offset(square, 0, forward))
        .filter(is_empty);
    let captures = attacks::pawn_attacks(color, from) & board.by_color(color.other());

    single.into_iter().chain(double).collect::<Bitboard>() | captures
}
