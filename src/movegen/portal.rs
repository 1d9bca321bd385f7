//! Portal ("mirror") destinations: the wraparound rules of mirror chess.
//!
//! The a- and h-files are walls that can be tunnelled. Each kind uses the
//! walls differently:
//!
//! | Kind         | Portal destinations                                                  |
//! |--------------|----------------------------------------------------------------------|
//! | Knight       | `mirror_file(from)`, unless a friend stands there; ignores blockers  |
//! | King         | `mirror_file(from)`, unless a friend stands there; ignores blockers  |
//! | Pawn         | `mirror_file(from)`, only when an enemy stands there                 |
//! | Rook / Queen | horizontal wrap: clear walk to a side wall, re-enter at the other    |
//! | Bishop       | diagonal seam: clear diagonal to a file edge, re-enter mirrored file |
//!
//! Sliders wrap at most once per direction, and a wrapped ray obeys the same
//! capture-stops-slide rule as an orthodox one.

use log::trace;
use shakmaty::{Color, Piece, Role, Square};

use crate::board::Board;
use crate::coord::{mirror_file, offset};

/// Left and right along a rank.
const LATERAL: [(i32, i32); 2] = [(-1, 0), (1, 0)];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Portal destinations for `piece` standing on `from`, in ray order.
pub fn destinations(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    match piece.role {
        Role::Knight | Role::King => teleport(board, from, piece.color).into_iter().collect(),
        Role::Pawn => mirror_capture(board, from, piece.color).into_iter().collect(),
        Role::Rook | Role::Queen => horizontal_wrap(board, from, piece.color),
        Role::Bishop => diagonal_seam(board, from, piece.color),
    }
}

/// Jump to the file-mirrored square: a move if empty, a capture if enemy.
fn teleport(board: &Board, from: Square, color: Color) -> Option<Square> {
    let target = mirror_file(from);
    match board.piece_at(target) {
        Some(piece) if piece.color == color => None,
        _ => Some(target),
    }
}

/// Capture-only jump to the file-mirrored square.
fn mirror_capture(board: &Board, from: Square, color: Color) -> Option<Square> {
    let target = mirror_file(from);
    board.is_enemy(target, color).then_some(target)
}

fn horizontal_wrap(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::new();
    for (df, dr) in LATERAL {
        let Some(wall) = clear_run(board, from, df, dr) else {
            continue;
        };
        let entry = mirror_file(wall);
        trace!("{from}: wraps past {wall}, re-entering at {entry}");
        slide(board, entry, (df, dr), color, &mut out);
    }
    out
}

fn diagonal_seam(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::new();
    for (df, dr) in DIAGONALS {
        let Some(edge) = clear_run(board, from, df, dr) else {
            continue;
        };
        // The seam only joins file edges; leaving across rank 1 or 8 ends the ray.
        let Some(next_rank) = offset(edge, 0, dr) else {
            continue;
        };
        let entry = mirror_file(next_rank);
        trace!("{from}: crosses the seam past {edge}, re-entering at {entry}");
        slide(board, entry, (df, dr), color, &mut out);
    }
    out
}

/// Walk from `from` (exclusive) towards the edge in direction `(df, dr)`.
///
/// Returns the last square before the edge, which is `from` itself when it
/// already stands on it, or `None` if any piece of either color is in the way.
fn clear_run(board: &Board, from: Square, df: i32, dr: i32) -> Option<Square> {
    let mut last = from;
    while let Some(next) = offset(last, df, dr) {
        if board.piece_at(next).is_some() {
            trace!("{from}: portal walk blocked at {next}");
            return None;
        }
        last = next;
    }
    Some(last)
}

/// Slide from `start` (inclusive) in direction `(df, dr)` until the edge,
/// stopping before a friend or on an enemy.
fn slide(board: &Board, start: Square, (df, dr): (i32, i32), color: Color, out: &mut Vec<Square>) {
    let mut cursor = Some(start);
    while let Some(square) = cursor {
        match board.piece_at(square) {
            None => out.push(square),
            Some(piece) => {
                if piece.color != color {
                    out.push(square);
                }
                break;
            }
        }
        cursor = offset(square, df, dr);
    }
}
