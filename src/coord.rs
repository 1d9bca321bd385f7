//! Square addressing on the 8x8 board.
//!
//! Squares are [`shakmaty::Square`] values: file `a`-`h` maps to 0-7 and
//! rank `1`-`8` maps to 0-7 from White's side, so the board index is
//! `rank * 8 + file` (a1 = 0, h1 = 7, a8 = 56, h8 = 63).

use shakmaty::{File, Rank, Square};

use crate::error::ParseError;

/// Board index (0-63) of a square.
#[inline]
pub fn index(square: Square) -> usize {
    square as usize
}

/// True if the file/rank pair lies on the board.
#[inline]
pub fn inside(file: i32, rank: i32) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

/// Square reached by stepping `(df, dr)` from `square`, if it is on the board.
pub fn offset(square: Square, df: i32, dr: i32) -> Option<Square> {
    let file = square.file() as i32 + df;
    let rank = square.rank() as i32 + dr;
    inside(file, rank).then(|| Square::from_coords(File::new(file as u32), Rank::new(rank as u32)))
}

/// Algebraic name of a square, e.g. `"e4"`.
pub fn algebraic(square: Square) -> String {
    format!("{}{}", square.file().char(), square.rank().char())
}

/// Parse strict algebraic notation: a lowercase file `a`-`h` then a rank `1`-`8`.
pub fn parse_algebraic(s: &str) -> Result<Square, ParseError> {
    match *s.as_bytes() {
        [f @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Square::from_coords(
            File::new(u32::from(f - b'a')),
            Rank::new(u32::from(r - b'1')),
        )),
        _ => Err(ParseError::InvalidSquare(s.to_owned())),
    }
}

/// Reflect a square across the board's vertical center line (a <-> h, b <-> g, ...).
#[inline]
pub fn mirror_file(square: Square) -> Square {
    Square::from_coords(File::new(7 - square.file() as u32), square.rank())
}
