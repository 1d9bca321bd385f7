use std::fmt;

use shakmaty::{Bitboard, Color, File, Piece, Rank, Role, Square};

use crate::coord::{algebraic, index};

/// Piece placement on the 8x8 board.
///
/// One optional piece per square, indexed `rank * 8 + file`. The board is a
/// plain value: copying it is cheap, and every transition builds a new one
/// instead of editing a board someone else may still hold.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board([Option<Piece>; 64]);

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self([None; 64])
    }

    /// Occupant of `square`.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.0[index(square)]
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    pub fn set_piece_at(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.0[index(square)].replace(piece)
    }

    /// Clear `square`, returning the piece that stood there.
    pub fn remove_piece_at(&mut self, square: Square) -> Option<Piece> {
        self.0[index(square)].take()
    }

    /// All occupied squares with their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .into_iter()
            .filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Squares holding a piece of either color.
    pub fn occupied(&self) -> Bitboard {
        self.pieces().map(|(square, _)| square).collect()
    }

    /// Squares holding a piece of `color`.
    pub fn by_color(&self, color: Color) -> Bitboard {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(square, _)| square)
            .collect()
    }

    /// True if `square` holds a piece of the color opposite to `color`.
    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|piece| piece.color != color)
    }

    /// Render the placement in the compact `w:Ka1,...; b:Kg8,...` form.
    ///
    /// Segments for a side without pieces are omitted. Parsing the result with
    /// [`crate::setup::from_pieces_spec`] reproduces this board.
    pub fn to_pieces_spec(&self) -> String {
        [Color::White, Color::Black]
            .into_iter()
            .filter_map(|color| {
                let placements: Vec<String> = self
                    .pieces()
                    .filter(|(_, piece)| piece.color == color)
                    .map(|(square, piece)| {
                        format!("{}{}", kind_letter(piece.role), algebraic(square))
                    })
                    .collect();
                (!placements.is_empty())
                    .then(|| format!("{}:{}", side_letter(color), placements.join(",")))
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Uppercase letter naming a piece kind in board specs.
pub(crate) fn kind_letter(role: Role) -> char {
    match role {
        Role::King => 'K',
        Role::Queen => 'Q',
        Role::Rook => 'R',
        Role::Bishop => 'B',
        Role::Knight => 'N',
        Role::Pawn => 'P',
    }
}

/// Side prefix of a board-spec segment.
pub(crate) fn side_letter(color: Color) -> char {
    match color {
        Color::White => 'w',
        Color::Black => 'b',
    }
}

/// Diagram with rank 8 on top; white uppercase, black lowercase, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", rank.char())?;
            for file in File::ALL {
                let symbol = match self.piece_at(Square::from_coords(file, *rank)) {
                    Some(piece) if piece.color == Color::White => kind_letter(piece.role),
                    Some(piece) => kind_letter(piece.role).to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.to_pieces_spec()).finish()
    }
}
