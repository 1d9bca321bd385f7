//! Building initial states: the orthodox layout and the compact piece-list spec.
//!
//! Spec format: `"w:Ka1,Qd1,Ra2; b:Kg8,Pg7"`
//! - Segments are separated by `;` and start with a side, `w` or `b`, then `:`
//! - Placements are separated by `,` and are a kind letter (`KQRBNP`) followed
//!   by a square in algebraic notation
//! - Whitespace around segments and placements is ignored, as are empty ones

use shakmaty::{Color, File, Piece, Rank, Role, Square};

use crate::board::Board;
use crate::coord::parse_algebraic;
use crate::error::ParseError;
use crate::state::GameState;

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Orthodox starting position, white to move.
pub fn initial_position() -> GameState {
    let mut board = Board::empty();
    for (file, role) in File::ALL.into_iter().zip(BACK_RANK) {
        for (color, back, pawns) in [
            (Color::White, Rank::First, Rank::Second),
            (Color::Black, Rank::Eighth, Rank::Seventh),
        ] {
            board.set_piece_at(Square::from_coords(file, back), Piece { color, role });
            board.set_piece_at(
                Square::from_coords(file, pawns),
                Piece {
                    color,
                    role: Role::Pawn,
                },
            );
        }
    }
    GameState::new(board, Color::White)
}

/// Parse a piece-list spec into a state with `turn` to move.
///
/// An empty spec gives an empty board.
pub fn from_pieces_spec(spec: &str, turn: Color) -> Result<GameState, ParseError> {
    let mut board = Board::empty();

    for segment in spec.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (side, placements) = segment
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedSegment(segment.to_owned()))?;
        let color = match side.trim() {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseError::UnknownSide(other.to_owned())),
        };

        for token in placements.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (square, piece) = parse_placement(token, color)?;
            if board.set_piece_at(square, piece).is_some() {
                return Err(ParseError::DuplicateSquare(square));
            }
        }
    }

    Ok(GameState::new(board, turn))
}

/// Parse `w`, `b`, `white` or `black`.
pub fn parse_turn(s: &str) -> Result<Color, ParseError> {
    match s {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => Err(ParseError::UnknownTurn(s.to_owned())),
    }
}

/// Parse one placement such as `Ka1`.
fn parse_placement(token: &str, color: Color) -> Result<(Square, Piece), ParseError> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .ok_or_else(|| ParseError::MalformedPlacement(token.to_owned()))?;
    let square = chars.as_str();
    if square.chars().count() != 2 {
        return Err(ParseError::MalformedPlacement(token.to_owned()));
    }

    let role = match letter {
        'K' => Role::King,
        'Q' => Role::Queen,
        'R' => Role::Rook,
        'B' => Role::Bishop,
        'N' => Role::Knight,
        'P' => Role::Pawn,
        other => return Err(ParseError::UnknownKind(other)),
    };

    Ok((parse_algebraic(square)?, Piece { color, role }))
}
