use shakmaty::Square;
use thiserror::Error;

/// Error raised while reading external board input.
///
/// This is the only failure the engine reports. Illegal move requests are
/// not errors; the reducer simply ignores them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Square notation must be a lowercase file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square notation: '{0}'")]
    InvalidSquare(String),

    /// Side prefix of a placement segment was not `w` or `b`.
    #[error("unknown side '{0}' (expected 'w' or 'b')")]
    UnknownSide(String),

    /// Piece letter was not one of `KQRBNP`.
    #[error("unknown piece letter '{0}' (expected one of KQRBNP)")]
    UnknownKind(char),

    /// Segment had no `<side>:` prefix.
    #[error("malformed segment '{0}' (expected '<side>:<placements>')")]
    MalformedSegment(String),

    /// Placement was not a piece letter followed by a square.
    #[error("malformed placement '{0}' (expected e.g. 'Ka1')")]
    MalformedPlacement(String),

    /// Two placements named the same square.
    #[error("square {0} is occupied more than once")]
    DuplicateSquare(Square),

    /// Move text was not `<from><to>` with an optional `~` portal marker.
    #[error("malformed move '{0}' (expected e.g. 'e2e4' or 'a1~h1')")]
    MalformedMove(String),

    /// Turn token was not a recognised color.
    #[error("unknown turn '{0}' (expected 'w', 'b', 'white' or 'black')")]
    UnknownTurn(String),
}
