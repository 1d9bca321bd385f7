use shakmaty::Square;

use crate::movegen::{Move, legal_moves_for};
use crate::state::GameState;

/// Highlight for an individual square after a piece is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareHint {
    /// The selected piece
    Origin,
    /// Orthodox move onto an empty square
    Destination,
    /// Orthodox move that captures
    Capture,
    /// Portal move onto an empty square
    Portal,
    /// Portal move that captures
    PortalCapture,
}

/// What to highlight after selecting one piece.
///
/// Built by [`compute_hints`] from the candidate moves, so a front end can
/// draw it without knowing the movement rules. An empty value (no origin)
/// means the selection has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveHints {
    origin: Option<Square>,
    targets: Vec<(Square, SquareHint)>,
}

impl MoveHints {
    /// The selected square, unless nothing is highlighted.
    pub fn origin(&self) -> Option<Square> {
        self.origin
    }

    /// Move targets in candidate order, one entry per square.
    pub fn targets(&self) -> &[(Square, SquareHint)] {
        &self.targets
    }

    pub fn hint_at(&self, square: Square) -> Option<SquareHint> {
        if self.origin == Some(square) {
            return Some(SquareHint::Origin);
        }
        self.targets
            .iter()
            .find_map(|&(target, hint)| (target == square).then_some(hint))
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none()
    }
}

/// Compute highlights for selecting the piece on `selected`.
///
/// Nothing is highlighted when the selection has no candidate moves.
/// A square reachable both orthodoxly and through the portal is shown as
/// orthodox.
pub fn compute_hints(state: &GameState, selected: Square) -> MoveHints {
    let moves = legal_moves_for(state, selected);
    if moves.is_empty() {
        return MoveHints::default();
    }

    let mut targets: Vec<(Square, SquareHint)> = Vec::with_capacity(moves.len());
    for mv in &moves {
        if targets.iter().all(|&(target, _)| target != mv.to) {
            targets.push((mv.to, classify_move(state, mv)));
        }
    }
    MoveHints {
        origin: Some(selected),
        targets,
    }
}

/// Classify a move by whether it captures and whether it uses the portal
fn classify_move(state: &GameState, mv: &Move) -> SquareHint {
    let capture = state.piece_at(mv.to).is_some() || mv.captures.is_some();
    match (mv.is_mirror(), capture) {
        (false, false) => SquareHint::Destination,
        (false, true) => SquareHint::Capture,
        (true, false) => SquareHint::Portal,
        (true, true) => SquareHint::PortalCapture,
    }
}
