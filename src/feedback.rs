use shakmaty::Square;

use crate::game_logic::{GameEngine, destination};
use crate::selection::Selection;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// Click here to move the selected piece
    Destination,
    /// Clicking here captures an opponent piece
    Capture,
    /// The selected piece
    Origin,
    /// King of the side to move, in check
    Check,
    /// Piece giving check
    Checker,
}

/// Contains the set of squares and their associated feedback types for the current board state.
///
/// `BoardFeedback` is computed by [`compute_feedback`] and consumed by renderers to
/// highlight the selected piece, its legal destinations and any check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Square, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Square, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any previous entry.
    pub fn set(&mut self, square: Square, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    /// Returns true if there are no feedback squares to display.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Square, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Square, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Compute visual feedback for the current position and selection.
///
/// - In check: king and checking pieces
/// - Piece selected: origin plus its legal destinations, captures marked
///
/// Selection highlights win over check highlights on the same square.
pub fn compute_feedback(engine: &GameEngine, selection: &Selection) -> BoardFeedback {
    let mut feedback = show_check(engine);

    if let Selection::Selected {
        square,
        destinations,
    } = selection
    {
        show_destinations_for(&mut feedback, engine, *square, |sq| {
            destinations.contains(sq)
        });
    }

    feedback
}

/// Highlight the king in check and its attackers
fn show_check(engine: &GameEngine) -> BoardFeedback {
    let checkers = engine.checkers();
    let Some(king) = engine.king_square().filter(|_| !checkers.is_empty()) else {
        return BoardFeedback::default();
    };

    std::iter::once((king, SquareFeedback::Check))
        .chain(checkers.into_iter().map(|sq| (sq, SquareFeedback::Checker)))
        .collect::<Vec<_>>()
        .into()
}

/// Highlight the selected piece and where it can go.
///
/// Only destinations that were offered with the selection are shown.
fn show_destinations_for(
    feedback: &mut BoardFeedback,
    engine: &GameEngine,
    from: Square,
    offered: impl Fn(Square) -> bool,
) {
    feedback.set(from, SquareFeedback::Origin);
    let turn = engine.turn();
    for mv in engine.moves_from(from) {
        let to = destination(&mv, turn);
        if !offered(to) {
            continue;
        }
        let kind = if mv.is_capture() {
            SquareFeedback::Capture
        } else {
            SquareFeedback::Destination
        };
        feedback.set(to, kind);
    }
}
