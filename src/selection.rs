use shakmaty::{Bitboard, CastlingMode, Move, Square};

use crate::game_logic::GameEngine;

/// Click-driven selection of the piece about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Empty,
    /// A piece of the side to move is selected.
    ///
    /// `destinations` is computed by the rules engine when the selection is
    /// made and is never reused after the board changes.
    Selected {
        square: Square,
        destinations: Bitboard,
    },
}

/// What a click did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was picked up.
    Selected(Square),
    /// The selected piece moved.
    Moved(Move),
    /// The selection was dropped without a move.
    Deselected,
    /// Nothing happened.
    Ignored,
}

impl Selection {
    /// Origin square of the current selection.
    #[inline]
    pub fn square(&self) -> Option<Square> {
        match self {
            Selection::Empty => None,
            Selection::Selected { square, .. } => Some(*square),
        }
    }

    /// Offered destinations, empty when nothing is selected.
    #[inline]
    pub fn destinations(&self) -> Bitboard {
        match self {
            Selection::Empty => Bitboard::EMPTY,
            Selection::Selected { destinations, .. } => *destinations,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Advance the state machine with a click on `square`.
    ///
    /// - Empty: select a piece of the side to move, else stay empty.
    /// - Selected: play the move if `square` is an offered destination,
    ///   then reset; any other square just drops the selection.
    pub fn click(&mut self, engine: &mut GameEngine, square: Square) -> ClickOutcome {
        match std::mem::take(self) {
            Selection::Empty => {
                if !engine.is_own_piece(square) {
                    log::debug!("click on {square} selects nothing");
                    return ClickOutcome::Ignored;
                }
                let destinations = engine.legal_destinations(square);
                log::debug!(
                    "selected {square} with {} destination(s)",
                    destinations.count()
                );
                *self = Selection::Selected {
                    square,
                    destinations,
                };
                ClickOutcome::Selected(square)
            }
            Selection::Selected {
                square: origin,
                destinations,
            } => {
                if !destinations.contains(square) {
                    log::debug!("dropped selection of {origin}");
                    return ClickOutcome::Deselected;
                }
                match engine.play(origin, square) {
                    Some(mv) => {
                        log::info!("played {}", mv.to_uci(CastlingMode::Standard));
                        ClickOutcome::Moved(mv)
                    }
                    None => {
                        // Only reachable if the board changed behind the selection.
                        log::debug!("{origin}{square} no longer legal");
                        ClickOutcome::Deselected
                    }
                }
            }
        }
    }
}
