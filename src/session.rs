use std::ops::ControlFlow;

use shakmaty::Square;
use thiserror::Error;

use crate::feedback::{BoardFeedback, compute_feedback};
use crate::game_logic::GameEngine;
use crate::orientation::Orientation;
use crate::selection::{ClickOutcome, Selection};
use crate::{BoardRenderer, BoardView, FrameLimiter, InputEvent, InputSource};

/// Failure of one of the loop's collaborators.
#[derive(Debug, Error)]
pub enum SessionError<I, R> {
    #[error("input source failed: {0}")]
    Input(I),
    #[error("renderer failed: {0}")]
    Render(R),
}

/// One game at the board: position, selection and the player's seat.
///
/// Owns all mutable state of the frame loop.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    selection: Selection,
    orientation: Orientation,
    board_size: u32,
}

impl Session {
    pub fn new(engine: GameEngine, orientation: Orientation, board_size: u32) -> Self {
        Self {
            engine,
            selection: Selection::Empty,
            orientation,
            board_size,
        }
    }

    #[inline]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    /// Highlights for the current state.
    pub fn feedback(&self) -> BoardFeedback {
        compute_feedback(&self.engine, &self.selection)
    }

    /// Handle one input event. `Break` means the session should end.
    pub fn handle_event(&mut self, event: InputEvent) -> ControlFlow<()> {
        match event {
            InputEvent::Quit => return ControlFlow::Break(()),
            InputEvent::Click { x, y } => {
                self.click_at(x, y);
            }
        }
        ControlFlow::Continue(())
    }

    /// Click at window pixels. Clicks off the board are ignored.
    pub fn click_at(&mut self, x: f32, y: f32) -> ClickOutcome {
        match self.orientation.square_from_pixel(x, y, self.board_size) {
            Some(square) => self.click_square(square),
            None => {
                log::debug!("click at ({x}, {y}) is off the board");
                ClickOutcome::Ignored
            }
        }
    }

    /// Click on a resolved square.
    pub fn click_square(&mut self, square: Square) -> ClickOutcome {
        let outcome = self.selection.click(&mut self.engine, square);
        if matches!(outcome, ClickOutcome::Moved(_)) {
            self.report_game_over();
        }
        outcome
    }

    fn report_game_over(&self) {
        if self.engine.is_checkmate() {
            log::info!("checkmate, {:?} wins", !self.engine.turn());
        } else if self.engine.is_stalemate() {
            log::info!("stalemate");
        } else if self.engine.is_game_over() {
            log::info!("draw by insufficient material");
        }
    }

    /// Run the frame loop until a quit event.
    ///
    /// Each frame drains every queued event, draws once, then waits on the
    /// limiter. A quit ends the loop before the frame is drawn.
    pub fn run<I, R, L>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        limiter: &mut L,
    ) -> Result<(), SessionError<I::Error, R::Error>>
    where
        I: InputSource,
        R: BoardRenderer,
        L: FrameLimiter,
    {
        loop {
            let events = input.poll().map_err(SessionError::Input)?;
            for event in events {
                if self.handle_event(event).is_break() {
                    log::info!("quit");
                    return Ok(());
                }
            }

            self.draw(renderer).map_err(SessionError::Render)?;
            limiter.wait();
        }
    }

    /// Draw the current state once.
    pub fn draw<R: BoardRenderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        let feedback = self.feedback();
        renderer.draw(&BoardView {
            board: self.engine.board(),
            turn: self.engine.turn(),
            selection: &self.selection,
            feedback: &feedback,
            orientation: self.orientation,
        })
    }
}
