use shakmaty::{Board, Color};

pub mod config;
pub mod feedback;
pub mod frame;
pub mod game_logic;
pub mod orientation;
pub mod selection;
pub mod session;
pub mod terminal;

/// A single input event delivered to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close the session.
    Quit,
    /// Pointer click at window pixels, origin top-left, y growing downward.
    Click { x: f32, y: f32 },
}

/// Trait for reading input events, one frame at a time.
///
/// Abstracts over interactive and scripted inputs, providing a uniform
/// interface for the [`session::Session`] loop.
pub trait InputSource {
    /// Error type for input read failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Events queued since the previous frame, in arrival order.
    fn poll(&mut self) -> Result<Vec<InputEvent>, Self::Error>;
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub turn: Color,
    pub selection: &'a selection::Selection,
    pub feedback: &'a feedback::BoardFeedback,
    pub orientation: orientation::Orientation,
}

/// Trait for drawing the board to the player.
///
/// Owns whatever output context it needs; the frame loop only hands it the
/// current [`BoardView`]. Mirrors [`InputSource`] on the output side.
pub trait BoardRenderer {
    /// Error type for draw failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Redraw the board from the given state.
    fn draw(&mut self, view: &BoardView<'_>) -> Result<(), Self::Error>;
}

/// Paces the frame loop.
pub trait FrameLimiter {
    /// Called once after every drawn frame.
    fn wait(&mut self);
}
