use std::collections::VecDeque;
use std::convert::Infallible;

use thiserror::Error;

use crate::{InputEvent, InputSource};

/// Error when parsing an input script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid script token: '{0}'")]
pub struct ParseError(String);

/// A scriptable input source for replays and tests.
///
/// Holds frames of queued events and hands out one frame per poll.
/// New script can be appended at any time. Once drained, every poll
/// yields [`InputEvent::Quit`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending_frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a script, see [`ScriptedInput::push_script`].
    pub fn from_script(script: &str) -> Result<Self, ParseError> {
        let mut input = Self::new();
        input.push_script(script)?;
        Ok(input)
    }

    /// Parse and queue additional script.
    ///
    /// Format:
    /// - `x,y` clicks at whole window pixels (e.g. `450,650`)
    /// - `q` quits
    /// - Whitespace separates events in the same frame
    /// - `.` ends a frame
    ///
    /// Examples:
    /// - `"450,650 450,450."` - Two clicks in one frame
    /// - `"450,650. 450,450. q"` - One click per frame, then quit
    ///
    /// On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let frames = parse_script(script)?;
        self.pending_frames.extend(frames);
        Ok(())
    }

    /// Number of frames still queued.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending_frames.len()
    }
}

impl InputSource for ScriptedInput {
    type Error = Infallible;

    fn poll(&mut self) -> Result<Vec<InputEvent>, Self::Error> {
        Ok(self
            .pending_frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}

/// Parse a script string into frames of events.
fn parse_script(script: &str) -> Result<Vec<Vec<InputEvent>>, ParseError> {
    let mut frames: Vec<Vec<InputEvent>> = Vec::new();
    for chunk in script.split('.') {
        let frame = chunk
            .split_whitespace()
            .map(parse_event)
            .collect::<Result<Vec<_>, _>>()?;
        if !frame.is_empty() {
            frames.push(frame);
        }
    }
    Ok(frames)
}

fn parse_event(token: &str) -> Result<InputEvent, ParseError> {
    if token == "q" {
        return Ok(InputEvent::Quit);
    }
    let invalid = || ParseError(token.to_string());
    let (x, y) = token.split_once(',').ok_or_else(invalid)?;
    let x: f32 = x.parse().map_err(|_| invalid())?;
    let y: f32 = y.parse().map_err(|_| invalid())?;
    Ok(InputEvent::Click { x, y })
}
