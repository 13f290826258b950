use std::io::{self, BufRead, StdinLock};

use shakmaty::Square;

use crate::orientation::Orientation;
use crate::{InputEvent, InputSource};

/// Line-based interactive input.
///
/// Reads one command per frame:
/// - `x y` click at window pixels
/// - `e2` click at the centre of that square's cell
/// - `q` or end of input quits
///
/// Square commands are placed through the same pixel mapping the session
/// uses, so they resolve to the named square for either orientation.
#[derive(Debug)]
pub struct StdinInput<R = StdinLock<'static>> {
    reader: R,
    orientation: Orientation,
    board_size: u32,
}

impl StdinInput {
    pub fn stdin(orientation: Orientation, board_size: u32) -> Self {
        Self::new(io::stdin().lock(), orientation, board_size)
    }
}

impl<R: BufRead> StdinInput<R> {
    pub fn new(reader: R, orientation: Orientation, board_size: u32) -> Self {
        Self {
            reader,
            orientation,
            board_size,
        }
    }

    fn parse_line(&self, line: &str) -> Option<InputEvent> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => None,
            ["q"] => Some(InputEvent::Quit),
            [x, y] => match (x.parse::<f32>(), y.parse::<f32>()) {
                (Ok(x), Ok(y)) => Some(InputEvent::Click { x, y }),
                _ => {
                    log::warn!("invalid pixel coordinates: {line}");
                    None
                }
            },
            [square] => match square.parse::<Square>() {
                Ok(square) => {
                    let (x, y) = self.orientation.pixel_center(square, self.board_size);
                    Some(InputEvent::Click { x, y })
                }
                Err(e) => {
                    log::warn!("invalid square '{square}': {e}");
                    None
                }
            },
            _ => {
                log::warn!("unknown command: {line}");
                None
            }
        }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    type Error = io::Error;

    fn poll(&mut self) -> Result<Vec<InputEvent>, Self::Error> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(vec![InputEvent::Quit]);
        }
        Ok(self.parse_line(&line).into_iter().collect())
    }
}
