mod display;
mod input;
mod script;

pub use display::{DisplayError, TerminalRenderer};
pub use input::StdinInput;
pub use script::{ParseError, ScriptedInput};
