use std::ffi::OsString;
use std::time::Duration;

use clap::{ArgMatches, Command, arg, command};
use thiserror::Error;

use crate::frame::DEFAULT_FRAME_INTERVAL;
use crate::orientation::Orientation;

/// Canvas size of the original window, in pixels.
pub const DEFAULT_BOARD_SIZE: u32 = 800;

/// Errors from command line parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("board size must be at least one pixel")]
    EmptyBoard,
}

/// Session settings chosen at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub orientation: Orientation,
    pub board_size: u32,
    pub frame_interval: Duration,
    pub fen: Option<String>,
    pub script: Option<String>,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::White,
            board_size: DEFAULT_BOARD_SIZE,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            fen: None,
            script: None,
            debug: false,
        }
    }
}

/// Command line definition.
pub fn cli() -> Command {
    command!()
        .arg(
            arg!(-c --color <COLOR> "Color the human plays")
                .value_parser(["white", "black"])
                .default_value("white"),
        )
        .arg(
            arg!(-s --size <PIXELS> "Board canvas size in pixels")
                .value_parser(clap::value_parser!(u32))
                .default_value("800"),
        )
        .arg(
            arg!(--"frame-ms" <MS> "Pause between frames in milliseconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(arg!(-f --fen <FEN> "Starting position"))
        .arg(arg!(--script <SCRIPT> "Replay clicks instead of reading stdin"))
        .arg(arg!(-d --debug "Turn debugging information on"))
}

impl Config {
    /// Parse the process arguments.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_args(std::env::args_os())
    }

    /// Parse an argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = cli().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let orientation = match matches.get_one::<String>("color").map(String::as_str) {
            Some("black") => Orientation::Black,
            _ => Orientation::White,
        };
        let board_size = matches
            .get_one::<u32>("size")
            .copied()
            .unwrap_or(DEFAULT_BOARD_SIZE);
        if board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let frame_interval = matches
            .get_one::<u64>("frame-ms")
            .map_or(DEFAULT_FRAME_INTERVAL, |ms| Duration::from_millis(*ms));

        Ok(Self {
            orientation,
            board_size,
            frame_interval,
            fen: matches.get_one::<String>("fen").cloned(),
            script: matches.get_one::<String>("script").cloned(),
            debug: matches.get_flag("debug"),
        })
    }
}
