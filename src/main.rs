use std::convert::Infallible;
use std::io;
use std::process::ExitCode;

use click_chess::config::{Config, ConfigError};
use click_chess::frame::{FixedDelay, NoDelay};
use click_chess::game_logic::{EngineError, GameEngine};
use click_chess::session::{Session, SessionError};
use click_chess::terminal::{DisplayError, ParseError, ScriptedInput, StdinInput, TerminalRenderer};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Script(#[from] ParseError),
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error(transparent)]
    Replay(#[from] SessionError<Infallible, DisplayError>),
    #[error(transparent)]
    Interactive(#[from] SessionError<io::Error, DisplayError>),
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    log::info!("Chess Board - playing {:?}", config.orientation);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let engine = match &config.fen {
        Some(fen) => GameEngine::from_fen(fen)?,
        None => GameEngine::new(),
    };
    let mut session = Session::new(engine, config.orientation, config.board_size);
    let mut renderer = TerminalRenderer::stdout();

    if let Some(script) = &config.script {
        let mut input = ScriptedInput::from_script(script)?;
        session.run(&mut input, &mut renderer, &mut NoDelay)?;
        return Ok(());
    }

    // Draw once so the player sees the board before the first command.
    session.draw(&mut renderer)?;
    let mut input = StdinInput::stdin(config.orientation, config.board_size);
    let mut limiter = FixedDelay(config.frame_interval);
    session.run(&mut input, &mut renderer, &mut limiter)?;
    Ok(())
}
