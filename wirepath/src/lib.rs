//! wirepath — generate (or load) a board, route a wire across it with
//! breadth-first search, and print the result.

pub mod config;

use std::fmt;
use std::io::{self, Write};

use wirepath_core::{Board, LayoutError};
use wirepath_crossterm::Renderer;
use wirepath_gen::{BoardGen, GenError};
use wirepath_paths::{PathError, Route, Router};

pub use config::{Args, BoardSource, RunConfig};

/// Result of one [`run`].
#[derive(Debug)]
pub struct Outcome {
    /// The board as rendered, with the route marked if one was found.
    pub board: Board,
    /// `Err(PathNotFound)` when the target is unreachable.
    pub route: Result<Route, PathError>,
    /// Seed of a generated board.
    pub seed: Option<u64>,
}

/// Errors that stop a run before anything is rendered, or while rendering.
#[derive(Debug)]
pub enum RunError {
    Io(io::Error),
    Layout(LayoutError),
    Gen(GenError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Layout(e) => write!(f, "{e}"),
            Self::Gen(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Layout(e) => Some(e),
            Self::Gen(e) => Some(e),
        }
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<LayoutError> for RunError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<GenError> for RunError {
    fn from(e: GenError) -> Self {
        Self::Gen(e)
    }
}

/// Build the board described by `source`.
pub fn load_board(source: &BoardSource) -> Result<(Board, Option<u64>), RunError> {
    match source {
        BoardSource::Generate { cfg, seed } => {
            let (mut bg, seed) = BoardGen::seeded(*seed);
            log::info!("generating {0}x{0} board with seed {seed}", cfg.size);
            Ok((bg.generate(cfg)?, Some(seed)))
        }
        BoardSource::Layout(path) => {
            log::info!("reading layout {}", path.display());
            let text = std::fs::read_to_string(path)?;
            Ok((Board::from_layout(&text)?, None))
        }
    }
}

/// Load the board, route it, and render it to `out`.
///
/// An unreachable target is not an error: a failure line is written, then
/// the board without a path, and the outcome carries the `PathNotFound`
/// result.
pub fn run(cfg: &RunConfig, out: &mut impl Write) -> Result<Outcome, RunError> {
    let (mut board, seed) = load_board(&cfg.source)?;

    let mut router = Router::new();
    let route = router.route(&mut board);
    match &route {
        Ok(r) => log::info!(
            "routed {} -> {} in {} steps",
            board.start(),
            board.target(),
            r.steps()
        ),
        Err(e) => log::warn!("{e}"),
    }
    log::debug!("search stats: {:?}", router.last_stats());

    Renderer::new()
        .with_color(cfg.color)
        .render_outcome(&board, route.is_ok(), out)?;

    Ok(Outcome { board, route, seed })
}
