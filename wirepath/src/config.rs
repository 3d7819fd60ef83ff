//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use wirepath_gen::GenConfig;

/// Route a wire across a grid board with breadth-first search.
#[derive(Parser, Debug)]
#[command(name = "wirepath", version)]
#[command(about = "Find the shortest wire route between two cells of a board")]
pub struct Args {
    /// Side length of the generated square board
    #[arg(long, short = 'n', default_value_t = GenConfig::default().size)]
    pub size: i32,

    /// Number of blocked cells on the generated board
    #[arg(long, short = 'b', default_value_t = GenConfig::default().blocked)]
    pub blocked: usize,

    /// RNG seed, for reproducing a board (a random seed is logged if omitted)
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Route the board in this layout file instead of generating one
    #[arg(long, short = 'l', conflicts_with_all = ["size", "blocked", "seed"])]
    pub layout: Option<PathBuf>,

    /// Print markers without colours
    #[arg(long)]
    pub plain: bool,
}

/// Where the board comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Generate { cfg: GenConfig, seed: Option<u64> },
    Layout(PathBuf),
}

/// Everything [`run`](crate::run) needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: BoardSource,
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: BoardSource::Generate {
                cfg: GenConfig::default(),
                seed: None,
            },
            color: true,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let source = match args.layout {
            Some(path) => BoardSource::Layout(path),
            None => BoardSource::Generate {
                cfg: GenConfig {
                    size: args.size,
                    blocked: args.blocked,
                },
                seed: args.seed,
            },
        };
        Self {
            source,
            color: !args.plain,
        }
    }
}
