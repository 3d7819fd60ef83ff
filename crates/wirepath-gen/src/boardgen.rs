//! Random board generation.
//!
//! A generated board has exactly [`GenConfig::blocked`] blocked cells and a
//! start and target on two other, distinct cells. Every placement is drawn
//! from the generator's RNG, so a seeded RNG reproduces the same board.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use wirepath_core::{Board, Range};

/// Largest board side length [`GenConfig::validate`] accepts.
pub const MAX_SIZE: i32 = 1024;

/// Board dimensions and obstacle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Side length of the square board.
    pub size: i32,
    /// Number of blocked cells to place.
    pub blocked: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            size: 14,
            blocked: 20,
        }
    }
}

impl GenConfig {
    /// Check that the size is in `1..=MAX_SIZE` and that the board has room
    /// for the blocked cells plus the start and target.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.size <= 0 {
            return Err(GenError::InvalidSize(self.size));
        }
        if self.size > MAX_SIZE {
            return Err(GenError::TooLarge(self.size));
        }
        let cells = Range::square(self.size).len();
        if self.blocked.checked_add(2).is_none_or(|n| n > cells) {
            return Err(GenError::TooSmall {
                size: self.size,
                blocked: self.blocked,
            });
        }
        Ok(())
    }
}

/// Errors from an unusable [`GenConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// Board size is zero or negative.
    InvalidSize(i32),
    /// Board size above [`MAX_SIZE`].
    TooLarge(i32),
    /// Fewer than `blocked + 2` cells on the board.
    TooSmall { size: i32, blocked: usize },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => write!(f, "board size must be positive, got {size}"),
            Self::TooLarge(size) => write!(f, "board size {size} exceeds the limit of {MAX_SIZE}"),
            Self::TooSmall { size, blocked } => write!(
                f,
                "a {size}x{size} board cannot hold {blocked} blocked cells plus start and target"
            ),
        }
    }
}

impl std::error::Error for GenError {}

/// Board generator driven by an RNG.
pub struct BoardGen<R: Rng> {
    pub rng: R,
}

impl BoardGen<StdRng> {
    /// A generator seeded with `seed`, or with a fresh seed drawn from the
    /// thread RNG. Returns the seed used so the board can be reproduced.
    pub fn seeded(seed: Option<u64>) -> (Self, u64) {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        (Self::new(StdRng::seed_from_u64(seed)), seed)
    }
}

impl<R: Rng> BoardGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a board.
    ///
    /// `blocked + 2` distinct cells are drawn at random: the first becomes
    /// the start, the second the target, the rest are blocked.
    pub fn generate(&mut self, cfg: &GenConfig) -> Result<Board, GenError> {
        cfg.validate()?;

        let bounds = Range::square(cfg.size);
        let mut cells: Vec<_> = bounds.iter().collect();
        let (picked, _) = cells.partial_shuffle(&mut self.rng, cfg.blocked + 2);

        let mut board = Board::new(cfg.size, picked[0], picked[1]);
        for &p in &picked[2..] {
            board.set_blocked(p);
        }

        log::debug!(
            "generated {size}x{size} board: start {}, target {}, {} blocked",
            board.start(),
            board.target(),
            cfg.blocked,
            size = cfg.size
        );
        Ok(board)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = GenConfig {
            size: 20,
            blocked: 55,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
