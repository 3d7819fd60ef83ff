//! Random board generation for wirepath.

pub mod boardgen;

pub use boardgen::{BoardGen, GenConfig, GenError, MAX_SIZE};
