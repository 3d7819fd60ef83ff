//! **wirepath-core** — board model for single-wire routing.
//!
//! This crate provides the foundational types used across the *wirepath*
//! workspace: geometry primitives, tile states, and the [`Board`] that the
//! router reads and marks.

pub mod board;
pub mod geom;
pub mod tile;

pub use board::{Board, LayoutError};
pub use geom::{Point, Range};
pub use tile::Tile;
