//! Breadth-first wire routing on a [`Board`](wirepath_core::Board).
//!
//! [`Router::route`] finds the minimum hop-count, 4-connected route from
//! the board's start cell to its target cell and marks the cells in
//! between as path. [`Router::find`] does the search without touching the
//! board, and [`Router::distance_map`] computes full BFS depth tables.
//!
//! Searches run through the [`Pather`] trait, implemented for `Board`, so
//! the same router works over any neighbor relation.

mod bfs;
mod distance;
mod neighbors;
mod router;
mod traits;

pub use distance::manhattan;
pub use neighbors::{CARDINALS, cardinal};
pub use router::{DistanceMap, PathError, Route, Router, SearchStats, UNREACHABLE};
pub use traits::Pather;

#[cfg(test)]
mod proptests;
