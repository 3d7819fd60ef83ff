use wirepath_core::{Board, Point};

use crate::neighbors;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the cells enterable from `p` into `buf`, in exploration
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A board is 4-connected over its traversable cells.
impl Pather for Board {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        neighbors::cardinal(p, buf, |n| self.is_traversable(n));
    }
}
