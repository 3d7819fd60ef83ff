use std::collections::VecDeque;
use std::fmt;

use wirepath_core::{Point, Range};

/// A found route: every cell from start to target, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    pub(crate) points: Vec<Point>,
}

impl Route {
    /// All cells of the route, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of moves from start to target.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The cells strictly between start and target.
    pub fn interior(&self) -> &[Point] {
        match self.points.len() {
            0..=2 => &[],
            n => &self.points[1..n - 1],
        }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn target(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

/// A decoded route must be a non-empty chain of 4-adjacent cells.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Route {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        use crate::distance::manhattan;

        #[derive(serde::Deserialize)]
        struct RawRoute {
            points: Vec<Point>,
        }

        let RawRoute { points } = RawRoute::deserialize(deserializer)?;
        if points.is_empty() {
            return Err(D::Error::custom("route has no points"));
        }
        if let Some(w) = points.windows(2).find(|w| manhattan(w[0], w[1]) != 1) {
            return Err(D::Error::custom(format!(
                "route step {} -> {} is not between adjacent cells",
                w[0], w[1]
            )));
        }
        Ok(Route { points })
    }
}

/// Why a search produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The target is not reachable from the start through traversable
    /// cells.
    PathNotFound { start: Point, target: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound { start, target } => {
                write!(f, "no path from {start} to {target}")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells taken off the queue.
    pub expanded: usize,
    /// Cells marked visited, the origin included.
    pub discovered: usize,
}

/// Sentinel value meaning "unreachable" in a [`DistanceMap`].
pub const UNREACHABLE: u32 = u32::MAX;

/// Hop-count distances from one origin to every cell of a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    pub(crate) rng: Range,
    pub(crate) dist: Vec<u32>,
}

impl DistanceMap {
    /// Distance to `p`, or `None` if `p` is outside the range or was not
    /// reached.
    pub fn at(&self, p: Point) -> Option<u32> {
        let d = self.dist[self.rng.index(p)?];
        (d != UNREACHABLE).then_some(d)
    }

    /// Number of cells reached, the origin included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

/// Breadth-first router.
///
/// `Router` owns the per-search scratch state (visited flags, parent
/// links, the discovery queue) and resets it at the start of every search,
/// so repeated queries reuse the same allocations.
pub struct Router {
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
    pub(crate) stats: SearchStats,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            visited: Vec::new(),
            parent: Vec::new(),
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
            stats: SearchStats::default(),
        }
    }

    /// Counters from the most recent [`find`](Self::find) or
    /// [`route`](Self::route).
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Clear the scratch state for a search over `len` cells.
    pub(crate) fn reset(&mut self, len: usize) {
        self.visited.clear();
        self.visited.resize(len, false);
        self.parent.clear();
        self.parent.resize(len, usize::MAX);
        self.queue.clear();
        self.stats = SearchStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_accessors() {
        let r = Route {
            points: vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)],
        };
        assert_eq!(r.steps(), 2);
        assert_eq!(r.interior(), &[Point::new(1, 0)]);
        assert_eq!(r.start(), Point::new(0, 0));
        assert_eq!(r.target(), Point::new(1, 1));
    }

    #[test]
    fn adjacent_route_has_no_interior() {
        let r = Route {
            points: vec![Point::new(0, 0), Point::new(0, 1)],
        };
        assert_eq!(r.steps(), 1);
        assert!(r.interior().is_empty());
    }

    #[test]
    fn reset_clears_previous_search() {
        let mut router = Router::new();
        router.reset(4);
        router.visited[2] = true;
        router.parent[2] = 1;
        router.queue.push_back(2);
        router.stats.expanded = 3;

        router.reset(9);
        assert_eq!(router.visited.len(), 9);
        assert!(router.visited.iter().all(|v| !v));
        assert!(router.parent.iter().all(|&p| p == usize::MAX));
        assert!(router.queue.is_empty());
        assert_eq!(router.last_stats(), SearchStats::default());
    }

    #[test]
    fn path_error_message() {
        let e = PathError::PathNotFound {
            start: Point::new(0, 0),
            target: Point::new(2, 2),
        };
        assert_eq!(e.to_string(), "no path from (0, 0) to (2, 2)");
    }
}
