use std::collections::VecDeque;

use wirepath_core::{Board, Point, Range};

use crate::router::{DistanceMap, PathError, Route, Router, UNREACHABLE};
use crate::traits::Pather;

impl Router {
    /// Find the shortest route from the board's start to its target.
    ///
    /// The board is not modified. Among several shortest routes the one
    /// first discovered in (+x, −x, +y, −y) exploration order is returned.
    pub fn find(&mut self, board: &Board) -> Result<Route, PathError> {
        self.find_with(board, board.bounds(), board.start(), board.target())
    }

    /// Find the shortest route and mark its interior cells as path on the
    /// board. On failure the board is left untouched.
    pub fn route(&mut self, board: &mut Board) -> Result<Route, PathError> {
        let route = self.find(board)?;
        for &p in route.interior() {
            board.mark_path(p);
        }
        Ok(route)
    }

    /// Breadth-first search from `from` to `to` over the cells of `rng`,
    /// moving along the edges `pather` reports.
    ///
    /// The search stops the moment `to` is first discovered.
    ///
    /// # Panics
    ///
    /// If `from` or `to` lies outside `rng`.
    pub fn find_with<P: Pather>(
        &mut self,
        pather: &P,
        rng: Range,
        from: Point,
        to: Point,
    ) -> Result<Route, PathError> {
        let (Some(start_idx), Some(goal_idx)) = (rng.index(from), rng.index(to)) else {
            panic!("route endpoints {from} -> {to} outside {rng}");
        };

        self.reset(rng.len());
        self.visited[start_idx] = true;
        self.queue.push_back(start_idx);
        self.stats.discovered = 1;

        if start_idx == goal_idx {
            return Ok(Route { points: vec![from] });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.queue.pop_front() else {
                break 'search false;
            };
            self.stats.expanded += 1;

            nbuf.clear();
            pather.neighbors(rng.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = rng.index(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.parent[ni] = ci;
                self.queue.push_back(ni);
                self.stats.discovered += 1;

                if ni == goal_idx {
                    break 'search true;
                }
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!(
                "no path {from} -> {to}: {} cells expanded, {} discovered",
                self.stats.expanded,
                self.stats.discovered
            );
            return Err(PathError::PathNotFound {
                start: from,
                target: to,
            });
        }

        // Walk the parent links back from the goal. Parents form a tree
        // rooted at the start, so this ends within rng.len() steps.
        let mut points = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            points.push(rng.point(ci));
            ci = self.parent[ci];
        }
        points.push(from);
        points.reverse();

        log::debug!(
            "path {from} -> {to}: {} steps, {} cells expanded, {} discovered",
            points.len() - 1,
            self.stats.expanded,
            self.stats.discovered
        );
        Ok(Route { points })
    }

    /// Compute the hop-count distance from `from` to every cell of `rng`
    /// reachable through `pather`.
    ///
    /// Unlike [`find_with`](Self::find_with) this explores the whole
    /// reachable region. Returns an all-unreachable map if `from` lies
    /// outside `rng`.
    pub fn distance_map<P: Pather>(&mut self, pather: &P, rng: Range, from: Point) -> DistanceMap {
        let mut dist = vec![UNREACHABLE; rng.len()];
        let Some(si) = rng.index(from) else {
            return DistanceMap { rng, dist };
        };
        dist[si] = 0;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let nd = dist[ci] + 1;
            nbuf.clear();
            pather.neighbors(rng.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = rng.index(np) else {
                    continue;
                };
                if dist[ni] != UNREACHABLE {
                    continue;
                }
                dist[ni] = nd;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        log::trace!("distance map from {from} over {rng}");
        DistanceMap { rng, dist }
    }
}
