use log::debug;
use rustc_hash::FxHashSet;
use sightgrid_core::Point;

use crate::frontier::Frontier;
use crate::graph::VisibilityGraph;
use crate::path::Path;

impl VisibilityGraph {
    /// Shortest path from `start` to `goal` over the visibility graph.
    ///
    /// Neither endpoint needs to be a cell center: the path leaves `start`
    /// through the center of its cell and reaches `goal` from the first
    /// node closer than one block. Returns `None` when no such node is
    /// reachable.
    pub fn find_path(&self, start: Point, goal: Point) -> Option<Path> {
        let mut frontier = Frontier::new(goal);
        frontier.push(self.seed(start, goal));
        self.run_search(frontier, goal)
    }

    /// The initial path for a fresh search: `start`, snapped onto the center
    /// of its cell unless the goal is already within reach. A start whose
    /// cell center lies beyond the coordinate limits stays unsnapped and so
    /// reaches no node.
    pub(crate) fn seed(&self, start: Point, goal: Point) -> Path {
        let mut path = Path::from_point(start);
        if self.reaches(start, goal) {
            return path;
        }
        match self.config().cell_center(start) {
            Some(center) if center != start => path.push(center),
            _ => {}
        }
        path
    }

    /// Whether standing at `p` counts as having arrived at `goal`.
    #[inline]
    pub(crate) fn reaches(&self, p: Point, goal: Point) -> bool {
        p.distance(goal) < f64::from(self.config().block_size)
    }

    /// Best-first expansion of a seeded frontier. Each location is finalised
    /// the first time it is popped; later entries ending there are stale.
    pub(crate) fn run_search(&self, mut frontier: Frontier, goal: Point) -> Option<Path> {
        let mut visited: FxHashSet<Point> = FxHashSet::default();

        while let Some(mut current) = frontier.pop() {
            let end = current.last();
            if !visited.insert(end) {
                continue;
            }

            if self.reaches(end, goal) {
                if end != goal {
                    current.push(goal);
                }
                debug!(
                    "path {} -> {}: {} waypoints, cost {:.3}, {} finalised, {} queued, {} left",
                    current.iter_rev().last().unwrap_or(end),
                    goal,
                    current.len(),
                    current.cost(),
                    visited.len(),
                    frontier.pushed(),
                    frontier.len()
                );
                return Some(current);
            }

            for &next in self.neighbors(end) {
                if visited.contains(&next) {
                    continue;
                }
                frontier.push(current.with(next));
            }
        }

        debug!(
            "no path to {}: frontier exhausted after {} finalised, {} queued",
            goal,
            visited.len(),
            frontier.pushed()
        );
        None
    }
}
