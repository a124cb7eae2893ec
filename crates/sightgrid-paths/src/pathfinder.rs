//! Caller-facing entry point: build once, query many times.

use std::fmt;

use sightgrid_core::Point;

use crate::config::GridConfig;
use crate::error::ConfigError;
use crate::graph::VisibilityGraph;
use crate::path::Path;
use crate::traits::Obstacles;

/// A pathfinder bound to one world.
///
/// The visibility graph is built eagerly in [`new`](Self::new) and never
/// changes afterwards, so a `Pathfinder` can be shared freely between
/// readers. Each query allocates its own frontier and visited set.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pathfinder {
    graph: VisibilityGraph,
}

impl Pathfinder {
    /// Validate `config` and build the visibility graph from `obstacles`.
    pub fn new<O>(config: GridConfig, obstacles: &O) -> Result<Self, ConfigError>
    where
        O: Obstacles + ?Sized,
    {
        Ok(Self {
            graph: VisibilityGraph::build(config, obstacles)?,
        })
    }

    /// Shorthand for [`new`](Self::new) with explicit dimensions.
    pub fn with_size<O>(
        width: i32,
        height: i32,
        block_size: i32,
        obstacles: &O,
    ) -> Result<Self, ConfigError>
    where
        O: Obstacles + ?Sized,
    {
        Self::new(GridConfig::new(width, height, block_size), obstacles)
    }

    /// Waypoints from `(x1, y1)` to `(x2, y2)`, or `None` if no route exists.
    pub fn find_path(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<Vec<Point>> {
        self.search(Point::new(x1, y1), Point::new(x2, y2))
            .map(|p| p.to_vec())
    }

    /// Waypoints from `(x1, y1)` to `(x2, y2)`, reusing `prior` (typically
    /// the result of an earlier query the agent has been following).
    pub fn find_path_update(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        prior: &[Point],
    ) -> Option<Vec<Point>> {
        self.search_update(Point::new(x1, y1), Point::new(x2, y2), prior)
            .map(|p| p.to_vec())
    }

    /// Like [`find_path`](Self::find_path), keeping the cost.
    pub fn search(&self, start: Point, goal: Point) -> Option<Path> {
        self.graph.find_path(start, goal)
    }

    /// Like [`find_path_update`](Self::find_path_update), keeping the cost.
    pub fn search_update(&self, start: Point, goal: Point, prior: &[Point]) -> Option<Path> {
        self.graph.find_path_update(start, goal, prior)
    }

    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    pub fn config(&self) -> &GridConfig {
        self.graph.config()
    }
}

impl fmt::Display for Pathfinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathfinder_round_trip() {
        let pf = Pathfinder::with_size(10, 10, 2, &|q: Point| q.x == 5 && q.y != 5).unwrap();
        let json = serde_json::to_string(&pf).unwrap();
        let back: Pathfinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), pf.to_string());
        assert_eq!(back.find_path(0, 0, 9, 9), pf.find_path(0, 0, 9, 9));
    }

    #[test]
    fn rejects_graph_without_cells() {
        let pf = Pathfinder::with_size(10, 10, 2, &|_: Point| false).unwrap();
        let mut v = serde_json::to_value(&pf).unwrap();
        v["graph"]["cells"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Pathfinder>(v).is_err());
    }

    #[test]
    fn config_round_trip() {
        let cfg = GridConfig::new(50, 15, 5);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(serde_json::from_str::<GridConfig>(&json).unwrap(), cfg);
    }
}
