//! Sparse visibility graph over the centers of a coarse world grid.

use log::debug;
use sightgrid_core::Point;

use crate::config::GridConfig;
use crate::error::ConfigError;
#[cfg(feature = "serde")]
use crate::error::GraphError;
use crate::traits::Obstacles;

/// An unblocked cell center together with the centers it can see.
///
/// Neighbours form a multiset; every edge is stored on both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub neighbors: Vec<Point>,
}

impl Node {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            neighbors: Vec::with_capacity(8),
        }
    }
}

/// Directions probed for each newly registered center. Together with the
/// column-major scan order each adjacent pair is examined exactly once, from
/// whichever end is reached second.
const BACKWARD: [(i32, i32); 4] = [(-1, 0), (0, -1), (-1, -1), (-1, 1)];

/// Immutable visibility graph built once from an obstacle oracle.
///
/// Nodes live in a dense array indexed by cell; an empty slot means the cell
/// center is blocked (or, for any non-center point, that there is no node).
///
/// Deserializing checks that the stored cells match the stored
/// configuration; see [`GraphError`](crate::GraphError).
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGraph")
)]
pub struct VisibilityGraph {
    config: GridConfig,
    columns: i32,
    rows: i32,
    cells: Vec<Option<Node>>,
    edge_count: usize,
}

impl VisibilityGraph {
    /// Sample every cell center, keep the unblocked ones and connect
    /// neighbouring centers whose straight segment is clear.
    ///
    /// The oracle is queried once per cell plus once per sampled point of
    /// each candidate segment.
    pub fn build<O>(config: GridConfig, obstacles: &O) -> Result<Self, ConfigError>
    where
        O: Obstacles + ?Sized,
    {
        config.validate()?;

        let columns = config.columns();
        let rows = config.rows();
        let mut graph = Self {
            config,
            columns,
            rows,
            cells: vec![None; (columns as usize) * (rows as usize)],
            edge_count: 0,
        };

        let mut queries = 0usize;
        let mut blocked = |p: Point| {
            queries += 1;
            obstacles.is_blocked(p)
        };

        let bs = config.block_size;
        for cur in config.cell_centers() {
            if blocked(cur) {
                continue;
            }
            let Some(ci) = graph.index(cur) else {
                continue;
            };
            graph.cells[ci] = Some(Node::new(cur));

            for (dx, dy) in BACKWARD {
                let other = cur.shift(dx * bs, dy * bs);
                let Some(oi) = graph.index(other) else {
                    continue;
                };
                if graph.cells[oi].is_none() {
                    continue;
                }
                // Adjacent centers one unit apart have no points in between.
                if bs > 1 && line_blocked(&mut blocked, cur, other) {
                    continue;
                }
                graph.connect(ci, oi);
            }
        }

        debug!(
            "visibility graph {}x{} block {}: {} nodes, {} edges, {} oracle queries",
            config.width,
            config.height,
            bs,
            graph.node_count(),
            graph.edge_count,
            queries
        );
        Ok(graph)
    }

    fn connect(&mut self, a: usize, b: usize) {
        let (Some(pa), Some(pb)) = (
            self.cells[a].as_ref().map(|n| n.pos),
            self.cells[b].as_ref().map(|n| n.pos),
        ) else {
            return;
        };
        if let Some(n) = self.cells[a].as_mut() {
            n.neighbors.push(pb);
        }
        if let Some(n) = self.cells[b].as_mut() {
            n.neighbors.push(pa);
        }
        self.edge_count += 1;
    }

    /// Flat cell index of `p`, or `None` unless `p` is exactly a cell center
    /// inside the world.
    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        let bs = self.config.block_size;
        let half = self.config.half_block();
        let (Some(ox), Some(oy)) = (p.x.checked_sub(half), p.y.checked_sub(half)) else {
            return None;
        };
        if ox < 0 || oy < 0 || ox % bs != 0 || oy % bs != 0 {
            return None;
        }
        let (col, row) = (ox / bs, oy / bs);
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some((row * self.columns + col) as usize)
    }

    /// The configuration the graph was built from.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The node at `p`, if `p` is an unblocked cell center.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.index(p).and_then(|i| self.cells[i].as_ref())
    }

    /// Whether `p` is a node of the graph.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.node(p).is_some()
    }

    /// Centers visible from `p`. Empty when `p` is not a node.
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.node(p).map(|n| n.neighbors.as_slice()).unwrap_or(&[])
    }

    /// Whether an edge joins `a` and `b`.
    pub fn has_edge(&self, a: Point, b: Point) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// All nodes, row by row.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.cells.iter().flatten()
    }

    /// Every undirected edge once, as `(smaller, larger)` in point order.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.nodes().flat_map(|n| {
            n.neighbors
                .iter()
                .filter(move |&&m| n.pos < m)
                .map(move |&m| (n.pos, m))
        })
    }

    pub fn node_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Unchecked form of a deserialized [`VisibilityGraph`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGraph {
    config: GridConfig,
    columns: i32,
    rows: i32,
    cells: Vec<Option<Node>>,
    edge_count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGraph> for VisibilityGraph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self, GraphError> {
        let RawGraph {
            config,
            columns,
            rows,
            cells,
            edge_count,
        } = raw;
        config.validate()?;
        if columns != config.columns() || rows != config.rows() {
            return Err(GraphError::GridMismatch {
                columns,
                rows,
                expected_columns: config.columns(),
                expected_rows: config.rows(),
            });
        }
        let expected = (columns as usize) * (rows as usize);
        if cells.len() != expected {
            return Err(GraphError::CellCount {
                expected,
                found: cells.len(),
            });
        }

        let (bs, half) = (config.block_size, config.half_block());
        let mut listed = 0;
        for (index, node) in cells.iter().enumerate() {
            let Some(node) = node else {
                continue;
            };
            let (col, row) = ((index % columns as usize) as i32, (index / columns as usize) as i32);
            let expected = Point::new(half + col * bs, half + row * bs);
            if node.pos != expected {
                return Err(GraphError::MisplacedNode {
                    index,
                    pos: node.pos,
                    expected,
                });
            }
            listed += node.neighbors.len();
        }
        if listed != 2 * edge_count {
            return Err(GraphError::EdgeCount {
                claimed: edge_count,
                listed,
            });
        }

        Ok(Self {
            config,
            columns,
            rows,
            cells,
            edge_count,
        })
    }
}

/// Walk unit grid steps from `from` to `to` (both included) and report
/// whether any sampled point is blocked.
///
/// Steps are the per-axis sign of the delta, so the walk is exact for the
/// axis-aligned and 45° segments the graph connects.
fn line_blocked(blocked: &mut impl FnMut(Point) -> bool, from: Point, to: Point) -> bool {
    let step = from.step_towards(to);
    let len = (to.x - from.x).abs().max((to.y - from.y).abs());
    let mut p = from;
    for _ in 0..=len {
        if blocked(p) {
            return true;
        }
        p = p + step;
    }
    false
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use serde_json::{Value, json};

    use super::*;

    fn stored() -> Value {
        let g = VisibilityGraph::build(GridConfig::new(10, 10, 2), &|q: Point| q.x == 5 && q.y != 5)
            .unwrap();
        serde_json::to_value(&g).unwrap()
    }

    fn load(v: Value) -> Result<VisibilityGraph, String> {
        serde_json::from_value(v).map_err(|e| e.to_string())
    }

    #[test]
    fn round_trip_keeps_nodes_and_edges() {
        let g = load(stored()).unwrap();
        assert_eq!(g.node_count(), 21);
        assert!(g.has_edge(Point::new(5, 5), Point::new(3, 3)));
        assert_eq!(g.edges().count(), g.edge_count());
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let mut v = stored();
        v["cells"] = json!([]);
        let err = load(v).unwrap_err();
        assert!(err.contains("graph has 0 cells, expected 25"), "{err}");
    }

    #[test]
    fn rejects_grid_disagreeing_with_config() {
        let mut v = stored();
        v["config"]["block_size"] = json!(5);
        let err = load(v).unwrap_err();
        assert!(err.contains("configuration needs 2x2"), "{err}");

        let mut v = stored();
        v["columns"] = json!(4);
        assert!(load(v).is_err());
    }

    #[test]
    fn rejects_invalid_config() {
        let mut v = stored();
        v["config"]["width"] = json!(0);
        let err = load(v).unwrap_err();
        assert!(err.contains("width must be positive"), "{err}");
    }

    #[test]
    fn rejects_misplaced_node() {
        let mut v = stored();
        v["cells"][0]["pos"] = json!({ "x": 0, "y": 0 });
        let err = load(v).unwrap_err();
        assert!(err.contains("expected (1, 1)"), "{err}");
    }

    #[test]
    fn rejects_edge_count_mismatch() {
        let mut v = stored();
        v["edge_count"] = json!(1);
        assert!(load(v).is_err());
    }
}
