//! Error types for graph construction, graph loading and map parsing.
//!
//! "No path" is not an error: searches return `None` for it.

use sightgrid_core::Point;
use thiserror::Error;

/// A [`GridConfig`](crate::GridConfig) that cannot describe a world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("world width must be positive, got {0}")]
    NonPositiveWidth(i32),

    #[error("world height must be positive, got {0}")]
    NonPositiveHeight(i32),

    #[error("block size must be positive, got {0}")]
    NonPositiveBlockSize(i32),
}

/// Errors produced by [`CharMap::parse`](crate::CharMap::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("map row {row} is {found} wide, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map contains invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}

/// A stored [`VisibilityGraph`](crate::VisibilityGraph) whose parts do not
/// agree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("graph is {columns}x{rows} cells, its configuration needs {expected_columns}x{expected_rows}")]
    GridMismatch {
        columns: i32,
        rows: i32,
        expected_columns: i32,
        expected_rows: i32,
    },

    #[error("graph has {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },

    #[error("cell {index} holds a node at {pos}, expected {expected}")]
    MisplacedNode {
        index: usize,
        pos: Point,
        expected: Point,
    },

    #[error("graph claims {claimed} edges but its nodes list {listed} neighbour entries")]
    EdgeCount { claimed: usize, listed: usize },
}
