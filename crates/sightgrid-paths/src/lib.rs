//! Visibility-graph pathfinding on coarse world grids.
//!
//! The world is sampled at cell centers spaced `block_size` apart. Centers
//! the obstacle oracle reports free become nodes; neighbouring nodes with a
//! clear straight segment between them are connected. Queries then run an
//! A* search over that graph between arbitrary world points:
//!
//! - **Fresh search** ([`Pathfinder::find_path`]): snaps the start onto its
//!   cell center and searches until a node within one block of the goal is
//!   reached.
//! - **Incremental replanning** ([`Pathfinder::find_path_update`]): grafts
//!   the still-relevant tail of an earlier path onto the agent's current
//!   position and resumes the search from there.
//!
//! The graph is built once and is read-only afterwards; searches never
//! query the oracle again.
//!
//! # Layout
//!
//! | Item | Role |
//! |---|---|
//! | [`Obstacles`] | the obstacle oracle supplied by the caller |
//! | [`GridConfig`] | world size and block size |
//! | [`VisibilityGraph`] | node/edge data, A* and replanning |
//! | [`Path`] | waypoints plus accumulated cost |
//! | [`Pathfinder`] | build-once facade with coordinate-level queries |
//! | [`CharMap`] | ASCII obstacle maps |

mod astar;
mod charmap;
mod config;
mod error;
mod frontier;
mod graph;
mod path;
mod pathfinder;
mod render;
mod traits;
mod update;

#[cfg(test)]
mod fixtures;

pub use charmap::CharMap;
pub use config::GridConfig;
pub use error::{ConfigError, GraphError, MapError};
pub use graph::{Node, VisibilityGraph};
pub use path::Path;
pub use pathfinder::Pathfinder;
pub use traits::Obstacles;
