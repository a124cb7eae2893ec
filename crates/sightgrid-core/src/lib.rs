//! **sightgrid-core**: geometry primitives for the *sightgrid* crates.
//!
//! Provides the integer [`Point`] used for world coordinates and graph node
//! identities, the half-open [`Range`] describing a world rectangle, and the
//! [`euclidean`] metric every path cost is measured in.

pub mod geom;

pub use geom::{Point, Range, RangeIter, euclidean};
