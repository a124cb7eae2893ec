//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A [`Point`] is an integer world coordinate. It doubles as the identity of
//! a visibility-graph node, which is always a grid cell center, while start
//! and goal points of a query may lie anywhere.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A 2D integer point. X grows right, Y grows down (row 0 is the top row of
/// an ASCII map).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean (straight-line) distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        euclidean(self, other)
    }

    /// Per-axis unit step from `self` towards `other`: each component is
    /// `-1`, `0` or `1`. Defined for any pair of points, however far apart.
    #[inline]
    pub fn step_towards(self, other: Point) -> Point {
        Self::new(other.x.cmp(&self.x) as i32, other.y.cmp(&self.y) as i32)
    }
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy)
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major: by `y`, then by `x`.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A half-open rectangle \[min, max).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            min: Point::new(0, 0),
            max: Point::new(width, height),
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    /// Row by row, left to right.
    fn into_iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let Range { min, max } = self.range;
        if min.x >= max.x || self.cur.y >= max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= max.x {
            self.cur = Point::new(min.x, self.cur.y + 1);
        }
        Some(p)
    }
}
