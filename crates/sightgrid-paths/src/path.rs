//! Waypoint sequences with an accumulated Euclidean cost.

use std::fmt;
use std::rc::Rc;

use sightgrid_core::Point;

/// One waypoint plus a shared link to everything before it.
#[derive(Debug)]
struct Link {
    pos: Point,
    prev: Option<Rc<Link>>,
}

/// An ordered list of waypoints and the cost paid to walk them.
///
/// The history is a persistent linked list: cloning a path and pushing onto
/// the clone shares every earlier waypoint with the original, so the search
/// can fan a path out to all neighbours without copying it.
#[derive(Clone, Default)]
pub struct Path {
    head: Option<Rc<Link>>,
    len: usize,
    cost: f64,
}

impl Path {
    /// The empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-waypoint path with zero cost.
    pub fn from_point(p: Point) -> Self {
        let mut path = Self::new();
        path.push(p);
        path
    }

    /// Append `p`, adding the distance from the current last waypoint.
    pub fn push(&mut self, p: Point) {
        if let Some(last) = self.try_last() {
            self.cost += last.distance(p);
        }
        self.head = Some(Rc::new(Link {
            pos: p,
            prev: self.head.take(),
        }));
        self.len += 1;
    }

    /// A copy of `self` with `p` appended.
    #[must_use]
    pub fn with(&self, p: Point) -> Self {
        let mut next = self.clone();
        next.push(p);
        next
    }

    /// The last waypoint, or `None` for the empty path.
    #[inline]
    pub fn try_last(&self) -> Option<Point> {
        self.head.as_ref().map(|l| l.pos)
    }

    /// The last waypoint.
    ///
    /// # Panics
    ///
    /// Panics on an empty path. The search never holds one, so reaching this
    /// means a search invariant is broken.
    #[inline]
    pub fn last(&self) -> Point {
        match self.try_last() {
            Some(p) => p,
            None => panic!("last waypoint of an empty path"),
        }
    }

    /// Sum of the distances between consecutive waypoints.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Waypoints from last to first.
    pub fn iter_rev(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::successors(self.head.as_deref(), |l| l.prev.as_deref()).map(|l| l.pos)
    }

    /// Waypoints from first to last.
    pub fn to_vec(&self) -> Vec<Point> {
        let mut v: Vec<Point> = self.iter_rev().collect();
        v.reverse();
        v
    }
}

impl Drop for Path {
    // Unlink iteratively so long histories do not recurse once per waypoint.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut l) => next = l.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("waypoints", &self.to_vec())
            .field("cost", &self.cost)
            .finish()
    }
}

impl From<&Path> for Vec<Point> {
    fn from(p: &Path) -> Self {
        p.to_vec()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut path = Self::new();
        for p in iter {
            path.push(p);
        }
        path
    }
}
