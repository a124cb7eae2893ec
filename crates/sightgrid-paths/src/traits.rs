use sightgrid_core::Point;

/// The obstacle oracle: answers whether a world coordinate is impassable.
///
/// Queried synchronously and often while the visibility graph is built, so
/// implementations should be cheap and must return the same answer for the
/// same point. A panic inside `is_blocked` propagates to the caller.
pub trait Obstacles {
    /// Whether the world point `p` is blocked.
    fn is_blocked(&self, p: Point) -> bool;
}

impl<F> Obstacles for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self(p)
    }
}
