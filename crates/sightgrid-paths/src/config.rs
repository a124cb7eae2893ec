//! World dimensions and the grid sampled onto them.

use sightgrid_core::{Point, Range};

use crate::error::ConfigError;

/// Size of the world and the spacing of the sampled grid.
///
/// Cell centers sit at `block_size / 2 + k * block_size` on each axis, for
/// every `k` that keeps the coordinate below `width` (resp. `height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
}

impl GridConfig {
    /// Create a configuration. Call [`validate`](Self::validate) (or build a
    /// graph, which validates) before relying on the derived values.
    pub const fn new(width: i32, height: i32, block_size: i32) -> Self {
        Self {
            width,
            height,
            block_size,
        }
    }

    /// Reject non-positive dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::NonPositiveWidth(self.width));
        }
        if self.height <= 0 {
            return Err(ConfigError::NonPositiveHeight(self.height));
        }
        if self.block_size <= 0 {
            return Err(ConfigError::NonPositiveBlockSize(self.block_size));
        }
        Ok(())
    }

    /// The world rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Offset of a cell center from its cell's top-left corner.
    #[inline]
    pub fn half_block(&self) -> i32 {
        self.block_size / 2
    }

    /// Number of cell centers along the x axis.
    #[inline]
    pub fn columns(&self) -> i32 {
        axis_cells(self.width, self.block_size)
    }

    /// Number of cell centers along the y axis.
    #[inline]
    pub fn rows(&self) -> i32 {
        axis_cells(self.height, self.block_size)
    }

    /// Center of the cell containing `p`, or `None` when that center is not
    /// representable as a `Point` (cells straddling the `i32` limits).
    ///
    /// Uses floor division, so points left of or above the origin map to
    /// cells with negative indices rather than folding into cell 0.
    #[inline]
    pub fn cell_center(&self, p: Point) -> Option<Point> {
        let bs = i64::from(self.block_size);
        let half = i64::from(self.half_block());
        let axis = |v: i32| i32::try_from(i64::from(v).div_euclid(bs) * bs + half).ok();
        Some(Point::new(axis(p.x)?, axis(p.y)?))
    }

    /// Iterate over every cell center, column by column (x outer, y inner).
    pub fn cell_centers(&self) -> impl Iterator<Item = Point> + use<> {
        let Self {
            width,
            height,
            block_size,
        } = *self;
        let half = self.half_block();
        let step = block_size.max(1) as usize;
        (half..width).step_by(step).flat_map(move |x| {
            (half..height)
                .step_by(step)
                .map(move |y| Point::new(x, y))
        })
    }
}

fn axis_cells(extent: i32, block_size: i32) -> i32 {
    let half = block_size / 2;
    if block_size <= 0 || extent <= half {
        return 0;
    }
    (extent - half - 1) / block_size + 1
}
