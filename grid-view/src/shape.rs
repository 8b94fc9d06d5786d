//! Value types describing rectangular regions of a grid.

use crate::{GridError, Result};
use std::fmt;

/// Extent of a rectangular region, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

impl Size {
    /// The 1x1 region reached at the bottom of a block-recursive plan.
    pub const UNIT: Size = Size { rows: 1, cols: 1 };

    /// Create a size, rejecting zero extents.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = Self { rows, cols };
        size.validate()?;
        Ok(size)
    }

    /// Check that both extents are positive.
    ///
    /// Fields are public, so values built with a struct literal are checked
    /// again by every operation that consumes them.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Number of cells, `rows * cols`.
    pub fn cell_count(&self) -> Result<usize> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(GridError::SizeOverflow {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Returns true when `(row, col)` lies inside the region.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Dimensions as `[rows, cols]`, the form used in error reports.
    #[inline]
    pub fn dims(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Origin of a sub-region within the full grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub row0: usize,
    pub col0: usize,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { row0: 0, col0: 0 };

    #[inline]
    pub fn new(row0: usize, col0: usize) -> Self {
        Self { row0, col0 }
    }
}
