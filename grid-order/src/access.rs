//! Mapping from linear visitation index to grid cell.

use crate::bases::Bases;
use crate::plan::{build_shuffle_major_plan, Plan};
use grid_view::{GridError, Result, Size};

/// A traversal order over a `rows x cols` grid.
///
/// Each variant carries only what it needs: the grid shape for row-major
/// arithmetic, or an owned, validated plan for block-recursive lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOrder {
    /// `at(k) = (k / cols, k % cols)`.
    RowMajor { size: Size },
    /// `at(k) = plan[k]`.
    BlockRecursive(Plan),
}

impl AccessOrder {
    /// Row-major order over `size`.
    pub fn row_major(size: Size) -> Result<Self> {
        size.validate()?;
        size.cell_count()?;
        Ok(Self::RowMajor { size })
    }

    /// Block-recursive order over `size`, planned once with `bases`.
    pub fn block_recursive(size: Size, bases: Bases) -> Result<Self> {
        Ok(Self::BlockRecursive(build_shuffle_major_plan(size, bases)?))
    }

    /// Short name used in traces and driver output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RowMajor { .. } => "row-major",
            Self::BlockRecursive(_) => "block-recursive",
        }
    }

    /// The grid size this order covers.
    pub fn size(&self) -> Size {
        match self {
            Self::RowMajor { size } => *size,
            Self::BlockRecursive(plan) => plan.size(),
        }
    }

    /// Number of visitation steps, `rows * cols`.
    pub fn len(&self) -> usize {
        match self {
            Self::RowMajor { size } => size.rows.saturating_mul(size.cols),
            Self::BlockRecursive(plan) => plan.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell visited at step `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<(usize, usize)> {
        let len = self.len();
        if index >= len {
            return Err(GridError::IndexOutOfRange {
                index: vec![index],
                shape: vec![len],
            });
        }
        Ok(self.coord(index))
    }

    /// All cells in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(move |k| self.coord(k))
    }

    /// `index` must be below `len()`.
    #[inline]
    fn coord(&self, index: usize) -> (usize, usize) {
        match self {
            Self::RowMajor { size } => (index / size.cols, index % size.cols),
            Self::BlockRecursive(plan) => plan.coords()[index],
        }
    }
}
