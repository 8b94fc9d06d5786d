//! Owned row-major grid of scalar values.

use crate::shape::Size;
use crate::{GridError, Result};
use num_traits::FromPrimitive;

/// An owned `rows x cols` grid, stored row-major in one contiguous buffer.
///
/// Cell `(r, c)` lives at linear position `r * cols + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStore<T> {
    data: Vec<T>,
    size: Size,
}

impl<T: Clone + Default> GridStore<T> {
    /// Create a grid filled with `T::default()`.
    ///
    /// # Errors
    /// `InvalidDimension` if either extent is zero, `SizeOverflow` if the
    /// cell count does not fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = Size::new(rows, cols)?;
        let total = size.cell_count()?;
        Ok(Self {
            data: vec![T::default(); total],
            size,
        })
    }
}

impl<T> GridStore<T> {
    /// Create a grid with values produced by `f(row, col)`.
    ///
    /// The function is called in row-major order.
    pub fn from_fn(size: Size, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        size.validate()?;
        let total = size.cell_count()?;
        let mut data = Vec::with_capacity(total);
        for r in 0..size.rows {
            for c in 0..size.cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { data, size })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(size: Size, data: Vec<T>) -> Result<Self> {
        size.validate()?;
        let total = size.cell_count()?;
        if data.len() != total {
            return Err(GridError::ShapeMismatch(vec![data.len()], vec![total]));
        }
        Ok(Self { data, size })
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed grid; both extents are positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn linear_index(&self, row: usize, col: usize) -> Result<usize> {
        if !self.size.contains(row, col) {
            return Err(GridError::IndexOutOfRange {
                index: vec![row, col],
                shape: self.size.dims().to_vec(),
            });
        }
        Ok(row * self.size.cols + col)
    }
}

impl<T: Copy> GridStore<T> {
    /// Get the value at `(row, col)`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if the cell lies outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.linear_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Set the value at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.linear_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }
}

impl<T: FromPrimitive> GridStore<T> {
    /// Assign `r * cols + c` to every cell `(r, c)`.
    ///
    /// # Errors
    /// `ScalarConversion` if a position cannot be represented in `T`
    /// (e.g. a `u8` grid with more than 256 cells).
    pub fn fill_sequential(&mut self) -> Result<()> {
        for (k, slot) in self.data.iter_mut().enumerate() {
            *slot = T::from_usize(k).ok_or(GridError::ScalarConversion { value: k })?;
        }
        Ok(())
    }
}

/// Create a `rows x cols` grid holding `0, 1, ..., rows * cols - 1` in row-major order.
pub fn make_grid<T>(rows: usize, cols: usize) -> Result<GridStore<T>>
where
    T: Clone + Default + FromPrimitive,
{
    let mut grid = GridStore::new(rows, cols)?;
    grid.fill_sequential()?;
    Ok(grid)
}
