//! Materialize a grid's values in a chosen visitation order.

use grid_order::AccessOrder;
use grid_view::{trace_enabled, GridError, GridStore, Result};

fn ensure_same_size<T>(grid: &GridStore<T>, order: &AccessOrder) -> Result<()> {
    let (grid_size, order_size) = (grid.size(), order.size());
    if grid_size != order_size {
        return Err(GridError::ShapeMismatch(
            grid_size.dims().to_vec(),
            order_size.dims().to_vec(),
        ));
    }
    Ok(())
}

/// Read every cell of `grid` in the order given by `order`.
///
/// Step `k` of the output holds `grid[order.at(k)]`.
///
/// # Errors
/// `ShapeMismatch` if `order` was built for a different size than `grid`.
pub fn flatten<T: Copy>(grid: &GridStore<T>, order: &AccessOrder) -> Result<Vec<T>> {
    ensure_same_size(grid, order)?;
    if trace_enabled() {
        eprintln!(
            "flatten: {} order over {} grid ({} cells)",
            order.name(),
            grid.size(),
            order.len()
        );
    }

    // Row-major over a row-major store is the storage order itself.
    if let AccessOrder::RowMajor { .. } = order {
        return Ok(grid.as_slice().to_vec());
    }

    let mut flat = Vec::with_capacity(order.len());
    for (r, c) in order.iter() {
        flat.push(grid.get(r, c)?);
    }
    Ok(flat)
}

/// [`flatten`] with the grid's natural row-major order.
pub fn flatten_row_major<T: Copy>(grid: &GridStore<T>) -> Result<Vec<T>> {
    flatten(grid, &AccessOrder::row_major(grid.size())?)
}

/// Scatter a flattened sequence back into a grid, inverting [`flatten`].
///
/// # Errors
/// `ShapeMismatch` if `values` does not hold exactly one value per step.
pub fn unflatten<T: Copy + Default>(values: &[T], order: &AccessOrder) -> Result<GridStore<T>> {
    let size = order.size();
    if values.len() != order.len() {
        return Err(GridError::ShapeMismatch(
            vec![values.len()],
            vec![order.len()],
        ));
    }
    let mut grid = GridStore::new(size.rows, size.cols)?;
    for ((r, c), &value) in order.iter().zip(values) {
        grid.set(r, c, value)?;
    }
    Ok(grid)
}
