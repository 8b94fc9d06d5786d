//! Block-recursive ("shuffle-major") traversal planning for 2D grids.
//!
//! A grid can be read in plain row-major order or in a nested, self-similar
//! block order: split the grid into `block_rows x block_cols` super-blocks,
//! split each super-block the same way, and so on down to the leaf blocks.
//! The block order keeps nearby cells close together in the visitation
//! sequence, which is useful for studying cache behaviour against row-major
//! scans.
//!
//! # Core Types
//!
//! - [`GridStore`]: owned `rows x cols` grid of scalars
//! - [`Size`] / [`Offset`] / [`Bases`]: value types for regions and block factors
//! - [`Plan`] / [`PlanBuilder`]: validated block-recursive coordinate sequences
//! - [`AccessOrder`]: row-major or block-recursive index-to-cell mapping
//!
//! # Primary API
//!
//! - [`make_grid`]: grid holding `0..rows*cols` in row-major order
//! - [`build_shuffle_major_plan`]: plan for a `(size, bases)` pair
//! - [`flatten`]: read a grid's values in any [`AccessOrder`]
//! - [`unflatten`]: scatter a flattened sequence back into a grid
//!
//! # Example
//!
//! ```rust
//! use shuffle_major::{flatten, make_grid, AccessOrder, Bases, GridStore};
//!
//! let grid: GridStore<u32> = make_grid(4, 4).unwrap();
//! let order = AccessOrder::block_recursive(grid.size(), Bases::new(2, 2).unwrap()).unwrap();
//! let flat = flatten(&grid, &order).unwrap();
//! assert_eq!(&flat[..8], &[0, 1, 4, 5, 2, 3, 6, 7]);
//! ```
//!
//! # Uneven sizes
//!
//! The recursion uses floor division, so the plan is a permutation of the
//! grid only when `rows = block_rows^d` and `cols = block_cols^d` for a
//! common depth `d`. Other sizes fail with [`GridError::MalformedPlan`];
//! [`build_unchecked`] returns the raw sequence for inspection.
//!
//! # Tracing
//!
//! Set `SHUFFLE_TRACE=1` to print one-line plan and flatten diagnostics to stderr.

mod flatten;

pub use flatten::{flatten, flatten_row_major, unflatten};

pub use grid_order::{
    build_shuffle_major_plan, build_unchecked, recursion_depth, validate_plan, AccessOrder, Bases,
    Plan, PlanBuilder, MAX_DEPTH,
};
pub use grid_view::{make_grid, trace_enabled, GridError, GridStore, Offset, Result, Size};
