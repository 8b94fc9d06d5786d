//! Traversal orders over two-dimensional grids.
//!
//! An [`AccessOrder`] maps a linear visitation index to a `(row, col)` cell.
//! Two orders are provided:
//!
//! - [`AccessOrder::RowMajor`]: plain `(k / cols, k % cols)` arithmetic
//! - [`AccessOrder::BlockRecursive`]: lookup into a precomputed [`Plan`]
//!
//! Block-recursive ("shuffle-major") plans are built by [`PlanBuilder`]: the
//! grid is split into `block_rows x block_cols` super-blocks, each of which
//! is split the same way, until one more split would give a 1x1 region.
//!
//! # Example
//!
//! ```rust
//! use grid_order::{build_shuffle_major_plan, Bases};
//! use grid_view::Size;
//!
//! let size = Size::new(4, 4).unwrap();
//! let plan = build_shuffle_major_plan(size, Bases::new(2, 2).unwrap()).unwrap();
//! assert_eq!(&plan.coords()[..4], &[(0, 0), (0, 1), (1, 0), (1, 1)]);
//! assert_eq!(plan.get(4), Some((0, 2)));
//! ```

mod access;
mod bases;
mod plan;

pub use access::AccessOrder;
pub use bases::Bases;
pub use plan::{
    build_shuffle_major_plan, build_unchecked, recursion_depth, validate_plan, Plan, PlanBuilder,
    MAX_DEPTH,
};
