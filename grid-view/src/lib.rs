//! Owned grid storage and shape types for two-dimensional traversal planning.
//!
//! This crate holds the data side of the `shuffle-major` workspace:
//!
//! - [`GridStore`]: an owned `rows x cols` grid of scalars, stored row-major
//! - [`Size`] / [`Offset`]: value types describing a rectangular region
//! - [`GridError`]: the error type shared by every crate in the workspace
//!
//! # Dependency graph
//!
//! ```text
//! grid-view -> grid-order -> shuffle-major
//! ```

mod grid;
mod shape;

pub use grid::{make_grid, GridStore};
pub use shape::{Offset, Size};

/// Returns true when `SHUFFLE_TRACE=1`, enabling one-line diagnostics on stderr.
#[inline]
pub fn trace_enabled() -> bool {
    matches!(std::env::var("SHUFFLE_TRACE"), Ok(ref v) if v == "1")
}

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while building grids, plans, or flattening.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A grid or plan was requested with a zero extent.
    #[error("invalid dimension: rows={rows}, cols={cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Block factors are zero, or cannot shrink the given size toward 1x1.
    #[error("invalid bases {block_rows}x{block_cols}: {reason}")]
    InvalidBases {
        block_rows: usize,
        block_cols: usize,
        reason: String,
    },

    /// A linear index or a cell coordinate lies outside the valid range.
    #[error("index {index:?} out of range for shape {shape:?}")]
    IndexOutOfRange { index: Vec<usize>, shape: Vec<usize> },

    /// A coordinate sequence is not a permutation of the grid's cells.
    #[error("malformed plan for size {rows}x{cols}: {reason}")]
    MalformedPlan {
        rows: usize,
        cols: usize,
        reason: String,
    },

    /// The raw block-recursive sequence is too long to materialize.
    #[error("raw plan for size {rows}x{cols} needs {len} coordinates, limit is {limit}")]
    PlanTooLarge {
        rows: usize,
        cols: usize,
        len: usize,
        limit: usize,
    },

    /// Memory for a coordinate sequence could not be reserved.
    #[error("failed to allocate {len} plan coordinates")]
    AllocationFailed { len: usize },

    /// Two shapes that must agree do not.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// `rows * cols` does not fit in `usize`.
    #[error("size overflow: {rows}x{cols} cells do not fit in usize")]
    SizeOverflow { rows: usize, cols: usize },

    /// A sequential value could not be represented in the scalar type.
    #[error("failed to convert {value} into the grid's scalar type")]
    ScalarConversion { value: usize },
}

/// Result type for grid and plan operations.
pub type Result<T> = std::result::Result<T, GridError>;
