//! Block-recursive ("shuffle-major") plan construction.
//!
//! The plan for `(size, bases)` is built top-down:
//! 1. Split the region into `block_rows x block_cols` children of size
//!    `bases.subdivide(size)`
//! 2. If the child size is 1x1, emit the `block_rows x block_cols` leaf
//!    coordinates at the current offset
//! 3. Otherwise recurse into each child, outer loop over block rows, inner
//!    loop over block columns
//!
//! The result covers every cell exactly once only when each level divides
//! evenly, i.e. `rows = block_rows^d` and `cols = block_cols^d` for the same
//! depth `d`. Other inputs are rejected with `MalformedPlan`.

use crate::bases::Bases;
use grid_view::{trace_enabled, GridError, Offset, Result, Size};

/// Upper bound on recursion levels. Every axis with factor >= 2 at least
/// halves per level, so 64 levels cover any `usize` extent.
pub const MAX_DEPTH: usize = usize::BITS as usize;

/// A validated visitation order: every cell of `size` appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    size: Size,
    coords: Vec<(usize, usize)>,
}

impl Plan {
    /// Wrap a coordinate sequence after checking it is a permutation of `size`.
    pub fn from_coords(size: Size, coords: Vec<(usize, usize)>) -> Result<Self> {
        validate_plan(size, &coords)?;
        Ok(Self { size, coords })
    }

    /// The grid size this plan was built for.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinate visited at step `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(usize, usize)> {
        self.coords.get(index).copied()
    }

    #[inline]
    pub fn coords(&self) -> &[(usize, usize)] {
        &self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.coords.iter().copied()
    }

    pub fn into_coords(self) -> Vec<(usize, usize)> {
        self.coords
    }

    /// The plan as row-major linear offsets `r * cols + c`.
    pub fn linear_indices(&self) -> Vec<usize> {
        let cols = self.size.cols;
        self.coords.iter().map(|&(r, c)| r * cols + c).collect()
    }

    /// Inverse permutation: `inverse()[r * cols + c]` is the step at which
    /// cell `(r, c)` is visited.
    ///
    /// Scattering a block-recursive flattening through this table restores
    /// row-major order.
    pub fn inverse(&self) -> Vec<usize> {
        let mut inv = vec![0usize; self.coords.len()];
        for (step, pos) in self.linear_indices().into_iter().enumerate() {
            inv[pos] = step;
        }
        inv
    }
}

/// Check that `coords` visits every cell of `size` exactly once.
///
/// # Errors
/// `MalformedPlan` naming the first problem found: wrong length, a
/// coordinate outside the grid, or a repeated coordinate.
pub fn validate_plan(size: Size, coords: &[(usize, usize)]) -> Result<()> {
    size.validate()?;
    let total = size.cell_count()?;
    if coords.len() != total {
        return Err(malformed(
            size,
            format!("{} coordinates for {} cells", coords.len(), total),
        ));
    }

    // Right length and no repeats means every cell is covered.
    let mut seen = vec![false; total];
    for (step, &(r, c)) in coords.iter().enumerate() {
        if !size.contains(r, c) {
            return Err(malformed(
                size,
                format!("step {step} visits ({r}, {c}) outside the grid"),
            ));
        }
        if std::mem::replace(&mut seen[r * size.cols + c], true) {
            return Err(malformed(size, format!("step {step} revisits ({r}, {c})")));
        }
    }
    Ok(())
}

fn malformed(size: Size, reason: String) -> GridError {
    GridError::MalformedPlan {
        rows: size.rows,
        cols: size.cols,
        reason,
    }
}

/// Number of recursion levels needed for `(size, bases)`, leaf level included.
///
/// Computed from the sizes alone, so it works for grids far too large to
/// materialize.
///
/// # Errors
/// `InvalidDimension` / `InvalidBases` for bad inputs.
pub fn recursion_depth(size: Size, bases: Bases) -> Result<usize> {
    size.validate()?;
    bases.validate_for(size)?;

    let mut current = size;
    for depth in 1..=MAX_DEPTH {
        let child = bases.subdivide(current);
        if child == Size::UNIT {
            return Ok(depth);
        }
        current = child;
    }
    // Unreachable for validated bases.
    Err(GridError::InvalidBases {
        block_rows: bases.block_rows,
        block_cols: bases.block_cols,
        reason: format!("size {size} does not reach 1x1 within {MAX_DEPTH} levels"),
    })
}

/// Length of the raw sequence: every level fans out by `block_rows * block_cols`.
fn raw_len(bases: Bases, depth: usize) -> Option<usize> {
    let exp = u32::try_from(depth).ok()?;
    bases.fan_out()?.checked_pow(exp)
}

/// Builds block-recursive plans for a fixed pair of block factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanBuilder {
    bases: Bases,
}

impl PlanBuilder {
    pub fn new(bases: Bases) -> Self {
        Self { bases }
    }

    #[inline]
    pub fn bases(&self) -> Bases {
        self.bases
    }

    /// Build and validate the plan for `size`.
    ///
    /// The raw length is known before any coordinate is generated, so
    /// unevenly dividing sizes are rejected without materializing anything.
    ///
    /// # Errors
    /// - `InvalidDimension` / `InvalidBases` for bad inputs
    /// - `MalformedPlan` when the result would not be a permutation
    /// - `AllocationFailed` when the coordinates cannot be reserved
    pub fn build(&self, size: Size) -> Result<Plan> {
        let depth = recursion_depth(size, self.bases)?;
        let total = size.cell_count()?;

        let expected = raw_len(self.bases, depth);
        if expected != Some(total) {
            if trace_enabled() {
                eprintln!(
                    "plan: rejecting size={size} bases={} depth={depth} raw_len={expected:?} cells={total}",
                    self.bases
                );
            }
            let reason = match expected {
                Some(len) => format!(
                    "{len} coordinates for {total} cells; {size} is not divided evenly by {} at every level",
                    self.bases
                ),
                None => "coordinate count overflows usize".to_string(),
            };
            return Err(malformed(size, reason));
        }

        let coords = self.emit(size, total)?;
        if trace_enabled() {
            eprintln!(
                "plan: size={size} bases={} depth={depth} len={}",
                self.bases,
                coords.len()
            );
        }
        Plan::from_coords(size, coords)
    }

    /// Build the raw sequence without the permutation check.
    ///
    /// For unevenly dividing sizes the result may be longer or shorter than
    /// the grid, repeat cells, or step outside it.
    ///
    /// The raw length may exceed the cell count by at most one level of
    /// fan-out (`rows * cols * block_rows * block_cols`). Grids of very
    /// unequal shape, e.g. a single long row, overshoot far beyond that and
    /// are refused.
    ///
    /// # Errors
    /// - `InvalidDimension` / `InvalidBases` for bad inputs
    /// - `SizeOverflow` when the raw length does not fit in `usize`
    /// - `PlanTooLarge` when the raw length exceeds the limit above
    /// - `AllocationFailed` when the coordinates cannot be reserved
    pub fn build_unchecked(&self, size: Size) -> Result<Vec<(usize, usize)>> {
        let depth = recursion_depth(size, self.bases)?;
        let len = raw_len(self.bases, depth).ok_or(GridError::SizeOverflow {
            rows: size.rows,
            cols: size.cols,
        })?;
        let limit = size
            .rows
            .saturating_mul(size.cols)
            .saturating_mul(self.bases.fan_out().unwrap_or(usize::MAX));
        if len > limit {
            if trace_enabled() {
                eprintln!(
                    "plan: refusing raw size={size} bases={} len={len} limit={limit}",
                    self.bases
                );
            }
            return Err(GridError::PlanTooLarge {
                rows: size.rows,
                cols: size.cols,
                len,
                limit,
            });
        }
        self.emit(size, len)
    }

    fn emit(&self, size: Size, len: usize) -> Result<Vec<(usize, usize)>> {
        let mut coords = Vec::new();
        coords
            .try_reserve_exact(len)
            .map_err(|_| GridError::AllocationFailed { len })?;
        self.subdivide_into(&mut coords, size, Offset::ORIGIN);
        Ok(coords)
    }

    fn subdivide_into(&self, coords: &mut Vec<(usize, usize)>, size: Size, offset: Offset) {
        let Bases {
            block_rows,
            block_cols,
        } = self.bases;
        let child = self.bases.subdivide(size);

        if child == Size::UNIT {
            for i in 0..block_rows {
                for j in 0..block_cols {
                    coords.push((offset.row0 + i, offset.col0 + j));
                }
            }
            return;
        }

        for i in 0..block_rows {
            for j in 0..block_cols {
                let child_offset =
                    Offset::new(offset.row0 + i * child.rows, offset.col0 + j * child.cols);
                self.subdivide_into(coords, child, child_offset);
            }
        }
    }
}

/// Build the validated block-recursive plan for `(size, bases)`.
pub fn build_shuffle_major_plan(size: Size, bases: Bases) -> Result<Plan> {
    PlanBuilder::new(bases).build(size)
}

/// Build the raw block-recursive sequence for `(size, bases)` without the
/// permutation check.
pub fn build_unchecked(size: Size, bases: Bases) -> Result<Vec<(usize, usize)>> {
    PlanBuilder::new(bases).build_unchecked(size)
}
