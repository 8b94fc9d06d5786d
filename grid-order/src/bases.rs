//! Per-level block factors.

use grid_view::{GridError, Result, Size};
use std::fmt;

/// Branching factor `(block_rows, block_cols)` applied at every recursion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bases {
    pub block_rows: usize,
    pub block_cols: usize,
}

impl Default for Bases {
    fn default() -> Self {
        Self {
            block_rows: 4,
            block_cols: 4,
        }
    }
}

impl Bases {
    /// Create block factors, rejecting zero.
    pub fn new(block_rows: usize, block_cols: usize) -> Result<Self> {
        if block_rows == 0 || block_cols == 0 {
            return Err(zero_factor(block_rows, block_cols));
        }
        Ok(Self {
            block_rows,
            block_cols,
        })
    }

    /// Check these factors against the region they will subdivide.
    ///
    /// A factor of 1 never shrinks its axis, so it is only accepted when that
    /// axis already has extent 1; anything else would recurse forever.
    pub fn validate_for(&self, size: Size) -> Result<()> {
        if self.block_rows == 0 || self.block_cols == 0 {
            return Err(zero_factor(self.block_rows, self.block_cols));
        }
        let row_stalls = self.block_rows == 1 && size.rows > 1;
        let col_stalls = self.block_cols == 1 && size.cols > 1;
        if row_stalls || col_stalls {
            return Err(GridError::InvalidBases {
                block_rows: self.block_rows,
                block_cols: self.block_cols,
                reason: format!("a factor of 1 never shrinks size {size} toward 1x1"),
            });
        }
        Ok(())
    }

    /// Size of each child block one level down: floor division, clamped to 1.
    #[inline]
    pub fn subdivide(&self, size: Size) -> Size {
        Size {
            rows: (size.rows / self.block_rows.max(1)).max(1),
            cols: (size.cols / self.block_cols.max(1)).max(1),
        }
    }

    /// Number of children per level, `block_rows * block_cols`.
    #[inline]
    pub fn fan_out(&self) -> Option<usize> {
        self.block_rows.checked_mul(self.block_cols)
    }
}

fn zero_factor(block_rows: usize, block_cols: usize) -> GridError {
    GridError::InvalidBases {
        block_rows,
        block_cols,
        reason: "block factors must be at least 1".to_string(),
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.block_rows, self.block_cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        let err = Bases::new(0, 2).unwrap_err();
        assert!(matches!(err, GridError::InvalidBases { block_rows: 0, .. }));
        // No size is involved, so none is reported.
        assert_eq!(
            err.to_string(),
            "invalid bases 0x2: block factors must be at least 1"
        );
        assert!(Bases::new(2, 0).is_err());
        assert!(Bases::new(1, 1).is_ok());
    }

    #[test]
    fn test_default_is_four_by_four() {
        assert_eq!(Bases::default(), Bases::new(4, 4).unwrap());
    }

    #[test]
    fn test_subdivide_floor_and_clamp() {
        let bases = Bases::new(2, 3).unwrap();
        assert_eq!(bases.subdivide(Size::new(8, 9).unwrap()), Size { rows: 4, cols: 3 });
        assert_eq!(bases.subdivide(Size::new(5, 7).unwrap()), Size { rows: 2, cols: 2 });
        assert_eq!(bases.subdivide(Size::new(1, 2).unwrap()), Size::UNIT);
    }

    #[test]
    fn test_validate_for_unit_factor() {
        let bases = Bases::new(1, 2).unwrap();
        // rows never shrink with factor 1
        let err = bases.validate_for(Size::new(4, 4).unwrap()).unwrap_err();
        assert!(err.to_string().contains("never shrinks size 4x4"));
        assert!(bases.validate_for(Size::new(1, 8).unwrap()).is_ok());

        let unit = Bases::new(1, 1).unwrap();
        assert!(unit.validate_for(Size::UNIT).is_ok());
        assert!(unit.validate_for(Size::new(2, 1).unwrap()).is_err());
    }

    #[test]
    fn test_validate_for_literal_zero() {
        let bases = Bases {
            block_rows: 0,
            block_cols: 2,
        };
        assert!(matches!(
            bases.validate_for(Size::new(4, 4).unwrap()),
            Err(GridError::InvalidBases { block_rows: 0, block_cols: 2, .. })
        ));
    }
}
