//! Direction masks describing which grid cells share a road
//!
//! A mask for an `x` by `y` grid holds `x + 1` rows of `y + 1` cells. Row 0
//! and column 0 stay zero so that the west and north lookups of the first
//! real row and column never leave the matrix. Real cells start at `[1][1]`.
//!
//! ```text
//! {0, 0,             0,            0            },
//! {0, EAST,          WEST,         SOUTH        },
//! {0, SOUTH,         0,            NORTH | SOUTH},
//! {0, EAST | NORTH,  WEST | EAST,  WEST | NORTH },
//! ```

use super::error::{InvasionError, Result};
use super::names::CITY_NAMES;
use super::random::RandomSource;
use super::types::{Direction, EAST, NORTH, SOUTH, WEST};

/// Matrix of direction bit flags, padded with a zero row and column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionMask {
    cells: Vec<Vec<u8>>,
}

impl DirectionMask {
    /// Wrap an existing padded matrix, e.g. one built by hand
    ///
    /// The matrix is taken as-is: nothing checks that it is symmetric.
    pub fn from_rows(cells: Vec<Vec<u8>>) -> Self {
        Self { cells }
    }

    /// Generate a random mask for an `x` by `y` grid sized against the city name pool
    pub fn generate<R: RandomSource>(x: usize, y: usize, rng: &mut R) -> Result<Self> {
        Self::generate_with_capacity(x, y, CITY_NAMES.len(), rng)
    }

    /// Generate a random mask for an `x` by `y` grid
    ///
    /// Fails when either side is zero or when the grid has more cells than
    /// `capacity` names to label them with.
    pub fn generate_with_capacity<R: RandomSource>(
        x: usize,
        y: usize,
        capacity: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if x == 0 || y == 0 {
            return Err(InvasionError::InvalidInput(format!(
                "map dimensions must be non-zero, got {}x{}",
                x, y
            )));
        }
        let cell_count = x.checked_mul(y).unwrap_or(usize::MAX);
        if cell_count > capacity {
            return Err(InvasionError::RequestTooLarge {
                requested: cell_count,
                available: capacity,
            });
        }

        let mut cells = vec![vec![0u8; y + 1]; x + 1];
        for i in 1..=x {
            for j in 1..=y {
                let mut value = 0;

                // Roads owned by the west and north cells are already decided
                if cells[i][j - 1] & EAST != 0 {
                    value |= WEST;
                }
                if cells[i - 1][j] & SOUTH != 0 {
                    value |= NORTH;
                }

                if j < y && rng.generate_num(2) != 0 {
                    value |= EAST;
                }
                if i < x && rng.generate_num(2) != 0 {
                    value |= SOUTH;
                }

                cells[i][j] = value;
            }
        }

        log::debug!("Generated {}x{} direction mask", x, y);
        Ok(Self { cells })
    }

    /// Number of real rows (excluding the padding row)
    pub fn rows(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Number of real columns (excluding the padding column)
    pub fn columns(&self) -> usize {
        self.cells
            .first()
            .map(|row| row.len().saturating_sub(1))
            .unwrap_or(0)
    }

    /// Raw mask value at `(i, j)`, 0 when out of range
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the cell at `(i, j)` has a road in `direction`
    pub fn has(&self, i: usize, j: usize, direction: Direction) -> bool {
        self.get(i, j) & direction.bit() != 0
    }

    /// The padded matrix, row by row
    pub fn as_rows(&self) -> &[Vec<u8>] {
        &self.cells
    }
}
